use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{OrderId, OrderLineItem, OrderStatus, OrderTableId};

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    // Identity
    pub id: OrderId,

    // Current State
    pub status: OrderStatus,
    pub order_table_id: OrderTableId,
    pub order_line_items: Vec<OrderLineItem>,

    // Audit Trail
    pub ordered_time: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// New order in `Cooking`, ready to be saved.
    pub fn for_save(order_line_items: Vec<OrderLineItem>, order_table_id: OrderTableId) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::new(),
            status: OrderStatus::Cooking,
            order_table_id,
            order_line_items,
            ordered_time: now,
            updated_at: now,
        }
    }

    /// Any status may follow any other.
    pub fn change_order_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::{MenuId, Price};
    use rust_decimal::Decimal;

    fn line_item() -> OrderLineItem {
        let price = Price::new(Decimal::from(16000)).unwrap();
        OrderLineItem::for_save(2, "Fried chicken", price, MenuId::new())
    }

    #[test]
    fn test_for_save_starts_cooking() {
        let table_id = OrderTableId::new();
        let order = Order::for_save(vec![line_item()], table_id);

        assert_eq!(order.status, OrderStatus::Cooking);
        assert_eq!(order.order_table_id, table_id);
        assert_eq!(order.order_line_items.len(), 1);
        assert_eq!(order.ordered_time, order.updated_at);
    }

    #[test]
    fn test_change_order_status_allows_any_transition() {
        let mut order = Order::for_save(vec![line_item()], OrderTableId::new());

        order.change_order_status(OrderStatus::Completion);
        assert_eq!(order.status, OrderStatus::Completion);

        order.change_order_status(OrderStatus::Cooking);
        assert_eq!(order.status, OrderStatus::Cooking);

        order.change_order_status(OrderStatus::Meal);
        assert_eq!(order.status, OrderStatus::Meal);
        assert!(order.updated_at >= order.ordered_time);
    }

    #[test]
    fn test_order_serialization() {
        let order = Order::for_save(vec![line_item()], OrderTableId::new());

        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(order, deserialized);
    }
}
