use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::menu::{MenuId, Price};
use super::aggregate::Order;
use super::value_objects::{OrderId, OrderLineItem, OrderStatus, OrderTableId};

// ============================================================================
// Order Response Views
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemResponse {
    pub menu_id: MenuId,
    pub name: String,
    pub price: Price,
    pub quantity: i64,
}

impl From<&OrderLineItem> for OrderLineItemResponse {
    fn from(item: &OrderLineItem) -> Self {
        Self {
            menu_id: item.menu_id,
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: OrderId,
    pub order_table_id: OrderTableId,
    pub order_status: OrderStatus,
    pub ordered_time: DateTime<Utc>,
    pub order_line_items: Vec<OrderLineItemResponse>,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            order_table_id: order.order_table_id,
            order_status: order.status,
            ordered_time: order.ordered_time,
            order_line_items: order
                .order_line_items
                .iter()
                .map(OrderLineItemResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_response_mirrors_order() {
        let price = Price::new(Decimal::from(17000)).unwrap();
        let item = OrderLineItem::for_save(1, "Seasoned chicken", price, MenuId::new());
        let order = Order::for_save(vec![item.clone()], OrderTableId::new());

        let response = OrderResponse::from(&order);

        assert_eq!(response.id, order.id);
        assert_eq!(response.order_table_id, order.order_table_id);
        assert_eq!(response.order_status, OrderStatus::Cooking);
        assert_eq!(response.order_line_items, vec![OrderLineItemResponse::from(&item)]);
    }

    #[test]
    fn test_response_json_shape() {
        let order = Order::for_save(vec![], OrderTableId::new());

        let json = serde_json::to_value(OrderResponse::from(&order)).unwrap();

        assert_eq!(json["orderStatus"], "COOKING");
        assert_eq!(json["orderTableId"], order.order_table_id.0.to_string());
        assert!(json["orderLineItems"].as_array().unwrap().is_empty());
    }
}
