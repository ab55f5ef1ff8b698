use serde::{Deserialize, Serialize};

use crate::domain::menu::MenuId;
use super::value_objects::OrderTableId;

// ============================================================================
// Order Requests - Represent caller intent
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemCreateRequest {
    pub menu_id: MenuId,
    /// Passed through to the line item unchecked, unlike menu product quantities.
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateRequest {
    pub order_table_id: OrderTableId,
    pub order_line_items: Vec<OrderLineItemCreateRequest>,
}

impl OrderCreateRequest {
    pub fn menu_ids(&self) -> Vec<MenuId> {
        self.order_line_items.iter().map(|item| item.menu_id).collect()
    }
}

/// Status arrives as raw text and is parsed by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderChangeStatusRequest {
    pub order_status: String,
}

impl OrderChangeStatusRequest {
    pub fn new(order_status: impl Into<String>) -> Self {
        Self {
            order_status: order_status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialization() {
        let table_id = OrderTableId::new();
        let menu_id = MenuId::new();
        let json = serde_json::json!({
            "orderTableId": table_id,
            "orderLineItems": [{ "menuId": menu_id, "quantity": 2 }]
        });

        let request: OrderCreateRequest = serde_json::from_value(json).unwrap();

        assert_eq!(request.order_table_id, table_id);
        assert_eq!(request.menu_ids(), vec![menu_id]);
        assert_eq!(request.order_line_items[0].quantity, 2);
    }

    #[test]
    fn test_menu_ids_keeps_duplicates() {
        let menu_id = MenuId::new();
        let request = OrderCreateRequest {
            order_table_id: OrderTableId::new(),
            order_line_items: vec![
                OrderLineItemCreateRequest { menu_id, quantity: 1 },
                OrderLineItemCreateRequest { menu_id, quantity: 3 },
            ],
        };

        assert_eq!(request.menu_ids(), vec![menu_id, menu_id]);
    }
}
