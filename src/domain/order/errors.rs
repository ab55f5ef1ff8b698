use crate::domain::menu::MenuId;
use crate::store::StoreError;
use super::value_objects::{OrderId, OrderTableId};

// ============================================================================
// Order Business Rule Errors
// ============================================================================

/// Coarse classification used by callers to map failures onto responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Referenced item does not exist: requested {requested} menus, found {found}")]
    MissingMenus { requested: usize, found: usize },

    #[error("Menu not found: {0}")]
    MenuNotFound(MenuId),

    #[error("Order table not found: {0}")]
    OrderTableNotFound(OrderTableId),

    #[error("Order table is empty: {0}")]
    EmptyOrderTable(OrderTableId),

    #[error("Invalid order status: {0:?}")]
    InvalidStatus(String),

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::MissingMenus { .. }
            | OrderError::EmptyOrderTable(_)
            | OrderError::InvalidStatus(_) => ErrorKind::Validation,
            OrderError::MenuNotFound(_)
            | OrderError::OrderTableNotFound(_)
            | OrderError::OrderNotFound(_) => ErrorKind::NotFound,
            OrderError::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Short label for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::MissingMenus { .. } => "missing_menus",
            OrderError::MenuNotFound(_) => "menu_not_found",
            OrderError::OrderTableNotFound(_) => "order_table_not_found",
            OrderError::EmptyOrderTable(_) => "empty_order_table",
            OrderError::InvalidStatus(_) => "invalid_status",
            OrderError::OrderNotFound(_) => "order_not_found",
            OrderError::Storage(_) => "storage",
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(OrderError::MissingMenus { requested: 2, found: 1 }.is_validation());
        assert!(OrderError::EmptyOrderTable(OrderTableId::new()).is_validation());
        assert!(OrderError::InvalidStatus("SERVED".into()).is_validation());

        assert!(OrderError::MenuNotFound(MenuId::new()).is_not_found());
        assert!(OrderError::OrderTableNotFound(OrderTableId::new()).is_not_found());
        assert!(OrderError::OrderNotFound(OrderId::new()).is_not_found());

        let storage = OrderError::from(StoreError::Unavailable("connection reset".into()));
        assert_eq!(storage.kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_error_messages() {
        let err = OrderError::MissingMenus { requested: 3, found: 2 };
        assert_eq!(
            err.to_string(),
            "Referenced item does not exist: requested 3 menus, found 2"
        );
        assert_eq!(
            OrderError::InvalidStatus("DONE".into()).to_string(),
            "Invalid order status: \"DONE\""
        );
    }
}
