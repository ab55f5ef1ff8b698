// ============================================================================
// Storage Ports
// ============================================================================
//
// Repository traits the order workflow depends on, plus in-memory adapters.
//
// - MenuRepository       - existence counts and menu lookup
// - OrderTableRepository - table lookup
// - OrderRepository      - order persistence
//
// ============================================================================

mod memory;

use async_trait::async_trait;

use crate::domain::menu::{Menu, MenuId};
use crate::domain::order::{Order, OrderId, OrderTable, OrderTableId};

pub use memory::{InMemoryMenuRepository, InMemoryOrderRepository, InMemoryOrderTableRepository};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Number of distinct ids in `ids` that refer to a stored menu.
    async fn count_by_ids(&self, ids: &[MenuId]) -> StoreResult<usize>;

    async fn get_by_id(&self, id: MenuId) -> StoreResult<Menu>;
}

#[async_trait]
pub trait OrderTableRepository: Send + Sync {
    async fn get_by_id(&self, id: OrderTableId) -> StoreResult<OrderTable>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert or replace by id.
    async fn save(&self, order: Order) -> StoreResult<Order>;

    async fn find_all(&self) -> StoreResult<Vec<Order>>;

    async fn get_by_id(&self, id: OrderId) -> StoreResult<Order>;
}
