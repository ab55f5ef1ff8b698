use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::menu::{Menu, MenuId};
use crate::domain::order::{Order, OrderId, OrderTable, OrderTableId};
use super::{MenuRepository, OrderRepository, OrderTableRepository, StoreError, StoreResult};

// ============================================================================
// In-Memory Repositories
// ============================================================================

#[derive(Debug, Default)]
pub struct InMemoryMenuRepository {
    menus: RwLock<HashMap<MenuId, Menu>>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a menu
    pub async fn insert(&self, menu: Menu) {
        self.menus.write().await.insert(menu.id, menu);
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn count_by_ids(&self, ids: &[MenuId]) -> StoreResult<usize> {
        let menus = self.menus.read().await;
        let distinct: HashSet<&MenuId> = ids.iter().collect();

        Ok(distinct.into_iter().filter(|id| menus.contains_key(*id)).count())
    }

    async fn get_by_id(&self, id: MenuId) -> StoreResult<Menu> {
        self.menus
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Menu", id))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryOrderTableRepository {
    tables: RwLock<HashMap<OrderTableId, OrderTable>>,
}

impl InMemoryOrderTableRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, table: OrderTable) {
        self.tables.write().await.insert(table.id, table);
    }
}

#[async_trait]
impl OrderTableRepository for InMemoryOrderTableRepository {
    async fn get_by_id(&self, id: OrderTableId) -> StoreResult<OrderTable> {
        self.tables
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("OrderTable", id))
    }
}

/// Orders keyed by their time-ordered id, so `find_all` returns creation order.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<BTreeMap<OrderId, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: Order) -> StoreResult<Order> {
        self.orders.write().await.insert(order.id, order.clone());

        tracing::debug!(order_id = %order.id, status = %order.status, "Saved order");
        Ok(order)
    }

    async fn find_all(&self) -> StoreResult<Vec<Order>> {
        Ok(self.orders.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: OrderId) -> StoreResult<Order> {
        self.orders
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Order", id))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
