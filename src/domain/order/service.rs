use std::sync::Arc;
use std::time::Instant;

use crate::metrics::Metrics;
use crate::store::{MenuRepository, OrderRepository, OrderTableRepository, StoreError};

use super::aggregate::Order;
use super::commands::{OrderChangeStatusRequest, OrderCreateRequest, OrderLineItemCreateRequest};
use super::errors::OrderError;
use super::response::OrderResponse;
use super::table::OrderTable;
use super::value_objects::{OrderId, OrderLineItem, OrderStatus, OrderTableId};

// ============================================================================
// Order Service
// ============================================================================
//
// Orchestrates: Request → Validate → Build Order → Save → Response
//
// All validation happens before the single write, so a failed request
// leaves storage untouched.
//
// ============================================================================

pub struct OrderService {
    menus: Arc<dyn MenuRepository>,
    order_tables: Arc<dyn OrderTableRepository>,
    orders: Arc<dyn OrderRepository>,
    metrics: Arc<Metrics>,
}

impl OrderService {
    pub fn new(
        menus: Arc<dyn MenuRepository>,
        order_tables: Arc<dyn OrderTableRepository>,
        orders: Arc<dyn OrderRepository>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            menus,
            order_tables,
            orders,
            metrics,
        }
    }

    /// Validate the request against stored menus and table, then persist a new order
    pub async fn create(&self, request: OrderCreateRequest) -> Result<OrderResponse, OrderError> {
        let started = Instant::now();
        let result = self.try_create(request).await;
        self.finish("create", started, &result);

        let response = result?;
        self.metrics.record_order_created();
        tracing::info!(
            order_id = %response.id,
            order_table_id = %response.order_table_id,
            line_items = response.order_line_items.len(),
            "✅ Order created"
        );

        Ok(response)
    }

    async fn try_create(&self, request: OrderCreateRequest) -> Result<OrderResponse, OrderError> {
        self.validate_all_menus_exist(&request).await?;
        let order_line_items = self.make_order_line_items(&request.order_line_items).await?;
        let order_table = self.load_order_table(request.order_table_id).await?;
        validate_not_empty(&order_table)?;

        let order = Order::for_save(order_line_items, order_table.id);
        let saved = self.orders.save(order).await?;

        Ok(OrderResponse::from(&saved))
    }

    async fn validate_all_menus_exist(&self, request: &OrderCreateRequest) -> Result<(), OrderError> {
        let menu_ids = request.menu_ids();
        let found = self.menus.count_by_ids(&menu_ids).await?;

        if found != menu_ids.len() {
            return Err(OrderError::MissingMenus {
                requested: menu_ids.len(),
                found,
            });
        }

        Ok(())
    }

    async fn make_order_line_items(
        &self,
        requests: &[OrderLineItemCreateRequest],
    ) -> Result<Vec<OrderLineItem>, OrderError> {
        let mut order_line_items = Vec::with_capacity(requests.len());

        for request in requests {
            let menu = self
                .menus
                .get_by_id(request.menu_id)
                .await
                .map_err(|e| not_found_or(e, || OrderError::MenuNotFound(request.menu_id)))?;

            order_line_items.push(OrderLineItem::for_save(
                request.quantity,
                menu.name,
                menu.price,
                menu.id,
            ));
        }

        Ok(order_line_items)
    }

    async fn load_order_table(&self, id: OrderTableId) -> Result<OrderTable, OrderError> {
        self.order_tables
            .get_by_id(id)
            .await
            .map_err(|e| not_found_or(e, || OrderError::OrderTableNotFound(id)))
    }

    /// All stored orders, in whatever order storage returns them
    pub async fn list(&self) -> Result<Vec<OrderResponse>, OrderError> {
        let started = Instant::now();
        let result = self
            .orders
            .find_all()
            .await
            .map(|orders| orders.iter().map(OrderResponse::from).collect::<Vec<_>>())
            .map_err(OrderError::from);
        self.finish("list", started, &result);

        let responses = result?;
        tracing::debug!(count = responses.len(), "Listed orders");
        Ok(responses)
    }

    /// Load, apply the requested status, save
    pub async fn change_order_status(
        &self,
        order_id: OrderId,
        request: OrderChangeStatusRequest,
    ) -> Result<OrderResponse, OrderError> {
        let started = Instant::now();
        let result = self.try_change_order_status(order_id, request).await;
        self.finish("change_status", started, &result);

        result.map(|(previous, response)| {
            self.metrics
                .record_status_change(previous.as_str(), response.order_status.as_str());
            tracing::info!(
                order_id = %order_id,
                from = %previous,
                to = %response.order_status,
                "✅ Order status changed"
            );
            response
        })
    }

    async fn try_change_order_status(
        &self,
        order_id: OrderId,
        request: OrderChangeStatusRequest,
    ) -> Result<(OrderStatus, OrderResponse), OrderError> {
        let mut order = self
            .orders
            .get_by_id(order_id)
            .await
            .map_err(|e| not_found_or(e, || OrderError::OrderNotFound(order_id)))?;

        let status: OrderStatus = request.order_status.parse()?;
        let previous = order.status;
        order.change_order_status(status);

        let saved = self.orders.save(order).await?;
        Ok((previous, OrderResponse::from(&saved)))
    }

    fn finish<T>(&self, operation: &str, started: Instant, result: &Result<T, OrderError>) {
        self.metrics
            .observe_duration(operation, started.elapsed().as_secs_f64());

        if let Err(e) = result {
            self.metrics.record_rejection(operation, e.reason());
            tracing::warn!(
                operation = operation,
                reason = e.reason(),
                kind = ?e.kind(),
                error = %e,
                "Order request rejected"
            );
        }
    }
}

fn validate_not_empty(order_table: &OrderTable) -> Result<(), OrderError> {
    if order_table.is_empty() {
        return Err(OrderError::EmptyOrderTable(order_table.id));
    }
    Ok(())
}

/// Replace a store-level NotFound with the domain error, keep other failures as storage errors
fn not_found_or(error: StoreError, not_found: impl FnOnce() -> OrderError) -> OrderError {
    match error {
        StoreError::NotFound { .. } => not_found(),
        other => OrderError::Storage(other),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
