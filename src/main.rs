use std::sync::Arc;

use rust_decimal::Decimal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kitchenpos::config::AppConfig;
use kitchenpos::domain::menu::{Menu, MenuProductLine, Price, ProductId};
use kitchenpos::domain::order::{
    OrderChangeStatusRequest, OrderCreateRequest, OrderLineItemCreateRequest, OrderService,
    OrderTable,
};
use kitchenpos::metrics::{self, Metrics};
use kitchenpos::store::{InMemoryMenuRepository, InMemoryOrderRepository, InMemoryOrderTableRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // Structured logging; RUST_LOG overrides the configured filter
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    tracing::info!("🚀 Starting kitchenpos order service demo");

    // === 1. Initialize Prometheus metrics ===
    let metrics = Arc::new(Metrics::new()?);

    if config.metrics.enabled {
        // Metrics server runs on its own actix system in a background thread
        let registry = Arc::new(metrics.registry().clone());
        let port = config.metrics.port;
        std::thread::spawn(move || {
            let result = actix_web::rt::System::new()
                .block_on(metrics::start_metrics_server(registry, port));
            if let Err(e) = result {
                tracing::error!("Metrics server error: {}", e);
            }
        });
    }

    // === 2. Seed in-memory storage ===
    let menus = Arc::new(InMemoryMenuRepository::new());
    let tables = Arc::new(InMemoryOrderTableRepository::new());
    let orders = Arc::new(InMemoryOrderRepository::new());

    let fried = Price::new(Decimal::from(16000))?;
    let seasoned = Price::new(Decimal::from(17000))?;
    let half_and_half = Menu::new(
        "Half fried, half seasoned",
        Price::new(Decimal::from(32000))?,
        vec![
            MenuProductLine::new(ProductId::new(), 1, fried)?,
            MenuProductLine::new(ProductId::new(), 1, seasoned)?,
        ],
    );
    let double_fried = Menu::new(
        "Double fried chicken",
        Price::new(Decimal::from(30000))?,
        vec![MenuProductLine::new(ProductId::new(), 2, fried)?],
    );

    for menu in [&half_and_half, &double_fried] {
        let product_total = menu.product_total()?;
        tracing::info!(
            menu_id = %menu.id,
            name = %menu.name,
            price = %menu.price,
            product_total = %product_total,
            "Seeded menu"
        );
    }
    menus.insert(half_and_half.clone()).await;
    menus.insert(double_fried.clone()).await;

    let occupied = OrderTable::new(3, false);
    let empty = OrderTable::new(0, true);
    tables.insert(occupied.clone()).await;
    tables.insert(empty.clone()).await;

    let service = OrderService::new(menus, tables, orders, metrics.clone());

    // === 3. Demonstrate the order lifecycle ===
    let created = service
        .create(OrderCreateRequest {
            order_table_id: occupied.id,
            order_line_items: vec![
                OrderLineItemCreateRequest { menu_id: half_and_half.id, quantity: 1 },
                OrderLineItemCreateRequest { menu_id: double_fried.id, quantity: 2 },
            ],
        })
        .await?;
    tracing::info!("Created order: {}", serde_json::to_string(&created)?);

    // Rejected: the table is empty
    if let Err(e) = service
        .create(OrderCreateRequest {
            order_table_id: empty.id,
            order_line_items: vec![OrderLineItemCreateRequest {
                menu_id: double_fried.id,
                quantity: 1,
            }],
        })
        .await
    {
        tracing::info!(kind = ?e.kind(), "Expected rejection: {}", e);
    }

    for status in ["MEAL", "COMPLETION"] {
        let updated = service
            .change_order_status(created.id, OrderChangeStatusRequest::new(status))
            .await?;
        tracing::info!("Updated order: {}", serde_json::to_string(&updated)?);
    }

    let all = service.list().await?;
    tracing::info!(count = all.len(), "Orders: {}", serde_json::to_string_pretty(&all)?);

    if config.metrics.enabled {
        tracing::info!(
            "⏳ Metrics available on port {}; press Ctrl+C to exit",
            config.metrics.port
        );
        tokio::signal::ctrl_c().await?;
    }

    tracing::info!("🎉 Demo complete!");

    Ok(())
}
