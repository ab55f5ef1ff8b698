// ============================================================================
// kitchenpos - restaurant point-of-sale backend
// ============================================================================
//
// - domain/  - menus, price aggregation, orders and the order service
// - store/   - repository traits and in-memory adapters
// - metrics/ - Prometheus metrics and their HTTP endpoint
// - config/  - TOML application configuration
//
// ============================================================================

pub mod config;
pub mod domain;
pub mod metrics;
pub mod store;
