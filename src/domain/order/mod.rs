// ============================================================================
// Order Domain - Business Logic for Order Aggregate
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderId, OrderStatus, OrderLineItem)
// - Order table (OrderTable)
// - Requests (OrderCreateRequest, OrderChangeStatusRequest)
// - Errors (OrderError enum)
// - Aggregate (Order)
// - Response views (OrderResponse)
// - Service (OrderService: create, list, change status)
//
// ============================================================================

pub mod value_objects;
pub mod table;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod response;
pub mod service;

// Re-export for convenience
pub use value_objects::*;
pub use table::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use response::*;
pub use service::*;
