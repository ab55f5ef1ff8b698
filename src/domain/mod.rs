// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with:
// - Value objects
// - Errors
// - Aggregate implementation
//
// Storage is reached only through the traits in `crate::store`.
//
// ============================================================================

pub mod menu;
pub mod order;
