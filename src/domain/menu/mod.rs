// ============================================================================
// Menu Domain
// ============================================================================
//
// - Value objects (MenuId, Price, MenuProductLine, MenuProducts)
// - Errors (MenuError)
// - Aggregate (Menu)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;

pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
