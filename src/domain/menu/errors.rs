use rust_decimal::Decimal;

// ============================================================================
// Menu Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MenuError {
    #[error("Price cannot be negative: {0}")]
    NegativePrice(Decimal),

    #[error("Invalid product quantity: {0}")]
    NegativeQuantity(i64),

    #[error("Price exceeds the representable amount")]
    PriceOverflow,
}
