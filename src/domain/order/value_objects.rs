use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::menu::{MenuId, Price};
use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Order identifier. Time-ordered (UUIDv7) so stores can keep creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderTableId(pub Uuid);

impl OrderTableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderTableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderTableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Cooking,
    Meal,
    Completion,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Meal => "MEAL",
            OrderStatus::Completion => "COMPLETION",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COOKING" => Ok(OrderStatus::Cooking),
            "MEAL" => Ok(OrderStatus::Meal),
            "COMPLETION" => Ok(OrderStatus::Completion),
            other => Err(OrderError::InvalidStatus(other.to_string())),
        }
    }
}

/// A menu as it was when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub menu_id: MenuId,
    pub name: String,
    pub price: Price,
    /// Stored as requested; order quantities are not range-checked.
    pub quantity: i64,
}

impl OrderLineItem {
    pub fn for_save(quantity: i64, name: impl Into<String>, price: Price, menu_id: MenuId) -> Self {
        Self {
            menu_id,
            name: name.into(),
            price,
            quantity,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
