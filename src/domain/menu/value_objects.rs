use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::MenuError;

// ============================================================================
// Menu Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub Uuid);

impl MenuId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MenuId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-negative monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Result<Self, MenuError> {
        if amount < Decimal::ZERO {
            return Err(MenuError::NegativePrice(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units. Quantities are validated when lines are built.
    pub fn times(&self, quantity: u64) -> Result<Price, MenuError> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Price)
            .ok_or(MenuError::PriceOverflow)
    }

    pub fn checked_add(&self, rhs: Price) -> Result<Price, MenuError> {
        self.0
            .checked_add(rhs.0)
            .map(Price)
            .ok_or(MenuError::PriceOverflow)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = MenuError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Price::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One product entry of a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuProductLine {
    pub product_id: ProductId,
    pub quantity: u64,
    pub unit_price: Price,
    /// Owning menu. Set when the line is attached through [`MenuProducts::new`].
    pub menu_id: Option<MenuId>,
}

impl MenuProductLine {
    pub fn new(product_id: ProductId, quantity: i64, unit_price: Price) -> Result<Self, MenuError> {
        let quantity = u64::try_from(quantity).map_err(|_| MenuError::NegativeQuantity(quantity))?;

        Ok(Self {
            product_id,
            quantity,
            unit_price,
            menu_id: None,
        })
    }

    /// Line price: unit price times quantity.
    pub fn price(&self) -> Result<Price, MenuError> {
        self.unit_price.times(self.quantity)
    }

    fn join_menu(&mut self, menu_id: MenuId) {
        self.menu_id = Some(menu_id);
    }
}

/// The product lines of a single menu, aggregated into a total price on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuProducts {
    lines: Vec<MenuProductLine>,
}

impl MenuProducts {
    pub fn new(mut lines: Vec<MenuProductLine>, menu_id: MenuId) -> Self {
        for line in &mut lines {
            line.join_menu(menu_id);
        }
        Self { lines }
    }

    pub fn calculate_price(&self) -> Result<Price, MenuError> {
        self.lines
            .iter()
            .try_fold(Price::ZERO, |total, line| total.checked_add(line.price()?))
    }

    pub fn lines(&self) -> &[MenuProductLine] {
        &self.lines
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
