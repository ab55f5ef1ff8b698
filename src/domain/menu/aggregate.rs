use serde::{Deserialize, Serialize};

use super::errors::MenuError;
use super::value_objects::{MenuId, MenuProductLine, MenuProducts, Price};

// ============================================================================
// Menu Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    /// Selling price. Not reconciled against `product_total()`.
    pub price: Price,
    pub menu_products: MenuProducts,
}

impl Menu {
    pub fn new(name: impl Into<String>, price: Price, lines: Vec<MenuProductLine>) -> Self {
        let id = MenuId::new();
        Self {
            id,
            name: name.into(),
            price,
            menu_products: MenuProducts::new(lines, id),
        }
    }

    /// Sum of the menu's product line prices
    pub fn product_total(&self) -> Result<Price, MenuError> {
        self.menu_products.calculate_price()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::ProductId;
    use rust_decimal::Decimal;

    fn price(amount: i64) -> Price {
        Price::new(Decimal::from(amount)).unwrap()
    }

    #[test]
    fn test_new_menu_owns_its_lines() {
        let lines = vec![
            MenuProductLine::new(ProductId::new(), 2, price(16000)).unwrap(),
            MenuProductLine::new(ProductId::new(), 1, price(1000)).unwrap(),
        ];

        let menu = Menu::new("Fried chicken set", price(30000), lines);

        assert_eq!(menu.name, "Fried chicken set");
        assert!(menu.menu_products.lines().iter().all(|l| l.menu_id == Some(menu.id)));
    }

    #[test]
    fn test_product_total_is_independent_of_menu_price() {
        let lines = vec![MenuProductLine::new(ProductId::new(), 2, price(16000)).unwrap()];

        let menu = Menu::new("Double chicken", price(99000), lines);

        assert_eq!(menu.product_total(), Ok(price(32000)));
        assert_eq!(menu.price, price(99000));
    }
}
