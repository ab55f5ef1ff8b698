use serde::{Deserialize, Serialize};

use super::value_objects::OrderTableId;

/// A physical table. Orders are only accepted while it is occupied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTable {
    pub id: OrderTableId,
    pub number_of_guests: u32,
    pub empty: bool,
}

impl OrderTable {
    pub fn new(number_of_guests: u32, empty: bool) -> Self {
        Self {
            id: OrderTableId::new(),
            number_of_guests,
            empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }
}
