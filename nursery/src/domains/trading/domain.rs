use serde::{Deserialize, Serialize};

use crate::collections::Shared;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey(pub usize);

#[derive(Debug)]
pub struct ItemKind {
    pub id: ItemKey,
    pub name: String,
    pub price: f32,
}

/// One ledger line of the store: an item kind and how many are on the shelf.
pub struct Slot {
    pub kind: Shared<ItemKind>,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Trading {
    StockChanged { item: ItemKey, quantity: u32 },
    FundsChanged { funds: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TradingError {
    ItemNotFound { item: ItemKey },
}

#[derive(Default)]
pub struct TradingDomain {
    pub slots: Vec<Slot>,
    pub funds: f32,
}

impl TradingDomain {
    pub fn load_slots(&mut self, slots: Vec<Slot>, funds: f32) {
        self.slots.extend(slots);
        self.funds = funds;
    }

    pub fn get_slot(&self, item: ItemKey) -> Result<&Slot, TradingError> {
        self.slots
            .iter()
            .find(|slot| slot.kind.id == item)
            .ok_or(TradingError::ItemNotFound { item })
    }
}
