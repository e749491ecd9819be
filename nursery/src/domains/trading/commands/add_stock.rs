use crate::collections::Shared;
use crate::trading::{ItemKind, Slot, Trading, TradingDomain};

impl TradingDomain {
    pub fn add_stock(&mut self, kind: &Shared<ItemKind>, quantity: u32) -> Vec<Trading> {
        match self.slots.iter_mut().find(|slot| slot.kind.id == kind.id) {
            Some(slot) => {
                slot.quantity += quantity;
                vec![Trading::StockChanged {
                    item: slot.kind.id,
                    quantity: slot.quantity,
                }]
            }
            None => {
                self.slots.push(Slot {
                    kind: kind.clone(),
                    quantity,
                });
                vec![Trading::StockChanged {
                    item: kind.id,
                    quantity,
                }]
            }
        }
    }
}
