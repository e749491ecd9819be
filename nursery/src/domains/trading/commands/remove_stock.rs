use crate::trading::{ItemKey, Trading, TradingDomain, TradingError};

impl TradingDomain {
    /// Ordinary insufficiency is not an error: the ledger stays untouched
    /// and the caller gets `false`. Unknown items are an error.
    pub fn remove_stock(
        &mut self,
        item: ItemKey,
        quantity: u32,
    ) -> Result<(bool, Vec<Trading>), TradingError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.kind.id == item)
            .ok_or(TradingError::ItemNotFound { item })?;
        if slot.quantity < quantity {
            return Ok((false, vec![]));
        }
        slot.quantity -= quantity;
        let events = vec![Trading::StockChanged {
            item,
            quantity: slot.quantity,
        }];
        Ok((true, events))
    }

    /// Theft path: takes whatever is available up to `quantity`.
    pub fn seize_stock(
        &mut self,
        item: ItemKey,
        quantity: u32,
    ) -> Result<(u32, Vec<Trading>), TradingError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.kind.id == item)
            .ok_or(TradingError::ItemNotFound { item })?;
        let taken = quantity.min(slot.quantity);
        if taken == 0 {
            return Ok((0, vec![]));
        }
        slot.quantity -= taken;
        let events = vec![Trading::StockChanged {
            item,
            quantity: slot.quantity,
        }];
        Ok((taken, events))
    }
}
