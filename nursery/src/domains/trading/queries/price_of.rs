use crate::trading::{ItemKey, TradingDomain, TradingError};

impl TradingDomain {
    pub fn price_of(&self, item: ItemKey) -> Result<f32, TradingError> {
        let slot = self.get_slot(item)?;
        Ok(slot.kind.price)
    }
}
