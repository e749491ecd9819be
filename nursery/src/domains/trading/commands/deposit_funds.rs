use crate::trading::{Trading, TradingDomain};

impl TradingDomain {
    pub fn deposit_funds(&mut self, amount: f32) -> Vec<Trading> {
        self.funds += amount;
        vec![Trading::FundsChanged { funds: self.funds }]
    }
}
