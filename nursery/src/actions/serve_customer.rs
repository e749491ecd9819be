use crate::api::{ActionError, Event};
use crate::serving::CustomerId;
use crate::Game;

impl Game {
    /// Immediate service out of turn: the customer is pulled from the
    /// active set and settled right away.
    pub(crate) fn serve_customer(&mut self, customer: CustomerId) -> Result<Vec<Event>, ActionError> {
        let customer = self.serving.dismiss_customer(customer)?;
        Ok(self.settle_customer(&customer))
    }
}
