use crate::collections::Shared;
use crate::serving::{
    Behaviour, Customer, CustomerId, Serving, ServingDomain, ServingError,
};
use crate::trading::ItemKind;

impl ServingDomain {
    /// Direct factory variant: a scripted customer of a known behaviour,
    /// bypassing the weighted draw.
    pub fn spawn_customer<'operation>(
        &'operation mut self,
        behaviour: Behaviour,
        wants: &Shared<ItemKind>,
        quantity: u32,
    ) -> Result<(CustomerId, impl FnOnce() -> Vec<Serving> + 'operation), ServingError> {
        let id = CustomerId(self.customers_sequence + 1);
        let customer = Customer {
            id,
            behaviour,
            wants: wants.clone(),
            quantity,
            service: self.service_time,
        };
        let operation = move || {
            self.customers_sequence += 1;
            let events = vec![Serving::CustomerAppeared {
                id,
                behaviour,
                wants: customer.wants.id,
                quantity,
            }];
            self.customers.push(customer);
            events
        };
        Ok((id, operation))
    }
}
