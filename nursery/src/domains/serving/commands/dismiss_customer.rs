use crate::serving::ServingError::CustomerNotFound;
use crate::serving::{Customer, CustomerId, ServingDomain, ServingError};

impl ServingDomain {
    /// Removes a customer from the active set, handing it back to the
    /// caller for settlement.
    pub fn dismiss_customer(&mut self, id: CustomerId) -> Result<Customer, ServingError> {
        let index = self
            .customers
            .iter()
            .position(|customer| customer.id == id)
            .ok_or(CustomerNotFound { id })?;
        Ok(self.customers.remove(index))
    }
}
