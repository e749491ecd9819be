use crate::serving::ServingError::CustomerNotFound;
use crate::serving::{Customer, CustomerId, ServingDomain, ServingError};

impl ServingDomain {
    pub fn get_customer(&self, id: CustomerId) -> Result<&Customer, ServingError> {
        self.customers
            .iter()
            .find(|customer| customer.id == id)
            .ok_or(CustomerNotFound { id })
    }
}
