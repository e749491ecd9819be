use crate::planting::PlantingError::GreenhouseNotFound;
use crate::planting::{Greenhouse, GreenhouseId, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn get_greenhouse(&self, id: GreenhouseId) -> Result<&Greenhouse, PlantingError> {
        self.greenhouses
            .iter()
            .find(|greenhouse| greenhouse.id == id)
            .ok_or(GreenhouseNotFound { id })
    }

    pub fn get_greenhouse_mut(&mut self, id: GreenhouseId) -> Result<&mut Greenhouse, PlantingError> {
        self.greenhouses
            .iter_mut()
            .find(|greenhouse| greenhouse.id == id)
            .ok_or(GreenhouseNotFound { id })
    }
}
