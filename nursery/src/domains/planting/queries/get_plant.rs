use crate::planting::PlantingError::PlantNotFound;
use crate::planting::{Plant, PlantId, PlantingDomain, PlantingError};

impl PlantingDomain {
    pub fn get_plant(&self, id: PlantId) -> Result<&Plant, PlantingError> {
        self.plants
            .iter()
            .find(|plant| plant.id == id)
            .ok_or(PlantNotFound { id })
    }

    pub fn get_plant_mut(&mut self, id: PlantId) -> Result<&mut Plant, PlantingError> {
        self.plants
            .iter_mut()
            .find(|plant| plant.id == id)
            .ok_or(PlantNotFound { id })
    }
}
