use crate::planting::Planting::PlantUpdated;
use crate::planting::{PlantId, Planting, PlantingDomain, PlantingError, Stage};

impl PlantingDomain {
    pub fn water_plant<'operation>(
        &'operation mut self,
        id: PlantId,
        amount: f32,
    ) -> Result<impl FnOnce() -> Vec<Planting> + 'operation, PlantingError> {
        let plant = self.get_plant_mut(id)?;
        if plant.stage == Stage::Dead {
            return Err(PlantingError::PlantIsDead { id });
        }
        let operation = move || {
            plant.moisture = (plant.moisture + amount).min(1.0);
            vec![PlantUpdated {
                id,
                progress: plant.progress,
                moisture: plant.moisture,
                nutrition: plant.nutrition,
            }]
        };
        Ok(operation)
    }
}
