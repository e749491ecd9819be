use crate::planting::Planting::{CycleChanged, PlantUpdated};
use crate::planting::{GrowthCycle, PlantId, Planting, PlantingDomain, PlantingError, Stage};

impl PlantingDomain {
    /// Fertilizer refills nutrition and puts the plant on the boosted
    /// growth cycle. The current stage is untouched.
    pub fn fertilize_plant<'operation>(
        &'operation mut self,
        id: PlantId,
        amount: f32,
    ) -> Result<impl FnOnce() -> Vec<Planting> + 'operation, PlantingError> {
        let plant = self.get_plant_mut(id)?;
        if plant.stage == Stage::Dead {
            return Err(PlantingError::PlantIsDead { id });
        }
        let operation = move || {
            plant.nutrition = (plant.nutrition + amount).min(1.0);
            plant.cycle = GrowthCycle::Boosted;
            vec![
                PlantUpdated {
                    id,
                    progress: plant.progress,
                    moisture: plant.moisture,
                    nutrition: plant.nutrition,
                },
                CycleChanged {
                    plant: id,
                    cycle: plant.cycle,
                },
            ]
        };
        Ok(operation)
    }
}
