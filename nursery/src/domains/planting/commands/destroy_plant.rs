use crate::planting::PlantingError::{InvalidTransition, PlantNotFound};
use crate::planting::{PlantId, Planting, PlantingDomain, PlantingError, Stage};

impl PlantingDomain {
    /// Cleanup of a dead plant. Live plants leave via harvest only.
    pub fn destroy_plant(
        &mut self,
        id: PlantId,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        let index = self
            .plants
            .iter()
            .position(|plant| plant.id == id)
            .ok_or(PlantNotFound { id })?;
        let plant = &self.plants[index];
        if plant.stage != Stage::Dead {
            return Err(InvalidTransition {
                id,
                from: plant.stage,
                target: Stage::Dead,
            });
        }
        let operation = move || {
            self.plants.remove(index);
            vec![Planting::PlantVanished { id }]
        };
        Ok(operation)
    }
}
