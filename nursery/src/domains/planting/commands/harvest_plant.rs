use crate::planting::PlantingError::{NotReadyToHarvest, PlantNotFound};
use crate::planting::{PlantId, Planting, PlantingDomain, PlantingError, Stage};

impl PlantingDomain {
    /// Ripe plants only. The plant leaves the greenhouse; the reported
    /// yield is credited to the store by the caller.
    pub fn harvest_plant(
        &mut self,
        id: PlantId,
    ) -> Result<(u32, impl FnOnce() -> Vec<Planting> + '_), PlantingError> {
        let index = self
            .plants
            .iter()
            .position(|plant| plant.id == id)
            .ok_or(PlantNotFound { id })?;
        let plant = &self.plants[index];
        if plant.stage != Stage::Ripe {
            return Err(NotReadyToHarvest {
                id,
                stage: plant.stage,
            });
        }
        let fruits = plant.kind.fruits;
        let operation = move || {
            self.plants.remove(index);
            vec![Planting::PlantVanished { id }]
        };
        Ok((fruits, operation))
    }
}
