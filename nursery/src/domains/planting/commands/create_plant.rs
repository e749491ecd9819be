use crate::collections::Shared;
use crate::planting::{
    GreenhouseId, GrowthCycle, Plant, PlantId, PlantKind, Planting, PlantingDomain, PlantingError,
    Stage,
};

impl PlantingDomain {
    pub fn create_plant<'operation>(
        &'operation mut self,
        greenhouse: GreenhouseId,
        kind: &Shared<PlantKind>,
    ) -> Result<(PlantId, impl FnOnce() -> Vec<Planting> + 'operation), PlantingError> {
        let house = self.get_greenhouse(greenhouse)?;
        if self.count_plants(greenhouse) >= house.kind.capacity {
            return Err(PlantingError::GreenhouseIsFull { id: greenhouse });
        }
        let id = PlantId(self.plants_sequence + 1);
        let plant = Plant {
            id,
            kind: kind.clone(),
            greenhouse,
            stage: Stage::Seed,
            progress: 0.0,
            cycle: GrowthCycle::Normal,
            moisture: 1.0,
            nutrition: 1.0,
        };
        let operation = move || {
            self.plants_sequence += 1;
            let events = vec![Planting::PlantAppeared {
                id,
                greenhouse,
                stage: plant.stage,
            }];
            self.plants.push(plant);
            events
        };
        Ok((id, operation))
    }
}
