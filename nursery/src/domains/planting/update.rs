use log::info;

use crate::planting::Planting::{PlantUpdated, StageChanged};
use crate::planting::{Planting, PlantingDomain, Stage};

impl PlantingDomain {
    pub fn update(&mut self, time: f32) -> Vec<Planting> {
        let mut events = vec![];
        for plant in self.plants.iter_mut() {
            if plant.stage == Stage::Dead {
                continue;
            }
            let kind = &plant.kind;
            // seeds drain at half rate
            let drain = if plant.stage == Stage::Seed { 0.5 } else { 1.0 };
            plant.moisture = (plant.moisture - kind.transpiration * drain * time).max(0.0);
            plant.nutrition = (plant.nutrition - kind.appetite * drain * time).max(0.0);

            if plant.moisture > 0.0 && plant.nutrition > 0.0 {
                plant.progress +=
                    time * plant.stage.rate() * plant.cycle.multiplier() * kind.growth_rate;
            }

            if plant.progress >= plant.stage.threshold() {
                let before = plant.stage;
                if let Some(after) = before.successor() {
                    plant.stage = after;
                    // leftover progress is discarded on transition
                    plant.progress = 0.0;
                    info!(
                        "Plant {:?} {} became {:?}",
                        plant.id, kind.name, plant.stage
                    );
                    events.push(StageChanged {
                        plant: plant.id,
                        greenhouse: plant.greenhouse,
                        before,
                        after,
                    });
                }
            } else {
                events.push(PlantUpdated {
                    id: plant.id,
                    progress: plant.progress,
                    moisture: plant.moisture,
                    nutrition: plant.nutrition,
                });
            }
        }
        events
    }
}
