use std::collections::HashMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::api::{ActionError, Event};
use crate::planting::{
    GreenhouseId, GrowthCycle, Plant, PlantId, Planting, Stage,
};
use crate::Game;

/// Per-entity history bound; the oldest snapshot is evicted beyond it.
pub const HISTORY_LIMIT: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRef {
    Plant(PlantId),
    Greenhouse(GreenhouseId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    pub id: PlantId,
    pub species: String,
    pub greenhouse: GreenhouseId,
    pub stage: Stage,
    pub progress: f32,
    pub cycle: GrowthCycle,
    pub moisture: f32,
    pub nutrition: f32,
}

impl PlantRecord {
    pub fn of(plant: &Plant) -> Self {
        Self {
            id: plant.id,
            species: plant.kind.name.clone(),
            greenhouse: plant.greenhouse,
            stage: plant.stage,
            progress: plant.progress,
            cycle: plant.cycle,
            moisture: plant.moisture,
            nutrition: plant.nutrition,
        }
    }
}

/// Immutable deep snapshot of one entity's mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Memento {
    Plant {
        id: PlantId,
        stage: Stage,
        progress: f32,
        cycle: GrowthCycle,
        moisture: f32,
        nutrition: f32,
    },
    Greenhouse {
        id: GreenhouseId,
        plants: Vec<PlantRecord>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HistoryError {
    NoHistory { entity: EntityRef },
    EntityMismatch { entity: EntityRef },
}

/// Owns the undo histories. Never looks inside a memento.
pub struct Caretaker {
    histories: HashMap<EntityRef, Vec<Memento>>,
    pub limit: usize,
}

impl Default for Caretaker {
    fn default() -> Self {
        Self {
            histories: HashMap::default(),
            limit: HISTORY_LIMIT,
        }
    }
}

impl Caretaker {
    pub fn push(&mut self, entity: EntityRef, memento: Memento) {
        let history = self.histories.entry(entity).or_default();
        if history.len() == self.limit {
            history.remove(0);
        }
        history.push(memento);
    }

    pub fn undo(&mut self, entity: EntityRef) -> Result<Memento, HistoryError> {
        self.histories
            .get_mut(&entity)
            .and_then(|history| history.pop())
            .ok_or(HistoryError::NoHistory { entity })
    }

    pub fn history_len(&self, entity: EntityRef) -> usize {
        self.histories
            .get(&entity)
            .map(|history| history.len())
            .unwrap_or(0)
    }

    pub fn clear(&mut self, entity: EntityRef) {
        self.histories.remove(&entity);
    }
}

impl Game {
    /// Pure snapshot, no mutation of the entity.
    pub fn capture(&self, entity: EntityRef) -> Result<Memento, ActionError> {
        match entity {
            EntityRef::Plant(id) => {
                let plant = self.planting.get_plant(id)?;
                Ok(Memento::Plant {
                    id,
                    stage: plant.stage,
                    progress: plant.progress,
                    cycle: plant.cycle,
                    moisture: plant.moisture,
                    nutrition: plant.nutrition,
                })
            }
            EntityRef::Greenhouse(id) => {
                self.planting.get_greenhouse(id)?;
                let plants = self
                    .planting
                    .plants
                    .iter()
                    .filter(|plant| plant.greenhouse == id)
                    .map(PlantRecord::of)
                    .collect();
                Ok(Memento::Greenhouse { id, plants })
            }
        }
    }

    pub fn save_entity(&mut self, entity: EntityRef) -> Result<(), ActionError> {
        let memento = self.capture(entity)?;
        self.history.push(entity, memento);
        Ok(())
    }

    /// Overwrites the entity's mutable fields with the snapshot. Restoring
    /// the same memento twice is a no-op the second time. Restored stages
    /// are rewinds, not machine transitions, so no notification fires.
    pub fn restore(&mut self, entity: EntityRef, memento: &Memento) -> Result<Vec<Event>, ActionError> {
        match (entity, memento) {
            (
                EntityRef::Plant(id),
                Memento::Plant {
                    id: snapshot,
                    stage,
                    progress,
                    cycle,
                    moisture,
                    nutrition,
                },
            ) if id == *snapshot => {
                let plant = self.planting.get_plant_mut(id)?;
                plant.stage = *stage;
                plant.progress = *progress;
                plant.cycle = *cycle;
                plant.moisture = *moisture;
                plant.nutrition = *nutrition;
                Ok(vec![vec![Planting::PlantUpdated {
                    id,
                    progress: *progress,
                    moisture: *moisture,
                    nutrition: *nutrition,
                }]
                .into()])
            }
            (EntityRef::Greenhouse(id), Memento::Greenhouse { id: snapshot, plants })
                if id == *snapshot =>
            {
                self.planting.get_greenhouse(id)?;
                let mut events = vec![];
                let removed: Vec<PlantId> = self
                    .planting
                    .plants
                    .iter()
                    .filter(|plant| plant.greenhouse == id)
                    .map(|plant| plant.id)
                    .collect();
                self.planting.plants.retain(|plant| plant.greenhouse != id);
                for plant in removed {
                    events.push(Planting::PlantVanished { id: plant });
                }
                for record in plants {
                    let kind = self.known.plants.find(&record.species)?;
                    self.planting.plants.push(Plant {
                        id: record.id,
                        kind,
                        greenhouse: record.greenhouse,
                        stage: record.stage,
                        progress: record.progress,
                        cycle: record.cycle,
                        moisture: record.moisture,
                        nutrition: record.nutrition,
                    });
                    events.push(Planting::PlantAppeared {
                        id: record.id,
                        greenhouse: record.greenhouse,
                        stage: record.stage,
                    });
                }
                Ok(vec![events.into()])
            }
            _ => Err(HistoryError::EntityMismatch { entity }.into()),
        }
    }

    /// Pops the most recent snapshot of the entity and rewinds to it.
    pub fn undo_entity(&mut self, entity: EntityRef) -> Result<Vec<Event>, ActionError> {
        let memento = self.history.undo(entity)?;
        info!("Rewinds {entity:?} by one snapshot");
        self.restore(entity, &memento)
    }
}
