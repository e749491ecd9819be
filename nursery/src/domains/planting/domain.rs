use serde::{Deserialize, Serialize};

use crate::collections::Shared;
use crate::working::WorkerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GreenhouseKey(pub usize);

pub struct GreenhouseKind {
    pub id: GreenhouseKey,
    pub name: String,
    pub capacity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GreenhouseId(pub usize);

/// Subject of the notification channel: owns a plot of plants and the
/// registration-ordered list of worker handles watching it.
pub struct Greenhouse {
    pub id: GreenhouseId,
    pub kind: Shared<GreenhouseKind>,
    pub observers: Vec<WorkerId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlantKey(pub usize);

pub struct PlantKind {
    pub id: PlantKey,
    pub name: String,
    pub growth_rate: f32,
    pub transpiration: f32,
    pub appetite: f32,
    pub fruits: u32,
    pub visual: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlantId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Seed,
    Growing,
    Ripe,
    Dead,
}

impl Stage {
    /// Progress needed to leave this stage. Dead is terminal.
    pub fn threshold(&self) -> f32 {
        match self {
            Stage::Seed => 25.0,
            Stage::Growing => 75.0,
            Stage::Ripe => 50.0,
            Stage::Dead => f32::INFINITY,
        }
    }

    pub fn rate(&self) -> f32 {
        match self {
            Stage::Seed => 0.5,
            Stage::Growing => 1.0,
            Stage::Ripe => 0.3,
            Stage::Dead => 0.0,
        }
    }

    pub fn successor(&self) -> Option<Stage> {
        match self {
            Stage::Seed => Some(Stage::Growing),
            Stage::Growing => Some(Stage::Ripe),
            Stage::Ripe => Some(Stage::Dead),
            Stage::Dead => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthCycle {
    Normal,
    Boosted,
}

impl GrowthCycle {
    pub fn multiplier(&self) -> f32 {
        match self {
            GrowthCycle::Normal => 1.0,
            GrowthCycle::Boosted => 2.0,
        }
    }
}

#[derive(Clone)]
pub struct Plant {
    pub id: PlantId,
    pub kind: Shared<PlantKind>,
    pub greenhouse: GreenhouseId,
    pub stage: Stage,
    pub progress: f32,
    pub cycle: GrowthCycle,
    pub moisture: f32,
    pub nutrition: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Planting {
    GreenhouseAppeared {
        id: GreenhouseId,
    },
    PlantAppeared {
        id: PlantId,
        greenhouse: GreenhouseId,
        stage: Stage,
    },
    PlantUpdated {
        id: PlantId,
        progress: f32,
        moisture: f32,
        nutrition: f32,
    },
    StageChanged {
        plant: PlantId,
        greenhouse: GreenhouseId,
        before: Stage,
        after: Stage,
    },
    CycleChanged {
        plant: PlantId,
        cycle: GrowthCycle,
    },
    PlantVanished {
        id: PlantId,
    },
    ObserverAttached {
        greenhouse: GreenhouseId,
        worker: WorkerId,
    },
    ObserverDetached {
        greenhouse: GreenhouseId,
        worker: WorkerId,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlantingError {
    PlantNotFound { id: PlantId },
    PlantIsDead { id: PlantId },
    GreenhouseNotFound { id: GreenhouseId },
    GreenhouseIsFull { id: GreenhouseId },
    InvalidTransition { id: PlantId, from: Stage, target: Stage },
    NotReadyToHarvest { id: PlantId, stage: Stage },
}

#[derive(Default)]
pub struct PlantingDomain {
    pub greenhouses: Vec<Greenhouse>,
    pub greenhouses_sequence: usize,
    pub plants: Vec<Plant>,
    pub plants_sequence: usize,
}

impl PlantingDomain {
    pub fn load_greenhouses(&mut self, greenhouses: Vec<Greenhouse>, sequence: usize) {
        self.greenhouses_sequence = sequence;
        self.greenhouses.extend(greenhouses);
    }

    pub fn load_plants(&mut self, plants: Vec<Plant>, sequence: usize) {
        self.plants_sequence = sequence;
        self.plants.extend(plants);
    }

    pub fn count_plants(&self, greenhouse: GreenhouseId) -> usize {
        self.plants
            .iter()
            .filter(|plant| plant.greenhouse == greenhouse)
            .count()
    }

    /// Forced transition used by lethal events. Growth transitions go
    /// through `update` only, so the single valid target here is Dead.
    pub fn force_stage(&mut self, id: PlantId, target: Stage) -> Result<Planting, PlantingError> {
        let plant = self.get_plant_mut(id)?;
        if plant.stage == Stage::Dead || target != Stage::Dead {
            return Err(PlantingError::InvalidTransition {
                id,
                from: plant.stage,
                target,
            });
        }
        let before = plant.stage;
        plant.stage = Stage::Dead;
        plant.progress = 0.0;
        Ok(Planting::StageChanged {
            plant: id,
            greenhouse: plant.greenhouse,
            before,
            after: Stage::Dead,
        })
    }
}
