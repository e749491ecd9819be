use serde::{Deserialize, Serialize};

use crate::api::Action;
use crate::planting::{GrowthCycle, PlantId, Stage};

/// A growing plant below this moisture gets a watering call.
pub const MOISTURE_CALL: f32 = 0.5;
/// A growing plant below this nutrition gets a fertilizing call.
pub const NUTRITION_CALL: f32 = 0.5;

pub const WATERING_CAN_AMOUNT: f32 = 1.0;
pub const FERTILIZER_AMOUNT: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Water,
    Fertilize,
    Harvest,
}

#[derive(Clone)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub role: Role,
}

/// What an observer learns from one greenhouse notification.
#[derive(Debug, Clone, Copy)]
pub struct StageReport {
    pub plant: PlantId,
    pub before: Stage,
    pub after: Stage,
    pub moisture: f32,
    pub nutrition: f32,
    pub cycle: GrowthCycle,
}

impl Worker {
    /// Role-specific relevance predicate. A satisfied predicate yields the
    /// action to schedule; the worker never mutates a plant directly.
    pub fn react(&self, report: &StageReport) -> Option<Action> {
        match self.role {
            Role::Water => {
                if report.after == Stage::Growing && report.moisture < MOISTURE_CALL {
                    Some(Action::WaterPlant {
                        plant: report.plant,
                        amount: WATERING_CAN_AMOUNT,
                    })
                } else {
                    None
                }
            }
            Role::Fertilize => {
                if report.after == Stage::Growing
                    && (report.nutrition < NUTRITION_CALL || report.cycle == GrowthCycle::Normal)
                {
                    Some(Action::FertilizePlant {
                        plant: report.plant,
                        amount: FERTILIZER_AMOUNT,
                    })
                } else {
                    None
                }
            }
            Role::Harvest => {
                if report.after == Stage::Ripe {
                    Some(Action::HarvestPlant {
                        plant: report.plant,
                    })
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Working {
    WorkerHired { id: WorkerId, role: Role },
    PatrolCompleted { worker: WorkerId },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkingError {
    WorkerNotFound { id: WorkerId },
}

#[derive(Default)]
pub struct WorkingDomain {
    pub workers: Vec<Worker>,
    pub workers_sequence: usize,
}

impl WorkingDomain {
    pub fn load_workers(&mut self, workers: Vec<Worker>, sequence: usize) {
        self.workers_sequence = sequence;
        self.workers.extend(workers);
    }
}
