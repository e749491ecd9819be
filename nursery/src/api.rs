use serde::{Deserialize, Serialize};

use crate::collections::DictionaryError;
use crate::history::HistoryError;
use crate::planting::{GreenhouseId, PlantId, Planting, PlantingError};
use crate::serving::{CustomerId, Serving, ServingError};
use crate::trading::{Trading, TradingError};
use crate::working::{WorkerId, Working, WorkingError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(pub usize);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Action {
    PlantSeed {
        greenhouse: GreenhouseId,
        species: String,
    },
    WaterPlant {
        plant: PlantId,
        amount: f32,
    },
    FertilizePlant {
        plant: PlantId,
        amount: f32,
    },
    HarvestPlant {
        plant: PlantId,
    },
    KillPlant {
        plant: PlantId,
    },
    DestroyPlant {
        plant: PlantId,
    },
    Patrol {
        worker: WorkerId,
    },
    ServeCustomer {
        customer: CustomerId,
    },
    AttachWorker {
        greenhouse: GreenhouseId,
        worker: WorkerId,
    },
    DetachWorker {
        greenhouse: GreenhouseId,
        worker: WorkerId,
    },
}

/// One request to act, decoupled from the decision that produced it.
/// Executes at most once; a second execution attempt is a precondition
/// violation, not a retry.
#[derive(Debug, Clone)]
pub struct Command {
    pub id: CommandId,
    pub action: Action,
    pub executed: bool,
}

impl Command {
    pub fn new(id: CommandId, action: Action) -> Self {
        Self {
            id,
            action,
            executed: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Planting(Vec<Planting>),
    Working(Vec<Working>),
    Trading(Vec<Trading>),
    Serving(Vec<Serving>),
}

impl From<Vec<Planting>> for Event {
    fn from(events: Vec<Planting>) -> Self {
        Event::Planting(events)
    }
}

impl From<Planting> for Event {
    fn from(event: Planting) -> Self {
        Event::Planting(vec![event])
    }
}

impl From<Vec<Working>> for Event {
    fn from(events: Vec<Working>) -> Self {
        Event::Working(events)
    }
}

impl From<Vec<Trading>> for Event {
    fn from(events: Vec<Trading>) -> Self {
        Event::Trading(events)
    }
}

impl From<Vec<Serving>> for Event {
    fn from(events: Vec<Serving>) -> Self {
        Event::Serving(events)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionError {
    Planting(PlantingError),
    Working(WorkingError),
    Trading(TradingError),
    Serving(ServingError),
    History(HistoryError),
    Knowledge(DictionaryError),
    CommandAlreadyExecuted { id: CommandId },
    Test,
}

impl From<PlantingError> for ActionError {
    fn from(error: PlantingError) -> Self {
        ActionError::Planting(error)
    }
}

impl From<WorkingError> for ActionError {
    fn from(error: WorkingError) -> Self {
        ActionError::Working(error)
    }
}

impl From<TradingError> for ActionError {
    fn from(error: TradingError) -> Self {
        ActionError::Trading(error)
    }
}

impl From<ServingError> for ActionError {
    fn from(error: ServingError) -> Self {
        ActionError::Serving(error)
    }
}

impl From<HistoryError> for ActionError {
    fn from(error: HistoryError) -> Self {
        ActionError::History(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        ActionError::Knowledge(error)
    }
}
