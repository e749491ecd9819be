use log::info;
use serde::{Deserialize, Serialize};

use crate::history::PlantRecord;
use crate::planting::{Greenhouse, GreenhouseId, Plant, PlantingDomain};
use crate::serving::{Behaviour, Customer, CustomerId, Random, ServingDomain};
use crate::trading::{Slot, TradingDomain};
use crate::working::{Role, Worker, WorkerId, WorkingDomain};
use crate::Game;

#[derive(Debug, Serialize, Deserialize)]
pub struct GreenhouseRecord {
    pub id: GreenhouseId,
    pub kind: String,
    pub observers: Vec<WorkerId>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkerRecord {
    pub id: WorkerId,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlotRecord {
    pub kind: String,
    pub quantity: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub behaviour: Behaviour,
    pub wants: String,
    pub quantity: u32,
    pub service: f32,
}

/// The whole mutable simulation state. Kinds are referenced by name and
/// resolved against the knowledge catalog on load.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveGame {
    pub greenhouses: Vec<GreenhouseRecord>,
    pub greenhouses_sequence: usize,
    pub plants: Vec<PlantRecord>,
    pub plants_sequence: usize,
    pub workers: Vec<WorkerRecord>,
    pub workers_sequence: usize,
    pub slots: Vec<SlotRecord>,
    pub funds: f32,
    pub customers: Vec<CustomerRecord>,
    pub customers_sequence: usize,
    pub spawn_clock: f32,
    pub seed: u64,
    pub draws: u64,
}

#[derive(Debug)]
pub enum SaveError {
    Encode(String),
    Decode(String),
    UnknownKind { name: String },
}

impl Game {
    pub fn save_state(&self) -> Result<Vec<u8>, SaveError> {
        let save = SaveGame {
            greenhouses: self
                .planting
                .greenhouses
                .iter()
                .map(|greenhouse| GreenhouseRecord {
                    id: greenhouse.id,
                    kind: greenhouse.kind.name.clone(),
                    observers: greenhouse.observers.clone(),
                })
                .collect(),
            greenhouses_sequence: self.planting.greenhouses_sequence,
            plants: self.planting.plants.iter().map(PlantRecord::of).collect(),
            plants_sequence: self.planting.plants_sequence,
            workers: self
                .working
                .workers
                .iter()
                .map(|worker| WorkerRecord {
                    id: worker.id,
                    name: worker.name.clone(),
                    role: worker.role,
                })
                .collect(),
            workers_sequence: self.working.workers_sequence,
            slots: self
                .trading
                .slots
                .iter()
                .map(|slot| SlotRecord {
                    kind: slot.kind.name.clone(),
                    quantity: slot.quantity,
                })
                .collect(),
            funds: self.trading.funds,
            customers: self
                .serving
                .customers
                .iter()
                .map(|customer| CustomerRecord {
                    id: customer.id,
                    behaviour: customer.behaviour,
                    wants: customer.wants.name.clone(),
                    quantity: customer.quantity,
                    service: customer.service,
                })
                .collect(),
            customers_sequence: self.serving.customers_sequence,
            spawn_clock: self.serving.spawn_clock,
            seed: self.serving.random.seed(),
            draws: self.serving.random.draws(),
        };
        let config = bincode::config::standard();
        bincode::serde::encode_to_vec(&save, config).map_err(|error| SaveError::Encode(error.to_string()))
    }

    /// Rebuilds the simulation from a snapshot. Everything is decoded and
    /// resolved against the knowledge catalog first; the running state is
    /// replaced only after the whole snapshot validated.
    pub fn load_state(&mut self, bytes: &[u8]) -> Result<(), SaveError> {
        let config = bincode::config::standard();
        let (save, _): (SaveGame, usize) = bincode::serde::decode_from_slice(bytes, config)
            .map_err(|error| SaveError::Decode(error.to_string()))?;

        let mut greenhouses = vec![];
        for record in &save.greenhouses {
            let kind = self
                .known
                .greenhouses
                .find(&record.kind)
                .map_err(|_| SaveError::UnknownKind {
                    name: record.kind.clone(),
                })?;
            greenhouses.push(Greenhouse {
                id: record.id,
                kind,
                observers: record.observers.clone(),
            });
        }
        let mut plants = vec![];
        for record in &save.plants {
            let kind = self
                .known
                .plants
                .find(&record.species)
                .map_err(|_| SaveError::UnknownKind {
                    name: record.species.clone(),
                })?;
            plants.push(Plant {
                id: record.id,
                kind,
                greenhouse: record.greenhouse,
                stage: record.stage,
                progress: record.progress,
                cycle: record.cycle,
                moisture: record.moisture,
                nutrition: record.nutrition,
            });
        }
        let mut slots = vec![];
        for record in &save.slots {
            let kind = self
                .known
                .items
                .find(&record.kind)
                .map_err(|_| SaveError::UnknownKind {
                    name: record.kind.clone(),
                })?;
            slots.push(Slot {
                kind,
                quantity: record.quantity,
            });
        }
        let mut customers = vec![];
        for record in &save.customers {
            let wants = self
                .known
                .items
                .find(&record.wants)
                .map_err(|_| SaveError::UnknownKind {
                    name: record.wants.clone(),
                })?;
            customers.push(Customer {
                id: record.id,
                behaviour: record.behaviour,
                wants,
                quantity: record.quantity,
                service: record.service,
            });
        }
        let workers = save
            .workers
            .into_iter()
            .map(|record| Worker {
                id: record.id,
                name: record.name,
                role: record.role,
            })
            .collect();

        let mut planting = PlantingDomain::default();
        planting.load_greenhouses(greenhouses, save.greenhouses_sequence);
        planting.load_plants(plants, save.plants_sequence);
        let mut working = WorkingDomain::default();
        working.load_workers(workers, save.workers_sequence);
        let mut trading = TradingDomain::default();
        trading.load_slots(slots, save.funds);
        let mut serving = ServingDomain {
            spawn_interval: self.serving.spawn_interval,
            spawn_clock: save.spawn_clock,
            weights: self.serving.weights,
            service_time: self.serving.service_time,
            random: Random::restore(save.seed, save.draws),
            ..Default::default()
        };
        serving.load_customers(customers, save.customers_sequence);

        self.planting = planting;
        self.working = working;
        self.trading = trading;
        self.serving = serving;
        info!(
            "Loads state: {} greenhouses, {} plants, {} customers",
            save.greenhouses.len(),
            save.plants.len(),
            save.customers.len()
        );
        Ok(())
    }
}
