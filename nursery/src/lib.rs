pub use domains::*;

use crate::api::{Action, ActionError, Command, CommandId, Event};
use crate::data::Knowledge;
use crate::history::{Caretaker, EntityRef};
use crate::planting::PlantingDomain;
use crate::serving::{Random, ServingDomain};
use crate::trading::TradingDomain;
use crate::working::WorkingDomain;

pub mod api;
pub mod collections;
pub mod data;
pub mod history;
pub mod persistence;
pub mod view;

mod actions;
mod domains;
mod update;

pub struct Game {
    pub known: Knowledge,
    pub planting: PlantingDomain,
    pub working: WorkingDomain,
    pub trading: TradingDomain,
    pub serving: ServingDomain,
    pub history: Caretaker,
    commands_sequence: usize,
}

impl Game {
    pub fn new(known: Knowledge, seed: u64) -> Self {
        let schedule = known.schedule.clone();
        let serving = ServingDomain {
            spawn_interval: schedule.spawn_interval,
            weights: schedule.weights,
            service_time: schedule.service_time,
            random: Random::new(seed),
            ..Default::default()
        };
        Self {
            known,
            planting: PlantingDomain::default(),
            working: WorkingDomain::default(),
            trading: TradingDomain::default(),
            serving,
            history: Caretaker::default(),
            commands_sequence: 0,
        }
    }

    pub fn compose(&mut self, action: Action) -> Command {
        self.commands_sequence += 1;
        Command::new(CommandId(self.commands_sequence), action)
    }

    pub fn perform_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        let mut command = self.compose(action);
        self.execute_command(&mut command)
    }

    /// Runs one command to completion. A command either fully executes or
    /// never starts; a successful execution records the affected entity's
    /// pre-execution snapshot for undo.
    pub fn execute_command(&mut self, command: &mut Command) -> Result<Vec<Event>, ActionError> {
        if command.executed {
            return Err(ActionError::CommandAlreadyExecuted { id: command.id });
        }
        let subject = match &command.action {
            Action::PlantSeed { greenhouse, .. } => Some(EntityRef::Greenhouse(*greenhouse)),
            Action::WaterPlant { plant, .. }
            | Action::FertilizePlant { plant, .. }
            | Action::KillPlant { plant } => Some(EntityRef::Plant(*plant)),
            Action::HarvestPlant { plant } | Action::DestroyPlant { plant } => Some(
                EntityRef::Greenhouse(self.planting.get_plant(*plant)?.greenhouse),
            ),
            _ => None,
        };
        let snapshot = match subject {
            Some(entity) => Some((entity, self.capture(entity)?)),
            None => None,
        };
        let events = match command.action.clone() {
            Action::PlantSeed {
                greenhouse,
                species,
            } => self.plant_seed(greenhouse, &species),
            Action::WaterPlant { plant, amount } => self.water_plant(plant, amount),
            Action::FertilizePlant { plant, amount } => self.fertilize_plant(plant, amount),
            Action::HarvestPlant { plant } => self.harvest_plant(plant),
            Action::KillPlant { plant } => self.kill_plant(plant),
            Action::DestroyPlant { plant } => self.destroy_plant(plant),
            Action::Patrol { worker } => self.patrol(worker),
            Action::ServeCustomer { customer } => self.serve_customer(customer),
            Action::AttachWorker { greenhouse, worker } => self.attach_worker(greenhouse, worker),
            Action::DetachWorker { greenhouse, worker } => self.detach_worker(greenhouse, worker),
        }?;
        if let Some((entity, memento)) = snapshot {
            self.history.push(entity, memento);
        }
        command.executed = true;
        Ok(events)
    }
}
