use std::collections::HashMap;

use nursery::api::{Action, ActionError, Event};
use nursery::data::Knowledge;
use nursery::planting::{GreenhouseId, PlantId, Stage};
use nursery::serving::{Behaviour, CustomerId};
use nursery::working::{Role, WorkerId};
use nursery::Game;

pub const KNOWLEDGE: &str = include_str!("../../assets/knowledge.json");

pub fn knowledge() -> Knowledge {
    Knowledge::from_json(KNOWLEDGE).unwrap()
}

pub struct NurseryTestScenario {
    pub game: Game,
    greenhouses: HashMap<String, GreenhouseId>,
    plants: HashMap<String, PlantId>,
    workers: HashMap<String, WorkerId>,
    customers: HashMap<String, CustomerId>,
    current_action_result: Result<Vec<Event>, ActionError>,
    current_update_events: Vec<Event>,
}

impl NurseryTestScenario {
    pub fn new() -> Self {
        let game = Game::new(knowledge(), 42);
        Self {
            game,
            greenhouses: Default::default(),
            plants: Default::default(),
            workers: Default::default(),
            customers: Default::default(),
            current_action_result: Err(ActionError::Test),
            current_update_events: vec![],
        }
    }

    pub fn greenhouse(&self, name: &str) -> GreenhouseId {
        *self.greenhouses.get(name).unwrap()
    }

    pub fn plant(&self, name: &str) -> PlantId {
        *self.plants.get(name).unwrap()
    }

    pub fn worker(&self, name: &str) -> WorkerId {
        *self.workers.get(name).unwrap()
    }

    pub fn customer(&self, name: &str) -> CustomerId {
        *self.customers.get(name).unwrap()
    }

    pub fn update_events(&self) -> &[Event] {
        &self.current_update_events
    }

    pub fn given_greenhouse(mut self, kind: &str, name: &str) -> Self {
        let kind = self.game.known.greenhouses.find(kind).unwrap();
        let (id, operation) = self.game.planting.create_greenhouse(&kind).unwrap();
        operation();
        self.greenhouses.insert(name.to_string(), id);
        self
    }

    pub fn given_plant(mut self, greenhouse: &str, species: &str, name: &str) -> Self {
        let greenhouse = *self.greenhouses.get(greenhouse).unwrap();
        let kind = self.game.known.plants.find(species).unwrap();
        let (id, operation) = self.game.planting.create_plant(greenhouse, &kind).unwrap();
        operation();
        self.plants.insert(name.to_string(), id);
        self
    }

    pub fn given_plant_stage(mut self, name: &str, stage: Stage, progress: f32) -> Self {
        let id = *self.plants.get(name).unwrap();
        let plant = self
            .game
            .planting
            .plants
            .iter_mut()
            .find(|plant| plant.id == id)
            .unwrap();
        plant.stage = stage;
        plant.progress = progress;
        self
    }

    pub fn given_plant_resources(mut self, name: &str, moisture: f32, nutrition: f32) -> Self {
        let id = *self.plants.get(name).unwrap();
        let plant = self
            .game
            .planting
            .plants
            .iter_mut()
            .find(|plant| plant.id == id)
            .unwrap();
        plant.moisture = moisture;
        plant.nutrition = nutrition;
        self
    }

    pub fn given_worker(mut self, role: Role, name: &str) -> Self {
        let (id, operation) = self.game.working.hire_worker(name, role).unwrap();
        operation();
        self.workers.insert(name.to_string(), id);
        self
    }

    pub fn given_observer(mut self, greenhouse: &str, worker: &str) -> Self {
        let greenhouse = *self.greenhouses.get(greenhouse).unwrap();
        let worker = *self.workers.get(worker).unwrap();
        self.game
            .planting
            .attach_observer(greenhouse, worker)
            .unwrap();
        self
    }

    pub fn given_stock(mut self, item: &str, quantity: u32) -> Self {
        let kind = self.game.known.items.find(item).unwrap();
        self.game.trading.add_stock(&kind, quantity);
        self
    }

    pub fn given_customer(
        mut self,
        behaviour: Behaviour,
        wants: &str,
        quantity: u32,
        name: &str,
    ) -> Self {
        let kind = self.game.known.items.find(wants).unwrap();
        let (id, operation) = self
            .game
            .serving
            .spawn_customer(behaviour, &kind, quantity)
            .unwrap();
        operation();
        self.customers.insert(name.to_string(), id);
        self
    }

    pub fn when_performs<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&Self) -> Action,
    {
        let action = action(&self);
        self.current_action_result = self.game.perform_action(action);
        self
    }

    pub fn when_time_passes(mut self, time: f32) -> Self {
        self.current_update_events = self.game.update(time);
        self
    }

    pub fn then_action_events_should_be<F>(mut self, expected_events: F) -> Self
    where
        F: FnOnce(&Self) -> Vec<Event>,
    {
        assert!(self.current_action_result.is_ok());
        let actual_events =
            std::mem::replace(&mut self.current_action_result, Err(ActionError::Test)).unwrap();
        let expected_events = expected_events(&self);
        let actual_events = format!("{:?}", actual_events);
        let expected_events = format!("{:?}", expected_events);
        assert_eq!(actual_events, expected_events);
        self
    }

    pub fn then_action_should_fail<F>(mut self, expected_error: F) -> Self
    where
        F: FnOnce(&Self) -> ActionError,
    {
        let actual_error =
            std::mem::replace(&mut self.current_action_result, Err(ActionError::Test))
                .expect_err("action should fail");
        assert_eq!(actual_error, expected_error(&self));
        self
    }

    pub fn then_plant_stage_should_be(self, name: &str, stage: Stage) -> Self {
        let id = *self.plants.get(name).unwrap();
        let plant = self
            .game
            .planting
            .plants
            .iter()
            .find(|plant| plant.id == id)
            .unwrap();
        assert_eq!(plant.stage, stage);
        self
    }

    pub fn then_stock_should_be(self, item: &str, quantity: u32) -> Self {
        let kind = self.game.known.items.find(item).unwrap();
        let actual = self
            .game
            .trading
            .slots
            .iter()
            .find(|slot| slot.kind.id == kind.id)
            .map(|slot| slot.quantity)
            .unwrap_or(0);
        assert_eq!(actual, quantity);
        self
    }

    pub fn then_funds_should_be(self, amount: f32) -> Self {
        assert!(
            (self.game.trading.funds - amount).abs() < 1e-3,
            "funds {} != {}",
            self.game.trading.funds,
            amount
        );
        self
    }
}
