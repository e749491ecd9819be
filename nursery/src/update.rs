use log::{info, warn};

use crate::api::{Action, Event};
use crate::planting::Planting;
use crate::serving::{Behaviour, Customer, Serving, VIP_DISCOUNT};
use crate::working::StageReport;
use crate::Game;

impl Game {
    /// One simulation tick. Growth and its notifications resolve before
    /// customers, so a harvest credited this tick is sellable this tick.
    pub fn update(&mut self, time: f32) -> Vec<Event> {
        let mut events = vec![];

        let planting_events = self.planting.update(time);
        let changes: Vec<Planting> = planting_events
            .iter()
            .filter(|event| matches!(event, Planting::StageChanged { .. }))
            .cloned()
            .collect();
        if !planting_events.is_empty() {
            events.push(planting_events.into());
        }
        events.extend(self.notify_stage_changes(&changes));

        let (serving_events, due) = self.serving.update(time, &self.trading);
        if !serving_events.is_empty() {
            events.push(serving_events.into());
        }
        for customer in due {
            events.extend(self.settle_customer(&customer));
        }

        events
    }

    /// Synchronous notification pass: every stage change reaches every
    /// observer attached at pass start, in registration order, exactly
    /// once. Commands scheduled by observers run only after the pass, so
    /// the observer list never mutates mid-iteration.
    pub(crate) fn notify_stage_changes(&mut self, changes: &[Planting]) -> Vec<Event> {
        let mut reactions: Vec<Action> = vec![];
        for change in changes {
            let (plant, greenhouse, before, after) = match change {
                Planting::StageChanged {
                    plant,
                    greenhouse,
                    before,
                    after,
                } => (*plant, *greenhouse, *before, *after),
                _ => continue,
            };
            let observers = match self.planting.get_greenhouse(greenhouse) {
                Ok(house) => house.observers.clone(),
                Err(error) => {
                    warn!("Unable to notify {greenhouse:?} observers: {error:?}");
                    continue;
                }
            };
            let report = match self.planting.get_plant(plant) {
                Ok(plant) => StageReport {
                    plant: plant.id,
                    before,
                    after,
                    moisture: plant.moisture,
                    nutrition: plant.nutrition,
                    cycle: plant.cycle,
                },
                // already gone this tick, nothing to look at
                Err(_) => continue,
            };
            for observer in observers {
                match self.working.get_worker(observer) {
                    Ok(worker) => reactions.extend(worker.react(&report)),
                    Err(error) => warn!("Unable to notify {observer:?}: {error:?}"),
                }
            }
        }
        let mut events = vec![];
        for action in reactions {
            let mut command = self.compose(action);
            match self.execute_command(&mut command) {
                Ok(batch) => events.extend(batch),
                Err(error) => {
                    warn!("Unable to execute command {:?}: {error:?}", command.id)
                }
            }
        }
        events
    }

    pub(crate) fn settle_customer(&mut self, customer: &Customer) -> Vec<Event> {
        let mut events = vec![];
        match customer.behaviour {
            Behaviour::Regular | Behaviour::Vip => {
                let discount = match customer.behaviour {
                    Behaviour::Vip => VIP_DISCOUNT,
                    _ => 0.0,
                };
                match self.trading.remove_stock(customer.wants.id, customer.quantity) {
                    Ok((true, stock_events)) => {
                        let paid =
                            customer.wants.price * customer.quantity as f32 * (1.0 - discount);
                        info!(
                            "Customer {:?} buys {} x{} for {paid}",
                            customer.id, customer.wants.name, customer.quantity
                        );
                        events.push(stock_events.into());
                        events.push(self.trading.deposit_funds(paid).into());
                        events.push(
                            vec![Serving::CustomerServed {
                                id: customer.id,
                                item: customer.wants.id,
                                quantity: customer.quantity,
                                paid,
                            }]
                            .into(),
                        );
                    }
                    Ok((false, _)) => {
                        events.push(vec![Serving::CustomerBrowsed { id: customer.id }].into());
                    }
                    Err(error) => {
                        warn!("Unable to serve customer {:?}: {error:?}", customer.id);
                        events.push(vec![Serving::CustomerBrowsed { id: customer.id }].into());
                    }
                }
            }
            Behaviour::Robber => {
                match self.trading.seize_stock(customer.wants.id, customer.quantity) {
                    Ok((taken, stock_events)) if taken > 0 => {
                        info!(
                            "Robber {:?} takes {} x{taken}",
                            customer.id, customer.wants.name
                        );
                        events.push(stock_events.into());
                        events.push(
                            vec![Serving::TheftOccurred {
                                id: customer.id,
                                item: customer.wants.id,
                                quantity: taken,
                            }]
                            .into(),
                        );
                    }
                    Ok(_) => {
                        events.push(vec![Serving::CustomerBrowsed { id: customer.id }].into());
                    }
                    Err(error) => {
                        warn!("Unable to settle robber {:?}: {error:?}", customer.id);
                        events.push(vec![Serving::CustomerBrowsed { id: customer.id }].into());
                    }
                }
            }
        }
        events.push(vec![Serving::CustomerVanished { id: customer.id }].into());
        events
    }
}
