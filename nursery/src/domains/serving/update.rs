use log::info;

use crate::serving::Serving::CustomerAppeared;
use crate::serving::{Behaviour, Customer, CustomerId, Serving, ServingDomain};
use crate::trading::TradingDomain;

impl ServingDomain {
    /// Advances the spawn schedule and customer clocks. Customers whose
    /// service ran out this tick are removed from the active set and
    /// returned for settlement, VIPs first.
    pub fn update(&mut self, time: f32, trading: &TradingDomain) -> (Vec<Serving>, Vec<Customer>) {
        let mut events = vec![];

        self.spawn_clock += time;
        while self.spawn_clock >= self.spawn_interval {
            self.spawn_clock -= self.spawn_interval;
            let behaviour = self.pick_behaviour();
            let stocked: Vec<usize> = trading
                .slots
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.quantity > 0)
                .map(|(index, _)| index)
                .collect();
            if stocked.is_empty() {
                // nothing on the shelves, the visitor walks on by
                continue;
            }
            let choice = self.random.max(stocked.len() as u32) as usize;
            let slot = &trading.slots[stocked[choice]];
            let quantity = 1 + self.random.max(3);
            let id = CustomerId(self.customers_sequence + 1);
            self.customers_sequence += 1;
            info!(
                "Customer {:?} {:?} arrives for {} x{}",
                id, behaviour, slot.kind.name, quantity
            );
            events.push(CustomerAppeared {
                id,
                behaviour,
                wants: slot.kind.id,
                quantity,
            });
            self.customers.push(Customer {
                id,
                behaviour,
                wants: slot.kind.clone(),
                quantity,
                service: self.service_time,
            });
        }

        for customer in self.customers.iter_mut() {
            customer.service -= time;
        }
        let mut due = vec![];
        let mut index = 0;
        while index < self.customers.len() {
            if self.customers[index].service <= 0.0 {
                due.push(self.customers.remove(index));
            } else {
                index += 1;
            }
        }
        // VIPs are settled before everyone else resolved in the same tick
        due.sort_by_key(|customer| match customer.behaviour {
            Behaviour::Vip => 0,
            _ => 1,
        });

        (events, due)
    }
}
