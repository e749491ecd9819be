use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::collections::Shared;
use crate::trading::{ItemKey, ItemKind};

/// VIPs pay this fraction less than the listed price.
pub const VIP_DISCOUNT: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behaviour {
    Regular,
    Vip,
    Robber,
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub behaviour: Behaviour,
    pub wants: Shared<ItemKind>,
    pub quantity: u32,
    /// Seconds until the interaction resolves.
    pub service: f32,
}

/// Counting RNG: a snapshot stores (seed, draws) and replays the stream,
/// so a loaded game keeps producing the same visitors.
pub struct Random {
    seed: u64,
    draws: u64,
    rng: StdRng,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draws: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn restore(seed: u64, draws: u64) -> Self {
        let mut random = Random::new(seed);
        for _ in 0..draws {
            random.rng.next_u32();
        }
        random.draws = draws;
        random
    }

    /// One draw in [0, bound). Always consumes exactly one value of the
    /// underlying stream, whatever the bound.
    pub fn max(&mut self, bound: u32) -> u32 {
        self.draws += 1;
        self.rng.next_u32() % bound.max(1)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Serving {
    CustomerAppeared {
        id: CustomerId,
        behaviour: Behaviour,
        wants: ItemKey,
        quantity: u32,
    },
    CustomerServed {
        id: CustomerId,
        item: ItemKey,
        quantity: u32,
        paid: f32,
    },
    CustomerBrowsed {
        id: CustomerId,
    },
    TheftOccurred {
        id: CustomerId,
        item: ItemKey,
        quantity: u32,
    },
    CustomerVanished {
        id: CustomerId,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ServingError {
    CustomerNotFound { id: CustomerId },
}

/// The customer manager: active set, spawn schedule and the weighted
/// factory picking among Regular/Vip/Robber.
pub struct ServingDomain {
    pub customers: Vec<Customer>,
    pub customers_sequence: usize,
    pub spawn_interval: f32,
    pub spawn_clock: f32,
    pub weights: [u32; 3],
    pub service_time: f32,
    pub random: Random,
}

impl Default for ServingDomain {
    fn default() -> Self {
        Self {
            customers: vec![],
            customers_sequence: 0,
            spawn_interval: 30.0,
            spawn_clock: 0.0,
            weights: [6, 3, 1],
            service_time: 10.0,
            random: Random::new(0),
        }
    }
}

impl ServingDomain {
    pub fn load_customers(&mut self, customers: Vec<Customer>, sequence: usize) {
        self.customers_sequence = sequence;
        self.customers.extend(customers);
    }

    /// The weighted factory: [regular, vip, robber] weights, one draw.
    pub fn pick_behaviour(&mut self) -> Behaviour {
        let total: u32 = self.weights.iter().sum();
        let mut roll = self.random.max(total);
        for (index, weight) in self.weights.iter().enumerate() {
            if roll < *weight {
                return match index {
                    0 => Behaviour::Regular,
                    1 => Behaviour::Vip,
                    _ => Behaviour::Robber,
                };
            }
            roll -= weight;
        }
        Behaviour::Regular
    }
}
