use log::info;
use serde::Deserialize;

use crate::collections::{Dictionary, DictionaryError};
use crate::planting::{GreenhouseKey, GreenhouseKind, PlantKey, PlantKind};
use crate::trading::{ItemKey, ItemKind};

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    Dictionary(DictionaryError),
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        DataError::Json(error)
    }
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        DataError::Dictionary(error)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerSchedule {
    pub spawn_interval: f32,
    pub weights: [u32; 3],
    pub service_time: f32,
}

impl Default for CustomerSchedule {
    fn default() -> Self {
        Self {
            spawn_interval: 30.0,
            weights: [6, 3, 1],
            service_time: 10.0,
        }
    }
}

#[derive(Default)]
pub struct Knowledge {
    pub greenhouses: Dictionary<GreenhouseKey, GreenhouseKind>,
    pub plants: Dictionary<PlantKey, PlantKind>,
    pub items: Dictionary<ItemKey, ItemKind>,
    pub schedule: CustomerSchedule,
}

#[derive(Debug, Deserialize)]
struct GreenhouseKindData {
    name: String,
    capacity: usize,
}

#[derive(Debug, Deserialize)]
struct PlantKindData {
    name: String,
    growth_rate: f32,
    transpiration: f32,
    appetite: f32,
    fruits: u32,
    visual: String,
}

#[derive(Debug, Deserialize)]
struct ItemKindData {
    name: String,
    price: f32,
}

#[derive(Debug, Deserialize)]
struct KnowledgeData {
    greenhouses: Vec<GreenhouseKindData>,
    plants: Vec<PlantKindData>,
    items: Vec<ItemKindData>,
    customers: CustomerSchedule,
}

impl Knowledge {
    pub fn from_json(text: &str) -> Result<Knowledge, DataError> {
        let data: KnowledgeData = serde_json::from_str(text)?;
        let mut knowledge = Knowledge::default();
        for (index, data) in data.greenhouses.into_iter().enumerate() {
            let id = GreenhouseKey(index + 1);
            let kind = GreenhouseKind {
                id,
                name: data.name.clone(),
                capacity: data.capacity,
            };
            knowledge.greenhouses.insert(id, data.name, kind);
        }
        for (index, data) in data.plants.into_iter().enumerate() {
            let id = PlantKey(index + 1);
            let kind = PlantKind {
                id,
                name: data.name.clone(),
                growth_rate: data.growth_rate,
                transpiration: data.transpiration,
                appetite: data.appetite,
                fruits: data.fruits,
                visual: data.visual,
            };
            knowledge.plants.insert(id, data.name, kind);
        }
        for (index, data) in data.items.into_iter().enumerate() {
            let id = ItemKey(index + 1);
            let kind = ItemKind {
                id,
                name: data.name.clone(),
                price: data.price,
            };
            knowledge.items.insert(id, data.name, kind);
        }
        knowledge.schedule = data.customers;
        info!(
            "Loads knowledge: {} greenhouse kinds, {} plant kinds, {} item kinds",
            knowledge.greenhouses.len(),
            knowledge.plants.len(),
            knowledge.items.len()
        );
        Ok(knowledge)
    }
}
