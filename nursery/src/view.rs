use serde::Serialize;

use crate::planting::{GreenhouseId, PlantId, Stage};
use crate::serving::{Behaviour, CustomerId};
use crate::Game;

/// Read-only snapshots for the scene/UI collaborators. The core never
/// calls into rendering; renderers poll these views.
#[derive(Debug, Clone, Serialize)]
pub struct PlantView {
    pub id: PlantId,
    pub greenhouse: GreenhouseId,
    pub species: String,
    pub visual: String,
    pub stage: Stage,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockView {
    pub item: String,
    pub quantity: u32,
    pub price: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerView {
    pub id: CustomerId,
    pub behaviour: Behaviour,
    pub wants: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    pub plants: Vec<PlantView>,
    pub stock: Vec<StockView>,
    pub customers: Vec<CustomerView>,
    pub funds: f32,
}

impl Game {
    pub fn look_around(&self) -> GameView {
        let plants = self
            .planting
            .plants
            .iter()
            .map(|plant| PlantView {
                id: plant.id,
                greenhouse: plant.greenhouse,
                species: plant.kind.name.clone(),
                visual: plant.kind.visual.clone(),
                stage: plant.stage,
            })
            .collect();
        let stock = self
            .trading
            .slots
            .iter()
            .map(|slot| StockView {
                item: slot.kind.name.clone(),
                quantity: slot.quantity,
                price: slot.kind.price,
            })
            .collect();
        let customers = self
            .serving
            .customers
            .iter()
            .map(|customer| CustomerView {
                id: customer.id,
                behaviour: customer.behaviour,
                wants: customer.wants.name.clone(),
                quantity: customer.quantity,
            })
            .collect();
        GameView {
            plants,
            stock,
            customers,
            funds: self.trading.funds,
        }
    }
}
