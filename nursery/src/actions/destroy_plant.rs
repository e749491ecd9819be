use log::info;

use crate::api::{ActionError, Event};
use crate::history::EntityRef;
use crate::planting::PlantId;
use crate::Game;

impl Game {
    /// Clears a dead plant out of its greenhouse.
    pub(crate) fn destroy_plant(&mut self, plant: PlantId) -> Result<Vec<Event>, ActionError> {
        let operation = self.planting.destroy_plant(plant)?;
        let events: Vec<Event> = vec![operation().into()];
        self.history.clear(EntityRef::Plant(plant));
        info!("Removes dead plant {plant:?}");
        Ok(events)
    }
}
