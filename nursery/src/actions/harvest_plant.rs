use log::info;

use crate::api::{ActionError, Event};
use crate::history::EntityRef;
use crate::planting::PlantId;
use crate::Game;

impl Game {
    /// The plant leaves the greenhouse and its yield is credited to the
    /// store under the species' produce item.
    pub(crate) fn harvest_plant(&mut self, plant: PlantId) -> Result<Vec<Event>, ActionError> {
        let species = self.planting.get_plant(plant)?.kind.name.clone();
        let produce = self.known.items.find(&species)?;
        let (fruits, operation) = self.planting.harvest_plant(plant)?;
        let mut events: Vec<Event> = vec![operation().into()];
        events.push(self.trading.add_stock(&produce, fruits).into());
        // the plant is gone, its own rewind history goes with it
        self.history.clear(EntityRef::Plant(plant));
        info!("Harvests {species} {plant:?}, yield {fruits}");
        Ok(events)
    }
}
