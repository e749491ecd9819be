use crate::api::{ActionError, Event};
use crate::planting::{PlantId, Stage};
use crate::Game;

impl Game {
    /// Lethal event injection: a forced transition to Dead from any live
    /// stage. Observers are notified before the call returns.
    pub(crate) fn kill_plant(&mut self, plant: PlantId) -> Result<Vec<Event>, ActionError> {
        let change = self.planting.force_stage(plant, Stage::Dead)?;
        let mut events: Vec<Event> = vec![change.clone().into()];
        events.extend(self.notify_stage_changes(&[change]));
        Ok(events)
    }
}
