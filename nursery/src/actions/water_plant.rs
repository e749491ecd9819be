use crate::api::{ActionError, Event};
use crate::planting::PlantId;
use crate::Game;

impl Game {
    pub(crate) fn water_plant(
        &mut self,
        plant: PlantId,
        amount: f32,
    ) -> Result<Vec<Event>, ActionError> {
        let operation = self.planting.water_plant(plant, amount)?;
        Ok(vec![operation().into()])
    }
}
