use log::info;

use crate::api::{ActionError, Event};
use crate::planting::GreenhouseId;
use crate::Game;

impl Game {
    pub(crate) fn plant_seed(
        &mut self,
        greenhouse: GreenhouseId,
        species: &str,
    ) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.plants.find(species)?;
        let (id, operation) = self.planting.create_plant(greenhouse, &kind)?;
        info!("Plants {species} {id:?} in {greenhouse:?}");
        Ok(vec![operation().into()])
    }
}
