use crate::api::{ActionError, Event};
use crate::planting::GreenhouseId;
use crate::working::WorkerId;
use crate::Game;

impl Game {
    pub(crate) fn attach_worker(
        &mut self,
        greenhouse: GreenhouseId,
        worker: WorkerId,
    ) -> Result<Vec<Event>, ActionError> {
        self.working.get_worker(worker)?;
        let events = self.planting.attach_observer(greenhouse, worker)?;
        Ok(vec![events.into()])
    }

    pub(crate) fn detach_worker(
        &mut self,
        greenhouse: GreenhouseId,
        worker: WorkerId,
    ) -> Result<Vec<Event>, ActionError> {
        self.working.get_worker(worker)?;
        let events = self.planting.detach_observer(greenhouse, worker)?;
        Ok(vec![events.into()])
    }
}
