use log::info;

use crate::api::{ActionError, Event};
use crate::working::{WorkerId, Working};
use crate::Game;

impl Game {
    /// Patrol touches no plant: it only confirms the worker made a round.
    pub(crate) fn patrol(&mut self, worker: WorkerId) -> Result<Vec<Event>, ActionError> {
        let worker = self.working.get_worker(worker)?;
        info!("Worker {} patrols the greenhouses", worker.name);
        let id = worker.id;
        Ok(vec![vec![Working::PatrolCompleted { worker: id }].into()])
    }
}
