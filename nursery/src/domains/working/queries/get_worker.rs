use crate::working::WorkingError::WorkerNotFound;
use crate::working::{Worker, WorkerId, WorkingDomain, WorkingError};

impl WorkingDomain {
    pub fn get_worker(&self, id: WorkerId) -> Result<&Worker, WorkingError> {
        self.workers
            .iter()
            .find(|worker| worker.id == id)
            .ok_or(WorkerNotFound { id })
    }
}
