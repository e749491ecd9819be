use crate::working::{Role, Worker, WorkerId, Working, WorkingDomain, WorkingError};

impl WorkingDomain {
    pub fn hire_worker<'operation>(
        &'operation mut self,
        name: &str,
        role: Role,
    ) -> Result<(WorkerId, impl FnOnce() -> Vec<Working> + 'operation), WorkingError> {
        let id = WorkerId(self.workers_sequence + 1);
        let worker = Worker {
            id,
            name: name.to_string(),
            role,
        };
        let operation = move || {
            self.workers_sequence += 1;
            self.workers.push(worker);
            vec![Working::WorkerHired { id, role }]
        };
        Ok((id, operation))
    }
}
