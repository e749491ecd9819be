use crate::planting::{GreenhouseId, Planting, PlantingDomain, PlantingError};
use crate::working::WorkerId;

impl PlantingDomain {
    /// Idempotent registration: attaching an already attached worker is a
    /// no-op, not an error.
    pub fn attach_observer(
        &mut self,
        id: GreenhouseId,
        worker: WorkerId,
    ) -> Result<Vec<Planting>, PlantingError> {
        let greenhouse = self.get_greenhouse_mut(id)?;
        if greenhouse.observers.contains(&worker) {
            return Ok(vec![]);
        }
        greenhouse.observers.push(worker);
        Ok(vec![Planting::ObserverAttached {
            greenhouse: id,
            worker,
        }])
    }

    pub fn detach_observer(
        &mut self,
        id: GreenhouseId,
        worker: WorkerId,
    ) -> Result<Vec<Planting>, PlantingError> {
        let greenhouse = self.get_greenhouse_mut(id)?;
        let index = match greenhouse.observers.iter().position(|observer| *observer == worker) {
            Some(index) => index,
            None => return Ok(vec![]),
        };
        greenhouse.observers.remove(index);
        Ok(vec![Planting::ObserverDetached {
            greenhouse: id,
            worker,
        }])
    }
}
