use crate::collections::Shared;
use crate::planting::{
    Greenhouse, GreenhouseId, GreenhouseKind, Planting, PlantingDomain, PlantingError,
};

impl PlantingDomain {
    pub fn create_greenhouse<'operation>(
        &'operation mut self,
        kind: &Shared<GreenhouseKind>,
    ) -> Result<(GreenhouseId, impl FnOnce() -> Vec<Planting> + 'operation), PlantingError> {
        let id = GreenhouseId(self.greenhouses_sequence + 1);
        let greenhouse = Greenhouse {
            id,
            kind: kind.clone(),
            observers: vec![],
        };
        let operation = move || {
            self.greenhouses_sequence += 1;
            self.greenhouses.push(greenhouse);
            vec![Planting::GreenhouseAppeared { id }]
        };
        Ok((id, operation))
    }
}
