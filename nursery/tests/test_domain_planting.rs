use nursery::api::Action;
use nursery::collections::Shared;
use nursery::history::EntityRef;
use nursery::planting::{
    GreenhouseId, GreenhouseKey, GreenhouseKind, GrowthCycle, PlantId, PlantKey, PlantKind,
    Planting, PlantingDomain, PlantingError, Stage,
};

use crate::testing::NurseryTestScenario;

mod testing;

fn greenhouse_kind(capacity: usize) -> Shared<GreenhouseKind> {
    Shared::new(GreenhouseKind {
        id: GreenhouseKey(1),
        name: "standard".to_string(),
        capacity,
    })
}

fn plant_kind(name: &str, growth_rate: f32) -> Shared<PlantKind> {
    Shared::new(PlantKind {
        id: PlantKey(1),
        name: name.to_string(),
        growth_rate,
        transpiration: 0.0,
        appetite: 0.0,
        fruits: 2,
        visual: name.to_string(),
    })
}

fn domain_with_plant(growth_rate: f32) -> (PlantingDomain, GreenhouseId, PlantId) {
    let mut domain = PlantingDomain::default();
    let kind = greenhouse_kind(12);
    let (greenhouse, operation) = domain.create_greenhouse(&kind).unwrap();
    operation();
    let kind = plant_kind("lettuce", growth_rate);
    let (plant, operation) = domain.create_plant(greenhouse, &kind).unwrap();
    operation();
    (domain, greenhouse, plant)
}

#[test]
fn test_seed_grows_without_skipping_stages() {
    let (mut domain, _, plant) = domain_with_plant(1.0);

    let events = domain.update(30.0);
    // 30s at seed half rate gives 15 of the 25 needed
    assert!(matches!(
        events.as_slice(),
        [Planting::PlantUpdated { progress, .. }] if *progress == 15.0
    ));
    assert_eq!(domain.plants[0].stage, Stage::Seed);

    let events = domain.update(30.0);
    assert!(matches!(
        events.as_slice(),
        [Planting::StageChanged {
            plant: changed,
            before: Stage::Seed,
            after: Stage::Growing,
            ..
        }] if *changed == plant
    ));
    assert_eq!(domain.plants[0].stage, Stage::Growing);
    // leftover progress from the previous stage is discarded
    assert_eq!(domain.plants[0].progress, 0.0);
}

#[test]
fn test_boosted_cycle_doubles_growth() {
    let (mut domain, _, plant) = domain_with_plant(1.0);
    let operation = domain.fertilize_plant(plant, 1.0).unwrap();
    operation();
    assert_eq!(domain.plants[0].cycle, GrowthCycle::Boosted);

    domain.update(25.0);
    // 25s at seed half rate doubled reaches the threshold exactly
    assert_eq!(domain.plants[0].stage, Stage::Growing);
}

#[test]
fn test_growth_stalls_when_dry() {
    let (mut domain, _, _) = domain_with_plant(1.0);
    domain.plants[0].moisture = 0.0;

    domain.update(100.0);
    assert_eq!(domain.plants[0].stage, Stage::Seed);
    assert_eq!(domain.plants[0].progress, 0.0);
}

#[test]
fn test_ripe_plant_spoils_on_the_shelf() {
    let (mut domain, _, plant) = domain_with_plant(1.0);
    domain.plants[0].stage = Stage::Ripe;

    let events = domain.update(200.0);
    assert!(matches!(
        events.as_slice(),
        [Planting::StageChanged {
            plant: changed,
            before: Stage::Ripe,
            after: Stage::Dead,
            ..
        }] if *changed == plant
    ));
}

#[test]
fn test_dead_stage_is_absorbing() {
    let (mut domain, _, plant) = domain_with_plant(1.0);
    domain.force_stage(plant, Stage::Dead).unwrap();

    let events = domain.update(1000.0);
    assert!(events.is_empty());
    assert_eq!(domain.plants[0].stage, Stage::Dead);

    let error = domain.force_stage(plant, Stage::Dead).unwrap_err();
    assert!(matches!(error, PlantingError::InvalidTransition { .. }));
}

#[test]
fn test_forced_transition_targets_death_only() {
    let (mut domain, _, plant) = domain_with_plant(1.0);
    let error = domain.force_stage(plant, Stage::Ripe).unwrap_err();
    assert!(matches!(
        error,
        PlantingError::InvalidTransition {
            from: Stage::Seed,
            target: Stage::Ripe,
            ..
        }
    ));
}

#[test]
fn test_greenhouse_capacity_limit() {
    let mut domain = PlantingDomain::default();
    let kind = greenhouse_kind(1);
    let (greenhouse, operation) = domain.create_greenhouse(&kind).unwrap();
    operation();
    let kind = plant_kind("lettuce", 1.0);
    let (_, operation) = domain.create_plant(greenhouse, &kind).unwrap();
    operation();

    let error = domain.create_plant(greenhouse, &kind).map(|_| ()).unwrap_err();
    assert_eq!(error, PlantingError::GreenhouseIsFull { id: greenhouse });
}

#[test]
fn test_harvest_only_when_ripe() {
    let (mut domain, _, plant) = domain_with_plant(1.0);
    domain.plants[0].stage = Stage::Growing;

    let error = domain.harvest_plant(plant).map(|_| ()).unwrap_err();
    assert_eq!(
        error,
        PlantingError::NotReadyToHarvest {
            id: plant,
            stage: Stage::Growing
        }
    );

    domain.plants[0].stage = Stage::Ripe;
    let (fruits, operation) = domain.harvest_plant(plant).unwrap();
    operation();
    assert_eq!(fruits, 2);
    assert!(domain.plants.is_empty());
}

#[test]
fn test_care_commands_reject_dead_plants() {
    let (mut domain, _, plant) = domain_with_plant(1.0);
    domain.force_stage(plant, Stage::Dead).unwrap();

    let error = domain.water_plant(plant, 1.0).map(|_| ()).unwrap_err();
    assert_eq!(error, PlantingError::PlantIsDead { id: plant });
    let error = domain.fertilize_plant(plant, 1.0).map(|_| ()).unwrap_err();
    assert_eq!(error, PlantingError::PlantIsDead { id: plant });
}

#[test]
fn test_moisture_is_capped() {
    let (mut domain, _, plant) = domain_with_plant(1.0);
    domain.plants[0].moisture = 0.9;
    let operation = domain.water_plant(plant, 1.0).unwrap();
    operation();
    assert_eq!(domain.plants[0].moisture, 1.0);
}

#[test]
fn test_dead_plant_cleanup_action() {
    let scenario = NurseryTestScenario::new()
        .given_greenhouse("standard", "house")
        .given_plant("house", "lettuce", "crop")
        .given_plant_stage("crop", Stage::Dead, 0.0)
        .when_performs(|scenario| Action::DestroyPlant {
            plant: scenario.plant("crop"),
        });
    let greenhouse = scenario.greenhouse("house");
    let mut game = scenario.game;
    assert!(game.planting.plants.is_empty());

    // the cleanup snapshots the greenhouse, so it rewinds like a harvest
    game.undo_entity(EntityRef::Greenhouse(greenhouse)).unwrap();
    assert_eq!(game.planting.plants.len(), 1);
    assert_eq!(game.planting.plants[0].stage, Stage::Dead);
}

#[test]
fn test_destroy_requires_dead_plant() {
    let (mut domain, _, plant) = domain_with_plant(1.0);

    let error = domain.destroy_plant(plant).map(|_| ()).unwrap_err();
    assert!(matches!(error, PlantingError::InvalidTransition { .. }));

    domain.force_stage(plant, Stage::Dead).unwrap();
    let operation = domain.destroy_plant(plant).unwrap();
    operation();
    assert!(domain.plants.is_empty());
}
