use nursery::data::Knowledge;
use nursery::persistence::SaveError;
use nursery::planting::Stage;
use nursery::serving::Behaviour;
use nursery::working::Role;
use nursery::Game;

use crate::testing::{knowledge, NurseryTestScenario};

mod testing;

const TRIMMED_KNOWLEDGE: &str = r#"{
    "greenhouses": [{"name": "standard", "capacity": 12}],
    "plants": [
        {"name": "lettuce", "growth_rate": 1.0, "transpiration": 0.004, "appetite": 0.002, "fruits": 1, "visual": "lettuce"}
    ],
    "items": [{"name": "lettuce", "price": 8.0}],
    "customers": {"spawn_interval": 30.0, "weights": [6, 3, 1], "service_time": 10.0}
}"#;

fn populated_game() -> Game {
    let scenario = NurseryTestScenario::new()
        .given_greenhouse("standard", "house")
        .given_plant("house", "lettuce", "crop")
        .given_plant("house", "pumpkin", "gourd")
        .given_plant_stage("gourd", Stage::Growing, 40.0)
        .given_worker(Role::Harvest, "sam")
        .given_observer("house", "sam")
        .given_stock("lettuce", 6)
        .given_stock("pumpkin", 2)
        .given_customer(Behaviour::Vip, "pumpkin", 1, "vera")
        .when_time_passes(20.0);
    scenario.game
}

#[test]
fn test_loaded_game_replays_the_same_events() {
    let mut original = populated_game();
    let bytes = original.save_state().unwrap();

    let mut replica = Game::new(knowledge(), 0);
    replica.load_state(&bytes).unwrap();

    for _ in 0..12 {
        let expected = format!("{:?}", original.update(7.0));
        let actual = format!("{:?}", replica.update(7.0));
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_save_round_trip_preserves_state() {
    let original = populated_game();
    let bytes = original.save_state().unwrap();

    let mut replica = Game::new(knowledge(), 0);
    replica.load_state(&bytes).unwrap();

    assert_eq!(replica.planting.plants.len(), original.planting.plants.len());
    assert_eq!(
        replica.planting.greenhouses[0].observers,
        original.planting.greenhouses[0].observers
    );
    assert_eq!(replica.working.workers.len(), 1);
    assert_eq!(replica.working.workers[0].name, "sam");
    assert_eq!(replica.trading.funds, original.trading.funds);
    assert_eq!(
        replica.serving.customers.len(),
        original.serving.customers.len()
    );
    assert_eq!(replica.serving.random.draws(), original.serving.random.draws());
}

#[test]
fn test_load_rejects_unknown_kind() {
    let original = populated_game();
    let bytes = original.save_state().unwrap();

    let mut replica = Game::new(Knowledge::from_json(TRIMMED_KNOWLEDGE).unwrap(), 0);
    let error = replica.load_state(&bytes).unwrap_err();
    assert!(matches!(
        error,
        SaveError::UnknownKind { name } if name == "pumpkin"
    ));
    // the failed load leaves the running game untouched
    assert!(replica.planting.plants.is_empty());
}

#[test]
fn test_truncated_snapshot_fails_to_decode() {
    let game = populated_game();
    let bytes = game.save_state().unwrap();

    let mut replica = Game::new(knowledge(), 0);
    let error = replica.load_state(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(error, SaveError::Decode(_)));
}
