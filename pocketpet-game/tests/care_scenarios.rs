use pocketpet_game::constants::{MSG_NOT_SLEEPY, STORAGE_KEY};
use pocketpet_game::{
    Animation, EngineConfig, ManualClock, MemoryStorage, PetEngine, PetState, PetStorage,
    StartReport, catch_up, decay_tick, encode_record,
};

const T: i64 = 1_720_000_000_000;
const MINUTE: i64 = 60_000;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn engine_with(
    saved: Option<&PetState>,
    now: i64,
) -> (PetEngine<MemoryStorage, ManualClock>, MemoryStorage) {
    let storage = saved.map_or_else(MemoryStorage::new, |pet| {
        MemoryStorage::with_record(STORAGE_KEY, &encode_record(pet).expect("encode"))
    });
    let engine = PetEngine::new(
        storage.clone(),
        ManualClock::at(now),
        EngineConfig::default_config(),
    );
    (engine, storage)
}

#[test]
fn reopening_after_five_minutes_back_fills_decay() {
    let saved = PetState::fresh("Pet", T);
    let (mut engine, _) = engine_with(Some(&saved), T + 5 * MINUTE);
    assert_eq!(engine.start(), StartReport::Restored { elapsed_units: 5 });

    let pet = engine.current_state();
    assert!(approx(pet.hunger, 70.0));
    assert!(approx(pet.happiness, 75.0));
    assert!(approx(pet.energy, 82.5));
    assert!(approx(pet.health, 100.0));
    assert_eq!(pet.age, saved.age);
    assert_eq!(pet.level, saved.level);
    assert!(approx(pet.exp, saved.exp));
}

#[test]
fn long_absence_of_a_neglected_pet_costs_health() {
    let saved = PetState {
        happiness: 15.0,
        ..PetState::fresh("Pet", T)
    };
    let (mut engine, _) = engine_with(Some(&saved), T + 30 * MINUTE);
    engine.start();
    let pet = engine.current_state();
    assert!(approx(pet.health, 70.0));
    assert!(pet.happiness.abs() < f64::EPSILON);
    assert!(pet.hunger < 21.0);
}

#[test]
fn feeding_near_level_boundary_levels_up() {
    let saved = PetState {
        hunger: 50.0,
        exp: 95.0,
        level: 1,
        ..PetState::fresh("Pet", T)
    };
    let (mut engine, storage) = engine_with(Some(&saved), T);
    engine.start();
    let out = engine.feed();
    assert!(approx(out.state.hunger, 80.0));
    assert!(approx(out.state.exp, 5.0));
    assert_eq!(out.state.level, 2);

    let record = storage.read(STORAGE_KEY).unwrap().expect("saved");
    assert!(record.contains("\"level\":2"));
}

#[test]
fn sleep_refused_when_rested() {
    let saved = PetState {
        energy: 92.0,
        ..PetState::fresh("Pet", T)
    };
    let (mut engine, _) = engine_with(Some(&saved), T);
    engine.start();
    let before = engine.current_state().clone();
    let out = engine.sleep();
    assert!(!out.accepted);
    assert_eq!(out.effect.message, MSG_NOT_SLEEPY);
    assert_eq!(engine.current_state(), &before);
    assert!(engine.presentation().is_daytime());
}

#[test]
fn sleep_accepted_cycles_night_and_day() {
    let saved = PetState {
        energy: 50.0,
        health: 80.0,
        ..PetState::fresh("Pet", T)
    };
    let (mut engine, _) = engine_with(Some(&saved), T);
    engine.start();
    let out = engine.sleep();
    assert!(approx(out.state.energy, 90.0));
    assert!(approx(out.state.health, 90.0));
    assert!(!engine.presentation().is_daytime());
    assert_eq!(engine.presentation().animation(), Animation::Sleep);

    engine.clock().advance(2_999);
    engine.refresh_presentation();
    assert!(!engine.presentation().is_daytime());

    engine.clock().advance(1);
    engine.refresh_presentation();
    assert!(engine.presentation().is_daytime());
    assert_eq!(engine.presentation().animation(), Animation::Idle);
}

#[test]
fn playing_caps_happiness() {
    let saved = PetState {
        happiness: 90.0,
        energy: 20.0,
        exp: 0.0,
        ..PetState::fresh("Pet", T)
    };
    let (mut engine, _) = engine_with(Some(&saved), T);
    engine.start();
    let out = engine.play();
    assert!(approx(out.state.happiness, 100.0));
    assert!(approx(out.state.energy, 5.0));
    assert!(approx(out.state.exp, 15.0));
}

#[test]
fn repeated_ticks_are_deterministic() {
    let start = PetState::fresh("Pet", T);
    let run = || {
        (1..=500_i64).fold(start.clone(), |pet, i| decay_tick(&pet, T + i * 10_000))
    };
    let first = run();
    let second = run();
    assert_eq!(first, second);
    assert_eq!(first.age, 500);
    assert!(first.hunger.abs() < f64::EPSILON);
    assert!(first.health < 100.0);
}

#[test]
fn catch_up_differs_from_repeated_ticks() {
    let start = PetState::fresh("Pet", T);
    let caught = catch_up(&start, T + 10 * MINUTE, 60_000).state;
    let ticked = (1..=60_i64).fold(start.clone(), |pet, i| decay_tick(&pet, T + i * 10_000));
    assert!(approx(caught.hunger, 60.0));
    assert!(approx(ticked.hunger, 50.0));
    assert_eq!(caught.age, 0);
    assert_eq!(ticked.age, 60);
}

#[test]
fn frequent_reopening_still_charges_every_minute() {
    let storage = MemoryStorage::new();
    let clock = ManualClock::at(T);
    let open = || {
        PetEngine::new(
            storage.clone(),
            clock.clone(),
            EngineConfig::default_config(),
        )
    };

    let mut engine = open();
    assert_eq!(engine.start(), StartReport::Fresh);
    engine.stop();

    for _ in 0..20 {
        clock.advance(30_000);
        let mut engine = open();
        engine.start();
        engine.stop();
    }

    let mut engine = open();
    engine.start();
    let pet = engine.current_state();
    assert!(approx(pet.hunger, 60.0), "hunger {}", pet.hunger);
    assert!(approx(pet.happiness, 70.0));
    assert!(approx(pet.energy, 75.0));
    assert_eq!(pet.last_update, T + 10 * MINUTE);
}
