//! Race-level validation: start gate, statistics and termination

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use signal_race::simulation::{
    Direction, ManualClock, Round, RoundLabel, ScenarioCatalog, SimConfig, SimWorld,
    SimulationClock, SimulationPhase, StatsAccumulator, TimeSource,
};

const FRAME: f64 = 1.0 / 30.0;

#[test]
fn test_stats_average_wait_without_departures() {
    let mut stats = StatsAccumulator::new();
    assert_eq!(stats.average_wait(), 0.0);

    stats.accumulate(0.5, [3, 2]);
    assert_eq!(stats.total_wait_time(), 2.5);
    assert_eq!(stats.average_wait(), 0.0);

    stats.record_departure();
    stats.record_departure();
    assert_eq!(stats.cars_cleared(), 2);
    assert_eq!(stats.average_wait(), 1.25);
}

#[test]
fn test_stats_ignore_negative_delta() {
    let mut stats = StatsAccumulator::new();
    stats.accumulate(1.0, [4]);
    stats.accumulate(-1.0, [4]);
    stats.accumulate(f64::NAN, [4]);
    assert_eq!(stats.total_wait_time(), 4.0);
}

#[test]
fn test_simulation_clock_gate() {
    let mut clock = SimulationClock::new();
    assert_eq!(clock.phase(), SimulationPhase::Idle);

    clock.finish(1.0);
    assert_eq!(clock.phase(), SimulationPhase::Idle);

    assert!(clock.start(2.0));
    assert!(!clock.start(3.0));
    assert!(clock.is_running());
    assert_eq!(clock.elapsed(5.0), 3.0);

    clock.finish(7.0);
    assert!(clock.is_finished());
    assert_eq!(clock.elapsed(100.0), 5.0);
}

#[test]
fn test_manual_clock_only_moves_forward() {
    let mut clock = ManualClock::starting_at(1.0);
    clock.advance(0.5);
    clock.advance(-3.0);
    assert_eq!(clock.now(), 1.5);
}

#[test]
fn test_world_waits_for_start_trigger() {
    let mut world = SimWorld::new();
    world.tick(1.0, FRAME);
    world.tick(2.0, FRAME);

    assert_eq!(world.phase(), SimulationPhase::Idle);
    let snapshot = world.snapshot(2.0);
    assert_eq!(snapshot.fixed.round, RoundLabel::NotStarted);
    assert_eq!(snapshot.adaptive.stats.total_wait_time, 0.0);
}

#[test]
fn test_repeated_start_is_ignored() {
    let mut world = SimWorld::new();
    assert!(world.start(0.0));
    world.tick(FRAME, FRAME);
    assert!(!world.start(5.0));

    // The first trigger's timing stands
    assert_eq!(world.fixed().time_remaining(1.0), 19.0);
    assert_eq!(world.phase(), SimulationPhase::Running);
}

#[test]
fn test_first_frame_samples_full_queue() {
    let mut world = SimWorld::new();
    world.start(0.0);
    world.tick(FRAME, FRAME);

    // All 15 round-one cars are counted even though one of them departs
    // during this same frame
    for controller in [world.fixed(), world.adaptive()] {
        let wait = controller.stats().total_wait_time();
        assert!((wait - 15.0 / 30.0).abs() < 1e-12, "{} waited {}", controller.label(), wait);
        assert_eq!(controller.stats().cars_cleared(), 1);
        assert_eq!(controller.total_waiting(), 14);
    }
}

#[test]
fn test_finishing_tick_is_still_sampled() {
    let catalog = ScenarioCatalog::new(vec![Round::new(0, 1)]).unwrap();
    let mut world = SimWorld::with_config(SimConfig::default(), catalog).unwrap();
    world.start(0.0);

    // West is empty, so the adaptive controller hands green to east
    world.tick(0.1, 0.1);
    assert_eq!(world.adaptive().active_direction(), Some(Direction::East));
    assert!((world.adaptive().stats().total_wait_time() - 0.1).abs() < 1e-12);

    // The lone east car leaves and the catalog ends in this tick; the car
    // still counts as waiting for the whole frame
    world.tick(0.2, 0.1);
    let adaptive = world.adaptive();
    assert!(adaptive.is_finished());
    assert_eq!(adaptive.stats().cars_cleared(), 1);
    assert!(
        (adaptive.stats().total_wait_time() - 0.2).abs() < 1e-12,
        "adaptive waited {}",
        adaptive.stats().total_wait_time()
    );

    // Nothing left in the queue, so further frames add nothing
    world.tick(0.3, 0.1);
    assert!((world.adaptive().stats().total_wait_time() - 0.2).abs() < 1e-12);
    assert!(!world.is_over());
}

#[test]
fn test_both_controllers_terminate() {
    let mut world = SimWorld::new();
    let mut clock = ManualClock::new();
    assert!(world.run_to_completion(&mut clock, FRAME, 600.0));

    assert!(world.is_over());
    for controller in [world.fixed(), world.adaptive()] {
        assert!(controller.is_finished());
        assert_eq!(controller.round_number(), 3);
        assert_eq!(controller.stats().cars_cleared(), 47);
        assert_eq!(controller.total_waiting(), 0);
    }

    let snapshot = world.snapshot(clock.now());
    assert_eq!(snapshot.phase, SimulationPhase::Finished);
    assert_eq!(snapshot.fixed.active_direction, None);
    assert_eq!(snapshot.adaptive.round, RoundLabel::Finished);

    // Fixed needs four full green phases
    assert!(clock.now() > 79.0 && clock.now() < 81.0, "took {}", clock.now());
}

#[test]
fn test_adaptive_beats_fixed_on_wait_time() {
    let mut world = SimWorld::new();
    let mut clock = ManualClock::new();
    world.run_to_completion(&mut clock, FRAME, 600.0);

    let fixed = world.fixed().stats();
    let adaptive = world.adaptive().stats();
    assert!(
        adaptive.total_wait_time() < fixed.total_wait_time(),
        "adaptive {} vs fixed {}",
        adaptive.total_wait_time(),
        fixed.total_wait_time()
    );
    assert!(adaptive.average_wait() < fixed.average_wait());
}

#[test]
fn test_adaptive_reaches_round_two_early() {
    let mut world = SimWorld::new();
    world.start(0.0);

    let mut now = 0.0;
    while world.adaptive().round_number() == 1 {
        now += FRAME;
        world.tick(now, FRAME);
        assert!(now < 20.0, "adaptive stuck in round one");
    }

    // ~4s for ten west cars, ~2s for five east cars
    assert!(now > 5.0 && now < 7.5, "round two began at {}", now);
    assert_eq!(world.fixed().round_number(), 1);
    assert_eq!(world.fixed().active_direction(), Some(Direction::West));
}

#[test]
fn test_stats_monotonic_with_jittered_frames() {
    let mut world = SimWorld::new();
    let mut rng = StdRng::seed_from_u64(7);
    world.start(0.0);

    let mut now = 0.0;
    let mut last = [(0.0, 0); 2];
    while !world.is_over() {
        let delta = FRAME * (1.0 + rng.random_range(-0.5..=0.5));
        now += delta;
        world.tick(now, delta);

        for (i, controller) in [world.fixed(), world.adaptive()].into_iter().enumerate() {
            let stats = controller.stats();
            assert!(stats.total_wait_time() >= last[i].0);
            assert!(stats.cars_cleared() >= last[i].1);
            last[i] = (stats.total_wait_time(), stats.cars_cleared());
        }
        assert!(now < 600.0, "race never finished");
    }

    assert_eq!(last[0].1, 47);
    assert_eq!(last[1].1, 47);
}

#[test]
fn test_ticks_after_finish_change_nothing() {
    let mut world = SimWorld::new();
    let mut clock = ManualClock::new();
    world.run_to_completion(&mut clock, FRAME, 600.0);

    let before = world.snapshot(clock.now());
    world.tick(clock.now() + 10.0, 10.0);
    let after = world.snapshot(clock.now());
    assert_eq!(before, after);
}

#[test]
fn test_custom_config() {
    let config = SimConfig {
        fixed_green_time: 5.0,
        ..SimConfig::default()
    };
    let world = SimWorld::with_config(config, ScenarioCatalog::default()).unwrap();
    assert_eq!(world.config.fixed_green_time, 5.0);

    let bad = SimConfig {
        departure_interval: 0.0,
        ..SimConfig::default()
    };
    assert!(bad.validate().is_err());
    assert!(SimWorld::with_config(bad, ScenarioCatalog::default()).is_err());

    let bad_rate = SimConfig {
        frame_rate: f64::NAN,
        ..SimConfig::default()
    };
    assert!(bad_rate.validate().is_err());
}
