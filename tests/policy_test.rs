//! Green-time policy and scenario catalog validation

use signal_race::simulation::{GreenTimePolicy, Round, ScenarioCatalog, Direction, FIXED_GREEN_TIME};

#[test]
fn test_adaptive_thresholds() {
    let policy = GreenTimePolicy::Adaptive;
    for cars in 0..=8 {
        assert_eq!(policy.green_time(cars), 10.0, "queue of {}", cars);
    }
    for cars in 9..=18 {
        assert_eq!(policy.green_time(cars), 20.0, "queue of {}", cars);
    }
    for cars in [19, 20, 50, u32::MAX] {
        assert_eq!(policy.green_time(cars), 30.0, "queue of {}", cars);
    }
}

#[test]
fn test_fixed_ignores_queue() {
    let policy = GreenTimePolicy::fixed();
    assert_eq!(FIXED_GREEN_TIME, 20.0);
    for cars in [0, 1, 8, 9, 18, 19, 1000] {
        assert_eq!(policy.green_time(cars), 20.0);
    }

    let custom = GreenTimePolicy::Fixed { duration: 7.5 };
    assert_eq!(custom.green_time(30), 7.5);
}

#[test]
fn test_only_adaptive_ends_early() {
    assert!(GreenTimePolicy::Adaptive.ends_early_on_empty());
    assert!(!GreenTimePolicy::fixed().ends_early_on_empty());
}

#[test]
fn test_default_catalog() {
    let catalog = ScenarioCatalog::default();
    assert_eq!(catalog.len(), 2);

    let first = catalog.round(1).expect("round 1 exists");
    assert_eq!(first.count(Direction::West), 10);
    assert_eq!(first.count(Direction::East), 5);

    let second = catalog.round(2).expect("round 2 exists");
    assert_eq!(second.count(Direction::West), 12);
    assert_eq!(second.count(Direction::East), 20);
    assert_eq!(second.total(), 32);
}

#[test]
fn test_catalog_out_of_range_is_none() {
    let catalog = ScenarioCatalog::default();
    assert!(catalog.round(0).is_none());
    assert!(catalog.round(3).is_none());
    assert!(catalog.round(usize::MAX).is_none());
}

#[test]
fn test_empty_catalog_rejected() {
    assert!(ScenarioCatalog::new(Vec::new()).is_err());
    assert!(ScenarioCatalog::new(vec![Round::new(1, 1)]).is_ok());
}
