//! Speed level tests

use std::time::Duration;

use bubbletrace_debug::{PlaybackConfig, SpeedLevel};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn slowest_and_fastest() {
    assert!(approx(SpeedLevel::new(1).delay_secs(), 1.5));
    assert!(approx(SpeedLevel::new(10).delay_secs(), 0.2));
}

#[test]
fn middle_level_interpolates() {
    assert!(approx(SpeedLevel::new(5).delay_secs(), 0.922));
}

#[test]
fn delays_strictly_decrease() {
    let delays: Vec<Duration> = (1..=10).map(|l| SpeedLevel::new(l).delay()).collect();
    assert!(delays.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn out_of_range_levels() {
    assert!(SpeedLevel::checked(0).is_none());
    assert!(SpeedLevel::checked(11).is_none());
    assert_eq!(SpeedLevel::new(200), SpeedLevel::MAX);
}

#[test]
fn config_presets() {
    assert_eq!(PlaybackConfig::fastest().speed, SpeedLevel::MAX);
    assert_eq!(PlaybackConfig::slowest().speed, SpeedLevel::MIN);
    assert_eq!(PlaybackConfig::default().speed, SpeedLevel::NORMAL);
}
