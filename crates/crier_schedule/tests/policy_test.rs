//! Tests for the schedule policy.

use chrono::{Datelike, DateTime, Duration as TimeDelta, FixedOffset, TimeZone, Utc};
use crier_schedule::{
    IntervalSchedule, NextFire, SchedulePolicy, ScheduleConfig, WindowSchedule,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn eastern() -> FixedOffset {
    FixedOffset::east_opt(-300 * 60).unwrap()
}

fn window_config() -> ScheduleConfig {
    ScheduleConfig::Window(WindowSchedule {
        start_hour: 9,
        end_hour: 15,
        utc_offset_minutes: -300,
        jitter_min_minutes: 10,
        jitter_max_minutes: 45,
    })
}

fn local(hour: u32, minute: u32) -> DateTime<FixedOffset> {
    eastern()
        .with_ymd_and_hms(2024, 6, 3, hour, minute, 0)
        .unwrap()
}

#[test]
fn test_interval_delay_within_bounds() {
    let policy = SchedulePolicy::new(ScheduleConfig::Interval(IntervalSchedule {
        min_secs: 600,
        max_secs: 7200,
    }))
    .unwrap();
    let mut rng = seeded(7);

    for _ in 0..100 {
        let fire = policy.next_fire(Utc::now(), &mut rng).unwrap();
        match fire {
            NextFire::Delay(delay) => {
                assert!(delay >= Duration::from_secs(600));
                assert!(delay <= Duration::from_secs(7200));
            }
            NextFire::At(_) => panic!("interval mode must yield a relative delay"),
        }
    }
}

#[test]
fn test_in_window_fires_within_jitter_of_now() {
    let policy = SchedulePolicy::new(window_config()).unwrap();
    let now_local = local(10, 0);
    let now = now_local.with_timezone(&Utc);
    let mut rng = seeded(11);

    for _ in 0..50 {
        match policy.next_fire(now, &mut rng).unwrap() {
            NextFire::At(target) => {
                let offset_minutes = (target - now_local).num_minutes();
                assert!((10..=45).contains(&offset_minutes));
                assert_eq!(target.date_naive(), now_local.date_naive());
            }
            NextFire::Delay(_) => panic!("window mode must yield an absolute time"),
        }
    }
}

#[test]
fn test_before_window_fires_at_todays_opening() {
    let policy = SchedulePolicy::new(window_config()).unwrap();
    let now_local = local(7, 30);
    let now = now_local.with_timezone(&Utc);
    let opening = local(9, 0);
    let mut rng = seeded(13);

    for _ in 0..50 {
        match policy.next_fire(now, &mut rng).unwrap() {
            NextFire::At(target) => {
                let jitter_minutes = (target - opening).num_minutes();
                assert!((10..=45).contains(&jitter_minutes));
                assert_eq!(target.date_naive(), now_local.date_naive());
            }
            NextFire::Delay(_) => panic!("window mode must yield an absolute time"),
        }
    }
}

#[test]
fn test_after_window_fires_at_tomorrows_opening() {
    let policy = SchedulePolicy::new(window_config()).unwrap();
    let now_local = local(16, 0);
    let now = now_local.with_timezone(&Utc);
    let opening_tomorrow = local(9, 0) + TimeDelta::days(1);
    let mut rng = seeded(17);

    for _ in 0..50 {
        match policy.next_fire(now, &mut rng).unwrap() {
            NextFire::At(target) => {
                let jitter_minutes = (target - opening_tomorrow).num_minutes();
                assert!((10..=45).contains(&jitter_minutes));
                assert_eq!(target.day(), now_local.day() + 1);
            }
            NextFire::Delay(_) => panic!("window mode must yield an absolute time"),
        }
    }
}

#[test]
fn test_window_end_hour_rolls_to_next_day() {
    let policy = SchedulePolicy::new(window_config()).unwrap();
    // Exactly at the window end: held to tomorrow, not today.
    let now_local = local(15, 0);
    let now = now_local.with_timezone(&Utc);
    let mut rng = seeded(19);

    match policy.next_fire(now, &mut rng).unwrap() {
        NextFire::At(target) => {
            assert_eq!(target.date_naive(), now_local.date_naive() + chrono::Days::new(1));
        }
        NextFire::Delay(_) => panic!("window mode must yield an absolute time"),
    }
}

#[test]
fn test_delay_from_clamps_past_targets_to_zero() {
    let now = Utc::now();
    let past = (now - TimeDelta::hours(2)).with_timezone(&eastern());

    assert_eq!(NextFire::At(past).delay_from(now), Duration::ZERO);
}

#[test]
fn test_delay_from_in_window_is_at_most_jitter_max() {
    let policy = SchedulePolicy::new(window_config()).unwrap();
    let now_local = local(12, 0);
    let now = now_local.with_timezone(&Utc);
    let mut rng = seeded(23);

    let fire = policy.next_fire(now, &mut rng).unwrap();
    assert!(fire.delay_from(now) <= Duration::from_secs(45 * 60));
}

#[test]
fn test_invalid_interval_rejected() {
    let result = SchedulePolicy::new(ScheduleConfig::Interval(IntervalSchedule {
        min_secs: 7200,
        max_secs: 600,
    }));

    assert!(result.is_err());
}

#[test]
fn test_empty_window_rejected() {
    let result = SchedulePolicy::new(ScheduleConfig::Window(WindowSchedule {
        start_hour: 15,
        end_hour: 9,
        ..WindowSchedule::default()
    }));

    assert!(result.is_err());
}

#[test]
fn test_out_of_range_hours_rejected() {
    let result = SchedulePolicy::new(ScheduleConfig::Window(WindowSchedule {
        start_hour: 24,
        end_hour: 25,
        ..WindowSchedule::default()
    }));

    assert!(result.is_err());
}

#[test]
fn test_inverted_jitter_rejected() {
    let result = SchedulePolicy::new(ScheduleConfig::Window(WindowSchedule {
        jitter_min_minutes: 45,
        jitter_max_minutes: 10,
        ..WindowSchedule::default()
    }));

    assert!(result.is_err());
}

#[test]
fn test_schedule_config_parses_tagged_toml() {
    let interval: ScheduleConfig =
        toml::from_str("mode = \"interval\"\nmin_secs = 1800\nmax_secs = 3600\n").unwrap();
    assert_eq!(
        interval,
        ScheduleConfig::Interval(IntervalSchedule {
            min_secs: 1800,
            max_secs: 3600,
        })
    );

    let window: ScheduleConfig = toml::from_str(
        "mode = \"window\"\nstart_hour = 9\nend_hour = 15\nutc_offset_minutes = -300\n",
    )
    .unwrap();
    assert_eq!(
        window,
        ScheduleConfig::Window(WindowSchedule {
            start_hour: 9,
            end_hour: 15,
            utc_offset_minutes: -300,
            jitter_min_minutes: 10,
            jitter_max_minutes: 45,
        })
    );
}
