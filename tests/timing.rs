use std::time::{Duration, Instant};

use pong::timing::{FixedStep, FramePacer};

const TICK: Duration = Duration::from_millis(5);
const MAX_BACKLOG: Duration = Duration::from_millis(250);

#[test]
fn advance_counts_whole_ticks_and_carries_remainder() {
    let mut clock = FixedStep::new(TICK, MAX_BACKLOG);

    assert_eq!(clock.advance(Duration::from_millis(12)), 2);
    assert_eq!(clock.advance(Duration::from_millis(2)), 0);
    assert_eq!(clock.advance(Duration::from_millis(1)), 1);
    assert_eq!(clock.advance(Duration::ZERO), 0);
}

#[test]
fn slow_frames_still_simulate_real_time() {
    let mut clock = FixedStep::new(TICK, MAX_BACKLOG);
    let frame = Duration::from_millis(33);

    let mut simulated = Duration::ZERO;
    for _ in 0..30 {
        simulated += TICK * clock.advance(frame);
    }

    let real = frame * 30;
    assert!(real - simulated < TICK, "real {real:?}, simulated {simulated:?}");
}

#[test]
fn long_frame_below_backlog_limit_catches_up() {
    let mut clock = FixedStep::new(TICK, MAX_BACKLOG);
    assert_eq!(clock.advance(Duration::from_millis(200)), 40);
}

#[test]
fn stall_drops_backlog() {
    let mut clock = FixedStep::new(TICK, MAX_BACKLOG);

    assert_eq!(clock.advance(Duration::from_millis(3)), 0);
    assert_eq!(clock.advance(Duration::from_secs(2)), 0);
    assert_eq!(clock.advance(Duration::from_millis(3)), 0);
    assert_eq!(clock.advance(Duration::from_millis(2)), 1);
}

#[test]
fn dt_is_tick_in_seconds() {
    let clock = FixedStep::new(TICK, MAX_BACKLOG);
    assert_eq!(clock.tick(), TICK);
    assert!((clock.dt() - 0.005).abs() < 1e-6);
}

#[test]
fn pacer_holds_short_frames_to_minimum() {
    let pacer = FramePacer::new(Duration::from_millis(5));
    let elapsed = pacer.finish_frame(Instant::now());
    assert!(elapsed >= Duration::from_millis(5));
}

#[test]
fn pacer_reports_long_frames_as_measured() {
    let pacer = FramePacer::new(Duration::from_millis(1));
    let start = Instant::now();
    std::thread::sleep(Duration::from_millis(10));

    let elapsed = pacer.finish_frame(start);
    assert!(elapsed >= Duration::from_millis(10));
}
