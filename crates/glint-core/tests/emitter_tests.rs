use glam::Vec2;
use glint_core::config::CometConfig;
use glint_core::emitter::{BurstSchedule, BurstSpec, CometTimer};
use glint_core::math::jitter;
use glint_core::GlintError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn spec(count: u32, duration_ms: f64) -> BurstSpec {
    BurstSpec::new(Vec2::new(100.0, 100.0), count, duration_ms).unwrap()
}

// ---------------------------------------------------------------------------
// Burst validation
// ---------------------------------------------------------------------------

#[test]
fn test_burst_spec_rejects_zero_count() {
    assert_eq!(BurstSpec::new(Vec2::ZERO, 0, 1000.0), Err(GlintError::ZeroCount));
}

#[test]
fn test_burst_spec_rejects_bad_duration() {
    for duration in [0.0, -5.0, f64::INFINITY] {
        assert!(
            matches!(BurstSpec::new(Vec2::ZERO, 10, duration), Err(GlintError::InvalidDuration(_))),
            "duration {duration} accepted"
        );
    }
    assert!(matches!(
        BurstSpec::new(Vec2::ZERO, 10, f64::NAN),
        Err(GlintError::InvalidDuration(d)) if d.is_nan()
    ));
}

// ---------------------------------------------------------------------------
// Burst timing
// ---------------------------------------------------------------------------

#[test]
fn test_spawn_i_due_at_i_times_interval() {
    let schedule = BurstSchedule::new(&spec(5, 1000.0), 100.0);
    for i in 0..5 {
        assert_eq!(schedule.due_at(i), 100.0 + i as f64 * 200.0);
    }
    assert_eq!(schedule.end_ms(), 1100.0);
}

#[test]
fn test_release_hands_out_due_indices_once() {
    let mut schedule = BurstSchedule::new(&spec(5, 1000.0), 100.0);

    assert_eq!(schedule.release(99.0), 0..0, "nothing before activation");
    assert_eq!(schedule.release(100.0), 0..1);
    assert_eq!(schedule.release(499.0), 1..2, "spawn 2 is due at 500");
    assert_eq!(schedule.release(499.0), 2..2, "same instant releases nothing new");
    assert_eq!(schedule.release(500.0), 2..3);
    assert_eq!(schedule.release(10_000.0), 3..5);
    assert_eq!(schedule.release(20_000.0), 5..5);
    assert_eq!(schedule.emitted(), 5);
    assert_eq!(schedule.pending(), 0);
}

#[test]
fn test_uncancelled_burst_emits_exactly_count() {
    let mut schedule = BurstSchedule::new(&spec(150, 3000.0), 0.0);
    let mut total = 0;
    let mut now = 0.0;
    while now <= 3100.0 {
        total += schedule.release(now).len();
        now += 16.0;
    }
    assert_eq!(total, 150);
}

#[test]
fn test_cancel_before_completion_leaves_fewer_spawns() {
    let mut schedule = BurstSchedule::new(&spec(100, 1000.0), 0.0);
    let early = schedule.release(250.0).len();
    assert_eq!(early, 26);

    schedule.cancel();
    schedule.cancel();

    assert_eq!(schedule.pending(), 0);
    assert!(schedule.release(5000.0).is_empty());
    assert!(schedule.emitted() < 100);
    assert!(schedule.is_cancelled());
}

#[test]
fn test_jitter_stays_within_bounds() {
    let mut rng = StdRng::seed_from_u64(99);
    let origin = Vec2::new(200.0, 300.0);
    for _ in 0..500 {
        let p = jitter(&mut rng, origin, 25.0);
        assert!((p - origin).abs().max_element() <= 25.0, "offset too large: {p}");
    }
}

// ---------------------------------------------------------------------------
// Comet timer
// ---------------------------------------------------------------------------

fn comet_config(min: f64, max: f64) -> CometConfig {
    CometConfig {
        min_interval_ms: min,
        max_interval_ms: max,
        ..CometConfig::default()
    }
}

#[test]
fn test_comet_timer_arms_within_interval() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut timer = CometTimer::new(&comet_config(4000.0, 9000.0));
    assert!(!timer.is_armed());

    for _ in 0..50 {
        timer.arm(1000.0, &mut rng);
        let due = timer.next_due().unwrap();
        assert!((5000.0..=10_000.0).contains(&due), "due {due} outside interval");
    }
}

#[test]
fn test_comet_timer_rearms_on_fire() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut timer = CometTimer::new(&comet_config(1000.0, 1000.0));
    timer.arm(0.0, &mut rng);

    assert!(!timer.poll(999.0, &mut rng));
    assert!(timer.poll(1000.0, &mut rng));
    assert_eq!(timer.next_due(), Some(2000.0));
    assert!(!timer.poll(1500.0, &mut rng));
    assert!(timer.poll(2100.0, &mut rng));
    assert_eq!(timer.next_due(), Some(3100.0));
}

#[test]
fn test_cancelled_comet_timer_never_fires() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut timer = CometTimer::new(&comet_config(10.0, 20.0));
    timer.arm(0.0, &mut rng);
    timer.cancel();
    timer.cancel();

    assert!(!timer.is_armed());
    assert!(!timer.poll(1.0e9, &mut rng));
}
