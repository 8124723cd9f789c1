use glam::Vec2;
use glint_core::driver::{Driver, Effect, FrameRequest, LoopState};
use glint_core::effects::{Confetti, ParticleBurst};
use glint_core::config::{BurstConfig, ConfettiConfig};
use glint_core::emitter::BurstSpec;
use glint_core::particle::ParticleVariant;
use glint_core::render::recording::{DrawCommand, RecordingPainter};

const FRAME_MS: f64 = 16.0;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn burst(variant: ParticleVariant, count: u32, duration_ms: f64) -> Driver<ParticleBurst> {
    let mut effect = ParticleBurst::with_seed(17);
    effect.set_burst(variant, BurstSpec::new(Vec2::new(400.0, 300.0), count, duration_ms).unwrap());
    let mut driver = Driver::new(effect);
    driver.resize(Vec2::new(800.0, 600.0));
    driver
}

/// Pump frames from `start` until the driver asks to stop; returns the
/// timestamp of the stopping frame.
fn run_until_stop<E: Effect>(driver: &mut Driver<E>, start: f64, max_frames: u32) -> f64 {
    let mut painter = RecordingPainter::new();
    for k in 0..max_frames {
        let now = start + k as f64 * FRAME_MS;
        if driver.frame(now, &mut painter) == FrameRequest::Stop {
            return now;
        }
    }
    panic!("driver still running after {max_frames} frames");
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[test]
fn test_frame_before_start_is_noop() {
    let mut driver = burst(ParticleVariant::Star, 10, 100.0);
    let mut painter = RecordingPainter::new();

    assert_eq!(driver.state(), LoopState::Inactive);
    assert_eq!(driver.frame(0.0, &mut painter), FrameRequest::Stop);
    assert!(painter.commands.is_empty());
    assert_eq!(driver.frames_rendered(), 0);
}

#[test]
fn test_every_frame_clears_surface_first() {
    let mut driver = burst(ParticleVariant::Bubble, 10, 100.0);
    driver.start(0.0);

    let mut painter = RecordingPainter::new();
    driver.frame(0.0, &mut painter);
    assert_eq!(painter.commands.first(), Some(&DrawCommand::Clear(Vec2::new(800.0, 600.0))));
}

#[test]
fn test_burst_drains_and_stops() {
    for variant in ParticleVariant::ALL {
        let mut driver = burst(variant, 10, 100.0);
        driver.start(0.0);
        let stopped_at = run_until_stop(&mut driver, 0.0, 1000);

        assert!(stopped_at >= 100.0, "{variant} stopped before the burst finished");
        assert_eq!(driver.state(), LoopState::Inactive);
        assert_eq!(driver.effect().live_count(), 0);
        assert_eq!(driver.effect().schedule().unwrap().emitted(), 10, "{variant}");
    }
}

#[test]
fn test_burst_spawn_timing() {
    let mut driver = burst(ParticleVariant::Heart, 20, 400.0);
    driver.start(1000.0);
    let mut painter = RecordingPainter::new();

    driver.frame(1000.0, &mut painter);
    assert_eq!(driver.effect().schedule().unwrap().emitted(), 1);

    driver.frame(1190.0, &mut painter);
    assert_eq!(driver.effect().schedule().unwrap().emitted(), 10);

    driver.frame(1400.0, &mut painter);
    assert_eq!(driver.effect().schedule().unwrap().emitted(), 20);
    assert_eq!(driver.effect().live_count(), 20);
}

#[test]
fn test_start_without_burst_settles_immediately() {
    let mut driver = Driver::new(ParticleBurst::with_seed(1));
    driver.start(0.0);
    let mut painter = RecordingPainter::new();
    assert_eq!(driver.frame(0.0, &mut painter), FrameRequest::Stop);
}

// ---------------------------------------------------------------------------
// Teardown
// ---------------------------------------------------------------------------

#[test]
fn test_teardown_mid_burst_blocks_stale_frames() {
    let mut driver = burst(ParticleVariant::Firework, 100, 1000.0);
    driver.start(0.0);

    let mut painter = RecordingPainter::new();
    driver.frame(0.0, &mut painter);
    driver.frame(100.0, &mut painter);
    assert_eq!(driver.effect().live_count(), 11);

    driver.stop();
    driver.stop();

    painter.reset();
    for now in [200.0, 1000.0, 5000.0] {
        assert_eq!(driver.frame(now, &mut painter), FrameRequest::Stop);
    }
    assert!(painter.commands.is_empty(), "surface touched after teardown");
    assert!(driver.effect().schedule().unwrap().emitted() < 100);
    assert_eq!(driver.effect().live_count(), 0);
    assert!(driver.effect().is_settled());
}

#[test]
fn test_restart_after_teardown() {
    let mut driver = burst(ParticleVariant::Sparkle, 5, 50.0);
    driver.start(0.0);
    driver.stop();

    driver.start(500.0);
    let mut painter = RecordingPainter::new();
    assert_eq!(driver.frame(500.0, &mut painter), FrameRequest::Continue);
    assert_eq!(driver.effect().live_count(), 1);
}

#[test]
fn test_resize_leaves_burst_particles_in_place() {
    let mut driver = burst(ParticleVariant::Bubble, 4, 40.0);
    driver.start(0.0);
    let mut painter = RecordingPainter::new();
    driver.frame(50.0, &mut painter);

    let before: Vec<Vec2> = driver.effect().particles().iter().map(|p| p.position).collect();
    driver.resize(Vec2::new(100.0, 100.0));
    let after: Vec<Vec2> = driver.effect().particles().iter().map(|p| p.position).collect();

    assert_eq!(before, after);
    assert_eq!(driver.size(), Vec2::new(100.0, 100.0));
}

// ---------------------------------------------------------------------------
// Confetti
// ---------------------------------------------------------------------------

#[test]
fn test_confetti_empties_after_duration() {
    let mut confetti = Confetti::with_seed(7);
    confetti.set_burst(BurstSpec::new(Vec2::new(400.0, 300.0), 150, 3000.0).unwrap());
    let mut driver = Driver::new(confetti);
    driver.resize(Vec2::new(800.0, 600.0));
    driver.start(0.0);

    let stopped_at = run_until_stop(&mut driver, 0.0, 400);

    assert!(stopped_at >= 3000.0, "confetti stopped at {stopped_at}ms");
    assert!(stopped_at < 3000.0 + 2.0 * FRAME_MS);
    assert_eq!(driver.effect().live_count(), 0);
    assert_eq!(driver.effect().schedule().unwrap().emitted(), 150);
    assert_eq!(driver.state(), LoopState::Inactive);

    let mut painter = RecordingPainter::new();
    assert_eq!(driver.frame(stopped_at + FRAME_MS, &mut painter), FrameRequest::Stop);
    assert!(painter.commands.is_empty());
}

#[test]
fn test_confetti_pieces_are_rotated_rects() {
    let mut confetti = Confetti::with_seed(3);
    confetti.set_burst(BurstSpec::new(Vec2::ZERO, 3, 30.0).unwrap());
    let mut driver = Driver::new(confetti);
    driver.start(0.0);

    let mut painter = RecordingPainter::new();
    driver.frame(20.0, &mut painter);

    let polygons = painter
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Polygon { points, .. } if points.len() == 4))
        .count();
    assert_eq!(polygons, 3);
}

// ---------------------------------------------------------------------------
// Spawn positions
// ---------------------------------------------------------------------------

#[test]
fn test_burst_spawns_within_jitter_of_origin() {
    let origin = Vec2::new(400.0, 300.0);
    let jitter = BurstConfig::default().jitter;
    let mut driver = burst(ParticleVariant::Firework, 40, 100.0);
    driver.start(0.0);

    let mut painter = RecordingPainter::new();
    driver.frame(200.0, &mut painter);
    assert_eq!(driver.effect().live_count(), 40);

    for p in driver.effect().particles() {
        // A firework trail holds the pre-step position, i.e. where it spawned.
        let spawned = p.trail().and_then(|t| t.newest()).expect("one frame recorded");
        let offset = (spawned - origin).abs();
        assert!(offset.max_element() <= jitter, "spawned {offset} away from origin");
    }
}

#[test]
fn test_confetti_spawns_within_jitter_of_origin() {
    let origin = Vec2::new(250.0, 120.0);
    let config = ConfettiConfig::default();
    let (jitter, gravity) = (config.jitter, config.gravity);

    let mut confetti = Confetti::new(config, 21).unwrap();
    confetti.set_burst(BurstSpec::new(origin, 30, 60.0).unwrap());
    let mut driver = Driver::new(confetti);
    driver.start(0.0);

    // One frame releases the whole burst, so every piece steps exactly once.
    let mut painter = RecordingPainter::new();
    driver.frame(59.0, &mut painter);
    assert_eq!(driver.effect().live_count(), 30);

    for p in driver.effect().pieces() {
        // Undo drag and gravity to recover the launch velocity, then step back.
        let launch = Vec2::new(p.velocity.x / 0.99, p.velocity.y - gravity);
        let offset = (p.position - launch - origin).abs();
        assert!(
            offset.max_element() <= jitter + 1e-3,
            "piece spawned {offset} away from origin"
        );
    }
}
