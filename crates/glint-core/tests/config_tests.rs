use glint_core::config::{BurstConfig, CometConfig, ConfettiConfig, DecayRates, StarLayer, StarfieldConfig};
use glint_core::effects::{Confetti, ParticleBurst};
use glint_core::GlintError;

#[test]
fn test_decay_defaults() {
    let decay = DecayRates::default();

    assert_eq!(decay.star, 0.02);
    assert_eq!(decay.heart, 0.01);
    assert_eq!(decay.bubble, 0.005);
    assert_eq!(decay.firework, 0.02);
    assert_eq!(decay.confetti, 0.008);
}

#[test]
fn test_burst_defaults() {
    let burst = BurstConfig::default();
    let confetti = ConfettiConfig::default();

    assert_eq!(burst.jitter, 25.0);
    assert_eq!(burst.firework_trail, 10);
    assert_eq!(burst.sparkle_lifespan, (40, 80));
    assert_eq!(confetti.jitter, 25.0);
    assert_eq!(confetti.decay, 0.008);
    assert!(!confetti.palette.is_empty());
}

#[test]
fn test_starfield_defaults() {
    let config = StarfieldConfig::default();

    let counts: Vec<usize> = config.layers.iter().map(|l| l.count).collect();
    assert_eq!(counts, vec![70, 100, 60]);
    assert_eq!(config.star_count(), 230);
    assert_eq!(config.comet.trail_len, 45);
    assert_eq!(config.comet.margin, 120.0);
    assert_eq!(config.comet.min_interval_ms, 4000.0);
    assert_eq!(config.comet.max_interval_ms, 9000.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_inverted_radius_rejected() {
    let mut config = StarfieldConfig::default();
    config.layers[1].max_radius = 0.1;

    assert!(matches!(config.validate(), Err(GlintError::InvalidLayer { index: 1, .. })));
}

#[test]
fn test_alpha_out_of_range_rejected() {
    let config = StarfieldConfig {
        layers: vec![StarLayer {
            max_alpha: 1.5,
            ..StarfieldConfig::default().layers[0].clone()
        }],
        ..StarfieldConfig::default()
    };
    assert!(matches!(config.validate(), Err(GlintError::InvalidLayer { index: 0, .. })));
}

#[test]
fn test_inverted_comet_interval_rejected() {
    let config = StarfieldConfig {
        comet: CometConfig {
            min_interval_ms: 5000.0,
            max_interval_ms: 1000.0,
            ..CometConfig::default()
        },
        ..StarfieldConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(GlintError::InvalidInterval { min: 5000.0, max: 1000.0 })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(GlintError::ZeroCount.to_string(), "burst count must be at least 1");
    assert_eq!(
        GlintError::UnknownVariant("comet".into()).to_string(),
        "unknown particle variant: \"comet\""
    );
}

#[test]
fn test_burst_and_confetti_defaults_validate() {
    assert!(DecayRates::default().validate().is_ok());
    assert!(BurstConfig::default().validate().is_ok());
    assert!(ConfettiConfig::default().validate().is_ok());
    assert!(ParticleBurst::new(BurstConfig::default(), 1).is_ok());
    assert!(Confetti::new(ConfettiConfig::default(), 1).is_ok());
}

#[test]
fn test_non_positive_decay_rejected() {
    for value in [0.0, -0.01, f32::NAN, f32::INFINITY] {
        let config = BurstConfig {
            decay: DecayRates {
                star: value,
                ..DecayRates::default()
            },
            ..BurstConfig::default()
        };
        assert!(
            matches!(config.validate(), Err(GlintError::InvalidDecay { field: "decay.star", .. })),
            "star decay {value} accepted"
        );
        assert!(ParticleBurst::new(config, 1).is_err(), "burst built with star decay {value}");
    }

    let config = ConfettiConfig {
        decay: 0.0,
        ..ConfettiConfig::default()
    };
    assert!(matches!(config.validate(), Err(GlintError::InvalidDecay { field: "decay", .. })));
    assert!(Confetti::new(config, 1).is_err());
}

#[test]
fn test_negative_jitter_rejected() {
    let burst = BurstConfig {
        jitter: -1.0,
        ..BurstConfig::default()
    };
    assert!(matches!(burst.validate(), Err(GlintError::InvalidParameter { field: "jitter", .. })));

    let confetti = ConfettiConfig {
        jitter: -1.0,
        ..ConfettiConfig::default()
    };
    assert!(matches!(confetti.validate(), Err(GlintError::InvalidParameter { field: "jitter", .. })));
}

#[test]
fn test_inverted_sparkle_lifespan_rejected() {
    for lifespan in [(80, 40), (0, 10), (-5, 10)] {
        let config = BurstConfig {
            sparkle_lifespan: lifespan,
            ..BurstConfig::default()
        };
        assert!(
            matches!(
                config.validate(),
                Err(GlintError::InvalidParameter { field: "sparkle_lifespan", .. })
            ),
            "lifespan {lifespan:?} accepted"
        );
    }
}
