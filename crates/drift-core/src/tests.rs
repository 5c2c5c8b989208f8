//! Unit tests for drift-core primitives.

#[cfg(test)]
mod ids {
    use crate::ActorId;

    #[test]
    fn index_roundtrip() {
        let id = ActorId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ActorId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(ActorId::default(), ActorId::INVALID);
        assert_eq!(ActorId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ActorId(7).to_string(), "ActorId(7)");
    }
}

#[cfg(test)]
mod geom {
    use crate::{Interval, Rect, Vec2};

    #[test]
    fn rect_orders_corners() {
        let r = Rect::new(Vec2::new(5.0, -1.0), Vec2::new(-3.0, 4.0));
        assert_eq!(r.min, Vec2::new(-3.0, -1.0));
        assert_eq!(r.max, Vec2::new(5.0, 4.0));
    }

    #[test]
    fn rect_from_center_size() {
        let r = Rect::from_center_size(Vec2::ZERO, Vec2::new(30.0, 18.0));
        assert_eq!(r.min, Vec2::new(-15.0, -9.0));
        assert_eq!(r.max, Vec2::new(15.0, 9.0));
        assert_eq!(r.center(), Vec2::ZERO);
        assert_eq!(r.size(), Vec2::new(30.0, 18.0));
    }

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(Vec2::splat(-1.0), Vec2::splat(1.0));
        assert!(r.contains(Vec2::new(1.0, -1.0)));
        assert!(!r.contains(Vec2::new(1.01, 0.0)));
    }

    #[test]
    fn interval_clamp() {
        let i = Interval::new(-2.0, 3.0);
        assert_eq!(i.clamp(-5.0), -2.0);
        assert_eq!(i.clamp(1.0), 1.0);
        assert_eq!(i.clamp(9.0), 3.0);
    }

    #[test]
    fn inverted_interval_clamps_to_center() {
        let i = Interval::new(2.0, -2.0);
        assert!(i.is_inverted());
        assert_eq!(i.clamp(100.0), 0.0);
        assert_eq!(i.clamp(-100.0), 0.0);
    }

    #[test]
    fn shrink_can_invert() {
        let r = Rect::new(Vec2::splat(-1.0), Vec2::splat(1.0));
        let (x, y) = r.shrink(1.5);
        assert!(x.is_inverted());
        assert!(y.is_inverted());
        assert_eq!(x.clamp(0.7), 0.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{ArenaConfig, Frame, FrameClock};

    #[test]
    fn frame_arithmetic() {
        let f = Frame(10);
        assert_eq!(f + 5, Frame(15));
        assert_eq!(f.offset(3), Frame(13));
        assert_eq!(Frame(15) - Frame(10), 5u64);
        assert_eq!(Frame(3).to_string(), "F3");
    }

    #[test]
    fn equal_rates_give_one_substep_per_frame() {
        let mut clock = FrameClock::new(0.25, 0.25, 8);
        for _ in 0..10 {
            assert_eq!(clock.physics_substeps(), 1);
            clock.advance();
        }
        assert_eq!(clock.current_frame, Frame(10));
        assert!((clock.elapsed_secs() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn slower_physics_accumulates() {
        // 0.25 s frames, 0.5 s physics: a sub-step every other frame.
        let mut clock = FrameClock::new(0.25, 0.5, 8);
        let steps: Vec<u32> = (0..4).map(|_| clock.physics_substeps()).collect();
        assert_eq!(steps, vec![0, 1, 0, 1]);
    }

    #[test]
    fn substeps_are_capped() {
        let mut clock = FrameClock::new(1.0, 0.125, 4);
        assert_eq!(clock.physics_substeps(), 4);
        // Excess time is dropped, not queued.
        assert!(clock.accumulator() < 0.125);
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = ArenaConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_frame(), Frame(cfg.total_frames));
    }

    #[test]
    fn non_positive_timestep_rejected() {
        let cfg = ArenaConfig { fixed_dt: 0.0, ..ArenaConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = ArenaConfig { frame_dt: f32::NAN, ..ArenaConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{ActorId, ActorRng, RandomSource, RngStream};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = ActorRng::new(12345, ActorId(0), RngStream::Motion);
        let mut r2 = ActorRng::new(12345, ActorId(0), RngStream::Motion);
        for _ in 0..100 {
            assert_eq!(r1.unit_f32(), r2.unit_f32());
        }
    }

    #[test]
    fn streams_of_one_actor_differ() {
        let mut motion = ActorRng::new(1, ActorId(3), RngStream::Motion);
        let mut timer = ActorRng::new(1, ActorId(3), RngStream::Timer(0));
        let a: Vec<f32> = (0..4).map(|_| motion.unit_f32()).collect();
        let b: Vec<f32> = (0..4).map(|_| timer.unit_f32()).collect();
        assert_ne!(a, b, "component streams should diverge");
    }

    #[test]
    fn unit_in_half_open_range() {
        let mut rng = ActorRng::from_seed(0);
        for _ in 0..1000 {
            let v = rng.unit_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn range_in_bounds() {
        let mut rng = ActorRng::from_seed(9);
        for _ in 0..1000 {
            let v = rng.range_f32(2.0, 4.0);
            assert!((2.0..=4.0).contains(&v));
        }
    }

    #[test]
    fn degenerate_range_returns_low() {
        let mut rng = ActorRng::from_seed(9);
        assert_eq!(rng.range_f32(2.0, 2.0), 2.0);
        assert_eq!(rng.range_f32(5.0, 1.0), 5.0);
        assert_eq!(rng.range_f32(0.0, f32::INFINITY), 0.0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::{ArenaConfig, Rect, Vec2};

    #[test]
    fn inverted_rect_is_reordered_on_load() {
        let r: Rect = serde_json::from_str(r#"{ "min": [4.0, 3.0], "max": [-4.0, -3.0] }"#).unwrap();
        assert_eq!(r, Rect::new(Vec2::new(-4.0, -3.0), Vec2::new(4.0, 3.0)));
    }

    #[test]
    fn config_bounds_keep_min_below_max() {
        let json = r#"{ "bounds": { "min": [15.0, -9.0], "max": [-15.0, 9.0] } }"#;
        let config: ArenaConfig = serde_json::from_str(json).unwrap();
        let bounds = config.bounds.unwrap();
        assert_eq!(bounds.min, Vec2::new(-15.0, -9.0));
        assert_eq!(bounds.max, Vec2::new(15.0, 9.0));
    }
}
