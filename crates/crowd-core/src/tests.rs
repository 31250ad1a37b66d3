//! Unit tests for crowd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ObstacleId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(ObstacleId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{Vec2, wrap_to_pi};

    #[test]
    fn dot_and_cross() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a.dot(b), 1.0);
        assert_eq!(a.cross(b), -7.0);
        // cross of a vector with itself vanishes
        assert_eq!(a.cross(a), 0.0);
    }

    #[test]
    fn rotations_are_quarter_turns() {
        let v = Vec2::new(1.0, 0.0);
        assert_eq!(v.rotate90(), Vec2::new(0.0, 1.0));
        assert_eq!(v.rotate270(), Vec2::new(0.0, -1.0));
        // four 90° turns are the identity
        assert_eq!(v.rotate90().rotate90().rotate90().rotate90(), v);
    }

    #[test]
    fn normalize_or_zero() {
        let v = Vec2::new(3.0, 4.0).normalize_or_zero();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
    }

    #[test]
    fn truncate_caps_length() {
        let v = Vec2::new(6.0, 8.0); // length 10
        let t = v.truncate(5.0);
        assert!((t.length() - 5.0).abs() < 1e-12);
        // direction preserved
        assert!((t.normalize_or_zero() - v.normalize_or_zero()).length() < 1e-12);
        // shorter vectors pass through untouched
        assert_eq!(Vec2::new(1.0, 0.0).truncate(5.0), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn from_angle_roundtrip() {
        let v = Vec2::from_angle(FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
        assert!((v.angle() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn wrap_to_pi_range() {
        assert!((wrap_to_pi(3.0 * PI) - PI).abs() < 1e-12);
        assert!((wrap_to_pi(-3.0 * PI) + PI).abs() < 1e-12);
        assert_eq!(wrap_to_pi(0.5), 0.5);
        for k in -10..=10 {
            let a = wrap_to_pi(0.7 + k as f64 * 2.0 * PI);
            assert!((a - 0.7).abs() < 1e-9, "k={k} gave {a}");
        }
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_dt_min() {
        let cfg = SimConfig { dt_min: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let cfg = SimConfig { dt_min: 0.1, dt_max: 0.01, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_nan_bounds() {
        let cfg = SimConfig { dt_max: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

}
