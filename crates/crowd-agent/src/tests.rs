//! Unit tests for agent storage.

use crowd_core::Vec2;

use crate::{AgentParams, AgentStoreBuilder, ShapeModel};

fn small_store(capacity: usize) -> (crate::AgentStore, crate::AgentRngs) {
    AgentStoreBuilder::new(capacity, 42)
        .shape(ShapeModel::ThreeCircle)
        .build()
}

#[cfg(test)]
mod lifecycle {
    use crowd_core::AgentId;

    use super::*;
    use crate::AgentError;

    #[test]
    fn add_claims_sequential_slots() {
        let (mut store, _) = small_store(4);
        let p = AgentParams::default();
        let a = store.add(Vec2::ZERO, 0.0, &p).unwrap();
        let b = store.add(Vec2::new(1.0, 0.0), 0.0, &p).unwrap();
        assert_eq!(a, AgentId(0));
        assert_eq!(b, AgentId(1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.active_indices().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn capacity_exhaustion_is_distinguishable() {
        let (mut store, _) = small_store(1);
        let p = AgentParams::default();
        store.add(Vec2::ZERO, 0.0, &p).unwrap();
        match store.add(Vec2::new(1.0, 0.0), 0.0, &p) {
            Err(AgentError::CapacityExhausted { capacity }) => assert_eq!(capacity, 1),
            other => panic!("expected CapacityExhausted, got {other:?}"),
        }
    }

    #[test]
    fn add_rejects_nan_position() {
        let (mut store, _) = small_store(2);
        let p = AgentParams::default();
        assert!(store.add(Vec2::new(f64::NAN, 0.0), 0.0, &p).is_err());
        // The failed add must not have claimed the slot.
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn add_rejects_non_positive_mass() {
        let (mut store, _) = small_store(2);
        let p = AgentParams { mass: 0.0, ..AgentParams::default() };
        assert!(store.add(Vec2::ZERO, 0.0, &p).is_err());
    }

    #[test]
    fn deactivate_filters_from_active_indices() {
        let (mut store, _) = small_store(3);
        let p = AgentParams::default();
        let a = store.add(Vec2::ZERO, 0.0, &p).unwrap();
        store.add(Vec2::new(1.0, 0.0), 0.0, &p).unwrap();
        store.deactivate(a).unwrap();
        assert_eq!(store.active_indices().collect::<Vec<_>>(), vec![1]);
        assert!(!store.is_active(a));
        // len() still counts the claimed slot
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn deactivate_out_of_bounds_errors() {
        let (mut store, _) = small_store(1);
        assert!(store.deactivate(AgentId(5)).is_err());
    }
}

#[cfg(test)]
mod motion_state {
    use super::*;

    #[test]
    fn reset_motion_zeroes_accumulators() {
        let (mut store, _) = small_store(2);
        let p = AgentParams::default();
        store.add(Vec2::ZERO, 0.0, &p).unwrap();
        store.force[0] = Vec2::new(3.0, -1.0);
        store.torque[0] = 0.7;
        store.reset_motion();
        assert_eq!(store.force[0], Vec2::ZERO);
        assert_eq!(store.torque[0], 0.0);
    }

    #[test]
    fn orientation_wrapped_on_add() {
        let (mut store, _) = small_store(1);
        let p = AgentParams::default();
        store
            .add(Vec2::ZERO, 3.0 * std::f64::consts::PI, &p)
            .unwrap();
        assert!(store.orientation[0].abs() <= std::f64::consts::PI + 1e-12);
    }

    #[test]
    fn shoulders_derived_from_orientation() {
        let (mut store, _) = small_store(1);
        let p = AgentParams::default();
        // Facing +x: rotate270 of (1,0) is (0,-1), so the left shoulder sits
        // at +y and the right at -y.
        store.add(Vec2::ZERO, 0.0, &p).unwrap();
        assert!((store.position_ls[0] - Vec2::new(0.0, p.r_ts)).length() < 1e-12);
        assert!((store.position_rs[0] - Vec2::new(0.0, -p.r_ts)).length() < 1e-12);
    }

    #[test]
    fn shoulders_track_position_and_orientation() {
        let (mut store, _) = small_store(1);
        let p = AgentParams::default();
        store.add(Vec2::ZERO, 0.0, &p).unwrap();
        store.position[0] = Vec2::new(5.0, 5.0);
        store.orientation[0] = std::f64::consts::FRAC_PI_2;
        store.update_all_shoulders();
        // Facing +y: shoulders offset along ±x.
        assert!((store.position_ls[0] - Vec2::new(5.0 - p.r_ts, 5.0)).length() < 1e-9);
        assert!((store.position_rs[0] - Vec2::new(5.0 + p.r_ts, 5.0)).length() < 1e-9);
    }

    #[test]
    fn circles_triplet_order() {
        let (mut store, _) = small_store(1);
        let p = AgentParams::default();
        store.add(Vec2::new(1.0, 2.0), 0.0, &p).unwrap();
        let (xs, rs) = store.circles(0);
        assert_eq!(xs[0], store.position[0]);
        assert_eq!(rs, [p.r_t, p.r_s, p.r_s]);
    }
}

#[cfg(test)]
mod aggregates {
    use super::*;

    #[test]
    fn max_speed_ignores_inactive() {
        let (mut store, _) = small_store(3);
        let p = AgentParams::default();
        let a = store.add(Vec2::ZERO, 0.0, &p).unwrap();
        store.add(Vec2::new(1.0, 0.0), 0.0, &p).unwrap();
        store.velocity[0] = Vec2::new(9.0, 0.0);
        store.velocity[1] = Vec2::new(2.0, 0.0);
        assert!((store.max_speed() - 9.0).abs() < 1e-12);
        store.deactivate(a).unwrap();
        assert!((store.max_speed() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_store_aggregates_are_zero() {
        let (store, _) = small_store(2);
        assert_eq!(store.max_speed(), 0.0);
        assert_eq!(store.max_target_velocity(), 0.0);
        assert_eq!(store.max_sight(), 0.0);
    }
}

#[cfg(test)]
mod rngs {
    use crowd_core::AgentId;

    use super::*;

    #[test]
    fn reseed_matches_a_fresh_build() {
        let (_, mut reseeded) = small_store(2); // built with seed 42
        let (_, mut fresh) = AgentStoreBuilder::new(2, 7)
            .shape(ShapeModel::ThreeCircle)
            .build();

        reseeded.reseed(7);
        for i in 0..2u32 {
            let a: u64 = reseeded.get_mut(AgentId(i)).random();
            let b: u64 = fresh.get_mut(AgentId(i)).random();
            assert_eq!(a, b, "stream {i} diverged after reseed");
        }
    }

    #[test]
    fn reseed_discards_consumed_state() {
        let (_, mut rngs) = small_store(1);
        let first: u64 = rngs.get_mut(AgentId(0)).random();
        rngs.reseed(42);
        let replay: u64 = rngs.get_mut(AgentId(0)).random();
        assert_eq!(first, replay, "reseed must restart the stream");
    }
}

#[cfg(test)]
mod params {
    use super::*;

    #[test]
    fn default_params_valid() {
        assert!(AgentParams::default().validate().is_ok());
    }

    #[test]
    fn with_radius_scales_body() {
        let p = AgentParams::with_radius(0.2);
        assert!(p.validate().is_ok());
        assert!(p.r_t < 0.2 && p.r_s < p.r_t);
        assert!((p.r_t / 0.2 - AgentParams::default().r_t / 0.27).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_tau() {
        let p = AgentParams { tau_0: 0.0, ..AgentParams::default() };
        assert!(p.validate().is_err());
        let p = AgentParams { tau_adj: -1.0, ..AgentParams::default() };
        assert!(p.validate().is_err());
    }
}
