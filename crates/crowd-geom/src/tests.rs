//! Unit tests for the distance primitives.

#[cfg(test)]
mod circle_circle {
    use crowd_core::Vec2;

    use crate::distance_circle_circle;

    #[test]
    fn separated_circles() {
        let (h, n) = distance_circle_circle(Vec2::new(5.0, 0.0), 1.0, Vec2::ZERO, 1.0);
        assert!((h - 3.0).abs() < 1e-12);
        assert_eq!(n, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn touching_circles_have_zero_gap() {
        let (h, _) = distance_circle_circle(Vec2::new(2.0, 0.0), 1.0, Vec2::ZERO, 1.0);
        assert!(h.abs() < 1e-12);
    }

    #[test]
    fn overlap_is_negative_but_bounded() {
        let (h, n) = distance_circle_circle(Vec2::new(0.5, 0.0), 1.0, Vec2::ZERO, 1.0);
        assert!(h < 0.0);
        assert!(h >= -(1.0 + 1.0));
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_centers_give_zero_normal() {
        let p = Vec2::new(3.0, -2.0);
        let (h, n) = distance_circle_circle(p, 0.5, p, 0.7);
        assert_eq!(n, Vec2::ZERO);
        assert!((h + 1.2).abs() < 1e-12); // h == -(r0+r1)
    }

    #[test]
    fn contract_h_bounded_and_normal_unit() {
        // Sweep a grid of configurations; the contract must hold everywhere.
        for ix in -5..=5 {
            for iy in -5..=5 {
                let x0 = Vec2::new(ix as f64 * 0.4, iy as f64 * 0.4);
                let (h, n) = distance_circle_circle(x0, 0.3, Vec2::ZERO, 0.25);
                assert!(h >= -(0.3 + 0.25) - 1e-12, "h={h} at {x0}");
                if x0 != Vec2::ZERO {
                    assert!((n.length() - 1.0).abs() < 1e-12);
                }
            }
        }
    }
}

#[cfg(test)]
mod three_circle {
    use crowd_core::Vec2;

    use crate::distance_three_circle;

    /// Body with torso radius 0.25, shoulder radius 0.1, shoulders offset
    /// ±0.15 along y, facing +x.
    fn body(center: Vec2) -> ([Vec2; 3], [f64; 3]) {
        (
            [
                center,
                center + Vec2::new(0.0, 0.15),
                center + Vec2::new(0.0, -0.15),
            ],
            [0.25, 0.1, 0.1],
        )
    }

    #[test]
    fn picks_minimum_pair() {
        let (x0, r0) = body(Vec2::new(1.0, 0.0));
        let (x1, r1) = body(Vec2::ZERO);
        let d = distance_three_circle(&x0, &r0, &x1, &r1);
        // Torso-torso is the closest pair here: gap = 1.0 - 0.5.
        assert!((d.h - 0.5).abs() < 1e-12);
        assert_eq!(d.n, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn moment_arms_point_to_contact() {
        let (x0, r0) = body(Vec2::new(1.0, 0.0));
        let (x1, r1) = body(Vec2::ZERO);
        let d = distance_three_circle(&x0, &r0, &x1, &r1);
        // Contact point on body 0 is its torso surface toward body 1.
        assert!((d.moment0 - Vec2::new(-0.25, 0.0)).length() < 1e-12);
        assert!((d.moment1 - Vec2::new(0.25, 0.0)).length() < 1e-12);
    }

    #[test]
    fn shoulder_pair_wins_when_offset_laterally() {
        // Slide body 0 up so its lower shoulder faces body 1's upper shoulder.
        let (x0, r0) = body(Vec2::new(1.0, 0.3));
        let (x1, r1) = body(Vec2::ZERO);
        let d = distance_three_circle(&x0, &r0, &x1, &r1);
        // Still a valid gap; the minimizing pair must not be worse than the
        // torso-torso pair.
        let torso_torso = (x0[0] - x1[0]).length() - (r0[0] + r1[0]);
        assert!(d.h <= torso_torso + 1e-12);
    }
}

#[cfg(test)]
mod circle_line {
    use crowd_core::Vec2;

    use crate::{distance_circle_line, distance_three_circle_line};

    const P0: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    const P1: Vec2 = Vec2 { x: 4.0, y: 0.0 };

    #[test]
    fn interior_perpendicular_branch() {
        let (h, n) = distance_circle_line(Vec2::new(2.0, 3.0), 1.0, P0, P1);
        assert!((h - 2.0).abs() < 1e-12);
        assert_eq!(n, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn beyond_p0_branch() {
        let (h, n) = distance_circle_line(Vec2::new(-3.0, 4.0), 1.0, P0, P1);
        // Distance to endpoint p0 is 5.
        assert!((h - 4.0).abs() < 1e-12);
        assert!((n - Vec2::new(-0.6, 0.8)).length() < 1e-12);
    }

    #[test]
    fn beyond_p1_branch() {
        let (h, n) = distance_circle_line(Vec2::new(7.0, -4.0), 1.0, P0, P1);
        assert!((h - 4.0).abs() < 1e-12);
        assert!((n - Vec2::new(0.6, -0.8)).length() < 1e-12);
    }

    #[test]
    fn penetrating_wall_gives_negative_gap() {
        let (h, n) = distance_circle_line(Vec2::new(2.0, 0.3), 0.5, P0, P1);
        assert!(h < 0.0);
        assert_eq!(n, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn zero_length_segment_is_point() {
        let p = Vec2::new(1.0, 1.0);
        let (h, n) = distance_circle_line(Vec2::new(1.0, 3.0), 0.5, p, p);
        assert!((h - 1.5).abs() < 1e-12);
        assert_eq!(n, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn three_circle_line_takes_closest_circle() {
        let xs = [
            Vec2::new(2.0, 1.0),
            Vec2::new(2.0, 0.6), // lower shoulder is closest to the wall
            Vec2::new(2.0, 1.4),
        ];
        let rs = [0.25, 0.1, 0.1];
        let d = distance_three_circle_line(&xs, &rs, P0, P1);
        assert!((d.h - 0.5).abs() < 1e-12);
        assert_eq!(d.n, Vec2::new(0.0, 1.0));
        // Moment arm: contact point (2.0, 0.5) minus torso (2.0, 1.0).
        assert!((d.moment - Vec2::new(0.0, -0.5)).length() < 1e-12);
    }
}

#[cfg(test)]
mod obstacle {
    use crowd_core::Vec2;

    use crate::LineObstacle;

    #[test]
    fn valid_segment() {
        let o = LineObstacle::new(Vec2::ZERO, Vec2::new(3.0, 4.0)).unwrap();
        assert!((o.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_nan_endpoint() {
        assert!(LineObstacle::new(Vec2::new(f64::NAN, 0.0), Vec2::ZERO).is_err());
    }
}
