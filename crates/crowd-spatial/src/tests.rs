//! Unit tests for the block list.

use crowd_core::{AgentId, Vec2};

use crate::BlockList;

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn rejects_zero_cell_size() {
        assert!(BlockList::new(0.0).is_err());
    }

    #[test]
    fn rejects_negative_cell_size() {
        assert!(BlockList::new(-1.0).is_err());
    }

    #[test]
    fn rejects_nan_cell_size() {
        assert!(BlockList::new(f64::NAN).is_err());
    }

    #[test]
    fn valid_cell_size_builds_empty() {
        let bl = BlockList::new(2.0).unwrap();
        assert!(bl.is_empty());
        assert_eq!(bl.cell_size(), 2.0);
    }
}

#[cfg(test)]
mod keys {
    use super::*;

    #[test]
    fn floor_keying() {
        let bl = BlockList::new(1.0).unwrap();
        assert_eq!(bl.cell_key(Vec2::new(0.5, 0.5)), (0, 0));
        assert_eq!(bl.cell_key(Vec2::new(-0.5, 0.5)), (-1, 0));
        assert_eq!(bl.cell_key(Vec2::new(2.0, -3.1)), (2, -4));
    }

    #[test]
    fn key_scales_with_cell_size() {
        let bl = BlockList::new(7.0).unwrap();
        assert_eq!(bl.cell_key(Vec2::new(6.9, 0.0)), (0, 0));
        assert_eq!(bl.cell_key(Vec2::new(7.1, 0.0)), (1, 0));
    }
}

#[cfg(test)]
mod roundtrip {
    use super::*;

    #[test]
    fn every_insert_lands_in_exactly_one_cell() {
        let mut bl = BlockList::new(1.5).unwrap();
        let points = [
            Vec2::new(0.1, 0.1),
            Vec2::new(-3.0, 2.7),
            Vec2::new(10.0, -10.0),
            Vec2::new(0.1, 0.2), // same cell as the first
        ];
        for (i, &p) in points.iter().enumerate() {
            bl.insert(AgentId(i as u32), p);
        }
        assert_eq!(bl.len(), 4);

        // Each inserted id appears in exactly one occupied cell.
        for (i, &p) in points.iter().enumerate() {
            let id = AgentId(i as u32);
            let home = bl.cell_key(p);
            assert!(bl.cell_contents(home).contains(&id));
            let appearances: usize = bl
                .occupied_cells()
                .filter(|&k| bl.cell_contents(k).contains(&id))
                .count();
            assert_eq!(appearances, 1, "agent {id} in {appearances} cells");
        }
    }

    #[test]
    fn neighbors_cover_cutoff_radius() {
        // Property: neighbors(cell(p), 1) ⊇ every point within Euclidean
        // distance <= cell_size of p.
        let cell = 2.0;
        let mut bl = BlockList::new(cell).unwrap();
        let center = Vec2::new(0.3, 0.4);
        bl.insert(AgentId(0), center);

        // Ring of points at distance exactly cell_size minus epsilon.
        let mut others = Vec::new();
        for k in 0..16 {
            let ang = k as f64 * std::f64::consts::TAU / 16.0;
            let p = center + Vec2::from_angle(ang) * (cell - 1e-9);
            let id = AgentId(1 + k as u32);
            bl.insert(id, p);
            others.push(id);
        }

        let near = bl.neighbors(bl.cell_key(center), 1);
        for id in others {
            assert!(near.contains(&id), "{id} missing from 3x3 neighborhood");
        }
    }

    #[test]
    fn neighbors_radius_zero_is_own_cell() {
        let mut bl = BlockList::new(1.0).unwrap();
        bl.insert(AgentId(0), Vec2::new(0.5, 0.5));
        bl.insert(AgentId(1), Vec2::new(1.5, 0.5)); // adjacent cell
        let own = bl.neighbors((0, 0), 0);
        assert_eq!(own, vec![AgentId(0)]);
    }
}

#[cfg(test)]
mod pairs {
    use std::collections::HashSet;

    use super::*;

    /// Collect pairs as ordered (min, max) tuples for set comparison.
    fn collect_pairs(bl: &BlockList) -> Vec<(u32, u32)> {
        let mut pairs = Vec::new();
        bl.for_each_pair(|a, b| {
            pairs.push((a.0.min(b.0), a.0.max(b.0)));
        });
        pairs
    }

    #[test]
    fn forward_pass_visits_each_pair_once() {
        let mut bl = BlockList::new(1.0).unwrap();
        // A cluster spanning several adjacent cells, including diagonals.
        let points = [
            Vec2::new(0.5, 0.5),
            Vec2::new(0.6, 0.4),
            Vec2::new(1.5, 0.5),
            Vec2::new(1.5, 1.5),
            Vec2::new(0.5, 1.5),
            Vec2::new(1.5, -0.5),
        ];
        for (i, &p) in points.iter().enumerate() {
            bl.insert(AgentId(i as u32), p);
        }

        let pairs = collect_pairs(&bl);
        let unique: HashSet<_> = pairs.iter().copied().collect();
        assert_eq!(pairs.len(), unique.len(), "duplicate pair visited: {pairs:?}");

        // All agents here are within one cell of each other except across
        // the full diagonal span; every adjacent-cell pair must be present.
        for expect in [(0u32, 1u32), (0, 2), (0, 3), (0, 4), (0, 5), (2, 3), (2, 5)] {
            assert!(unique.contains(&expect), "missing pair {expect:?}");
        }
    }

    #[test]
    fn distant_agents_never_paired() {
        let mut bl = BlockList::new(1.0).unwrap();
        bl.insert(AgentId(0), Vec2::new(0.5, 0.5));
        bl.insert(AgentId(1), Vec2::new(10.5, 0.5));
        assert!(collect_pairs(&bl).is_empty());
    }

    #[test]
    fn intra_cell_pairs_complete() {
        let mut bl = BlockList::new(5.0).unwrap();
        for i in 0..4 {
            bl.insert(AgentId(i), Vec2::new(1.0 + i as f64 * 0.1, 1.0));
        }
        let pairs = collect_pairs(&bl);
        // C(4,2) = 6 intra-cell pairs.
        assert_eq!(pairs.len(), 6);
    }
}
