//! Unit tests for mc-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, -2.0);
        assert_eq!(a + b, Vec2::new(4.0, 2.0));
        assert_eq!(a - b, Vec2::new(2.0, 6.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(-b, Vec2::new(-1.0, 2.0));
    }

    #[test]
    fn squared_lengths() {
        assert_eq!(Vec2::new(3.0, 4.0).length_squared(), 25.0);
        assert_eq!(Vec2::ZERO.distance_squared(Vec2::new(0.0, 5.0)), 25.0);
    }

    #[test]
    fn add_assign() {
        let mut p = Vec2::new(1.0, 1.0);
        p += Vec2::new(0.5, -1.0);
        assert_eq!(p, Vec2::new(1.5, 0.0));
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, Vec2};

    #[test]
    fn opposites() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn vectors_are_unit_steps() {
        assert_eq!(Direction::Up.vector(), Vec2::new(0.0, -1.0));
        assert_eq!(Direction::Down.vector(), Vec2::new(0.0, 1.0));
        for dir in Direction::ALL {
            assert_eq!(dir.vector().length_squared(), 1.0);
            assert_eq!(dir.vector(), -dir.opposite().vector());
        }
    }

    #[test]
    fn neighbor_slots_are_distinct() {
        let mut seen = [false; 4];
        for dir in Direction::ALL {
            assert!(!seen[dir.index()]);
            seen[dir.index()] = true;
        }
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}

#[cfg(test)]
mod rng {
    use crate::GhostRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = GhostRng::new(12345, 0);
        let mut r2 = GhostRng::new(12345, 0);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_slots_differ() {
        let mut r0 = GhostRng::new(1, 0);
        let mut r1 = GhostRng::new(1, 1);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent slots should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = GhostRng::new(0, 0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = GhostRng::new(0, 0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7u8]), Some(&7));
    }
}
