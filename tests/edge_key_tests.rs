//! Integration tests for the edge-key codec.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use traverse::{MAX_EDGE_ID, create_edge_key, edge_from_edge_key, reverse_edge_key};

#[test]
fn test_random_ids_round_trip() {
    let mut rng = StdRng::seed_from_u64(123);

    for _ in 0..50 {
        // Mask into the encodable range.
        let id = rng.random::<u32>() & MAX_EDGE_ID;

        let fwd = create_edge_key(id, false);
        let rev = create_edge_key(id, true);

        assert_eq!(edge_from_edge_key(fwd), id);
        assert_eq!(edge_from_edge_key(rev), id);
        assert_eq!(reverse_edge_key(fwd), rev);
        assert_eq!(reverse_edge_key(rev), fwd);
    }
}

#[test]
fn test_random_ids_arithmetic_properties() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..5 {
        let id = rng.random_range(0..MAX_EDGE_ID / 2);
        let fwd = create_edge_key(id, false);
        let rev = create_edge_key(id, true);

        assert_eq!(fwd, id * 2);
        assert_eq!(rev, id * 2 + 1);

        assert_eq!(edge_from_edge_key(fwd), id);
        assert_eq!(edge_from_edge_key(rev), id);
    }
}

#[test]
fn test_keys_are_unique_per_direction() {
    let mut seen = std::collections::HashSet::new();
    for id in 0..1_000 {
        assert!(seen.insert(create_edge_key(id, false)));
        assert!(seen.insert(create_edge_key(id, true)));
    }
    assert_eq!(seen.len(), 2_000);
}
