use super::*;
use crate::ownership::DuplicateOwnership;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// 1,2 -> owner 10; 3,4 -> owner 20; 5 -> owner 30; 6 unowned
fn fixture() -> (Vec<u32>, OwnershipIndex<u32>) {
    let ownership = OwnershipIndex::from_pairs(
        vec![(1, 10), (2, 10), (3, 20), (4, 20), (5, 30)],
        DuplicateOwnership::LastWins,
    )
    .unwrap();
    (vec![1, 2, 3, 4, 5, 6], ownership)
}

#[test]
fn test_candidates_respect_ownership() {
    let (pool, ownership) = fixture();

    let candidates: Vec<u32> = OpponentSelector::candidates(&1, &pool, &ownership)
        .into_iter()
        .copied()
        .collect();

    // Not itself, not its stablemate 2, not unowned 6
    assert_eq!(candidates, vec![3, 4, 5]);
}

#[test]
fn test_select_never_returns_ineligible() {
    let (pool, ownership) = fixture();
    let selector = OpponentSelector::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..200 {
        let pick = selector
            .select(&3, &pool, &ownership, &HashSet::new(), &mut rng)
            .unwrap()
            .found()
            .unwrap();
        assert!([1, 2, 5].contains(&pick), "ineligible opponent {pick}");
    }
}

#[test]
fn test_select_avoids_excluded() {
    let (pool, ownership) = fixture();
    let selector = OpponentSelector::default();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let exclude: HashSet<u32> = [3, 4].into_iter().collect();

    let pick = selector
        .select(&1, &pool, &ownership, &exclude, &mut rng)
        .unwrap();
    assert_eq!(pick, Selection::Found(5));
}

#[test]
fn test_exhausted_when_all_candidates_used() {
    let (pool, ownership) = fixture();
    let selector = OpponentSelector::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let exclude: HashSet<u32> = [3, 4, 5].into_iter().collect();

    let pick = selector
        .select(&1, &pool, &ownership, &exclude, &mut rng)
        .unwrap();
    assert_eq!(pick, Selection::Exhausted);
}

#[test]
fn test_zero_budget_exhausts_on_first_collision() {
    let (pool, ownership) = fixture();
    let selector = OpponentSelector::new(0);
    let exclude: HashSet<u32> = [3, 4].into_iter().collect();

    // With no redraws, some seed must land on an excluded id first
    let exhausted = (0..64u64).any(|seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        selector
            .select(&1, &pool, &ownership, &exclude, &mut rng)
            .unwrap()
            == Selection::Exhausted
    });
    assert!(exhausted);
}

#[test]
fn test_no_cross_owner_candidate_is_exhausted() {
    let ownership =
        OwnershipIndex::from_pairs(vec![(1, 10), (2, 10)], DuplicateOwnership::LastWins).unwrap();
    let selector = OpponentSelector::default();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let pick = selector
        .select(&1, &[1, 2][..], &ownership, &HashSet::new(), &mut rng)
        .unwrap();
    assert_eq!(pick, Selection::Exhausted);
}

#[test]
fn test_tiny_pool_is_fatal() {
    let (_, ownership) = fixture();
    let selector = OpponentSelector::default();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let err = selector
        .select(&1, &[1][..], &ownership, &HashSet::new(), &mut rng)
        .unwrap_err();
    assert_eq!(err, GenerationError::InsufficientCombatants { found: 1 });
}
