use super::*;

fn pairs(raw: &[(u32, u32)]) -> Vec<(u32, u32)> {
    raw.to_vec()
}

#[test]
fn test_owner_lookup() {
    let index = OwnershipIndex::from_pairs(pairs(&[(1, 100), (2, 200)]), DuplicateOwnership::LastWins)
        .unwrap();

    assert_eq!(index.owner_of(&1), Some(&100));
    assert_eq!(index.owner_of(&2), Some(&200));
    assert_eq!(index.owner_of(&3), None);
    assert!(!index.is_owned(&3));
    assert_eq!(index.len(), 2);
}

#[test]
fn test_last_write_wins() {
    let index = OwnershipIndex::from_pairs(
        pairs(&[(1, 100), (1, 200), (1, 300)]),
        DuplicateOwnership::LastWins,
    )
    .unwrap();

    assert_eq!(index.owner_of(&1), Some(&300));
    assert_eq!(index.len(), 1);
}

#[test]
fn test_reject_conflicting_owner() {
    let err = OwnershipIndex::from_pairs(pairs(&[(1, 100), (1, 200)]), DuplicateOwnership::Reject)
        .unwrap_err();

    assert_eq!(
        err,
        GenerationError::DuplicateOwnership {
            combatant: "1".to_string(),
            first: "100".to_string(),
            second: "200".to_string(),
        }
    );
    assert!(err.is_configuration());
}

#[test]
fn test_reject_allows_repeated_identical_pair() {
    let index = OwnershipIndex::from_pairs(pairs(&[(1, 100), (1, 100)]), DuplicateOwnership::Reject)
        .unwrap();
    assert_eq!(index.owner_of(&1), Some(&100));
}

#[test]
fn test_same_owner() {
    let index = OwnershipIndex::from_pairs(
        vec![
            ("a".to_string(), "x".to_string()),
            ("b".to_string(), "y".to_string()),
            ("c".to_string(), "y".to_string()),
        ],
        DuplicateOwnership::LastWins,
    )
    .unwrap();

    assert!(index.same_owner(&"b".to_string(), &"c".to_string()));
    assert!(!index.same_owner(&"a".to_string(), &"b".to_string()));
    // Unowned combatants never share an owner with anyone
    assert!(!index.same_owner(&"a".to_string(), &"zzz".to_string()));
}
