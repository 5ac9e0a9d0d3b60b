use super::*;
use crate::ownership::DuplicateOwnership;
use crate::types::utc_seconds;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn ownership() -> OwnershipIndex<u32> {
    OwnershipIndex::from_pairs(vec![(1, 100), (2, 200)], DuplicateOwnership::LastWins).unwrap()
}

#[test]
fn test_build_resolves_owners() {
    let builder = RecordBuilder::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let record = builder
        .build(
            17,
            &2,
            &Combatant::new(1, 90),
            &Combatant::new(2, 40),
            &ownership(),
            &[Venue::new(5)],
            &mut rng,
        )
        .unwrap();

    assert_eq!(record.id, "b17");
    assert_eq!(record.sequence, 17);
    assert_eq!(record.venue_id, 5);
    assert_eq!(record.winner, Participant { owner_id: 100, combatant_id: 1 });
    assert_eq!(record.loser, Participant { owner_id: 200, combatant_id: 2 });
    assert_eq!(record.opponent_id(), &1);
}

#[test]
fn test_date_has_fixed_time_and_utc_marker() {
    let builder = RecordBuilder::default();
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let record = builder
        .build(1, &1, &Combatant::new(1, 1), &Combatant::new(2, 0), &ownership(), &[Venue::new(5)], &mut rng)
        .unwrap();

    let rendered = record.date.format(utc_seconds::FORMAT).to_string();
    assert!(rendered.starts_with("2025-"));
    assert!(rendered.ends_with("T10:00:00Z"), "unexpected date {rendered}");
    assert!(DateRange::default().contains(record.date.date_naive()));
}

#[test]
fn test_missing_owner_is_integrity_error() {
    let builder = RecordBuilder::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = builder
        .build(1, &1, &Combatant::new(1, 5), &Combatant::new(3, 1), &ownership(), &[Venue::new(5)], &mut rng)
        .unwrap_err();

    assert_eq!(
        err,
        GenerationError::MissingOwner {
            combatant: "3".to_string(),
            winner: "1".to_string(),
            loser: "3".to_string(),
        }
    );
    assert!(!err.is_configuration());
}

#[test]
fn test_no_venue_is_error() {
    let builder = RecordBuilder::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = builder
        .build(1, &1, &Combatant::new(1, 5), &Combatant::new(2, 1), &ownership(), &[], &mut rng)
        .unwrap_err();
    assert_eq!(err, GenerationError::NoVenues);
}

#[test]
fn test_date_range_bounds() {
    let day = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
    let single = DateRange::new(day(3, 14), day(3, 14)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    assert_eq!(single.days(), 1);
    assert_eq!(single.sample(&mut rng), day(3, 14));
    assert_eq!(DateRange::default().days(), 365);

    for _ in 0..1000 {
        assert!(DateRange::default().contains(DateRange::default().sample(&mut rng)));
    }
}

#[test]
fn test_inverted_date_range_rejected() {
    let day = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
    assert!(matches!(
        DateRange::new(day(6, 1), day(5, 1)),
        Err(GenerationError::InvalidDateRange { .. })
    ));
}
