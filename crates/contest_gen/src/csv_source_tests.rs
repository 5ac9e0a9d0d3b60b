use super::*;
use std::fs;
use tempfile::TempDir;

fn dataset(pokemon: &str, gyms: &str, owns: &str) -> (TempDir, CsvDataset) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CSV_COMBATANTS), pokemon).unwrap();
    fs::write(dir.path().join(CSV_VENUES), gyms).unwrap();
    fs::write(dir.path().join(CSV_OWNERSHIP), owns).unwrap();
    let source = CsvDataset::in_dir(dir.path());
    (dir, source)
}

#[test]
fn test_reads_all_three_tables() {
    let (_dir, mut source) = dataset(
        "id,pokename,total\n1,Bulbasaur,318\n2,Ivysaur,405\n",
        "gym_id,name\n7,Pewter\n",
        "trainerID,pokename\n10,1\n20,2\n",
    );

    let combatants = source.combatants().unwrap();
    assert_eq!(combatants, vec![Combatant::new(1, 318), Combatant::new(2, 405)]);
    assert_eq!(source.venues().unwrap(), vec![Venue::new(7)]);
    assert_eq!(source.ownership_pairs().unwrap(), vec![(1, 10), (2, 20)]);
}

#[test]
fn test_headers_are_case_insensitive() {
    let (_dir, mut source) = dataset("ID,TOTAL\n 3 , 99 \n", "id\n4\n", "TRAINERID,POKENAME\n1,3\n");

    assert_eq!(source.combatants().unwrap(), vec![Combatant::new(3, 99)]);
    assert_eq!(source.venues().unwrap(), vec![Venue::new(4)]);
    assert_eq!(source.ownership_pairs().unwrap(), vec![(3, 1)]);
}

#[test]
fn test_malformed_rows_skipped() {
    let (_dir, mut source) = dataset(
        "id,total\n1,318\nabc,12\n2\n3,???\n4,500\n",
        "gym_id\n1\n",
        "trainerID,pokename\nx,1\n5,4\n",
    );

    let ids: Vec<u32> = source.combatants().unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 4]);
    assert_eq!(source.ownership_pairs().unwrap(), vec![(4, 5)]);
}

#[test]
fn test_missing_column_reported() {
    let (_dir, mut source) = dataset("id,hp\n1,45\n", "gym_id\n1\n", "trainerID,pokename\n1,1\n");

    let err = source.combatants().unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn { ref column, .. } if column == "total"));
}

#[test]
fn test_empty_venues_rejected() {
    let (_dir, mut source) = dataset("id,total\n1,1\n", "gym_id\n", "trainerID,pokename\n1,1\n");

    assert!(matches!(
        source.venues().unwrap_err(),
        DatasetError::Empty { what: "venues", .. }
    ));
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let mut source = CsvDataset::in_dir(dir.path());
    assert!(matches!(source.combatants().unwrap_err(), DatasetError::Csv { .. }));
}

#[test]
fn test_read_id_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CSV_OWNERS);
    fs::write(&path, "trainerID,name\n3,Brock\n1,Misty\nnope,Ash\n").unwrap();

    assert_eq!(read_id_column(&path, owner_id_columns()).unwrap(), vec![3, 1]);
}
