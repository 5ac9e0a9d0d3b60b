use super::*;
use std::fs;
use tempfile::TempDir;

fn dataset(pokemon: &str, gyms: &str, trainers: &str) -> (TempDir, JsonDataset) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(JSON_COMBATANTS), pokemon).unwrap();
    fs::write(dir.path().join(JSON_VENUES), gyms).unwrap();
    fs::write(dir.path().join(JSON_OWNERS), trainers).unwrap();
    let source = JsonDataset::in_dir(dir.path());
    (dir, source)
}

#[test]
fn test_reads_documents() {
    let (_dir, mut source) = dataset(
        r#"[
            {"_id": "1", "name": "Bulbasaur", "stats": {"hp": "45", "tot": "318"}},
            {"_id": 2, "stats": {"tot": 405}}
        ]"#,
        r#"[{"_id": "3", "name": "Pewter Gym"}]"#,
        r#"[{"_id": "17", "owns": ["1", " 2 "], "leads": "1"}, {"_id": "18"}]"#,
    );

    assert_eq!(
        source.combatants().unwrap(),
        vec![
            Combatant::new("1".to_string(), 318),
            Combatant::new("2".to_string(), 405),
        ]
    );
    assert_eq!(source.venues().unwrap(), vec![Venue::new("3".to_string())]);
    assert_eq!(
        source.ownership_pairs().unwrap(),
        vec![
            ("1".to_string(), "17".to_string()),
            ("2".to_string(), "17".to_string()),
        ]
    );
}

#[test]
fn test_incomplete_documents_skipped() {
    let (_dir, mut source) = dataset(
        r#"[{"_id": "1"}, {"stats": {"tot": "10"}}, {"_id": "3", "stats": {"tot": "x"}}, {"_id": "4", "stats": {"tot": "7"}}]"#,
        r#"[{"name": "nameless"}, {"_id": "9"}]"#,
        r#"[{"owns": ["1"]}, {"_id": "5", "owns": ["4", {"bad": true}]}]"#,
    );

    assert_eq!(source.combatants().unwrap(), vec![Combatant::new("4".to_string(), 7)]);
    assert_eq!(source.venues().unwrap(), vec![Venue::new("9".to_string())]);
    assert_eq!(
        source.ownership_pairs().unwrap(),
        vec![("4".to_string(), "5".to_string())]
    );
}

#[test]
fn test_no_owner_documents_rejected() {
    let (_dir, mut source) = dataset("[]", "[]", "[]");

    assert!(matches!(
        source.ownership_pairs().unwrap_err(),
        DatasetError::Empty { what: "owners", .. }
    ));
    assert!(matches!(
        source.combatants().unwrap_err(),
        DatasetError::Empty { what: "combatants", .. }
    ));
}

#[test]
fn test_invalid_json_reported() {
    let (_dir, mut source) = dataset("{not json", "[]", "[]");
    assert!(matches!(source.combatants().unwrap_err(), DatasetError::Json { .. }));
}
