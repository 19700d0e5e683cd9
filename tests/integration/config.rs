use std::fs;

use lockerlog::config::Config;
use lockerlog::errors::Error;

use crate::common::{make_temp_dir, write_config};

#[test]
fn loads_vocabulary_from_file() {
    let dir = make_temp_dir("config");
    let path = write_config(&dir, &["mars", "venus"], 3, 10);
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.zones(), ["mars", "venus"]);
    assert!(config.is_known_major("History"));
    assert_eq!(config.min_rental_days(), 3);
    assert_eq!(config.max_rental_days(), 10);
    assert_eq!(config.path(), Some(path.as_path()));
}

#[test]
fn missing_items_fall_back_to_defaults() {
    let dir = make_temp_dir("config");
    let path = dir.join("config.json");
    fs::write(&path, r#"{ "max_rental_days": { "value": 90, "description": "max" } }"#).unwrap();
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.zones(), Config::default().zones());
    assert_eq!(config.min_rental_days(), 7);
    assert_eq!(config.max_rental_days(), 90);
}

#[test]
fn rejects_inverted_rental_bounds() {
    let dir = make_temp_dir("config");
    let path = write_config(&dir, &["north"], 30, 10);
    match Config::load_from(&path) {
        Err(Error::Config(msg)) => assert!(msg.contains("min 30 and max 10")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn rejects_broken_json() {
    let dir = make_temp_dir("config");
    let path = dir.join("config.json");
    fs::write(&path, "{ zones: ").unwrap();
    assert!(matches!(Config::load_from(&path), Err(Error::Json(_))));
}
