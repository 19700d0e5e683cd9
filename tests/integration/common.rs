use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub use lockerlog::command::command_parser::CommandParser;
use lockerlog::config::Config;
use lockerlog::logging::Logger;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_lockerlog"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_config(dir: &Path, zones: &[&str], min_days: i64, max_days: i64) -> PathBuf {
    let zones = zones
        .iter()
        .map(|z| format!("\"{z}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let cfg = format!(
        r#"{{
      "zones": {{ "value": [{zones}], "description": "zones" }},
      "majors": {{ "value": ["computer science", "history"], "description": "majors" }},
      "min_rental_days": {{ "value": {min_days}, "description": "min" }},
      "max_rental_days": {{ "value": {max_days}, "description": "max" }}
    }}"#
    );
    let path = dir.join("config.json");
    fs::write(&path, cfg).unwrap();
    path
}

pub fn quiet_parser(config: Config) -> CommandParser {
    let logger = Logger::new("test");
    logger.set_file_logging_enabled(false);
    CommandParser::new(Arc::new(config), logger)
}

pub fn run_binary(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .arg("--logs")
        .arg(dir.join("logs"))
        .args(args)
        .output()
        .expect("failed to run lockerlog")
}

pub fn read_log_contents(dir: &Path) -> String {
    let logs = dir.join("logs");
    let mut contents = String::new();
    if let Ok(entries) = fs::read_dir(&logs) {
        for entry in entries.flatten() {
            if let Ok(text) = fs::read_to_string(entry.path()) {
                contents.push_str(&text);
            }
        }
    }
    contents
}

pub fn normalized_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
