use crate::common::{make_temp_dir, normalized_lines, read_log_contents, run_binary, write_config};

#[test]
fn valid_line_prints_summary_and_logs_it() {
    let dir = make_temp_dir("binary");
    let output = run_binary(&dir, &["addlocker", "/s", "A1", "/a", "Blk", "5", "/z", "north"]);

    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert_eq!(stdout, vec!["Add Locker #A1 [not-in-use] at Blk 5 (zone north)"]);

    let log = read_log_contents(&dir);
    assert!(
        log.contains("INFO  parser: Parsed 'addlocker /s A1 /a Blk 5 /z north'"),
        "log was: {log}"
    );
}

#[test]
fn invalid_line_reports_error_and_fails() {
    let dir = make_temp_dir("binary");
    let output = run_binary(&dir, &["addlocker", "/s", "A1", "/z", "north"]);

    assert!(!output.status.success());
    let stderr = normalized_lines(&output.stderr);
    assert_eq!(stderr.first().map(String::as_str), Some("Invalid command format."));
    assert!(stderr.iter().any(|line| line.starts_with("Usage: addlocker /s <serial>")));
    assert!(output.stdout.is_empty());

    let log = read_log_contents(&dir);
    assert!(log.contains("WARN  parser: Rejected"));
    assert!(log.contains("ERROR main: Invalid command format."));
}

#[test]
fn unknown_command_lists_valid_words() {
    let dir = make_temp_dir("binary");
    let output = run_binary(&dir, &["frobnicate", "/s", "1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(
        "Unknown command: 'frobnicate'. Valid commands: addlocker, addbatch, assign, status, delete"
    ));
}

#[test]
fn json_flag_prints_structured_command() {
    let dir = make_temp_dir("binary");
    let output = run_binary(&dir, &["--json", "status", "/s", "B7", "/t", "in-use"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["command"], "change-status");
    assert_eq!(value["serial_number"], "B7");
    assert_eq!(value["tag"], "in-use");
}

#[test]
fn no_file_log_leaves_logs_dir_untouched() {
    let dir = make_temp_dir("binary");
    let output = run_binary(&dir, &["--no-file-log", "delete", "/s", "A1"]);

    assert!(output.status.success());
    assert!(!dir.join("logs").exists());
}

#[test]
fn config_flag_changes_vocabulary() {
    let dir = make_temp_dir("binary");
    let config = write_config(&dir, &["mars", "venus"], 1, 30);
    let config = config.to_string_lossy().to_string();

    let ok = run_binary(&dir, &["--config", &config, "addlocker", "/s", "1", "/a", "Dome", "/z", "Mars"]);
    assert!(ok.status.success());
    assert!(String::from_utf8_lossy(&ok.stdout).contains("(zone Mars)"));

    let rejected = run_binary(&dir, &["--config", &config, "addlocker", "/s", "1", "/a", "Dome", "/z", "north"]);
    assert!(!rejected.status.success());
    assert!(String::from_utf8_lossy(&rejected.stderr).contains("Zone should be one of the following: mars, venus."));
}

#[test]
fn missing_config_file_fails() {
    let dir = make_temp_dir("binary");
    let missing = dir.join("nope.json").to_string_lossy().to_string();
    let output = run_binary(&dir, &["--config", &missing, "delete", "/s", "A1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not load configuration"));
    assert!(stderr.contains("not found"));
}

#[test]
fn help_prints_usage_for_word() {
    let dir = make_temp_dir("binary");
    let output = run_binary(&dir, &["help", "addbatch"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("addbatch /s <first serial> /a <address> /z <zone> /q <size>"));

    let output = run_binary(&dir, &["HELP", "delete"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("delete /s <serial>"));
}

#[test]
fn bare_help_lists_command_words() {
    let dir = make_temp_dir("binary");
    let output = run_binary(&dir, &["help"]);

    assert!(output.status.success());
    assert_eq!(
        normalized_lines(&output.stdout),
        vec![
            "Valid commands: addlocker, addbatch, assign, status, delete",
            "Type 'help <command>' to see its usage."
        ]
    );
}

#[test]
fn show_config_prints_active_settings() {
    let dir = make_temp_dir("binary");
    let config = write_config(&dir, &["mars", "venus"], 1, 30);
    let config = config.to_string_lossy().to_string();
    let output = run_binary(&dir, &["--config", &config, "--show-config"]);

    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert_eq!(stdout.len(), 4);
    assert_eq!(stdout[0], "ZONES            mars, venus  (zones)");
    assert_eq!(stdout[3], "MAX_RENTAL_DAYS  30  (max)");
}

#[test]
fn show_config_then_parses_given_line() {
    let dir = make_temp_dir("binary");
    let output = run_binary(&dir, &["--show-config", "delete", "/s", "A1"]);

    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert_eq!(stdout.len(), 5);
    assert_eq!(stdout[4], "Delete locker #A1");
}

#[test]
fn arguments_are_required() {
    let dir = make_temp_dir("binary");
    let output = run_binary(&dir, &[]);

    assert!(!output.status.success());
    assert_eq!(normalized_lines(&output.stderr), vec!["Missing command line to parse."]);

    let output = run_binary(&dir, &["--verbose", "delete"]);
    assert_eq!(normalized_lines(&output.stderr), vec!["Unknown argument: --verbose"]);
}
