use lockerlog::arg::token::Token;
use lockerlog::arg::tokenizer::tokenize;
use lockerlog::command::commands::Command;
use lockerlog::config::Config;
use lockerlog::errors::Error;

use crate::common::{make_temp_dir, quiet_parser, write_config};

#[test]
fn tokenizer_splits_example_line() {
    let map = tokenize("  /s A123 /a Blk5 /z north", &[Token::Serial, Token::Address, Token::Zone]);
    assert_eq!(map.text_before_first_token(), "  ");
    assert_eq!(map.value(Token::Serial), Some("A123"));
    assert_eq!(map.value(Token::Address), Some("Blk5"));
    assert_eq!(map.value(Token::Zone), Some("north"));
    assert_eq!(map.value(Token::Tag), None);
}

#[test]
fn unrecognized_markers_stay_inside_values() {
    let map = tokenize("/s A1 /a Blk 5 /t broken", &[Token::Serial, Token::Address]);
    assert_eq!(map.value(Token::Address), Some("Blk 5 /t broken"));
    assert!(!map.is_present(Token::Tag));
}

#[test]
fn every_command_parses_through_dispatcher() {
    let parser = quiet_parser(Config::default());
    let lines = [
        "addlocker /s A1 /a Hall /z north",
        "addbatch /s L08 /a Hall /z south /q 4",
        "assign /n Mary-Jane O'Neil /i A7654321B /e mj@example.com /m Computer Science /from 01-01-2099 /to 31-01-2099 /p central",
        "status /s A1 /t unauthorized",
        "delete /s A1",
    ];
    let words: Vec<String> = lines
        .iter()
        .map(|line| parser.parse(line).unwrap().word().to_string())
        .collect();
    assert_eq!(words, ["addlocker", "addbatch", "assign", "status", "delete"]);
}

#[test]
fn batch_summary_lists_each_locker() {
    let parser = quiet_parser(Config::default());
    let cmd = parser.parse("addbatch /s L08 /a Hall /z south /q 3").unwrap();
    assert_eq!(
        cmd.to_string(),
        "Add batch of 3 locker(s):\n  Locker #L08 [not-in-use] at Hall (zone south)\n  Locker #L09 [not-in-use] at Hall (zone south)\n  Locker #L10 [not-in-use] at Hall (zone south)"
    );
}

#[test]
fn configured_rental_bounds_apply() {
    let dir = make_temp_dir("parse");
    let path = write_config(&dir, &["north"], 1, 5);
    let parser = quiet_parser(Config::load_from(path).unwrap());

    let base = "assign /n Alex /i A0000001Z /e a@b.co /m history /p north";
    let short = format!("{base} /from 01-01-2099 /to 04-01-2099");
    assert!(matches!(parser.parse(&short), Ok(Command::AssignLocker(_))));

    let long = format!("{base} /from 01-01-2099 /to 10-01-2099");
    match parser.parse(&long) {
        Err(Error::InvalidInput(msg)) => assert_eq!(
            msg,
            "The rental period should last between 1 and 5 days, and the end date cannot be earlier than today."
        ),
        other => panic!("expected date range error, got {other:?}"),
    }
}

#[test]
fn structural_errors_win_over_field_errors() {
    let parser = quiet_parser(Config::default());
    let err = parser.parse("assign /n 123 /i bad").unwrap_err();
    assert!(err.to_string().starts_with("Invalid command format.\nUsage: assign"));
}
