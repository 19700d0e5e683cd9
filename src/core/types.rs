use crate::config::Config;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

static SERIAL_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{1,12}$").unwrap());
static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z .'-]{0,99}$").unwrap());
static STUDENT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^A[0-9]{7}[A-Z]$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap()
});
static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").unwrap());

const ADDRESS_MAX_LEN: usize = 100;

// ---- Locker fields ----------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub const ERROR_MESSAGE: &'static str =
        "Serial number should only contain letters and digits, and be 1 to 12 characters long.";

    pub fn is_valid(raw: &str) -> bool {
        SERIAL_NUMBER.is_match(raw)
    }

    pub fn try_new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if !Self::is_valid(raw) {
            return Err(Error::invalid(Self::ERROR_MESSAGE));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub const ERROR_MESSAGE: &'static str =
        "Address should not be blank and should be at most 100 characters long.";

    pub fn is_valid(raw: &str) -> bool {
        !raw.trim().is_empty() && raw.chars().count() <= ADDRESS_MAX_LEN
    }

    pub fn try_new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if !Self::is_valid(raw) {
            return Err(Error::invalid(Self::ERROR_MESSAGE));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A zone drawn from the configured vocabulary. The payload keeps the
/// user's spelling; membership is checked case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Zone(String);

impl Zone {
    pub fn error_message(config: &Config) -> String {
        format!(
            "Zone should be one of the following: {}.",
            config.zones().join(", ")
        )
    }

    pub fn is_valid(raw: &str, config: &Config) -> bool {
        config.is_known_zone(raw)
    }

    pub fn try_new(raw: &str, config: &Config) -> Result<Self> {
        let raw = raw.trim();
        if !Self::is_valid(raw, config) {
            return Err(Error::invalid(Self::error_message(config)));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    InUse,
    NotInUse,
    Broken,
    Unauthorized,
}

impl Tag {
    pub fn error_message() -> String {
        format!("Tag should be one of the following: {}.", valid_csv::<Tag>())
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| Error::invalid(Self::error_message()))
    }
}

impl Default for Tag {
    fn default() -> Self {
        Tag::NotInUse
    }
}

/// Number of lockers created by one batch command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BatchSize(u32);

impl BatchSize {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 30;
    pub const ERROR_MESSAGE: &'static str = "The size of the batch of lockers should satisfy the following constraints:\n     1. It should be a positive integer.\n     2. It should be within the range of 1 to 30 (inclusive).";

    pub fn try_new(raw: &str) -> Result<Self> {
        let n: i64 = raw
            .trim()
            .parse()
            .map_err(|_| Error::invalid(Self::ERROR_MESSAGE))?;
        if n < Self::MIN as i64 || n > Self::MAX as i64 {
            return Err(Error::invalid(Self::ERROR_MESSAGE));
        }
        Ok(Self(n as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BatchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---- Student fields ---------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub const ERROR_MESSAGE: &'static str = "Name should start with a letter and only contain letters, spaces, apostrophes, hyphens and periods (at most 100 characters).";

    pub fn is_valid(raw: &str) -> bool {
        NAME.is_match(raw)
    }

    pub fn try_new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if !Self::is_valid(raw) {
            return Err(Error::invalid(Self::ERROR_MESSAGE));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Matriculation number, e.g. `A0123456X`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub const ERROR_MESSAGE: &'static str = "Student id should start with 'A', followed by 7 digits and end with an uppercase letter (e.g. A0123456X).";

    pub fn is_valid(raw: &str) -> bool {
        STUDENT_ID.is_match(raw)
    }

    pub fn try_new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if !Self::is_valid(raw) {
            return Err(Error::invalid(Self::ERROR_MESSAGE));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Major(String);

impl Major {
    pub fn error_message(config: &Config) -> String {
        format!(
            "Major should be one of the following courses: {}.",
            config.majors().join(", ")
        )
    }

    pub fn is_valid(raw: &str, config: &Config) -> bool {
        config.is_known_major(raw)
    }

    pub fn try_new(raw: &str, config: &Config) -> Result<Self> {
        let raw = raw.trim();
        if !Self::is_valid(raw, config) {
            return Err(Error::invalid(Self::error_message(config)));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub const ERROR_MESSAGE: &'static str = "Email should be of the format local-part@domain, e.g. student@u.nus.edu. The local part may contain letters, digits and the characters ._%+- only.";

    pub fn is_valid(raw: &str) -> bool {
        EMAIL.is_match(raw)
    }

    pub fn try_new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if !Self::is_valid(raw) {
            return Err(Error::invalid(Self::ERROR_MESSAGE));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---- Dates ------------------------------------------------------------------

/// A calendar date written as `dd-MM-yyyy`, resolved strictly: `31-04-2025`
/// and `29-02-2023` are rejected rather than rolled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LockerDate(NaiveDate);

impl LockerDate {
    pub const FORMAT: &'static str = "%d-%m-%Y";
    pub const ERROR_MESSAGE: &'static str = "Date should be a valid calendar date in the format dd-mm-yyyy (e.g. 09-11-2025).";

    pub fn is_valid(raw: &str) -> bool {
        DATE_SHAPE.is_match(raw) && NaiveDate::parse_from_str(raw, Self::FORMAT).is_ok()
    }

    pub fn try_new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if !DATE_SHAPE.is_match(raw) {
            return Err(Error::invalid(Self::ERROR_MESSAGE));
        }
        NaiveDate::parse_from_str(raw, Self::FORMAT)
            .map(Self)
            .map_err(|_| Error::invalid(Self::ERROR_MESSAGE))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for LockerDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl Serialize for LockerDate {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
