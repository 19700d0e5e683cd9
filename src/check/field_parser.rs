use std::sync::Arc;

use chrono::NaiveDate;

use crate::check::rules;
use crate::config::Config;
use crate::core::models::RentalPeriod;
use crate::core::types::{
    Address, BatchSize, Email, LockerDate, Major, Name, SerialNumber, StudentId, Tag, Zone,
};
use crate::errors::{Error, Result};

/// Turns raw field text into validated domain values. Holds the vocabulary
/// the zone and major checks consult.
#[derive(Debug, Clone)]
pub struct FieldParser {
    config: Arc<Config>,
}

impl FieldParser {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn parse_serial_number(&self, raw: &str) -> Result<SerialNumber> {
        SerialNumber::try_new(raw)
    }

    pub fn parse_address(&self, raw: &str) -> Result<Address> {
        Address::try_new(raw)
    }

    pub fn parse_zone(&self, raw: &str) -> Result<Zone> {
        Zone::try_new(raw, &self.config)
    }

    pub fn parse_size(&self, raw: &str) -> Result<BatchSize> {
        BatchSize::try_new(raw)
    }

    pub fn parse_tag(&self, raw: &str) -> Result<Tag> {
        Tag::try_from(raw)
    }

    pub fn parse_name(&self, raw: &str) -> Result<Name> {
        Name::try_new(raw)
    }

    pub fn parse_student_id(&self, raw: &str) -> Result<StudentId> {
        StudentId::try_new(raw)
    }

    pub fn parse_major(&self, raw: &str) -> Result<Major> {
        Major::try_new(raw, &self.config)
    }

    pub fn parse_email(&self, raw: &str) -> Result<Email> {
        Email::try_new(raw)
    }

    pub fn parse_date(&self, raw: &str) -> Result<LockerDate> {
        LockerDate::try_new(raw)
    }

    /// Keeps the words that name a known zone, in input order. Unknown words
    /// are dropped; only an empty result is an error.
    pub fn parse_preferences(&self, raw: &str) -> Result<Vec<Zone>> {
        let zones: Vec<Zone> = raw
            .split_whitespace()
            .filter_map(|word| Zone::try_new(word, &self.config).ok())
            .collect();

        if zones.is_empty() {
            return Err(Error::invalid(self.preferences_error_message()));
        }
        Ok(zones)
    }

    pub fn preferences_error_message(&self) -> String {
        format!(
            "There must be at least one valid zone under preferences.\n    {}",
            Zone::error_message(&self.config)
        )
    }

    pub fn check_date_range(&self, start: &LockerDate, end: &LockerDate) -> Result<()> {
        rules::check_date_range(start, end, &self.config)
    }

    pub fn rental_period(
        &self,
        start: LockerDate,
        end: LockerDate,
        today: NaiveDate,
    ) -> Result<RentalPeriod> {
        RentalPeriod::try_new(start, end, &self.config, today)
    }
}
