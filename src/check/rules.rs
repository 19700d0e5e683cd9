use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::core::types::LockerDate;
use crate::errors::{Error, Result};
use crate::extensions::chrono::NaiveDateExt;

pub fn date_range_error_message(config: &Config) -> String {
    format!(
        "The rental period should last between {} and {} days, and the end date cannot be earlier than today.",
        config.min_rental_days(),
        config.max_rental_days()
    )
}

/// Checks a rental period against the configured bounds and today's date on
/// the local clock.
pub fn check_date_range(start: &LockerDate, end: &LockerDate, config: &Config) -> Result<()> {
    check_date_range_on(start, end, config, Local::now().date_naive())
}

/// Fails when the gap between `start` and `end` falls outside the configured
/// bounds, or when `end` is before `today`. Both cases share one message.
pub fn check_date_range_on(
    start: &LockerDate,
    end: &LockerDate,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let gap = start.date().days_until(&end.date());
    let gap_ok = gap >= config.min_rental_days() && gap <= config.max_rental_days();
    let ends_in_past = end.date() < today;

    if !gap_ok || ends_in_past {
        return Err(Error::invalid(date_range_error_message(config)));
    }
    Ok(())
}
