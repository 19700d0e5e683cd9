use chrono::NaiveDate;

pub trait NaiveDateExt {
    /// Whole days from `self` to `later`; negative when `later` is earlier.
    fn days_until(&self, later: &NaiveDate) -> i64;
}

impl NaiveDateExt for NaiveDate {
    fn days_until(&self, later: &NaiveDate) -> i64 {
        later.signed_duration_since(*self).num_days()
    }
}
