use crate::check::rules::check_date_range_on;
use crate::config::Config;
use crate::core::types::{Address, Email, LockerDate, Major, Name, SerialNumber, StudentId, Tag, Zone};
use crate::errors::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locker {
    serial_number: SerialNumber,
    address: Address,
    zone: Zone,
    tag: Tag,
}

impl Locker {
    pub fn new(serial_number: SerialNumber, address: Address, zone: Zone, tag: Tag) -> Self {
        Self {
            serial_number,
            address,
            zone,
            tag,
        }
    }

    pub fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }
    pub fn address(&self) -> &Address {
        &self.address
    }
    pub fn zone(&self) -> &Zone {
        &self.zone
    }
    pub fn tag(&self) -> Tag {
        self.tag
    }
}

impl fmt::Display for Locker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Locker #{} [{}] at {} (zone {})",
            self.serial_number, self.tag, self.address, self.zone
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    name: Name,
    student_id: StudentId,
    email: Email,
    major: Major,
}

impl Student {
    pub fn new(name: Name, student_id: StudentId, email: Email, major: Major) -> Self {
        Self {
            name,
            student_id,
            email,
            major,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }
    pub fn email(&self) -> &Email {
        &self.email
    }
    pub fn major(&self) -> &Major {
        &self.major
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {})",
            self.name, self.student_id, self.major, self.email
        )
    }
}

/// Start and end of a locker rental. Only exists once the range rule holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentalPeriod {
    start: LockerDate,
    end: LockerDate,
}

impl RentalPeriod {
    pub fn try_new(
        start: LockerDate,
        end: LockerDate,
        config: &Config,
        today: NaiveDate,
    ) -> Result<Self> {
        check_date_range_on(&start, &end, config, today)?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> LockerDate {
        self.start
    }
    pub fn end(&self) -> LockerDate {
        self.end
    }
}

impl fmt::Display for RentalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
