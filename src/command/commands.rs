use crate::core::models::{Locker, RentalPeriod, Student};
use crate::core::types::{SerialNumber, Tag, Zone};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum CommandWord {
    #[strum(serialize = "addlocker", to_string = "addlocker")]
    AddLocker,
    #[strum(serialize = "addbatch", to_string = "addbatch")]
    AddBatch,
    #[strum(serialize = "assign", to_string = "assign")]
    Assign,
    #[strum(serialize = "status", to_string = "status")]
    Status,
    #[strum(serialize = "delete", to_string = "delete")]
    Delete,
}

impl CommandWord {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::invalid(format!(
                "Unknown command: '{}'. Valid commands: {}",
                s.trim(),
                valid_csv::<CommandWord>()
            ))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddLockerCommand {
    pub locker: Locker,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddBatchCommand {
    pub lockers: Vec<Locker>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignLockerCommand {
    pub student: Student,
    pub period: RentalPeriod,
    pub preferences: Vec<Zone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeStatusCommand {
    pub serial_number: SerialNumber,
    pub tag: Tag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteLockerCommand {
    pub serial_number: SerialNumber,
}

/// A fully validated instruction, ready for whatever executes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Command {
    AddLocker(AddLockerCommand),
    AddBatch(AddBatchCommand),
    AssignLocker(AssignLockerCommand),
    ChangeStatus(ChangeStatusCommand),
    DeleteLocker(DeleteLockerCommand),
}

impl Command {
    pub fn word(&self) -> CommandWord {
        match self {
            Command::AddLocker(_) => CommandWord::AddLocker,
            Command::AddBatch(_) => CommandWord::AddBatch,
            Command::AssignLocker(_) => CommandWord::Assign,
            Command::ChangeStatus(_) => CommandWord::Status,
            Command::DeleteLocker(_) => CommandWord::Delete,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddLocker(cmd) => write!(f, "Add {}", cmd.locker),
            Command::AddBatch(cmd) => {
                write!(f, "Add batch of {} locker(s):", cmd.lockers.len())?;
                for locker in &cmd.lockers {
                    write!(f, "\n  {locker}")?;
                }
                Ok(())
            }
            Command::AssignLocker(cmd) => {
                let prefs = cmd
                    .preferences
                    .iter()
                    .map(Zone::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "Assign a locker to {} from {} (preferred zones: {})",
                    cmd.student, cmd.period, prefs
                )
            }
            Command::ChangeStatus(cmd) => {
                write!(f, "Set locker #{} to [{}]", cmd.serial_number, cmd.tag)
            }
            Command::DeleteLocker(cmd) => write!(f, "Delete locker #{}", cmd.serial_number),
        }
    }
}
