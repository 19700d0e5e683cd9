use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Field markers recognized in a command line. A marker is a whole
/// whitespace-delimited word; the text after it up to the next marker is
/// its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIterDerive)]
pub enum Token {
    #[strum(serialize = "/s")]
    Serial,
    #[strum(serialize = "/a")]
    Address,
    #[strum(serialize = "/z")]
    Zone,
    #[strum(serialize = "/q")]
    Size,
    #[strum(serialize = "/t")]
    Tag,
    #[strum(serialize = "/n")]
    Name,
    #[strum(serialize = "/i")]
    StudentId,
    #[strum(serialize = "/e")]
    Email,
    #[strum(serialize = "/m")]
    Major,
    #[strum(serialize = "/from")]
    StartDate,
    #[strum(serialize = "/to")]
    EndDate,
    #[strum(serialize = "/p")]
    Preferences,
}

impl Token {
    pub fn marker(&self) -> &str {
        self.as_ref()
    }

    /// Exact, case-sensitive marker lookup.
    pub fn from_marker(word: &str) -> Option<Self> {
        Self::from_str(word).ok()
    }
}
