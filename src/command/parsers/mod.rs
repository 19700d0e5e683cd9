pub mod add_batch;
pub mod add_locker;
pub mod assign_locker;
pub mod change_status;
pub mod delete_locker;

use crate::command::commands::{Command, CommandWord};
use crate::errors::Result;

/// One parser per command word. `parse` receives the text after the
/// command word.
pub trait LockerCommandParser {
    fn command_word(&self) -> CommandWord;
    fn usage(&self) -> &'static str;
    fn parse(&self, user_input: &str) -> Result<Command>;
}
