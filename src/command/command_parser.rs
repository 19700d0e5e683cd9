use std::sync::Arc;

use crate::check::field_parser::FieldParser;
use crate::command::commands::{Command, CommandWord};
use crate::command::parsers::LockerCommandParser;
use crate::command::parsers::add_batch::AddBatchParser;
use crate::command::parsers::add_locker::AddLockerParser;
use crate::command::parsers::assign_locker::AssignLockerParser;
use crate::command::parsers::change_status::ChangeStatusParser;
use crate::command::parsers::delete_locker::DeleteLockerParser;
use crate::config::Config;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::logging::{LogTarget, Logger};

/// Routes a full input line to the parser registered for its first word.
pub struct CommandParser {
    registry: Vec<Box<dyn LockerCommandParser>>,
    logger: Logger,
}

impl CommandParser {
    pub fn new(config: Arc<Config>, logger: Logger) -> Self {
        let fields = FieldParser::new(config);
        Self {
            registry: vec![
                Box::new(AddLockerParser::new(fields.clone())),
                Box::new(AddBatchParser::new(fields.clone())),
                Box::new(AssignLockerParser::new(fields.clone())),
                Box::new(ChangeStatusParser::new(fields.clone())),
                Box::new(DeleteLockerParser::new(fields)),
            ],
            logger: logger.for_component("parser"),
        }
    }

    pub fn parse(&self, line: &str) -> Result<Command> {
        let (word, rest) = split_command_word(line);
        let result = self.resolve(word).and_then(|parser| parser.parse(rest));

        match &result {
            Ok(command) => self
                .logger
                .info(format!("Parsed '{}': {}", line.trim(), command), LogTarget::FileOnly),
            Err(err) => self
                .logger
                .warn(format!("Rejected '{}': {}", line.trim(), err), LogTarget::FileOnly),
        }
        result
    }

    pub fn usage_for(&self, word: &str) -> Result<&'static str> {
        self.resolve(word).map(|parser| parser.usage())
    }

    /// Text for `help [word]`: the command list when `topic` is empty, that
    /// command's usage otherwise.
    pub fn help(&self, topic: &str) -> Result<String> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Ok(format!(
                "Valid commands: {}\nType 'help <command>' to see its usage.",
                valid_csv::<CommandWord>()
            ));
        }
        self.usage_for(topic).map(str::to_string)
    }

    fn resolve(&self, word: &str) -> Result<&dyn LockerCommandParser> {
        let command_word = CommandWord::try_from(word)?;
        self.registry
            .iter()
            .find(|parser| parser.command_word() == command_word)
            .map(|parser| &**parser)
            .ok_or_else(|| Error::invalid(format!("No parser registered for '{command_word}'.")))
    }
}

/// Returns the rest of the line when its first word is `help`, in any case.
pub fn help_topic(line: &str) -> Option<&str> {
    let (word, rest) = split_command_word(line);
    word.eq_ignore_ascii_case("help").then(|| rest.trim())
}

fn split_command_word(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(idx) => line.split_at(idx),
        None => (line, ""),
    }
}
