use crate::arg::token::Token;
use crate::arg::tokenizer::tokenize;
use crate::check::field_parser::FieldParser;
use crate::command::commands::{ChangeStatusCommand, Command, CommandWord};
use crate::command::parsers::LockerCommandParser;
use crate::errors::Result;

const TOKENS: [Token; 2] = [Token::Serial, Token::Tag];

pub struct ChangeStatusParser {
    fields: FieldParser,
}

impl ChangeStatusParser {
    pub fn new(fields: FieldParser) -> Self {
        Self { fields }
    }
}

impl LockerCommandParser for ChangeStatusParser {
    fn command_word(&self) -> CommandWord {
        CommandWord::Status
    }

    fn usage(&self) -> &'static str {
        r#"status /s <serial> /t <tag>
Required:
  serial - serial number of the locker
  tag    - one of in-use, not-in-use, broken, unauthorized"#
    }

    fn parse(&self, user_input: &str) -> Result<Command> {
        let map = tokenize(user_input, &TOKENS);
        let args = map.check_structure(&TOKENS, self.usage())?;

        let serial_number = self.fields.parse_serial_number(args.get(Token::Serial)?)?;
        let tag = self.fields.parse_tag(args.get(Token::Tag)?)?;
        Ok(Command::ChangeStatus(ChangeStatusCommand { serial_number, tag }))
    }
}
