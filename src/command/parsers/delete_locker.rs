use crate::arg::token::Token;
use crate::arg::tokenizer::tokenize;
use crate::check::field_parser::FieldParser;
use crate::command::commands::{Command, CommandWord, DeleteLockerCommand};
use crate::command::parsers::LockerCommandParser;
use crate::errors::Result;

const TOKENS: [Token; 1] = [Token::Serial];

pub struct DeleteLockerParser {
    fields: FieldParser,
}

impl DeleteLockerParser {
    pub fn new(fields: FieldParser) -> Self {
        Self { fields }
    }
}

impl LockerCommandParser for DeleteLockerParser {
    fn command_word(&self) -> CommandWord {
        CommandWord::Delete
    }

    fn usage(&self) -> &'static str {
        r#"delete /s <serial>
Required:
  serial - serial number of the locker to remove"#
    }

    fn parse(&self, user_input: &str) -> Result<Command> {
        let map = tokenize(user_input, &TOKENS);
        let args = map.check_structure(&TOKENS, self.usage())?;

        let serial_number = self.fields.parse_serial_number(args.get(Token::Serial)?)?;
        Ok(Command::DeleteLocker(DeleteLockerCommand { serial_number }))
    }
}
