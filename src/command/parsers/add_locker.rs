use crate::arg::token::Token;
use crate::arg::tokenizer::tokenize;
use crate::check::field_parser::FieldParser;
use crate::command::commands::{AddLockerCommand, Command, CommandWord};
use crate::command::parsers::LockerCommandParser;
use crate::core::models::Locker;
use crate::core::types::Tag;
use crate::errors::Result;

const TOKENS: [Token; 3] = [Token::Serial, Token::Address, Token::Zone];

pub struct AddLockerParser {
    fields: FieldParser,
}

impl AddLockerParser {
    pub fn new(fields: FieldParser) -> Self {
        Self { fields }
    }
}

impl LockerCommandParser for AddLockerParser {
    fn command_word(&self) -> CommandWord {
        CommandWord::AddLocker
    }

    fn usage(&self) -> &'static str {
        r#"addlocker /s <serial> /a <address> /z <zone>
Required:
  serial  - letters and digits, 1 to 12 characters
  address - where the locker is, not blank
  zone    - one of the configured zones
New lockers start as not-in-use."#
    }

    fn parse(&self, user_input: &str) -> Result<Command> {
        let map = tokenize(user_input, &TOKENS);
        let args = map.check_structure(&TOKENS, self.usage())?;

        let serial_number = self.fields.parse_serial_number(args.get(Token::Serial)?)?;
        let address = self.fields.parse_address(args.get(Token::Address)?)?;
        let zone = self.fields.parse_zone(args.get(Token::Zone)?)?;

        let locker = Locker::new(serial_number, address, zone, Tag::NotInUse);
        Ok(Command::AddLocker(AddLockerCommand { locker }))
    }
}
