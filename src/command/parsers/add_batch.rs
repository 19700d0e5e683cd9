use crate::arg::token::Token;
use crate::arg::tokenizer::tokenize;
use crate::check::field_parser::FieldParser;
use crate::command::commands::{AddBatchCommand, Command, CommandWord};
use crate::command::parsers::LockerCommandParser;
use crate::core::models::Locker;
use crate::core::types::{SerialNumber, Tag};
use crate::errors::{Error, Result};
use crate::extensions::string::NumericSuffix;

const TOKENS: [Token; 4] = [Token::Serial, Token::Address, Token::Zone, Token::Size];

pub const SERIAL_SUFFIX_ERROR: &str =
    "The first serial number of a batch must end in digits so the following serial numbers can be generated.";

pub struct AddBatchParser {
    fields: FieldParser,
}

impl AddBatchParser {
    pub fn new(fields: FieldParser) -> Self {
        Self { fields }
    }
}

impl LockerCommandParser for AddBatchParser {
    fn command_word(&self) -> CommandWord {
        CommandWord::AddBatch
    }

    fn usage(&self) -> &'static str {
        r#"addbatch /s <first serial> /a <address> /z <zone> /q <size>
Required:
  first serial - serial of the first locker, must end in digits (e.g. A001)
  address      - where the lockers are, not blank
  zone         - one of the configured zones
  size         - number of lockers, 1 to 30
Serial numbers count up from the first one, keeping zero padding."#
    }

    fn parse(&self, user_input: &str) -> Result<Command> {
        let map = tokenize(user_input, &TOKENS);
        let args = map.check_structure(&TOKENS, self.usage())?;

        let first = self.fields.parse_serial_number(args.get(Token::Serial)?)?;
        let address = self.fields.parse_address(args.get(Token::Address)?)?;
        let zone = self.fields.parse_zone(args.get(Token::Zone)?)?;
        let size = self.fields.parse_size(args.get(Token::Size)?)?;

        if first.as_str().split_numeric_suffix().is_none() {
            return Err(Error::invalid(SERIAL_SUFFIX_ERROR));
        }

        let mut lockers = Vec::with_capacity(size.get() as usize);
        for step in 0..size.get() {
            let raw = first
                .as_str()
                .step_numeric_suffix(u64::from(step))
                .ok_or_else(|| Error::invalid(SERIAL_SUFFIX_ERROR))?;
            let serial_number = SerialNumber::try_new(&raw)?;
            lockers.push(Locker::new(
                serial_number,
                address.clone(),
                zone.clone(),
                Tag::NotInUse,
            ));
        }
        Ok(Command::AddBatch(AddBatchCommand { lockers }))
    }
}
