use chrono::{Local, NaiveDate};

use crate::arg::token::Token;
use crate::arg::tokenizer::tokenize;
use crate::check::field_parser::FieldParser;
use crate::command::commands::{AssignLockerCommand, Command, CommandWord};
use crate::command::parsers::LockerCommandParser;
use crate::core::models::Student;
use crate::errors::Result;

const TOKENS: [Token; 7] = [
    Token::Name,
    Token::StudentId,
    Token::Email,
    Token::Major,
    Token::StartDate,
    Token::EndDate,
    Token::Preferences,
];

pub struct AssignLockerParser {
    fields: FieldParser,
}

impl AssignLockerParser {
    pub fn new(fields: FieldParser) -> Self {
        Self { fields }
    }

    /// Same as [`LockerCommandParser::parse`] with an explicit "today" for
    /// the rental period check.
    pub fn parse_on(&self, user_input: &str, today: NaiveDate) -> Result<Command> {
        let map = tokenize(user_input, &TOKENS);
        let args = map.check_structure(&TOKENS, self.usage())?;

        let name = self.fields.parse_name(args.get(Token::Name)?)?;
        let student_id = self.fields.parse_student_id(args.get(Token::StudentId)?)?;
        let email = self.fields.parse_email(args.get(Token::Email)?)?;
        let major = self.fields.parse_major(args.get(Token::Major)?)?;
        let start = self.fields.parse_date(args.get(Token::StartDate)?)?;
        let end = self.fields.parse_date(args.get(Token::EndDate)?)?;
        let period = self.fields.rental_period(start, end, today)?;
        let preferences = self.fields.parse_preferences(args.get(Token::Preferences)?)?;

        Ok(Command::AssignLocker(AssignLockerCommand {
            student: Student::new(name, student_id, email, major),
            period,
            preferences,
        }))
    }
}

impl LockerCommandParser for AssignLockerParser {
    fn command_word(&self) -> CommandWord {
        CommandWord::Assign
    }

    fn usage(&self) -> &'static str {
        r#"assign /n <name> /i <student id> /e <email> /m <major> /from <dd-mm-yyyy> /to <dd-mm-yyyy> /p <zone> [<zone>...]
Required:
  name       - letters, spaces, apostrophes, hyphens and periods
  student id - matriculation number, e.g. A0123456X
  email      - e.g. student@u.nus.edu
  major      - one of the configured courses
  from, to   - rental period; end date not before today, length within the configured bounds
  zones      - preferred zones, unknown ones are ignored but at least one must be valid"#
    }

    fn parse(&self, user_input: &str) -> Result<Command> {
        self.parse_on(user_input, Local::now().date_naive())
    }
}
