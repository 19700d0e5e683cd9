pub mod field_parser;
pub mod rules;
