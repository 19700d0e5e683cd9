pub mod command_parser;
pub mod commands;
pub mod parsers;
