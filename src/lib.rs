pub mod arg;
pub mod check;
pub mod command;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
