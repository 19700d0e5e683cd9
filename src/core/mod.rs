pub mod cli;
pub mod models;
pub mod types;
