pub mod config;
pub mod error;
pub mod number_parse;
