#[macro_use]
pub mod macros;

pub mod api;
pub mod config;
pub mod report;
pub mod resort_parser;
pub mod schema;
