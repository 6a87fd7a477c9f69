//! mathutil library — application logic for the console utility.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
