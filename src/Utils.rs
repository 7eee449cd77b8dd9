//! different utility modules used throughout the project
/// terminal logger set-up
pub mod logger;
