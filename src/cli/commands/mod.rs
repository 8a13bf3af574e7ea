pub mod config;
pub mod edit;
pub mod time;
