pub mod config;
pub mod deploy;
pub mod exec;
pub mod tui;
