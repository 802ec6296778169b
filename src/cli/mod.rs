pub mod commands;
pub mod display;
pub mod ecs;
pub mod signal;

pub use commands::{usage_exit_code, CliArgs};
