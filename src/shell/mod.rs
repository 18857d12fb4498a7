//! Process execution for the package-manager backend and capability probes.

pub mod command;

pub use command::{
    display_command, execute, execute_check, CommandOptions, CommandResult,
};
