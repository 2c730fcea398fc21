//! CLI subcommands

pub mod compile;

pub use compile::CompileCommands;
