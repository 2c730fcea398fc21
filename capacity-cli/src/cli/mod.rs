//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

pub use commands::CompileCommands;

#[derive(Parser, Debug)]
#[command(name = "capacity-cli", version, about = "Compile weekly capacity reliability reports")]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile report workbooks into one sorted workbook
    Compile(CompileCommands),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compile_args() {
        let cli = Cli::parse_from([
            "capacity-cli",
            "-vv",
            "compile",
            "week1.xlsx",
            "week2.xlsx",
            "-o",
            "out.xlsx",
        ]);

        assert_eq!(cli.verbose, 2);
        let Commands::Compile(args) = cli.command;
        assert_eq!(
            args.files,
            vec![PathBuf::from("week1.xlsx"), PathBuf::from("week2.xlsx")]
        );
        assert_eq!(args.output, Some(PathBuf::from("out.xlsx")));
        assert!(!args.dry);
    }
}
