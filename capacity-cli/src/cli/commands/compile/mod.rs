//! `compile` command arguments

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_compile_command;

#[derive(Args, Debug)]
pub struct CompileCommands {
    /// Report workbooks to compile, in processing order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output file (defaults to a generated name in the output directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory for the generated output file (overrides config)
    #[arg(long, value_name = "DIR", conflicts_with = "output")]
    pub output_dir: Option<PathBuf>,

    /// Compile only; print records as JSON lines instead of writing a workbook
    #[arg(long)]
    pub dry: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
