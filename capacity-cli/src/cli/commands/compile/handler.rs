//! Compile command handler

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use colored::*;

use capacity_cli::compile::{
    CompileReport, ExcelFile, RenderOptions, compile_report, render_with_options,
};
use capacity_cli::config::Config;
use capacity_cli::delivery::{output_file_name, write_output};

use super::CompileCommands;

/// Handle the compile command
pub fn handle_compile_command(args: CompileCommands, config: &Config) -> Result<()> {
    // Handle --no-color flag
    if args.no_color {
        colored::control::set_override(false);
    }

    if args.files.is_empty() {
        anyhow::bail!("No files provided");
    }

    for path in &args.files {
        if !path.exists() {
            anyhow::bail!("Input file does not exist: {}", path.display());
        }
    }

    let sources: Vec<ExcelFile> = args.files.iter().map(ExcelFile::new).collect();

    let start = Instant::now();
    let report = compile_report(&sources);
    log::debug!(
        "Compile time: {:.2}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    print_failures(&report);

    if report.dataset.is_empty() {
        log::warn!(
            "No records compiled from {} files, output will only contain the header row",
            report.files_processed
        );
    }

    // Dry run prints the records instead of writing a workbook
    if args.dry {
        for record in report.dataset.iter() {
            println!(
                "{}",
                serde_json::to_string(record).context("Failed to serialize record")?
            );
        }
        return Ok(());
    }

    let options = RenderOptions {
        sheet_name: config.sheet_name.clone(),
    };
    let bytes = render_with_options(&report.dataset, &options)
        .context("Failed to render compiled workbook")?;

    let path = output_path(&args, config);
    let written = write_output(&path, &bytes)?;

    println!(
        "{}",
        format!(
            "Successfully compiled {} rows from {} files",
            report.dataset.len(),
            report.files_processed
        )
        .green()
    );
    println!("Output: {}", written.display().to_string().cyan());

    Ok(())
}

fn print_failures(report: &CompileReport) {
    for failure in &report.failures {
        eprintln!("{} {}", "Skipped".yellow().bold(), failure);
    }
}

/// Explicit --output wins, otherwise a generated name in the output directory
fn output_path(args: &CompileCommands, config: &Config) -> PathBuf {
    if let Some(ref output) = args.output {
        return output.clone();
    }

    let dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.clone());
    dir.join(output_file_name(&config.file_prefix, Utc::now()))
}
