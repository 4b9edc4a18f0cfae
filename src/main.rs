use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use proofmap::config::MappingConfig;
use proofmap::logging::LogContext;
use proofmap::pipeline::MappingPipeline;

mod cli;

use cli::{ui, ProofmapCli};

fn main() {
    // Parse the command line arguments
    let cli = ProofmapCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    let config = cli.to_config();
    let log = LogContext::init(&config.log_file_path());

    ui::print_header("Proofmap - Theorem Mapping");
    ui::print_info(&format!("Whitepaper: {}", config.whitepaper_path.display()));
    ui::print_info(&format!("Specifications: {}", config.specs_dir.display()));
    ui::print_info(&format!("Proofs: {}", config.proofs_dir.display()));

    if let Err(e) = run(config, &log) {
        // Fatal errors reach this single top-level handler: logged to
        // the run log and stderr, non-zero exit.
        log.error(&format!("{:#}", e));
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(config: MappingConfig, log: &LogContext) -> Result<()> {
    let spinner = ui::spinner_with_message("Correlating whitepaper statements with TLA+ modules...");

    let outcome = match MappingPipeline::new(config).run(log) {
        Ok(outcome) => {
            spinner.finish_with_message("Mapping complete");
            outcome
        }
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e).context("theorem mapping pipeline failed");
        }
    };

    let report = &outcome.report;
    ui::print_result(
        "Whitepaper statements",
        &report.total_whitepaper_theorems.to_string(),
    );
    ui::print_result("Formal statements", &report.total_tla_theorems.to_string());
    ui::print_result("Mapping candidates", &report.mapped_theorems().to_string());
    ui::print_result("Coverage", &format!("{:.1}%", report.coverage_percent()));

    println!();
    for path in &outcome.written_files {
        ui::print_info(&format!("Report written to {}", path.display()));
    }

    println!();
    ui::print_text(&format!(
        "Matched {} mapping candidates between {} whitepaper statements and {} formal \
         declarations ({:.1}% coverage). Full details are in the report files listed above.",
        report.mapped_theorems(),
        report.total_whitepaper_theorems,
        report.total_tla_theorems,
        report.coverage_percent(),
    ));

    ui::print_success("Theorem mapping completed");
    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
