use clap::Parser;
use std::path::PathBuf;

pub mod ui;

use proofmap::config::MappingConfig;

#[derive(Parser)]
#[command(
    name = "proofmap",
    about = "Correlates whitepaper theorems with formal TLA+ specification statements",
    version,
    author,
    long_about = None
)]
pub struct ProofmapCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Path to the whitepaper text file
    #[arg(short, long)]
    pub whitepaper: PathBuf,

    /// Directory containing TLA+ specification modules
    #[arg(short, long)]
    pub specs: PathBuf,

    /// Directory containing TLA+ proof modules
    #[arg(short, long)]
    pub proofs: PathBuf,

    /// Output directory for the report files
    #[arg(short, long, default_value = "./theorem_mapping_reports")]
    pub output: PathBuf,

    /// Project root, used for run artifacts such as the log file
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Extension of formal module files (without the dot)
    #[arg(long, default_value = "tla")]
    pub module_extension: String,
}

impl ProofmapCli {
    pub fn to_config(&self) -> MappingConfig {
        MappingConfig {
            whitepaper_path: self.whitepaper.clone(),
            specs_dir: self.specs.clone(),
            proofs_dir: self.proofs.clone(),
            output_dir: self.output.clone(),
            project_root: self.project_root.clone(),
            module_extension: self.module_extension.clone(),
        }
    }
}
