use std::path::PathBuf;

/// Configuration for one mapping run
#[derive(Debug, Clone)]
pub struct MappingConfig {
    /// Whitepaper text file to scan for numbered statements
    pub whitepaper_path: PathBuf,
    /// Directory containing TLA+ specification modules
    pub specs_dir: PathBuf,
    /// Directory containing TLA+ proof modules
    pub proofs_dir: PathBuf,
    /// Directory the report files are written into
    pub output_dir: PathBuf,
    /// Root directory for run artifacts such as the log file
    pub project_root: PathBuf,
    /// Extension of formal module files (without the dot)
    pub module_extension: String,
}

impl MappingConfig {
    pub fn log_file_path(&self) -> PathBuf {
        self.project_root.join("theorem_mapping.log")
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            whitepaper_path: PathBuf::from("whitepaper.md"),
            specs_dir: PathBuf::from("specs"),
            proofs_dir: PathBuf::from("proofs"),
            output_dir: PathBuf::from("./theorem_mapping_reports"),
            project_root: PathBuf::from("."),
            module_extension: "tla".to_string(),
        }
    }
}
