//! TOML run configuration. All paths the run touches come from here;
//! nothing reads process-wide path state.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::exit_codes::EXIT_USAGE;
use crate::CliError;

#[derive(Debug, Deserialize)]
pub struct RunConfig {
    /// Directory scanned for schedule-source candidates.
    pub import_dir: PathBuf,
    /// Directory the finished report is written into.
    pub output_dir: PathBuf,
    /// The long-lived request ledger workbook.
    pub ledger_file: PathBuf,
    #[serde(default = "default_ledger_sheet")]
    pub ledger_sheet: String,
    /// Output template; row 1 holds the report headers.
    pub template_file: PathBuf,
    /// Worksheet of the schedule source; first sheet when omitted.
    #[serde(default)]
    pub schedule_sheet: Option<String>,
    #[serde(default = "default_report_label")]
    pub report_label: String,
    #[serde(default = "default_report_ext")]
    pub report_ext: String,
}

fn default_ledger_sheet() -> String {
    "Sheet3".into()
}

fn default_report_label() -> String {
    "production-schedule".into()
}

fn default_report_ext() -> String {
    "xlsx".into()
}

impl RunConfig {
    /// Read and parse a config file. Relative paths resolve against
    /// the config file's directory.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError {
            code: EXIT_USAGE,
            message: format!("cannot read config {}: {e}", path.display()),
            hint: None,
        })?;

        let mut config: RunConfig = toml::from_str(&content).map_err(|e| CliError {
            code: EXIT_USAGE,
            message: format!("config parse error: {e}"),
            hint: None,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.import_dir = resolve(base, &config.import_dir);
        config.output_dir = resolve(base, &config.output_dir);
        config.ledger_file = resolve(base, &config.ledger_file);
        config.template_file = resolve(base, &config.template_file);
        Ok(config)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
