use avinfo_probe::ProbeOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub probe: ProbeOptions,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// How reports are written to stdout
    #[serde(default)]
    pub format: OutputFormat,

    /// Which shape JSON output takes
    #[serde(default)]
    pub view: ReportView,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Compact JSON, one document per line
    Json,
    /// Indented JSON
    Pretty,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Pretty)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportView {
    /// The report exactly as probed: tags as ordered key/value records
    #[default]
    Report,
    /// ffprobe-like shape: tags as objects, container fields under `format`
    Ffprobe,
}
