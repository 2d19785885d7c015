// Re-export all probe functionality from avinfo-probe
pub use avinfo_probe::*;

use crate::config::Config;
use std::path::Path;

/// Probe a media file with the configured probe options
pub fn probe_file(path: &Path, config: &Config) -> FileInfoResponse {
    get_file_info_with(path, &config.probe)
}
