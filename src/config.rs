use std::path::PathBuf;
use std::time::Duration;

pub const METADATA_URL: &str = "https://epic.gsfc.nasa.gov/api/natural";
pub const ARCHIVE_BASE: &str = "https://epic.gsfc.nasa.gov/archive/natural/";
pub const OUTPUT_PATH: &str = "./earth.png";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the pipeline reads from and writes to.
///
/// The binary only ever uses [`EpicConfig::default`]; the fields are public so
/// tests can point the pipeline at a local server and a scratch directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpicConfig {
    pub metadata_url: String,
    /// Must end in `/` so archive paths join below it.
    pub archive_base: String,
    pub output_path: PathBuf,
    pub timeout: Duration,
}

impl Default for EpicConfig {
    fn default() -> Self {
        Self {
            metadata_url: METADATA_URL.to_string(),
            archive_base: ARCHIVE_BASE.to_string(),
            output_path: PathBuf::from(OUTPUT_PATH),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
