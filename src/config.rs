use std::path::PathBuf;

/// Runtime settings supplied by the embedding application. The tracker has no
/// outer configuration surface of its own; the host constructs this in code.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the file-backed store keeps its documents in.
    pub data_dir: PathBuf,
    /// Whether the fixed demo credential pair is accepted at login.
    pub demo_login_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("fittracker-data"),
            demo_login_enabled: true,
        }
    }
}

impl AppConfig {
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }
}
