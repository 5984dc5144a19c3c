#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not determine a platform config directory")]
    NoConfigDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
