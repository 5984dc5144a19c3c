mod error;
mod file;
mod store;

pub use error::SettingsError;
pub use file::FileSettings;
pub use store::{MemorySettings, SettingsStore};
