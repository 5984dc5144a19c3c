use serde::{Deserialize, Serialize};

/// Opaque identity of a page: names *what* to show, never how it renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty identity is never a valid navigation target.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the displayed content arrived at its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    /// Forward navigation to new content.
    New,
    /// Returned to a back-history entry.
    Back,
    /// Current content re-presented in place.
    Refresh,
}

/// One unit of back-history: a page identity plus the input it was shown
/// with. Immutable once pushed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationEntry {
    page: PageId,
    parameter: Option<serde_json::Value>,
}

impl NavigationEntry {
    pub fn new(page: PageId, parameter: Option<serde_json::Value>) -> Self {
        Self { page, parameter }
    }

    pub fn page(&self) -> &PageId {
        &self.page
    }

    pub fn parameter(&self) -> Option<&serde_json::Value> {
        self.parameter.as_ref()
    }
}
