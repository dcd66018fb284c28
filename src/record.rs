use serde::{Deserialize, Serialize};

/// Snapshot of one open document, captured at enumeration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Base file name, e.g. `main.rs`.
    pub name: String,
    /// Display path: workspace-relative, or absolute when outside the workspace.
    pub path: String,
    /// Full text content.
    pub content: String,
}

impl FileRecord {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content: content.into(),
        }
    }
}
