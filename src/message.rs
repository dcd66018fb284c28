use crate::record::FileRecord;
use serde::{Deserialize, Serialize};

/// Messages from the selection UI to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Request {
    /// Enumerate the open documents and reply with [`Response::FilesUpdated`].
    RequestFiles,
    /// Show `text` as a new, unsaved document.
    GenerateFile { text: String },
}

/// Messages from the host to the selection UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Response {
    FilesUpdated { files: Vec<FileRecord> },
}
