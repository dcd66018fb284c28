//! Enumerates the open text documents.
//!
//! The command-line host treats every path it is given as one open tab, in
//! argument order. A document that cannot be read as text is dropped from the
//! listing; there is no aggregate error.

use crate::record::FileRecord;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use content_inspector::{ContentType, inspect};
use log::{debug, warn};
use memmap2::MmapOptions;
use std::fs::File as StdFile;
use std::path::{Component, Path, PathBuf};
use std::str;

/// Number of leading bytes inspected to tell text from binary.
const SNIFF_LEN: usize = 8192;

/// Supplies the current list of open text documents.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Returns one record per readable open document, in tab order.
    async fn list_open_text_documents(&self) -> Vec<FileRecord>;
}

/// Files on disk standing in for editor tabs.
#[derive(Debug, Clone)]
pub struct OpenFileSource {
    workspace_root: PathBuf,
    paths: Vec<PathBuf>,
}

impl OpenFileSource {
    /// Relative `paths` are resolved against `workspace_root`.
    pub fn new(workspace_root: PathBuf, paths: Vec<PathBuf>) -> Self {
        let paths = paths
            .into_iter()
            .map(|p| {
                if p.is_absolute() {
                    p
                } else {
                    workspace_root.join(p)
                }
            })
            .collect();
        Self {
            workspace_root,
            paths,
        }
    }
}

#[async_trait]
impl DocumentSource for OpenFileSource {
    async fn list_open_text_documents(&self) -> Vec<FileRecord> {
        let handles: Vec<_> = self
            .paths
            .iter()
            .cloned()
            .map(|path| {
                let root = self.workspace_root.clone();
                tokio::task::spawn_blocking(move || {
                    let result = read_record(&path, &root);
                    (path, result)
                })
            })
            .collect();

        // Awaited in spawn order so the listing follows tab order.
        let mut records = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok((_, Ok(record))) => records.push(record),
                Ok((path, Err(err))) => {
                    warn!("Skipping {}: {err:#}", path.display());
                }
                Err(err) => {
                    warn!("Read task failed: {err}");
                }
            }
        }

        debug!(
            "Enumerated {} of {} documents",
            records.len(),
            self.paths.len()
        );
        records
    }
}

/// Reads one file into a record, rejecting binary and non-UTF-8 content.
pub fn read_record(path: &Path, workspace_root: &Path) -> Result<FileRecord> {
    let file =
        StdFile::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat file: {}", path.display()))?
        .len();

    let content = if len == 0 {
        debug!("{} is empty", path.display());
        String::new()
    } else {
        let mmap = unsafe {
            MmapOptions::new()
                .map(&file)
                .with_context(|| format!("Failed to mmap file: {}", path.display()))?
        };

        let sample_size = std::cmp::min(SNIFF_LEN, mmap.len());
        if inspect(&mmap[..sample_size]) == ContentType::BINARY {
            bail!("{} is not a text document", path.display());
        }

        str::from_utf8(&mmap)
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?
            .to_owned()
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(FileRecord {
        name,
        path: display_path(path, workspace_root),
        content,
    })
}

/// Workspace-relative path joined with `/`, or the absolute path when the
/// file lies outside the workspace. `.` and `..` are resolved lexically first.
pub fn display_path(path: &Path, workspace_root: &Path) -> String {
    let path = normalize_lexically(path);
    let root = normalize_lexically(workspace_root);

    match path.strip_prefix(&root) {
        Ok(rel) if rel.as_os_str().is_empty() => path.display().to_string(),
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

/// Drops `.` and folds `name/..` pairs without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root.
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }
    out
}
