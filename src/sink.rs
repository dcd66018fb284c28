use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use std::path::PathBuf;
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};

/// Materialises a combined document for the user.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    async fn present_as_new_document(&self, text: &str) -> Result<()>;
}

/// Writes the document to a file, replacing any previous contents.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DocumentSink for FileSink {
    async fn present_as_new_document(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create output dir: {}", parent.display()))?;
        }

        let file = File::create(&self.path)
            .await
            .with_context(|| format!("Failed to create output file: {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(text.as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        writer.flush().await.context("Failed to flush output")?;

        info!("Wrote: {} ({} bytes)", self.path.display(), text.len());
        Ok(())
    }
}

/// Writes the document to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

#[async_trait]
impl DocumentSink for StdoutSink {
    async fn present_as_new_document(&self, text: &str) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(text.as_bytes())
            .await
            .context("Failed to write to stdout")?;
        stdout.flush().await.context("Failed to flush stdout")?;
        debug!("Wrote {} bytes to stdout", text.len());
        Ok(())
    }
}
