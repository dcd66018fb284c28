//! Glue between the selection UI, the document source and the display sink.

use crate::message::{Request, Response};
use crate::record::FileRecord;
use crate::session::Session;
use crate::sink::DocumentSink;
use crate::source::DocumentSource;
use anyhow::Result;
use log::{debug, info};

pub struct Host<S, D> {
    source: S,
    sink: D,
    session: Session,
}

impl<S, D> Host<S, D>
where
    S: DocumentSource,
    D: DocumentSink,
{
    pub fn new(source: S, sink: D) -> Self {
        Self {
            source,
            sink,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Handles one UI message. Only `RequestFiles` produces a reply.
    pub async fn handle(&mut self, request: Request) -> Result<Option<Response>> {
        match request {
            Request::RequestFiles => {
                let files = self.refresh().await;
                Ok(Some(Response::FilesUpdated { files }))
            }
            Request::GenerateFile { text } => {
                debug!("Presenting combined document ({} bytes)", text.len());
                self.sink.present_as_new_document(&text).await?;
                Ok(None)
            }
        }
    }

    /// Re-enumerates the open documents, resetting the selection.
    pub async fn refresh(&mut self) -> Vec<FileRecord> {
        let ticket = self.session.begin_enumeration();
        let records = self.source.list_open_text_documents().await;
        info!("Found {} open text documents", records.len());
        self.session.complete_enumeration(ticket, records.clone());
        records
    }

    /// Combines the session's current selection and presents it.
    pub async fn generate_from_selection(&mut self) -> Result<()> {
        let text = self.session.combine_selected()?;
        self.handle(Request::GenerateFile { text }).await?;
        Ok(())
    }
}

#[cfg(feature = "stdio")]
mod stdio {
    use super::*;
    use anyhow::Context;
    use log::{error, warn};
    use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

    impl<S, D> Host<S, D>
    where
        S: DocumentSource,
        D: DocumentSink,
    {
        /// Serves newline-delimited JSON messages until `reader` reaches EOF.
        ///
        /// Every `generateFile` goes to the same sink. With a [`FileSink`]
        /// each document replaces the previous one at that path.
        ///
        /// [`FileSink`]: crate::sink::FileSink
        pub async fn serve_stdio<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
        where
            R: AsyncBufRead + Unpin,
            W: AsyncWrite + Unpin,
        {
            let mut lines = reader.lines();
            while let Some(line) = lines.next_line().await.context("Failed to read request")? {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let request: Request = match serde_json::from_str(line) {
                    Ok(request) => request,
                    Err(err) => {
                        warn!("Ignoring malformed message: {err}");
                        continue;
                    }
                };

                match self.handle(request).await {
                    Ok(Some(response)) => {
                        let mut encoded =
                            serde_json::to_string(&response).context("Failed to encode reply")?;
                        encoded.push('\n');
                        writer
                            .write_all(encoded.as_bytes())
                            .await
                            .context("Failed to write reply")?;
                        writer.flush().await.context("Failed to flush reply")?;
                    }
                    Ok(None) => {}
                    Err(err) => error!("{err:#}"),
                }
            }

            debug!("Message stream closed");
            Ok(())
        }
    }
}
