//! # tabmerge Library
//!
//! Merges a selection of open text documents into one document. Every section
//! starts with a header naming the document's path:
//!
//! ```text
//! // ===== File: src/main.rs =====
//!
//! fn main() {}
//!
//! // ===== File: README.md =====
//!
//! # Title
//! ```
//!
//! ## Usage
//!
//! ### Combining records directly:
//!
//! ```rust
//! use tabmerge::{FileRecord, SelectionState, combine};
//!
//! let records = vec![
//!     FileRecord::new("a.txt", "a.txt", "hello"),
//!     FileRecord::new("b.txt", "b.txt", "skipped"),
//!     FileRecord::new("c.txt", "c.txt", "world"),
//! ];
//!
//! let mut selection = SelectionState::initialize(records.len());
//! selection.toggle(1);
//!
//! let picked = selection.selected_indices().into_iter().map(|i| &records[i]);
//! assert_eq!(
//!     combine(picked),
//!     "// ===== File: a.txt =====\n\nhello\n\n// ===== File: c.txt =====\n\nworld"
//! );
//! ```
//!
//! ### Combining files on disk:
//!
//! ```rust,no_run
//! use tabmerge::{Config, OutputTarget, run_tabmerge};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let root = std::env::current_dir()?;
//!     let config = Config::new(
//!         root.clone(),
//!         vec![PathBuf::from("src/main.rs"), PathBuf::from("README.md")],
//!         OutputTarget::File(root.join("combined.txt")),
//!     );
//!
//!     run_tabmerge(config).await
//! }
//! ```

pub mod cli;
pub mod combine;
pub mod escape;
pub mod host;
pub mod message;
pub mod record;
pub mod selection;
pub mod session;
pub mod sink;
pub mod source;
pub mod view;

pub use cli::{Config, OutputTarget};
pub use combine::combine;
pub use escape::escape_html;
pub use host::Host;
pub use message::{Request, Response};
pub use record::FileRecord;
pub use selection::SelectionState;
pub use session::{Session, SessionState};
pub use sink::{DocumentSink, FileSink, StdoutSink};
pub use source::{DocumentSource, OpenFileSource};

use anyhow::Result;
use log::{info, warn};
use view::NO_FILES_MESSAGE;

/// Enumerates the configured files, applies the selection flags and presents
/// the combined document (or the listing, with `--list`).
pub async fn run_tabmerge(config: Config) -> Result<()> {
    let source = OpenFileSource::new(config.project_root.clone(), config.paths.clone());

    match &config.output {
        OutputTarget::File(path) => {
            let sink = FileSink::new(path.clone());
            run_with(&config, Host::new(source, sink)).await
        }
        OutputTarget::Stdout => run_with(&config, Host::new(source, StdoutSink)).await,
    }
}

async fn run_with<S, D>(config: &Config, mut host: Host<S, D>) -> Result<()>
where
    S: DocumentSource,
    D: DocumentSink,
{
    #[cfg(feature = "stdio")]
    {
        if config.stdio {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            return host.serve_stdio(stdin, tokio::io::stdout()).await;
        }
    }

    let records = host.refresh().await;
    if records.is_empty() {
        eprintln!("{NO_FILES_MESSAGE}");
        return Ok(());
    }

    if let Some(selection) = host.session_mut().selection_mut() {
        if config.select_none {
            selection.set_all(false);
        }
        for &index in &config.toggles {
            if !selection.toggle(index) {
                warn!(
                    "Ignoring --toggle {index}: only {} files are open",
                    selection.len()
                );
            }
        }
    }

    if let Some(format) = config.list {
        let session = host.session();
        if let Some(selection) = session.selection() {
            print!("{}", view::render(format, session.records(), selection));
        }
        return Ok(());
    }

    let selected = host.session().selected_records().len();
    if selected == 0 {
        warn!("No files selected; nothing to combine");
        return Ok(());
    }

    info!("Combining {selected} of {} files", records.len());
    host.generate_from_selection().await
}
