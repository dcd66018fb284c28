//! State owned by one open view: the latest snapshot of open documents and the
//! user's selection over it.
//!
//! A session is `AwaitingEnumeration` until a listing arrives, then `Ready`.
//! Starting a new enumeration drops the previous snapshot and its selection.
//! When several enumerations overlap, only the most recently started one may
//! complete; older results are discarded.

use crate::combine::combine;
use crate::record::FileRecord;
use crate::selection::SelectionState;
use anyhow::{Result, bail};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingEnumeration,
    Ready,
}

/// Identifies one enumeration request. Issued by [`Session::begin_enumeration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EnumerationTicket(u64);

#[derive(Debug, Clone)]
struct Snapshot {
    records: Vec<FileRecord>,
    selection: SelectionState,
}

#[derive(Debug, Default)]
pub struct Session {
    latest: u64,
    snapshot: Option<Snapshot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.snapshot.is_some() {
            SessionState::Ready
        } else {
            SessionState::AwaitingEnumeration
        }
    }

    pub fn begin_enumeration(&mut self) -> EnumerationTicket {
        self.latest += 1;
        self.snapshot = None;
        EnumerationTicket(self.latest)
    }

    /// Installs `records` if `ticket` belongs to the latest enumeration.
    ///
    /// Returns `false` when the result is stale and was discarded.
    pub fn complete_enumeration(
        &mut self,
        ticket: EnumerationTicket,
        records: Vec<FileRecord>,
    ) -> bool {
        if ticket.0 != self.latest {
            debug!(
                "Discarding stale enumeration #{} (latest #{})",
                ticket.0, self.latest
            );
            return false;
        }

        let selection = SelectionState::initialize(records.len());
        self.snapshot = Some(Snapshot { records, selection });
        true
    }

    /// Records of the current snapshot; empty while awaiting enumeration.
    pub fn records(&self) -> &[FileRecord] {
        self.snapshot
            .as_ref()
            .map(|s| s.records.as_slice())
            .unwrap_or_default()
    }

    pub fn selection(&self) -> Option<&SelectionState> {
        self.snapshot.as_ref().map(|s| &s.selection)
    }

    pub fn selection_mut(&mut self) -> Option<&mut SelectionState> {
        self.snapshot.as_mut().map(|s| &mut s.selection)
    }

    /// Included records in enumeration order.
    pub fn selected_records(&self) -> Vec<&FileRecord> {
        match &self.snapshot {
            Some(snapshot) => snapshot
                .selection
                .selected_indices()
                .into_iter()
                .filter_map(|i| snapshot.records.get(i))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Combines the current selection. Fails only before any listing has arrived.
    pub fn combine_selected(&self) -> Result<String> {
        if self.state() == SessionState::AwaitingEnumeration {
            bail!("No file listing yet; request files first");
        }
        Ok(combine(self.selected_records()))
    }
}
