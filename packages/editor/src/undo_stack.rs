//! # Undo/Redo Stack
//!
//! Tracks page history and enables undo/redo operations.
//!
//! ## Design
//!
//! - Each applied operation records the page before and after it
//! - Undo restores the "before" snapshot and moves the entry to redo
//! - Redo restores the "after" snapshot
//! - New operations clear the redo stack
//! - Supports batched operations (group several edits as one undo step)
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//!
//! let before = page.clone();
//! add_block(&mut page, &seed, None, &mut ids);
//! stack.record(before, page.clone());
//!
//! stack.undo(&mut document);
//! stack.redo(&mut document);
//! ```

use folio_model::{Document, Page};

/// Snapshot pair for one page
#[derive(Debug, Clone)]
pub struct PageChange {
    pub before: Page,
    pub after: Page,
}

/// A group of page changes undone/redone together
#[derive(Debug, Clone, Default)]
pub struct HistoryEntry {
    /// One change per touched page, in first-touched order
    pub changes: Vec<PageChange>,

    /// Optional description of this entry
    pub description: Option<String>,
}

impl HistoryEntry {
    /// Create a single-change entry
    pub fn single(before: Page, after: Page) -> Self {
        Self {
            changes: vec![PageChange { before, after }],
            description: None,
        }
    }

    /// Add a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Fold another change in: a page already in the entry keeps its
    /// original "before" and takes the new "after"
    fn absorb(&mut self, before: Page, after: Page) {
        match self.changes.iter_mut().find(|c| c.before.id == before.id) {
            Some(change) => change.after = after,
            None => self.changes.push(PageChange { before, after }),
        }
    }
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// Stack of applied entries (most recent last)
    undo_stack: Vec<HistoryEntry>,

    /// Stack of undone entries (most recent last)
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<HistoryEntry>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Record a page change
    pub fn record(&mut self, before: Page, after: Page) {
        self.record_described(before, after, None::<String>);
    }

    /// Record a page change with a description (ignored inside a batch,
    /// where the batch description wins)
    pub fn record_described(&mut self, before: Page, after: Page, description: Option<impl Into<String>>) {
        if let Some(batch) = &mut self.current_batch {
            batch.absorb(before, after);
        } else {
            let mut entry = HistoryEntry::single(before, after);
            entry.description = description.map(Into::into);
            self.push_entry(entry);
        }
    }

    /// Start a batch of changes (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(HistoryEntry::default());
    }

    /// End the current batch and push to undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.changes.is_empty() {
                self.push_entry(batch);
            }
        }
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    /// Push an entry to the undo stack
    fn push_entry(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // Clear redo stack (new action invalidates future)
        self.redo_stack.clear();
    }

    /// Undo the most recent entry. Pages that no longer exist are skipped.
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        if let Some(entry) = self.undo_stack.pop() {
            for change in entry.changes.iter().rev() {
                restore(doc, &change.before);
            }

            self.redo_stack.push(entry);
            true
        } else {
            false // Nothing to undo
        }
    }

    /// Redo the most recently undone entry
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        if let Some(entry) = self.redo_stack.pop() {
            for change in &entry.changes {
                restore(doc, &change.after);
            }

            self.undo_stack.push(entry);
            true
        } else {
            false // Nothing to redo
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().and_then(|entry| entry.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().and_then(|entry| entry.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

fn restore(doc: &mut Document, snapshot: &Page) {
    if let Some(page) = doc.page_mut(&snapshot.id) {
        *page = snapshot.clone();
    }
}
