//! # Edit Session Management
//!
//! One user's editing view of a document: the document itself, the active
//! page, per-page canvas state, undo history and per-block upload state.
//!
//! Every recoverable failure (a patch that does not fit, a failed upload,
//! save or export) is turned into a [`Notification`] and the document is
//! left as it was. Nothing escapes as a panic.

use crate::canvas::{CanvasCommand, CanvasEvent, CanvasState};
use crate::errors::{EditorError, UploadError};
use crate::export::{exporter_for, ExportFormat, ExportedFile, Exporter};
use crate::operations::{OpOutcome, PageOp};
use crate::store::DocumentStore;
use crate::undo_stack::UndoStack;
use crate::upload::{self, UploadState, Uploader};
use folio_model::{BlockSeed, BlockStyle, ContentPatch, Document, IdGenerator, Page, SequentialIds};
use folio_templates::{instantiate, DocumentTemplate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    /// Maximum undo levels (0 = unlimited)
    pub undo_levels: usize,

    /// Largest accepted upload in bytes (0 = no limit)
    pub upload_limit: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            undo_levels: 100,
            upload_limit: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Transient user-facing message (toast)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

pub struct EditSession {
    document: Document,

    /// Index into `document.pages`
    active_page: usize,

    /// Canvas state keyed by page id
    canvases: HashMap<String, CanvasState>,

    history: UndoStack,

    /// Upload state keyed by block id; absent means idle
    uploads: HashMap<String, UploadState>,

    ids: Box<dyn IdGenerator>,
    notifications: Vec<Notification>,
    options: EditorOptions,
}

impl EditSession {
    pub fn new(document: Document, ids: impl IdGenerator + 'static, options: EditorOptions) -> Self {
        Self {
            document,
            active_page: 0,
            canvases: HashMap::new(),
            history: UndoStack::with_max_levels(options.undo_levels),
            uploads: HashMap::new(),
            ids: Box::new(ids),
            notifications: Vec::new(),
            options,
        }
    }

    /// Instantiate a template and open it
    pub fn from_template(template: &DocumentTemplate, mut ids: impl IdGenerator + 'static, options: EditorOptions) -> Self {
        let document = instantiate(template, &mut ids);
        Self::new(document, ids, options)
    }

    /// Open a document with session-seeded ids and default options
    pub fn open(document: Document) -> Self {
        Self::new(document, SequentialIds::for_session(), EditorOptions::default())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.document.pages.get(self.active_page)
    }

    /// Switch the active page; unknown ids leave it unchanged
    pub fn select_page(&mut self, page_id: &str) -> bool {
        match self.document.pages.iter().position(|p| p.id == page_id) {
            Some(index) => {
                self.active_page = index;
                true
            }
            None => {
                debug!(page_id = %page_id, "Select of missing page ignored");
                false
            }
        }
    }

    /// Canvas state of the active page
    pub fn canvas(&self) -> CanvasState {
        self.active_page()
            .and_then(|page| self.canvases.get(&page.id))
            .cloned()
            .unwrap_or_default()
    }

    /// Feed a UI event to the active page's canvas and apply what it asks for.
    /// Returns the id of a block the event created.
    /// Events naming a block that is not on the active page are ignored.
    pub fn handle(&mut self, event: CanvasEvent) -> Option<String> {
        let page = self.active_page()?;
        if let Some(block_id) = event.target() {
            if page.block(block_id).is_none() {
                debug!(block_id = %block_id, "Event for missing block ignored");
                return None;
            }
        }

        let page_id = page.id.clone();
        let command = self.canvases.entry(page_id).or_default().handle(event)?;

        match command {
            CanvasCommand::Delete { block_id } => {
                self.delete_block(&block_id);
                None
            }
            CanvasCommand::Insert { seed, after } => self.add_block(&seed, after.as_deref()),
        }
    }

    pub fn add_block(&mut self, seed: &BlockSeed, after: Option<&str>) -> Option<String> {
        let op = PageOp::AddBlock {
            seed: seed.clone(),
            after: after.map(str::to_string),
        };
        self.apply(op)?.created
    }

    pub fn update_block(&mut self, block_id: &str, content: ContentPatch, style: Option<BlockStyle>) -> bool {
        let op = PageOp::UpdateBlock {
            block_id: block_id.to_string(),
            content,
            style,
        };
        self.apply(op).map_or(false, |outcome| outcome.changed)
    }

    pub fn delete_block(&mut self, block_id: &str) -> bool {
        let op = PageOp::DeleteBlock {
            block_id: block_id.to_string(),
        };
        let deleted = self.apply(op).map_or(false, |outcome| outcome.changed);
        if !deleted {
            return false;
        }

        // A late upload completion for this block is ignored from here on
        self.uploads.remove(block_id);
        if let Some(page_id) = self.active_page().map(|p| p.id.clone()) {
            if let Some(canvas) = self.canvases.get_mut(&page_id) {
                canvas.forget(block_id);
            }
        }
        true
    }

    pub fn duplicate_block(&mut self, block_id: &str) -> Option<String> {
        let op = PageOp::DuplicateBlock {
            block_id: block_id.to_string(),
        };
        self.apply(op)?.created
    }

    pub fn reorder_blocks(&mut self, from: usize, to: usize) -> bool {
        self.apply(PageOp::ReorderBlocks { from, to })
            .map_or(false, |outcome| outcome.changed)
    }

    /// Apply an operation to the active page and record it for undo.
    /// `None` when there is no active page or the operation failed.
    pub fn apply(&mut self, op: PageOp) -> Option<OpOutcome> {
        let index = self.active_page;
        self.apply_to_page(index, op)
    }

    fn apply_to_page(&mut self, index: usize, op: PageOp) -> Option<OpOutcome> {
        let Some(page) = self.document.pages.get_mut(index) else {
            debug!(op = op.describe(), "No active page");
            return None;
        };

        let before = page.clone();
        match op.apply(page, self.ids.as_mut()) {
            Ok(outcome) => {
                if outcome.changed {
                    self.history
                        .record_described(before, page.clone(), Some(op.describe()));
                }
                Some(outcome)
            }
            Err(e) => {
                warn!(op = op.describe(), error = %e, "Operation rejected");
                self.notify(Notification::error(format!("{} failed: {}", op.describe(), e)));
                None
            }
        }
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.document);
        if undone {
            self.reconcile();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.document);
        if redone {
            self.reconcile();
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop canvas and upload state for blocks that no longer exist
    fn reconcile(&mut self) {
        for page in &self.document.pages {
            if let Some(canvas) = self.canvases.get_mut(&page.id) {
                canvas.reconcile(page);
            }
        }

        let document = &self.document;
        self.uploads
            .retain(|block_id, _| document.pages.iter().any(|p| p.block(block_id).is_some()));
    }

    pub fn upload_state(&self, block_id: &str) -> UploadState {
        self.uploads.get(block_id).cloned().unwrap_or_default()
    }

    /// Mark an upload as in flight. Fails for missing blocks and for kinds
    /// that take no uploads.
    pub fn begin_upload(&mut self, block_id: &str) -> bool {
        let accepts = self
            .find_block_page(block_id)
            .and_then(|index| self.document.pages[index].block(block_id))
            .map_or(false, |block| upload::accepts_upload(&block.content));

        if !accepts {
            debug!(block_id = %block_id, "Block does not take uploads");
            return false;
        }

        self.uploads.insert(block_id.to_string(), UploadState::InFlight);
        true
    }

    /// Settle an upload. The block's content only changes on success; a
    /// completion for a block that was deleted (or never began) is dropped.
    pub fn finish_upload(&mut self, block_id: &str, result: Result<String, UploadError>) -> bool {
        if !self.upload_state(block_id).is_uploading() {
            debug!(block_id = %block_id, "Stale upload completion ignored");
            return false;
        }

        let target = self.find_block_page(block_id).and_then(|index| {
            let kind = self.document.pages[index].block(block_id)?.kind()?;
            Some((index, kind))
        });
        let Some((index, kind)) = target else {
            self.uploads.remove(block_id);
            return false;
        };

        match result {
            Ok(url) => {
                let Some(content) = upload::url_patch(kind, &url) else {
                    return false;
                };
                let op = PageOp::UpdateBlock {
                    block_id: block_id.to_string(),
                    content,
                    style: None,
                };
                let changed = self.apply_to_page(index, op).map_or(false, |o| o.changed);
                self.uploads.insert(block_id.to_string(), UploadState::Resolved(url));
                changed
            }
            Err(e) => {
                warn!(block_id = %block_id, error = %e, "Upload failed");
                self.notify(Notification::error(format!("Upload failed: {}", e)));
                self.uploads.insert(block_id.to_string(), UploadState::Failed(e));
                false
            }
        }
    }

    /// Begin, run and settle an upload against a backend in one call
    pub fn upload(&mut self, uploader: &mut dyn Uploader, block_id: &str, bytes: &[u8], file_name: &str) -> bool {
        if !self.begin_upload(block_id) {
            return false;
        }

        let result = upload::validate(bytes, self.options.upload_limit).and_then(|_| uploader.upload(bytes, file_name));
        self.finish_upload(block_id, result)
    }

    pub fn save(&mut self, store: &mut dyn DocumentStore) -> Option<String> {
        match store.save(&self.document) {
            Ok(id) => {
                info!(id = %id, "Document saved");
                self.notify(Notification::info("Document saved"));
                Some(id)
            }
            Err(e) => {
                self.report("Save failed", &e);
                None
            }
        }
    }

    /// Replace the session's document with a stored one. History, canvas and
    /// upload state are reset. On failure the current document stays open.
    pub fn load(&mut self, store: &dyn DocumentStore, id: &str) -> bool {
        match store.load(id) {
            Ok(document) => {
                self.document = document;
                self.active_page = 0;
                self.canvases.clear();
                self.uploads.clear();
                self.history.clear();
                true
            }
            Err(e) => {
                self.report("Load failed", &e);
                false
            }
        }
    }

    pub fn export(&mut self, exporter: &dyn Exporter) -> Option<ExportedFile> {
        match exporter.export(&self.document) {
            Ok(file) => Some(file),
            Err(e) => {
                self.report("Export failed", &e);
                None
            }
        }
    }

    pub fn export_as(&mut self, format: ExportFormat) -> Option<ExportedFile> {
        let exporter = exporter_for(format);
        self.export(exporter.as_ref())
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn report(&mut self, action: &str, error: &EditorError) {
        warn!(error = %error, "{}", action);
        self.notify(Notification::error(format!("{}: {}", action, error)));
    }

    fn find_block_page(&self, block_id: &str) -> Option<usize> {
        self.document.pages.iter().position(|p| p.block(block_id).is_some())
    }
}
