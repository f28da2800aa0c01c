//! # Folio Editor
//!
//! Block editing engine for Folio documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI: clicks, keys, blur, menu choices         │
//! └─────────────────────────────────────────────┘
//!                     ↓ CanvasEvent
//! ┌─────────────────────────────────────────────┐
//! │ canvas: selection / edit mode / add menu     │
//! └─────────────────────────────────────────────┘
//!                     ↓ CanvasCommand
//! ┌─────────────────────────────────────────────┐
//! │ session: PageOp on the active page           │
//! │  - undo/redo snapshots                       │
//! │  - upload state per block                    │
//! │  - store / exporter collaborators            │
//! │  - failures become notifications             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: exhaustive dispatch per block kind   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Stale references are no-ops**: a missing block or anchor never fails
//! 2. **Ids are injected**: every operation that creates blocks takes an
//!    [`IdGenerator`](folio_model::IdGenerator)
//! 3. **Failed writes change nothing**: patches apply to a copy, uploads only
//!    touch content on success
//! 4. **Freeform after instantiation**: section constraints from templates
//!    are not enforced while editing
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_editor::{CanvasEvent, EditSession, EditorOptions};
//! use folio_model::{BlockKind, DocumentType, SequentialIds};
//! use folio_templates::DocumentTemplate;
//!
//! let template = DocumentTemplate::blank(DocumentType::CaseStudy);
//! let mut session = EditSession::from_template(&template, SequentialIds::for_session(), EditorOptions::default());
//!
//! session.handle(CanvasEvent::OpenAddMenu { after: None, allowed: None });
//! session.handle(CanvasEvent::ChooseBlock { kind: BlockKind::StatCard });
//!
//! for toast in session.take_notifications() {
//!     println!("{}", toast.message);
//! }
//! ```

mod add_block_menu;
mod background;
mod canvas;
mod errors;
mod export;
mod operations;
mod render;
mod session;
mod store;
mod text_edit;
mod undo_stack;
mod upload;

pub use add_block_menu::{AddBlockMenu, MenuKey};
pub use background::{resolve_background, Fill, ResolvedBackground, Scrim};
pub use canvas::{BlockState, CanvasCommand, CanvasEvent, CanvasState};
pub use errors::{EditorError, UploadError};
pub use export::{exporter_for, file_name_for, ExportFormat, ExportedFile, Exporter, JsonExporter, MarkdownExporter};
pub use operations::{add_block, delete_block, duplicate_block, reorder_blocks, update_block, OpOutcome, PageOp};
pub use render::{dispatch, render_block, render_blocks, BlockRenderer, RenderTarget};
pub use session::{EditSession, EditorOptions, Notification, NotificationLevel};
pub use store::{DocumentStore, DocumentSummary, FileStore, MemoryStore};
pub use text_edit::{FieldEvent, FieldMode, Key, TextField};
pub use undo_stack::{HistoryEntry, PageChange, UndoStack};
pub use upload::{accepts_upload, upload_field, url_patch, UploadState, Uploader};
