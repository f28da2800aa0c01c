//! # Canvas State
//!
//! Selection and edit-mode state for one page, driven by UI events.
//!
//! ## States
//!
//! Each block is `Idle`, `Selected` or `Editing`. At most one block is
//! selected and at most one is editing; editing implies selected.
//!
//! ## Transitions
//!
//! - Click empty area: deselect and end any edit, in one step
//! - Click block: select it (an edit on another block ends)
//! - Double-click / start edit: select and edit
//! - Blur / Escape / end edit: editing -> selected
//! - Delete: emits a delete command, state for the block is dropped
//! - Add after: opens the add-block menu; choosing emits an insert command.
//!   The inserted block starts idle and the selection is unchanged.
//!
//! The canvas never mutates the page. It returns [`CanvasCommand`]s for the
//! session to apply.

use crate::add_block_menu::{AddBlockMenu, MenuKey};
use folio_model::{BlockKind, BlockSeed, Page};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockState {
    Idle,
    Selected,
    Editing,
}

/// UI input to the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum CanvasEvent {
    ClickEmpty,
    ClickBlock { block_id: String },
    DoubleClickBlock { block_id: String },
    StartEdit { block_id: String },
    EndEdit,
    Blur,
    Escape,
    DeleteBlock { block_id: String },
    OpenAddMenu {
        #[serde(default)]
        after: Option<String>,
        #[serde(default)]
        allowed: Option<BTreeSet<BlockKind>>,
    },
    ChooseBlock { kind: BlockKind },
    ClickOutsideMenu,
}

/// Page change requested by the canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum CanvasCommand {
    Delete { block_id: String },
    Insert { seed: BlockSeed, after: Option<String> },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasState {
    selected: Option<String>,
    editing: Option<String>,
    menu: Option<AddBlockMenu>,
}

impl CanvasEvent {
    /// The block an event points at, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            CanvasEvent::ClickBlock { block_id }
            | CanvasEvent::DoubleClickBlock { block_id }
            | CanvasEvent::StartEdit { block_id }
            | CanvasEvent::DeleteBlock { block_id } => Some(block_id),
            _ => None,
        }
    }
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn menu(&self) -> Option<&AddBlockMenu> {
        self.menu.as_ref()
    }

    pub fn state_of(&self, block_id: &str) -> BlockState {
        if self.editing.as_deref() == Some(block_id) {
            BlockState::Editing
        } else if self.selected.as_deref() == Some(block_id) {
            BlockState::Selected
        } else {
            BlockState::Idle
        }
    }

    pub fn handle(&mut self, event: CanvasEvent) -> Option<CanvasCommand> {
        match event {
            CanvasEvent::ClickEmpty => {
                self.selected = None;
                self.editing = None;
                None
            }

            CanvasEvent::ClickBlock { block_id } => {
                if self.editing.as_deref() != Some(block_id.as_str()) {
                    self.editing = None;
                }
                self.selected = Some(block_id);
                None
            }

            CanvasEvent::DoubleClickBlock { block_id } | CanvasEvent::StartEdit { block_id } => {
                self.selected = Some(block_id.clone());
                self.editing = Some(block_id);
                None
            }

            CanvasEvent::EndEdit | CanvasEvent::Blur => {
                self.editing = None;
                None
            }

            CanvasEvent::Escape => {
                // An open menu takes the key first
                match self.menu.as_mut() {
                    Some(menu) => {
                        menu.handle_key(MenuKey::Escape);
                        self.menu = None;
                    }
                    None => self.editing = None,
                }
                None
            }

            CanvasEvent::DeleteBlock { block_id } => {
                self.forget(&block_id);
                Some(CanvasCommand::Delete { block_id })
            }

            CanvasEvent::OpenAddMenu { after, allowed } => {
                self.menu = Some(AddBlockMenu::open(after, allowed));
                None
            }

            CanvasEvent::ChooseBlock { kind } => {
                let Some(menu) = self.menu.as_mut() else {
                    debug!(kind = %kind, "Block chosen with no menu open");
                    return None;
                };

                let seed = menu.choose(kind)?;
                let after = menu.anchor().map(str::to_string);
                self.menu = None;
                Some(CanvasCommand::Insert { seed, after })
            }

            CanvasEvent::ClickOutsideMenu => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.click_outside();
                }
                self.menu = None;
                None
            }
        }
    }

    /// Drop all state that refers to a block
    pub fn forget(&mut self, block_id: &str) {
        if self.selected.as_deref() == Some(block_id) {
            self.selected = None;
        }
        if self.editing.as_deref() == Some(block_id) {
            self.editing = None;
        }
        if self.menu.as_ref().and_then(AddBlockMenu::anchor) == Some(block_id) {
            self.menu = None;
        }
    }

    /// Drop references to blocks no longer on the page (after undo, load, ...)
    pub fn reconcile(&mut self, page: &Page) {
        let stale = [self.selected.clone(), self.editing.clone()]
            .into_iter()
            .flatten()
            .chain(self.menu.as_ref().and_then(|m| m.anchor().map(str::to_string)))
            .filter(|id| page.block(id).is_none())
            .collect::<Vec<_>>();

        for id in stale {
            self.forget(&id);
        }
    }
}
