//! Add-block menu: the registry grouped by category, optionally narrowed
//! to a section's allowed kinds. Holds no state beyond being open.

use folio_model::{BlockCategory, BlockKind, BlockSeed, BlockTemplate, Registry};
use std::collections::BTreeSet;
use tracing::debug;

/// Keys the menu reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Escape,
}

/// An open add-block menu anchored after a block
#[derive(Debug, Clone, PartialEq)]
pub struct AddBlockMenu {
    /// Block the new block will follow; `None` appends at the end
    anchor: Option<String>,

    /// Section constraint (`allowedBlockTypes`); `None` allows every kind
    allowed: Option<BTreeSet<BlockKind>>,

    open: bool,
}

impl AddBlockMenu {
    pub fn open(anchor: Option<String>, allowed: Option<BTreeSet<BlockKind>>) -> Self {
        Self {
            anchor,
            allowed,
            open: true,
        }
    }

    /// Menu for the freeform canvas
    pub fn freeform(anchor: Option<String>) -> Self {
        Self::open(anchor, None)
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn allows(&self, kind: BlockKind) -> bool {
        self.allowed.as_ref().map_or(true, |set| set.contains(&kind))
    }

    /// Allowed templates grouped by category, in menu order; empty groups are dropped
    pub fn groups(&self) -> Vec<(BlockCategory, Vec<&'static BlockTemplate>)> {
        Registry::grouped()
            .into_iter()
            .map(|(category, templates)| {
                let templates = templates.into_iter().filter(|t| self.allows(t.kind)).collect::<Vec<_>>();
                (category, templates)
            })
            .filter(|(_, templates)| !templates.is_empty())
            .collect()
    }

    /// Pick a template. Closes the menu and returns the seed to insert;
    /// `None` when the menu is closed or the kind is not allowed here.
    pub fn choose(&mut self, kind: BlockKind) -> Option<BlockSeed> {
        if !self.open {
            return None;
        }
        if !self.allows(kind) {
            debug!(kind = %kind, "Block kind not allowed in this section");
            return None;
        }

        self.open = false;
        Registry::lookup(kind).map(BlockTemplate::seed)
    }

    pub fn handle_key(&mut self, key: MenuKey) {
        match key {
            MenuKey::Escape => self.open = false,
        }
    }

    pub fn click_outside(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{BlockContent, StatCardContent};

    #[test]
    fn test_freeform_menu_lists_every_kind() {
        let menu = AddBlockMenu::freeform(None);
        let count: usize = menu.groups().iter().map(|(_, templates)| templates.len()).sum();
        assert_eq!(count, BlockKind::ALL.len());
        assert_eq!(menu.groups()[0].0, BlockCategory::Text);
    }

    #[test]
    fn test_constraint_filters_and_drops_empty_groups() {
        let allowed = BTreeSet::from([BlockKind::Heading, BlockKind::Image]);
        let menu = AddBlockMenu::open(Some("b1".to_string()), Some(allowed));

        let groups = menu.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, BlockCategory::Text);
        assert_eq!(groups[1].0, BlockCategory::Media);
        assert_eq!(menu.anchor(), Some("b1"));
    }

    #[test]
    fn test_choose_returns_default_seed_and_closes() {
        let mut menu = AddBlockMenu::freeform(None);
        let seed = menu.choose(BlockKind::StatCard).unwrap();

        assert!(!menu.is_open());
        assert_eq!(
            seed.content,
            BlockContent::StatCard(StatCardContent {
                value: "0".to_string(),
                label: "Label".to_string(),
                description: None,
            })
        );

        // Closed menus emit nothing
        assert!(menu.choose(BlockKind::Heading).is_none());
    }

    #[test]
    fn test_disallowed_choice_keeps_menu_open() {
        let mut menu = AddBlockMenu::open(None, Some(BTreeSet::from([BlockKind::Heading])));
        assert!(menu.choose(BlockKind::Chart).is_none());
        assert!(menu.is_open());
    }

    #[test]
    fn test_escape_and_click_outside_close() {
        let mut menu = AddBlockMenu::freeform(None);
        menu.handle_key(MenuKey::Escape);
        assert!(!menu.is_open());

        let mut menu = AddBlockMenu::freeform(None);
        menu.click_outside();
        assert!(!menu.is_open());
    }
}
