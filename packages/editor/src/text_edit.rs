//! Editable text field capability.
//!
//! A field stages text locally while focused and only produces a content
//! patch when it commits. Commit rules depend on the field mode:
//!
//! | Mode        | Enter          | Ctrl+Enter | Escape | Blur   |
//! |-------------|----------------|------------|--------|--------|
//! | single-line | commit         | commit     | cancel | commit |
//! | multi-line  | newline        | commit     | cancel | commit |
//! | lines       | newline        | commit     | cancel | commit |
//!
//! `Lines` fields edit a list of strings (bullet items) one per line.

use folio_model::ContentPatch;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    SingleLine,
    MultiLine,
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    /// Enter with Ctrl (or Cmd) held
    ModEnter,
    Escape,
}

/// Result of feeding a key or focus change to the field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// Still editing; the staged text may have changed
    Editing,
    /// Edit finished with a value different from the initial one
    Committed(ContentPatch),
    /// Edit finished with nothing to write back
    Unchanged,
    /// Edit abandoned, staged text discarded
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct TextField {
    field: String,
    mode: FieldMode,
    initial: String,
    staged: String,
    active: bool,
}

impl TextField {
    /// Focus a field of the content payload (camelCase field name)
    pub fn begin(field: impl Into<String>, mode: FieldMode, initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            field: field.into(),
            mode,
            staged: initial.clone(),
            initial,
            active: true,
        }
    }

    /// Focus a list field; items are edited one per line
    pub fn begin_lines(field: impl Into<String>, items: &[String]) -> Self {
        Self::begin(field, FieldMode::Lines, items.join("\n"))
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    pub fn staged(&self) -> &str {
        &self.staged
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Replace the staged text (ignored once the edit has ended)
    pub fn stage(&mut self, text: impl Into<String>) {
        if self.active {
            self.staged = text.into();
        }
    }

    pub fn commit_key(&mut self, key: Key) -> FieldEvent {
        if !self.active {
            return FieldEvent::Unchanged;
        }

        match (key, self.mode) {
            (Key::Escape, _) => self.cancel(),
            (Key::Enter, FieldMode::SingleLine) | (Key::ModEnter, _) => self.commit(),
            (Key::Enter, _) => {
                self.staged.push('\n');
                FieldEvent::Editing
            }
        }
    }

    pub fn blur(&mut self) -> FieldEvent {
        if !self.active {
            return FieldEvent::Unchanged;
        }
        self.commit()
    }

    pub fn cancel(&mut self) -> FieldEvent {
        self.active = false;
        self.staged = self.initial.clone();
        FieldEvent::Cancelled
    }

    fn commit(&mut self) -> FieldEvent {
        self.active = false;
        if self.staged == self.initial {
            return FieldEvent::Unchanged;
        }

        let mut patch = ContentPatch::new();
        patch.insert(self.field.clone(), self.value());
        FieldEvent::Committed(patch)
    }

    fn value(&self) -> Value {
        match self.mode {
            FieldMode::SingleLine => Value::String(self.staged.replace('\n', " ")),
            FieldMode::MultiLine => Value::String(self.staged.clone()),
            FieldMode::Lines => Value::Array(
                self.staged
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(|line| Value::String(line.to_string()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_line_commits_on_enter() {
        let mut field = TextField::begin("text", FieldMode::SingleLine, "Title");
        field.stage("New title");

        let event = field.commit_key(Key::Enter);
        assert_eq!(event, FieldEvent::Committed(json!({ "text": "New title" }).as_object().unwrap().clone()));
        assert!(!field.is_active());
    }

    #[test]
    fn test_multi_line_enter_inserts_newline() {
        let mut field = TextField::begin("text", FieldMode::MultiLine, "First");

        assert_eq!(field.commit_key(Key::Enter), FieldEvent::Editing);
        field.stage(format!("{}Second", field.staged()));

        let event = field.commit_key(Key::ModEnter);
        assert_eq!(event, FieldEvent::Committed(json!({ "text": "First\nSecond" }).as_object().unwrap().clone()));
    }

    #[test]
    fn test_escape_reverts() {
        let mut field = TextField::begin("label", FieldMode::SingleLine, "Revenue");
        field.stage("Profit");

        assert_eq!(field.commit_key(Key::Escape), FieldEvent::Cancelled);
        assert_eq!(field.staged(), "Revenue");

        // Ended fields ignore further input
        field.stage("Other");
        assert_eq!(field.blur(), FieldEvent::Unchanged);
    }

    #[test]
    fn test_blur_commits_and_unchanged_text_is_not_a_patch() {
        let mut field = TextField::begin("value", FieldMode::SingleLine, "42%");
        assert_eq!(field.blur(), FieldEvent::Unchanged);

        let mut field = TextField::begin("value", FieldMode::SingleLine, "42%");
        field.stage("43%");
        assert!(matches!(field.blur(), FieldEvent::Committed(_)));
    }

    #[test]
    fn test_lines_field_produces_item_list() {
        let items = vec!["One".to_string(), "Two".to_string()];
        let mut field = TextField::begin_lines("items", &items);
        field.stage("One\n\n Two \nThree");

        let event = field.commit_key(Key::ModEnter);
        assert_eq!(
            event,
            FieldEvent::Committed(json!({ "items": ["One", "Two", "Three"] }).as_object().unwrap().clone())
        );
    }
}
