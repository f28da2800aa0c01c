use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    Full,
    Wide,
    Medium,
    Narrow,
}

/// Optional per-block presentation hints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
}

impl BlockStyle {
    pub fn aligned(alignment: Alignment) -> Self {
        Self {
            alignment: Some(alignment),
            width: None,
        }
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = Some(width);
        self
    }

    /// Overwrite each field that is set in `partial`
    pub fn merge(&mut self, partial: &BlockStyle) {
        if let Some(alignment) = partial.alignment {
            self.alignment = Some(alignment);
        }
        if let Some(width) = partial.width {
            self.width = Some(width);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_none() && self.width.is_none()
    }
}
