//! Page background resolution: maps a [`Background`] descriptor to the
//! drawing directive a renderer needs.

use folio_model::{Background, Overlay};
use serde::Serialize;

/// How the page surface is filled
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Fill {
    Color { value: String },
    /// CSS `linear-gradient(...)` string
    Gradient { css: String },
    Image { url: String },
}

/// Scrim laid over an image background to keep text legible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scrim {
    None,
    Dark,
    Light,
}

impl Scrim {
    /// CSS color for the scrim layer, if any
    pub fn css(&self) -> Option<&'static str> {
        match self {
            Scrim::None => None,
            Scrim::Dark => Some("rgba(0, 0, 0, 0.5)"),
            Scrim::Light => Some("rgba(255, 255, 255, 0.7)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedBackground {
    pub fill: Fill,
    pub scrim: Scrim,
}

impl ResolvedBackground {
    /// Inline CSS declarations for the page surface
    pub fn to_css(&self) -> String {
        match &self.fill {
            Fill::Color { value } => format!("background-color: {};", value),
            Fill::Gradient { css } => format!("background: {};", css),
            Fill::Image { url } => {
                format!("background-image: url(\"{}\"); background-size: cover; background-position: center;", url)
            }
        }
    }
}

pub fn resolve_background(background: &Background) -> ResolvedBackground {
    match background {
        Background::Solid { color } => ResolvedBackground {
            fill: Fill::Color { value: color.clone() },
            scrim: Scrim::None,
        },
        Background::Gradient { from, to, angle } => ResolvedBackground {
            fill: Fill::Gradient {
                css: format!("linear-gradient({}deg, {}, {})", angle, from, to),
            },
            scrim: Scrim::None,
        },
        Background::Image { url, overlay } => ResolvedBackground {
            fill: Fill::Image { url: url.clone() },
            scrim: match overlay {
                Overlay::None => Scrim::None,
                Overlay::Dark => Scrim::Dark,
                Overlay::Light => Scrim::Light,
            },
        },
    }
}
