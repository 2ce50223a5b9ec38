//! Text styling and fallback region geometry.

use crate::color::Rgb;
use crate::shape::Font;
use crate::types::Rect;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Font settings for one kind of text region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub size_pt: f64,
    pub family: String,
    pub bold: bool,
    /// Color used when the block gives none; `None` keeps the theme color.
    pub default_color: Option<Rgb>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_pt: 18.0,
            family: "Segoe UI".to_string(),
            bold: false,
            default_color: None,
        }
    }
}

impl TextStyle {
    /// Font for a run, preferring the block's color over the default.
    pub fn font(&self, color: Option<Rgb>) -> Font {
        Font {
            size_pt: self.size_pt,
            family: self.family.clone(),
            bold: self.bold,
            color: color.or(self.default_color),
        }
    }
}

/// All styling used while populating slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub title: TextStyle,
    /// Single-region body text.
    pub body: TextStyle,
    /// Text in either column of a two-region slide.
    pub column: TextStyle,
    /// Text box synthesized when a slide has no body region.
    pub body_box: Rect,
    /// Text box synthesized for a missing left column.
    pub left_box: Rect,
    /// Text box synthesized for a missing right column.
    pub right_box: Rect,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: TextStyle {
                size_pt: 32.0,
                family: "Tenorite".to_string(),
                bold: true,
                default_color: Some(Rgb::new(50, 50, 50)),
            },
            body: TextStyle::default(),
            column: TextStyle {
                size_pt: 14.0,
                ..TextStyle::default()
            },
            body_box: Rect::from_inches(1.0, 1.5, 8.0, 4.0),
            left_box: Rect::from_inches(0.3, 1.5, 4.5, 4.0),
            right_box: Rect::from_inches(4.8, 1.5, 4.5, 4.0),
        }
    }
}

impl StyleConfig {
    /// Parse a JSON style override; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::StyleConfig(e.to_string()))
    }
}
