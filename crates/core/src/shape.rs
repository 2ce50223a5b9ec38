//! Shape snapshots and the text model written into text-capable shapes.

use crate::color::Rgb;
use crate::types::Rect;
use serde::{Deserialize, Serialize};

/// Identifier of a shape, unique within its slide.
pub type ShapeId = u32;

/// The role a placeholder plays in its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderRole {
    Title,
    CenterTitle,
    Subtitle,
    Body,
    Object,
    Picture,
    Date,
    Footer,
    SlideNumber,
}

impl PlaceholderRole {
    /// Whether this role marks the slide's designated title region.
    pub fn is_title(self) -> bool {
        matches!(self, Self::Title | Self::CenterTitle)
    }
}

/// What a shape is and which operations it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    /// A layout-supplied region. `text` is `None` when it has no text frame.
    Placeholder {
        role: PlaceholderRole,
        text: Option<String>,
    },
    /// A free-floating text box.
    TextBox { text: String },
    /// A picture; never text-capable.
    Picture,
}

/// Immutable metadata about one shape, in slide shape order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeInfo {
    pub id: ShapeId,
    pub name: String,
    /// Geometry, `None` when the shape inherits a position it cannot report.
    pub bounds: Option<Rect>,
    pub kind: ShapeKind,
}

impl ShapeInfo {
    pub fn supports_text(&self) -> bool {
        self.text().is_some()
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, ShapeKind::Placeholder { .. })
    }

    pub fn placeholder_role(&self) -> Option<PlaceholderRole> {
        match self.kind {
            ShapeKind::Placeholder { role, .. } => Some(role),
            _ => None,
        }
    }

    /// Current plain text of a text-capable shape.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ShapeKind::Placeholder { text, .. } => text.as_deref(),
            ShapeKind::TextBox { text } => Some(text),
            ShapeKind::Picture => None,
        }
    }

    pub fn top(&self) -> Option<i64> {
        self.bounds.map(|b| b.top)
    }

    pub fn left(&self) -> Option<i64> {
        self.bounds.map(|b| b.left)
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Font attributes applied to a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size_pt: f64,
    pub family: String,
    pub bold: bool,
    /// `None` keeps the theme's text color.
    pub color: Option<Rgb>,
}

/// A span of text sharing one font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub font: Font,
}

/// A paragraph: an ordered sequence of runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    pub alignment: Option<Alignment>,
}

impl Paragraph {
    /// A paragraph holding `text` in a single run. Empty text yields a
    /// paragraph without runs.
    pub fn single(text: &str, font: &Font) -> Self {
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![TextRun {
                text: text.to_string(),
                font: font.clone(),
            }]
        };
        Self {
            runs,
            alignment: None,
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Concatenated run text.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Split multi-line text into one paragraph per line, each line trimmed.
pub fn paragraphs_from_lines(text: &str, font: &Font) -> Vec<Paragraph> {
    text.lines()
        .map(|line| Paragraph::single(line.trim(), font))
        .collect()
}
