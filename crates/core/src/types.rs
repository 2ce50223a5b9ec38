//! Domain types for parsed block documents and slide geometry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field names recognized by the placement logic.
pub mod fields {
    pub const SLIDE_LAYOUT: &str = "slide_layout";
    pub const SLIDE_BG: &str = "slide_bg";
    pub const TITLE: &str = "title";
    pub const FONT_COLOR: &str = "font_color";
    pub const CONTENT: &str = "content";
    pub const CONTENT1: &str = "content1";
    pub const CONTENT2: &str = "content2";
}

/// A parsed document: blocks in source order, one per slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Blocks in source order.
    pub blocks: Vec<Block>,
}

impl Document {
    /// Number of blocks (and therefore slides).
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

/// One slide's worth of field/value data.
///
/// Unrecognized fields are kept so callers can inspect them, but nothing
/// in the placement logic reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    fields: BTreeMap<String, String>,
}

impl Block {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value for the same key.
    pub(crate) fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Get the raw value of a field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Whether the block defines the given field at all.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// All fields, sorted by key.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Layout name hint, empty when absent.
    pub fn slide_layout(&self) -> &str {
        self.get(fields::SLIDE_LAYOUT).unwrap_or("")
    }

    pub fn slide_bg(&self) -> Option<&str> {
        self.get(fields::SLIDE_BG).filter(|s| !s.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.get(fields::TITLE).filter(|s| !s.is_empty())
    }

    pub fn font_color(&self) -> Option<&str> {
        self.get(fields::FONT_COLOR)
    }

    /// Body content of the block.
    ///
    /// Either `content1` or `content2` switches the block to two-region
    /// placement, taking precedence over `content`. A missing side is empty.
    pub fn body(&self) -> BlockBody<'_> {
        if self.contains(fields::CONTENT1) || self.contains(fields::CONTENT2) {
            BlockBody::Two {
                left: self.get(fields::CONTENT1).unwrap_or(""),
                right: self.get(fields::CONTENT2).unwrap_or(""),
            }
        } else if let Some(content) = self.get(fields::CONTENT) {
            BlockBody::Single(content)
        } else {
            BlockBody::Empty
        }
    }
}

/// Which body placement a block asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockBody<'a> {
    /// No content fields.
    Empty,
    /// `content` only.
    Single(&'a str),
    /// `content1` and/or `content2`.
    Two { left: &'a str, right: &'a str },
}

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// English Metric Units per typographic point.
pub const EMU_PER_POINT: i64 = 12_700;

/// An axis-aligned rectangle in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a rectangle from inch measurements, rounding to whole EMU.
    pub fn from_inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        let emu = |v: f64| (v * EMU_PER_INCH as f64).round() as i64;
        Self::new(emu(left), emu(top), emu(width), emu(height))
    }

    /// A rectangle at the origin with the given extent.
    pub const fn at_origin(width: i64, height: i64) -> Self {
        Self::new(0, 0, width, height)
    }
}
