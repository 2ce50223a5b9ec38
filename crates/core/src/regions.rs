//! Region discovery over a snapshot of a slide's shapes.
//!
//! Everything here is a pure function of `&[ShapeInfo]`; nothing touches the
//! slide itself.

use crate::shape::{ShapeId, ShapeInfo};

/// A named way of picking the title region.
pub type TitleStrategy = for<'a> fn(&'a [ShapeInfo]) -> Option<&'a ShapeInfo>;

/// Title strategies in precedence order; the first one that finds a shape wins.
pub const TITLE_STRATEGIES: &[(&str, TitleStrategy)] = &[
    ("designated", designated_text_title),
    ("named", named_title),
    ("topmost", topmost_text),
    ("first-text", first_text),
];

/// The slide's designated title placeholder, text-capable or not.
pub fn designated_title(shapes: &[ShapeInfo]) -> Option<&ShapeInfo> {
    shapes
        .iter()
        .find(|s| s.placeholder_role().is_some_and(|r| r.is_title()))
}

fn designated_text_title(shapes: &[ShapeInfo]) -> Option<&ShapeInfo> {
    designated_title(shapes).filter(|s| s.supports_text())
}

fn named_title(shapes: &[ShapeInfo]) -> Option<&ShapeInfo> {
    shapes
        .iter()
        .filter(|s| s.supports_text())
        .find(|s| s.name.to_lowercase().contains("title"))
}

fn topmost_text(shapes: &[ShapeInfo]) -> Option<&ShapeInfo> {
    shapes
        .iter()
        .filter(|s| s.supports_text())
        .filter_map(|s| s.top().map(|top| (top, s)))
        .min_by_key(|(top, _)| *top)
        .map(|(_, s)| s)
}

fn first_text(shapes: &[ShapeInfo]) -> Option<&ShapeInfo> {
    shapes.iter().find(|s| s.supports_text())
}

/// Find the shape that should receive the slide title.
pub fn find_title(shapes: &[ShapeInfo]) -> Option<&ShapeInfo> {
    TITLE_STRATEGIES.iter().find_map(|(name, strategy)| {
        let found = strategy(shapes)?;
        log::debug!("Title region {:?} found by {} strategy", found.name, name);
        Some(found)
    })
}

/// First text-capable shape in shape order that is not the designated title.
pub fn find_body(shapes: &[ShapeInfo]) -> Option<&ShapeInfo> {
    let title_id = designated_title(shapes).map(|s| s.id);
    shapes
        .iter()
        .find(|s| s.supports_text() && Some(s.id) != title_id)
}

/// Left and right content regions for two-column placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentRegions<'a> {
    pub left: Option<&'a ShapeInfo>,
    pub right: Option<&'a ShapeInfo>,
}

impl ContentRegions<'_> {
    pub fn left_id(&self) -> Option<ShapeId> {
        self.left.map(|s| s.id)
    }

    pub fn right_id(&self) -> Option<ShapeId> {
        self.right.map(|s| s.id)
    }
}

/// Find the left and right content placeholders.
///
/// Every placeholder except the title is a candidate. Placeholders sharing
/// the title's role are dropped too, as is any placeholder whose text equals
/// the title's text. That last rule matches on coincidence and can discard a
/// genuine content region; it is kept because existing decks rely on it.
/// Candidates are ordered by left edge (stable, unknown geometry first).
pub fn find_content_regions(shapes: &[ShapeInfo]) -> ContentRegions<'_> {
    let title = designated_title(shapes);
    let title_role = title.and_then(|t| t.placeholder_role());
    let title_text = title
        .and_then(|t| t.text())
        .filter(|t| !t.is_empty())
        .map(str::trim);

    let mut candidates: Vec<&ShapeInfo> = shapes
        .iter()
        .filter(|s| s.is_placeholder())
        .filter(|s| title.map_or(true, |t| t.id != s.id))
        .filter(|s| title_role.is_none() || s.placeholder_role() != title_role)
        .filter(|s| match (title_text, s.text()) {
            (Some(title_text), Some(text)) => text.trim() != title_text,
            _ => true,
        })
        .collect();

    candidates.sort_by_key(|s| s.left().unwrap_or(0));

    ContentRegions {
        left: candidates.first().copied(),
        right: candidates.get(1).copied(),
    }
}
