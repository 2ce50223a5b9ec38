//! The presentation-authoring interface the placement logic drives.
//!
//! Placement code only ever talks to these traits; `deck-pptx` provides the
//! implementation that writes `.pptx` packages.

use crate::shape::{Paragraph, ShapeId, ShapeInfo};
use crate::types::Rect;
use crate::Result;
use std::path::Path;

/// One slide's shape tree.
pub trait SlideSurface {
    /// Snapshot of every shape, in render order (back to front).
    fn shapes(&self) -> Vec<ShapeInfo>;

    /// Insert a picture of the image at `path` stretched to `bounds`.
    fn add_picture(&mut self, path: &Path, bounds: Rect) -> Result<ShapeId>;

    /// Insert an empty free-floating text box.
    fn add_text_box(&mut self, bounds: Rect) -> Result<ShapeId>;

    /// Remove a shape from the tree.
    fn remove_shape(&mut self, id: ShapeId) -> Result<()>;

    /// Move a shape behind every other shape, keeping the others' order.
    fn send_to_back(&mut self, id: ShapeId) -> Result<()>;

    /// Clear a text-capable shape and write `paragraphs` into it.
    fn write_text(&mut self, id: ShapeId, paragraphs: Vec<Paragraph>) -> Result<()>;
}

/// A deck under construction.
pub trait DeckBackend {
    type Slide: SlideSurface;

    /// Names of the available layouts, in catalog order.
    fn layout_names(&self) -> Vec<String>;

    /// Full slide area at the origin.
    fn slide_bounds(&self) -> Rect;

    /// Append a slide built from the layout at `layout`, or an empty slide
    /// when `layout` is `None`. Returns the new slide's index.
    fn add_slide(&mut self, layout: Option<usize>) -> Result<usize>;

    fn slide_mut(&mut self, index: usize) -> Result<&mut Self::Slide>;

    fn slide_count(&self) -> usize;

    /// Persist the deck.
    fn save(&self, path: &Path) -> Result<()>;
}
