//! PPTX (Office Open XML) backend for deck generation.
//!
//! [`PptxDeck`] keeps slides in memory, starting each one from a stock
//! layout, and writes the finished deck as a `.pptx` package.

pub mod catalog;
pub mod deck;
#[cfg(test)]
pub(crate) mod inspect;
pub mod writer;

pub use catalog::{stock_layouts, LayoutSpec, PlaceholderSpec};
pub use deck::{PptxDeck, PptxSlide, SLIDE_HEIGHT, SLIDE_WIDTH};
