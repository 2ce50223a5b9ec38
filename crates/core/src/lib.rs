//! Block-document parsing, region discovery and content placement
//! for slide deck generation.

pub mod backend;
pub mod color;
pub mod error;
pub mod fit;
pub mod image_path;
pub mod layout;
pub mod parser;
pub mod pipeline;
pub mod regions;
pub mod router;
pub mod shape;
pub mod style;
pub mod types;

pub use backend::{DeckBackend, SlideSurface};
pub use color::{parse_color, Rgb};
pub use error::{Error, Result};
pub use image_path::ImagePathResolver;
pub use layout::LayoutSelector;
pub use parser::parse;
pub use pipeline::{ContentReport, DeckGenerator, GenerationReport, SlideReport, Stage};
pub use router::{Placement, SkipReason, TwoPlacement};
pub use shape::{Alignment, Font, Paragraph, PlaceholderRole, ShapeId, ShapeInfo, ShapeKind, TextRun};
pub use style::{StyleConfig, TextStyle};
pub use types::{Block, BlockBody, Document, Rect, EMU_PER_INCH, EMU_PER_POINT};
