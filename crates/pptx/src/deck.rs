//! In-memory slide deck backed by the stock layout catalog.

use crate::catalog::{stock_layouts, LayoutSpec};
use crate::writer;
use deck_core::{
    DeckBackend, Error, Paragraph, PlaceholderRole, Rect, Result, ShapeId, ShapeInfo, ShapeKind,
    SlideSurface,
};
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Widescreen slide width (13.333in).
pub const SLIDE_WIDTH: i64 = 12_192_000;

/// Widescreen slide height (7.5in).
pub const SLIDE_HEIGHT: i64 = 6_858_000;

/// Raster formats a picture can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl MediaFormat {
    fn detect(data: &[u8]) -> Option<Self> {
        match image::guess_format(data).ok()? {
            image::ImageFormat::Png => Some(Self::Png),
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            image::ImageFormat::Gif => Some(Self::Gif),
            image::ImageFormat::Bmp => Some(Self::Bmp),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
        }
    }
}

/// Image bytes embedded by a picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub data: Vec<u8>,
    pub format: MediaFormat,
}

impl Media {
    /// Load an image file, rejecting formats the package cannot embed.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let format = MediaFormat::detect(&data).ok_or_else(|| {
            Error::ImageError(format!("{}: unrecognized image format", path.display()))
        })?;
        Ok(Self { data, format })
    }
}

/// What a shape holds.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeBody {
    Placeholder {
        role: PlaceholderRole,
        idx: Option<u32>,
        vertical: bool,
        paragraphs: Vec<Paragraph>,
    },
    TextBox {
        paragraphs: Vec<Paragraph>,
    },
    Picture {
        media: Media,
        description: String,
    },
}

/// A shape in a slide's shape tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub name: String,
    pub bounds: Rect,
    pub body: ShapeBody,
}

fn joined_text(paragraphs: &[Paragraph]) -> String {
    paragraphs
        .iter()
        .map(Paragraph::text)
        .collect::<Vec<_>>()
        .join("\n")
}

impl Shape {
    fn paragraphs_mut(&mut self) -> Option<&mut Vec<Paragraph>> {
        match &mut self.body {
            ShapeBody::Placeholder { paragraphs, .. } | ShapeBody::TextBox { paragraphs } => {
                Some(paragraphs)
            }
            ShapeBody::Picture { .. } => None,
        }
    }

    fn info(&self) -> ShapeInfo {
        let kind = match &self.body {
            ShapeBody::Placeholder {
                role, paragraphs, ..
            } => ShapeKind::Placeholder {
                role: *role,
                text: Some(joined_text(paragraphs)),
            },
            ShapeBody::TextBox { paragraphs } => ShapeKind::TextBox {
                text: joined_text(paragraphs),
            },
            ShapeBody::Picture { .. } => ShapeKind::Picture,
        };
        ShapeInfo {
            id: self.id,
            name: self.name.clone(),
            bounds: Some(self.bounds),
            kind,
        }
    }
}

/// One slide: the layout it came from and its shapes, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct PptxSlide {
    /// Catalog index of the layout, `None` for a slide built from nothing.
    pub layout: Option<usize>,
    pub shapes: Vec<Shape>,
}

impl PptxSlide {
    fn from_layout(index: Option<usize>, layout: Option<&LayoutSpec>) -> Self {
        let shapes = layout
            .map(|l| l.placeholders.as_slice())
            .unwrap_or_default()
            .iter()
            .zip(2..)
            .map(|(spec, id)| Shape {
                id,
                name: spec.name.to_string(),
                bounds: spec.bounds,
                body: ShapeBody::Placeholder {
                    role: spec.role,
                    idx: spec.idx,
                    vertical: spec.vertical,
                    paragraphs: Vec::new(),
                },
            })
            .collect();
        Self {
            layout: index,
            shapes,
        }
    }

    /// Next free shape id; 1 belongs to the tree itself.
    fn next_id(&self) -> ShapeId {
        self.shapes.iter().map(|s| s.id).max().unwrap_or(1) + 1
    }

    fn position(&self, id: ShapeId) -> Result<usize> {
        self.shapes
            .iter()
            .position(|s| s.id == id)
            .ok_or(Error::UnknownShape(id))
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }
}

impl SlideSurface for PptxSlide {
    fn shapes(&self) -> Vec<ShapeInfo> {
        self.shapes.iter().map(Shape::info).collect()
    }

    fn add_picture(&mut self, path: &Path, bounds: Rect) -> Result<ShapeId> {
        let media = Media::load(path)?;
        let id = self.next_id();
        let description = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.shapes.push(Shape {
            id,
            name: format!("Picture {}", id - 1),
            bounds,
            body: ShapeBody::Picture { media, description },
        });
        Ok(id)
    }

    fn add_text_box(&mut self, bounds: Rect) -> Result<ShapeId> {
        let id = self.next_id();
        self.shapes.push(Shape {
            id,
            name: format!("TextBox {}", id - 1),
            bounds,
            body: ShapeBody::TextBox {
                paragraphs: Vec::new(),
            },
        });
        Ok(id)
    }

    fn remove_shape(&mut self, id: ShapeId) -> Result<()> {
        let pos = self.position(id)?;
        self.shapes.remove(pos);
        Ok(())
    }

    fn send_to_back(&mut self, id: ShapeId) -> Result<()> {
        let pos = self.position(id)?;
        let shape = self.shapes.remove(pos);
        self.shapes.insert(0, shape);
        Ok(())
    }

    fn write_text(&mut self, id: ShapeId, paragraphs: Vec<Paragraph>) -> Result<()> {
        let pos = self.position(id)?;
        let shape = &mut self.shapes[pos];
        let name = shape.name.clone();
        let target = shape
            .paragraphs_mut()
            .ok_or_else(|| Error::UnsupportedOperation(format!("{name} has no text frame")))?;
        *target = paragraphs;
        Ok(())
    }
}

/// A deck under construction, saved as a `.pptx` package.
#[derive(Debug, Clone)]
pub struct PptxDeck {
    layouts: Vec<LayoutSpec>,
    width: i64,
    height: i64,
    slides: Vec<PptxSlide>,
}

impl Default for PptxDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl PptxDeck {
    /// Create an empty widescreen deck with the stock layouts.
    pub fn new() -> Self {
        Self::with_layouts(stock_layouts())
    }

    /// Create an empty widescreen deck with a custom layout catalog.
    pub fn with_layouts(layouts: Vec<LayoutSpec>) -> Self {
        Self {
            layouts,
            width: SLIDE_WIDTH,
            height: SLIDE_HEIGHT,
            slides: Vec::new(),
        }
    }

    pub fn layouts(&self) -> &[LayoutSpec] {
        &self.layouts
    }

    pub fn slides(&self) -> &[PptxSlide] {
        &self.slides
    }

    pub fn size(&self) -> (i64, i64) {
        (self.width, self.height)
    }

    /// Serialize the package into memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let cursor = writer::write_package(self, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }
}

impl DeckBackend for PptxDeck {
    type Slide = PptxSlide;

    fn layout_names(&self) -> Vec<String> {
        self.layouts.iter().map(|l| l.name.to_string()).collect()
    }

    fn slide_bounds(&self) -> Rect {
        Rect::at_origin(self.width, self.height)
    }

    fn add_slide(&mut self, layout: Option<usize>) -> Result<usize> {
        let spec = match layout {
            Some(index) => Some(
                self.layouts
                    .get(index)
                    .ok_or_else(|| Error::InvalidLayout(format!("no layout at index {index}")))?,
            ),
            None => None,
        };
        self.slides.push(PptxSlide::from_layout(layout, spec));
        Ok(self.slides.len() - 1)
    }

    fn slide_mut(&mut self, index: usize) -> Result<&mut PptxSlide> {
        self.slides.get_mut(index).ok_or(Error::UnknownSlide(index))
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn save(&self, path: &Path) -> Result<()> {
        let file = BufWriter::new(File::create(path)?);
        writer::write_package(self, file)?.flush()?;
        log::debug!("Wrote {} slide(s) to {}", self.slides.len(), path.display());
        Ok(())
    }
}
