//! Per-block slide construction.
//!
//! Each block walks `parsed → layout-selected → slide-created →
//! background-applied → title-set → content-applied → done`. A failing step
//! is recorded in the block's [`SlideReport`] and the next step runs anyway.

use crate::backend::{DeckBackend, SlideSurface};
use crate::color::parse_color;
use crate::image_path::ImagePathResolver;
use crate::layout::LayoutSelector;
use crate::router::{self, Placement, SkipReason, TwoPlacement};
use crate::style::StyleConfig;
use crate::types::{Block, BlockBody, Document, Rect};
use serde::Serialize;
use std::path::PathBuf;

/// Steps of building one slide, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Parsed,
    LayoutSelected,
    SlideCreated,
    BackgroundApplied,
    TitleSet,
    ContentApplied,
    Done,
}

/// What happened to a block's body content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentReport {
    None,
    Single { placement: Placement },
    Two { placement: TwoPlacement },
}

/// Outcome of building one slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideReport {
    /// Zero-based position of the block (and slide).
    pub index: usize,
    /// Name of the layout the slide was created from.
    pub layout: Option<String>,
    /// Last stage the block reached.
    pub stage: Stage,
    pub background: Placement,
    pub title: Placement,
    pub content: ContentReport,
}

impl SlideReport {
    fn new(index: usize) -> Self {
        let not_run = Placement::Skipped {
            reason: SkipReason::NotRequested,
        };
        Self {
            index,
            layout: None,
            stage: Stage::Parsed,
            background: not_run.clone(),
            title: not_run,
            content: ContentReport::None,
        }
    }

    fn advance(&mut self, stage: Stage) {
        log::debug!("Slide {}: {:?}", self.index + 1, stage);
        self.stage = stage;
    }

    /// Number of effects on this slide that failed.
    pub fn failures(&self) -> usize {
        let content = match &self.content {
            ContentReport::None => 0,
            ContentReport::Single { placement } => placement.is_failed() as usize,
            ContentReport::Two { placement } => {
                placement.left.is_failed() as usize + placement.right.is_failed() as usize
            }
        };
        self.background.is_failed() as usize + self.title.is_failed() as usize + content
    }
}

/// Outcome of a whole generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationReport {
    pub slides: Vec<SlideReport>,
}

impl GenerationReport {
    pub fn failures(&self) -> usize {
        self.slides.iter().map(SlideReport::failures).sum()
    }
}

/// Builds one slide per block on a [`DeckBackend`].
#[derive(Debug, Clone)]
pub struct DeckGenerator {
    images: ImagePathResolver,
    layouts: LayoutSelector,
    style: StyleConfig,
}

impl DeckGenerator {
    /// Create a generator resolving images relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            images: ImagePathResolver::new(root),
            layouts: LayoutSelector::new(),
            style: StyleConfig::default(),
        }
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    pub fn with_layout_selector(mut self, layouts: LayoutSelector) -> Self {
        self.layouts = layouts;
        self
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Append one slide per block to `deck`, in document order.
    pub fn generate<B: DeckBackend>(&self, document: &Document, deck: &mut B) -> GenerationReport {
        let layout_names = deck.layout_names();
        let slide_bounds = deck.slide_bounds();

        let slides = document
            .iter()
            .enumerate()
            .map(|(index, block)| self.build_slide(index, block, deck, &layout_names, slide_bounds))
            .collect();

        GenerationReport { slides }
    }

    fn build_slide<B: DeckBackend>(
        &self,
        index: usize,
        block: &Block,
        deck: &mut B,
        layout_names: &[String],
        slide_bounds: Rect,
    ) -> SlideReport {
        let mut report = SlideReport::new(index);

        let layout = self.layouts.select(layout_names, block.slide_layout());
        report.layout = layout.and_then(|i| layout_names.get(i).cloned());
        report.advance(Stage::LayoutSelected);

        let created = deck.add_slide(layout).or_else(|e| {
            log::warn!("Slide {} layout unusable ({}); using an empty slide", index + 1, e);
            report.layout = None;
            deck.add_slide(None)
        });
        let slide = match created {
            Ok(id) => deck.slide_mut(id),
            Err(e) => Err(e),
        };
        let slide = match slide {
            Ok(slide) => slide,
            Err(e) => {
                log::warn!("Slide {} could not be created: {}", index + 1, e);
                return report;
            }
        };
        report.advance(Stage::SlideCreated);

        self.fill_slide(slide, block, slide_bounds, &mut report);
        report.advance(Stage::Done);
        report
    }

    fn fill_slide<S: SlideSurface>(
        &self,
        slide: &mut S,
        block: &Block,
        slide_bounds: Rect,
        report: &mut SlideReport,
    ) {
        if let Some(reference) = block.slide_bg() {
            let image = self.images.resolve(reference);
            report.background = router::apply_background(slide, image.as_deref(), slide_bounds);
        }
        report.advance(Stage::BackgroundApplied);

        let color = block.font_color().and_then(parse_color);

        if let Some(title) = block.title() {
            report.title = router::set_title(slide, title, color, &self.style);
        }
        report.advance(Stage::TitleSet);

        report.content = match block.body() {
            BlockBody::Empty => ContentReport::None,
            BlockBody::Single(text) => ContentReport::Single {
                placement: router::place_body(slide, text, color, &self.style),
            },
            BlockBody::Two { left, right } => ContentReport::Two {
                placement: router::place_two(slide, left, right, color, &self.style, &self.images),
            },
        };
        report.advance(Stage::ContentApplied);
    }
}
