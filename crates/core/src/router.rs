//! Content routing: decides what goes into which region of a slide.
//!
//! Every operation returns a [`Placement`] describing what happened. Shape
//! failures are logged and reported, never propagated, so one broken effect
//! does not stop the rest of the slide from being built.

use crate::backend::SlideSurface;
use crate::color::Rgb;
use crate::fit::{aspect_fit, intrinsic_size};
use crate::image_path::ImagePathResolver;
use crate::regions::{find_body, find_content_regions, find_title};
use crate::shape::{paragraphs_from_lines, Alignment, Paragraph, ShapeId, ShapeInfo};
use crate::style::{StyleConfig, TextStyle};
use crate::types::Rect;
use serde::Serialize;
use std::path::Path;

/// Why an operation placed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The block did not ask for this effect.
    NotRequested,
    /// The reference resolved to no image file.
    ImageNotFound,
    /// The slide has no shape that can take the text.
    NoRegion,
}

/// Outcome of a single placement effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Placement {
    /// Text written into an existing region.
    Text { shape: ShapeId },
    /// Text written into a synthesized text box.
    FallbackText { shape: ShapeId },
    /// A picture inserted at `bounds`. `fitted` is false when the image
    /// was stretched to the full box.
    Image {
        shape: ShapeId,
        bounds: Rect,
        fitted: bool,
    },
    Skipped { reason: SkipReason },
    Failed { reason: String },
}

impl Placement {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    fn failed(reason: impl std::fmt::Display) -> Self {
        Self::Failed {
            reason: reason.to_string(),
        }
    }
}

/// Outcomes of a two-region placement, one per side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoPlacement {
    pub left: Placement,
    pub right: Placement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn fallback_box(self, style: &StyleConfig) -> Rect {
        match self {
            Self::Left => style.left_box,
            Self::Right => style.right_box,
        }
    }
}

/// Cover the slide with the background image and move it behind every
/// other shape. `None` is a silent no-op.
pub fn apply_background<S: SlideSurface>(
    slide: &mut S,
    image: Option<&Path>,
    slide_bounds: Rect,
) -> Placement {
    let Some(path) = image else {
        return Placement::Skipped {
            reason: SkipReason::ImageNotFound,
        };
    };

    let shape = match slide.add_picture(path, slide_bounds) {
        Ok(shape) => shape,
        Err(e) => {
            log::warn!("Background {} not applied: {}", path.display(), e);
            return Placement::failed(e);
        }
    };

    if let Err(e) = slide.send_to_back(shape) {
        log::warn!("Background left in front of other shapes: {}", e);
    }

    Placement::Image {
        shape,
        bounds: slide_bounds,
        fitted: false,
    }
}

/// Write the title into the slide's title region.
pub fn set_title<S: SlideSurface>(
    slide: &mut S,
    title: &str,
    color: Option<Rgb>,
    style: &StyleConfig,
) -> Placement {
    if title.is_empty() {
        return Placement::Skipped {
            reason: SkipReason::NotRequested,
        };
    }

    let shapes = slide.shapes();
    let Some(region) = find_title(&shapes) else {
        log::debug!("No title region; title {:?} dropped", title);
        return Placement::Skipped {
            reason: SkipReason::NoRegion,
        };
    };

    let paragraph =
        Paragraph::single(title, &style.title.font(color)).with_alignment(Alignment::Left);
    match slide.write_text(region.id, vec![paragraph]) {
        Ok(()) => Placement::Text { shape: region.id },
        Err(e) => {
            log::warn!("Title not written to {:?}: {}", region.name, e);
            Placement::failed(e)
        }
    }
}

/// Write single-region body text, one paragraph per line.
///
/// Uses the first text-capable shape that is not the title, or a text box
/// at the configured body position when there is none. Blank text leaves
/// the slide untouched.
pub fn place_body<S: SlideSurface>(
    slide: &mut S,
    text: &str,
    color: Option<Rgb>,
    style: &StyleConfig,
) -> Placement {
    if text.trim().is_empty() {
        return Placement::Skipped {
            reason: SkipReason::NotRequested,
        };
    }

    let shapes = slide.shapes();
    let region = find_body(&shapes);
    fill_text(slide, region, style.body_box, text, &style.body, color)
}

/// Fill the left and right content regions independently.
///
/// A value that resolves to an image replaces its region with an
/// aspect-fit picture; anything else becomes text. Missing regions are
/// compensated with text boxes at fixed side positions.
pub fn place_two<S: SlideSurface>(
    slide: &mut S,
    left: &str,
    right: &str,
    color: Option<Rgb>,
    style: &StyleConfig,
    images: &ImagePathResolver,
) -> TwoPlacement {
    let shapes = slide.shapes();
    let regions = find_content_regions(&shapes);
    log::debug!(
        "Content regions: left={:?} right={:?}",
        regions.left.map(|s| &s.name),
        regions.right.map(|s| &s.name)
    );

    let left = place_side(slide, Side::Left, left, regions.left, color, style, images);
    let right = place_side(slide, Side::Right, right, regions.right, color, style, images);
    TwoPlacement { left, right }
}

fn place_side<S: SlideSurface>(
    slide: &mut S,
    side: Side,
    value: &str,
    mut region: Option<&ShapeInfo>,
    color: Option<Rgb>,
    style: &StyleConfig,
    images: &ImagePathResolver,
) -> Placement {
    if let Some(path) = images.resolve(value) {
        match place_image(slide, side, &path, region, style) {
            Ok(placement) => return placement,
            Err(removed) => {
                if removed {
                    region = None;
                }
            }
        }
    }

    fill_text(slide, region, side.fallback_box(style), value, &style.column, color)
}

/// Replace `region` with a picture. On failure, reports whether the region
/// was already removed.
fn place_image<S: SlideSurface>(
    slide: &mut S,
    side: Side,
    path: &Path,
    region: Option<&ShapeInfo>,
    style: &StyleConfig,
) -> std::result::Result<Placement, bool> {
    let bounds = region
        .and_then(|r| r.bounds)
        .unwrap_or_else(|| side.fallback_box(style));
    let size = intrinsic_size(path);
    let target = aspect_fit(bounds, size);

    if let Some(region) = region {
        if let Err(e) = slide.remove_shape(region.id) {
            log::warn!("Cannot replace {:?} with an image: {}", region.name, e);
            return Err(false);
        }
    }

    match slide.add_picture(path, target) {
        Ok(shape) => Ok(Placement::Image {
            shape,
            bounds: target,
            fitted: size.is_some(),
        }),
        Err(e) => {
            log::warn!("Image {} not placed ({:?}): {}", path.display(), side, e);
            Err(region.is_some())
        }
    }
}

/// Write text into `region` if it takes text, otherwise into a new text box.
fn fill_text<S: SlideSurface>(
    slide: &mut S,
    region: Option<&ShapeInfo>,
    fallback: Rect,
    text: &str,
    text_style: &TextStyle,
    color: Option<Rgb>,
) -> Placement {
    let paragraphs = paragraphs_from_lines(text, &text_style.font(color));

    if let Some(region) = region.filter(|r| r.supports_text()) {
        match slide.write_text(region.id, paragraphs.clone()) {
            Ok(()) => return Placement::Text { shape: region.id },
            Err(e) => log::warn!("Text not written to {:?}: {}", region.name, e),
        }
    }

    let shape = match slide.add_text_box(fallback) {
        Ok(shape) => shape,
        Err(e) => {
            log::warn!("Fallback text box not created: {}", e);
            return Placement::failed(e);
        }
    };
    match slide.write_text(shape, paragraphs) {
        Ok(()) => Placement::FallbackText { shape },
        Err(e) => {
            log::warn!("Fallback text box not written: {}", e);
            if let Err(remove) = slide.remove_shape(shape) {
                log::warn!("Empty fallback text box left on slide: {}", remove);
            }
            Placement::failed(e)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shape::{PlaceholderRole, ShapeKind};
    use crate::{Error, Result};
    use std::collections::HashSet;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Slide double recording every shape and the text written to it.
    #[derive(Debug, Default)]
    pub(crate) struct FakeSlide {
        pub shapes: Vec<(ShapeInfo, Vec<Paragraph>)>,
        pub pictures: Vec<(ShapeId, PathBuf)>,
        pub next_id: ShapeId,
        pub failing: HashSet<&'static str>,
    }

    impl FakeSlide {
        pub fn with_shapes(shapes: Vec<ShapeInfo>) -> Self {
            let next_id = shapes.iter().map(|s| s.id).max().unwrap_or(1) + 1;
            Self {
                shapes: shapes.into_iter().map(|s| (s, Vec::new())).collect(),
                next_id,
                ..Self::default()
            }
        }

        pub fn fail(mut self, op: &'static str) -> Self {
            self.failing.insert(op);
            self
        }

        fn check(&self, op: &'static str) -> Result<()> {
            if self.failing.contains(op) {
                Err(Error::UnsupportedOperation(op.to_string()))
            } else {
                Ok(())
            }
        }

        fn push(&mut self, name: &str, bounds: Rect, kind: ShapeKind) -> ShapeId {
            let id = self.next_id;
            self.next_id += 1;
            let info = ShapeInfo {
                id,
                name: format!("{name} {}", id - 1),
                bounds: Some(bounds),
                kind,
            };
            self.shapes.push((info, Vec::new()));
            id
        }

        pub fn get(&self, id: ShapeId) -> Option<&(ShapeInfo, Vec<Paragraph>)> {
            self.shapes.iter().find(|(s, _)| s.id == id)
        }

        pub fn text_of(&self, id: ShapeId) -> Vec<String> {
            self.get(id)
                .map(|(_, p)| p.iter().map(Paragraph::text).collect())
                .unwrap_or_default()
        }
    }

    impl SlideSurface for FakeSlide {
        fn shapes(&self) -> Vec<ShapeInfo> {
            self.shapes.iter().map(|(s, _)| s.clone()).collect()
        }

        fn add_picture(&mut self, path: &Path, bounds: Rect) -> Result<ShapeId> {
            self.check("add_picture")?;
            let id = self.push("Picture", bounds, ShapeKind::Picture);
            self.pictures.push((id, path.to_path_buf()));
            Ok(id)
        }

        fn add_text_box(&mut self, bounds: Rect) -> Result<ShapeId> {
            self.check("add_text_box")?;
            Ok(self.push(
                "TextBox",
                bounds,
                ShapeKind::TextBox {
                    text: String::new(),
                },
            ))
        }

        fn remove_shape(&mut self, id: ShapeId) -> Result<()> {
            self.check("remove_shape")?;
            let before = self.shapes.len();
            self.shapes.retain(|(s, _)| s.id != id);
            if self.shapes.len() == before {
                return Err(Error::UnknownShape(id));
            }
            Ok(())
        }

        fn send_to_back(&mut self, id: ShapeId) -> Result<()> {
            self.check("send_to_back")?;
            let pos = self
                .shapes
                .iter()
                .position(|(s, _)| s.id == id)
                .ok_or(Error::UnknownShape(id))?;
            let shape = self.shapes.remove(pos);
            self.shapes.insert(0, shape);
            Ok(())
        }

        fn write_text(&mut self, id: ShapeId, paragraphs: Vec<Paragraph>) -> Result<()> {
            self.check("write_text")?;
            let (info, stored) = self
                .shapes
                .iter_mut()
                .find(|(s, _)| s.id == id)
                .ok_or(Error::UnknownShape(id))?;
            let joined = paragraphs.iter().map(Paragraph::text).collect::<Vec<_>>().join("\n");
            match &mut info.kind {
                ShapeKind::Placeholder { text: Some(text), .. } | ShapeKind::TextBox { text } => {
                    *text = joined;
                }
                _ => return Err(Error::UnsupportedOperation("no text frame".into())),
            }
            *stored = paragraphs;
            Ok(())
        }
    }

    pub(crate) fn placeholder(id: ShapeId, role: PlaceholderRole, bounds: Rect) -> ShapeInfo {
        ShapeInfo {
            id,
            name: format!("Placeholder {}", id - 1),
            bounds: Some(bounds),
            kind: ShapeKind::Placeholder {
                role,
                text: Some(String::new()),
            },
        }
    }

    fn two_content_slide() -> FakeSlide {
        FakeSlide::with_shapes(vec![
            placeholder(2, PlaceholderRole::Title, Rect::new(0, 0, 8000, 1000)),
            placeholder(3, PlaceholderRole::Body, Rect::new(0, 2000, 4000, 4000)),
            placeholder(4, PlaceholderRole::Body, Rect::new(4000, 2000, 4000, 4000)),
        ])
    }

    fn png(dir: &Path, name: &str, w: u32, h: u32) -> PathBuf {
        let path = dir.join(name);
        image::RgbImage::new(w, h).save(&path).unwrap();
        path
    }

    #[test]
    fn test_background_goes_to_back() {
        let dir = TempDir::new().unwrap();
        let bg = png(dir.path(), "bg.png", 2, 2);
        let mut slide = two_content_slide();
        let full = Rect::at_origin(12_192_000, 6_858_000);

        let placement = apply_background(&mut slide, Some(&bg), full);
        let Placement::Image { shape, bounds, .. } = placement else {
            panic!("expected image, got {placement:?}");
        };
        assert_eq!(bounds, full);
        let order: Vec<ShapeId> = slide.shapes().iter().map(|s| s.id).collect();
        assert_eq!(order, vec![shape, 2, 3, 4]);
    }

    #[test]
    fn test_background_absent_is_noop() {
        let mut slide = two_content_slide();
        let placement = apply_background(&mut slide, None, Rect::at_origin(1, 1));
        assert!(matches!(placement, Placement::Skipped { .. }));
        assert_eq!(slide.shapes().len(), 3);
    }

    #[test]
    fn test_background_reorder_failure_keeps_picture() {
        let dir = TempDir::new().unwrap();
        let bg = png(dir.path(), "bg.png", 2, 2);
        let mut slide = two_content_slide().fail("send_to_back");
        let placement = apply_background(&mut slide, Some(&bg), Rect::at_origin(10, 10));
        assert!(matches!(placement, Placement::Image { .. }));
        assert_eq!(slide.shapes().len(), 4);
    }

    #[test]
    fn test_title_style() {
        let mut slide = two_content_slide();
        let style = StyleConfig::default();
        let placement = set_title(&mut slide, "Welcome", None, &style);
        assert_eq!(placement, Placement::Text { shape: 2 });

        let (_, paragraphs) = slide.get(2).unwrap();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].alignment, Some(Alignment::Left));
        let font = &paragraphs[0].runs[0].font;
        assert_eq!(font.size_pt, 32.0);
        assert!(font.bold);
        assert_eq!(font.family, "Tenorite");
        assert_eq!(font.color, Some(Rgb::new(50, 50, 50)));
    }

    #[test]
    fn test_title_without_region() {
        let mut slide = FakeSlide::with_shapes(Vec::new());
        let placement = set_title(&mut slide, "Lost", None, &StyleConfig::default());
        assert_eq!(
            placement,
            Placement::Skipped {
                reason: SkipReason::NoRegion
            }
        );
        assert!(slide.shapes().is_empty());
    }

    #[test]
    fn test_body_into_placeholder() {
        let mut slide = two_content_slide();
        let red = Rgb::new(255, 0, 0);
        let placement = place_body(&mut slide, " one \n two", Some(red), &StyleConfig::default());
        assert_eq!(placement, Placement::Text { shape: 3 });
        assert_eq!(slide.text_of(3), vec!["one", "two"]);
        let (_, paragraphs) = slide.get(3).unwrap();
        assert!(paragraphs
            .iter()
            .flat_map(|p| &p.runs)
            .all(|r| r.font.color == Some(red) && r.font.size_pt == 18.0));
    }

    #[test]
    fn test_body_synthesizes_box() {
        let mut slide = FakeSlide::with_shapes(Vec::new());
        let style = StyleConfig::default();
        let placement = place_body(&mut slide, "hello", None, &style);
        let Placement::FallbackText { shape } = placement else {
            panic!("expected fallback, got {placement:?}");
        };
        let (info, _) = slide.get(shape).unwrap();
        assert_eq!(info.bounds, Some(style.body_box));
        assert_eq!(slide.text_of(shape), vec!["hello"]);
    }

    #[test]
    fn test_body_write_failure_reported() {
        let mut slide = two_content_slide().fail("write_text");
        let placement = place_body(&mut slide, "x", None, &StyleConfig::default());
        assert!(placement.is_failed());
        let ids: Vec<ShapeId> = slide.shapes().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_blank_body_is_noop() {
        let style = StyleConfig::default();
        for text in ["", "  \n\t"] {
            let mut empty = FakeSlide::with_shapes(Vec::new());
            let placement = place_body(&mut empty, text, None, &style);
            assert_eq!(
                placement,
                Placement::Skipped {
                    reason: SkipReason::NotRequested
                }
            );
            assert!(empty.shapes().is_empty());

            let mut slide = two_content_slide();
            slide.write_text(3, vec![Paragraph::single("keep", &style.body.font(None))]).unwrap();
            place_body(&mut slide, text, None, &style);
            assert_eq!(slide.text_of(3), vec!["keep"]);
        }
    }

    #[test]
    fn test_two_image_left_text_right() {
        let dir = TempDir::new().unwrap();
        png(dir.path(), "chart.png", 200, 100);
        let images = ImagePathResolver::new(dir.path());
        let mut slide = two_content_slide();

        let result = place_two(
            &mut slide,
            "chart",
            "Point A\nPoint B",
            None,
            &StyleConfig::default(),
            &images,
        );

        let Placement::Image { shape, bounds, fitted } = result.left else {
            panic!("expected image, got {:?}", result.left);
        };
        assert!(fitted);
        assert_eq!(bounds, Rect::new(0, 3000, 4000, 2000));
        assert!(slide.get(3).is_none(), "placeholder must be replaced");
        assert_eq!(slide.pictures[0], (shape, dir.path().join("chart.png")));

        assert_eq!(result.right, Placement::Text { shape: 4 });
        assert_eq!(slide.text_of(4), vec!["Point A", "Point B"]);
        let (_, paragraphs) = slide.get(4).unwrap();
        assert_eq!(paragraphs[0].runs[0].font.size_pt, 14.0);
    }

    #[test]
    fn test_two_missing_right_region() {
        let dir = TempDir::new().unwrap();
        png(dir.path(), "photo.png", 100, 100);
        let images = ImagePathResolver::new(dir.path());
        let style = StyleConfig::default();
        let mut slide = FakeSlide::with_shapes(vec![
            placeholder(2, PlaceholderRole::Title, Rect::new(0, 0, 8000, 1000)),
            placeholder(3, PlaceholderRole::Object, Rect::new(0, 2000, 4000, 2000)),
        ]);

        let result = place_two(&mut slide, "photo", "Caption", None, &style, &images);

        assert!(matches!(result.left, Placement::Image { fitted: true, .. }));
        let Placement::FallbackText { shape } = result.right else {
            panic!("expected fallback, got {:?}", result.right);
        };
        assert_eq!(slide.get(shape).unwrap().0.bounds, Some(style.right_box));
        assert_eq!(slide.text_of(shape), vec!["Caption"]);
    }

    #[test]
    fn test_two_without_regions() {
        let dir = TempDir::new().unwrap();
        let images = ImagePathResolver::new(dir.path());
        let style = StyleConfig::default();
        let mut slide = FakeSlide::with_shapes(Vec::new());

        let result = place_two(&mut slide, "left words", "", None, &style, &images);

        let Placement::FallbackText { shape: left } = result.left else {
            panic!("expected fallback, got {:?}", result.left);
        };
        let Placement::FallbackText { shape: right } = result.right else {
            panic!("expected fallback, got {:?}", result.right);
        };
        assert_eq!(slide.get(left).unwrap().0.bounds, Some(style.left_box));
        assert_eq!(slide.get(right).unwrap().0.bounds, Some(style.right_box));
        assert!(slide.text_of(right).is_empty());
    }

    #[test]
    fn test_image_without_region_uses_side_box() {
        let dir = TempDir::new().unwrap();
        png(dir.path(), "wide.png", 400, 100);
        let images = ImagePathResolver::new(dir.path());
        let style = StyleConfig::default();
        let mut slide = FakeSlide::with_shapes(Vec::new());

        let result = place_two(&mut slide, "", "wide", None, &style, &images);

        let Placement::Image { bounds, .. } = result.right else {
            panic!("expected image, got {:?}", result.right);
        };
        let fallback = style.right_box;
        assert_eq!(bounds.left, fallback.left);
        assert_eq!(bounds.width, fallback.width);
        assert!(bounds.top > fallback.top);
    }

    #[test]
    fn test_failed_picture_falls_back_to_text() {
        let dir = TempDir::new().unwrap();
        png(dir.path(), "chart.png", 10, 10);
        let images = ImagePathResolver::new(dir.path());
        let style = StyleConfig::default();
        let mut slide = two_content_slide().fail("add_picture");

        let result = place_two(&mut slide, "chart", "right side", None, &style, &images);

        // The left placeholder is already gone, so the reference lands in a box.
        let Placement::FallbackText { shape } = result.left else {
            panic!("expected fallback, got {:?}", result.left);
        };
        assert_eq!(slide.text_of(shape), vec!["chart"]);
        assert_eq!(result.right, Placement::Text { shape: 4 });
    }

    #[test]
    fn test_unremovable_region_gets_text_not_overlay() {
        let dir = TempDir::new().unwrap();
        png(dir.path(), "chart.png", 10, 10);
        let images = ImagePathResolver::new(dir.path());
        let mut slide = two_content_slide().fail("remove_shape");

        let result = place_two(&mut slide, "chart", "", None, &StyleConfig::default(), &images);

        assert_eq!(result.left, Placement::Text { shape: 3 });
        assert!(slide.pictures.is_empty());
    }

    #[test]
    fn test_non_text_placeholder_gets_fallback_box() {
        let dir = TempDir::new().unwrap();
        let images = ImagePathResolver::new(dir.path());
        let style = StyleConfig::default();
        let mut slide = FakeSlide::with_shapes(vec![ShapeInfo {
            id: 2,
            name: "Media".to_string(),
            bounds: Some(Rect::new(0, 0, 10, 10)),
            kind: ShapeKind::Placeholder {
                role: PlaceholderRole::Picture,
                text: None,
            },
        }]);

        let result = place_two(&mut slide, "words", "more", None, &style, &images);

        assert!(matches!(result.left, Placement::FallbackText { .. }));
        assert!(matches!(result.right, Placement::FallbackText { .. }));
    }
}
