//! Aspect-fit of images into region bounds.

use crate::types::Rect;
use std::path::Path;

/// Intrinsic pixel size of an image, if it can be read.
pub fn intrinsic_size(path: &Path) -> Option<(u32, u32)> {
    match image::image_dimensions(path) {
        Ok(size) => Some(size),
        Err(e) => {
            log::debug!("Cannot read size of {}: {}", path.display(), e);
            None
        }
    }
}

/// Largest rectangle with the image's aspect ratio that fits in `bounds`,
/// centered on both axes.
///
/// Without a usable intrinsic size the image simply fills `bounds`.
pub fn aspect_fit(bounds: Rect, image_size: Option<(u32, u32)>) -> Rect {
    let Some((img_w, img_h)) = image_size.filter(|&(w, h)| w > 0 && h > 0) else {
        return bounds;
    };

    let img_ratio = img_w as f64 / img_h as f64;
    let box_ratio = if bounds.height != 0 {
        bounds.width as f64 / bounds.height as f64
    } else {
        1.0
    };

    let (width, height) = if box_ratio > img_ratio {
        ((bounds.height as f64 * img_ratio) as i64, bounds.height)
    } else {
        (bounds.width, (bounds.width as f64 / img_ratio) as i64)
    };

    Rect::new(
        bounds.left + ((bounds.width - width) / 2).max(0),
        bounds.top + ((bounds.height - height) / 2).max(0),
        width,
        height,
    )
}
