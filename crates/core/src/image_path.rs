//! Resolution of content references to image files.

use std::path::{Path, PathBuf};

/// Extensions tried next to the reference itself, in order.
const SIBLING_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Extensions tried inside the `assets` directory, in order.
const ASSET_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Directory under the root searched as a last resort.
const ASSETS_DIR: &str = "assets";

/// Finds the image file a content reference points at.
///
/// A reference that resolves to nothing is not an error: it means the value
/// is plain text.
#[derive(Debug, Clone)]
pub struct ImagePathResolver {
    root: PathBuf,
}

impl ImagePathResolver {
    /// Create a resolver searching relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `reference`, first match wins:
    ///
    /// 1. `root/reference` as written;
    /// 2. the reference's stem in its own directory, with each of
    ///    `.png .jpg .jpeg .gif .bmp`;
    /// 3. the stem in `root/assets`, with each of `.png .jpg .jpeg`.
    pub fn resolve(&self, reference: &str) -> Option<PathBuf> {
        if reference.is_empty() {
            return None;
        }

        let literal = self.root.join(reference);
        if literal.is_file() {
            return Some(literal);
        }

        let reference = Path::new(reference);
        let stem = reference.file_stem()?;
        let parent = self
            .root
            .join(reference.parent().unwrap_or_else(|| Path::new("")));

        let found = find_with_extensions(&parent, stem, SIBLING_EXTENSIONS).or_else(|| {
            find_with_extensions(&self.root.join(ASSETS_DIR), stem, ASSET_EXTENSIONS)
        });

        match &found {
            Some(path) => log::debug!("Resolved {:?} to {}", reference, path.display()),
            None => log::debug!("No image for {:?}; treating as text", reference),
        }
        found
    }
}

fn find_with_extensions(
    dir: &Path,
    stem: &std::ffi::OsStr,
    extensions: &[&str],
) -> Option<PathBuf> {
    extensions.iter().find_map(|ext| {
        let mut name = stem.to_os_string();
        name.push(".");
        name.push(ext);
        let candidate = dir.join(name);
        candidate.is_file().then_some(candidate)
    })
}
