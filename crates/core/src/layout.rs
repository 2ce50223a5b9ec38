//! Layout selection by name hint.

/// Position of the "Blank" layout in the stock catalog.
pub const DEFAULT_LAYOUT_INDEX: usize = 6;

/// Picks a slide layout from a catalog given a free-form name hint.
#[derive(Debug, Clone, Copy)]
pub struct LayoutSelector {
    default_index: usize,
}

impl Default for LayoutSelector {
    fn default() -> Self {
        Self {
            default_index: DEFAULT_LAYOUT_INDEX,
        }
    }
}

impl LayoutSelector {
    /// Create a selector falling back to the stock "Blank" layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different fallback position in the catalog.
    pub fn with_default_index(mut self, index: usize) -> Self {
        self.default_index = index;
        self
    }

    /// Return the catalog index to use for `hint`.
    ///
    /// An empty hint or one matching no layout name (case-insensitive
    /// substring, catalog order) yields the default layout. A catalog too
    /// short for the default falls back to its last layout; an empty catalog
    /// yields `None`.
    pub fn select<S: AsRef<str>>(&self, layouts: &[S], hint: &str) -> Option<usize> {
        let hint = hint.trim().to_lowercase();

        if !hint.is_empty() {
            let matched = layouts
                .iter()
                .position(|name| name.as_ref().to_lowercase().contains(&hint));
            if let Some(index) = matched {
                log::debug!("Layout hint {:?} matched {:?}", hint, layouts[index].as_ref());
                return Some(index);
            }
            log::debug!("Layout hint {:?} matched nothing; using default", hint);
        }

        self.default_for(layouts.len())
    }

    fn default_for(&self, len: usize) -> Option<usize> {
        match len {
            0 => None,
            n => Some(self.default_index.min(n - 1)),
        }
    }
}
