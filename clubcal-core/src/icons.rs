//! Category icon lookup.

use crate::event::Category;

pub const DEFAULT_ICONS_PATH: &str = "assets/";
const DEFAULT_ICON_KEY: &str = "default";

/// Resolves icon locations relative to a base path or URL prefix.
#[derive(Debug, Clone)]
pub struct IconSet {
    base: String,
}

impl Default for IconSet {
    fn default() -> Self {
        IconSet::new(DEFAULT_ICONS_PATH)
    }
}

impl IconSet {
    /// `base` is used as a plain prefix, so it normally ends with `/`.
    pub fn new(base: impl Into<String>) -> Self {
        IconSet { base: base.into() }
    }

    /// `icon-{tag}-small.png` for known categories, the default icon otherwise.
    pub fn icon_for(&self, category: &Category) -> String {
        let key = if category.is_known() {
            category.tag()
        } else {
            DEFAULT_ICON_KEY
        };
        format!("{}icon-{}-small.png", self.base, key)
    }
}
