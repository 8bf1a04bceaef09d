//! Theme definitions: named value scales for symbolic style resolution.
//!
//! A theme groups concrete CSS values under named scales. Stylesheets and
//! component specifications reference entries symbolically (`$colors.primary`,
//! `sizing.4`) and the token context substitutes the concrete value at
//! resolution time. Scales are plain string tables; the system never
//! interprets the values themselves.
//!
//! | Scale     | Example keys                 | Example values        |
//! |-----------|------------------------------|-----------------------|
//! | `colors`  | `primary`, `surface`, `text` | `#0178d4`, `white`    |
//! | `sizing`  | `1`, `2`, `gutter`           | `4px`, `8px`, `24px`  |
//! | `radius`  | `sm`, `full`                 | `2px`, `9999px`       |
//! | `shadow`  | `sm`, `md`                   | `0 1px 2px rgb(...)`  |
//! | `zIndex`  | `modal`, `toast`             | `1300`, `1400`        |
//! | `fonts`   | `body`, `mono`               | `Inter, sans-serif`   |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single named scale: key to concrete CSS value.
pub type Scale = HashMap<String, String>;

/// The scale categories a token reference can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Colors,
    Sizing,
    Radius,
    Shadow,
    ZIndex,
    Fonts,
}

impl TokenCategory {
    /// Maps a reference category name to a scale. Accepts the canonical
    /// names plus the common spelling variants for the z-index scale.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "colors" => Some(Self::Colors),
            "sizing" => Some(Self::Sizing),
            "radius" => Some(Self::Radius),
            "shadow" => Some(Self::Shadow),
            "zIndex" | "zindex" | "z-index" => Some(Self::ZIndex),
            "fonts" => Some(Self::Fonts),
            _ => None,
        }
    }

    /// The canonical category name, as used in token references.
    pub fn name(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Sizing => "sizing",
            Self::Radius => "radius",
            Self::Shadow => "shadow",
            Self::ZIndex => "zIndex",
            Self::Fonts => "fonts",
        }
    }
}

/// An immutable set of named value scales.
///
/// Themes are built once and shared; extension happens by merging two
/// themes into a new one, never by mutating a shared instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub colors: Scale,
    #[serde(default)]
    pub sizing: Scale,
    #[serde(default)]
    pub radius: Scale,
    #[serde(default)]
    pub shadow: Scale,
    #[serde(default, rename = "zIndex")]
    pub z_index: Scale,
    #[serde(default)]
    pub fonts: Scale,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to populate the color scale.
    pub fn with_colors<K, V, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.colors
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builder method to populate the sizing scale.
    pub fn with_sizing<K, V, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.sizing
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builder method to populate the radius scale.
    pub fn with_radius<K, V, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.radius
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builder method to populate the shadow scale.
    pub fn with_shadow<K, V, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.shadow
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builder method to populate the z-index scale.
    pub fn with_z_index<K, V, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.z_index
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builder method to populate the font scale.
    pub fn with_fonts<K, V, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.fonts
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Returns the scale table for a category.
    pub fn scale(&self, category: TokenCategory) -> &Scale {
        match category {
            TokenCategory::Colors => &self.colors,
            TokenCategory::Sizing => &self.sizing,
            TokenCategory::Radius => &self.radius,
            TokenCategory::Shadow => &self.shadow,
            TokenCategory::ZIndex => &self.z_index,
            TokenCategory::Fonts => &self.fonts,
        }
    }

    /// Looks up a single entry by category and key.
    pub fn get(&self, category: TokenCategory, key: &str) -> Option<&str> {
        self.scale(category).get(key).map(String::as_str)
    }
}

/// Merges an extension theme over a base theme.
///
/// The merge is shallow per scale: entries are combined key-by-key and
/// extension entries replace base entries wholesale. Scales missing from
/// the extension pass through from the base unchanged.
pub fn merge_themes(base: &Theme, extension: &Theme) -> Theme {
    fn merge_scale(base: &Scale, extension: &Scale) -> Scale {
        let mut merged = base.clone();
        for (key, value) in extension {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }

    Theme {
        colors: merge_scale(&base.colors, &extension.colors),
        sizing: merge_scale(&base.sizing, &extension.sizing),
        radius: merge_scale(&base.radius, &extension.radius),
        shadow: merge_scale(&base.shadow, &extension.shadow),
        z_index: merge_scale(&base.z_index, &extension.z_index),
        fonts: merge_scale(&base.fonts, &extension.fonts),
    }
}
