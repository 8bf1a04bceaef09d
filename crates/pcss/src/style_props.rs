//! Static CSS knowledge tables: shorthand expansion and numeric formatting.
//!
//! Specification authors write compact declaration keys (`p`, `bg`, `size`)
//! that expand to one or more concrete CSS properties before registration.
//! The tables here are fixed at compile time; everything dynamic lives in
//! the theme.

use phf::{phf_map, phf_set};

use crate::theme::TokenCategory;

/// Shorthand declaration keys and the CSS properties they expand to.
static SHORTHANDS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "p" => &["padding"],
    "pt" => &["padding-top"],
    "pr" => &["padding-right"],
    "pb" => &["padding-bottom"],
    "pl" => &["padding-left"],
    "px" => &["padding-left", "padding-right"],
    "py" => &["padding-top", "padding-bottom"],
    "m" => &["margin"],
    "mt" => &["margin-top"],
    "mr" => &["margin-right"],
    "mb" => &["margin-bottom"],
    "ml" => &["margin-left"],
    "mx" => &["margin-left", "margin-right"],
    "my" => &["margin-top", "margin-bottom"],
    "bg" => &["background-color"],
    "fg" => &["color"],
    "w" => &["width"],
    "h" => &["height"],
    "size" => &["width", "height"],
    "min-w" => &["min-width"],
    "min-h" => &["min-height"],
    "max-w" => &["max-width"],
    "max-h" => &["max-height"],
    "rounded" => &["border-radius"],
    "shadow" => &["box-shadow"],
    "z" => &["z-index"],
    "gap" => &["gap"],
};

/// CSS properties whose numeric values carry no unit.
static UNITLESS: phf::Set<&'static str> = phf_set! {
    "z-index",
    "opacity",
    "flex",
    "flex-grow",
    "flex-shrink",
    "font-weight",
    "line-height",
    "order",
    "zoom",
};

/// Token scale category implied by a concrete CSS property, used by
/// renderers to pick the right resolution chain per declaration.
static PROPERTY_CATEGORIES: phf::Map<&'static str, TokenCategory> = phf_map! {
    "color" => TokenCategory::Colors,
    "background-color" => TokenCategory::Colors,
    "border-color" => TokenCategory::Colors,
    "outline-color" => TokenCategory::Colors,
    "width" => TokenCategory::Sizing,
    "height" => TokenCategory::Sizing,
    "min-width" => TokenCategory::Sizing,
    "min-height" => TokenCategory::Sizing,
    "max-width" => TokenCategory::Sizing,
    "max-height" => TokenCategory::Sizing,
    "padding" => TokenCategory::Sizing,
    "padding-top" => TokenCategory::Sizing,
    "padding-right" => TokenCategory::Sizing,
    "padding-bottom" => TokenCategory::Sizing,
    "padding-left" => TokenCategory::Sizing,
    "margin" => TokenCategory::Sizing,
    "margin-top" => TokenCategory::Sizing,
    "margin-right" => TokenCategory::Sizing,
    "margin-bottom" => TokenCategory::Sizing,
    "margin-left" => TokenCategory::Sizing,
    "gap" => TokenCategory::Sizing,
    "border-radius" => TokenCategory::Radius,
    "box-shadow" => TokenCategory::Shadow,
    "z-index" => TokenCategory::ZIndex,
    "font-family" => TokenCategory::Fonts,
};

/// Expands a shorthand key to its CSS properties, or `None` when the key
/// is already a concrete property.
pub fn expand(key: &str) -> Option<&'static [&'static str]> {
    SHORTHANDS.get(key).copied()
}

/// Returns true if numeric values for this property are written without a
/// unit suffix.
pub fn is_unitless(property: &str) -> bool {
    UNITLESS.contains(property)
}

/// Returns the token scale category a property's values resolve through.
pub fn token_category(property: &str) -> Option<TokenCategory> {
    PROPERTY_CATEGORIES.get(property).copied()
}

/// Formats a numeric declaration value for a property.
///
/// Zero stays unitless; unitless properties never get a suffix; everything
/// else becomes a pixel length. Whole numbers print without a fraction.
pub fn number_to_css(property: &str, value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let number = if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    };
    if is_unitless(property) {
        number
    } else {
        format!("{number}px")
    }
}

/// Returns true when a declaration must be inlined on the host element
/// rather than registered as an atomic class.
///
/// Custom-property names and variable-dependent values are not stable
/// cache keys across instances, so they never enter the registry.
pub fn must_inline(property: &str, value: &str) -> bool {
    property.starts_with("--") || value.contains("var(")
}
