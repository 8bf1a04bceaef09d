//! Value types shared across the specification model.
//!
//! Props and style declarations carry heterogeneous values (numbers,
//! strings, booleans for props). Declaration maps preserve insertion
//! order, because variant and compound-variant merging is defined in
//! declaration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A prop value supplied by the caller or stored as component state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Str(String),
}

impl PropValue {
    /// Coerces the value to its string form for variant lookup, so a
    /// boolean prop `true` matches a variant keyed `"true"`.
    pub fn as_key(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Self::Str(s) => s.clone(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A single style declaration value: raw number or CSS string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Str(String),
}

impl StyleValue {
    /// Formats the value as CSS text for a concrete property. Numbers go
    /// through the unitless-property table; strings pass through.
    pub fn to_css(&self, property: &str) -> String {
        match self {
            Self::Number(n) => pcss::style_props::number_to_css(property, *n),
            Self::Str(s) => s.clone(),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Ordered declaration map for one part.
pub type Declarations = IndexMap<String, StyleValue>;

/// Declarations addressed by part name.
pub type PartStyles = IndexMap<String, Declarations>;

/// External props supplied to a component instance.
pub type Props = IndexMap<String, PropValue>;

/// Per-key shallow overwrite; the later value wins outright.
pub fn merge_declarations(target: &mut Declarations, source: &Declarations) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

/// Merges part maps pairwise; parts missing from the target are added.
pub fn merge_part_styles(target: &mut PartStyles, source: &PartStyles) {
    for (part, declarations) in source {
        merge_declarations(target.entry(part.clone()).or_default(), declarations);
    }
}
