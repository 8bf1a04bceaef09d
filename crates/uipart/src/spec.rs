//! Component specifications and their style configuration.
//!
//! A [`Spec`] is an immutable value object describing one component: its
//! tree, its layered style sheet, and optionally its behavior. Specs are
//! created once by authors and shared; nothing mutates them during
//! rendering.
//!
//! ## Layers
//!
//! Specifications are tiered so that composition stays acyclic by
//! construction:
//!
//! | Layer  | May reference | Styles                        |
//! |--------|---------------|-------------------------------|
//! | `core` | nothing       | `base` map only, no variants  |
//! | `unit` | `core`        | full variant configuration    |
//! | `part` | `core`/`unit` | full variant configuration    |
//!
//! The validator enforces these rules; see [`crate::validator`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::behavior::Behavior;
use crate::node::Node;
use crate::value::PartStyles;

/// The tier a specification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Core,
    Unit,
    Part,
}

impl Layer {
    pub fn name(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Unit => "unit",
            Self::Part => "part",
        }
    }
}

/// A style override that applies only when every condition matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompoundVariant {
    /// Variant name to required value. All must hold simultaneously.
    pub conditions: IndexMap<String, String>,
    pub styles: PartStyles,
}

impl CompoundVariant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(mut self, variant: &str, value: &str) -> Self {
        self.conditions.insert(variant.to_string(), value.to_string());
        self
    }

    pub fn styles(mut self, styles: PartStyles) -> Self {
        self.styles = styles;
        self
    }
}

/// Base, variant, and compound-variant style maps for one specification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub base: PartStyles,
    /// Variant axes in declaration order: name, then value, then the
    /// part styles that value contributes.
    #[serde(default)]
    pub variants: IndexMap<String, IndexMap<String, PartStyles>>,
    #[serde(default)]
    pub default_variants: IndexMap<String, String>,
    #[serde(default)]
    pub compound_variants: Vec<CompoundVariant>,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the base part styles.
    pub fn with_base(mut self, base: PartStyles) -> Self {
        self.base = base;
        self
    }

    /// Builder method to add one variant value's styles.
    pub fn with_variant(mut self, variant: &str, value: &str, styles: PartStyles) -> Self {
        self.variants
            .entry(variant.to_string())
            .or_default()
            .insert(value.to_string(), styles);
        self
    }

    /// Builder method to set a variant's default value.
    pub fn with_default_variant(mut self, variant: &str, value: &str) -> Self {
        self.default_variants
            .insert(variant.to_string(), value.to_string());
        self
    }

    /// Builder method to append a compound variant.
    pub fn with_compound_variant(mut self, compound: CompoundVariant) -> Self {
        self.compound_variants.push(compound);
        self
    }

    /// True when the configuration uses anything beyond the base map.
    pub fn has_variant_config(&self) -> bool {
        !self.variants.is_empty()
            || !self.default_variants.is_empty()
            || !self.compound_variants.is_empty()
    }
}

/// One component specification: tree, styles, behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spec {
    pub layer: Layer,
    /// Unique within a registry.
    pub name: String,
    pub tree: Node,
    #[serde(default)]
    pub styles: Option<StyleConfig>,
    /// Behavior carries action functions, so it is construction-only and
    /// never part of the serialized form.
    #[serde(skip)]
    pub behavior: Option<Behavior>,
    /// Prop names excluded from host-attribute forwarding.
    #[serde(default)]
    pub data_props: Vec<String>,
}

impl Spec {
    pub fn new(layer: Layer, name: &str, tree: Node) -> Self {
        Self {
            layer,
            name: name.to_string(),
            tree,
            styles: None,
            behavior: None,
            data_props: Vec::new(),
        }
    }

    pub fn with_styles(mut self, styles: StyleConfig) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = Some(behavior);
        self
    }

    pub fn with_data_props<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_props = names.into_iter().map(Into::into).collect();
        self
    }

    /// True when the named prop is internal data, not a host attribute.
    pub fn is_data_prop(&self, name: &str) -> bool {
        self.data_props.iter().any(|p| p == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decls, part_styles};

    #[test]
    fn style_config_builder_preserves_declaration_order() {
        let config = StyleConfig::new()
            .with_variant("size", "sm", part_styles! { "root" => decls! { "p" => 4 } })
            .with_variant("size", "lg", part_styles! { "root" => decls! { "p" => 12 } })
            .with_variant("tone", "danger", part_styles! { "root" => decls! { "bg" => "red" } });

        let variant_names: Vec<&str> = config.variants.keys().map(String::as_str).collect();
        assert_eq!(variant_names, ["size", "tone"]);
        let size_values: Vec<&str> = config.variants["size"].keys().map(String::as_str).collect();
        assert_eq!(size_values, ["sm", "lg"]);
    }

    #[test]
    fn compound_variant_builder() {
        let compound = CompoundVariant::new()
            .when("checked", "true")
            .when("disabled", "true")
            .styles(part_styles! { "root" => decls! { "opacity" => 0.4 } });

        assert_eq!(compound.conditions.len(), 2);
        assert_eq!(compound.conditions["checked"], "true");
    }

    #[test]
    fn spec_deserializes_from_json() {
        let spec: Spec = serde_json::from_str(
            r#"{
                "layer": "core",
                "name": "box",
                "tree": { "kind": "element", "tag": "div", "part": "root" },
                "styles": { "base": { "root": { "p": 8, "bg": "white" } } },
                "data_props": ["tone"]
            }"#,
        )
        .unwrap();

        assert_eq!(spec.layer, Layer::Core);
        assert_eq!(spec.name, "box");
        assert!(spec.is_data_prop("tone"));
        let base = &spec.styles.unwrap().base;
        assert_eq!(base["root"]["p"], crate::value::StyleValue::Number(8.0));
    }
}
