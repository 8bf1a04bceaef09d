//! Style resolution: base + variants + compound variants + overrides.
//!
//! The pipeline runs in a strict order; each step merges per part, per
//! declaration key, so later steps override earlier ones outright:
//!
//! 1. the base map
//! 2. each variant in declaration order, selected by prop or default
//! 3. each compound variant in declaration order, when every condition
//!    matches
//! 4. direct caller overrides onto the `root` part, which always win;
//!    this is the one absolute precedence rule in the system

use crate::spec::{Spec, StyleConfig};
use crate::value::{Declarations, PartStyles, PropValue, Props, merge_declarations, merge_part_styles};

/// The part name direct caller overrides merge into.
pub const ROOT_PART: &str = "root";

/// Computes the final per-part declarations for one component instance.
///
/// A spec with no `styles` block still accepts direct overrides onto
/// `root`, so even stylesheet-free specifications stay themeable.
pub fn resolve_part_styles(spec: &Spec, props: &Props, user_style_props: &Declarations) -> PartStyles {
    let mut resolved = PartStyles::new();

    if let Some(styles) = &spec.styles {
        merge_part_styles(&mut resolved, &styles.base);

        for (variant, values) in &styles.variants {
            let Some(active) = active_value(styles, props, variant) else {
                continue;
            };
            if let Some(part_styles) = values.get(&active) {
                log::trace!(
                    "spec `{}`: variant {variant}={active} active",
                    spec.name
                );
                merge_part_styles(&mut resolved, part_styles);
            }
        }

        for compound in &styles.compound_variants {
            let all_match = compound
                .conditions
                .iter()
                .all(|(variant, expected)| {
                    active_value(styles, props, variant).as_deref() == Some(expected.as_str())
                });
            if all_match {
                merge_part_styles(&mut resolved, &compound.styles);
            }
        }
    }

    if !user_style_props.is_empty() {
        let root = resolved.entry(ROOT_PART.to_string()).or_default();
        merge_declarations(root, user_style_props);
    }

    resolved
}

/// The value a variant resolves to: the prop when supplied, otherwise the
/// declared default. Booleans and numbers coerce to their string form so
/// a `true` prop matches a variant keyed `"true"`.
fn active_value(styles: &StyleConfig, props: &Props, variant: &str) -> Option<String> {
    props
        .get(variant)
        .map(PropValue::as_key)
        .or_else(|| styles.default_variants.get(variant).cloned())
}
