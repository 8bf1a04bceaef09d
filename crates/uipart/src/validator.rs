//! Structural validation of specifications.
//!
//! Validation is pure: it never mutates, never throws mid-traversal, and
//! always produces the same verdict for the same inputs, so it can run at
//! build time, at registry-population time, or ad hoc in tests. Every
//! problem in a spec set surfaces in one pass as an `{path, message}`
//! issue.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, UipartError};
use crate::node::Node;
use crate::spec::{Layer, Spec};
use crate::value::PartStyles;

/// One validation finding, located by a dotted path into the spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// The aggregated outcome of validating one or many specs.
#[derive(Debug, Clone, Default)]
pub struct Validation {
    pub issues: Vec<Issue>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Converts the outcome into a single aggregated error joining every
    /// issue, for callers that want to fail before any render happens.
    pub fn into_result(self) -> Result<()> {
        if self.issues.is_empty() {
            return Ok(());
        }
        let joined = self
            .issues
            .iter()
            .map(Issue::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Err(UipartError::Invalid(joined))
    }
}

/// Looks up other specifications by name during validation and rendering.
pub trait SpecResolver {
    fn resolve_spec(&self, name: &str) -> Option<&Spec>;
}

/// Validates a single specification.
///
/// Without a resolver, only structural checks run; reference existence
/// and cross-layer legality need the other specs and are skipped.
pub fn validate(spec: &Spec, resolver: Option<&dyn SpecResolver>) -> Validation {
    let mut issues = Vec::new();
    validate_into(spec, resolver, "", &mut issues);
    Validation { issues }
}

/// Validates a set of specifications, prefixing each issue path with the
/// spec's index.
pub fn validate_many<'a, I>(specs: I, resolver: Option<&dyn SpecResolver>) -> Validation
where
    I: IntoIterator<Item = &'a Spec>,
{
    let mut issues = Vec::new();
    for (index, spec) in specs.into_iter().enumerate() {
        validate_into(spec, resolver, &format!("[{index}]."), &mut issues);
    }
    Validation { issues }
}

fn validate_into(
    spec: &Spec,
    resolver: Option<&dyn SpecResolver>,
    prefix: &str,
    issues: &mut Vec<Issue>,
) {
    let mut push = |path: String, message: String| {
        issues.push(Issue {
            path: format!("{prefix}{path}"),
            message,
        });
    };

    if spec.name.is_empty() {
        push("name".to_string(), "specification has no name".to_string());
    }

    let parts: HashSet<&str> = spec.tree.collect_parts().into_iter().collect();

    if let Some(styles) = &spec.styles {
        check_parts(&styles.base, &parts, "styles.base", &mut push);

        for (variant, values) in &styles.variants {
            for (value, part_styles) in values {
                check_parts(
                    part_styles,
                    &parts,
                    &format!("styles.variants.{variant}.{value}"),
                    &mut push,
                );
            }
        }

        for (variant, value) in &styles.default_variants {
            match styles.variants.get(variant) {
                None => push(
                    format!("styles.default_variants.{variant}"),
                    format!("unknown variant `{variant}`"),
                ),
                Some(values) if !values.contains_key(value) => push(
                    format!("styles.default_variants.{variant}"),
                    format!("unknown value `{value}` for variant `{variant}`"),
                ),
                Some(_) => {}
            }
        }

        for (index, compound) in styles.compound_variants.iter().enumerate() {
            for (variant, value) in &compound.conditions {
                match styles.variants.get(variant) {
                    None => push(
                        format!("styles.compound_variants[{index}].conditions.{variant}"),
                        format!("unknown variant `{variant}`"),
                    ),
                    Some(values) if !values.contains_key(value) => push(
                        format!("styles.compound_variants[{index}].conditions.{variant}"),
                        format!("unknown value `{value}` for variant `{variant}`"),
                    ),
                    Some(_) => {}
                }
            }
            check_parts(
                &compound.styles,
                &parts,
                &format!("styles.compound_variants[{index}].styles"),
                &mut push,
            );
        }

        if spec.layer == Layer::Core && styles.has_variant_config() {
            push(
                "styles".to_string(),
                "core-layer styles are limited to a base map".to_string(),
            );
        }
    }

    check_references(spec, resolver, &mut push);
}

fn check_parts(
    styles: &PartStyles,
    parts: &HashSet<&str>,
    path: &str,
    push: &mut impl FnMut(String, String),
) {
    for part in styles.keys() {
        if !parts.contains(part.as_str()) {
            push(
                format!("{path}.{part}"),
                format!("style map addresses unknown part `{part}`"),
            );
        }
    }
}

/// Layer and reference checks over every component node in the tree.
fn check_references(
    spec: &Spec,
    resolver: Option<&dyn SpecResolver>,
    push: &mut impl FnMut(String, String),
) {
    spec.tree.walk(&mut |node| {
        let Node::Component { name, part, .. } = node else {
            return;
        };
        let path = format!("tree.{part}");

        if spec.layer == Layer::Core {
            push(
                path,
                "core-layer tree may not reference other specifications".to_string(),
            );
            return;
        }

        if *name == spec.name {
            push(path, "specification references itself".to_string());
            return;
        }

        let Some(resolver) = resolver else {
            return;
        };
        let Some(target) = resolver.resolve_spec(name) else {
            push(path, format!("unknown component `{name}`"));
            return;
        };

        let legal = match spec.layer {
            Layer::Core => false,
            Layer::Unit => target.layer == Layer::Core,
            Layer::Part => matches!(target.layer, Layer::Core | Layer::Unit),
        };
        if !legal {
            push(
                path,
                format!(
                    "{}-layer specification may not reference {}-layer `{name}`",
                    spec.layer.name(),
                    target.layer.name()
                ),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::StyleConfig;
    use crate::{decls, part_styles};

    fn core_box() -> Spec {
        Spec::new(Layer::Core, "box", Node::element("div", "root")).with_styles(
            StyleConfig::new().with_base(part_styles! { "root" => decls! { "p" => 8 } }),
        )
    }

    #[test]
    fn valid_core_spec_has_no_issues() {
        let outcome = validate(&core_box(), None);
        assert!(outcome.is_valid(), "{:?}", outcome.issues);
    }

    #[test]
    fn missing_name_is_reported() {
        let spec = Spec::new(Layer::Core, "", Node::element("div", "root"));
        let outcome = validate(&spec, None);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].path, "name");
    }

    #[test]
    fn unknown_base_part_is_reported() {
        let spec = Spec::new(Layer::Core, "box", Node::element("div", "root")).with_styles(
            StyleConfig::new().with_base(part_styles! { "header" => decls! { "p" => 8 } }),
        );
        let outcome = validate(&spec, None);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].path, "styles.base.header");
        assert!(outcome.issues[0].message.contains("header"));
    }

    #[test]
    fn core_layer_rejects_variants() {
        let spec = Spec::new(Layer::Core, "box", Node::element("div", "root")).with_styles(
            StyleConfig::new()
                .with_variant("size", "sm", part_styles! { "root" => decls! { "p" => 4 } }),
        );
        let outcome = validate(&spec, None);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].path, "styles");
    }

    #[test]
    fn core_layer_rejects_component_nodes() {
        let tree = Node::element("div", "root")
            .with_children(vec![Node::component("other", "inner")]);
        let spec = Spec::new(Layer::Core, "box", tree);
        let outcome = validate(&spec, None);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].path, "tree.inner");
    }

    #[test]
    fn self_reference_is_reported_without_resolver() {
        let tree = Node::element("div", "root")
            .with_children(vec![Node::component("card", "inner")]);
        let spec = Spec::new(Layer::Unit, "card", tree);
        let outcome = validate(&spec, None);
        assert_eq!(outcome.issues.len(), 1);
        assert!(outcome.issues[0].message.contains("itself"));
    }

    #[test]
    fn default_variant_value_must_exist() {
        let spec = Spec::new(Layer::Unit, "card", Node::element("div", "root")).with_styles(
            StyleConfig::new()
                .with_variant("tone", "neutral", part_styles! { "root" => decls! { "bg" => "white" } })
                .with_default_variant("tone", "loud"),
        );
        let outcome = validate(&spec, None);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].path, "styles.default_variants.tone");
        assert!(outcome.issues[0].message.contains("loud"));
    }

    #[test]
    fn one_pass_reports_every_problem() {
        let spec = Spec::new(Layer::Unit, "card", Node::element("div", "root")).with_styles(
            StyleConfig::new()
                .with_base(part_styles! { "ghost" => decls! { "p" => 8 } })
                .with_default_variant("missing", "x"),
        );
        let outcome = validate(&spec, None);
        assert_eq!(outcome.issues.len(), 2);
    }

    #[test]
    fn into_result_joins_issue_paths() {
        let spec = Spec::new(Layer::Core, "", Node::element("div", "root"));
        let err = validate(&spec, None).into_result().unwrap_err();
        assert!(err.to_string().contains("name: specification has no name"));
    }
}
