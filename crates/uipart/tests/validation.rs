//! Integration tests for cross-spec validation: layer rules, reference
//! resolution, and fixture-driven registry population.

use uipart::{Layer, Node, Spec, SpecRegistry, StyleConfig, decls, part_styles, validate_many};

fn core(name: &str) -> Spec {
    Spec::new(Layer::Core, name, Node::element("div", "root"))
}

fn referencing(layer: Layer, name: &str, target: &str) -> Spec {
    Spec::new(
        layer,
        name,
        Node::element("div", "root").with_children(vec![Node::component(target, "inner")]),
    )
}

#[test]
fn unit_referencing_part_is_one_identifying_issue() {
    let mut registry = SpecRegistry::new();
    registry
        .register_all([
            core("box"),
            referencing(Layer::Part, "page", "box"),
            referencing(Layer::Unit, "card", "page"),
        ])
        .unwrap();

    let outcome = registry.validate();
    assert_eq!(outcome.issues.len(), 1);
    let issue = &outcome.issues[0];
    assert_eq!(issue.path, "[2].tree.inner");
    assert!(issue.message.contains("unit-layer"));
    assert!(issue.message.contains("part-layer"));
    assert!(issue.message.contains("page"));
}

#[test]
fn part_referencing_part_fails() {
    let mut registry = SpecRegistry::new();
    registry
        .register_all([
            core("box"),
            referencing(Layer::Part, "page", "box"),
            referencing(Layer::Part, "screen", "page"),
        ])
        .unwrap();

    let outcome = registry.validate();
    assert_eq!(outcome.issues.len(), 1);
    assert!(outcome.issues[0].message.contains("part-layer"));
}

#[test]
fn part_referencing_unit_and_core_is_legal() {
    let mut registry = SpecRegistry::new();
    let page = Spec::new(
        Layer::Part,
        "page",
        Node::element("main", "root").with_children(vec![
            Node::component("box", "frame"),
            Node::component("card", "body"),
        ]),
    );
    registry
        .register_all([core("box"), referencing(Layer::Unit, "card", "box"), page])
        .unwrap();

    assert!(registry.validate().is_valid());
}

#[test]
fn unresolved_reference_is_reported_with_resolver() {
    let mut registry = SpecRegistry::new();
    registry
        .register(referencing(Layer::Unit, "card", "ghost"))
        .unwrap();

    let outcome = registry.validate();
    assert_eq!(outcome.issues.len(), 1);
    assert!(outcome.issues[0].message.contains("unknown component `ghost`"));
}

#[test]
fn structural_only_validation_skips_reference_checks() {
    let specs = [referencing(Layer::Unit, "card", "ghost")];
    let outcome = validate_many(&specs, None);
    assert!(outcome.is_valid());
}

#[test]
fn validate_many_prefixes_paths_with_spec_index() {
    let specs = [
        core("box"),
        Spec::new(Layer::Unit, "", Node::element("div", "root")),
        Spec::new(Layer::Unit, "card", Node::element("div", "root")).with_styles(
            StyleConfig::new().with_base(part_styles! { "ghost" => decls! { "p" => 4 } }),
        ),
    ];

    let outcome = validate_many(&specs, None);
    assert_eq!(outcome.issues.len(), 2);
    assert_eq!(outcome.issues[0].path, "[1].name");
    assert_eq!(outcome.issues[1].path, "[2].styles.base.ghost");
}

#[test]
fn fixture_specs_load_validate_and_resolve() {
    let fixture = r#"[
        {
            "layer": "core",
            "name": "box",
            "tree": { "kind": "element", "tag": "div", "part": "root" },
            "styles": { "base": { "root": { "p": 8, "bg": "white" } } }
        },
        {
            "layer": "unit",
            "name": "card",
            "tree": {
                "kind": "element",
                "tag": "article",
                "part": "root",
                "children": [
                    { "kind": "component", "name": "box", "part": "frame" },
                    { "kind": "slot", "name": "children" }
                ]
            },
            "styles": {
                "base": { "root": { "bg": "white" } },
                "variants": {
                    "tone": {
                        "neutral": { "root": { "bg": "white" } },
                        "inverted": { "root": { "bg": "black" } }
                    }
                },
                "default_variants": { "tone": "neutral" }
            }
        }
    ]"#;

    let specs: Vec<Spec> = serde_json::from_str(fixture).unwrap();
    let mut registry = SpecRegistry::new();
    registry.register_all(specs).unwrap();

    let outcome = registry.validate();
    assert!(outcome.is_valid(), "unexpected issues: {:?}", outcome.issues);

    let card = registry.get("card").unwrap();
    let styles = uipart::resolve_part_styles(
        card,
        &uipart::props! { "tone" => "inverted" },
        &uipart::Declarations::new(),
    );
    assert_eq!(styles["root"]["bg"], uipart::StyleValue::from("black"));
}

#[test]
fn duplicate_registration_reports_the_name() {
    let mut registry = SpecRegistry::new();
    registry.register(core("box")).unwrap();
    let err = registry.register(core("box")).unwrap_err();
    assert_eq!(err.to_string(), "duplicate specification name `box`");
}
