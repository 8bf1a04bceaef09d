//! Theme resolution through independent token contexts.

use pcss::{RuleOptions, Theme, TokenContext, merge_themes};

fn base_theme() -> Theme {
    Theme::new()
        .with_colors([("primary", "#0178d4"), ("surface", "#1e1e1e")])
        .with_sizing([("1", "4px"), ("2", "8px"), ("gutter", "24px")])
        .with_radius([("sm", "2px"), ("full", "9999px")])
        .with_shadow([("sm", "0 1px 2px rgba(0,0,0,0.2)")])
        .with_z_index([("modal", "1300")])
        .with_fonts([("body", "Inter, sans-serif")])
}

#[test]
fn every_scale_resolves_through_its_chain() {
    let ctx = TokenContext::new(base_theme());

    assert_eq!(ctx.resolve_color("$colors.primary"), "#0178d4");
    assert_eq!(ctx.resolve_length("gutter"), "24px");
    assert_eq!(ctx.resolve_radius("$radius.full"), "9999px");
    assert_eq!(ctx.resolve_shadow("sm"), "0 1px 2px rgba(0,0,0,0.2)");
    assert_eq!(ctx.resolve_z_index("modal"), "1300");
}

#[test]
fn literals_and_references_mix_freely() {
    let ctx = TokenContext::new(base_theme());

    // Same chain, four different outcomes.
    assert_eq!(ctx.resolve_length(16), "16px");
    assert_eq!(ctx.resolve_length("$sizing.2"), "8px");
    assert_eq!(ctx.resolve_length("2"), "8px");
    assert_eq!(ctx.resolve_length("75%"), "75%");
}

#[test]
fn extended_theme_overrides_only_what_it_names() {
    let brand = Theme::new().with_colors([("primary", "#ff2d55")]);
    let merged = merge_themes(&base_theme(), &brand);
    let ctx = TokenContext::new(merged);

    assert_eq!(ctx.resolve_color("$colors.primary"), "#ff2d55");
    assert_eq!(ctx.resolve_color("$colors.surface"), "#1e1e1e");
    assert_eq!(ctx.resolve_length("$sizing.gutter"), "24px");
}

#[test]
fn themed_scopes_are_isolated() {
    let light = TokenContext::new(Theme::new().with_colors([("surface", "#ffffff")]));
    let dark = TokenContext::new(Theme::new().with_colors([("surface", "#121212")]));

    assert_eq!(light.resolve_color("surface"), "#ffffff");
    assert_eq!(dark.resolve_color("surface"), "#121212");
}

#[test]
fn themed_registration_stays_per_context() {
    let mut light = TokenContext::new(Theme::new().with_colors([("surface", "#ffffff")]));
    let mut dark = TokenContext::new(Theme::new().with_colors([("surface", "#121212")]));

    let surface_light = light.resolve_color("surface");
    let surface_dark = dark.resolve_color("surface");
    let class_light =
        light
            .registry_mut()
            .register("background-color", &surface_light, &RuleOptions::default());
    let class_dark =
        dark.registry_mut()
            .register("background-color", &surface_dark, &RuleOptions::default());

    // Different values hash to different classes, each in its own sheet.
    assert_ne!(class_light, class_dark);
    assert!(!light.registry().get_css().contains(&class_dark));
    assert!(!dark.registry().get_css().contains(&class_light));
}
