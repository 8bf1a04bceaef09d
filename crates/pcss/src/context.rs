//! Token context: a theme paired with a CSS registry.
//!
//! The context is the unit of style isolation. Every concurrent render
//! (each server-side request, each themed scope) gets its own context so
//! that rule accumulation and reset never cross request boundaries. The
//! process-wide shared context lives in [`crate::global`].
//!
//! ## Resolution chain
//!
//! Length, color, radius, shadow, and z-index values all resolve through
//! the same chain, first match wins:
//!
//! 1. numeric input becomes a pixel string (`0` stays `"0"`, z-index
//!    stays unitless)
//! 2. a token reference (`$colors.primary`) resolves through the theme
//! 3. a bare name present in the relevant scale table substitutes
//! 4. anything else passes through as a literal CSS value
//!
//! The fallthrough lets authors mix literals and theme references freely
//! without an escape syntax.

use crate::parse::{is_token_ref, parse_token_ref};
use crate::registry::AtomicCssRegistry;
use crate::theme::{Theme, TokenCategory};

/// Input to a resolution chain: raw number or string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> From<f64> for TokenValue<'a> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<'a> From<i32> for TokenValue<'a> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for TokenValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// An immutable theme paired with an owned CSS registry instance.
#[derive(Debug)]
pub struct TokenContext {
    theme: Theme,
    registry: AtomicCssRegistry,
}

impl TokenContext {
    /// Creates a context with a fresh accumulate-only registry.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            registry: AtomicCssRegistry::new(),
        }
    }

    /// Creates a context around an existing registry (e.g. one carrying a
    /// live sink).
    pub fn with_registry(theme: Theme, registry: AtomicCssRegistry) -> Self {
        Self { theme, registry }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn registry(&self) -> &AtomicCssRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut AtomicCssRegistry {
        &mut self.registry
    }

    /// Looks up one token by category and key.
    pub fn resolve_token(&self, category: TokenCategory, key: &str) -> Option<String> {
        self.theme.get(category, key).map(str::to_string)
    }

    /// Resolves a dotted variable path such as `colors.primary`, with or
    /// without the `$` sigil.
    pub fn resolve_var(&self, name: &str) -> Option<String> {
        let parsed = parse_token_ref(name).ok()?;
        let category = TokenCategory::from_name(parsed.category)?;
        self.resolve_token(category, parsed.key)
    }

    /// Strips the sigil, splits on the first dot, and resolves through the
    /// theme. Returns `None` for strings that are not resolvable
    /// references.
    pub fn parse_and_resolve(&self, value: &str) -> Option<String> {
        self.resolve_var(value)
    }

    /// Resolves a length-like value through the sizing scale.
    pub fn resolve_length<'a>(&self, value: impl Into<TokenValue<'a>>) -> String {
        self.resolve_in(TokenCategory::Sizing, value.into())
    }

    /// Resolves a color value through the color scale.
    pub fn resolve_color<'a>(&self, value: impl Into<TokenValue<'a>>) -> String {
        self.resolve_in(TokenCategory::Colors, value.into())
    }

    /// Resolves a radius value through the radius scale.
    pub fn resolve_radius<'a>(&self, value: impl Into<TokenValue<'a>>) -> String {
        self.resolve_in(TokenCategory::Radius, value.into())
    }

    /// Resolves a shadow value through the shadow scale.
    pub fn resolve_shadow<'a>(&self, value: impl Into<TokenValue<'a>>) -> String {
        self.resolve_in(TokenCategory::Shadow, value.into())
    }

    /// Resolves a z-index value through the z-index scale.
    pub fn resolve_z_index<'a>(&self, value: impl Into<TokenValue<'a>>) -> String {
        self.resolve_in(TokenCategory::ZIndex, value.into())
    }

    fn resolve_in(&self, category: TokenCategory, value: TokenValue<'_>) -> String {
        match value {
            TokenValue::Number(n) => format_number(category, n),
            TokenValue::Text(s) => {
                if is_token_ref(s) {
                    if let Some(resolved) = self.parse_and_resolve(s) {
                        return resolved;
                    }
                    log::trace!("unresolved token reference {s:?}, passing through");
                }
                if let Some(named) = self.theme.get(category, s) {
                    return named.to_string();
                }
                s.to_string()
            }
        }
    }
}

fn format_number(category: TokenCategory, value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let number = if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    };
    match category {
        // z-index is a bare integer in CSS
        TokenCategory::ZIndex => number,
        _ => format!("{number}px"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> TokenContext {
        TokenContext::new(
            Theme::new()
                .with_colors([("primary", "#0178d4")])
                .with_sizing([("2", "8px"), ("gutter", "24px")])
                .with_radius([("sm", "2px")])
                .with_z_index([("modal", "1300")]),
        )
    }

    #[test]
    fn numeric_input_becomes_pixels() {
        let ctx = context();
        assert_eq!(ctx.resolve_length(8.0), "8px");
        assert_eq!(ctx.resolve_length(0.0), "0");
        assert_eq!(ctx.resolve_length(2.5), "2.5px");
    }

    #[test]
    fn z_index_numbers_stay_unitless() {
        let ctx = context();
        assert_eq!(ctx.resolve_z_index(10), "10");
        assert_eq!(ctx.resolve_z_index("modal"), "1300");
    }

    #[test]
    fn token_reference_resolves_through_theme() {
        let ctx = context();
        assert_eq!(ctx.resolve_color("$colors.primary"), "#0178d4");
        assert_eq!(ctx.resolve_length("sizing.gutter"), "24px");
    }

    #[test]
    fn bare_scale_name_substitutes() {
        let ctx = context();
        assert_eq!(ctx.resolve_length("2"), "8px");
        assert_eq!(ctx.resolve_radius("sm"), "2px");
    }

    #[test]
    fn unknown_literal_passes_through() {
        let ctx = context();
        assert_eq!(ctx.resolve_color("rebeccapurple"), "rebeccapurple");
        assert_eq!(ctx.resolve_length("calc(100% - 8px)"), "calc(100% - 8px)");
    }

    #[test]
    fn unresolvable_reference_falls_through_to_literal() {
        let ctx = context();
        // Sigil marks it as a reference, but the theme has no such entry
        // and no scale name matches, so the raw string survives.
        assert_eq!(ctx.resolve_color("$colors.missing"), "$colors.missing");
    }

    #[test]
    fn resolve_var_requires_known_category() {
        let ctx = context();
        assert_eq!(ctx.resolve_var("colors.primary").as_deref(), Some("#0178d4"));
        assert_eq!(ctx.resolve_var("flavors.primary"), None);
        assert_eq!(ctx.resolve_var("not a reference"), None);
    }

    #[test]
    fn contexts_do_not_share_registries() {
        let mut a = context();
        let mut b = context();
        a.registry_mut()
            .register("color", "red", &Default::default());
        assert_eq!(a.registry().stats().total_rules, 1);
        assert_eq!(b.registry().stats().total_rules, 0);
        b.registry_mut().reset();
        assert_eq!(a.registry().stats().total_rules, 1);
    }
}
