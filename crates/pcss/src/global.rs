//! The process-wide token context.
//!
//! The core resolvers never read global state; they take explicit context
//! and registry instances. This module is the one convenience wrapper for
//! the application's outermost boundary: a lazily created, process-wide
//! context for hosts that render from a single thread and want zero
//! plumbing. Server-side renderers and tests should construct their own
//! [`TokenContext`] instead of touching this.

use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::context::TokenContext;
use crate::registry::RuleOptions;
use crate::theme::Theme;

static GLOBAL_CONTEXT: Lazy<Mutex<TokenContext>> =
    Lazy::new(|| Mutex::new(TokenContext::new(Theme::default())));

fn lock() -> std::sync::MutexGuard<'static, TokenContext> {
    GLOBAL_CONTEXT.lock().unwrap_or_else(|e| e.into_inner())
}

/// Replaces the process-wide context with one built on the given theme.
///
/// Existing accumulated rules are discarded with the old context.
pub fn configure(theme: Theme) {
    let mut ctx = lock();
    log::debug!("configuring process-wide token context");
    *ctx = TokenContext::new(theme);
}

/// Runs a closure against the process-wide context.
pub fn with_context<R>(f: impl FnOnce(&mut TokenContext) -> R) -> R {
    f(&mut lock())
}

/// Registers a declaration against the process-wide registry.
pub fn register(property: &str, value: &str, options: &RuleOptions) -> String {
    with_context(|ctx| ctx.registry_mut().register(property, value, options))
}

/// The process-wide registry's accumulated stylesheet.
pub fn css() -> String {
    with_context(|ctx| ctx.registry().get_css())
}

/// Clears the process-wide registry's rule tables.
pub fn reset() {
    with_context(|ctx| ctx.registry_mut().reset());
}
