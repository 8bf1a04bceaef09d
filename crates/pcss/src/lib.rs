//! # PCSS - Part-Addressable Atomic CSS
//!
//! The style back end for declarative component specifications: themes as
//! named value scales, symbolic token resolution, and an atomic CSS
//! registry that deduplicates declarations into stable class names.
//!
//! This crate knows nothing about component trees or variants; it turns
//! resolved declarations into CSS. The `uipart` crate sits on top and
//! produces those declarations.
//!
//! ## Quick Start
//!
//! ```rust
//! use pcss::{RuleOptions, Theme, TokenContext};
//!
//! let theme = Theme::new()
//!     .with_colors([("primary", "#0178d4")])
//!     .with_sizing([("2", "8px")]);
//! let mut ctx = TokenContext::new(theme);
//!
//! // Symbolic values resolve through the theme; literals pass through.
//! assert_eq!(ctx.resolve_color("$colors.primary"), "#0178d4");
//! assert_eq!(ctx.resolve_length("2"), "8px");
//! assert_eq!(ctx.resolve_length(12), "12px");
//!
//! // Identical declarations share one class.
//! let a = ctx.registry_mut().register("color", "#0178d4", &RuleOptions::default());
//! let b = ctx.registry_mut().register("color", "#0178d4", &RuleOptions::default());
//! assert_eq!(a, b);
//! assert_eq!(ctx.registry().stats().total_rules, 1);
//! ```
//!
//! ## Isolation model
//!
//! Everything is instance-scoped. Each concurrent render owns its own
//! [`TokenContext`] (theme + registry); the [`global`] module offers one
//! lazily created process-wide context for single-threaded hosts that
//! want convenience over isolation.
//!
//! ## Modules
//!
//! - [`registry`]: atomic class generation and stylesheet accumulation
//! - [`context`]: theme-paired resolution chains
//! - [`theme`]: named value scales and theme merging
//! - [`parse`]: token reference grammar
//! - [`style_props`]: static shorthand and unit tables
//! - [`sink`]: incremental rule destinations for live hosts
//! - [`global`]: the process-wide convenience context

pub mod context;
pub mod error;
pub mod global;
pub mod parse;
pub mod registry;
pub mod sink;
pub mod style_props;
pub mod theme;

pub use context::{TokenContext, TokenValue};
pub use error::PcssError;
pub use parse::{TokenRef, is_token_ref, parse_token_ref};
pub use registry::{AtomicCssRegistry, AtomicRule, RegistryStats, RuleOptions};
pub use sink::{MemorySink, StyleSink};
pub use theme::{Scale, Theme, TokenCategory, merge_themes};
