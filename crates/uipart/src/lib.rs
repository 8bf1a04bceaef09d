//! # uipart - Declarative Component Specifications
//!
//! Components as data: a part-addressable tree, a base+variant style
//! sheet, and an optional behavior definition, validated structurally and
//! resolved deterministically into per-part style declarations and an
//! expanded, renderer-consumable tree. The `pcss` crate turns the
//! resolved declarations into deduplicated atomic CSS.
//!
//! ## Quick Start
//!
//! ```rust
//! use uipart::{
//!     Layer, Node, Spec, SpecRegistry, StyleConfig,
//!     decls, part_styles, props, resolve_part_styles,
//! };
//!
//! let card = Spec::new(Layer::Unit, "card", Node::element("div", "root"))
//!     .with_styles(
//!         StyleConfig::new()
//!             .with_base(part_styles! { "root" => decls! { "p" => 8, "bg" => "white" } })
//!             .with_variant("tone", "neutral", part_styles! { "root" => decls! { "bg" => "white" } })
//!             .with_variant("tone", "inverted", part_styles! { "root" => decls! { "bg" => "black" } })
//!             .with_default_variant("tone", "neutral"),
//!     );
//!
//! let mut registry = SpecRegistry::new();
//! registry.register(card).unwrap();
//! assert!(registry.validate().is_valid());
//!
//! let spec = registry.get("card").unwrap();
//! let styles = resolve_part_styles(spec, &props! { "tone" => "inverted" }, &decls! {});
//! assert_eq!(styles["root"]["bg"], uipart::StyleValue::from("black"));
//! ```
//!
//! ## Structure
//!
//! - [`node`] / [`spec`]: the specification data model and its layers
//! - [`validator`]: structural and referential integrity checks
//! - [`registry`]: name-keyed spec store, doubles as the reference
//!   resolver
//! - [`resolver`]: variant and compound-variant style resolution
//! - [`behavior`] / [`runtime`]: state, actions, and event bindings per
//!   component instance
//! - [`render`]: reference expansion with cycle detection
//!
//! Everything here is synchronous and instance-scoped; see `pcss` for
//! the CSS side and its process-wide convenience context.

pub mod behavior;
pub mod error;
mod macros;
pub mod node;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod runtime;
pub mod spec;
pub mod validator;
pub mod value;

pub use behavior::{
    ActionFn, Behavior, BindingConfig, BindingPayload, ControlledProp, EventBinding, EventData,
    EventFlags, StateField, StateMap,
};
pub use error::{Result, UipartError};
pub use node::{Namespace, Node};
pub use registry::SpecRegistry;
pub use render::{CHILDREN_SLOT, ResolvedNode, SlotFill, expand_tree};
pub use resolver::{ROOT_PART, resolve_part_styles};
pub use runtime::BehaviorRuntime;
pub use spec::{CompoundVariant, Layer, Spec, StyleConfig};
pub use validator::{Issue, SpecResolver, Validation, validate, validate_many};
pub use value::{Declarations, PartStyles, PropValue, Props, StyleValue};

// Re-export the log crate so hosts can use uipart::log::debug!, etc.
pub use log;
