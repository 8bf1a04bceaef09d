//! Façade crate re-exporting the `uipart` specification core and the
//! `pcss` atomic CSS back end as one dependency.
//!
//! Applications depend on this crate; the member crates stay usable on
//! their own for hosts that only need one half (e.g. server-side style
//! extraction without the behavior runtime).

pub use pcss;
pub use uipart;

pub use pcss::{
    AtomicCssRegistry, MemorySink, RuleOptions, StyleSink, Theme, TokenContext, merge_themes,
};
pub use uipart::{
    Behavior, BehaviorRuntime, Layer, Node, Spec, SpecRegistry, StyleConfig, expand_tree,
    resolve_part_styles, validate, validate_many,
};

/// The commonly needed surface in one import.
pub mod prelude {
    pub use pcss::{AtomicCssRegistry, RuleOptions, Theme, TokenContext};
    pub use uipart::{
        Behavior, BehaviorRuntime, BindingConfig, CompoundVariant, Declarations, EventData,
        Layer, Node, PartStyles, PropValue, Props, Spec, SpecRegistry, StyleConfig, StyleValue,
        decls, part_styles, props, resolve_part_styles,
    };
}
