//! Specification tree nodes.
//!
//! A specification's tree is built from three node kinds, modeled as a
//! closed sum type: host `Element`s, `Component` references to other
//! specifications, and `Slot` placeholders filled at render time. All
//! tree behavior lives in explicit walk functions; the nodes themselves
//! are plain data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::{PropValue, Props};

/// Target markup namespace for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    /// The default markup namespace.
    #[default]
    Html,
    /// The alternate vector-graphics namespace.
    Svg,
}

/// One node in a specification tree.
///
/// Every `Element` and `Component` carries a `part` identifier, the
/// attachment point style declarations and event bindings address. Slots
/// have no part; they disappear or get replaced at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Element {
        tag: String,
        #[serde(default)]
        namespace: Namespace,
        part: String,
        #[serde(default)]
        attrs: IndexMap<String, String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Component {
        name: String,
        part: String,
        #[serde(default)]
        props: Props,
        #[serde(default)]
        children: Vec<Node>,
    },
    Slot {
        name: String,
    },
}

impl Node {
    /// Creates a host element node.
    pub fn element(tag: &str, part: &str) -> Self {
        Self::Element {
            tag: tag.to_string(),
            namespace: Namespace::default(),
            part: part.to_string(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Creates a reference to another specification.
    pub fn component(name: &str, part: &str) -> Self {
        Self::Component {
            name: name.to_string(),
            part: part.to_string(),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// Creates a named slot placeholder.
    pub fn slot(name: &str) -> Self {
        Self::Slot {
            name: name.to_string(),
        }
    }

    /// Builder method to attach ordered children. No-op on slots.
    pub fn with_children(mut self, new_children: Vec<Node>) -> Self {
        match &mut self {
            Self::Element { children, .. } | Self::Component { children, .. } => {
                *children = new_children;
            }
            Self::Slot { .. } => {
                log::warn!("ignoring children attached to a slot node");
            }
        }
        self
    }

    /// Builder method to set a static attribute. No-op on non-elements.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Builder method to set the element namespace.
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        if let Self::Element {
            namespace: target, ..
        } = &mut self
        {
            *target = namespace;
        }
        self
    }

    /// Builder method to set a prop override on a component reference.
    pub fn with_prop(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        if let Self::Component { props, .. } = &mut self {
            props.insert(name.to_string(), value.into());
        }
        self
    }

    /// The part identifier, when this node kind carries one.
    pub fn part(&self) -> Option<&str> {
        match self {
            Self::Element { part, .. } | Self::Component { part, .. } => Some(part),
            Self::Slot { .. } => None,
        }
    }

    /// Ordered children; empty for slots.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element { children, .. } | Self::Component { children, .. } => children,
            Self::Slot { .. } => &[],
        }
    }

    /// Depth-first pre-order walk over this node and its descendants.
    pub fn walk(&self, visit: &mut dyn FnMut(&Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Part identifiers collected from the full tree, in walk order.
    pub fn collect_parts(&self) -> Vec<&str> {
        let mut parts = Vec::new();
        collect_parts_into(self, &mut parts);
        parts
    }

    /// Names of every specification this tree references.
    pub fn component_refs(&self) -> Vec<&str> {
        let mut refs = Vec::new();
        collect_refs_into(self, &mut refs);
        refs
    }
}

fn collect_parts_into<'a>(node: &'a Node, parts: &mut Vec<&'a str>) {
    if let Some(part) = node.part() {
        parts.push(part);
    }
    for child in node.children() {
        collect_parts_into(child, parts);
    }
}

fn collect_refs_into<'a>(node: &'a Node, refs: &mut Vec<&'a str>) {
    if let Node::Component { name, .. } = node {
        refs.push(name);
    }
    for child in node.children() {
        collect_refs_into(child, refs);
    }
}
