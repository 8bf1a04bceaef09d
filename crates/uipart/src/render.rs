//! Render-time tree expansion.
//!
//! Host renderers do not walk raw specification trees; they consume the
//! expanded form produced here, in which every `Component` reference has
//! been resolved through a registry and every slot replaced by supplied
//! content. The walk tracks the active reference stack, so indirect
//! cycles (A -> B -> A) fail with the full path instead of recursing
//! forever. Reference failures are fatal for the render that hit them;
//! continuing would produce a tree with holes.

use indexmap::IndexMap;

use crate::error::{Result, UipartError};
use crate::node::{Namespace, Node};
use crate::registry::SpecRegistry;
use crate::spec::Spec;
use crate::value::Props;

/// A node in the expanded tree.
#[derive(Debug, Clone)]
pub enum ResolvedNode {
    /// A host element, ready to create.
    Element {
        tag: String,
        namespace: Namespace,
        part: String,
        attrs: IndexMap<String, String>,
        children: Vec<ResolvedNode>,
    },
    /// The expanded body of a referenced specification. The `part` is the
    /// attachment point the reference occupied in its parent tree; the
    /// props are the reference's overrides, for the renderer to feed into
    /// style resolution of the target spec.
    Fragment {
        spec: String,
        part: String,
        props: Props,
        children: Vec<ResolvedNode>,
    },
}

impl ResolvedNode {
    pub fn children(&self) -> &[ResolvedNode] {
        match self {
            Self::Element { children, .. } | Self::Fragment { children, .. } => children,
        }
    }

    pub fn part(&self) -> &str {
        match self {
            Self::Element { part, .. } | Self::Fragment { part, .. } => part,
        }
    }
}

/// Externally supplied slot content, keyed by slot name.
pub type SlotFill = IndexMap<String, Vec<ResolvedNode>>;

/// The slot name a component reference's children fill in its target.
pub const CHILDREN_SLOT: &str = "children";

/// Expands a specification's tree against a registry.
///
/// Unknown component names and circular references abort the expansion
/// immediately. Unfilled slots disappear. When the root node expands to
/// anything other than exactly one node (a root slot), the result is
/// wrapped in a fragment carrying the spec's name.
pub fn expand_tree(spec: &Spec, registry: &SpecRegistry, slots: &SlotFill) -> Result<ResolvedNode> {
    let mut stack = vec![spec.name.clone()];
    let mut nodes = expand_node(&spec.tree, registry, &mut stack, slots)?;

    if nodes.len() == 1 {
        return Ok(nodes.remove(0));
    }
    Ok(ResolvedNode::Fragment {
        spec: spec.name.clone(),
        part: ROOT_FRAGMENT_PART.to_string(),
        props: Props::new(),
        children: nodes,
    })
}

const ROOT_FRAGMENT_PART: &str = "root";

fn expand_node(
    node: &Node,
    registry: &SpecRegistry,
    stack: &mut Vec<String>,
    slots: &SlotFill,
) -> Result<Vec<ResolvedNode>> {
    match node {
        Node::Element {
            tag,
            namespace,
            part,
            attrs,
            children,
        } => {
            let mut expanded = Vec::with_capacity(children.len());
            for child in children {
                expanded.extend(expand_node(child, registry, stack, slots)?);
            }
            Ok(vec![ResolvedNode::Element {
                tag: tag.clone(),
                namespace: *namespace,
                part: part.clone(),
                attrs: attrs.clone(),
                children: expanded,
            }])
        }

        Node::Slot { name } => Ok(slots.get(name).cloned().unwrap_or_default()),

        Node::Component {
            name,
            part,
            props,
            children,
        } => {
            if stack.iter().any(|active| active == name) {
                let path = format!("{} -> {name}", stack.join(" -> "));
                return Err(UipartError::CircularReference { path });
            }
            let Some(target) = registry.get(name) else {
                return Err(UipartError::UnknownComponent {
                    name: name.clone(),
                    path: stack.join(" -> "),
                });
            };

            // The reference's children expand in the current context and
            // become the target's `children` slot content.
            let mut fill = Vec::new();
            for child in children {
                fill.extend(expand_node(child, registry, stack, slots)?);
            }
            let mut target_slots = SlotFill::new();
            target_slots.insert(CHILDREN_SLOT.to_string(), fill);

            stack.push(name.clone());
            let body = expand_node(&target.tree, registry, stack, &target_slots);
            stack.pop();

            Ok(vec![ResolvedNode::Fragment {
                spec: name.clone(),
                part: part.clone(),
                props: props.clone(),
                children: body?,
            }])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Layer;

    #[test]
    fn elements_pass_through_with_children() {
        let spec = Spec::new(
            Layer::Core,
            "box",
            Node::element("div", "root")
                .with_children(vec![Node::element("span", "label")]),
        );
        let registry = SpecRegistry::new();

        let resolved = expand_tree(&spec, &registry, &SlotFill::new()).unwrap();
        let ResolvedNode::Element { tag, children, .. } = &resolved else {
            panic!("expected element root");
        };
        assert_eq!(tag, "div");
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn unfilled_slots_disappear() {
        let spec = Spec::new(
            Layer::Core,
            "box",
            Node::element("div", "root").with_children(vec![Node::slot("children")]),
        );
        let registry = SpecRegistry::new();

        let resolved = expand_tree(&spec, &registry, &SlotFill::new()).unwrap();
        assert!(resolved.children().is_empty());
    }

    #[test]
    fn unknown_component_aborts_with_reference_path() {
        let spec = Spec::new(
            Layer::Unit,
            "card",
            Node::element("div", "root")
                .with_children(vec![Node::component("ghost", "frame")]),
        );
        let registry = SpecRegistry::new();

        let err = expand_tree(&spec, &registry, &SlotFill::new()).unwrap_err();
        let UipartError::UnknownComponent { name, path } = err else {
            panic!("expected unknown-component error");
        };
        assert_eq!(name, "ghost");
        assert_eq!(path, "card");
    }
}
