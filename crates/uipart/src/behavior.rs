//! Behavior definitions: state shape, actions, and event bindings.
//!
//! A behavior describes what a component *can do*, independent of any
//! instance: which state keys exist and their defaults, which actions can
//! be dispatched by name, and which part/event pairs trigger which
//! actions. The per-instance machinery lives in [`crate::runtime`].
//!
//! Actions and bindings are looked up by string name at runtime on
//! purpose; specs are defined independently of any closed set of names.

use bitflags::bitflags;
use indexmap::IndexMap;

use crate::value::PropValue;

/// Per-instance state: key to current value.
pub type StateMap = IndexMap<String, PropValue>;

/// An action: current effective state + optional payload to a partial
/// state update. Plain function pointers keep behaviors `Clone` and
/// comparable in spirit to the data they sit beside.
pub type ActionFn = fn(&StateMap, Option<&PropValue>) -> StateMap;

/// One state key's declaration.
#[derive(Debug, Clone)]
pub struct StateField {
    pub default: PropValue,
    /// Declarative intent marker. Whether a key is actually controlled is
    /// decided per dispatch by prop presence, never by this flag alone.
    pub controlled: bool,
}

impl StateField {
    pub fn new(default: impl Into<PropValue>) -> Self {
        Self {
            default: default.into(),
            controlled: false,
        }
    }

    pub fn controlled(default: impl Into<PropValue>) -> Self {
        Self {
            default: default.into(),
            controlled: true,
        }
    }
}

/// Links a state key to the external prop that can control it and the
/// callback prop that receives requested changes.
#[derive(Debug, Clone)]
pub struct ControlledProp {
    pub prop: String,
    pub on_change: String,
}

bitflags! {
    /// Host-event flags a fired binding asks the renderer to honor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EventFlags: u8 {
        const PREVENT_DEFAULT  = 0b0000_0001;
        const STOP_PROPAGATION = 0b0000_0010;
    }
}

/// The host event surface the core sees: the pressed key (for keyboard
/// events) and an extracted value (for input-like events). Hosts map
/// their native event types onto this before calling the runtime.
#[derive(Debug, Clone, Default)]
pub struct EventData {
    pub key: Option<String>,
    pub value: Option<PropValue>,
}

impl EventData {
    pub fn key(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::default()
        }
    }

    pub fn value(value: impl Into<PropValue>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

/// Payload attached to a binding: a literal, or a function of the raw
/// event evaluated only when the binding actually fires.
#[derive(Debug, Clone)]
pub enum BindingPayload {
    Value(PropValue),
    FromEvent(fn(&EventData) -> PropValue),
}

/// The normalized (object) form of an event binding.
#[derive(Debug, Clone)]
pub struct BindingConfig {
    pub action: String,
    pub prevent_default: bool,
    pub stop_propagation: bool,
    /// Keyboard allow-list; when present, events whose key is not listed
    /// are ignored entirely.
    pub keys: Option<Vec<String>>,
    pub payload: Option<BindingPayload>,
}

impl BindingConfig {
    pub fn new(action: &str) -> Self {
        Self {
            action: action.to_string(),
            prevent_default: false,
            stop_propagation: false,
            keys: None,
            payload: None,
        }
    }

    pub fn prevent_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }

    pub fn stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }

    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_payload(mut self, payload: impl Into<PropValue>) -> Self {
        self.payload = Some(BindingPayload::Value(payload.into()));
        self
    }

    pub fn with_payload_from(mut self, extract: fn(&EventData) -> PropValue) -> Self {
        self.payload = Some(BindingPayload::FromEvent(extract));
        self
    }

    /// The host flags this binding requests when it fires.
    pub fn flags(&self) -> EventFlags {
        let mut flags = EventFlags::empty();
        if self.prevent_default {
            flags |= EventFlags::PREVENT_DEFAULT;
        }
        if self.stop_propagation {
            flags |= EventFlags::STOP_PROPAGATION;
        }
        flags
    }
}

/// A binding as authored: bare action name shorthand or full config.
#[derive(Debug, Clone)]
pub enum EventBinding {
    Action(String),
    Config(BindingConfig),
}

impl EventBinding {
    /// Normalization always produces the object form.
    pub fn normalized(&self) -> BindingConfig {
        match self {
            Self::Action(name) => BindingConfig::new(name),
            Self::Config(config) => config.clone(),
        }
    }
}

impl From<&str> for EventBinding {
    fn from(action: &str) -> Self {
        Self::Action(action.to_string())
    }
}

impl From<BindingConfig> for EventBinding {
    fn from(config: BindingConfig) -> Self {
        Self::Config(config)
    }
}

/// A component's complete behavior definition.
#[derive(Debug, Clone, Default)]
pub struct Behavior {
    pub state: IndexMap<String, StateField>,
    pub actions: IndexMap<String, ActionFn>,
    /// part -> event name -> binding.
    pub bindings: IndexMap<String, IndexMap<String, EventBinding>>,
    /// state key -> controlling prop pair.
    pub controlled_props: IndexMap<String, ControlledProp>,
}

impl Behavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, name: &str, field: StateField) -> Self {
        self.state.insert(name.to_string(), field);
        self
    }

    pub fn with_action(mut self, name: &str, action: ActionFn) -> Self {
        self.actions.insert(name.to_string(), action);
        self
    }

    pub fn with_binding(mut self, part: &str, event: &str, binding: impl Into<EventBinding>) -> Self {
        self.bindings
            .entry(part.to_string())
            .or_default()
            .insert(event.to_string(), binding.into());
        self
    }

    pub fn with_controlled_prop(mut self, state: &str, prop: &str, on_change: &str) -> Self {
        self.controlled_props.insert(
            state.to_string(),
            ControlledProp {
                prop: prop.to_string(),
                on_change: on_change.to_string(),
            },
        );
        self
    }

    /// Initial internal state built from the declared defaults.
    pub fn initial_state(&self) -> StateMap {
        self.state
            .iter()
            .map(|(name, field)| (name.clone(), field.default.clone()))
            .collect()
    }
}
