//! Per-instance behavior runtime.
//!
//! One [`BehaviorRuntime`] exists per rendered component instance. It
//! owns the instance's private state cell, reconciles it against
//! externally controlled props, and routes host events through the
//! declared bindings into action dispatches. Never share a runtime
//! between instances; state is exclusively mutated through it.
//!
//! ## Controlled vs. internal state
//!
//! A state key is controlled at any given moment when its declared
//! controlling prop is currently present in the external props. For a
//! controlled key, `state()` reports the external value and `dispatch`
//! forwards requested changes to the registered change callback without
//! touching internal state. Everything else reads and writes the
//! internal cell.

use std::collections::HashMap;

use crate::behavior::{Behavior, BindingConfig, BindingPayload, EventData, EventFlags, StateMap};
use crate::value::{PropValue, Props};

/// Receives the requested new value for one controlled state key.
pub type ChangeCallback = Box<dyn FnMut(&PropValue)>;

/// Fires once per dispatch with the post-dispatch effective state.
pub type NotifyCallback = Box<dyn FnMut(&StateMap)>;

pub struct BehaviorRuntime {
    behavior: Behavior,
    /// The instance's private state cell, seeded from defaults once.
    state: StateMap,
    props: Props,
    /// Registered change callbacks, keyed by the `on_change` prop name.
    callbacks: HashMap<String, ChangeCallback>,
    notify: Option<NotifyCallback>,
}

impl std::fmt::Debug for BehaviorRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviorRuntime")
            .field("state", &self.state)
            .field("props", &self.props)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl BehaviorRuntime {
    /// Creates a runtime for one component instance, initializing state
    /// from the behavior's declared defaults.
    pub fn new(behavior: Behavior) -> Self {
        let state = behavior.initial_state();
        Self {
            behavior,
            state,
            props: Props::new(),
            callbacks: HashMap::new(),
            notify: None,
        }
    }

    /// Builder method to supply the instance's current external props.
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Replaces the external props on re-render. Internal state is
    /// untouched; control is re-evaluated per key on the next access.
    pub fn set_props(&mut self, props: Props) {
        self.props = props;
    }

    /// Registers the change callback for a controlled prop, keyed by the
    /// `on_change` name declared in the behavior.
    pub fn on_change(mut self, name: &str, callback: impl FnMut(&PropValue) + 'static) -> Self {
        self.callbacks.insert(name.to_string(), Box::new(callback));
        self
    }

    /// Registers the once-per-dispatch change notification.
    pub fn with_notify(mut self, notify: impl FnMut(&StateMap) + 'static) -> Self {
        self.notify = Some(Box::new(notify));
        self
    }

    /// The current effective state: internal values overlaid, per
    /// controlled key whose prop is present, with the external value.
    pub fn state(&self) -> StateMap {
        effective_state(&self.behavior, &self.state, &self.props)
    }

    /// Dispatches an action by name.
    ///
    /// Unknown actions are logged and ignored; they are a caller bug to
    /// catch in testing, not a runtime fault. The action sees the current
    /// effective state; its partial update is split per key between the
    /// controlled path (change callback, no mutation) and the internal
    /// path (state cell write).
    pub fn dispatch(&mut self, action: &str, payload: Option<PropValue>) {
        let Some(action_fn) = self.behavior.actions.get(action).copied() else {
            log::warn!("ignoring dispatch of unknown action {action:?}");
            return;
        };

        let current = self.state();
        let update = action_fn(&current, payload.as_ref());
        log::debug!("action {action:?} returned {} update(s)", update.len());

        for (key, value) in update {
            let controlled = self
                .behavior
                .controlled_props
                .get(&key)
                .filter(|cp| self.props.contains_key(&cp.prop));

            match controlled {
                Some(cp) => {
                    if let Some(callback) = self.callbacks.get_mut(&cp.on_change) {
                        callback(&value);
                    } else {
                        log::debug!(
                            "controlled key {key:?} changed but no {:?} callback is registered",
                            cp.on_change
                        );
                    }
                }
                None => {
                    self.state.insert(key, value);
                }
            }
        }

        if self.notify.is_some() {
            let snapshot = effective_state(&self.behavior, &self.state, &self.props);
            if let Some(notify) = self.notify.as_mut() {
                notify(&snapshot);
            }
        }
    }

    /// The normalized binding for a part/event pair, if declared.
    pub fn part_event_binding(&self, part: &str, event: &str) -> Option<BindingConfig> {
        self.behavior
            .bindings
            .get(part)
            .and_then(|events| events.get(event))
            .map(|binding| binding.normalized())
    }

    /// Routes a host event through the declared binding.
    ///
    /// Returns the flags the host must honor when the binding fired, or
    /// `None` when no binding exists or a key filter rejected the event.
    /// Binding payloads are evaluated lazily, only on the firing path.
    pub fn handle_event(&mut self, part: &str, event: &str, data: &EventData) -> Option<EventFlags> {
        let binding = self.part_event_binding(part, event)?;

        if let Some(keys) = &binding.keys {
            match data.key.as_deref() {
                Some(pressed) if keys.iter().any(|k| k == pressed) => {}
                _ => return None,
            }
        }

        let flags = binding.flags();
        let payload = match &binding.payload {
            Some(BindingPayload::Value(value)) => Some(value.clone()),
            Some(BindingPayload::FromEvent(extract)) => Some(extract(data)),
            None => None,
        };

        self.dispatch(&binding.action, payload);
        Some(flags)
    }
}

fn effective_state(behavior: &Behavior, internal: &StateMap, props: &Props) -> StateMap {
    let mut state = internal.clone();
    for (key, cp) in &behavior.controlled_props {
        if let Some(value) = props.get(&cp.prop) {
            state.insert(key.clone(), value.clone());
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::StateField;
    use crate::props;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn toggle_behavior() -> Behavior {
        Behavior::new()
            .with_state("open", StateField::new(false))
            .with_action("toggle", |state, _| {
                let open = state
                    .get("open")
                    .and_then(PropValue::as_bool)
                    .unwrap_or(false);
                [("open".to_string(), PropValue::from(!open))]
                    .into_iter()
                    .collect()
            })
    }

    #[test]
    fn state_starts_from_defaults() {
        let runtime = BehaviorRuntime::new(toggle_behavior());
        assert_eq!(runtime.state().get("open"), Some(&PropValue::Bool(false)));
    }

    #[test]
    fn dispatch_mutates_uncontrolled_state() {
        let mut runtime = BehaviorRuntime::new(toggle_behavior());
        runtime.dispatch("toggle", None);
        assert_eq!(runtime.state().get("open"), Some(&PropValue::Bool(true)));
        runtime.dispatch("toggle", None);
        assert_eq!(runtime.state().get("open"), Some(&PropValue::Bool(false)));
    }

    #[test]
    fn unknown_action_is_ignored() {
        let mut runtime = BehaviorRuntime::new(toggle_behavior());
        runtime.dispatch("explode", None);
        assert_eq!(runtime.state().get("open"), Some(&PropValue::Bool(false)));
    }

    #[test]
    fn action_sees_effective_state_not_internal() {
        let behavior = toggle_behavior().with_controlled_prop("open", "open", "onOpenChange");
        let seen = Rc::new(RefCell::new(None));
        let seen_in_cb = Rc::clone(&seen);

        let mut runtime = BehaviorRuntime::new(behavior)
            .with_props(props! { "open" => true })
            .on_change("onOpenChange", move |value| {
                *seen_in_cb.borrow_mut() = Some(value.clone());
            });

        // Internal default is false, but the controlling prop says true,
        // so toggling must request false.
        runtime.dispatch("toggle", None);
        assert_eq!(*seen.borrow(), Some(PropValue::Bool(false)));
    }

    #[test]
    fn notify_fires_once_per_dispatch() {
        let behavior = Behavior::new()
            .with_state("a", StateField::new(0))
            .with_state("b", StateField::new(0))
            .with_action("bump_both", |_, _| {
                [
                    ("a".to_string(), PropValue::from(1)),
                    ("b".to_string(), PropValue::from(1)),
                ]
                .into_iter()
                .collect()
            });

        let count = Rc::new(RefCell::new(0));
        let count_in_cb = Rc::clone(&count);
        let mut runtime = BehaviorRuntime::new(behavior).with_notify(move |_| {
            *count_in_cb.borrow_mut() += 1;
        });

        runtime.dispatch("bump_both", None);
        assert_eq!(*count.borrow(), 1);
    }
}
