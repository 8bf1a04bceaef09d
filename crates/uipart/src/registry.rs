//! Name-keyed store of specifications.
//!
//! There is no implicit global registry. Each app, test, or story run
//! constructs its own, which keeps validation and rendering deterministic
//! across isolated contexts.

use indexmap::IndexMap;

use crate::error::{Result, UipartError};
use crate::spec::{Layer, Spec};
use crate::validator::{self, SpecResolver, Validation};

/// Exclusive owner of a name-to-specification map.
#[derive(Debug, Default)]
pub struct SpecRegistry {
    specs: IndexMap<String, Spec>,
}

impl SpecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one specification.
    ///
    /// Duplicate names fail outright; silent shadowing would make
    /// `get(name)` non-deterministic.
    pub fn register(&mut self, spec: Spec) -> Result<()> {
        if self.specs.contains_key(&spec.name) {
            return Err(UipartError::DuplicateSpec(spec.name));
        }
        log::debug!("registering spec `{}` ({})", spec.name, spec.layer.name());
        self.specs.insert(spec.name.clone(), spec);
        Ok(())
    }

    /// Registers a batch, stopping at the first duplicate.
    pub fn register_all<I>(&mut self, specs: I) -> Result<()>
    where
        I: IntoIterator<Item = Spec>,
    {
        for spec in specs {
            self.register(spec)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Spec> {
        self.specs.get(name)
    }

    /// Every registered specification, in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Spec> {
        self.specs.values()
    }

    /// Specifications on one layer, in registration order.
    pub fn by_layer(&self, layer: Layer) -> Vec<&Spec> {
        self.specs.values().filter(|s| s.layer == layer).collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Validates every registered specification against this registry.
    pub fn validate(&self) -> Validation {
        validator::validate_many(self.specs.values(), Some(self))
    }
}

impl SpecResolver for SpecRegistry {
    fn resolve_spec(&self, name: &str) -> Option<&Spec> {
        self.get(name)
    }
}
