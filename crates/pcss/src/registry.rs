//! Atomic CSS registry: one class per deduplicated declaration.
//!
//! Every `(property, value, selector?, media?)` tuple maps to exactly one
//! generated class. Registering the same tuple twice returns the same
//! class name and adds nothing; registering `color: red` plain and
//! `color: red` under `:hover` produces two distinct rules, because the
//! dedup key includes the selector and media wrapping.
//!
//! The registry is single-threaded. Concurrent renders each use their own
//! instance (see [`crate::global`] for the process-wide convenience
//! instance used at the application boundary).

use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

use crate::sink::StyleSink;

/// Selector and media wrapping for a registered rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOptions {
    /// Appended to the generated class selector, e.g. `:hover` or
    /// ` > svg`. A `&` placeholder is replaced with the class reference.
    pub selector: Option<String>,
    /// Media query the rule is wrapped in, without the `@media` prefix,
    /// e.g. `(min-width: 768px)`.
    pub media: Option<String>,
}

impl RuleOptions {
    pub fn selector(selector: &str) -> Self {
        Self {
            selector: Some(selector.to_string()),
            media: None,
        }
    }

    pub fn media(media: &str) -> Self {
        Self {
            selector: None,
            media: Some(media.to_string()),
        }
    }
}

/// One deduplicated rule held by the registry.
#[derive(Debug, Clone)]
pub struct AtomicRule {
    pub class_name: String,
    pub property: String,
    pub value: String,
    pub css_text: String,
    pub selector: Option<String>,
    pub media: Option<String>,
}

/// Registry counters exposed for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    pub total_rules: usize,
    pub unique_properties: usize,
}

/// Deduplicating class-name generator and stylesheet accumulator.
pub struct AtomicCssRegistry {
    prefix: String,
    rules: Vec<AtomicRule>,
    by_key: HashMap<String, usize>,
    by_class: HashMap<String, usize>,
    sink: Option<Box<dyn StyleSink>>,
}

impl Default for AtomicCssRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AtomicCssRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtomicCssRegistry")
            .field("prefix", &self.prefix)
            .field("rules", &self.rules.len())
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl AtomicCssRegistry {
    /// Creates an accumulate-only registry with the default class prefix.
    pub fn new() -> Self {
        Self::with_prefix("pc")
    }

    /// Creates an accumulate-only registry with a custom class prefix.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            rules: Vec::new(),
            by_key: HashMap::new(),
            by_class: HashMap::new(),
            sink: None,
        }
    }

    /// Attaches a live sink; new rules are pushed into it incrementally.
    pub fn with_sink(mut self, sink: Box<dyn StyleSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Registers one declaration and returns its class name.
    ///
    /// Identical input always yields the identical class name within one
    /// registry instance, and the rule table grows only on first sight.
    pub fn register(&mut self, property: &str, value: &str, options: &RuleOptions) -> String {
        let key = dedup_key(property, value, options);
        if let Some(&index) = self.by_key.get(&key) {
            return self.rules[index].class_name.clone();
        }

        let class_name = self.unique_class_name(&key);
        let css_text = build_css_text(&class_name, property, value, options);

        let index = self.rules.len();
        if let Some(sink) = self.sink.as_mut() {
            if let Err(err) = sink.insert_rule(&css_text, index) {
                log::warn!("sink insert failed, appending as text: {err}");
                sink.append_text(&css_text);
            }
        }

        self.by_key.insert(key, index);
        self.by_class.insert(class_name.clone(), index);
        self.rules.push(AtomicRule {
            class_name: class_name.clone(),
            property: property.to_string(),
            value: value.to_string(),
            css_text,
            selector: options.selector.clone(),
            media: options.media.clone(),
        });

        log::trace!("registered rule {class_name}: {property}: {value}");
        class_name
    }

    /// Registers a batch of declarations, returning the class names in
    /// input order. Entries with empty values are silently skipped.
    pub fn register_multiple<'a, I>(
        &mut self,
        declarations: I,
        options: &RuleOptions,
    ) -> SmallVec<[String; 8]>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        declarations
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(property, value)| self.register(property, value, options))
            .collect()
    }

    /// The full accumulated stylesheet, in registration order.
    pub fn get_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            css.push_str(&rule.css_text);
            css.push('\n');
        }
        css
    }

    /// The stylesheet subset covering only the given class names, in the
    /// order given. Unknown class names are skipped.
    pub fn get_css_for_classes<S: AsRef<str>>(&self, class_names: &[S]) -> String {
        let mut css = String::new();
        for name in class_names {
            if let Some(&index) = self.by_class.get(name.as_ref()) {
                css.push_str(&self.rules[index].css_text);
                css.push('\n');
            }
        }
        css
    }

    /// Looks up a registered rule by class name.
    pub fn rule(&self, class_name: &str) -> Option<&AtomicRule> {
        self.by_class.get(class_name).map(|&i| &self.rules[i])
    }

    /// Drops every accumulated rule. Class names generated afterwards are
    /// deterministic, so a reset registry regenerates identical names for
    /// identical input.
    pub fn reset(&mut self) {
        log::debug!("resetting atomic CSS registry ({} rules)", self.rules.len());
        self.rules.clear();
        self.by_key.clear();
        self.by_class.clear();
    }

    pub fn stats(&self) -> RegistryStats {
        let unique_properties: HashSet<&str> =
            self.rules.iter().map(|r| r.property.as_str()).collect();
        RegistryStats {
            total_rules: self.rules.len(),
            unique_properties: unique_properties.len(),
        }
    }

    /// Hashes the dedup key into a class name, disambiguating the rare
    /// hash collision between distinct keys with a numeric suffix.
    fn unique_class_name(&self, key: &str) -> String {
        let mut class_name = format!("{}-{}", self.prefix, hash_token(key));
        let mut bump = 0usize;
        while self.by_class.contains_key(&class_name) {
            bump += 1;
            class_name = format!("{}-{}-{}", self.prefix, hash_token(key), bump);
        }
        if bump > 0 {
            log::warn!("class hash collision resolved with suffix -{bump}");
        }
        class_name
    }
}

/// Canonical dedup key: `{selector?}{@media?}{property}:{value}`.
fn dedup_key(property: &str, value: &str, options: &RuleOptions) -> String {
    let mut key = String::new();
    if let Some(selector) = &options.selector {
        key.push_str(selector);
    }
    if let Some(media) = &options.media {
        key.push('@');
        key.push_str(media);
    }
    key.push_str(property);
    key.push(':');
    key.push_str(value);
    key
}

/// Stable multiplicative rolling hash, emitted in base-36.
///
/// Deterministic across processes so server-rendered and host-injected
/// markup agree on class names for identical input.
fn hash_token(input: &str) -> String {
    let mut hash: u32 = 5381;
    for byte in input.bytes() {
        hash = hash.wrapping_mul(33) ^ u32::from(byte);
    }
    to_base36(hash)
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = [0u8; 7];
    let mut at = out.len();
    while value > 0 {
        at -= 1;
        out[at] = DIGITS[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8_lossy(&out[at..]).into_owned()
}

/// Builds the rule text for one atomic class.
fn build_css_text(class_name: &str, property: &str, value: &str, options: &RuleOptions) -> String {
    let class_ref = format!(".{class_name}");
    let selector = match &options.selector {
        Some(s) if s.contains('&') => s.replace('&', &class_ref),
        Some(s) => format!("{class_ref}{s}"),
        None => class_ref,
    };
    let rule = format!("{selector} {{ {property}: {value}; }}");
    match &options.media {
        Some(media) => format!("@media {media} {{ {rule} }}"),
        None => rule,
    }
}
