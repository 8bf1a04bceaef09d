//! Accumulate-only and live-sink registries must agree on class names,
//! and sink failures must fall back to text append without losing rules.

use pcss::{AtomicCssRegistry, MemorySink, PcssError, RuleOptions, StyleSink};

#[test]
fn server_and_sink_modes_agree_on_class_names() {
    let mut server = AtomicCssRegistry::new();
    let mut live = AtomicCssRegistry::new().with_sink(Box::new(MemorySink::new()));

    let inputs = [
        ("color", "red", RuleOptions::default()),
        ("color", "red", RuleOptions::selector(":hover")),
        ("padding", "8px", RuleOptions::media("(min-width: 768px)")),
    ];

    for (property, value, options) in &inputs {
        assert_eq!(
            server.register(property, value, options),
            live.register(property, value, options),
        );
    }
    assert_eq!(server.get_css(), live.get_css());
}

/// A sink whose fast path always fails, forcing the text fallback.
#[derive(Default)]
struct BrokenInsertSink {
    appended: Vec<String>,
}

impl StyleSink for BrokenInsertSink {
    fn insert_rule(&mut self, _css_text: &str, index: usize) -> Result<(), PcssError> {
        Err(PcssError::SinkRejected {
            index,
            reason: "managed stylesheet unavailable".to_string(),
        })
    }

    fn append_text(&mut self, css_text: &str) {
        self.appended.push(css_text.to_string());
    }
}

#[test]
fn failed_insertion_falls_back_to_text_append() {
    let mut registry = AtomicCssRegistry::new().with_sink(Box::new(BrokenInsertSink::default()));

    let class = registry.register("color", "red", &RuleOptions::default());

    // The rule still lands in the accumulated stylesheet either way.
    assert!(registry.get_css().contains(&class));
    assert_eq!(registry.stats().total_rules, 1);
}

#[test]
fn sink_receives_each_rule_exactly_once() {
    let mut registry = AtomicCssRegistry::new().with_sink(Box::new(MemorySink::new()));

    registry.register("color", "red", &RuleOptions::default());
    registry.register("color", "red", &RuleOptions::default());
    registry.register("padding", "4px", &RuleOptions::default());

    // Dedup means the sink saw two rules, matching the accumulated text.
    assert_eq!(registry.get_css().lines().count(), 2);
}
