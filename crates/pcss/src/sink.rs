//! Style sinks: where freshly registered rules go in a live host.
//!
//! The registry always accumulates rules in memory; a sink is the optional
//! second destination for hosts that maintain a managed stylesheet (a
//! browser-like environment injecting rules incrementally). Server-side
//! rendering uses no sink at all and extracts the accumulated text when
//! the markup is complete.

use crate::error::PcssError;

/// Incremental destination for generated CSS rules.
///
/// `insert_rule` is the fast path; when it fails the registry logs the
/// failure and falls back to `append_text`, which must not fail. Both
/// paths receive the exact same rule text, so a sink can be as simple as
/// a growing string.
pub trait StyleSink: Send {
    /// Insert one rule at the given index in the managed stylesheet.
    fn insert_rule(&mut self, css_text: &str, index: usize) -> Result<(), PcssError>;

    /// Append one rule as raw text. Fallback path; infallible.
    fn append_text(&mut self, css_text: &str);
}

/// A sink that accumulates rules into a string buffer.
///
/// Useful in tests and as the extraction target for server-side glue that
/// wants sink semantics rather than calling `get_css` at the end.
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated stylesheet text.
    pub fn contents(&self) -> &str {
        &self.buffer
    }
}

impl StyleSink for MemorySink {
    fn insert_rule(&mut self, css_text: &str, _index: usize) -> Result<(), PcssError> {
        self.append_text(css_text);
        Ok(())
    }

    fn append_text(&mut self, css_text: &str) {
        self.buffer.push_str(css_text);
        self.buffer.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_accumulates_in_order() {
        let mut sink = MemorySink::new();
        sink.insert_rule(".a { color: red; }", 0).unwrap();
        sink.insert_rule(".b { color: blue; }", 1).unwrap();
        assert_eq!(sink.contents(), ".a { color: red; }\n.b { color: blue; }\n");
    }
}
