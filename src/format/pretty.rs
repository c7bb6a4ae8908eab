//! Rendering of substitution parameters.

use serde_json::Value;

/// Renders one parameter value to text.
///
/// Must not fail for any input. The dispatcher never passes `Value::Null`.
pub trait PrettyPrinter: Send + Sync {
    fn prettify(&self, value: &Value) -> String;
}

/// Strings render bare, everything else as compact JSON.
#[derive(Debug, Clone, Default)]
pub struct BasicPrettyPrinter {
    /// Maximum rendered length in characters; longer output is cut and
    /// suffixed with `...`.
    pub max_len: Option<usize>,
}

impl BasicPrettyPrinter {
    pub fn new(max_len: Option<usize>) -> Self {
        Self { max_len }
    }
}

impl PrettyPrinter for BasicPrettyPrinter {
    fn prettify(&self, value: &Value) -> String {
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        match self.max_len {
            Some(max) => truncate(rendered, max),
            None => rendered,
        }
    }
}

fn truncate(mut text: String, max_chars: usize) -> String {
    if let Some((cut, _)) = text.char_indices().nth(max_chars) {
        text.truncate(cut);
        text.push_str("...");
    }
    text
}
