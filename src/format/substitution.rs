//! Positional `{i}` placeholder substitution.

use serde_json::Value;

use crate::format::PrettyPrinter;

/// Replace `{0}`, `{1}`, ... in `message` with the rendered parameters.
///
/// Indices are processed in increasing order, each as one literal
/// replace-all over the message produced by the previous index. Text
/// inserted for index `i` is therefore visible to later indices but never
/// re-expanded for `i` itself. Tokens without a parameter stay as written.
pub fn substitute(message: &str, params: &[Value], printer: &dyn PrettyPrinter) -> String {
    let mut out = message.to_string();

    for (i, param) in params.iter().enumerate() {
        let token = format!("{{{i}}}");
        if !out.contains(&token) {
            continue;
        }

        let replacement = match param {
            Value::Null => "null".to_string(),
            value => printer.prettify(value),
        };
        out = out.replace(&token, &replacement);
    }

    out
}
