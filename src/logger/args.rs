//! Optional arguments of a log call.

use std::error::Error;
use std::sync::Arc;

use serde_json::Value;

use crate::model::Cause;

/// Substitution parameters and failure cause for one log call.
///
/// `LogArgs::new()` is a plain message. Parameters are only substituted
/// when present; an empty parameter list still counts as present.
///
/// ```
/// use fanout_log::logger::LogArgs;
///
/// let args = LogArgs::params(["sda", "93"])
///     .with_cause(std::io::Error::other("no space left"));
/// assert_eq!(args.param_values().map(|p| p.len()), Some(2));
/// assert!(args.cause_ref().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogArgs {
    params: Option<Vec<Value>>,
    cause: Option<Cause>,
}

impl LogArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments carrying only substitution parameters.
    pub fn params<I, V>(params: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::new().with_params(params)
    }

    /// Arguments carrying only a failure cause.
    pub fn cause<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new().with_cause(cause)
    }

    pub fn with_params<I, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.params = Some(params.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_shared_cause(Arc::new(cause))
    }

    /// Attach a cause that is already shared elsewhere.
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn param_values(&self) -> Option<&[Value]> {
        self.params.as_deref()
    }

    pub fn cause_ref(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub(crate) fn into_parts(self) -> (Option<Vec<Value>>, Option<Cause>) {
        (self.params, self.cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_has_nothing() {
        let args = LogArgs::new();
        assert!(args.param_values().is_none());
        assert!(args.cause_ref().is_none());
    }

    #[test]
    fn test_mixed_params() {
        let args = LogArgs::params([json!("a"), Value::Null, json!(3)]);
        assert_eq!(
            args.param_values(),
            Some(&[json!("a"), Value::Null, json!(3)][..])
        );
    }

    #[test]
    fn test_empty_params_are_present() {
        let args = LogArgs::params(Vec::<Value>::new());
        assert_eq!(args.param_values().map(<[Value]>::len), Some(0));
    }
}
