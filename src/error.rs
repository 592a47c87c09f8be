use core::fmt;

use thiserror::Error;

/// A numeric narrowing conversion could not represent the source value in
/// the target type.
///
/// `Overflow` always propagates to the caller: conversions never saturate,
/// never wrap, and never substitute a default for an out-of-range value,
/// optional receivers included.
///
/// # Example
///
/// ```
/// use easycast::NumExt;
///
/// let error = (1e20_f64).to_i16().unwrap_err();
///
/// assert_eq!(
///     format!("{}", error),
///     "`f64` value 100000000000000000000 out of range for `i16`",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{from}` value {value} out of range for `{to}`")]
pub struct Overflow {
    value: String,
    from: &'static str,
    to: &'static str,
}

impl Overflow {
    pub(crate) fn new(value: impl fmt::Display, from: &'static str, to: &'static str) -> Self {
        Self {
            value: value.to_string(),
            from,
            to,
        }
    }

    /// The source value, rendered as text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Name of the type converted from.
    #[must_use]
    pub fn source_type(&self) -> &'static str {
        self.from
    }

    /// Name of the type converted to.
    #[must_use]
    pub fn target_type(&self) -> &'static str {
        self.to
    }
}

/// Structured deserialization was handed malformed text.
///
/// This is the one failure that propagates instead of falling back to a
/// default: absent input short-circuits before parsing, but present text
/// that is not valid JSON is an error.
#[cfg(feature = "json")]
#[derive(Debug, Error)]
#[error("malformed JSON: {0}")]
pub struct ParseError(#[from] serde_json::Error);
