//! JSON (de)serialization glue.
//!
//! Serialization and strict deserialization are thin wrappers over
//! `serde_json`; the value they add is the absent-input contract. A present
//! `Option::None` serializes as the JSON text `null` through [`ToJsonExt`],
//! while [`ToJsonOptExt`] short-circuits an absent value to `Ok(None)`
//! without serializing; both call shapes exist on purpose. The same split
//! applies on the way in: [`FromJsonExt`] is strict and malformed text is
//! a [`ParseError`], but [`FromJsonOptExt`] returns `Ok(None)` for absent
//! text without attempting to parse.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ParseError;

/// Options applied when producing JSON text.
///
/// Naming policy is a property of the target type's serde attributes; what
/// remains configurable at call time is the output formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonOptions {
    /// Pretty-print with two-space indentation.
    pub pretty: bool,
}

/// Serializes any value to its JSON text form.
///
/// Blanket-implemented for every `Serialize` type. `Option::None` is a
/// valid input and serializes as the text `null`; use [`ToJsonOptExt`] for
/// the short-circuiting shape instead.
///
/// ```
/// use easycast::ToJsonExt;
///
/// assert_eq!(vec![1, 2, 3].to_json().unwrap(), "[1,2,3]");
/// assert_eq!(None::<i32>.to_json().unwrap(), "null");
/// ```
pub trait ToJsonExt: Serialize {
    /// Serializes the value to compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the value cannot be represented as JSON.
    fn to_json(&self) -> Result<String, ParseError> {
        serde_json::to_string(self).map_err(ParseError::from)
    }

    /// Serializes the value to JSON text per `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the value cannot be represented as JSON.
    fn to_json_with(&self, options: &JsonOptions) -> Result<String, ParseError> {
        if options.pretty {
            serde_json::to_string_pretty(self).map_err(ParseError::from)
        } else {
            serde_json::to_string(self).map_err(ParseError::from)
        }
    }
}

impl<T: Serialize + ?Sized> ToJsonExt for T {}

/// Serializes a value that may be absent; absent short-circuits to
/// `Ok(None)` without touching the serializer.
pub trait ToJsonOptExt {
    /// Serializes a present value to compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a present value cannot be represented as
    /// JSON.
    fn to_json_opt(&self) -> Result<Option<String>, ParseError>;

    /// Serializes a present value to JSON text per `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a present value cannot be represented as
    /// JSON.
    fn to_json_opt_with(&self, options: &JsonOptions) -> Result<Option<String>, ParseError>;
}

impl<T: Serialize> ToJsonOptExt for Option<T> {
    fn to_json_opt(&self) -> Result<Option<String>, ParseError> {
        match self {
            Some(value) => value.to_json().map(Some),
            None => Ok(None),
        }
    }

    fn to_json_opt_with(&self, options: &JsonOptions) -> Result<Option<String>, ParseError> {
        match self {
            Some(value) => value.to_json_with(options).map(Some),
            None => Ok(None),
        }
    }
}

/// Strict deserialization of JSON text.
///
/// This is the one place a malformed input is an error rather than a
/// default: text that is present must parse.
///
/// ```
/// use easycast::FromJsonExt;
///
/// let values: Vec<i32> = "[1,2,3]".deserialize_json().unwrap();
/// assert_eq!(values, [1, 2, 3]);
/// assert!("not json".deserialize_json::<Vec<i32>>().is_err());
/// ```
pub trait FromJsonExt {
    /// Deserializes the text into a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the text is not valid JSON for `T`.
    fn deserialize_json<T: DeserializeOwned>(&self) -> Result<T, ParseError>;
}

impl FromJsonExt for str {
    fn deserialize_json<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(self).map_err(ParseError::from)
    }
}

impl FromJsonExt for String {
    fn deserialize_json<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        self.as_str().deserialize_json()
    }
}

/// Strict deserialization of JSON text that may be absent.
///
/// Absent text returns `Ok(None)` without parsing; present malformed text
/// still fails with [`ParseError`].
pub trait FromJsonOptExt {
    /// Deserializes present text into a `T`; absent is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if present text is not valid JSON for `T`.
    fn deserialize_json_opt<T: DeserializeOwned>(&self) -> Result<Option<T>, ParseError>;
}

impl FromJsonOptExt for Option<&str> {
    fn deserialize_json_opt<T: DeserializeOwned>(&self) -> Result<Option<T>, ParseError> {
        match self {
            Some(text) => text.deserialize_json().map(Some),
            None => Ok(None),
        }
    }
}

impl FromJsonOptExt for Option<String> {
    fn deserialize_json_opt<T: DeserializeOwned>(&self) -> Result<Option<T>, ParseError> {
        match self {
            Some(text) => text.deserialize_json().map(Some),
            None => Ok(None),
        }
    }
}
