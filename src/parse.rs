//! Lenient text parsing: malformed or absent input becomes the caller's
//! default, never an error.

use std::borrow::Cow;

#[cfg(feature = "time")]
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
#[cfg(feature = "uuid")]
use uuid::Uuid;

/// Numeric text format, invariant by default.
///
/// The invariant format is a `.` decimal point with `,` accepted (and
/// ignored) as a digit group separator. Override the fields to parse
/// region-specific text, for example `1.234,5`:
///
/// ```
/// use easycast::{NumberFormat, ParseExt};
///
/// let format = NumberFormat {
///     decimal_point: ',',
///     group_separator: Some('.'),
/// };
///
/// assert_eq!("1.234,5".to_f64_or_with(0.0, &format), 1234.5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    /// Character separating the integer and fractional parts.
    pub decimal_point: char,
    /// Digit group separator to strip before parsing, if any.
    pub group_separator: Option<char>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_point: '.',
            group_separator: Some(','),
        }
    }
}

impl NumberFormat {
    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.decimal_point == '.' && self.group_separator.is_none() {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if Some(c) == self.group_separator {
                continue;
            }
            if c == self.decimal_point {
                out.push('.');
            } else {
                out.push(c);
            }
        }
        Cow::Owned(out)
    }
}

/// An enumeration whose variants parse from text by name.
///
/// Lookup is ASCII-case-insensitive and trims surrounding whitespace.
/// Implement it with the [`enum_variants!`](crate::enum_variants) macro
/// rather than by hand.
pub trait ParseEnum: Copy + 'static {
    /// Name and value of every variant.
    const VARIANTS: &'static [(&'static str, Self)];

    /// Looks a variant up by name. `None` if nothing matches.
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::VARIANTS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, value)| value)
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(feature = "time")]
fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(feature = "time")]
fn parse_datetime_with(text: &str, format: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_str(text, format) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, format)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parses text into primitives, falling back to a default instead of
/// failing.
///
/// Implemented for `str`, `String`, `Option<&str>` and `Option<String>`;
/// an absent receiver counts as a parse failure, so it takes the default
/// path too. Each target type offers three entry points:
///
/// - `to_X_or(default)` returns the default on failure, never an error;
/// - `to_X_opt()` returns `None` on failure;
/// - `to_X_opt_or(default)` returns an explicit (optional) default on
///   failure.
///
/// ```
/// use easycast::ParseExt;
///
/// assert_eq!("42".to_i32_or(0), 42);
/// assert_eq!("forty-two".to_i32_or(0), 0);
/// assert_eq!(None::<&str>.to_i32_opt(), None);
/// assert_eq!("forty-two".to_i32_opt_or(Some(-1)), Some(-1));
/// ```
pub trait ParseExt {
    /// The raw text, if present.
    fn as_text(&self) -> Option<&str>;

    /// Parses an `i32`, substituting `default` on failure.
    #[must_use]
    fn to_i32_or(&self, default: i32) -> i32 {
        self.to_i32_opt().unwrap_or(default)
    }

    /// Parses an `i32`; `None` on failure.
    #[must_use]
    fn to_i32_opt(&self) -> Option<i32> {
        self.as_text().and_then(|text| text.trim().parse().ok())
    }

    /// Parses an `i32`, substituting the explicit optional `default` on
    /// failure.
    #[must_use]
    fn to_i32_opt_or(&self, default: Option<i32>) -> Option<i32> {
        self.to_i32_opt().or(default)
    }

    /// Parses an `f64` with the invariant format, substituting `default`
    /// on failure.
    #[must_use]
    fn to_f64_or(&self, default: f64) -> f64 {
        self.to_f64_opt().unwrap_or(default)
    }

    /// Parses an `f64` with an explicit format, substituting `default` on
    /// failure.
    #[must_use]
    fn to_f64_or_with(&self, default: f64, format: &NumberFormat) -> f64 {
        self.to_f64_opt_with(format).unwrap_or(default)
    }

    /// Parses an `f64` with the invariant format; `None` on failure.
    #[must_use]
    fn to_f64_opt(&self) -> Option<f64> {
        self.to_f64_opt_with(&NumberFormat::default())
    }

    /// Parses an `f64` with an explicit format; `None` on failure.
    #[must_use]
    fn to_f64_opt_with(&self, format: &NumberFormat) -> Option<f64> {
        let text = self.as_text()?;
        format.normalize(text.trim()).parse().ok()
    }

    /// Parses an `f64` with the invariant format, substituting the
    /// explicit optional `default` on failure.
    #[must_use]
    fn to_f64_opt_or(&self, default: Option<f64>) -> Option<f64> {
        self.to_f64_opt().or(default)
    }

    /// Parses a `bool` (`true`/`false`, any case), substituting `default`
    /// on failure.
    #[must_use]
    fn to_bool_or(&self, default: bool) -> bool {
        self.to_bool_opt().unwrap_or(default)
    }

    /// Parses a `bool`; `None` on failure.
    #[must_use]
    fn to_bool_opt(&self) -> Option<bool> {
        self.as_text().and_then(parse_bool)
    }

    /// Parses a `bool`, substituting the explicit optional `default` on
    /// failure.
    #[must_use]
    fn to_bool_opt_or(&self, default: Option<bool>) -> Option<bool> {
        self.to_bool_opt().or(default)
    }

    /// Parses an absolute UTC time, substituting `default` on failure.
    ///
    /// Accepts RFC 3339 plus the invariant `%Y-%m-%dT%H:%M:%S`,
    /// `%Y-%m-%d %H:%M:%S` and `%Y-%m-%d` fallbacks; zone-less text is
    /// taken as UTC.
    #[cfg(feature = "time")]
    #[must_use]
    fn to_datetime_or(&self, default: DateTime<Utc>) -> DateTime<Utc> {
        self.to_datetime_opt().unwrap_or(default)
    }

    /// Parses an absolute UTC time with an explicit chrono format string,
    /// substituting `default` on failure.
    #[cfg(feature = "time")]
    #[must_use]
    fn to_datetime_or_with(&self, default: DateTime<Utc>, format: &str) -> DateTime<Utc> {
        self.to_datetime_opt_with(format).unwrap_or(default)
    }

    /// Parses an absolute UTC time; `None` on failure.
    #[cfg(feature = "time")]
    #[must_use]
    fn to_datetime_opt(&self) -> Option<DateTime<Utc>> {
        self.as_text().and_then(parse_datetime)
    }

    /// Parses an absolute UTC time with an explicit chrono format string;
    /// `None` on failure.
    #[cfg(feature = "time")]
    #[must_use]
    fn to_datetime_opt_with(&self, format: &str) -> Option<DateTime<Utc>> {
        self.as_text().and_then(|text| parse_datetime_with(text, format))
    }

    /// Parses an absolute UTC time, substituting the explicit optional
    /// `default` on failure.
    #[cfg(feature = "time")]
    #[must_use]
    fn to_datetime_opt_or(&self, default: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
        self.to_datetime_opt().or(default)
    }

    /// Parses a GUID (hyphenated, simple, braced or URN form),
    /// substituting `default` on failure.
    #[cfg(feature = "uuid")]
    #[must_use]
    fn to_guid_or(&self, default: Uuid) -> Uuid {
        self.to_guid_opt().unwrap_or(default)
    }

    /// Parses a GUID; `None` on failure.
    #[cfg(feature = "uuid")]
    #[must_use]
    fn to_guid_opt(&self) -> Option<Uuid> {
        self.as_text()
            .and_then(|text| Uuid::try_parse(text.trim()).ok())
    }

    /// Parses a GUID, substituting the explicit optional `default` on
    /// failure.
    #[cfg(feature = "uuid")]
    #[must_use]
    fn to_guid_opt_or(&self, default: Option<Uuid>) -> Option<Uuid> {
        self.to_guid_opt().or(default)
    }

    /// Parses an enum variant by name (case-insensitive), substituting
    /// `default` on failure.
    #[must_use]
    fn to_enum_or<E: ParseEnum>(&self, default: E) -> E {
        self.to_enum_opt().unwrap_or(default)
    }

    /// Parses an enum variant by name; `None` on failure.
    #[must_use]
    fn to_enum_opt<E: ParseEnum>(&self) -> Option<E> {
        self.as_text().and_then(E::from_name)
    }

    /// Parses an enum variant by name, substituting the explicit optional
    /// `default` on failure.
    #[must_use]
    fn to_enum_opt_or<E: ParseEnum>(&self, default: Option<E>) -> Option<E> {
        self.to_enum_opt().or(default)
    }
}

impl ParseExt for str {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl ParseExt for String {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl ParseExt for Option<&str> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        *self
    }
}

impl ParseExt for Option<String> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        self.as_deref()
    }
}
