//! Explicit, checked conversions between numeric, temporal and text types.
//!
//! Every numeric type converts to every other numeric type through one
//! checked routine: widening is exact, narrowing that cannot represent the
//! value fails with [`Overflow`] rather than saturating or wrapping.
//! Optional receivers fall back to a caller-supplied default when the value
//! is absent. Text parses leniently: a malformed input becomes the default
//! or `None`, never an error, with strict JSON deserialization as the one
//! deliberate exception.
//!
//! # Basic usage
//!
//! ```rust
//! use easycast::{NumExt, NumOptExt, ParseExt};
//!
//! // Checked narrowing: out-of-range magnitudes are an error.
//! assert_eq!(1_000_i32.to_i16(), Ok(1_000_i16));
//! assert!((1e20_f64).to_i16().is_err());
//!
//! // Absent values fall back to the supplied default.
//! assert_eq!(None::<i32>.to_i16_or(Some(7)), Ok(Some(7)));
//!
//! // Lenient text parsing substitutes the default instead of failing.
//! assert_eq!("42".to_i32_or(0), 42);
//! assert_eq!("not a number".to_i32_or(0), 0);
//! assert_eq!("not a number".to_i32_opt(), None);
//! ```
//!
//! # Guarantees
//!
//! - Zero panics.
//! - Overflow is never silently defaulted, even on optional receivers.
//!
//! # Safety
//!
//! **No instances of `unsafe` are permitted.**

#![forbid(unsafe_code)]
#![deny(unused_qualifications)]
#![allow(
    clippy::inline_always,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

#[macro_use]
mod macros;

mod cast;
mod error;
mod num;
mod parse;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "time")]
mod time;

pub use self::cast::TryCast;
pub use self::error::Overflow;
#[cfg(feature = "json")]
pub use self::error::ParseError;
#[cfg(feature = "json")]
pub use self::json::{FromJsonExt, FromJsonOptExt, JsonOptions, ToJsonExt, ToJsonOptExt};
pub use self::num::{NumExt, NumOptExt};
pub use self::parse::{NumberFormat, ParseEnum, ParseExt};
#[cfg(feature = "time")]
pub use self::time::{TimeExt, TimeOptExt};

#[cfg(feature = "decimal")]
pub use rust_decimal::Decimal;
