//! Duration and timestamp interpretations of numeric values.
//!
//! Durations count in 100 ns ticks, the finest unit any conversion here
//! produces. Timestamps are always UTC; tick timestamps count from
//! 0001-01-01T00:00:00Z.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::cast::TryCast;
use crate::error::Overflow;

const NANOS_PER_TICK: i64 = 100;
const TICKS_PER_MILLISECOND: i64 = 10_000;
const TICKS_PER_SECOND: i64 = 10_000_000;
const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;
const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;
const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;

fn delta_from_ticks(ticks: i64) -> Result<TimeDelta, Overflow> {
    let secs = ticks.div_euclid(TICKS_PER_SECOND);
    // rem_euclid is non-negative and below one second's worth of ticks.
    let nanos = (ticks.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
    TimeDelta::new(secs, nanos).ok_or_else(|| Overflow::new(ticks, "ticks", "TimeDelta"))
}

/// Integer sources scale exactly; a multiply that leaves `i64` is overflow.
fn delta_exact(value: i64, ticks_per_unit: i64) -> Result<TimeDelta, Overflow> {
    let ticks = value
        .checked_mul(ticks_per_unit)
        .ok_or_else(|| Overflow::new(value, "i64", "TimeDelta"))?;
    delta_from_ticks(ticks)
}

/// Float sources scale in f64 tick space and round half-to-even.
fn delta_scaled(value: f64, ticks_per_unit: i64) -> Result<TimeDelta, Overflow> {
    let ticks: i64 = (value * ticks_per_unit as f64).try_cast()?;
    delta_from_ticks(ticks)
}

fn datetime_from_unix_secs(secs: i64) -> Result<DateTime<Utc>, Overflow> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| Overflow::new(secs, "unix seconds", "DateTime"))
}

fn datetime_from_unix_millis(millis: i64) -> Result<DateTime<Utc>, Overflow> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| Overflow::new(millis, "unix milliseconds", "DateTime"))
}

fn datetime_from_ticks(ticks: i64) -> Result<DateTime<Utc>, Overflow> {
    if ticks < 0 {
        return Err(Overflow::new(ticks, "ticks", "DateTime"));
    }
    let epoch = NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Overflow::new(ticks, "ticks", "DateTime"))?;
    epoch
        .checked_add_signed(delta_from_ticks(ticks)?)
        .ok_or_else(|| Overflow::new(ticks, "ticks", "DateTime"))
}

/// Interprets a numeric value as a duration or an absolute point in time.
///
/// Implemented for the integer and float types. Durations are
/// [`TimeDelta`]s with 100 ns tick precision; timestamps are
/// [`DateTime<Utc>`], from the Unix epoch or from raw ticks since
/// 0001-01-01T00:00:00Z.
///
/// The only failure mode is [`Overflow`] from the underlying
/// numeric-to-integer step: non-finite floats, scale factors that leave the
/// tick range, out-of-range epochs, or negative tick timestamps.
///
/// # Example
///
/// ```
/// use easycast::TimeExt;
///
/// let minute = 60_i64.to_duration_from_secs().unwrap();
/// assert_eq!(minute.num_minutes(), 1);
///
/// let epoch = 1_609_459_200_i64.to_datetime_from_unix_secs().unwrap();
/// assert_eq!(epoch.to_rfc3339(), "2021-01-01T00:00:00+00:00");
/// ```
pub trait TimeExt: Copy {
    /// Interprets the value as whole and fractional seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the scaled value leaves the tick range.
    fn to_duration_from_secs(self) -> Result<TimeDelta, Overflow>;

    /// Interprets the value as minutes.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the scaled value leaves the tick range.
    fn to_duration_from_mins(self) -> Result<TimeDelta, Overflow>;

    /// Interprets the value as hours.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the scaled value leaves the tick range.
    fn to_duration_from_hours(self) -> Result<TimeDelta, Overflow>;

    /// Interprets the value as days.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the scaled value leaves the tick range.
    fn to_duration_from_days(self) -> Result<TimeDelta, Overflow>;

    /// Interprets the value as milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the scaled value leaves the tick range.
    fn to_duration_from_millis(self) -> Result<TimeDelta, Overflow>;

    /// Interprets the value as 100 ns clock ticks.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the value does not fit in `i64` ticks.
    fn to_duration_from_ticks(self) -> Result<TimeDelta, Overflow>;

    /// Interprets the value as a Unix timestamp in seconds, in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the instant is outside the representable
    /// calendar range.
    fn to_datetime_from_unix_secs(self) -> Result<DateTime<Utc>, Overflow>;

    /// Interprets the value as a Unix timestamp in milliseconds, in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the instant is outside the representable
    /// calendar range.
    fn to_datetime_from_unix_millis(self) -> Result<DateTime<Utc>, Overflow>;

    /// Interprets the value as 100 ns ticks since 0001-01-01T00:00:00Z.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] for negative tick counts or values that do not
    /// fit in `i64` ticks.
    fn to_datetime_from_ticks(self) -> Result<DateTime<Utc>, Overflow>;
}

impl_time_ext!(int: i16, u16, i32, u32, i64, u64);
impl_time_ext!(float: f32, f64);

/// The optional-receiver forms of [`TimeExt`].
///
/// An absent source returns the supplied default; a present source converts
/// and overflow still propagates.
pub trait TimeOptExt<S: TimeExt>: Sized {
    /// The optional source value.
    fn source(self) -> Option<S>;

    /// Seconds interpretation of a present value; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value fails to convert.
    fn to_duration_from_secs_or(
        self,
        default: Option<TimeDelta>,
    ) -> Result<Option<TimeDelta>, Overflow> {
        match self.source() {
            Some(value) => value.to_duration_from_secs().map(Some),
            None => Ok(default),
        }
    }

    /// Minutes interpretation of a present value; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value fails to convert.
    fn to_duration_from_mins_or(
        self,
        default: Option<TimeDelta>,
    ) -> Result<Option<TimeDelta>, Overflow> {
        match self.source() {
            Some(value) => value.to_duration_from_mins().map(Some),
            None => Ok(default),
        }
    }

    /// Hours interpretation of a present value; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value fails to convert.
    fn to_duration_from_hours_or(
        self,
        default: Option<TimeDelta>,
    ) -> Result<Option<TimeDelta>, Overflow> {
        match self.source() {
            Some(value) => value.to_duration_from_hours().map(Some),
            None => Ok(default),
        }
    }

    /// Days interpretation of a present value; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value fails to convert.
    fn to_duration_from_days_or(
        self,
        default: Option<TimeDelta>,
    ) -> Result<Option<TimeDelta>, Overflow> {
        match self.source() {
            Some(value) => value.to_duration_from_days().map(Some),
            None => Ok(default),
        }
    }

    /// Milliseconds interpretation of a present value; absent returns
    /// `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value fails to convert.
    fn to_duration_from_millis_or(
        self,
        default: Option<TimeDelta>,
    ) -> Result<Option<TimeDelta>, Overflow> {
        match self.source() {
            Some(value) => value.to_duration_from_millis().map(Some),
            None => Ok(default),
        }
    }

    /// Tick interpretation of a present value; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value fails to convert.
    fn to_duration_from_ticks_or(
        self,
        default: Option<TimeDelta>,
    ) -> Result<Option<TimeDelta>, Overflow> {
        match self.source() {
            Some(value) => value.to_duration_from_ticks().map(Some),
            None => Ok(default),
        }
    }

    /// Unix-seconds timestamp of a present value; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value fails to convert.
    fn to_datetime_from_unix_secs_or(
        self,
        default: Option<DateTime<Utc>>,
    ) -> Result<Option<DateTime<Utc>>, Overflow> {
        match self.source() {
            Some(value) => value.to_datetime_from_unix_secs().map(Some),
            None => Ok(default),
        }
    }

    /// Unix-milliseconds timestamp of a present value; absent returns
    /// `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value fails to convert.
    fn to_datetime_from_unix_millis_or(
        self,
        default: Option<DateTime<Utc>>,
    ) -> Result<Option<DateTime<Utc>>, Overflow> {
        match self.source() {
            Some(value) => value.to_datetime_from_unix_millis().map(Some),
            None => Ok(default),
        }
    }

    /// Tick timestamp of a present value; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value fails to convert.
    fn to_datetime_from_ticks_or(
        self,
        default: Option<DateTime<Utc>>,
    ) -> Result<Option<DateTime<Utc>>, Overflow> {
        match self.source() {
            Some(value) => value.to_datetime_from_ticks().map(Some),
            None => Ok(default),
        }
    }
}

impl<S: TimeExt> TimeOptExt<S> for Option<S> {
    #[inline]
    fn source(self) -> Option<S> {
        self
    }
}
