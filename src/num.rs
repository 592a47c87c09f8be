use crate::cast::TryCast;
use crate::error::Overflow;

#[cfg(feature = "decimal")]
use rust_decimal::Decimal;

/// Named conversions from a numeric value to every other numeric type.
///
/// Each method is a thin wrapper over [`TryCast`]; the conversion rules and
/// the single [`Overflow`] failure mode are documented there. [`to_bool`]
/// is the exception: it cannot fail, any non-zero value is `true`.
///
/// [`to_bool`]: NumExt::to_bool
pub trait NumExt: Copy {
    /// Converts the value to an `i16`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the value is out of range for the target.
    #[inline]
    fn to_i16(self) -> Result<i16, Overflow>
    where
        Self: TryCast<i16>,
    {
        self.try_cast()
    }

    /// Converts the value to a `u16`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the value is out of range for the target.
    #[inline]
    fn to_u16(self) -> Result<u16, Overflow>
    where
        Self: TryCast<u16>,
    {
        self.try_cast()
    }

    /// Converts the value to an `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the value is out of range for the target.
    #[inline]
    fn to_i32(self) -> Result<i32, Overflow>
    where
        Self: TryCast<i32>,
    {
        self.try_cast()
    }

    /// Converts the value to a `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the value is out of range for the target.
    #[inline]
    fn to_u32(self) -> Result<u32, Overflow>
    where
        Self: TryCast<u32>,
    {
        self.try_cast()
    }

    /// Converts the value to an `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the value is out of range for the target.
    #[inline]
    fn to_i64(self) -> Result<i64, Overflow>
    where
        Self: TryCast<i64>,
    {
        self.try_cast()
    }

    /// Converts the value to a `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the value is out of range for the target.
    #[inline]
    fn to_u64(self) -> Result<u64, Overflow>
    where
        Self: TryCast<u64>,
    {
        self.try_cast()
    }

    /// Converts the value to an `f32`.
    ///
    /// # Errors
    ///
    /// Infallible for every supported source; the `Result` keeps the
    /// conversion surface uniform.
    #[inline]
    fn to_f32(self) -> Result<f32, Overflow>
    where
        Self: TryCast<f32>,
    {
        self.try_cast()
    }

    /// Converts the value to an `f64`.
    ///
    /// # Errors
    ///
    /// Infallible for every supported source; the `Result` keeps the
    /// conversion surface uniform.
    #[inline]
    fn to_f64(self) -> Result<f64, Overflow>
    where
        Self: TryCast<f64>,
    {
        self.try_cast()
    }

    /// Converts the value to a `Decimal`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] for non-finite floats or magnitudes beyond the
    /// decimal range.
    #[cfg(feature = "decimal")]
    #[inline]
    fn to_decimal(self) -> Result<Decimal, Overflow>
    where
        Self: TryCast<Decimal>,
    {
        self.try_cast()
    }

    /// `true` for any non-zero value, `false` for zero.
    #[must_use]
    fn to_bool(self) -> bool;
}

impl_num_ext!(int: i16, u16, i32, u32, i64, u64);
impl_num_ext!(float: f32, f64);

#[cfg(feature = "decimal")]
impl NumExt for Decimal {
    #[inline]
    fn to_bool(self) -> bool {
        !self.is_zero()
    }
}

/// The optional-receiver forms of [`NumExt`].
///
/// An absent source returns the supplied default (itself optional, so the
/// "no default" shape is `None`). A present source converts, and overflow
/// still propagates; a default never papers over a failed narrowing.
///
/// # Example
///
/// ```
/// use easycast::NumOptExt;
///
/// assert_eq!(Some(70_000_i64).to_i32_or(None), Ok(Some(70_000)));
/// assert_eq!(None::<i64>.to_i32_or(Some(-1)), Ok(Some(-1)));
/// assert!(Some(i64::MAX).to_i32_or(Some(-1)).is_err());
/// ```
pub trait NumOptExt<S: NumExt>: Sized {
    /// The optional source value.
    fn source(self) -> Option<S>;

    /// Converts a present value to an `i16`; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value is out of range.
    fn to_i16_or(self, default: Option<i16>) -> Result<Option<i16>, Overflow>
    where
        S: TryCast<i16>,
    {
        match self.source() {
            Some(value) => value.try_cast().map(Some),
            None => Ok(default),
        }
    }

    /// Converts a present value to a `u16`; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value is out of range.
    fn to_u16_or(self, default: Option<u16>) -> Result<Option<u16>, Overflow>
    where
        S: TryCast<u16>,
    {
        match self.source() {
            Some(value) => value.try_cast().map(Some),
            None => Ok(default),
        }
    }

    /// Converts a present value to an `i32`; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value is out of range.
    fn to_i32_or(self, default: Option<i32>) -> Result<Option<i32>, Overflow>
    where
        S: TryCast<i32>,
    {
        match self.source() {
            Some(value) => value.try_cast().map(Some),
            None => Ok(default),
        }
    }

    /// Converts a present value to a `u32`; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value is out of range.
    fn to_u32_or(self, default: Option<u32>) -> Result<Option<u32>, Overflow>
    where
        S: TryCast<u32>,
    {
        match self.source() {
            Some(value) => value.try_cast().map(Some),
            None => Ok(default),
        }
    }

    /// Converts a present value to an `i64`; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value is out of range.
    fn to_i64_or(self, default: Option<i64>) -> Result<Option<i64>, Overflow>
    where
        S: TryCast<i64>,
    {
        match self.source() {
            Some(value) => value.try_cast().map(Some),
            None => Ok(default),
        }
    }

    /// Converts a present value to a `u64`; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if a present value is out of range.
    fn to_u64_or(self, default: Option<u64>) -> Result<Option<u64>, Overflow>
    where
        S: TryCast<u64>,
    {
        match self.source() {
            Some(value) => value.try_cast().map(Some),
            None => Ok(default),
        }
    }

    /// Converts a present value to an `f32`; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Infallible for every supported source.
    fn to_f32_or(self, default: Option<f32>) -> Result<Option<f32>, Overflow>
    where
        S: TryCast<f32>,
    {
        match self.source() {
            Some(value) => value.try_cast().map(Some),
            None => Ok(default),
        }
    }

    /// Converts a present value to an `f64`; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Infallible for every supported source.
    fn to_f64_or(self, default: Option<f64>) -> Result<Option<f64>, Overflow>
    where
        S: TryCast<f64>,
    {
        match self.source() {
            Some(value) => value.try_cast().map(Some),
            None => Ok(default),
        }
    }

    /// Converts a present value to a `Decimal`; absent returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] for non-finite floats or magnitudes beyond the
    /// decimal range.
    #[cfg(feature = "decimal")]
    fn to_decimal_or(self, default: Option<Decimal>) -> Result<Option<Decimal>, Overflow>
    where
        S: TryCast<Decimal>,
    {
        match self.source() {
            Some(value) => value.try_cast().map(Some),
            None => Ok(default),
        }
    }

    /// Truth value of a present source; absent returns `default`.
    fn to_bool_or(self, default: Option<bool>) -> Option<bool> {
        match self.source() {
            Some(value) => Some(value.to_bool()),
            None => default,
        }
    }
}

impl<S: NumExt> NumOptExt<S> for Option<S> {
    #[inline]
    fn source(self) -> Option<S> {
        self
    }
}
