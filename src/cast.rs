//! The checked conversion routine behind the whole numeric matrix.

use crate::error::Overflow;

#[cfg(feature = "decimal")]
use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};

/// Checked conversion from one numeric type to another.
///
/// Widening conversions always succeed. Narrowing conversions fail with
/// [`Overflow`] when the source magnitude cannot be represented in the
/// target type; they never saturate or wrap. Floating-point sources round
/// half-to-even before an integer target is range-checked, matching the
/// standard checked-conversion behavior.
///
/// Implemented for every ordered pair drawn from `i16`, `u16`, `i32`,
/// `u32`, `i64`, `u64`, `f32`, `f64` (and `Decimal` with the `decimal`
/// feature), plus `bool` as a target, where any non-zero value is `true`.
///
/// # Example
///
/// ```
/// use easycast::TryCast;
///
/// let narrowed: u16 = 300_i32.try_cast().unwrap();
/// assert_eq!(narrowed, 300);
///
/// let result: Result<u16, _> = (-1_i32).try_cast();
/// assert!(result.is_err());
/// ```
pub trait TryCast<T>: Sized {
    /// Converts `self` into the target type.
    ///
    /// # Errors
    ///
    /// Returns [`Overflow`] if the value is out of the target's range, or
    /// for floating-point sources, not finite.
    fn try_cast(self) -> Result<T, Overflow>;
}

/// Rounds half-to-even and widens to `i128` so every integer target can be
/// range-checked exactly. `None` for non-finite or out-of-range input.
fn round_to_integer(value: f64) -> Option<i128> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round_ties_even();
    // 2^127 saturates the cast below, which the per-target `try_from`
    // rejects anyway: every supported target is 64 bits or narrower.
    if rounded < i128::MIN as f64 || rounded > i128::MAX as f64 {
        return None;
    }
    Some(rounded as i128)
}

impl_cast_exact!(i16 => i16, u16, i32, u32, i64, u64);
impl_cast_exact!(u16 => i16, u16, i32, u32, i64, u64);
impl_cast_exact!(i32 => i16, u16, i32, u32, i64, u64);
impl_cast_exact!(u32 => i16, u16, i32, u32, i64, u64);
impl_cast_exact!(i64 => i16, u16, i32, u32, i64, u64);
impl_cast_exact!(u64 => i16, u16, i32, u32, i64, u64);

impl_cast_lossy!(i16 => f32, f64);
impl_cast_lossy!(u16 => f32, f64);
impl_cast_lossy!(i32 => f32, f64);
impl_cast_lossy!(u32 => f32, f64);
impl_cast_lossy!(i64 => f32, f64);
impl_cast_lossy!(u64 => f32, f64);
impl_cast_lossy!(f32 => f32, f64);
impl_cast_lossy!(f64 => f32, f64);

impl_cast_float_to_int!(f32 => i16, u16, i32, u32, i64, u64);
impl_cast_float_to_int!(f64 => i16, u16, i32, u32, i64, u64);

impl_cast_bool!(int: i16, u16, i32, u32, i64, u64);
impl_cast_bool!(float: f32, f64);

#[cfg(feature = "decimal")]
impl_cast_to_decimal!(int: i16, u16, i32, u32, i64, u64);
#[cfg(feature = "decimal")]
impl_cast_to_decimal!(float: f32 => from_f32, f64 => from_f64);

#[cfg(feature = "decimal")]
impl_cast_decimal_to_int!(
    i16 => to_i16,
    u16 => to_u16,
    i32 => to_i32,
    u32 => to_u32,
    i64 => to_i64,
    u64 => to_u64
);

#[cfg(feature = "decimal")]
impl TryCast<Decimal> for Decimal {
    #[inline]
    fn try_cast(self) -> Result<Decimal, Overflow> {
        Ok(self)
    }
}

#[cfg(feature = "decimal")]
impl TryCast<f32> for Decimal {
    fn try_cast(self) -> Result<f32, Overflow> {
        self.to_f32()
            .ok_or_else(|| Overflow::new(self, "Decimal", "f32"))
    }
}

#[cfg(feature = "decimal")]
impl TryCast<f64> for Decimal {
    fn try_cast(self) -> Result<f64, Overflow> {
        self.to_f64()
            .ok_or_else(|| Overflow::new(self, "Decimal", "f64"))
    }
}

#[cfg(feature = "decimal")]
impl TryCast<bool> for Decimal {
    #[inline]
    fn try_cast(self) -> Result<bool, Overflow> {
        Ok(!self.is_zero())
    }
}
