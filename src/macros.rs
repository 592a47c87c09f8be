macro_rules! impl_cast_exact {
    ($src:ty => $($dst:ty),+) => {$(
        impl TryCast<$dst> for $src {
            #[inline]
            fn try_cast(self) -> Result<$dst, Overflow> {
                <$dst>::try_from(self)
                    .map_err(|_| Overflow::new(self, stringify!($src), stringify!($dst)))
            }
        }
    )+};
}

macro_rules! impl_cast_lossy {
    ($src:ty => $($dst:ty),+) => {$(
        impl TryCast<$dst> for $src {
            #[inline]
            #[allow(trivial_numeric_casts, clippy::cast_lossless)]
            fn try_cast(self) -> Result<$dst, Overflow> {
                Ok(self as $dst)
            }
        }
    )+};
}

macro_rules! impl_cast_float_to_int {
    ($src:ty => $($dst:ty),+) => {$(
        impl TryCast<$dst> for $src {
            fn try_cast(self) -> Result<$dst, Overflow> {
                let rounded = round_to_integer(f64::from(self))
                    .ok_or_else(|| Overflow::new(self, stringify!($src), stringify!($dst)))?;
                <$dst>::try_from(rounded)
                    .map_err(|_| Overflow::new(self, stringify!($src), stringify!($dst)))
            }
        }
    )+};
}

macro_rules! impl_cast_bool {
    (int: $($src:ty),+) => {$(
        impl TryCast<bool> for $src {
            #[inline]
            fn try_cast(self) -> Result<bool, Overflow> {
                Ok(self != 0)
            }
        }
    )+};
    (float: $($src:ty),+) => {$(
        impl TryCast<bool> for $src {
            #[inline]
            fn try_cast(self) -> Result<bool, Overflow> {
                Ok(self != 0.0)
            }
        }
    )+};
}

macro_rules! impl_cast_to_decimal {
    (int: $($src:ty),+) => {$(
        impl TryCast<Decimal> for $src {
            #[inline]
            fn try_cast(self) -> Result<Decimal, Overflow> {
                Ok(Decimal::from(self))
            }
        }
    )+};
    (float: $($src:ty => $from:ident),+) => {$(
        impl TryCast<Decimal> for $src {
            fn try_cast(self) -> Result<Decimal, Overflow> {
                Decimal::$from(self)
                    .ok_or_else(|| Overflow::new(self, stringify!($src), "Decimal"))
            }
        }
    )+};
}

macro_rules! impl_cast_decimal_to_int {
    ($($dst:ty => $to:ident),+) => {$(
        impl TryCast<$dst> for Decimal {
            fn try_cast(self) -> Result<$dst, Overflow> {
                self.round()
                    .$to()
                    .ok_or_else(|| Overflow::new(self, "Decimal", stringify!($dst)))
            }
        }
    )+};
}

macro_rules! impl_num_ext {
    (int: $($ty:ty),+) => {$(
        impl NumExt for $ty {
            #[inline]
            fn to_bool(self) -> bool {
                self != 0
            }
        }
    )+};
    (float: $($ty:ty),+) => {$(
        impl NumExt for $ty {
            #[inline]
            fn to_bool(self) -> bool {
                self != 0.0
            }
        }
    )+};
}

macro_rules! impl_time_ext {
    (int: $($ty:ty),+) => {$(
        impl TimeExt for $ty {
            fn to_duration_from_secs(self) -> Result<TimeDelta, Overflow> {
                delta_exact(self.try_cast()?, TICKS_PER_SECOND)
            }

            fn to_duration_from_mins(self) -> Result<TimeDelta, Overflow> {
                delta_exact(self.try_cast()?, TICKS_PER_MINUTE)
            }

            fn to_duration_from_hours(self) -> Result<TimeDelta, Overflow> {
                delta_exact(self.try_cast()?, TICKS_PER_HOUR)
            }

            fn to_duration_from_days(self) -> Result<TimeDelta, Overflow> {
                delta_exact(self.try_cast()?, TICKS_PER_DAY)
            }

            fn to_duration_from_millis(self) -> Result<TimeDelta, Overflow> {
                delta_exact(self.try_cast()?, TICKS_PER_MILLISECOND)
            }

            fn to_duration_from_ticks(self) -> Result<TimeDelta, Overflow> {
                delta_from_ticks(self.try_cast()?)
            }

            fn to_datetime_from_unix_secs(self) -> Result<DateTime<Utc>, Overflow> {
                datetime_from_unix_secs(self.try_cast()?)
            }

            fn to_datetime_from_unix_millis(self) -> Result<DateTime<Utc>, Overflow> {
                datetime_from_unix_millis(self.try_cast()?)
            }

            fn to_datetime_from_ticks(self) -> Result<DateTime<Utc>, Overflow> {
                datetime_from_ticks(self.try_cast()?)
            }
        }
    )+};
    (float: $($ty:ty),+) => {$(
        impl TimeExt for $ty {
            fn to_duration_from_secs(self) -> Result<TimeDelta, Overflow> {
                delta_scaled(f64::from(self), TICKS_PER_SECOND)
            }

            fn to_duration_from_mins(self) -> Result<TimeDelta, Overflow> {
                delta_scaled(f64::from(self), TICKS_PER_MINUTE)
            }

            fn to_duration_from_hours(self) -> Result<TimeDelta, Overflow> {
                delta_scaled(f64::from(self), TICKS_PER_HOUR)
            }

            fn to_duration_from_days(self) -> Result<TimeDelta, Overflow> {
                delta_scaled(f64::from(self), TICKS_PER_DAY)
            }

            fn to_duration_from_millis(self) -> Result<TimeDelta, Overflow> {
                delta_scaled(f64::from(self), TICKS_PER_MILLISECOND)
            }

            fn to_duration_from_ticks(self) -> Result<TimeDelta, Overflow> {
                delta_from_ticks(self.try_cast()?)
            }

            fn to_datetime_from_unix_secs(self) -> Result<DateTime<Utc>, Overflow> {
                datetime_from_unix_secs(self.try_cast()?)
            }

            fn to_datetime_from_unix_millis(self) -> Result<DateTime<Utc>, Overflow> {
                datetime_from_unix_millis(self.try_cast()?)
            }

            fn to_datetime_from_ticks(self) -> Result<DateTime<Utc>, Overflow> {
                datetime_from_ticks(self.try_cast()?)
            }
        }
    )+};
}

/// Implements [`ParseEnum`](crate::ParseEnum) for a unit-variant enum,
/// enabling case-insensitive parsing by variant name.
///
/// ```rust
/// use easycast::ParseExt;
///
/// #[derive(Debug, Copy, Clone, PartialEq)]
/// enum Color {
///     Red,
///     Green,
///     Blue,
/// }
///
/// easycast::enum_variants!(Color { Red, Green, Blue });
///
/// assert_eq!("green".to_enum_or(Color::Red), Color::Green);
/// assert_eq!("chartreuse".to_enum_opt::<Color>(), None);
/// ```
#[macro_export]
macro_rules! enum_variants {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::ParseEnum for $ty {
            const VARIANTS: &'static [(&'static str, Self)] =
                &[$((stringify!($variant), Self::$variant)),+];
        }
    };
}
