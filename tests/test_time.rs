#[macro_use]
mod common;

use common::*;

///////////////////////////////////////////////////////////////////////////////
// Durations

macro_rules! test_minute_from_secs {
    ($($ty:ident),+ $(,)?) => {$(
        paste! {
            #[test]
            fn [<test_ $ty _sixty_secs_is_one_minute>]() {
                let minute = (60 as $ty).to_duration_from_secs().unwrap();
                assert_eq!(minute.num_minutes(), 1);
            }
        }
    )+};
}

test_minute_from_secs!(i16, u16, i32, u32, i64, u64, f32, f64);

#[test]
fn test_duration_units() {
    assert_eq!(2_i32.to_duration_from_mins().unwrap().num_seconds(), 120);
    assert_eq!(3_i64.to_duration_from_hours().unwrap().num_minutes(), 180);
    assert_eq!(2_u16.to_duration_from_days().unwrap().num_hours(), 48);
    assert_eq!(
        1_500_i32.to_duration_from_millis().unwrap().num_milliseconds(),
        1_500
    );
    assert_eq!(
        10_000_000_i64.to_duration_from_ticks().unwrap().num_seconds(),
        1
    );
}

#[test]
fn test_negative_durations() {
    assert_eq!((-90_i32).to_duration_from_secs().unwrap().num_seconds(), -90);
    assert_eq!(
        (-15_000_000_i64)
            .to_duration_from_ticks()
            .unwrap()
            .num_milliseconds(),
        -1_500
    );
}

#[test]
fn test_float_durations_keep_fractions() {
    assert_eq!(
        1.5_f64.to_duration_from_secs().unwrap().num_milliseconds(),
        1_500
    );
    assert_eq!(
        0.5_f64.to_duration_from_mins().unwrap().num_seconds(),
        30
    );
    assert_eq!(
        1.5_f32.to_duration_from_days().unwrap().num_hours(),
        36
    );
}

#[test]
fn test_duration_overflow() {
    assert!(i64::MAX.to_duration_from_secs().is_err());
    assert!(u64::MAX.to_duration_from_ticks().is_err());
    assert!(f64::NAN.to_duration_from_secs().is_err());
    assert!((1e300_f64).to_duration_from_days().is_err());
}

///////////////////////////////////////////////////////////////////////////////
// Timestamps

#[test]
fn test_unix_seconds_timestamp() {
    let expected = utc!(2021, 1, 1);
    assert_eq!(
        1_609_459_200_i64.to_datetime_from_unix_secs().unwrap(),
        expected
    );
    assert_eq!(
        1_609_459_200_u32.to_datetime_from_unix_secs().unwrap(),
        expected
    );
    assert_eq!(
        1_609_459_200.0_f64.to_datetime_from_unix_secs().unwrap(),
        expected
    );
}

#[test]
fn test_unix_millis_timestamp() {
    assert_eq!(
        1_609_459_200_000_i64
            .to_datetime_from_unix_millis()
            .unwrap(),
        utc!(2021, 1, 1)
    );
    assert_eq!(
        500_i16.to_datetime_from_unix_millis().unwrap(),
        utc!(1970, 1, 1) + chrono::TimeDelta::milliseconds(500)
    );
}

#[test]
fn test_ticks_timestamp() {
    // The Unix epoch, expressed in 100 ns ticks since 0001-01-01.
    assert_eq!(
        621_355_968_000_000_000_i64
            .to_datetime_from_ticks()
            .unwrap(),
        utc!(1970, 1, 1)
    );
    assert_eq!(0_i64.to_datetime_from_ticks().unwrap(), utc!(1, 1, 1));
}

#[test]
fn test_timestamp_overflow() {
    assert!(i64::MAX.to_datetime_from_unix_secs().is_err());
    assert!((-1_i64).to_datetime_from_ticks().is_err());
    assert!(f64::INFINITY.to_datetime_from_unix_millis().is_err());
}

///////////////////////////////////////////////////////////////////////////////
// Optional receivers

#[test]
fn test_absent_returns_default() {
    let fallback = chrono::TimeDelta::seconds(5);
    assert_eq!(
        None::<i32>.to_duration_from_secs_or(Some(fallback)),
        Ok(Some(fallback))
    );
    assert_eq!(None::<i32>.to_duration_from_millis_or(None), Ok(None));
    assert_eq!(
        None::<i64>.to_datetime_from_unix_secs_or(Some(utc!(2020, 6, 1))),
        Ok(Some(utc!(2020, 6, 1)))
    );
}

#[test]
fn test_present_value_converts() {
    assert_eq!(
        Some(60_i32).to_duration_from_secs_or(None).unwrap(),
        Some(chrono::TimeDelta::minutes(1))
    );
    assert_eq!(
        Some(1_609_459_200_i64)
            .to_datetime_from_unix_secs_or(None)
            .unwrap(),
        Some(utc!(2021, 1, 1))
    );
}

#[test]
fn test_present_overflow_is_never_defaulted() {
    let fallback = chrono::TimeDelta::zero();
    assert!(Some(i64::MAX).to_duration_from_days_or(Some(fallback)).is_err());
    assert!(Some(-1_i64)
        .to_datetime_from_ticks_or(Some(utc!(2020, 1, 1)))
        .is_err());
}
