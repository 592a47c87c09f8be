#[macro_use]
mod common;

use common::*;
use uuid::Uuid;

///////////////////////////////////////////////////////////////////////////////
// Integers

#[test]
fn test_parse_i32() {
    assert_eq!("42".to_i32_or(0), 42);
    assert_eq!(" +7 ".to_i32_or(0), 7);
    assert_eq!("-13".to_i32_opt(), Some(-13));
    assert_eq!("abc".to_i32_or(0), 0);
    assert_eq!("abc".to_i32_opt(), None);
    assert_eq!("abc".to_i32_opt_or(Some(-1)), Some(-1));
    assert_eq!("4000000000".to_i32_opt(), None);
}

///////////////////////////////////////////////////////////////////////////////
// Floats

#[test]
fn test_parse_f64_invariant() {
    assert_eq!("3.14".to_f64_or(0.0), 3.14);
    assert_eq!(" 2.5e3 ".to_f64_opt(), Some(2_500.0));
    assert_eq!("1,234.5".to_f64_opt(), Some(1_234.5));
    assert_eq!("not a number".to_f64_or(-1.0), -1.0);
    assert_eq!("not a number".to_f64_opt_or(Some(9.0)), Some(9.0));
}

#[test]
fn test_parse_f64_with_format() {
    let german = NumberFormat {
        decimal_point: ',',
        group_separator: Some('.'),
    };
    assert_eq!("1.234,5".to_f64_or_with(0.0, &german), 1_234.5);
    assert_eq!("0,5".to_f64_opt_with(&german), Some(0.5));
    assert_eq!("garbage".to_f64_or_with(2.0, &german), 2.0);

    let plain = NumberFormat {
        decimal_point: '.',
        group_separator: None,
    };
    assert_eq!("1.5".to_f64_opt_with(&plain), Some(1.5));
}

///////////////////////////////////////////////////////////////////////////////
// Booleans

#[test]
fn test_parse_bool() {
    assert!("true".to_bool_or(false));
    assert!("TRUE".to_bool_or(false));
    assert!(!" False ".to_bool_or(true));
    assert!(!"yes".to_bool_or(false));
    assert_eq!("no".to_bool_opt(), None);
    assert_eq!("no".to_bool_opt_or(Some(true)), Some(true));
}

///////////////////////////////////////////////////////////////////////////////
// Datetimes

#[test]
fn test_parse_datetime_invariant() {
    let expected = utc!(2021, 1, 1);
    assert_eq!("2021-01-01T00:00:00Z".to_datetime_opt(), Some(expected));
    assert_eq!("2021-01-01T00:00:00".to_datetime_opt(), Some(expected));
    assert_eq!("2021-01-01".to_datetime_opt(), Some(expected));
    assert_eq!(
        "2021-01-01 12:30:00".to_datetime_opt(),
        Some(utc!(2021, 1, 1, 12, 30, 0))
    );
    assert_eq!("last tuesday".to_datetime_or(expected), expected);
    assert_eq!("last tuesday".to_datetime_opt(), None);
    assert_eq!(
        "last tuesday".to_datetime_opt_or(Some(expected)),
        Some(expected)
    );
}

#[test]
fn test_parse_datetime_with_format() {
    assert_eq!(
        "01/02/2021".to_datetime_opt_with("%d/%m/%Y"),
        Some(utc!(2021, 2, 1))
    );
    assert_eq!(
        "2021-02-01 00:00".to_datetime_opt_with("%d/%m/%Y"),
        None
    );
    assert_eq!(
        "garbage".to_datetime_or_with(utc!(1970, 1, 1), "%d/%m/%Y"),
        utc!(1970, 1, 1)
    );
}

///////////////////////////////////////////////////////////////////////////////
// GUIDs

#[test]
fn test_parse_guid() {
    let expected = Uuid::try_parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    assert_eq!(
        "67e55044-10b1-426f-9247-bb680e5fe0c8".to_guid_opt(),
        Some(expected)
    );
    assert_eq!(
        "{67e55044-10b1-426f-9247-bb680e5fe0c8}".to_guid_opt(),
        Some(expected)
    );
    assert_eq!(
        "67e5504410b1426f9247bb680e5fe0c8".to_guid_opt(),
        Some(expected)
    );
    assert_eq!("not a guid".to_guid_or(Uuid::nil()), Uuid::nil());
    assert_eq!("not a guid".to_guid_opt(), None);
    assert_eq!(
        "not a guid".to_guid_opt_or(Some(expected)),
        Some(expected)
    );
}

///////////////////////////////////////////////////////////////////////////////
// Enums

#[derive(Debug, Copy, Clone, PartialEq)]
enum Color {
    Red,
    Green,
    Blue,
}

easycast::enum_variants!(Color { Red, Green, Blue });

#[test]
fn test_parse_enum_by_name() {
    assert_eq!("Green".to_enum_opt(), Some(Color::Green));
    assert_eq!("green".to_enum_opt(), Some(Color::Green));
    assert_eq!("BLUE".to_enum_or(Color::Red), Color::Blue);
    assert_eq!(" red ".to_enum_opt(), Some(Color::Red));
    assert_eq!("chartreuse".to_enum_or(Color::Red), Color::Red);
    assert_eq!("chartreuse".to_enum_opt::<Color>(), None);
    assert_eq!(
        "chartreuse".to_enum_opt_or(Some(Color::Blue)),
        Some(Color::Blue)
    );
}

#[test]
fn test_enum_numeric_strings_do_not_parse() {
    assert_eq!("1".to_enum_opt::<Color>(), None);
}

///////////////////////////////////////////////////////////////////////////////
// Absent receivers

#[test]
fn test_absent_text_is_a_parse_failure() {
    assert_eq!(None::<&str>.to_i32_or(5), 5);
    assert_eq!(None::<&str>.to_i32_opt(), None);
    assert_eq!(None::<String>.to_f64_or(1.5), 1.5);
    assert_eq!(None::<&str>.to_bool_opt_or(Some(true)), Some(true));
    assert_eq!(None::<&str>.to_datetime_opt(), None);
    assert_eq!(None::<&str>.to_guid_opt(), None);
    assert_eq!(None::<&str>.to_enum_opt::<Color>(), None);
}

#[test]
fn test_present_text_receivers() {
    assert_eq!(Some("42").to_i32_or(0), 42);
    assert_eq!(Some("2.5".to_string()).to_f64_opt(), Some(2.5));
    assert_eq!("42".to_string().to_i32_opt(), Some(42));
}
