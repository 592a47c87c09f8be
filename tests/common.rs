#![allow(unused_macros, unused_imports)]

pub use easycast::*;
pub use indoc::indoc;
pub use paste::paste;

macro_rules! utc {
    ($y:expr, $m:expr, $d:expr) => {
        utc!($y, $m, $d, 0, 0, 0)
    };
    ($y:expr, $m:expr, $d:expr, $h:expr, $min:expr, $s:expr) => {
        chrono::NaiveDate::from_ymd_opt($y, $m, $d)
            .unwrap()
            .and_hms_opt($h, $min, $s)
            .unwrap()
            .and_utc()
    };
}
