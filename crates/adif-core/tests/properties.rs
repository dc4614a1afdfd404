//! Property tests across the normalization engines.

use adif_core::coordinate::{format_coordinate_code, is_xdddmmm};
use adif_core::date::{is_valid_date_yyyymmdd, sanitize_date_to_yyyymmdd};
use adif_core::time::{is_valid_time_adif, sanitize_time_to_adif};
use adif_model::Hemisphere;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn hemisphere() -> impl Strategy<Value = Hemisphere> {
    prop_oneof![
        Just(Hemisphere::North),
        Just(Hemisphere::South),
        Just(Hemisphere::East),
        Just(Hemisphere::West),
    ]
}

proptest! {
    #[test]
    fn canonical_dates_are_fixed_points(offset in 0u64..3_000_000) {
        let base = NaiveDate::from_ymd_opt(1, 1, 1).expect("base date");
        let date = base.checked_add_days(Days::new(offset)).expect("date in range");
        prop_assume!(date.format("%Y").to_string().len() == 4);
        let value = date.format("%Y%m%d").to_string();
        prop_assert!(is_valid_date_yyyymmdd(&value));
        prop_assert_eq!(sanitize_date_to_yyyymmdd(&value), value.clone());

        let hyphenated = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(sanitize_date_to_yyyymmdd(&hyphenated), value);
    }

    #[test]
    fn canonical_times_are_fixed_points(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let short = format!("{h:02}{m:02}");
        let long = format!("{h:02}{m:02}{s:02}");
        prop_assert!(is_valid_time_adif(&short));
        prop_assert!(is_valid_time_adif(&long));
        prop_assert_eq!(sanitize_time_to_adif(&short), short.clone());
        prop_assert_eq!(sanitize_time_to_adif(&long), long.clone());
        prop_assert_eq!(sanitize_time_to_adif(&format!("{h}:{m}:{s}")), long);
    }

    #[test]
    fn sanitized_times_are_valid_or_empty(input in "[0-9: .-]{0,10}") {
        let out = sanitize_time_to_adif(&input);
        prop_assert!(out.is_empty() || is_valid_time_adif(&out));
    }

    #[test]
    fn formatted_codes_validate(
        letter in hemisphere(),
        degrees in 0u64..180,
        thousandths in 0u32..60_000,
    ) {
        let minutes = f64::from(thousandths) / 1000.0;
        let code = format_coordinate_code(letter, degrees, minutes);
        prop_assert!(is_xdddmmm(&code), "{} should validate", code);
    }
}
