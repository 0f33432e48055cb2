//! Property tests for time-of-day parsing.

use proptest::prelude::*;
use staff_ingest::parse_time_to_hour;

proptest! {
    #[test]
    fn bare_hours_are_returned_directly(hour in 0u8..=24) {
        prop_assert_eq!(parse_time_to_hour(&hour.to_string()), Ok(hour));
    }

    #[test]
    fn bare_hours_past_24_are_rejected(hour in 25u32..100_000) {
        prop_assert!(parse_time_to_hour(&hour.to_string()).is_err());
    }

    #[test]
    fn clock_times_keep_only_the_hour(hour in 0u8..24, minute in 0u8..60, second in 0u8..60) {
        prop_assert_eq!(parse_time_to_hour(&format!("{hour:02}:{minute:02}")), Ok(hour));
        prop_assert_eq!(
            parse_time_to_hour(&format!("{hour:02}:{minute:02}:{second:02}")),
            Ok(hour)
        );
        prop_assert_eq!(
            parse_time_to_hour(&format!("2024-03-15 {hour:02}:{minute:02}")),
            Ok(hour)
        );
    }

    #[test]
    fn twelve_hour_clock_matches_24_hour(hour in 0u8..24, minute in 0u8..60) {
        let (display_hour, marker) = match hour {
            0 => (12, "AM"),
            1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            _ => (hour - 12, "PM"),
        };
        prop_assert_eq!(
            parse_time_to_hour(&format!("{display_hour}:{minute:02} {marker}")),
            Ok(hour)
        );
        prop_assert_eq!(
            parse_time_to_hour(&format!("{display_hour}{}", marker.to_lowercase())),
            Ok(hour)
        );
    }
}
