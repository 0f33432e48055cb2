//! Default output locations.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Directory used for CSV output when no path is given.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// `<dir>/schedule_<YYYYmmdd_HHMMSS>.csv` for the given timestamp.
pub fn default_csv_path(dir: &Path, timestamp: &NaiveDateTime) -> PathBuf {
    dir.join(format!("schedule_{}.csv", timestamp.format("%Y%m%d_%H%M%S")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamped_file_name() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 11, 30)
            .unwrap()
            .and_hms_opt(8, 5, 9)
            .unwrap();
        assert_eq!(
            default_csv_path(Path::new(DEFAULT_OUTPUT_DIR), &timestamp),
            PathBuf::from("outputs/schedule_20241130_080509.csv")
        );
    }
}
