// src/core/excel_date.rs

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Converts a spreadsheet serial (days since 1899-12-30, fraction = time of
/// day) into a date-time. Serials outside the calendar range give `None`.
pub(crate) fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 || serial > 2_958_465.0 {
        return None;
    }

    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let days = serial.trunc() as i64;
    // rounded to the second, spreadsheets store times as binary fractions
    let secs = ((serial - serial.trunc()) * 86400.0).round() as i64;

    excel_epoch.checked_add_signed(Duration::days(days) + Duration::seconds(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_whole_day_serials() {
        let dt = excel_serial_to_datetime(45352.0).unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-03-01");
    }

    #[test]
    fn keeps_time_of_day() {
        let dt = excel_serial_to_datetime(45352.5).unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-01 12:00:00");
    }

    #[test]
    fn rejects_out_of_range_serials() {
        assert!(excel_serial_to_datetime(-1.0).is_none());
        assert!(excel_serial_to_datetime(f64::NAN).is_none());
        assert!(excel_serial_to_datetime(1e12).is_none());
    }
}
