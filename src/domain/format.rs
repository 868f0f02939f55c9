use chrono::NaiveDate;

/// Format tracked seconds as "HH:MM:SS" (zero-padded, floors fractions)
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format a due date as "YYYY/MM/DD (Day)", or an empty string if absent
pub fn format_due_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%Y/%m/%d (%a)").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "00:00:00");
        assert_eq!(format_time(59.9), "00:00:59");
        assert_eq!(format_time(61.0), "00:01:01");
        assert_eq!(format_time(3661.0), "01:01:01");
        assert_eq!(format_time(36_000.0), "10:00:00");
    }

    #[test]
    fn test_format_time_negative_clamps_to_zero() {
        assert_eq!(format_time(-5.0), "00:00:00");
    }

    #[test]
    fn test_format_due_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        assert_eq!(format_due_date(Some(date)), "2024/03/08 (Fri)");
        assert_eq!(format_due_date(None), "");
    }
}
