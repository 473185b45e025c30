#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use wtime::libs::formatter::{date_key, format_long_date, format_time, goal_progress, MS_PER_HOUR, MS_PER_MINUTE};

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0h 0m 0s");
        assert_eq!(format_time(3_725_000), "1h 2m 5s");
        assert_eq!(format_time(59_999), "0h 0m 59s");
        assert_eq!(format_time(27 * MS_PER_HOUR), "27h 0m 0s");
    }

    #[test]
    fn test_goal_progress() {
        let goal = 8 * MS_PER_HOUR;
        assert_eq!(goal_progress(0, goal), 0.0);
        assert_eq!(goal_progress(4 * MS_PER_HOUR, goal), 50.0);
        assert_eq!(goal_progress(goal + 30 * MS_PER_MINUTE, goal), 100.0);
        assert_eq!(goal_progress(0, 0), 100.0);
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(date_key(date), "2024-06-01");
        assert_eq!(format_long_date(date), "Saturday, June 1, 2024");
    }
}
