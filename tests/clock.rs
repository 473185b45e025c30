#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone, Utc};
    use wtime::libs::clock::{elapsed_ms, Clock, ManualClock, SystemClock};

    #[test]
    fn test_system_clock_uses_local_date() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(today == before || today == after);
    }

    #[test]
    fn test_system_clock_now_is_epoch_ms() {
        let before = Utc::now().timestamp_millis();
        let now = SystemClock.now_ms();
        assert!(now >= before);
        assert!(now - before < 60_000);
    }

    #[test]
    fn test_manual_clock_uses_utc_date() {
        let clock = ManualClock::at(Utc.with_ymd_and_hms(2024, 6, 1, 23, 59, 59).unwrap());
        assert_eq!(clock.today().to_string(), "2024-06-01");
        clock.advance_secs(1);
        assert_eq!(clock.today().to_string(), "2024-06-02");
    }

    #[test]
    fn test_clones_share_the_instant() {
        let clock = ManualClock::new(0);
        let shared = clock.clone();
        clock.advance_mins(3);
        assert_eq!(shared.now_ms(), 180_000);
    }

    #[test]
    fn test_elapsed_clamps_backwards_clock() {
        assert_eq!(elapsed_ms(1_000, 4_000), 3_000);
        assert_eq!(elapsed_ms(4_000, 1_000), 0);
    }
}
