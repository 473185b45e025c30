#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use wtime::libs::clock::{Clock, ManualClock};
    use wtime::libs::confirm::FixedAnswer;
    use wtime::libs::error::TrackerError;
    use wtime::libs::formatter::MS_PER_MINUTE;
    use wtime::libs::session::{Action, SessionState, EIGHT_HOURS_MS};
    use wtime::libs::storage::{FileStore, KeyValueStore, MemoryStore, HISTORY_KEY, SESSION_KEY};
    use wtime::libs::tracker::Tracker;

    /// A tracker data directory plus a clock parked at 2024-06-01 09:00 UTC.
    /// Every call to `tracker()` simulates a fresh process start.
    struct TrackerTestContext {
        temp_dir: TempDir,
        clock: ManualClock,
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let clock = ManualClock::at(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
            TrackerTestContext { temp_dir, clock }
        }
    }

    impl TrackerTestContext {
        fn store(&self) -> FileStore {
            FileStore::new(self.temp_dir.path())
        }

        fn tracker(&self) -> Tracker<FileStore, ManualClock> {
            Tracker::restore(self.store(), self.clock.clone()).unwrap()
        }

        fn write_snapshot(&self, json: &str) {
            fs::write(self.temp_dir.path().join(SESSION_KEY), json).unwrap();
        }
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_fresh_tracker_is_idle(ctx: &mut TrackerTestContext) {
        let tracker = ctx.tracker();
        assert_eq!(tracker.state(), SessionState::Idle);
        assert_eq!(tracker.live_ms(), None);
        assert_eq!(tracker.running_total_ms(), 0);
        assert_eq!(tracker.goal_ms(), EIGHT_HOURS_MS);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_break_and_resume_sum_segments(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();
        ctx.clock.advance_mins(30);
        tracker.take_break().unwrap();
        ctx.clock.advance_mins(15);
        assert_eq!(tracker.live_ms(), Some(30 * MS_PER_MINUTE));

        tracker.resume().unwrap();
        ctx.clock.advance_mins(45);
        assert_eq!(tracker.live_ms(), Some(75 * MS_PER_MINUTE));

        let entry = tracker.end().unwrap();
        assert_eq!(entry.total_ms, 75 * MS_PER_MINUTE);
        assert_eq!(entry.formatted, "1h 15m 0s");
        assert_eq!(tracker.state(), SessionState::Idle);
        assert_eq!(tracker.running_total_ms(), 0);
    }

    #[test]
    fn test_end_while_idle_changes_nothing() {
        let clock = ManualClock::new(1_000);
        let mut tracker = Tracker::restore(MemoryStore::new(), clock).unwrap();

        let err = tracker.end().unwrap_err();
        assert!(matches!(err, TrackerError::IllegalTransition { action: Action::End, .. }));
        assert_eq!(err.to_string(), "cannot end work while not working");
        assert_eq!(tracker.state(), SessionState::Idle);
        assert!(tracker.store().is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_illegal_transitions_are_rejected(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        assert!(matches!(tracker.resume(), Err(TrackerError::IllegalTransition { action: Action::Resume, .. })));
        assert!(matches!(tracker.take_break(), Err(TrackerError::IllegalTransition { action: Action::Break, .. })));

        tracker.start().unwrap();
        assert!(matches!(tracker.start(), Err(TrackerError::IllegalTransition { action: Action::Start, .. })));
        assert!(matches!(tracker.resume(), Err(TrackerError::IllegalTransition { .. })));

        tracker.take_break().unwrap();
        assert!(matches!(tracker.take_break(), Err(TrackerError::IllegalTransition { .. })));
        assert!(matches!(tracker.start(), Err(TrackerError::IllegalTransition { .. })));
        assert_eq!(tracker.state(), SessionState::Paused);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_every_transition_writes_snapshot(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();

        let json = ctx.store().get(SESSION_KEY).unwrap().unwrap();
        assert!(json.contains("\"isWorking\":true"));
        assert!(json.contains("\"isOnBreak\":false"));
        assert!(json.contains("\"sessionAccumulatedMs\":0"));
        assert!(json.contains("\"eightHourNotified\":false"));
        assert!(json.contains(&format!("\"lastUpdatedAt\":{}", ctx.clock.now_ms())));

        ctx.clock.advance_mins(20);
        tracker.take_break().unwrap();
        let json = ctx.store().get(SESSION_KEY).unwrap().unwrap();
        assert!(json.contains("\"isOnBreak\":true"));
        assert!(json.contains("\"inTime\":null"));
        assert!(json.contains(&format!("\"sessionAccumulatedMs\":{}", 20 * MS_PER_MINUTE)));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_active_session_keeps_counting_while_closed(ctx: &mut TrackerTestContext) {
        let t1 = ctx.clock.now_ms();
        ctx.write_snapshot(&format!(
            r#"{{"isWorking":true,"isOnBreak":false,"inTime":{t1},"sessionAccumulatedMs":600000,"totalMs":0,"eightHourNotified":false,"lastUpdatedAt":{t1}}}"#
        ));

        ctx.clock.advance_mins(25);
        let t2 = ctx.clock.now_ms();
        let tracker = ctx.tracker();

        assert_eq!(tracker.state(), SessionState::Active { in_time: t2 });
        assert_eq!(tracker.live_ms(), Some(600_000 + 25 * MS_PER_MINUTE));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_restore_counts_from_last_write_not_in_time(ctx: &mut TrackerTestContext) {
        let t0 = ctx.clock.now_ms();
        let t1 = t0 + 60_000;
        ctx.write_snapshot(&format!(
            r#"{{"isWorking":true,"isOnBreak":false,"inTime":{t0},"sessionAccumulatedMs":5000,"totalMs":0,"eightHourNotified":false,"lastUpdatedAt":{t1}}}"#
        ));

        ctx.clock.set(t1 + 60_000);
        let t2 = ctx.clock.now_ms();
        let tracker = ctx.tracker();

        assert_eq!(tracker.state(), SessionState::Active { in_time: t2 });
        assert_eq!(tracker.live_ms(), Some(5_000 + (t2 - t1) as u64));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_paused_session_restores_verbatim(ctx: &mut TrackerTestContext) {
        ctx.write_snapshot(r#"{"isWorking":true,"isOnBreak":true,"inTime":null,"sessionAccumulatedMs":5400000,"totalMs":0,"eightHourNotified":false,"lastUpdatedAt":1}"#);

        ctx.clock.advance_mins(120);
        let tracker = ctx.tracker();
        assert_eq!(tracker.state(), SessionState::Paused);
        assert_eq!(tracker.live_ms(), Some(5_400_000));

        ctx.clock.advance_mins(60);
        assert_eq!(tracker.live_ms(), Some(5_400_000));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_restart_round_trip(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();
        ctx.clock.advance_mins(40);
        drop(tracker);

        ctx.clock.advance_mins(10);
        let tracker = ctx.tracker();
        assert!(tracker.state().is_active());
        assert_eq!(tracker.live_ms(), Some(50 * MS_PER_MINUTE));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_clock_moving_backwards_never_loses_time(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();
        ctx.clock.advance_mins(10);
        tracker.take_break().unwrap();
        tracker.resume().unwrap();

        ctx.clock.advance_mins(-5);
        assert_eq!(tracker.live_ms(), Some(10 * MS_PER_MINUTE));

        drop(tracker);
        let tracker = ctx.tracker();
        assert_eq!(tracker.live_ms(), Some(10 * MS_PER_MINUTE));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_malformed_snapshot_starts_idle(ctx: &mut TrackerTestContext) {
        ctx.write_snapshot("{not json");
        let tracker = ctx.tracker();
        assert_eq!(tracker.state(), SessionState::Idle);
        assert_eq!(tracker.running_total_ms(), 0);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_inconsistent_flags_start_idle(ctx: &mut TrackerTestContext) {
        ctx.write_snapshot(r#"{"isWorking":false,"isOnBreak":true,"sessionAccumulatedMs":1000}"#);
        let tracker = ctx.tracker();
        assert_eq!(tracker.state(), SessionState::Idle);
        assert_eq!(tracker.live_ms(), None);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_goal_fires_once(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();

        ctx.clock.advance_ms(EIGHT_HOURS_MS as i64 - 1_000);
        assert!(!tracker.tick().unwrap().unwrap().goal_reached);

        ctx.clock.advance_secs(1);
        let tick = tracker.tick().unwrap().unwrap();
        assert!(tick.goal_reached);
        assert_eq!(tick.running_total_ms, EIGHT_HOURS_MS);

        ctx.clock.advance_secs(1);
        assert!(!tracker.tick().unwrap().unwrap().goal_reached);

        // Clock jumps back below the goal and crosses it again
        ctx.clock.advance_mins(-90);
        assert!(!tracker.tick().unwrap().unwrap().goal_reached);
        ctx.clock.advance_mins(120);
        assert!(!tracker.tick().unwrap().unwrap().goal_reached);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_goal_latch_survives_restart(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();
        ctx.clock.advance_ms(EIGHT_HOURS_MS as i64);
        assert!(tracker.tick().unwrap().unwrap().goal_reached);
        drop(tracker);

        let json = ctx.store().get(SESSION_KEY).unwrap().unwrap();
        assert!(json.contains("\"eightHourNotified\":true"));

        ctx.clock.advance_mins(5);
        let mut tracker = ctx.tracker();
        assert!(tracker.session().goal_notified());
        assert_eq!(tracker.live_ms(), Some(EIGHT_HOURS_MS + 5 * MS_PER_MINUTE));
        assert!(!tracker.tick().unwrap().unwrap().goal_reached);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_custom_goal(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker().with_goal_ms(30 * MS_PER_MINUTE);
        tracker.start().unwrap();
        ctx.clock.advance_mins(30);
        assert!(tracker.tick().unwrap().unwrap().goal_reached);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_no_tick_unless_active(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        assert_eq!(tracker.tick().unwrap(), None);

        tracker.start().unwrap();
        ctx.clock.advance_ms(EIGHT_HOURS_MS as i64);
        tracker.take_break().unwrap();
        assert_eq!(tracker.tick().unwrap(), None);
        assert!(!tracker.session().goal_notified());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_end_records_history(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();
        ctx.clock.advance_mins(3 * 60);

        let entry = tracker.end().unwrap();
        assert_eq!(entry.date, "2024-06-01");
        assert_eq!(entry.total_ms, 10_800_000);
        assert_eq!(entry.formatted, "3h 0m 0s");

        let json = ctx.store().get(HISTORY_KEY).unwrap().unwrap();
        assert!(json.contains("\"totalMs\":10800000"));
        assert!(json.contains("\"formatted\":\"3h 0m 0s\""));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_second_end_same_day_overwrites(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();
        ctx.clock.advance_mins(3 * 60);
        tracker.end().unwrap();

        tracker.start().unwrap();
        ctx.clock.advance_mins(60);
        tracker.end().unwrap();

        let history = tracker.history().unwrap();
        assert_eq!(history.len(), 1);
        let date = ctx.clock.today();
        assert_eq!(history.get(date).unwrap().formatted, "1h 0m 0s");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_session_across_midnight_goes_to_end_date(ctx: &mut TrackerTestContext) {
        ctx.clock.set(Utc.with_ymd_and_hms(2024, 6, 1, 22, 0, 0).unwrap().timestamp_millis());
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();
        ctx.clock.advance_mins(4 * 60);

        let entry = tracker.end().unwrap();
        assert_eq!(entry.date, "2024-06-02");
        assert_eq!(entry.formatted, "4h 0m 0s");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_reset_requires_confirmation(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();
        ctx.clock.advance_mins(60);
        tracker.end().unwrap();
        tracker.start().unwrap();
        ctx.clock.advance_mins(10);

        assert!(!tracker.reset(&FixedAnswer(false)).unwrap());
        assert!(tracker.state().is_active());
        assert!(ctx.store().get(SESSION_KEY).unwrap().is_some());

        assert!(tracker.reset(&FixedAnswer(true)).unwrap());
        assert_eq!(tracker.state(), SessionState::Idle);
        assert_eq!(tracker.running_total_ms(), 0);
        assert!(ctx.store().get(SESSION_KEY).unwrap().is_none());
        assert_eq!(tracker.history().unwrap().len(), 1);

        let tracker = ctx.tracker();
        assert_eq!(tracker.state(), SessionState::Idle);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_clear_history_requires_confirmation(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();
        ctx.clock.advance_mins(60);
        tracker.end().unwrap();

        assert!(!tracker.clear_history(&FixedAnswer(false)).unwrap());
        assert_eq!(tracker.history().unwrap().len(), 1);

        assert!(tracker.clear_history(&FixedAnswer(true)).unwrap());
        assert!(tracker.history().unwrap().is_empty());
        assert!(ctx.store().get(HISTORY_KEY).unwrap().is_none());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_reconcile_adopts_external_changes(ctx: &mut TrackerTestContext) {
        let mut watcher = ctx.tracker();
        let mut other = ctx.tracker();
        assert!(!watcher.reconcile().unwrap());

        other.start().unwrap();
        ctx.clock.advance_mins(5);
        assert!(watcher.reconcile().unwrap());
        assert!(watcher.state().is_active());
        assert_eq!(watcher.live_ms(), Some(5 * MS_PER_MINUTE));
        assert!(!watcher.reconcile().unwrap());

        other.take_break().unwrap();
        ctx.clock.advance_mins(1);
        assert!(watcher.reconcile().unwrap());
        assert_eq!(watcher.state(), SessionState::Paused);
        assert_eq!(watcher.live_ms(), Some(5 * MS_PER_MINUTE));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_goal_tick_does_not_undo_external_break(ctx: &mut TrackerTestContext) {
        let mut watcher = ctx.tracker();
        watcher.start().unwrap();
        ctx.clock.advance_ms(EIGHT_HOURS_MS as i64 - 1_000);

        let mut other = ctx.tracker();
        other.take_break().unwrap();
        ctx.clock.advance_secs(2);

        assert_eq!(watcher.tick().unwrap(), None);
        assert_eq!(watcher.state(), SessionState::Paused);

        let tracker = ctx.tracker();
        assert_eq!(tracker.state(), SessionState::Paused);
        assert!(!tracker.session().goal_notified());
        assert_eq!(tracker.live_ms(), Some(EIGHT_HOURS_MS - 1_000));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_reconcile_ignores_own_writes(ctx: &mut TrackerTestContext) {
        let mut tracker = ctx.tracker();
        tracker.start().unwrap();
        ctx.clock.advance_mins(1);
        assert!(!tracker.reconcile().unwrap());
        assert_eq!(tracker.live_ms(), Some(MS_PER_MINUTE));
    }
}
