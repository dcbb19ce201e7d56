//! Per-caller command cooldowns.
//!
//! Stores the last successful invocation time per (caller, command) pair. Entries are
//! pruned lazily: only once the table grows past a high-water mark, and then only the
//! entries older than the retention window.

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

/// Table size above which a write triggers pruning.
const PRUNE_HIGH_WATER_MARK: usize = 100;

/// Entries older than this are removed by pruning.
const RETENTION_MILLIS: i64 = 300_000;

/// Result of a cooldown check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownCheck {
    /// The invocation may proceed; its time has been recorded.
    Allowed,
    /// The command is still cooling down for this caller.
    Active {
        /// Whole seconds until the command may be used again, at least 1.
        remaining_seconds: u64,
    },
}

/// Tracker of the last invocation time per caller and command.
///
/// The check-and-record step runs under a single lock, so two concurrent invocations
/// from the same caller cannot both be allowed.
#[derive(Debug, Default)]
pub struct CooldownTracker {
    entries: Mutex<HashMap<(u64, String), DateTime<Utc>>>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether `caller_id` may run `command` at `now` and records the use if so.
    ///
    /// An invocation is allowed when no entry exists or at least `cooldown` has passed
    /// since the recorded invocation (exact equality counts as expired). After recording,
    /// if the table holds more than 100 entries, every entry older than five minutes
    /// relative to `now` is removed.
    ///
    /// # Arguments
    /// - `caller_id` - User invoking the command
    /// - `command` - Canonical command name
    /// - `cooldown` - Cooldown declared by the command
    /// - `now` - Time of the invocation
    ///
    /// # Returns
    /// - `CooldownCheck::Allowed` - Invocation recorded
    /// - `CooldownCheck::Active` - Rejected, with the seconds remaining rounded up
    pub async fn check(
        &self,
        caller_id: u64,
        command: &str,
        cooldown: Duration,
        now: DateTime<Utc>,
    ) -> CooldownCheck {
        let cooldown_millis = i64::try_from(cooldown.as_millis()).unwrap_or(i64::MAX);
        let key = (caller_id, command.to_string());

        let mut entries = self.entries.lock().await;

        if let Some(last) = entries.get(&key) {
            let elapsed = (now - *last).num_milliseconds();
            if elapsed < cooldown_millis {
                let remaining_millis = cooldown_millis.saturating_sub(elapsed);
                let remaining_seconds =
                    remaining_millis / 1000 + i64::from(remaining_millis % 1000 != 0);
                return CooldownCheck::Active {
                    remaining_seconds: remaining_seconds.max(1) as u64,
                };
            }
        }

        entries.insert(key, now);

        if entries.len() > PRUNE_HIGH_WATER_MARK {
            let retention = TimeDelta::milliseconds(RETENTION_MILLIS);
            entries.retain(|_, last| now - *last <= retention);
        }

        CooldownCheck::Allowed
    }

    /// Number of tracked (caller, command) entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_700_000_000_000 + millis).unwrap()
    }

    /// Tests the cooldown boundary for a five second cooldown.
    ///
    /// Verifies the first call is allowed, a call 1ms before expiry is rejected with one
    /// second remaining, and a call exactly at expiry is allowed.
    ///
    /// Expected: Allowed, Active { 1 }, Allowed
    #[tokio::test]
    async fn rejects_until_cooldown_elapses() {
        let tracker = CooldownTracker::new();
        let cooldown = Duration::from_secs(5);

        assert_eq!(
            tracker.check(1, "doit", cooldown, at(0)).await,
            CooldownCheck::Allowed
        );
        assert_eq!(
            tracker.check(1, "doit", cooldown, at(4_999)).await,
            CooldownCheck::Active {
                remaining_seconds: 1
            }
        );
        assert_eq!(
            tracker.check(1, "doit", cooldown, at(5_000)).await,
            CooldownCheck::Allowed
        );
    }

    /// Tests that remaining time is rounded up to whole seconds.
    ///
    /// Expected: 2.5 seconds remaining reports 3
    #[tokio::test]
    async fn rounds_remaining_seconds_up() {
        let tracker = CooldownTracker::new();
        let cooldown = Duration::from_secs(5);

        tracker.check(1, "help", cooldown, at(0)).await;

        assert_eq!(
            tracker.check(1, "help", cooldown, at(2_500)).await,
            CooldownCheck::Active {
                remaining_seconds: 3
            }
        );
    }

    /// Tests that a rejected call does not extend the cooldown.
    ///
    /// Expected: the window is still measured from the first allowed call
    #[tokio::test]
    async fn rejection_does_not_reset_timer() {
        let tracker = CooldownTracker::new();
        let cooldown = Duration::from_secs(3);

        tracker.check(7, "ping", cooldown, at(0)).await;
        tracker.check(7, "ping", cooldown, at(2_000)).await;

        assert_eq!(
            tracker.check(7, "ping", cooldown, at(3_000)).await,
            CooldownCheck::Allowed
        );
    }

    /// Tests a cooldown too long to be expressed in milliseconds.
    ///
    /// Verifies that the remaining time saturates instead of overflowing.
    ///
    /// Expected: Allowed, then Active with the whole clamped window remaining
    #[tokio::test]
    async fn saturates_huge_cooldowns() {
        let tracker = CooldownTracker::new();
        let cooldown = Duration::from_secs(u64::MAX / 1000);

        assert_eq!(
            tracker.check(1, "doit", cooldown, at(0)).await,
            CooldownCheck::Allowed
        );
        assert_eq!(
            tracker.check(1, "doit", cooldown, at(0)).await,
            CooldownCheck::Active {
                remaining_seconds: (i64::MAX / 1000 + 1) as u64
            }
        );
    }

    /// Tests a check whose time lies before the recorded invocation.
    ///
    /// Expected: Active with the cooldown plus the clock skew remaining
    #[tokio::test]
    async fn handles_time_before_last_invocation() {
        let tracker = CooldownTracker::new();
        let cooldown = Duration::from_secs(5);

        tracker.check(1, "doit", cooldown, at(10_000)).await;

        assert_eq!(
            tracker.check(1, "doit", cooldown, at(8_000)).await,
            CooldownCheck::Active {
                remaining_seconds: 7
            }
        );
    }

    /// Tests that cooldowns are tracked per caller and per command.
    ///
    /// Expected: another caller and another command are unaffected
    #[tokio::test]
    async fn keys_by_caller_and_command() {
        let tracker = CooldownTracker::new();
        let cooldown = Duration::from_secs(5);

        tracker.check(1, "doit", cooldown, at(0)).await;

        assert_eq!(
            tracker.check(2, "doit", cooldown, at(10)).await,
            CooldownCheck::Allowed
        );
        assert_eq!(
            tracker.check(1, "help", cooldown, at(10)).await,
            CooldownCheck::Allowed
        );
        assert_eq!(tracker.len().await, 3);
    }

    /// Tests that stale entries survive while the table is at or below 100 entries.
    ///
    /// Expected: 100 entries retained even though all are older than five minutes
    #[tokio::test]
    async fn does_not_prune_below_high_water_mark() {
        let tracker = CooldownTracker::new();
        let cooldown = Duration::from_secs(1);

        for caller in 0..99 {
            tracker.check(caller, "doit", cooldown, at(0)).await;
        }
        tracker.check(500, "doit", cooldown, at(600_000)).await;

        assert_eq!(tracker.len().await, 100);
    }

    /// Tests pruning once the table exceeds 100 entries.
    ///
    /// Verifies that the write pushing the table past the high-water mark removes every
    /// entry older than five minutes relative to that write, and keeps recent ones.
    ///
    /// Expected: only the 10 recent entries and the triggering entry remain
    #[tokio::test]
    async fn prunes_stale_entries_above_high_water_mark() {
        let tracker = CooldownTracker::new();
        let cooldown = Duration::from_secs(1);

        for caller in 0..90 {
            tracker.check(caller, "doit", cooldown, at(0)).await;
        }
        for caller in 90..100 {
            tracker.check(caller, "doit", cooldown, at(200_000)).await;
        }
        assert_eq!(tracker.len().await, 100);

        tracker.check(1_000, "doit", cooldown, at(400_000)).await;

        assert_eq!(tracker.len().await, 11);
    }
}
