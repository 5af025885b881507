//! Short-lived subdomain reservations.
//!
//! A reservation pins a label between "availability confirmed" and
//! "deployment provisioned" so two pipelines cannot both claim it. Entries
//! expire after a TTL (5 minutes by default); check-and-set is atomic per
//! label inside the store.

use crate::domain::ports::{Clock, ReservationStore, SystemClock};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

pub const DEFAULT_TTL_MINUTES: i64 = 5;

/// Mutex-guarded map from label to expiry. The lock is the single critical
/// section that makes `try_insert` atomic per label.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, DateTime<Utc>>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ReservationStore for InMemoryStore {
    fn try_insert(&self, label: &str, now: DateTime<Utc>, expires_at: DateTime<Utc>) -> bool {
        let mut entries = self.lock();

        if let Some(existing) = entries.get(label) {
            if *existing > now {
                return false;
            }
        }

        entries.insert(label.to_string(), expires_at);
        true
    }

    fn remove(&self, label: &str) {
        self.lock().remove(label);
    }

    fn is_reserved(&self, label: &str, now: DateTime<Utc>) -> bool {
        let mut entries = self.lock();

        match entries.get(label) {
            Some(expires_at) if *expires_at > now => true,
            Some(_) => {
                entries.remove(label);
                false
            }
            None => false,
        }
    }

    fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, expires_at| *expires_at > now);
        before - entries.len()
    }
}

/// Reservation table over an injectable store and clock. Production uses the
/// defaults; tests supply a fake clock to drive expiry deterministically.
pub struct ReservationTable<S = InMemoryStore, C = SystemClock> {
    store: S,
    clock: C,
    ttl: Duration,
}

impl ReservationTable {
    pub fn new() -> Self {
        Self::with_ttl(Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    /// Default store and clock with a custom TTL, e.g. from policy config.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_parts(InMemoryStore::new(), SystemClock, ttl)
    }
}

impl Default for ReservationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ReservationStore, C: Clock> ReservationTable<S, C> {
    pub fn with_parts(store: S, clock: C, ttl: Duration) -> Self {
        Self { store, clock, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Claims the label for the TTL. Fails against a live reservation without
    /// extending it; an expired one is replaced.
    pub fn reserve(&self, label: &str) -> bool {
        let now = self.clock.now();
        let granted = self.store.try_insert(label, now, now + self.ttl);
        if granted {
            tracing::debug!("Reserved '{}' for {} minutes", label, self.ttl.num_minutes());
        }
        granted
    }

    /// Drops any reservation for the label. Idempotent.
    pub fn release(&self, label: &str) {
        self.store.remove(label);
    }

    pub fn is_reserved(&self, label: &str) -> bool {
        self.store.is_reserved(label, self.clock.now())
    }

    /// Removes expired entries. Scheduling this periodically is the caller's
    /// concern; single-shot usage never needs it.
    pub fn sweep_expired(&self) -> usize {
        let swept = self.store.sweep_expired(self.clock.now());
        if swept > 0 {
            tracing::debug!("Swept {} expired reservations", swept);
        }
        swept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(now: DateTime<Utc>) -> ReservationTable<InMemoryStore, FixedClock> {
        ReservationTable::with_parts(InMemoryStore::new(), FixedClock(now), Duration::minutes(5))
    }

    #[derive(Clone, Copy)]
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn t0() -> DateTime<Utc> {
        "2025-01-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_reserve_then_release_cycle() {
        let table = fixed(t0());

        assert!(table.reserve("foo"));
        assert!(!table.reserve("foo"));
        assert!(table.is_reserved("foo"));

        table.release("foo");
        assert!(!table.is_reserved("foo"));
        assert!(table.reserve("foo"));
    }

    #[test]
    fn test_release_is_idempotent() {
        let table = fixed(t0());
        table.release("never-reserved");
        assert!(table.reserve("never-reserved"));
        table.release("never-reserved");
        table.release("never-reserved");
        assert!(!table.is_reserved("never-reserved"));
    }

    #[test]
    fn test_independent_labels_do_not_interfere() {
        let table = fixed(t0());
        assert!(table.reserve("foo"));
        assert!(table.reserve("bar"));
        assert!(!table.reserve("foo"));
        table.release("foo");
        assert!(table.is_reserved("bar"));
    }

    #[test]
    fn test_expired_reservation_can_be_retaken() {
        let store = InMemoryStore::new();
        let ttl = Duration::minutes(5);

        let early = ReservationTable::with_parts(&store, FixedClock(t0()), ttl);
        assert!(early.reserve("foo"));

        // Six minutes later the reservation has lapsed.
        let late = ReservationTable::with_parts(&store, FixedClock(t0() + Duration::minutes(6)), ttl);
        assert!(!late.is_reserved("foo"));
        assert!(late.reserve("foo"));
    }

    #[test]
    fn test_losing_reserve_does_not_extend_expiry() {
        let store = InMemoryStore::new();
        let ttl = Duration::minutes(5);

        let early = ReservationTable::with_parts(&store, FixedClock(t0()), ttl);
        assert!(early.reserve("foo"));

        // A failed re-reserve at t0+4min must not push expiry past t0+5min.
        let mid = ReservationTable::with_parts(&store, FixedClock(t0() + Duration::minutes(4)), ttl);
        assert!(!mid.reserve("foo"));

        let late = ReservationTable::with_parts(&store, FixedClock(t0() + Duration::minutes(6)), ttl);
        assert!(!late.is_reserved("foo"));
    }

    #[test]
    fn test_is_reserved_lazily_evicts() {
        let store = InMemoryStore::new();
        let ttl = Duration::minutes(5);

        let early = ReservationTable::with_parts(&store, FixedClock(t0()), ttl);
        assert!(early.reserve("foo"));

        let late = ReservationTable::with_parts(&store, FixedClock(t0() + Duration::minutes(10)), ttl);
        assert!(!late.is_reserved("foo"));
        // The expired entry is gone, so the sweep finds nothing.
        assert_eq!(late.sweep_expired(), 0);
    }

    #[test]
    fn test_sweep_removes_only_expired_entries() {
        let store = InMemoryStore::new();
        let ttl = Duration::minutes(5);

        let early = ReservationTable::with_parts(&store, FixedClock(t0()), ttl);
        assert!(early.reserve("old-a"));
        assert!(early.reserve("old-b"));

        let later = ReservationTable::with_parts(&store, FixedClock(t0() + Duration::minutes(4)), ttl);
        assert!(later.reserve("fresh"));

        let sweeper =
            ReservationTable::with_parts(&store, FixedClock(t0() + Duration::minutes(6)), ttl);
        assert_eq!(sweeper.sweep_expired(), 2);
        assert!(sweeper.is_reserved("fresh"));
        assert!(!sweeper.is_reserved("old-a"));
    }
}
