use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Result of resolving a hostname. `Failed` carries the underlying reason so
/// callers can log it before applying their fail-closed policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The name resolved to at least one record: the subdomain is taken.
    Resolved,
    /// NXDOMAIN: nothing answers to this name.
    NotFound,
    /// Timeout, SERVFAIL, or any other lookup problem.
    Failed(String),
}

/// Generic "resolve hostname" capability. The subdomain engine never talks
/// DNS itself; production wires in the adapter, tests wire in a stub.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, host: &str) -> ResolveOutcome;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Backing store for subdomain reservations. `try_insert` must be atomic per
/// label: of two concurrent callers, exactly one may win.
pub trait ReservationStore: Send + Sync {
    /// Records `expires_at` for the label unless a non-expired reservation
    /// already exists. Returns whether the insert happened. A losing call
    /// must not extend the existing reservation.
    fn try_insert(&self, label: &str, now: DateTime<Utc>, expires_at: DateTime<Utc>) -> bool;

    /// Removes any reservation for the label. Idempotent.
    fn remove(&self, label: &str);

    /// True iff a non-expired reservation exists. Lazily evicts an expired
    /// entry it encounters.
    fn is_reserved(&self, label: &str, now: DateTime<Utc>) -> bool;

    /// Removes all expired entries, returning how many were dropped.
    fn sweep_expired(&self, now: DateTime<Utc>) -> usize;
}

impl<T: ReservationStore + ?Sized> ReservationStore for &T {
    fn try_insert(&self, label: &str, now: DateTime<Utc>, expires_at: DateTime<Utc>) -> bool {
        (**self).try_insert(label, now, expires_at)
    }

    fn remove(&self, label: &str) {
        (**self).remove(label);
    }

    fn is_reserved(&self, label: &str, now: DateTime<Utc>) -> bool {
        (**self).is_reserved(label, now)
    }

    fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        (**self).sweep_expired(now)
    }
}
