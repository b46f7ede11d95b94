//! Process-wide ingestion state: the minimum poll interval and the
//! storage sizing hint.
//!
//! Both values are best-effort hints produced as side effects of feed
//! ingestion and consumed elsewhere:
//!
//! - **Poll interval**: the external scheduler reads it between fetches.
//!   Feeds may request a longer interval via a `<ttl>` element; ingestion
//!   only ever *raises* the value, and only for the first TTL hint seen
//!   in the process lifetime.
//! - **Bucket size**: downstream storage reads it to pre-size its item
//!   structures. Set at most once, from the item count of the first
//!   ingestion that yields a non-empty, bounded node set.
//!
//! The caller guarantees at most one ingestion in flight at a time, so
//! the latches need no stronger coordination than atomics.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::OnceLock;

/// Default minimum poll interval in minutes, used until configuration or a
/// feed TTL hint raises it.
pub const DEFAULT_POLL_INTERVAL_MINS: u64 = 10;

/// Latched ingestion state shared across feed ingestions.
///
/// The process-global instance backs the module-level accessors below;
/// tests construct fresh instances and drive them through
/// [`ingest_with`](crate::feed::ingest_with) for isolation.
pub struct IngestState {
    /// Current minimum poll interval in minutes. Monotonically raised by
    /// TTL hints; [`set_poll_interval`](IngestState::set_poll_interval)
    /// is reserved for caller configuration.
    interval_mins: AtomicU64,
    /// Trips the first time a usable TTL hint is observed; later hints
    /// are ignored.
    ttl_latched: AtomicBool,
    /// Expected item-count bucket size for downstream storage, set once.
    bucket_size: OnceLock<usize>,
}

impl IngestState {
    /// Creates a fresh state with the given initial poll interval and
    /// both latches open.
    pub const fn new(interval_mins: u64) -> Self {
        Self {
            interval_mins: AtomicU64::new(interval_mins),
            ttl_latched: AtomicBool::new(false),
            bucket_size: OnceLock::new(),
        }
    }

    /// Current minimum poll interval in minutes.
    pub fn poll_interval(&self) -> u64 {
        self.interval_mins.load(Ordering::Relaxed)
    }

    /// Replaces the poll interval. This is the configuration entry point
    /// for the surrounding scheduler; ingestion itself never lowers the
    /// value.
    pub fn set_poll_interval(&self, mins: u64) {
        self.interval_mins.store(mins, Ordering::Relaxed);
    }

    /// Whether a TTL hint has already been consumed.
    pub fn ttl_latched(&self) -> bool {
        self.ttl_latched.load(Ordering::Relaxed)
    }

    /// Consumes a TTL hint: trips the latch and raises the poll interval
    /// if the hint exceeds the current value.
    pub(crate) fn latch_ttl(&self, ttl_mins: u64) {
        self.ttl_latched.store(true, Ordering::Relaxed);
        let prev = self.interval_mins.fetch_max(ttl_mins, Ordering::Relaxed);
        if ttl_mins > prev {
            tracing::info!(
                ttl_mins = ttl_mins,
                previous_mins = prev,
                "feed TTL raised poll interval"
            );
        }
    }

    /// The sizing hint for downstream storage, if one has been applied.
    pub fn bucket_size(&self) -> Option<usize> {
        self.bucket_size.get().copied()
    }

    /// Applies the sizing hint if none has been applied yet. Returns
    /// whether this call set it.
    pub(crate) fn suggest_bucket_size(&self, size: usize) -> bool {
        self.bucket_size.set(size).is_ok()
    }
}

static GLOBAL: IngestState = IngestState::new(DEFAULT_POLL_INTERVAL_MINS);

/// The process-global ingestion state used by [`crate::feed::ingest`].
pub fn global() -> &'static IngestState {
    &GLOBAL
}

/// Current minimum poll interval in minutes (process-global).
pub fn poll_interval() -> u64 {
    GLOBAL.poll_interval()
}

/// Sets the minimum poll interval in minutes (process-global). Intended
/// for caller configuration at startup; subsequent feed TTL hints can
/// only raise it.
pub fn set_poll_interval(mins: u64) {
    GLOBAL.set_poll_interval(mins);
}

/// The process-global sizing hint, if one has been applied.
pub fn bucket_size() -> Option<usize> {
    GLOBAL.bucket_size()
}
