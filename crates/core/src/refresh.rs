//! Re-entrancy guards for interval refresh and rapid filter changes.
//!
//! Two small primitives back the client-facing refresh semantics:
//!
//! - [`PollGuard`] coalesces interval polls — a new poll starts only if the
//!   previous one has completed, and the guard is released on success and
//!   failure alike (the permit releases on drop).
//! - [`RequestSequencer`] implements last-request-wins for paginated
//!   listings — a response is applied only if no newer request for the
//!   same listing was issued while it was in flight.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Coalescing in-flight flag for interval polling.
#[derive(Debug, Clone, Default)]
pub struct PollGuard {
    in_flight: Arc<AtomicBool>,
}

impl PollGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to begin a poll. Returns a permit while no other poll is in
    /// flight, `None` otherwise (the caller skips this tick, it does not
    /// queue).
    pub fn begin(&self) -> Option<PollPermit> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            Some(PollPermit {
                in_flight: Arc::clone(&self.in_flight),
            })
        } else {
            None
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Permit held for the duration of one poll; releases the guard on drop,
/// so the reset happens on success and failure paths alike.
#[derive(Debug)]
pub struct PollPermit {
    in_flight: Arc<AtomicBool>,
}

impl Drop for PollPermit {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

/// Monotonic request tokens for last-request-wins listings.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new request, superseding all earlier ones.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Whether a completed request's token is still the newest — if not,
    /// its result must be discarded rather than overwrite fresher data.
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::Acquire) == token
    }
}
