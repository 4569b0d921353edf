use parking_lot::Mutex;
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakerState {
    Closed,
    Open,
    HalfOpen,
}

#[derive(Debug)]
struct Inner {
    state: BreakerState,
    failure_count: u32,
    last_failure_at: Option<Instant>,
    /// Set by authorization rejections; only `reset` clears it.
    latched: bool,
    /// Start of the single call allowed through while half-open.
    trial_started_at: Option<Instant>,
}

/// Circuit breaker owned by whoever builds the map client.
///
/// Consecutive failures open the circuit for `cooldown`. After that the
/// circuit is half-open and lets exactly one trial call through: its
/// success closes the circuit, its failure reopens it, and an outcome that
/// says nothing about provider health frees the slot for another trial. A
/// trial that never reports back frees the slot after another `cooldown`.
/// A rejected API key latches the circuit open until `reset`.
#[derive(Debug)]
pub struct CircuitBreaker {
    inner: Mutex<Inner>,
    failure_threshold: u32,
    cooldown: Duration,
}

impl CircuitBreaker {
    pub fn new(failure_threshold: u32, cooldown: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: BreakerState::Closed,
                failure_count: 0,
                last_failure_at: None,
                latched: false,
                trial_started_at: None,
            }),
            failure_threshold: failure_threshold.max(1),
            cooldown,
        }
    }

    pub fn state(&self) -> BreakerState {
        self.inner.lock().state
    }

    pub fn is_open(&self) -> bool {
        self.state() == BreakerState::Open
    }

    pub fn is_latched(&self) -> bool {
        self.inner.lock().latched
    }

    pub fn last_failure_at(&self) -> Option<Instant> {
        self.inner.lock().last_failure_at
    }

    pub fn failure_count(&self) -> u32 {
        self.inner.lock().failure_count
    }

    pub fn is_call_permitted(&self) -> bool {
        self.is_call_permitted_at(Instant::now())
    }

    /// Moves `Open` to `HalfOpen` once the cooldown has elapsed and hands
    /// out the single trial permit.
    pub fn is_call_permitted_at(&self, now: Instant) -> bool {
        let mut inner = self.inner.lock();
        match inner.state {
            BreakerState::Closed => true,
            BreakerState::Open if inner.latched => false,
            BreakerState::Open => {
                let cooled = inner
                    .last_failure_at
                    .map_or(true, |at| now.saturating_duration_since(at) >= self.cooldown);
                if cooled {
                    inner.state = BreakerState::HalfOpen;
                    inner.trial_started_at = Some(now);
                    tracing::info!("map provider circuit half-open, allowing trial call");
                }
                cooled
            }
            BreakerState::HalfOpen => {
                let slot_free = inner
                    .trial_started_at
                    .map_or(true, |at| now.saturating_duration_since(at) >= self.cooldown);
                if slot_free {
                    inner.trial_started_at = Some(now);
                }
                slot_free
            }
        }
    }

    pub fn record_success(&self) {
        let mut inner = self.inner.lock();
        if inner.latched {
            return;
        }
        if inner.state == BreakerState::HalfOpen {
            tracing::info!("map provider circuit closed");
        }
        inner.state = BreakerState::Closed;
        inner.failure_count = 0;
        inner.trial_started_at = None;
    }

    /// The call finished with an outcome that does not reflect provider
    /// health. Releases the half-open trial without changing state.
    pub fn record_neutral(&self) {
        self.inner.lock().trial_started_at = None;
    }

    pub fn record_failure(&self) {
        self.record_failure_at(Instant::now());
    }

    pub fn record_failure_at(&self, now: Instant) {
        let mut inner = self.inner.lock();
        inner.failure_count += 1;
        inner.last_failure_at = Some(now);
        inner.trial_started_at = None;
        let trip = inner.state == BreakerState::HalfOpen
            || (inner.state == BreakerState::Closed && inner.failure_count >= self.failure_threshold);
        if trip {
            inner.state = BreakerState::Open;
            tracing::warn!(
                failures = inner.failure_count,
                cooldown_secs = self.cooldown.as_secs(),
                "map provider circuit opened"
            );
        }
    }

    /// The provider refused our credentials; stop calling it.
    pub fn record_rejection(&self) {
        self.record_rejection_at(Instant::now());
    }

    pub fn record_rejection_at(&self, now: Instant) {
        let mut inner = self.inner.lock();
        inner.state = BreakerState::Open;
        inner.latched = true;
        inner.last_failure_at = Some(now);
        inner.trial_started_at = None;
        tracing::error!("map provider rejected the API key, disabling further calls");
    }

    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.state = BreakerState::Closed;
        inner.failure_count = 0;
        inner.last_failure_at = None;
        inner.latched = false;
        inner.trial_started_at = None;
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(30))
    }
}
