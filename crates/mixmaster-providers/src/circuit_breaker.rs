// ABOUTME: Circuit breaker guarding recipe source lookups
// ABOUTME: Fails fast while the upstream service keeps failing, then probes for recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

use std::future::Future;
use std::sync::atomic::{AtomicU32, AtomicU64, AtomicU8, Ordering};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::errors::provider::ProviderError;

/// Circuit breaker states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Lookups pass through; retryable failures are counted
    Closed,
    /// Lookups fail immediately until the recovery timeout elapses
    Open,
    /// Recovery timeout elapsed; lookups pass through as probes
    HalfOpen,
}

impl CircuitState {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Closed,
            1 => Self::Open,
            _ => Self::HalfOpen,
        }
    }

    const fn as_u8(self) -> u8 {
        match self {
            Self::Closed => 0,
            Self::Open => 1,
            Self::HalfOpen => 2,
        }
    }
}

/// Thresholds and timeouts of a circuit breaker
#[derive(Debug, Clone)]
pub struct CircuitBreakerConfig {
    /// Consecutive retryable failures that open the circuit
    pub failure_threshold: u32,
    /// Time the circuit stays open before probing
    pub recovery_timeout: Duration,
    /// Successful probes needed to close the circuit again
    pub success_threshold: u32,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            recovery_timeout: Duration::from_secs(30),
            success_threshold: 1,
        }
    }
}

impl CircuitBreakerConfig {
    /// Create a new circuit breaker configuration
    #[must_use]
    pub const fn new(
        failure_threshold: u32,
        recovery_timeout: Duration,
        success_threshold: u32,
    ) -> Self {
        Self {
            failure_threshold,
            recovery_timeout,
            success_threshold,
        }
    }
}

/// Lock-free circuit breaker for one recipe source
///
/// Only retryable failures (network errors, timeouts, 5xx/429 answers) count towards
/// opening the circuit; a malformed body or a 404 says nothing about availability.
pub struct CircuitBreaker {
    source_name: String,
    state: AtomicU8,
    failures: AtomicU32,
    probe_successes: AtomicU32,
    opened_at_ms: AtomicU64,
    config: CircuitBreakerConfig,
    epoch: Instant,
}

impl CircuitBreaker {
    /// Create a circuit breaker with the default configuration
    #[must_use]
    pub fn new(source_name: &str) -> Self {
        Self::with_config(source_name, CircuitBreakerConfig::default())
    }

    /// Create a circuit breaker with a custom configuration
    #[must_use]
    pub fn with_config(source_name: &str, config: CircuitBreakerConfig) -> Self {
        Self {
            source_name: source_name.to_owned(),
            state: AtomicU8::new(CircuitState::Closed.as_u8()),
            failures: AtomicU32::new(0),
            probe_successes: AtomicU32::new(0),
            opened_at_ms: AtomicU64::new(0),
            config,
            epoch: Instant::now(),
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> CircuitState {
        CircuitState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Consecutive failures counted while closed
    #[must_use]
    pub fn failure_count(&self) -> u32 {
        self.failures.load(Ordering::SeqCst)
    }

    /// Whether a lookup may go out now
    ///
    /// An open circuit whose recovery timeout has elapsed moves to half-open here.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        match self.state() {
            CircuitState::Closed | CircuitState::HalfOpen => true,
            CircuitState::Open => self.try_half_open(),
        }
    }

    fn try_half_open(&self) -> bool {
        if self.millis_until_recovery() > 0 {
            return false;
        }
        let swapped = self
            .state
            .compare_exchange(
                CircuitState::Open.as_u8(),
                CircuitState::HalfOpen.as_u8(),
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok();
        if swapped {
            info!(source = %self.source_name, "Circuit half-open, probing recipe source");
        }
        // A concurrent caller may have won the swap; half-open admits it as well
        self.state() != CircuitState::Open
    }

    /// Record a successful lookup
    pub fn record_success(&self) {
        match self.state() {
            CircuitState::Closed => self.failures.store(0, Ordering::SeqCst),
            CircuitState::HalfOpen => {
                let successes = self.probe_successes.fetch_add(1, Ordering::SeqCst) + 1;
                if successes >= self.config.success_threshold {
                    self.close();
                    info!(source = %self.source_name, "Circuit closed, recipe source recovered");
                }
            }
            CircuitState::Open => {}
        }
    }

    /// Record a failed lookup
    pub fn record_failure(&self) {
        match self.state() {
            CircuitState::Closed => {
                let failures = self.failures.fetch_add(1, Ordering::SeqCst) + 1;
                if failures >= self.config.failure_threshold {
                    self.open();
                    warn!(
                        source = %self.source_name,
                        failures,
                        recovery_timeout_secs = self.config.recovery_timeout.as_secs(),
                        "Circuit opened, recipe source failing"
                    );
                }
            }
            CircuitState::HalfOpen => {
                self.open();
                warn!(source = %self.source_name, "Circuit re-opened, recovery probe failed");
            }
            CircuitState::Open => {
                self.opened_at_ms.store(self.now_ms(), Ordering::SeqCst);
            }
        }
    }

    /// Run a lookup under circuit breaker protection
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::CircuitBreakerOpen` without running the lookup while the
    /// circuit is open; otherwise returns the lookup's own result.
    pub async fn call<F, T, E>(&self, lookup: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<ProviderError>,
    {
        if !self.is_allowed() {
            return Err(ProviderError::CircuitBreakerOpen {
                provider: self.source_name.clone(),
                retry_after_secs: self.millis_until_recovery().div_ceil(1000),
            });
        }

        match lookup.await {
            Ok(value) => {
                self.record_success();
                Ok(value)
            }
            Err(e) => {
                let error = e.into();
                if error.is_retryable() {
                    self.record_failure();
                }
                Err(error)
            }
        }
    }

    /// Force the circuit closed
    pub fn reset(&self) {
        self.close();
        info!(source = %self.source_name, "Circuit manually reset");
    }

    fn open(&self) {
        self.opened_at_ms.store(self.now_ms(), Ordering::SeqCst);
        self.probe_successes.store(0, Ordering::SeqCst);
        self.state.store(CircuitState::Open.as_u8(), Ordering::SeqCst);
    }

    fn close(&self) {
        self.failures.store(0, Ordering::SeqCst);
        self.probe_successes.store(0, Ordering::SeqCst);
        self.state.store(CircuitState::Closed.as_u8(), Ordering::SeqCst);
    }

    fn millis_until_recovery(&self) -> u64 {
        let open_for = self
            .now_ms()
            .saturating_sub(self.opened_at_ms.load(Ordering::SeqCst));
        let recovery_ms =
            u64::try_from(self.config.recovery_timeout.as_millis()).unwrap_or(u64::MAX);
        recovery_ms.saturating_sub(open_for)
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
