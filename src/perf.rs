//! Timing instrumentation for the interaction hot paths.
//!
//! Every pointer motion during a drag ends in a synchronous redraw, so the
//! cost of a redraw is paid once per motion event. This module provides:
//!
//! - **Scoped timers**: RAII timing for a block, logged when over threshold
//! - **`profile_scope!`**: a scoped timer that compiles away unless the
//!   `profiling` feature is enabled
//! - **`PerfMonitor`**: rolling per-operation statistics (the graph view
//!   records every full re-render into one)
//!
//! ```ignore
//! fn on_motion(&mut self) {
//!     profile_scope!("drag_motion");
//!     // ... work ...
//! }
//! ```

use crate::constants::SLOW_REDRAW_MS;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::warn;

/// Number of samples kept per operation for rolling statistics
const STATS_SAMPLE_COUNT: usize = 100;

/// Threshold used by `profile_scope!` when no explicit one is given
pub const PROFILE_THRESHOLD_MS: f64 = 1.0;

// ============================================================================
// Profiling Macro (zero-cost when disabled)
// ============================================================================

/// Time the rest of the enclosing scope. Zero-cost when the `profiling`
/// feature is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::PROFILE_THRESHOLD_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Logs a warning on drop if the scope took longer than its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}

/// Run `f` and return its result with the elapsed time in milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}

// ============================================================================
// Operation Statistics
// ============================================================================

/// Rolling statistics for one named operation.
#[derive(Debug, Clone)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    sum_ms: f64,
    count: u64,
    max_ms: f64,
    slow_count: u64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            sum_ms: 0.0,
            count: 0,
            max_ms: 0.0,
            slow_count: 0,
        }
    }
}

impl OperationStats {
    pub fn record(&mut self, ms: f64, threshold_ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
        if ms > threshold_ms {
            self.slow_count += 1;
        }
    }

    /// Average over the retained samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    /// Total invocations, including samples that have rolled off.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }

    /// Invocations that exceeded the threshold they were recorded with.
    pub fn slow_count(&self) -> u64 {
        self.slow_count
    }
}

// ============================================================================
// Monitor
// ============================================================================

/// Aggregates timings per operation name.
#[derive(Debug, Default)]
pub struct PerfMonitor {
    operations: HashMap<&'static str, OperationStats>,
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation, warning if it exceeded `threshold_ms`.
    pub fn record_operation(&mut self, name: &'static str, elapsed_ms: f64, threshold_ms: f64) {
        if elapsed_ms > threshold_ms {
            warn!(
                operation = name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", threshold_ms),
                "Slow operation"
            );
        }
        self.operations
            .entry(name)
            .or_default()
            .record(elapsed_ms, threshold_ms);
    }

    /// Time `f` and record it under `name` against the redraw threshold.
    pub fn time_redraw<T, F: FnOnce() -> T>(&mut self, name: &'static str, f: F) -> T {
        let (result, elapsed_ms) = measure(f);
        self.record_operation(name, elapsed_ms, SLOW_REDRAW_MS);
        result
    }

    pub fn operation_stats(&self, name: &str) -> Option<&OperationStats> {
        self.operations.get(name)
    }
}
