// file: src/utils/telemetry.rs
// description: Timing helpers for remote calls
// reference: tracing span-free timing

use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Requests slower than this are logged at warn level.
const SLOW_REQUEST: Duration = Duration::from_secs(5);

/// Operation timer for request latency tracking
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        debug!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        if elapsed > SLOW_REQUEST {
            warn!(
                "Slow operation: {} took {:.2}s (threshold: {:.2}s)",
                self.operation,
                elapsed.as_secs_f64(),
                SLOW_REQUEST.as_secs_f64()
            );
        } else {
            debug!(
                "Completed operation: {} in {:.3}s",
                self.operation,
                elapsed.as_secs_f64()
            );
        }
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_timer() {
        let timer = OperationTimer::new("GET /v1/documents");
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.finish();
        assert!(elapsed >= Duration::from_millis(10));
    }
}
