//! Liveness reporting boundary.
//!
//! The pipeline's observability is carried by `tracing` spans throughout;
//! this module covers the one remaining telemetry concern, a liveness
//! gauge that is set exactly once at startup. The trait keeps the core
//! independent of any particular telemetry backend.

/// Records whether the service is up.
///
/// Implementations are expected to be called once, at startup, after
/// configuration has validated but before the first fetch cycle.
pub trait LivenessGauge: Send + Sync {
    /// Marks the service as up.
    fn set_up(&self);
}

/// Liveness gauge that emits a structured log event.
///
/// Downstream collectors that consume the log stream can derive an
/// `up` metric from this event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogGauge;

impl LivenessGauge for LogGauge {
    fn set_up(&self) {
        tracing::info!(up = 1, "Service started");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingGauge {
        calls: AtomicUsize,
    }

    impl LivenessGauge for CountingGauge {
        fn set_up(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn gauge_is_invoked_through_trait_object() {
        let gauge = CountingGauge {
            calls: AtomicUsize::new(0),
        };
        let dyn_gauge: &dyn LivenessGauge = &gauge;

        dyn_gauge.set_up();

        assert_eq!(gauge.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn log_gauge_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogGauge>();
    }
}
