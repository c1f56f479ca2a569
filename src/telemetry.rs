//! Telemetry helpers for applications embedding `ods-charts`.
//!
//! Theme resolution and option building emit `tracing` events at `debug` and
//! `trace` level. Nothing is installed by default: hosts either call
//! [`init_default_tracing`] or wire their own subscriber.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG` (falling back to
/// `info`) when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or when the host application
/// already owns the global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
