use super::co_object::Form7CoObjectRows;
use serde::Serialize;

/// Context passed to the logger whenever the classifier falls back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FallbackMetadata<'a> {
    /// The code as received, before trimming.
    pub code: Option<&'a str>,
    /// Counter value after this fallback was recorded.
    pub fallback_trigger_count: u64,
    pub fallback_rows: Form7CoObjectRows,
}

/// Sink for classifier fallback diagnostics.
///
/// Any `Fn(&str, &FallbackMetadata)` closure is a logger, so callers can
/// capture calls without defining a type.
pub trait FallbackLogger {
    fn log(&self, message: &str, metadata: &FallbackMetadata<'_>);
}

impl<F> FallbackLogger for F
where
    F: Fn(&str, &FallbackMetadata<'_>),
{
    fn log(&self, message: &str, metadata: &FallbackMetadata<'_>) {
        self(message, metadata)
    }
}

/// Default logger: a `tracing` warning with the metadata as structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl FallbackLogger for TracingLogger {
    fn log(&self, message: &str, metadata: &FallbackMetadata<'_>) {
        tracing::warn!(
            code = metadata.code.unwrap_or_default(),
            fallback_trigger_count = metadata.fallback_trigger_count,
            dead_row_id = metadata.fallback_rows.dead_row_id,
            injured_row_id = metadata.fallback_rows.injured_row_id,
            "{}",
            message
        );
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentLogger;

impl FallbackLogger for SilentLogger {
    fn log(&self, _message: &str, _metadata: &FallbackMetadata<'_>) {}
}
