/// Records unexpected failures for operator diagnosis
pub trait ErrorSink: Send + Sync {
    fn record_error(&self, message: &str);
}

/// Forwards to the `tracing` error log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn record_error(&self, message: &str) {
        super::log_error(message);
    }
}
