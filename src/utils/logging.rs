use anyhow::Error;
use tracing::span::Span;

pub trait LogError {
    /// Logs the error inside this span, including its whole chain of causes.
    fn log_error(&self, error: &Error);
}

impl LogError for Span {
    fn log_error(&self, error: &Error) {
        self.in_scope(|| {
            tracing::error!("Error: {error:?}");
        });
    }
}
