use tracing::error;

/// A non-2xx answer from the dictionary service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupFailure<'a> {
    pub status: u16,
    pub word: &'a str,
    pub language: &'a str,
    pub body: &'a str,
}

/// Receives the raw body of every failed lookup.
/// `TracingSink` in production; tests install recording sinks or `SilentSink`.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, failure: &LookupFailure<'_>);
}

/// Emits failures as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, failure: &LookupFailure<'_>) {
        error!(
            status = failure.status,
            word = %failure.word,
            language = %failure.language,
            body = %failure.body,
            "dictionary lookup failed"
        );
    }
}

/// Drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&self, _failure: &LookupFailure<'_>) {}
}
