//! Log sink adapter writing accepted submissions to `tracing`

use accountforms_domain::SubmissionRecord;

use crate::ports::outbound::LogSinkPort;

/// Emits one `info` event per accepted submission. Nothing is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl TracingLogSink {
    pub fn new() -> Self {
        Self
    }

    /// JSON line for a record. The password never appears in it.
    pub fn render(submission: &SubmissionRecord) -> Result<String, serde_json::Error> {
        serde_json::to_string(submission)
    }
}

impl LogSinkPort for TracingLogSink {
    fn record(&self, submission: &SubmissionRecord) {
        match Self::render(submission) {
            Ok(json) => tracing::info!(kind = submission.kind(), "Accepted submission: {}", json),
            Err(e) => tracing::warn!(
                "Failed to serialize {} submission: {}",
                submission.kind(),
                e
            ),
        }
    }
}
