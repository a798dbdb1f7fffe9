//! Metrics for airdrop submissions.
//!
//! Recorded through the `metrics` facade; whoever embeds the CLI logic decides
//! which recorder, if any, receives them.

use airdrop::ErrorKind;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Aggregated metrics for airdrop submissions.
#[derive(Debug, Clone)]
pub struct Metrics {
    _private: (),
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics instance and register all metric descriptions.
    pub fn new() -> Self {
        Self::register_descriptions();
        Self { _private: () }
    }

    fn register_descriptions() {
        describe_counter!(
            "tsender_submissions_total",
            "Total number of airdrop submissions"
        );
        describe_counter!(
            "tsender_submissions_success_total",
            "Total number of confirmed airdrops"
        );
        describe_counter!(
            "tsender_submissions_failure_total",
            "Total number of failed submissions by error kind"
        );
        describe_counter!(
            "tsender_approvals_total",
            "Total number of confirmed approvals issued before an airdrop"
        );
        describe_histogram!(
            "tsender_submission_duration_seconds",
            "Duration of each submission in seconds"
        );
    }

    pub fn record_submission(&self) {
        counter!("tsender_submissions_total").increment(1);
    }

    pub fn record_success(&self, approved: bool, duration: Duration) {
        counter!("tsender_submissions_success_total").increment(1);
        if approved {
            counter!("tsender_approvals_total").increment(1);
        }
        histogram!("tsender_submission_duration_seconds").record(duration.as_secs_f64());
    }

    pub fn record_failure(&self, kind: ErrorKind, duration: Duration) {
        counter!("tsender_submissions_failure_total", "kind" => kind.as_str()).increment(1);
        histogram!("tsender_submission_duration_seconds").record(duration.as_secs_f64());
    }
}
