//! Structured threshold-failure diagnostics.
//!
//! Each failing report becomes one [`Diagnostic`] carrying the category,
//! metric, observed value, threshold, and severity as separate fields.
//! Presentation happens only at the sink boundary via [`Display`], which
//! renders the fixed message template.

use crate::audit::{JobResult, Report};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Which diagnostics collection a message is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Build-breaking; appended to the errors sink.
    Error,
    /// Non-breaking; appended to the warnings sink.
    Warning,
}

impl Severity {
    /// Severity implied by the gate's `bail` policy.
    pub fn from_bail(bail: bool) -> Self {
        if bail {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}

/// One threshold failure, ready for routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Audited category (job label, e.g. "size").
    pub job: String,

    /// Failing metric (report label, e.g. "main.js").
    pub metric: String,

    /// Observed value as reported by the runner.
    pub observed: String,

    /// Configured limit as reported by the runner.
    pub threshold: String,

    /// Routing severity decided by the gate policy.
    pub severity: Severity,
}

impl Diagnostic {
    /// Build a diagnostic from a failing (job, report) pair.
    pub fn from_failure(job: &JobResult, report: &Report, severity: Severity) -> Self {
        Diagnostic {
            job: job.label.clone(),
            metric: report.label.clone(),
            observed: report.value.clone(),
            threshold: report.threshold.clone(),
            severity,
        }
    }
}

impl Display for Diagnostic {
    /// Render the fixed message template. Labels and values are
    /// interpolated verbatim, with no truncation or escaping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Gimbal: {}] {}: {} (threshold {}).",
            self.job, self.metric, self.observed, self.threshold
        )
    }
}
