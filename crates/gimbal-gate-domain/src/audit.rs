//! Hierarchical audit result tree.
//!
//! Produced entirely by the external audit runner for a single build and
//! only read here, never mutated. The nesting is run -> job -> report,
//! where a job is one audited category ("size", "lighthouse") and a report
//! is one measured metric within it.

use crate::status::{self, Status};
use serde::{Deserialize, Serialize};

/// Top-level result of one audit invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRun {
    /// Job results in the order the runner produced them.
    #[serde(default)]
    pub data: Vec<JobResult>,

    /// Overall outcome; absence means "assume success".
    #[serde(default, with = "status::as_success_flag")]
    pub success: Status,
}

/// One audited category (e.g. "size", "lighthouse").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    /// Category identifier.
    pub label: String,

    /// Per-metric reports in source order.
    #[serde(default)]
    pub data: Vec<Report>,

    /// Category outcome.
    #[serde(default, with = "status::as_success_flag")]
    pub success: Status,
}

/// One measured metric within a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Metric identifier (e.g. a bundle file name).
    pub label: String,

    /// Observed value, pre-formatted by the runner.
    #[serde(default)]
    pub value: String,

    /// Configured limit, pre-formatted by the runner.
    #[serde(default)]
    pub threshold: String,

    /// Metric outcome.
    #[serde(default, with = "status::as_success_flag")]
    pub success: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_deserializes_from_runner_json() {
        let json = r#"{
            "data": [
                {
                    "label": "size",
                    "success": false,
                    "data": [
                        {
                            "label": "main.js",
                            "value": "500kb",
                            "threshold": "400kb",
                            "success": false
                        }
                    ]
                }
            ],
            "success": false
        }"#;

        let run: AuditRun = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(run.success, Status::Failed);
        assert_eq!(run.data.len(), 1);
        assert_eq!(run.data[0].label, "size");
        assert_eq!(run.data[0].data[0].value, "500kb");
        assert_eq!(run.data[0].data[0].threshold, "400kb");
    }

    #[test]
    fn test_missing_success_defaults_to_unknown() {
        let json = r#"{"data": [{"label": "size", "data": []}]}"#;
        let run: AuditRun = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(run.success, Status::Unknown);
        assert_eq!(run.data[0].success, Status::Unknown);
    }

    #[test]
    fn test_empty_tree() {
        let run: AuditRun = serde_json::from_str("{}").expect("deserialize failed");
        assert!(run.data.is_empty());
        assert_eq!(run.success, Status::Unknown);
    }
}
