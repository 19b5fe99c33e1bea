//! Failure extraction from the audit result tree.

use gimbal_gate_domain::{AuditRun, JobResult, Report};

/// Select the failing (job, report) pairs in tree order.
///
/// Jobs are filtered to explicit failures first, then reports within each
/// failing job are filtered the same way. `Unknown` never matches at
/// either level, so a job without a recorded outcome contributes nothing
/// even if reports inside it failed. No de-duplication, no re-sorting.
pub fn failing_reports(run: &AuditRun) -> Vec<(&JobResult, &Report)> {
    run.data
        .iter()
        .filter(|job| job.success.is_failed())
        .flat_map(|job| {
            job.data
                .iter()
                .filter(|report| report.success.is_failed())
                .map(move |report| (job, report))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gimbal_gate_domain::Status;

    fn report(label: &str, success: Status) -> Report {
        Report {
            label: label.to_string(),
            value: "observed".to_string(),
            threshold: "limit".to_string(),
            success,
        }
    }

    fn job(label: &str, success: Status, reports: Vec<Report>) -> JobResult {
        JobResult {
            label: label.to_string(),
            data: reports,
            success,
        }
    }

    #[test]
    fn test_failing_report_under_failing_job_selected() {
        let run = AuditRun {
            data: vec![job(
                "size",
                Status::Failed,
                vec![report("main.js", Status::Failed)],
            )],
            success: Status::Failed,
        };

        let pairs = failing_reports(&run);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.label, "size");
        assert_eq!(pairs[0].1.label, "main.js");
    }

    #[test]
    fn test_failed_job_with_passing_report_yields_nothing() {
        let run = AuditRun {
            data: vec![job(
                "size",
                Status::Failed,
                vec![report("main.js", Status::Passed)],
            )],
            success: Status::Failed,
        };

        assert!(failing_reports(&run).is_empty());
    }

    #[test]
    fn test_failing_report_under_unknown_job_dropped() {
        let run = AuditRun {
            data: vec![job(
                "size",
                Status::Unknown,
                vec![report("main.js", Status::Failed)],
            )],
            success: Status::Unknown,
        };

        assert!(failing_reports(&run).is_empty());
    }

    #[test]
    fn test_failing_report_under_passing_job_dropped() {
        let run = AuditRun {
            data: vec![job(
                "size",
                Status::Passed,
                vec![report("main.js", Status::Failed)],
            )],
            success: Status::Passed,
        };

        assert!(failing_reports(&run).is_empty());
    }

    #[test]
    fn test_unknown_report_under_failing_job_dropped() {
        let run = AuditRun {
            data: vec![job(
                "size",
                Status::Failed,
                vec![report("main.js", Status::Unknown)],
            )],
            success: Status::Failed,
        };

        assert!(failing_reports(&run).is_empty());
    }

    #[test]
    fn test_tree_order_preserved() {
        let run = AuditRun {
            data: vec![
                job(
                    "size",
                    Status::Failed,
                    vec![
                        report("main.js", Status::Failed),
                        report("vendor.js", Status::Passed),
                        report("app.css", Status::Failed),
                    ],
                ),
                job("heap", Status::Passed, vec![report("used", Status::Failed)]),
                job(
                    "lighthouse",
                    Status::Failed,
                    vec![report("performance", Status::Failed)],
                ),
            ],
            success: Status::Failed,
        };

        let labels: Vec<_> = failing_reports(&run)
            .iter()
            .map(|(j, r)| format!("{}/{}", j.label, r.label))
            .collect();
        assert_eq!(labels, vec!["size/main.js", "size/app.css", "lighthouse/performance"]);
    }

    #[test]
    fn test_extraction_count_matches_doubly_failed_reports() {
        let run = AuditRun {
            data: vec![
                job(
                    "size",
                    Status::Failed,
                    vec![
                        report("a", Status::Failed),
                        report("b", Status::Failed),
                        report("c", Status::Unknown),
                    ],
                ),
                job("unused", Status::Unknown, vec![report("d", Status::Failed)]),
            ],
            success: Status::Failed,
        };

        assert_eq!(failing_reports(&run).len(), 2);
    }
}
