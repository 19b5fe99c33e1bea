//! Bailout extraction pipeline: record extraction, noise filtering, and
//! the report write.
//!
//! Dependency directories, build-tool-generated modules, ignored modules,
//! and synthetic multi-entry modules bail out in every build; so do
//! dynamic-import and hot-module-replacement reasons. Dropping them keeps
//! the report focused on unexpected optimization failures.

use anyhow::Context;
use gimbal_gate_domain::{render_report, BailoutRecord, StatsSnapshot};
use std::path::Path;
use tracing::info;

/// Name prefixes of internal-infrastructure modules.
const NOISY_NAME_PREFIXES: &[&str] = &["(webpack)", "(ignored", "multi"];

/// Dependency-directory marker, matched anywhere in the module name.
const NOISY_NAME_SUBSTRING: &str = "node_modules";

/// Low-signal markers matched against the serialized record text.
const NOISY_REASON_MARKERS: &[&str] = &["import()", "HMR"];

/// Reduce a stats snapshot to bailout records, in module order.
///
/// A module yields a record only when its bailout-reason list is present
/// and non-empty; everything else is dropped outright rather than kept as
/// an empty record.
pub fn extract_records(snapshot: &StatsSnapshot) -> Vec<BailoutRecord> {
    snapshot
        .modules
        .iter()
        .filter_map(|module| {
            let reasons = module.optimization_bailout.as_ref()?;
            if reasons.is_empty() {
                return None;
            }
            Some(BailoutRecord {
                name: module.name.clone(),
                reasons: reasons.clone(),
                chunks: module.chunks.clone(),
            })
        })
        .collect()
}

/// Whether the module name marks internal build infrastructure.
fn is_infrastructure(name: &str) -> bool {
    name.contains(NOISY_NAME_SUBSTRING)
        || NOISY_NAME_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
}

/// Whether the record's serialized text carries a low-signal reason.
fn is_low_signal(record: &BailoutRecord) -> bool {
    let text = record
        .to_json_text()
        .expect("BailoutRecord is serializable");
    NOISY_REASON_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Drop known-noisy records. Both predicates must pass for a record to
/// survive; the pattern sets are fixed, not user-configurable.
pub fn filter_noise(records: Vec<BailoutRecord>) -> Vec<BailoutRecord> {
    records
        .into_iter()
        .filter(|record| !is_infrastructure(&record.name) && !is_low_signal(record))
        .collect()
}

/// Serialize the curated records and write them to `path`, awaited.
///
/// Write failures surface through the returned error with the target path
/// attached, instead of escaping as an unawaited side effect.
pub async fn write_report(records: &[BailoutRecord], path: &Path) -> anyhow::Result<()> {
    let body = render_report(records)?;
    tokio::fs::write(path, body)
        .await
        .with_context(|| format!("writing bailout report to {}", path.display()))?;

    info!(path = %path.display(), records = records.len(), "Wrote bailout report");
    Ok(())
}
