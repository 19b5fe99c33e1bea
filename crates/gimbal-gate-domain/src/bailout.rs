//! Optimization-bailout snapshot shapes and report rows.
//!
//! The build orchestrator's post-completion stats expose, per module, a
//! name, an optional list of optimization-bailout reason strings, and
//! chunk associations. Only that minimal shape is modeled here; chunk
//! associations are carried opaquely.

use crate::error::Result;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Post-completion stats snapshot, reduced to the per-module records the
/// bailout pipeline reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub modules: Vec<ModuleStats>,
}

/// Per-module metadata from the orchestrator's stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStats {
    /// Module identifier (usually a path).
    pub name: String,

    /// "Why was this not optimized" reasons; absent when the orchestrator
    /// recorded none.
    #[serde(default)]
    pub optimization_bailout: Option<Vec<String>>,

    /// Chunk associations, kept opaque.
    #[serde(default)]
    pub chunks: Value,
}

/// One row of the curated bailout report.
///
/// Serializes as the 3-element array `[name, reasons, chunks]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BailoutRecord {
    pub name: String,
    pub reasons: Vec<String>,
    pub chunks: Value,
}

impl BailoutRecord {
    /// JSON text of the `[name, reasons, chunks]` triple, used both for
    /// the report body and for low-signal text matching.
    pub fn to_json_text(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for BailoutRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut triple = serializer.serialize_tuple(3)?;
        triple.serialize_element(&self.name)?;
        triple.serialize_element(&self.reasons)?;
        triple.serialize_element(&self.chunks)?;
        triple.end()
    }
}

/// Render the curated report body: a pretty-printed JSON array of
/// `[name, reasons, chunks]` triples.
pub fn render_report(records: &[BailoutRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
