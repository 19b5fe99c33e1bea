//! Three-valued audit status.
//!
//! The audit runner reports success as an optional boolean: `true`,
//! `false`, or absent. Absence means the runner made no determination,
//! which is NOT the same as a failure. Filters downstream select strictly
//! [`Status::Failed`].

use serde::{Deserialize, Serialize};

/// Outcome of a job or report as stated by the audit runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Explicitly marked successful (`success: true`).
    Passed,

    /// Explicitly marked failed (`success: false`).
    Failed,

    /// No determination recorded (`success` absent or null).
    #[default]
    Unknown,
}

impl Status {
    /// Whether the runner explicitly marked this as failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Status::Failed)
    }

    /// Whether the runner explicitly marked this as passed.
    pub fn is_passed(&self) -> bool {
        matches!(self, Status::Passed)
    }
}

/// Module for serializing [`Status`] to the runner's optional-boolean wire form.
///
/// Use with `#[serde(default, with = "status::as_success_flag")]` so an
/// absent `success` key deserializes to [`Status::Unknown`].
pub mod as_success_flag {
    use super::Status;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(status: &Status, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match status {
            Status::Passed => serializer.serialize_bool(true),
            Status::Failed => serializer.serialize_bool(false),
            Status::Unknown => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Status, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flag = Option::<bool>::deserialize(deserializer)?;
        Ok(match flag {
            Some(true) => Status::Passed,
            Some(false) => Status::Failed,
            None => Status::Unknown,
        })
    }
}
