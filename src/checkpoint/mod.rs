//! Suspend and restore support.
//!
//! A [`Snapshot`] is the three primitive fields handed to the host when the
//! session is suspended. A [`Checkpoint`] wraps a snapshot with a format
//! version, an id and a timestamp, and encodes to JSON for readability or to
//! bincode for compactness.

use crate::core::{Cycle, Stage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Counter value persisted when a counter is unset.
pub const UNSET: i32 = -1;

/// Persisted form of a cycle.
///
/// Field names follow the host's key convention (`LEMONADE_STATE`,
/// `LEMON_SIZE`, `SQUEEZE_COUNT`). Missing keys take their defaults, so an
/// empty record restores a fresh cycle.
///
/// # Example
///
/// ```rust
/// use lemonade::checkpoint::Snapshot;
///
/// let snapshot: Snapshot = serde_json::from_str(r#"{ "LEMONADE_STATE": "drink" }"#).unwrap();
///
/// assert_eq!(snapshot.lemonade_state, "drink");
/// assert_eq!(snapshot.lemon_size, -1);
/// assert_eq!(snapshot.squeeze_count, -1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Snapshot {
    /// Stage tag: `select`, `squeeze`, `drink` or `restart`
    pub lemonade_state: String,
    /// Squeezes left on the current lemon, or [`UNSET`]
    pub lemon_size: i32,
    /// Squeezes so far on the current lemon, or [`UNSET`]
    pub squeeze_count: i32,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            lemonade_state: Stage::Select.tag().to_string(),
            lemon_size: UNSET,
            squeeze_count: UNSET,
        }
    }
}

impl Snapshot {
    /// Rebuild the cycle this snapshot describes.
    ///
    /// Returns `None` for an unknown stage tag or a squeeze that can never
    /// finish. Negative counters read as unset.
    pub fn to_cycle(&self) -> Option<Cycle> {
        let stage = Stage::from_tag(&self.lemonade_state)?;
        Cycle::from_parts(
            stage,
            counter(self.lemon_size),
            counter(self.squeeze_count),
        )
    }
}

impl From<&Cycle> for Snapshot {
    fn from(cycle: &Cycle) -> Self {
        Self {
            lemonade_state: cycle.stage().tag().to_string(),
            lemon_size: persisted(cycle.remaining_squeezes()),
            squeeze_count: persisted(cycle.squeeze_count()),
        }
    }
}

fn counter(value: i32) -> Option<u32> {
    u32::try_from(value).ok()
}

fn persisted(value: Option<u32>) -> i32 {
    value.and_then(|v| i32::try_from(v).ok()).unwrap_or(UNSET)
}

/// Versioned envelope around a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub created_at: DateTime<Utc>,

    /// The persisted cycle
    pub snapshot: Snapshot,
}

impl Checkpoint {
    /// Wrap a snapshot in a new checkpoint stamped with the current time.
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            snapshot,
        }
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate_version()
    }

    /// Encode as bincode.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from bincode, rejecting unsupported versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate_version()
    }

    fn validate_version(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}
