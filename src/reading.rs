//! Sensor readings and boundary validation for incoming batches.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single pressure measurement at a named foot location.
///
/// Readings are immutable and supplied wholesale on every render; there are
/// no partial updates. `id` is the stable draw-order key and must be unique
/// within a batch. `name` identifies the plot position (`L0`..`L2`,
/// `R0`..`R2` in the standard table).
///
/// # Example
///
/// ```rust
/// use plantar_map::SensorReading;
///
/// let reading: SensorReading =
///     serde_json::from_str(r#"{"id": 1, "name": "L0", "value": 430}"#).unwrap();
/// assert_eq!(reading.name, "L0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: i64,
    pub name: String,
    pub value: f64,
}

/// A reading batch that cannot be rendered.
///
/// Raised at the input boundary, before any scene node is produced. A batch
/// that fails validation is rejected whole; nothing is partially rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Two readings in the same batch share an `id`.
    #[error("duplicate reading id {id} in batch")]
    DuplicateId { id: i64 },

    /// A reading's value is NaN or infinite and cannot be plotted.
    #[error("reading {id} has a non-finite value")]
    NonFiniteValue { id: i64 },
}

/// Validate a reading batch before rendering.
///
/// Checks the per-batch invariants: ids are unique and every value is a
/// finite number. Out-of-range values are not an error (they are clamped
/// during color mapping), and an unrecognized `name` is not an error either
/// (the renderer skips it).
pub fn validate_batch(readings: &[SensorReading]) -> Result<(), InputError> {
    let mut seen = HashSet::with_capacity(readings.len());
    for reading in readings {
        if !seen.insert(reading.id) {
            return Err(InputError::DuplicateId { id: reading.id });
        }
        if !reading.value.is_finite() {
            return Err(InputError::NonFiniteValue { id: reading.id });
        }
    }
    Ok(())
}
