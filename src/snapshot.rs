//! On-disk form of the seat board.
//!
//! ```json
//! { "seats": [ { "row": 0, "col": 1, "booked": true }, ... ] }
//! ```
//!
//! Reading is lenient: unknown fields are ignored, and entries that are not
//! objects with integer `row`/`col` are dropped one by one instead of failing
//! the whole document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Persisted state of one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub row: usize,
    pub col: usize,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub booked: bool,
}

impl SeatRecord {
    pub fn new(row: usize, col: usize, booked: bool) -> Self {
        Self { row, col, booked }
    }
}

/// Full state of the board at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HallSnapshot {
    pub seats: Vec<SeatRecord>,
}

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    seats: Vec<Value>,
}

impl HallSnapshot {
    pub fn new(seats: Vec<SeatRecord>) -> Self {
        Self { seats }
    }

    /// Parse a snapshot document.
    ///
    /// Fails only when the text is not JSON or the top level is not an object
    /// with an optional `seats` array. Bad entries inside `seats` are skipped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw.seats))
    }

    /// Parse a snapshot from a reader. Same leniency as [`HallSnapshot::from_json`].
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        let raw: RawSnapshot = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(raw.seats))
    }

    fn from_entries(entries: Vec<Value>) -> Self {
        let total = entries.len();
        let seats: Vec<SeatRecord> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();
        if seats.len() < total {
            tracing::debug!(
                "Skipped {} malformed seat entries out of {}",
                total - seats.len(),
                total
            );
        }
        Self { seats }
    }

    pub fn booked_count(&self) -> usize {
        self.seats.iter().filter(|s| s.booked).count()
    }
}

/// Accept JSON bools as-is and numbers as truthy when non-zero.
/// Everything else reads as free.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    })
}
