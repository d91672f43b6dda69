use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{VesselMetadata, VesselPosition};

/// One uninterrupted observation window for a vessel.
///
/// Holds at least one position, ordered chronologically. Distance
/// statistics are filled in relative to a reference track; they stay
/// `None` when no reference sample overlaps the window.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterSegment {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Duration in hours.
    pub duration: f64,
    pub positions: Vec<VesselPosition>,
    /// Closest approach to the reference track in nautical miles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closest_approach_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closest_approach_time: Option<DateTime<Utc>>,
    /// Average distance to the reference track in nautical miles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_distance: Option<f64>,
}

impl EncounterSegment {
    /// Builds a segment from its positions, `None` when empty.
    /// Positions are sorted by timestamp; start/end/duration derive
    /// from the first and last sample.
    pub fn from_positions(mut positions: Vec<VesselPosition>) -> Option<EncounterSegment> {
        positions.sort_by_key(|p| p.timestamp);

        let start_time = positions.first()?.timestamp;
        let end_time = positions.last()?.timestamp;

        Some(EncounterSegment {
            start_time,
            end_time,
            duration: duration_hours(start_time, end_time),
            positions,
            closest_approach_distance: None,
            closest_approach_time: None,
            average_distance: None,
        })
    }
}

/// All observation segments of one non-self vessel during a passage.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselEncounter {
    pub vessel: VesselMetadata,
    /// Ordered by `start_time`.
    pub segments: Vec<EncounterSegment>,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    /// Sum of segment durations in hours. Segments of one vessel never
    /// overlap, so the sum equals the observed time.
    pub total_duration: f64,
    pub total_position_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_closest_approach: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_closest_approach_time: Option<DateTime<Utc>>,
}

/// The encounter collection for one passage.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassageEncounters {
    pub passage_id: String,
    pub generated_at: DateTime<Utc>,
    /// Ordered by `first_seen`.
    pub encounters: Vec<VesselEncounter>,
    pub total_vessels: usize,
    pub total_segments: usize,
}

pub fn duration_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / (1000. * 60. * 60.)
}
