use chrono::Duration;
use encounter_core::{EncounterSegment, VesselPosition};

/// Partitions a vessel's positions into contiguous observation
/// segments.
///
/// Positions are sorted by timestamp, then split wherever the gap
/// between consecutive samples strictly exceeds `gap`. Every input
/// position ends up in exactly one segment.
pub fn build_segments(positions: Vec<VesselPosition>, gap: Duration) -> Vec<EncounterSegment> {
    let mut sorted = positions;
    sorted.sort_by_key(|p| p.timestamp);

    let mut segments = Vec::new();
    let mut current: Vec<VesselPosition> = Vec::new();

    for position in sorted {
        let gap_exceeded = current
            .last()
            .is_some_and(|prev| position.timestamp - prev.timestamp > gap);
        if gap_exceeded {
            segments.extend(EncounterSegment::from_positions(std::mem::take(&mut current)));
        }
        current.push(position);
    }

    segments.extend(EncounterSegment::from_positions(current));

    segments
}
