use chrono::{DateTime, Duration, Utc};

use encounter_core::{
    EncounterSegment, PassageEncounters, VesselEncounter, VesselPosition, interpolate_angle,
};

/// How long after a segment starts (or before it ends) a vessel counts
/// as entering (or exiting), for fade-in/fade-out cues.
pub fn edge_window() -> Duration {
    Duration::minutes(5)
}

/// One vessel visible at a queried instant.
#[derive(Debug, Clone)]
pub struct VisibleVessel<'a> {
    pub encounter: &'a VesselEncounter,
    pub position: VesselPosition,
    pub segment_index: usize,
}

/// The vessels visible at `timestamp`, one entry per (encounter,
/// segment) pair whose window contains it.
///
/// The reported position is interpolated between the bracketing
/// samples where possible, falling back to the closest-in-time sample
/// of the segment. Segments of one vessel never overlap, so in
/// practice a vessel appears at most once; the query does not assume
/// it.
pub fn visible_vessels(
    encounters: &PassageEncounters,
    timestamp: DateTime<Utc>,
) -> Vec<VisibleVessel<'_>> {
    let mut visible = Vec::new();

    for encounter in &encounters.encounters {
        for (segment_index, segment) in encounter.segments.iter().enumerate() {
            if timestamp < segment.start_time || timestamp > segment.end_time {
                continue;
            }

            let position = interpolate_within(segment, timestamp)
                .or_else(|| closest_position(segment, timestamp));

            if let Some(position) = position {
                visible.push(VisibleVessel {
                    encounter,
                    position,
                    segment_index,
                });
            }
        }
    }

    visible
}

/// True iff `timestamp` falls within the first five minutes of the
/// segment, inclusive at both ends.
pub fn is_vessel_entering(
    encounter: &VesselEncounter,
    segment_index: usize,
    timestamp: DateTime<Utc>,
) -> bool {
    let Some(segment) = encounter.segments.get(segment_index) else {
        return false;
    };

    let elapsed = timestamp - segment.start_time;
    elapsed >= Duration::zero() && elapsed <= edge_window()
}

/// True iff `timestamp` falls within the last five minutes of the
/// segment, inclusive at both ends. Independent of
/// [`is_vessel_entering`]; both hold for very short segments.
pub fn is_vessel_exiting(
    encounter: &VesselEncounter,
    segment_index: usize,
    timestamp: DateTime<Utc>,
) -> bool {
    let Some(segment) = encounter.segments.get(segment_index) else {
        return false;
    };

    let remaining = segment.end_time - timestamp;
    remaining >= Duration::zero() && remaining <= edge_window()
}

/// Linear interpolation between the bracketing position pair, `None`
/// when no pair brackets `timestamp`.
fn interpolate_within(
    segment: &EncounterSegment,
    timestamp: DateTime<Utc>,
) -> Option<VesselPosition> {
    for pair in segment.positions.windows(2) {
        let (pos1, pos2) = (&pair[0], &pair[1]);

        if timestamp < pos1.timestamp || timestamp > pos2.timestamp {
            continue;
        }

        if pos1.timestamp == pos2.timestamp {
            return Some(pos1.clone());
        }

        let progress = (timestamp - pos1.timestamp).num_milliseconds() as f64
            / (pos2.timestamp - pos1.timestamp).num_milliseconds() as f64;

        let speed = match (pos1.speed, pos2.speed) {
            (Some(s1), Some(s2)) => Some(s1 + (s2 - s1) * progress),
            (s1, s2) => s1.or(s2),
        };
        let heading = match (pos1.heading, pos2.heading) {
            (Some(h1), Some(h2)) => Some(interpolate_angle(h1, h2, progress)),
            (h1, h2) => h1.or(h2),
        };

        return Some(VesselPosition {
            timestamp,
            lat: pos1.lat + (pos2.lat - pos1.lat) * progress,
            lon: pos1.lon + (pos2.lon - pos1.lon) * progress,
            speed,
            heading,
            altitude: pos1.altitude.or(pos2.altitude),
            accuracy: pos1.accuracy.or(pos2.accuracy),
        });
    }

    None
}

fn closest_position(segment: &EncounterSegment, timestamp: DateTime<Utc>) -> Option<VesselPosition> {
    segment
        .positions
        .iter()
        .min_by_key(|p| (p.timestamp - timestamp).abs())
        .cloned()
}
