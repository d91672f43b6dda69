use chrono::Duration;
use encounter_core::{
    EncounterSegment, Mean, PassagePosition, VesselPosition, distance_nautical_miles,
};

/// Reference samples further than this from a vessel sample are not
/// comparable.
pub fn reference_match_window() -> Duration {
    Duration::hours(1)
}

/// Enriches a segment with closest-approach and average distance to
/// the reference track.
///
/// Each vessel sample is matched to the temporally nearest reference
/// sample within the match window; unmatched samples contribute no
/// distance datum. A segment with no matched sample at all keeps all
/// three statistics unset. Returns a new segment value, the input is
/// consumed rather than mutated behind a shared reference.
pub fn annotate_segment(
    segment: EncounterSegment,
    reference: &[PassagePosition],
) -> EncounterSegment {
    if reference.is_empty() {
        return segment;
    }

    let mut closest: Option<(f64, chrono::DateTime<chrono::Utc>)> = None;
    let mut matched_distances = Vec::with_capacity(segment.positions.len());

    for position in &segment.positions {
        let Some(reference_position) = closest_reference_position(position, reference) else {
            continue;
        };

        let distance = distance_nautical_miles(
            position.lat,
            position.lon,
            reference_position.lat,
            reference_position.lon,
        );

        match closest {
            Some((min, _)) if distance >= min => {}
            _ => closest = Some((distance, position.timestamp)),
        }

        matched_distances.push(distance);
    }

    let average_distance = matched_distances.into_iter().mean();

    EncounterSegment {
        closest_approach_distance: closest.map(|(distance, _)| distance),
        closest_approach_time: closest.map(|(_, time)| time),
        average_distance,
        ..segment
    }
}

/// The reference sample temporally nearest to `position`, restricted
/// to the match window. First one wins on exact ties.
fn closest_reference_position<'a>(
    position: &VesselPosition,
    reference: &'a [PassagePosition],
) -> Option<&'a PassagePosition> {
    reference
        .iter()
        .map(|r| (r, (r.timestamp - position.timestamp).abs()))
        .filter(|(_, time_diff)| *time_diff < reference_match_window())
        .min_by_key(|(_, time_diff)| *time_diff)
        .map(|(r, _)| r)
}
