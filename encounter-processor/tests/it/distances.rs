use chrono::Duration;
use encounter_core::distance_nautical_miles;
use encounter_processor::{EncounterOptions, assemble_encounters};

use crate::helper::*;
use encounter_core::{Passage, VesselDataSet, VesselTrack};

fn dataset_with_self_and_other() -> (VesselDataSet, Passage) {
    let mut passage = Passage::test_default("p1", ts(0), ts(6 * 3600));
    passage.positions = (0..=6)
        .map(|h| reference(h * 3600, 58. + h as f64 * 0.1, 10.))
        .collect();

    // Dense self track covering the whole window.
    let self_track = (0..=360)
        .map(|m| track_point(m * 60, 58. + m as f64 / 3600., 10.))
        .collect();
    // The other vessel passes close at the two hour mark.
    let other_track = vec![
        track_point(3600, 59., 11.),
        track_point(2 * 3600, 58.2, 10.),
        track_point(2 * 3600 + 600, 58.5, 10.5),
    ];

    let data = VesselDataSet {
        vessels: vec![
            VesselTrack::test_default("self", self_track),
            VesselTrack::test_default("other", other_track),
        ],
    };

    (data, passage)
}

#[test]
fn test_closest_approach_is_tracked_against_the_reference_track() {
    let (data, passage) = dataset_with_self_and_other();

    let encounters = assemble_encounters(data, &passage, &EncounterOptions::default());
    assert_eq!(encounters.total_vessels, 1);

    let encounter = &encounters.encounters[0];
    assert_eq!(encounter.vessel.id, "other");

    // The sample at the two hour mark is temporally exact to the
    // reference sample at (58.2, 10).
    let expected_closest = distance_nautical_miles(58.2, 10., 58.2, 10.);
    let closest = encounter.overall_closest_approach.unwrap();
    assert!((closest - expected_closest).abs() < 1e-9);
    assert_eq!(encounter.overall_closest_approach_time, Some(ts(2 * 3600)));

    for segment in &encounter.segments {
        let average = segment.average_distance.unwrap();
        let min = segment.closest_approach_distance.unwrap();
        assert!(average >= min);
    }
}

#[test]
fn test_empty_reference_track_leaves_all_distances_unset() {
    let (data, mut passage) = dataset_with_self_and_other();
    passage.positions.clear();

    let encounters = assemble_encounters(data, &passage, &EncounterOptions::default());

    for encounter in &encounters.encounters {
        assert_eq!(encounter.overall_closest_approach, None);
        assert_eq!(encounter.overall_closest_approach_time, None);
        for segment in &encounter.segments {
            assert_eq!(segment.closest_approach_distance, None);
            assert_eq!(segment.average_distance, None);
        }
    }
}

#[test]
fn test_distance_calculation_can_be_disabled() {
    let (data, passage) = dataset_with_self_and_other();

    let options = EncounterOptions {
        calculate_distances: false,
        ..Default::default()
    };
    let encounters = assemble_encounters(data, &passage, &options);

    let encounter = &encounters.encounters[0];
    assert_eq!(encounter.overall_closest_approach, None);
    for segment in &encounter.segments {
        assert_eq!(segment.closest_approach_distance, None);
    }
}

#[test]
fn test_overall_closest_approach_is_the_minimum_over_segments() {
    let mut passage = Passage::test_default("p1", ts(0), ts(10 * 3600));
    passage.positions = (0..=10).map(|h| reference(h * 3600, 58., 10.)).collect();

    let self_track = (0..=600).map(|m| track_point(m * 60, 58., 10.)).collect();

    // Two segments separated by a five hour gap; the second comes far
    // closer to the reference track.
    let track = vec![
        track_point(3600, 60., 10.),
        track_point(6 * 3600, 58.1, 10.),
    ];
    let data = VesselDataSet {
        vessels: vec![
            VesselTrack::test_default("self", self_track),
            VesselTrack::test_default("v1", track),
        ],
    };

    let options = EncounterOptions {
        segment_gap: Duration::minutes(30),
        ..Default::default()
    };
    let encounters = assemble_encounters(data, &passage, &options);

    let encounter = &encounters.encounters[0];
    assert_eq!(encounter.segments.len(), 2);

    let second_segment_closest = encounter.segments[1].closest_approach_distance.unwrap();
    assert_eq!(
        encounter.overall_closest_approach,
        Some(second_segment_closest)
    );
    assert_eq!(encounter.overall_closest_approach_time, Some(ts(6 * 3600)));
}
