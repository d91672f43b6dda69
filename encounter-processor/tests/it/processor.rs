use encounter_core::{Passage, VesselDataSet, VesselTrack};
use encounter_processor::{EncounterOptions, EncounterProcessor, assemble_encounters};

use crate::helper::*;

fn three_vessel_dataset() -> (VesselDataSet, Passage) {
    let passage = Passage::test_default("p1", ts(0), ts(12 * 3600));

    let self_track = (0..=720).map(|m| track_point(m * 60, 58., 10.)).collect();
    // "late" is first seen after "early".
    let early_track = vec![track_point(3600, 59., 10.), track_point(4000, 59., 10.1)];
    let late_track = vec![track_point(8 * 3600, 57., 9.)];

    let data = VesselDataSet {
        vessels: vec![
            VesselTrack::test_default("late", late_track),
            VesselTrack::test_default("self", self_track),
            VesselTrack::test_default("early", early_track),
        ],
    };

    (data, passage)
}

#[test]
fn test_self_vessel_is_excluded_and_encounters_sort_by_first_seen() {
    let (data, passage) = three_vessel_dataset();

    let encounters = assemble_encounters(data, &passage, &EncounterOptions::default());

    assert_eq!(encounters.passage_id, "p1");
    assert_eq!(encounters.total_vessels, 2);
    assert_eq!(encounters.total_segments, 2);

    let ids: Vec<_> = encounters
        .encounters
        .iter()
        .map(|e| e.vessel.id.as_str())
        .collect();
    assert_eq!(ids, vec!["early", "late"]);

    let early = &encounters.encounters[0];
    assert_eq!(early.first_seen, ts(3600));
    assert_eq!(early.last_seen, ts(4000));
    assert_eq!(early.total_position_count, 2);
    assert_eq!(early.segments.len(), 1);
    assert_eq!(early.total_duration, early.segments[0].duration);
}

#[test]
fn test_aggregation_is_idempotent_apart_from_the_generation_time() {
    let (data, passage) = three_vessel_dataset();

    let first = assemble_encounters(data.clone(), &passage, &EncounterOptions::default());
    let mut second = assemble_encounters(data, &passage, &EncounterOptions::default());

    second.generated_at = first.generated_at;
    assert_eq!(first, second);
}

#[test]
fn test_vessels_without_track_points_are_skipped() {
    let (mut data, passage) = three_vessel_dataset();
    data.vessels.push(VesselTrack::test_default("ghost", Vec::new()));

    let encounters = assemble_encounters(data, &passage, &EncounterOptions::default());

    assert_eq!(encounters.total_vessels, 2);
    assert!(encounters.encounters.iter().all(|e| e.vessel.id != "ghost"));
}

#[test]
fn test_empty_dataset_produces_an_empty_collection() {
    let passage = Passage::test_default("p1", ts(0), ts(3600));

    let encounters =
        assemble_encounters(VesselDataSet::default(), &passage, &EncounterOptions::default());

    assert_eq!(encounters.total_vessels, 0);
    assert_eq!(encounters.total_segments, 0);
    assert!(encounters.encounters.is_empty());
}

#[tokio::test]
async fn test_run_single_stores_the_assembled_encounters() {
    let (data, passage) = three_vessel_dataset();
    let storage = TestStorage::new(passage, data);

    let processor = EncounterProcessor::new(storage.clone(), EncounterOptions::default());
    processor.run_single("p1").await.unwrap();

    let stored = storage.stored.lock().unwrap().clone().unwrap();
    assert_eq!(stored.passage_id, "p1");
    assert_eq!(stored.total_vessels, 2);
}
