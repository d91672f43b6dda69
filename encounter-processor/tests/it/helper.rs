use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use encounter_core::{
    CoreResult, EncounterInbound, EncounterOutbound, Passage, PassageEncounters, PassagePosition,
    TrackPoint, VesselDataSet, VesselPosition,
};

pub fn ts(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

pub fn position(seconds: i64, lat: f64, lon: f64) -> VesselPosition {
    VesselPosition::test_at(ts(seconds), lat, lon)
}

pub fn track_point(seconds: i64, lat: f64, lon: f64) -> TrackPoint {
    TrackPoint::test_at(ts(seconds), lat, lon)
}

pub fn reference(seconds: i64, lat: f64, lon: f64) -> PassagePosition {
    PassagePosition::test_at(ts(seconds), lat, lon)
}

/// In-memory storage ports for exercising the processor end to end.
pub struct TestStorage {
    passage: Passage,
    data: VesselDataSet,
    pub stored: Mutex<Option<PassageEncounters>>,
}

impl TestStorage {
    pub fn new(passage: Passage, data: VesselDataSet) -> Arc<TestStorage> {
        Arc::new(TestStorage {
            passage,
            data,
            stored: Mutex::new(None),
        })
    }
}

#[async_trait]
impl EncounterOutbound for TestStorage {
    async fn passage(&self, _passage_ref: &str) -> CoreResult<Passage> {
        Ok(self.passage.clone())
    }

    async fn vessel_data(&self, _passage: &Passage) -> CoreResult<VesselDataSet> {
        Ok(self.data.clone())
    }
}

#[async_trait]
impl EncounterInbound for TestStorage {
    async fn add_encounters(&self, encounters: PassageEncounters) -> CoreResult<()> {
        *self.stored.lock().unwrap() = Some(encounters);
        Ok(())
    }
}
