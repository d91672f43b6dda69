use std::sync::Arc;

use chrono::{Duration, Utc};
use itertools::Itertools;
use snafu::ResultExt;
use tracing::{info, instrument};

use encounter_core::{
    EncounterInbound, EncounterOutbound, Passage, PassageEncounters, VesselDataSet,
    VesselEncounter, VesselPosition,
};

use crate::{
    Result, annotate_segment, build_segments, error::error::CoreSnafu, identify_self_vessel,
};

/// Knobs for one encounter processing run.
#[derive(Debug, Clone)]
pub struct EncounterOptions {
    /// Maximum distance in nautical miles to consider an encounter.
    /// Reserved for future segment filtering, not enforced yet.
    pub max_encounter_distance: f64,
    /// Gaps between consecutive samples beyond this split a vessel's
    /// track into separate segments.
    pub segment_gap: Duration,
    /// Whether to compute closest-approach statistics against the
    /// reference track.
    pub calculate_distances: bool,
}

impl Default for EncounterOptions {
    fn default() -> Self {
        EncounterOptions {
            max_encounter_distance: 50.,
            segment_gap: Duration::minutes(30),
            calculate_distances: true,
        }
    }
}

/// Assembles the encounter collection for one passage from a raw
/// multi-vessel dataset.
///
/// The identified self vessel is excluded; every other vessel with at
/// least one track point yields one encounter. Referentially
/// transparent apart from `generated_at`.
pub fn assemble_encounters(
    data: VesselDataSet,
    passage: &Passage,
    options: &EncounterOptions,
) -> PassageEncounters {
    let self_vessel_id = identify_self_vessel(&data, passage);

    let mut encounters: Vec<VesselEncounter> = Vec::new();

    for vessel_track in data.vessels {
        if Some(vessel_track.vessel.id.as_str()) == self_vessel_id.as_deref() {
            continue;
        }

        let positions: Vec<VesselPosition> =
            vessel_track.track.into_iter().map(Into::into).collect();

        let Some((first_seen, last_seen)) = positions
            .iter()
            .map(|p| p.timestamp)
            .minmax()
            .into_option()
        else {
            continue;
        };
        let total_position_count = positions.len();

        let mut segments = build_segments(positions, options.segment_gap);
        if segments.is_empty() {
            continue;
        }

        if options.calculate_distances && !passage.positions.is_empty() {
            segments = segments
                .into_iter()
                .map(|segment| annotate_segment(segment, &passage.positions))
                .collect();
        }

        let total_duration = segments.iter().map(|s| s.duration).sum();

        let mut overall_closest: Option<(f64, Option<chrono::DateTime<Utc>>)> = None;
        for segment in &segments {
            if let Some(distance) = segment.closest_approach_distance {
                match overall_closest {
                    Some((min, _)) if distance >= min => {}
                    _ => overall_closest = Some((distance, segment.closest_approach_time)),
                }
            }
        }

        encounters.push(VesselEncounter {
            vessel: vessel_track.vessel,
            segments,
            first_seen,
            last_seen,
            total_duration,
            total_position_count,
            overall_closest_approach: overall_closest.map(|(distance, _)| distance),
            overall_closest_approach_time: overall_closest.and_then(|(_, time)| time),
        });
    }

    encounters.sort_by_key(|e| e.first_seen);

    let total_segments = encounters.iter().map(|e| e.segments.len()).sum();

    PassageEncounters {
        passage_id: passage.id.clone(),
        generated_at: Utc::now(),
        total_vessels: encounters.len(),
        total_segments,
        encounters,
    }
}

pub trait EncounterProcessing: EncounterOutbound + EncounterInbound {}

impl<T> EncounterProcessing for T where T: EncounterOutbound + EncounterInbound {}

/// Runs the encounter pipeline for single passages through the
/// storage ports.
#[derive(Clone)]
pub struct EncounterProcessor {
    adapter: Arc<dyn EncounterProcessing>,
    options: EncounterOptions,
}

impl EncounterProcessor {
    pub fn new(adapter: Arc<dyn EncounterProcessing>, options: EncounterOptions) -> Self {
        Self { adapter, options }
    }

    #[instrument(skip_all, fields(passage_ref = %passage_ref))]
    pub async fn run_single(&self, passage_ref: &str) -> Result<()> {
        let passage = self.adapter.passage(passage_ref).await.context(CoreSnafu)?;
        let data = self
            .adapter
            .vessel_data(&passage)
            .await
            .context(CoreSnafu)?;

        info!(
            "processing {} vessels for passage '{}'",
            data.vessels.len(),
            passage.id
        );

        let encounters = assemble_encounters(data, &passage, &self.options);

        info!(
            "assembled {} encounters with {} segments",
            encounters.total_vessels, encounters.total_segments
        );

        self.adapter
            .add_encounters(encounters)
            .await
            .context(CoreSnafu)
    }
}
