use itertools::Itertools;

use encounter_core::{DateRange, Passage, VesselDataSet};

/// Picks the vessel that represents the passage subject itself, so it
/// can be excluded from its own encounter list.
///
/// The subject is expected to have both a dense track and near-total
/// coverage of the passage window, which separates it from transient
/// encountered vessels. Each vessel scores
/// `track_len * (overlap with passage window / passage duration)`;
/// the first maximum in dataset order wins. `None` when no vessel has
/// any track points.
pub fn identify_self_vessel(data: &VesselDataSet, passage: &Passage) -> Option<String> {
    let window = passage.window().ok()?;
    let passage_duration = window.duration().num_milliseconds() as f64;

    let mut best: Option<(&str, f64)> = None;

    for vessel in &data.vessels {
        let Some((track_start, track_end)) = vessel
            .track
            .iter()
            .map(|p| p.timestamp)
            .minmax()
            .into_option()
        else {
            continue;
        };
        // min <= max by construction.
        let Ok(track_span) = DateRange::new(track_start, track_end) else {
            continue;
        };

        let overlap = window
            .intersection(&track_span)
            .map(|r| r.duration().num_milliseconds())
            .unwrap_or(0) as f64;

        let overlap_ratio = if passage_duration > 0. {
            overlap / passage_duration
        } else {
            0.
        };
        let score = vessel.track.len() as f64 * overlap_ratio;

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((vessel.vessel.id.as_str(), score)),
        }
    }

    best.map(|(id, _)| id.to_owned())
}
