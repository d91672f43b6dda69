use std::sync::Arc;

use crate::{EncounterOptions, EncounterProcessor, FileStorage, Result, settings::Settings};

pub struct App {
    processor: EncounterProcessor,
    passage: String,
}

impl App {
    pub fn build(settings: &Settings) -> App {
        let storage = Arc::new(FileStorage::new(
            &settings.passages_dir,
            &settings.vessel_data_dir,
        ));

        let mut options = EncounterOptions::default();
        if let Some(gap) = settings.segment_gap {
            // Sub-millisecond gaps are meaningless here; from_std only
            // fails on out-of-range durations.
            options.segment_gap = chrono::Duration::from_std(gap).unwrap();
        }
        if let Some(calculate_distances) = settings.calculate_distances {
            options.calculate_distances = calculate_distances;
        }

        App {
            processor: EncounterProcessor::new(storage, options),
            passage: settings.passage.clone(),
        }
    }

    pub async fn run(self) -> Result<()> {
        self.processor.run_single(&self.passage).await
    }
}
