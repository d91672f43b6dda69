use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use tracing::info;

use encounter_core::{
    CoreResult, EncounterInbound, EncounterOutbound, Passage, PassageEncounters, VesselDataSet,
    error::error::{DataSinkSnafu, DataSourceSnafu},
};

use crate::{
    Error, Result,
    error::error::{
        DecodeSnafu, EncodeSnafu, ReadFileSnafu, VesselDataNotFoundSnafu, WriteFileSnafu,
    },
};

/// Storage ports backed by the passage/vessel JSON export directories.
///
/// Passages live as `passage_*.json` files, raw vessel data as
/// `vessels_*` files next to them, and finished encounter collections
/// are written back as `encounters_*` files.
pub struct FileStorage {
    passages_dir: PathBuf,
    vessel_data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(passages_dir: impl Into<PathBuf>, vessel_data_dir: impl Into<PathBuf>) -> Self {
        Self {
            passages_dir: passages_dir.into(),
            vessel_data_dir: vessel_data_dir.into(),
        }
    }

    /// Candidate vessel data filenames for a passage. Exports have
    /// gone through several naming schemes; the first existing file
    /// wins.
    fn vessel_data_candidates(&self, passage: &Passage) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(filename) = &passage.filename {
            let suffix = filename.strip_prefix("passage_").unwrap_or(filename);
            candidates.push(self.vessel_data_dir.join(format!("vessels_{suffix}")));
        }
        candidates.push(self.vessel_data_dir.join(format!("vessels_{}.json", passage.id)));
        candidates.push(
            self.vessel_data_dir
                .join(format!("vessels_{}.json", passage.id.replace('_', "-"))),
        );

        candidates
    }

    fn encounters_path(&self, encounters: &PassageEncounters) -> PathBuf {
        self.vessel_data_dir
            .join(format!("encounters_{}.json", encounters.passage_id))
    }

    async fn load_vessel_data(&self, passage: &Passage) -> Result<VesselDataSet> {
        let candidates = self.vessel_data_candidates(passage);

        for path in &candidates {
            if tokio::fs::try_exists(path).await.unwrap_or(false) {
                return read_json(path).await;
            }
        }

        VesselDataNotFoundSnafu {
            passage_id: passage.id.clone(),
            candidates,
        }
        .fail()
    }

    async fn store_encounters(&self, encounters: PassageEncounters) -> Result<()> {
        let path = self.encounters_path(&encounters);
        let json = serde_json::to_string_pretty(&encounters).context(EncodeSnafu {
            passage_id: encounters.passage_id.clone(),
        })?;

        tokio::fs::write(&path, json)
            .await
            .context(WriteFileSnafu { path: &path })?;

        info!("encounters saved to '{}'", path.display());
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .context(ReadFileSnafu { path })?;
    serde_json::from_str(&content).context(DecodeSnafu { path })
}

#[async_trait]
impl EncounterOutbound for FileStorage {
    async fn passage(&self, passage_ref: &str) -> CoreResult<Passage> {
        let mut path = self.passages_dir.join(passage_ref);
        if path.extension().is_none() {
            path.set_extension("json");
        }

        read_json(&path)
            .await
            .map_err(|e: Error| DataSourceSnafu { error: e }.build())
    }

    async fn vessel_data(&self, passage: &Passage) -> CoreResult<VesselDataSet> {
        self.load_vessel_data(passage)
            .await
            .map_err(|e| DataSourceSnafu { error: e }.build())
    }
}

#[async_trait]
impl EncounterInbound for FileStorage {
    async fn add_encounters(&self, encounters: PassageEncounters) -> CoreResult<()> {
        self.store_encounters(encounters)
            .await
            .map_err(|e| DataSinkSnafu { error: e }.build())
    }
}
