use async_trait::async_trait;

use crate::{CoreResult, Passage, PassageEncounters, VesselDataSet};

/// Supplies the reference passage and the raw multi-vessel dataset the
/// engine processes. Backed by whatever storage the caller uses.
#[async_trait]
pub trait EncounterOutbound: Send + Sync {
    /// Resolves a passage by reference, typically its id or export
    /// filename.
    async fn passage(&self, passage_ref: &str) -> CoreResult<Passage>;

    async fn vessel_data(&self, passage: &Passage) -> CoreResult<VesselDataSet>;
}

/// Receives the finished encounter collection for persistence.
#[async_trait]
pub trait EncounterInbound: Send + Sync {
    async fn add_encounters(&self, encounters: PassageEncounters) -> CoreResult<()>;
}
