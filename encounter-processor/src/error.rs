use std::path::PathBuf;

use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("A core domain operation failed"))]
    Core {
        #[snafu(implicit)]
        location: Location,
        source: encounter_core::Error,
    },
    #[snafu(display("Failed to read '{}'", path.display()))]
    ReadFile {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write '{}'", path.display()))]
    WriteFile {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to decode JSON from '{}'", path.display()))]
    Decode {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        source: serde_json::Error,
    },
    #[snafu(display("Failed to encode encounters for passage '{passage_id}'"))]
    Encode {
        #[snafu(implicit)]
        location: Location,
        passage_id: String,
        source: serde_json::Error,
    },
    #[snafu(display("No vessel data file found for passage '{passage_id}', tried {candidates:?}"))]
    VesselDataNotFound {
        #[snafu(implicit)]
        location: Location,
        passage_id: String,
        candidates: Vec<PathBuf>,
    },
}
