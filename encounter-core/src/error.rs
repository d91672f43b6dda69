use chrono::{DateTime, Utc};
use snafu::{Location, Snafu};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type CoreResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid date range"))]
    InvalidDateRange {
        #[snafu(implicit)]
        location: Location,
        source: DateRangeError,
    },
    #[snafu(display("Data source operation failed"))]
    DataSource {
        #[snafu(implicit)]
        location: Location,
        error: BoxError,
    },
    #[snafu(display("Data sink operation failed"))]
    DataSink {
        #[snafu(implicit)]
        location: Location,
        error: BoxError,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum DateRangeError {
    #[snafu(display("Invalid date range ordering, start: '{start}', end: '{end}'"))]
    Ordering {
        #[snafu(implicit)]
        location: Location,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}
