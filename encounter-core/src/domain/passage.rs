use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CoreResult, DateRange, error::error::InvalidDateRangeSnafu};
use snafu::ResultExt;

/// One voyage of the reference vessel. The engine reads it as the
/// distance-comparison baseline and never mutates it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Passage {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub positions: Vec<PassagePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Total duration in hours.
    #[serde(default)]
    pub duration: f64,
    /// Average speed in knots.
    #[serde(default)]
    pub avg_speed: f64,
    /// Maximum speed in knots.
    #[serde(default)]
    pub max_speed: f64,
    /// Total distance in kilometers.
    #[serde(default)]
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location: Option<PassageLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<PassageLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encounters_filename: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PassageLocation {
    pub lat: f64,
    pub lon: f64,
}

/// One sample of the reference track. Older exports name the time
/// column `_time`; both spellings deserialize, `timestamp` is written.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PassagePosition {
    #[serde(alias = "_time")]
    pub timestamp: DateTime<Utc>,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    /// Distance from the passage start in kilometers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Passage {
    /// The passage's time window as an inclusive range.
    pub fn window(&self) -> CoreResult<DateRange> {
        DateRange::new(self.start_time, self.end_time).context(InvalidDateRangeSnafu)
    }
}

#[cfg(feature = "test")]
mod test {
    use chrono::{DateTime, Utc};

    use super::*;

    impl Passage {
        pub fn test_default(
            id: &str,
            start_time: DateTime<Utc>,
            end_time: DateTime<Utc>,
        ) -> Passage {
            Passage {
                id: id.into(),
                start_time,
                end_time,
                positions: Vec::new(),
                name: Some(format!("test_passage_{id}")),
                route: None,
                description: None,
                duration: (end_time - start_time).num_seconds() as f64 / 3600.,
                avg_speed: 5.,
                max_speed: 8.,
                distance: 0.,
                start_location: None,
                end_location: None,
                filename: Some(format!("passage_{id}.json")),
                encounters_filename: None,
            }
        }
    }

    impl PassagePosition {
        pub fn test_at(timestamp: DateTime<Utc>, lat: f64, lon: f64) -> PassagePosition {
            PassagePosition {
                timestamp,
                lat,
                lon,
                speed: None,
                heading: None,
                distance: None,
            }
        }
    }
}
