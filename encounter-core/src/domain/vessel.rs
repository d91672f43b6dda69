use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::VesselPosition;

/// Raw multi-vessel dataset as produced by the telemetry exporter.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VesselDataSet {
    pub vessels: Vec<VesselTrack>,
}

/// One vessel's identity plus its raw track samples.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VesselTrack {
    pub vessel: VesselMetadata,
    pub track: Vec<TrackPoint>,
}

/// Identity of a tracked vessel. Opaque passthrough data for the
/// engine; only `id` is interpreted (self-vessel exclusion).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VesselMetadata {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mmsi: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<VesselLength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beam: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Vessel length in meters. Some upstream exports carry it as free
/// text, which is preserved as-is.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum VesselLength {
    Meters(f64),
    Text(String),
}

/// One raw track sample on the wire.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackPoint {
    pub coordinate: Coordinate,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<TrackPoint> for VesselPosition {
    fn from(value: TrackPoint) -> Self {
        VesselPosition {
            timestamp: value.timestamp,
            lat: value.coordinate.latitude,
            lon: value.coordinate.longitude,
            speed: value.speed,
            heading: value.heading,
            altitude: value.altitude,
            accuracy: value.accuracy,
        }
    }
}

#[cfg(feature = "test")]
mod test {
    use chrono::{DateTime, Utc};
    use rand::random;

    use super::*;

    impl VesselMetadata {
        pub fn test_default(id: &str) -> VesselMetadata {
            VesselMetadata {
                id: id.into(),
                name: format!("test_vessel_{id}"),
                mmsi: Some("257123456".into()),
                kind: Some("cargo".into()),
                flag: Some("NO".into()),
                length: Some(VesselLength::Meters(24.)),
                beam: Some(6.),
                color: None,
                description: None,
            }
        }
    }

    impl VesselTrack {
        pub fn test_default(id: &str, track: Vec<TrackPoint>) -> VesselTrack {
            VesselTrack {
                vessel: VesselMetadata::test_default(id),
                track,
            }
        }
    }

    impl TrackPoint {
        pub fn test_default(timestamp: DateTime<Utc>) -> TrackPoint {
            TrackPoint {
                coordinate: Coordinate {
                    latitude: random::<f64>() * 180. - 90.,
                    longitude: random::<f64>() * 360. - 180.,
                },
                timestamp,
                speed: Some(random::<f64>() * 20.),
                heading: Some(random::<f64>() * 360.),
                altitude: None,
                accuracy: Some(10.),
            }
        }

        pub fn test_at(timestamp: DateTime<Utc>, latitude: f64, longitude: f64) -> TrackPoint {
            TrackPoint {
                coordinate: Coordinate {
                    latitude,
                    longitude,
                },
                timestamp,
                speed: None,
                heading: None,
                altitude: None,
                accuracy: None,
            }
        }
    }
}
