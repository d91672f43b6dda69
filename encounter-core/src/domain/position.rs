use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observed sample of a vessel, immutable once recorded.
///
/// Timestamps deserialize straight to instants, so a malformed
/// timestamp is rejected at the wire boundary and never enters
/// ordering or segmentation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VesselPosition {
    pub timestamp: DateTime<Utc>,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Speed in knots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Heading in degrees, 0-360.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    /// Altitude in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Position accuracy in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

#[cfg(feature = "test")]
mod test {
    use chrono::{DateTime, Utc};
    use rand::random;

    use super::*;

    impl VesselPosition {
        pub fn test_default(timestamp: DateTime<Utc>) -> VesselPosition {
            VesselPosition {
                timestamp,
                lat: random::<f64>() * 180. - 90.,
                lon: random::<f64>() * 360. - 180.,
                speed: Some(random::<f64>() * 20.),
                heading: Some(random::<f64>() * 360.),
                altitude: None,
                accuracy: Some(10.),
            }
        }

        pub fn test_at(timestamp: DateTime<Utc>, lat: f64, lon: f64) -> VesselPosition {
            VesselPosition {
                timestamp,
                lat,
                lon,
                speed: None,
                heading: None,
                altitude: None,
                accuracy: None,
            }
        }
    }
}
