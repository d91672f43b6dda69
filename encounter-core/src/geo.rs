/// Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Great-circle distance between two coordinates using the haversine
/// formula, in nautical miles.
pub fn distance_nautical_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin()
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.).sin() * (d_lon / 2.).sin();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_NM * c
}

/// Interpolates between two headings along the shortest angular path,
/// wrapping at 0/360. `progress` is expected to be within `[0, 1]`.
pub fn interpolate_angle(angle1: f64, angle2: f64, progress: f64) -> f64 {
    let angle1 = angle1.rem_euclid(360.);
    let angle2 = angle2.rem_euclid(360.);

    let mut diff = angle2 - angle1;
    if diff.abs() > 180. {
        diff = if diff > 0. { diff - 360. } else { diff + 360. };
    }

    (angle1 + diff * progress).rem_euclid(360.)
}
