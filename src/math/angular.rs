use std::f64::consts::PI;
use std::f64::consts::TAU;

/// Normalize arbitrary angles to (-π, π].
///
/// Both projection directions reckon longitudes relative to a central
/// meridian, and this is where offsets crossing the antimeridian are
/// brought back into range.
#[must_use]
pub fn normalize_symmetric(angle: f64) -> f64 {
    // rem_euclid may round up to TAU for tiny negative arguments
    let angle = PI - (PI - angle).rem_euclid(TAU);
    if angle <= -PI {
        return PI;
    }
    angle
}

/// Normalize arbitrary angles given in degrees to (-180, 180]
#[must_use]
pub fn normalize_symmetric_degrees(angle: f64) -> f64 {
    let angle = 180. - (180. - angle).rem_euclid(360.);
    if angle <= -180. {
        return 180.;
    }
    angle
}

/// The signed difference `a - b` between two longitudes, in degrees,
/// taking the shortest way around the globe
#[must_use]
pub fn longitude_difference(a: f64, b: f64) -> f64 {
    normalize_symmetric_degrees(a - b)
}

// ----- Tests ---------------------------------------------------------------------
