//! Transverse Mercator for UTM, following Snyder (1987), pp. 60-64
use crate::bounds;
use crate::coordinate::Geo;
use crate::coordinate::Utm;
use crate::ellipsoid::EllipsoidConstants;
use crate::math::angular;
use crate::zone;
use crate::zone::Designator;
use crate::zone::Hemisphere;
use crate::Error;
use crate::FALSE_EASTING;
use crate::FALSE_NORTHING;

/// A zone imposed by the caller, rather than derived from the position.
/// Useful for projecting points near a zone border into the zone of their
/// neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedZone {
    pub number: u8,
    /// If `None`, the band letter is derived from the latitude as usual
    pub designator: Option<Designator>,
}

impl ForcedZone {
    #[must_use]
    pub fn new(number: u8, designator: Option<Designator>) -> ForcedZone {
        ForcedZone { number, designator }
    }
}

// ----- F O R W A R D -----------------------------------------------------------------

/// Project the geographical position (`latitude`, `longitude`), in degrees,
/// to UTM.
///
/// Unless `strict` is unset, the latitude must be within 80°S..=84°N, and the
/// longitude within ±180°. A `forced` zone is validated, but used as is.
pub fn forward(
    latitude: f64,
    longitude: f64,
    forced: Option<ForcedZone>,
    strict: bool,
) -> Result<Utm, Error> {
    bounds::validate_latitude(latitude, strict)?;
    bounds::validate_longitude(longitude, strict)?;
    if let Some(forced) = forced {
        let letter = forced.designator.and_then(Designator::letter);
        bounds::validate_zone(forced.number, letter.map(|l| l.as_char()))?;
    }

    let zone_number = match forced {
        Some(forced) => forced.number,
        None => zone::zone_number(latitude, longitude),
    };

    // Outside of the band letter range we can only tell the hemisphere
    let designator = forced
        .and_then(|forced| forced.designator)
        .or_else(|| zone::zone_letter(latitude).map(Designator::Letter))
        .unwrap_or(Designator::Hemisphere(Hemisphere::from_latitude(latitude)));

    let (easting, northing) = project(EllipsoidConstants::utm(), latitude, longitude, zone_number);

    Ok(Utm {
        easting,
        northing,
        zone_number,
        designator,
    })
}

// The forward series. Snyder (1987) eqs. (8-9) and (8-10)
fn project(c: &EllipsoidConstants, latitude: f64, longitude: f64, zone_number: u8) -> (f64, f64) {
    let lat = latitude.to_radians();
    let (lat_sin, lat_cos) = lat.sin_cos();
    let lat_tan = lat_sin / lat_cos;
    let lat_tan2 = lat_tan * lat_tan;
    let lat_tan4 = lat_tan2 * lat_tan2;

    // The longitude as reckoned from the central meridian
    let lon_0 = zone::central_meridian(zone_number).to_radians();
    let a = lat_cos * angular::normalize_symmetric(longitude.to_radians() - lon_0);
    let a2 = a * a;
    let a3 = a2 * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    let a6 = a5 * a;

    let n = c.ellps.prime_vertical_radius_of_curvature(lat);
    let cc = c.eps * lat_cos * lat_cos;
    let m = c.meridional_arc(lat);
    let eps = c.eps;

    let easting = c.k0
        * n
        * (a + a3 / 6. * (1. - lat_tan2 + cc)
            + a5 / 120. * (5. - 18. * lat_tan2 + lat_tan4 + 72. * cc - 58. * eps))
        + FALSE_EASTING;

    let mut northing = c.k0
        * (m + n
            * lat_tan
            * (a2 / 2.
                + a4 / 24. * (5. - lat_tan2 + 9. * cc + 4. * cc * cc)
                + a6 / 720. * (61. - 58. * lat_tan2 + lat_tan4 + 600. * cc - 330. * eps)));

    // The sign of the latitude alone decides the false northing
    if latitude < 0. {
        northing += FALSE_NORTHING;
    }

    (easting, northing)
}

// ----- I N V E R S E -----------------------------------------------------------------

/// Unproject the UTM coordinate (`easting`, `northing`) in zone `zone_number`
/// to geographical coordinates, in degrees.
///
/// The `designator` tells the hemisphere, either directly or through the band
/// letter. Unless `strict` is unset, the easting must be within
/// 100 000..1 000 000 m, and the northing within 0..=10 000 000 m.
pub fn inverse(
    easting: f64,
    northing: f64,
    zone_number: u8,
    designator: Designator,
    strict: bool,
) -> Result<Geo, Error> {
    bounds::validate_easting(easting, strict)?;
    bounds::validate_northing(northing, strict)?;
    let letter = designator.letter().map(|l| l.as_char());
    bounds::validate_zone(zone_number, letter)?;

    let c = EllipsoidConstants::utm();

    let x = easting - FALSE_EASTING;
    let y = match designator.hemisphere() {
        Hemisphere::North => northing,
        Hemisphere::South => northing - FALSE_NORTHING,
    };

    // The footpoint latitude, and its trigonometric auxiliaries
    let p_rad = c.footpoint_latitude(y / c.k0);
    let (p_sin, p_cos) = p_rad.sin_cos();
    let p_tan = p_sin / p_cos;
    let p_tan2 = p_tan * p_tan;
    let p_tan4 = p_tan2 * p_tan2;

    // The radii of curvature at the footpoint, and their ratio
    let n = c.ellps.prime_vertical_radius_of_curvature(p_rad);
    let r = c.ellps.meridian_radius_of_curvature(p_rad) / n;

    let cc = c.eps * p_cos * p_cos;
    let cc2 = cc * cc;
    let eps = c.eps;

    let d = x / (n * c.k0);
    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d3 * d;
    let d5 = d4 * d;
    let d6 = d5 * d;

    // Snyder (1987) eqs. (8-17) and (8-18)
    let latitude = p_rad
        - (p_tan / r)
            * (d2 / 2. - d4 / 24. * (5. + 3. * p_tan2 + 10. * cc - 4. * cc2 - 9. * eps)
                + d6 / 720. * (61. + 90. * p_tan2 + 298. * cc + 45. * p_tan4 - 252. * eps - 3. * cc2));

    let longitude = (d - d3 / 6. * (1. + 2. * p_tan2 + cc)
        + d5 / 120. * (5. - 2. * cc + 28. * p_tan2 - 3. * cc2 + 8. * eps + 24. * p_tan4))
        / p_cos;

    let lon_0 = zone::central_meridian(zone_number).to_radians();
    let longitude = angular::normalize_symmetric(longitude + lon_0);

    Ok(Geo {
        latitude: latitude.to_degrees(),
        longitude: longitude.to_degrees(),
    })
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::ZoneLetter;
    use float_eq::assert_float_eq;

    fn letter(c: char) -> Designator {
        Designator::Letter(ZoneLetter::new(c).unwrap())
    }

    #[test]
    fn utm32() -> Result<(), Error> {
        // Validation values from PROJ:
        // echo 12 55 0 0 | cct -d18 +proj=utm +zone=32 | clip
        // PROJ uses the exact Krüger series on GRS80, so we only agree to
        // within the truncation error of the series and the tiny WGS84/GRS80
        // difference
        let zone = Some(ForcedZone::new(32, None));

        let utm = forward(55., 12., zone, true)?;
        assert_float_eq!(utm.easting, 691_875.632_139_661, abs <= 1e-2);
        assert_float_eq!(utm.northing, 6_098_907.825_005_012, abs <= 1e-2);
        assert_eq!(utm.zone_number, 32);
        assert_eq!(utm.designator, letter('U'));

        let utm = forward(-55., 12., zone, true)?;
        assert_float_eq!(utm.easting, 691_875.632_139_661, abs <= 1e-2);
        assert_float_eq!(utm.northing, 1e7 - 6_098_907.825_005_012, abs <= 1e-2);
        assert_eq!(utm.designator, letter('F'));

        let geo = inverse(utm.easting, utm.northing, 32, letter('F'), true)?;
        assert_float_eq!(geo.latitude, -55., abs <= 1e-7);
        assert_float_eq!(geo.longitude, 12., abs <= 1e-7);
        Ok(())
    }

    #[test]
    fn false_offsets() -> Result<(), Error> {
        // On the central meridian of zone 31, at the equator
        let utm = forward(0., 3., None, true)?;
        assert_eq!(utm.zone_number, 31);
        assert_eq!(utm.designator, letter('N'));
        assert_float_eq!(utm.easting, 500_000., abs <= 1e-9);
        assert_float_eq!(utm.northing, 0., abs <= 1e-9);

        let geo = inverse(500_000., 0., 31, letter('N'), true)?;
        assert_float_eq!(geo.latitude, 0., abs <= 1e-12);
        assert_float_eq!(geo.longitude, 3., abs <= 1e-12);
        Ok(())
    }

    #[test]
    fn southern_hemisphere() -> Result<(), Error> {
        for latitude in [0.5, 10., 33.3, 55., 79.] {
            let north = forward(latitude, 20., None, true)?;
            let south = forward(-latitude, 20., None, true)?;
            // Without the false northing, southern northings would be negative
            assert!(south.northing > 0.);
            assert!(south.northing < FALSE_NORTHING);
            // Mirror symmetry around the equator
            assert_float_eq!(south.northing, FALSE_NORTHING - north.northing, abs <= 1e-6);
            assert_float_eq!(south.easting, north.easting, abs <= 1e-9);
            assert_eq!(south.designator.hemisphere(), Hemisphere::South);
        }
        Ok(())
    }

    #[test]
    fn bounds_rejection() {
        assert_eq!(forward(85., 0., None, true), Err(Error::LatitudeOutOfRange(85.)));
        assert_eq!(forward(-81., 0., None, true), Err(Error::LatitudeOutOfRange(-81.)));
        assert_eq!(forward(0., 181., None, true), Err(Error::LongitudeOutOfRange(181.)));
        assert_eq!(
            inverse(50_000., 0., 31, letter('N'), true),
            Err(Error::EastingOutOfRange(50_000.))
        );
        assert_eq!(
            inverse(500_000., -1., 31, letter('N'), true),
            Err(Error::NorthingOutOfRange(-1.))
        );
        assert_eq!(
            inverse(500_000., 0., 0, letter('N'), true),
            Err(Error::ZoneNumberOutOfRange(0))
        );
        assert_eq!(
            forward(55., 12., Some(ForcedZone::new(61, None)), true),
            Err(Error::ZoneNumberOutOfRange(61))
        );

        // The zone is validated even in lenient mode
        assert_eq!(
            inverse(500_000., 0., 61, letter('N'), false),
            Err(Error::ZoneNumberOutOfRange(61))
        );
    }

    #[test]
    fn lenient() -> Result<(), Error> {
        // Beyond the band letters, only the hemisphere is known
        let utm = forward(85., 3., None, false)?;
        assert_eq!(utm.designator, Designator::Hemisphere(Hemisphere::North));
        let geo = inverse(utm.easting, utm.northing, utm.zone_number, utm.designator, false)?;
        assert_float_eq!(geo.latitude, 85., abs <= 1e-7);
        assert_float_eq!(geo.longitude, 3., abs <= 1e-7);

        // Eastings far outside the zone are accepted too
        let geo = inverse(50_000., 5_000_000., 31, letter('T'), false)?;
        assert!(geo.longitude < 0.);
        Ok(())
    }

    #[test]
    fn forced_designator() -> Result<(), Error> {
        let south = Designator::Hemisphere(Hemisphere::South);
        let utm = forward(-33.92487, 18.42406, Some(ForcedZone::new(34, Some(south))), true)?;
        assert_eq!(utm.designator, south);
        assert_float_eq!(utm.easting, 261_877.816, abs <= 1e-3);
        assert_float_eq!(utm.northing, 6_243_185.589, abs <= 1e-3);

        let geo = inverse(utm.easting, utm.northing, 34, south, true)?;
        assert_float_eq!(geo.latitude, -33.92487, abs <= 1e-7);
        assert_float_eq!(geo.longitude, 18.42406, abs <= 1e-7);
        Ok(())
    }

    #[test]
    fn antimeridian() -> Result<(), Error> {
        // A point just east of the antimeridian, forced into zone 60,
        // lies just east of that zone's eastern border
        let utm = forward(60., -179., Some(ForcedZone::new(60, None)), true)?;
        assert_float_eq!(utm.easting, 723_020.074, abs <= 1e-3);
        assert_float_eq!(utm.northing, 6_658_157.203, abs <= 1e-3);

        // ... and in zone 1, its mirror image
        let mirrored = forward(60., 179., Some(ForcedZone::new(1, None)), true)?;
        assert_float_eq!(mirrored.easting, 1e6 - utm.easting, abs <= 1e-6);
        assert_float_eq!(mirrored.northing, utm.northing, abs <= 1e-6);

        // Back again, the longitude lands on the right side of the antimeridian
        let geo = inverse(utm.easting, utm.northing, 60, utm.designator, true)?;
        assert_float_eq!(geo.longitude, -179., abs <= 1e-6);
        let geo = inverse(mirrored.easting, mirrored.northing, 1, mirrored.designator, true)?;
        assert_float_eq!(geo.longitude, 179., abs <= 1e-6);
        Ok(())
    }
}
