use super::Ellipsoid;
use once_cell::sync::Lazy;

/// The UTM constants, computed once for the WGS84 ellipsoid
static UTM: Lazy<EllipsoidConstants> =
    Lazy::new(|| EllipsoidConstants::new(Ellipsoid::default(), crate::K0));

/// Precomputed quantities for the Transverse Mercator series.
///
/// The meridional arc series (`m1`..`m4`) and its inverse, the footpoint
/// latitude series (`p2`..`p5`), are truncated after the e⁶ and e₁⁵ terms
/// respectively, following Snyder (1987), eqs. (3-21) and (3-26).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipsoidConstants {
    /// The ellipsoid the series are derived from
    pub ellps: Ellipsoid,
    /// The scale factor along the central meridian
    pub k0: f64,
    /// The semimajor axis, *R*
    pub r: f64,
    /// The squared second eccentricity, *e'²*
    pub eps: f64,

    // Meridional arc
    pub m1: f64,
    pub m2: f64,
    pub m3: f64,
    pub m4: f64,

    // Footpoint latitude
    pub p2: f64,
    pub p3: f64,
    pub p4: f64,
    pub p5: f64,
}

impl EllipsoidConstants {
    #[must_use]
    pub fn new(ellps: Ellipsoid, k0: f64) -> EllipsoidConstants {
        let e = ellps.eccentricity_squared();
        let e2 = e * e;
        let e3 = e2 * e;

        // e₁ = (1 - √(1 - e²)) / (1 + √(1 - e²)), where √(1 - e²) is the aspect ratio, b/a
        let ratio = ellps.aspect_ratio();
        let e1 = (1. - ratio) / (1. + ratio);
        let e1_2 = e1 * e1;
        let e1_3 = e1_2 * e1;
        let e1_4 = e1_3 * e1;
        let e1_5 = e1_4 * e1;

        EllipsoidConstants {
            ellps,
            k0,
            r: ellps.semimajor_axis(),
            eps: ellps.second_eccentricity_squared(),

            m1: 1. - e / 4. - 3. * e2 / 64. - 5. * e3 / 256.,
            m2: 3. * e / 8. + 3. * e2 / 32. + 45. * e3 / 1024.,
            m3: 15. * e2 / 256. + 45. * e3 / 1024.,
            m4: 35. * e3 / 3072.,

            p2: 3. / 2. * e1 - 27. / 32. * e1_3 + 269. / 512. * e1_5,
            p3: 21. / 16. * e1_2 - 55. / 32. * e1_4,
            p4: 151. / 96. * e1_3 - 417. / 128. * e1_5,
            p5: 1097. / 512. * e1_4,
        }
    }

    /// The process wide constants for UTM on WGS84
    #[must_use]
    pub fn utm() -> &'static EllipsoidConstants {
        &UTM
    }
}

// ----- Tests ---------------------------------------------------------------------
