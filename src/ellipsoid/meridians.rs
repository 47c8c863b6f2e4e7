use super::EllipsoidConstants;

// ----- Meridian geometry -----------------------------------------------------
impl EllipsoidConstants {
    /// The meridional arc, *M*, i.e. the distance along the meridian from the
    /// equator to the latitude `phi` (radians). Snyder (1987) eq. (3-21).
    #[must_use]
    pub fn meridional_arc(&self, phi: f64) -> f64 {
        self.r
            * (self.m1 * phi - self.m2 * (2. * phi).sin() + self.m3 * (4. * phi).sin()
                - self.m4 * (6. * phi).sin())
    }

    /// The footpoint latitude, *φ₁*, i.e. the latitude (radians) at which the
    /// meridional arc equals `m`. Snyder (1987) eqs. (7-19) and (3-26).
    ///
    /// A fixed number of terms, no iteration.
    #[must_use]
    pub fn footpoint_latitude(&self, m: f64) -> f64 {
        let mu = m / (self.r * self.m1);
        mu + self.p2 * (2. * mu).sin()
            + self.p3 * (4. * mu).sin()
            + self.p4 * (6. * mu).sin()
            + self.p5 * (8. * mu).sin()
    }
}

// ----- Tests ---------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn meridional_distance() {
        let c = EllipsoidConstants::utm();
        assert_eq!(c.meridional_arc(0.), 0.);
        assert_eq!(c.footpoint_latitude(0.), 0.);

        // Meridional distances for angles 0, 10, 20, 30 ... 80, obtained from Charles
        // Karney's online geodesic solver (for GRS80, which differs from WGS84 by
        // much less than the truncation error of the series)
        let s = [
            0_000_000.000000000,
            1_105_854.833198446,
            2_212_366.254102976,
            3_320_113.397845014,
            4_429_529.030236580,
            5_540_847.041560960,
            6_654_072.819367435,
            7_768_980.727655508,
            8_885_139.871836751,
        ];

        for (i, distance) in s.iter().enumerate() {
            let angle = (10.0 * i as f64).to_radians();
            assert!((c.meridional_arc(angle) - distance).abs() < 2e-3);
            assert!((c.footpoint_latitude(*distance) - angle).abs() < 1e-9);
        }

        // Symmetry around the equator
        let b = 42_f64.to_radians();
        assert_eq!(c.meridional_arc(-b), -c.meridional_arc(b));

        // Roundtrip: latitude -> distance -> latitude
        for i in -9..=9 {
            let b = (10. * i as f64).to_radians().clamp(-FRAC_PI_2, FRAC_PI_2);
            assert!((c.footpoint_latitude(c.meridional_arc(b)) - b).abs() < 1e-9);
        }
    }
}
