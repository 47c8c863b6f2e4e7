//! *Conversion between geographical coordinates and Universal Transverse
//! Mercator (UTM) coordinates*.
//!
//! The engine projects latitude/longitude on the WGS84 ellipsoid to
//! easting/northing in one of the 60 UTM zones, and back. The projection
//! is the classical Krüger/Redfearn series, as given by Snyder (1987),
//! truncated to 5th order in easting and 6th order in northing.
//!
//! ```
//! use utmconv::prelude::*;
//!
//! # fn main() -> Result<(), Error> {
//! let utm = forward(55., 12., None, true)?;
//! assert_eq!(utm.zone_number, 33);
//! assert_eq!(utm.zone_letter(), Some(ZoneLetter::new('U')?));
//!
//! let geo = inverse(utm.easting, utm.northing, utm.zone_number, utm.designator, true)?;
//! assert!((geo.latitude - 55.).abs() < 1e-6);
//! assert!((geo.longitude - 12.).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```

pub mod bounds;
mod coordinate;
mod ellipsoid;
pub mod math;
mod tmerc;
mod zone;

use thiserror::Error;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::coordinate::Geo;
    pub use crate::coordinate::Utm;
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::ellipsoid::EllipsoidConstants;
    pub use crate::tmerc::forward;
    pub use crate::tmerc::inverse;
    pub use crate::tmerc::ForcedZone;
    pub use crate::zone::central_meridian;
    pub use crate::zone::zone_letter;
    pub use crate::zone::zone_number;
    pub use crate::zone::Designator;
    pub use crate::zone::Hemisphere;
    pub use crate::zone::ZoneLetter;
    pub use crate::Direction;
    pub use crate::Direction::Fwd;
    pub use crate::Direction::Inv;
    pub use crate::Error;
}

pub use prelude::*;

/// The UTM scale factor along the central meridian
pub const K0: f64 = 0.9996;

/// The false easting, added to keep eastings positive
pub const FALSE_EASTING: f64 = 500_000.;

/// The false northing used in the southern hemisphere
pub const FALSE_NORTHING: f64 = 10_000_000.;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("latitude {0} out of range (must be between 80 deg S and 84 deg N)")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} out of range (must be between 180 deg W and 180 deg E)")]
    LongitudeOutOfRange(f64),

    #[error("easting {0} out of range (must be between 100,000 m and 999,999 m)")]
    EastingOutOfRange(f64),

    #[error("northing {0} out of range (must be between 0 m and 10,000,000 m)")]
    NorthingOutOfRange(f64),

    #[error("zone number {0} out of range (must be between 1 and 60)")]
    ZoneNumberOutOfRange(u8),

    #[error("zone letter {0:?} out of range (must be between C and X, excluding I and O)")]
    ZoneLetterOutOfRange(char),

    #[error("either zone letter or hemisphere needs to be set")]
    MissingDesignator,

    #[error("set either zone letter or hemisphere, but not both")]
    ConflictingDesignator,

    #[error("syntax error: {0}")]
    Syntax(String),
}

impl Error {
    /// A value outside its validated domain
    #[must_use]
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Error::LatitudeOutOfRange(_)
                | Error::LongitudeOutOfRange(_)
                | Error::EastingOutOfRange(_)
                | Error::NorthingOutOfRange(_)
                | Error::ZoneNumberOutOfRange(_)
                | Error::ZoneLetterOutOfRange(_)
        )
    }

    /// A malformed call contract: the zone designator is missing or ambiguous
    #[must_use]
    pub fn is_value_error(&self) -> bool {
        matches!(self, Error::MissingDesignator | Error::ConflictingDesignator)
    }
}

/// `Fwd`: Indicate that a two-way conversion should run in the *forward*
/// direction, i.e. from geographical to UTM coordinates.
/// `Inv`: Indicate that it should run in the *inverse* direction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Fwd,
    Inv,
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_classes() {
        assert!(Error::LatitudeOutOfRange(85.).is_range_error());
        assert!(Error::ZoneLetterOutOfRange('I').is_range_error());
        assert!(!Error::MissingDesignator.is_range_error());
        assert!(Error::MissingDesignator.is_value_error());
        assert!(Error::ConflictingDesignator.is_value_error());
        assert!(!Error::Syntax("x".to_string()).is_value_error());
    }

    #[test]
    fn error_messages() {
        let msg = Error::ZoneNumberOutOfRange(61).to_string();
        assert!(msg.contains("61"));
        assert!(msg.contains("between 1 and 60"));
        assert_eq!(
            Error::MissingDesignator.to_string(),
            "either zone letter or hemisphere needs to be set"
        );
    }
}
