//! UTM zones and latitude bands.
//!
//! A zone is 6° of longitude wide, numbered 1..=60 eastward from the
//! antimeridian. A latitude band is 8° high (12° for the northernmost, X),
//! lettered C..=X from 80°S, skipping I and O.

use crate::Error;
use log::debug;
use log::trace;
use std::fmt;
use std::str::FromStr;

/// Band letters, south to north. X is doubled, so 84°N maps to X.
const ZONE_LETTERS: &[u8; 21] = b"CDEFGHJKLMNPQRSTUVWXX";

// ----- Z O N E   R E S O L U T I O N -------------------------------------------------

/// The zone number for a geographical position (degrees).
///
/// The base rule divides the globe into 6° wide zones, but the zones are
/// widened by convention around south-western Norway and around Svalbard.
/// Longitude 180° belongs to zone 60, and longitudes outside ±180° wrap.
#[must_use]
pub fn zone_number(latitude: f64, longitude: f64) -> u8 {
    // South-western Norway
    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        trace!("Norway zone exception at ({latitude}, {longitude})");
        return 32;
    }

    // Svalbard
    if (72.0..=84.0).contains(&latitude) && longitude >= 0. {
        let zone = match longitude {
            lon if lon < 9. => Some(31),
            lon if lon < 21. => Some(33),
            lon if lon < 33. => Some(35),
            lon if lon < 42. => Some(37),
            _ => None,
        };
        if let Some(zone) = zone {
            trace!("Svalbard zone exception at ({latitude}, {longitude})");
            return zone;
        }
    }

    if longitude == 180. {
        return 60;
    }

    let zone = ((longitude + 180.) / 6.).floor() as i64;
    (zone.rem_euclid(60) + 1) as u8
}

/// The latitude band letter for `latitude` (degrees), or `None` outside
/// the UTM latitude range, 80°S..=84°N.
#[must_use]
pub fn zone_letter(latitude: f64) -> Option<ZoneLetter> {
    if !(-80.0..=84.0).contains(&latitude) {
        return None;
    }
    let index = ((latitude + 80.) / 8.).floor() as usize;
    Some(ZoneLetter(ZONE_LETTERS[index] as char))
}

/// The longitude (degrees) of the central meridian of zone `zone_number`
#[must_use]
pub fn central_meridian(zone_number: u8) -> f64 {
    (zone_number as f64 - 1.) * 6. - 180. + 3.
}

// ----- H E M I S P H E R E -----------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// The equator itself counts as northern
    #[must_use]
    pub fn from_latitude(latitude: f64) -> Hemisphere {
        if latitude < 0. {
            return Hemisphere::South;
        }
        Hemisphere::North
    }

    #[must_use]
    pub fn is_northern(self) -> bool {
        self == Hemisphere::North
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hemisphere::North => write!(f, "N"),
            Hemisphere::South => write!(f, "S"),
        }
    }
}

impl FromStr for Hemisphere {
    type Err = Error;

    fn from_str(s: &str) -> Result<Hemisphere, Error> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Hemisphere::North),
            "s" | "south" => Ok(Hemisphere::South),
            _ => Err(Error::Syntax(format!("expected hemisphere, found {s:?}"))),
        }
    }
}

// ----- Z O N E   L E T T E R ---------------------------------------------------------

/// A latitude band letter. Always upper case, always one of `CDEFGHJKLMNPQRSTUVWX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoneLetter(char);

impl ZoneLetter {
    /// Validate, and normalize to upper case
    pub fn new(letter: char) -> Result<ZoneLetter, Error> {
        let upper = letter.to_ascii_uppercase();
        if !('C'..='X').contains(&upper) || upper == 'I' || upper == 'O' {
            debug!("Rejecting zone letter {letter:?}");
            return Err(Error::ZoneLetterOutOfRange(letter));
        }
        Ok(ZoneLetter(upper))
    }

    #[must_use]
    pub fn as_char(self) -> char {
        self.0
    }

    /// Bands N and above are north of the equator
    #[must_use]
    pub fn hemisphere(self) -> Hemisphere {
        if self.0 >= 'N' {
            return Hemisphere::North;
        }
        Hemisphere::South
    }
}

impl fmt::Display for ZoneLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ZoneLetter {
    type Err = Error;

    fn from_str(s: &str) -> Result<ZoneLetter, Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => ZoneLetter::new(letter),
            _ => Err(Error::Syntax(format!("expected zone letter, found {s:?}"))),
        }
    }
}

// ----- D E S I G N A T O R -----------------------------------------------------------

/// What accompanies the zone number: Either a latitude band letter, or
/// just the hemisphere. Never both, never none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Designator {
    Letter(ZoneLetter),
    Hemisphere(Hemisphere),
}

impl Designator {
    /// Build a designator from a pair of optional parts, at most one of
    /// which may be given. This is the gateway for callers representing
    /// the band letter and the hemisphere flag as separate values.
    pub fn from_parts(letter: Option<char>, northern: Option<bool>) -> Result<Designator, Error> {
        match (letter, northern) {
            (None, None) => Err(Error::MissingDesignator),
            (Some(_), Some(_)) => Err(Error::ConflictingDesignator),
            (Some(letter), None) => Ok(Designator::Letter(ZoneLetter::new(letter)?)),
            (None, Some(true)) => Ok(Designator::Hemisphere(Hemisphere::North)),
            (None, Some(false)) => Ok(Designator::Hemisphere(Hemisphere::South)),
        }
    }

    #[must_use]
    pub fn hemisphere(self) -> Hemisphere {
        match self {
            Designator::Letter(letter) => letter.hemisphere(),
            Designator::Hemisphere(hemisphere) => hemisphere,
        }
    }

    #[must_use]
    pub fn letter(self) -> Option<ZoneLetter> {
        match self {
            Designator::Letter(letter) => Some(letter),
            Designator::Hemisphere(_) => None,
        }
    }
}

impl From<ZoneLetter> for Designator {
    fn from(letter: ZoneLetter) -> Designator {
        Designator::Letter(letter)
    }
}

impl From<Hemisphere> for Designator {
    fn from(hemisphere: Hemisphere) -> Designator {
        Designator::Hemisphere(hemisphere)
    }
}

// ----- Tests ---------------------------------------------------------------------
