use crate::zone::Designator;
use crate::zone::Hemisphere;
use crate::zone::ZoneLetter;
use crate::Error;
use std::fmt;
use std::str::FromStr;

// ----- G E O G R A P H I C A L -------------------------------------------------------

/// Geographical coordinates, latitude and longitude in degrees
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Geo {
    pub latitude: f64,
    pub longitude: f64,
}

impl Geo {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Geo {
        Geo {
            latitude,
            longitude,
        }
    }

    /// Project to UTM, in the zone given by the position
    pub fn to_utm(&self, strict: bool) -> Result<Utm, Error> {
        crate::tmerc::forward(self.latitude, self.longitude, None, strict)
    }
}

/// Latitude and longitude, space separated. Nine decimals unless
/// a precision is given
impl fmt::Display for Geo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(9);
        write!(
            f,
            "{:.*} {:.*}",
            precision, self.latitude, precision, self.longitude
        )
    }
}

/// Latitude and longitude, separated by whitespace or a comma
impl FromStr for Geo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Geo, Error> {
        let items: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|item| !item.is_empty())
            .collect();
        if items.len() != 2 {
            return Err(Error::Syntax(format!(
                "expected latitude and longitude, found {s:?}"
            )));
        }
        let latitude = parse_number(items[0])?;
        let longitude = parse_number(items[1])?;
        Ok(Geo::new(latitude, longitude))
    }
}

// ----- U T M -------------------------------------------------------------------------

/// A projected UTM coordinate
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Utm {
    /// Meters, including the 500 000 m false easting
    pub easting: f64,
    /// Meters, including the 10 000 000 m false northing south of the equator
    pub northing: f64,
    pub zone_number: u8,
    pub designator: Designator,
}

impl Utm {
    #[must_use]
    pub fn new(easting: f64, northing: f64, zone_number: u8, designator: Designator) -> Utm {
        Utm {
            easting,
            northing,
            zone_number,
            designator,
        }
    }

    #[must_use]
    pub fn hemisphere(&self) -> Hemisphere {
        self.designator.hemisphere()
    }

    #[must_use]
    pub fn zone_letter(&self) -> Option<ZoneLetter> {
        self.designator.letter()
    }

    /// Unproject to geographical coordinates
    pub fn to_geo(&self, strict: bool) -> Result<Geo, Error> {
        crate::tmerc::inverse(
            self.easting,
            self.northing,
            self.zone_number,
            self.designator,
            strict,
        )
    }
}

/// Zone, designator, easting and northing, e.g. `32U 691875.632 6098907.826`.
/// A bare hemisphere is written apart from the zone number, `32 N ...`, so it
/// is never mistaken for a band letter. Three decimals unless a precision is given.
impl fmt::Display for Utm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        match self.designator {
            Designator::Letter(letter) => write!(f, "{}{}", self.zone_number, letter)?,
            Designator::Hemisphere(hemisphere) => write!(f, "{} {}", self.zone_number, hemisphere)?,
        }
        write!(
            f,
            " {:.*} {:.*}",
            precision, self.easting, precision, self.northing
        )
    }
}

/// The inverse of the `Display` form. Hemispheres may also be spelled out,
/// i.e. `32 north 691875.632 6098907.826`
impl FromStr for Utm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Utm, Error> {
        let items: Vec<&str> = s.split_whitespace().collect();
        let syntax_error = || Error::Syntax(format!("expected UTM coordinate, found {s:?}"));

        let (zone, designator, rest) = match items.as_slice() {
            // Zone number and band letter written together
            [zone, rest @ ..] if zone.ends_with(|c: char| c.is_ascii_alphabetic()) => {
                let split = zone.len() - 1;
                let letter: ZoneLetter = zone[split..].parse()?;
                (&zone[..split], Designator::Letter(letter), rest)
            }
            // Zone number and hemisphere written apart
            [zone, hemisphere, rest @ ..] => {
                let hemisphere: Hemisphere = hemisphere.parse()?;
                (*zone, Designator::Hemisphere(hemisphere), rest)
            }
            _ => return Err(syntax_error()),
        };

        let [easting, northing] = rest else {
            return Err(syntax_error());
        };

        let zone_number = zone
            .parse::<u8>()
            .map_err(|_| Error::Syntax(format!("expected zone number, found {zone:?}")))?;

        Ok(Utm {
            easting: parse_number(easting)?,
            northing: parse_number(northing)?,
            zone_number,
            designator,
        })
    }
}

fn parse_number(item: &str) -> Result<f64, Error> {
    item.parse::<f64>()
        .map_err(|_| Error::Syntax(format!("expected a number, found {item:?}")))
}

// ----- Tests ---------------------------------------------------------------------
