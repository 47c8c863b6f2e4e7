//! Range and domain checks, shared by the forward and inverse projections.
//!
//! The checks are pure, and each may be called on its own. With `strict`
//! unset, the coordinate checks accept anything, leaving it to the caller
//! to judge whether the projection series are still meaningful.

use crate::Error;
use log::debug;

/// Is `x` within `lower..=upper` (or `lower..upper` if `upper_strict`)?
/// NaN is never in bounds.
#[must_use]
pub fn in_bounds(x: f64, lower: f64, upper: f64, upper_strict: bool) -> bool {
    if upper_strict {
        return (lower..upper).contains(&x);
    }
    (lower..=upper).contains(&x)
}

pub fn validate_latitude(latitude: f64, strict: bool) -> Result<(), Error> {
    if strict && !in_bounds(latitude, -80., 84., false) {
        debug!("Rejecting latitude {latitude}");
        return Err(Error::LatitudeOutOfRange(latitude));
    }
    Ok(())
}

pub fn validate_longitude(longitude: f64, strict: bool) -> Result<(), Error> {
    if strict && !in_bounds(longitude, -180., 180., false) {
        debug!("Rejecting longitude {longitude}");
        return Err(Error::LongitudeOutOfRange(longitude));
    }
    Ok(())
}

/// Note that the upper bound is exclusive: 1 000 000 m is out of range.
pub fn validate_easting(easting: f64, strict: bool) -> Result<(), Error> {
    if strict && !in_bounds(easting, 100_000., 1_000_000., true) {
        debug!("Rejecting easting {easting}");
        return Err(Error::EastingOutOfRange(easting));
    }
    Ok(())
}

/// Note that the upper bound is inclusive: 10 000 000 m is in range.
pub fn validate_northing(northing: f64, strict: bool) -> Result<(), Error> {
    if strict && !in_bounds(northing, 0., 10_000_000., false) {
        debug!("Rejecting northing {northing}");
        return Err(Error::NorthingOutOfRange(northing));
    }
    Ok(())
}

/// The zone number must be in 1..=60, and the letter, if any, must be
/// one of the 20 latitude band letters (case insensitive).
pub fn validate_zone(number: u8, letter: Option<char>) -> Result<(), Error> {
    if !(1..=60).contains(&number) {
        debug!("Rejecting zone number {number}");
        return Err(Error::ZoneNumberOutOfRange(number));
    }
    if let Some(letter) = letter {
        crate::zone::ZoneLetter::new(letter)?;
    }
    Ok(())
}

// ----- Tests ---------------------------------------------------------------------
