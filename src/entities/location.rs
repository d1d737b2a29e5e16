use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{validation_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(validation_error("coordinates must be finite"));
        }

        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(validation_error("latitude out of range"));
        }

        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(validation_error("longitude out of range"));
        }

        Ok(())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parses the `"lat,lng"` form produced by `Display`.
impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| validation_error("expected \"lat,lng\""))?;

        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| validation_error("invalid latitude"))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|_| validation_error("invalid longitude"))?;

        let coordinates = Coordinates { lat, lng };
        coordinates.validate()?;

        Ok(coordinates)
    }
}

#[test]
fn coordinates_from_str() {
    let coordinates: Coordinates = "3.1321683, 101.6710431".parse().unwrap();
    assert_eq!(coordinates, Coordinates::new(3.1321683, 101.6710431));

    assert!("3.1".parse::<Coordinates>().is_err());
    assert!("abc,1.0".parse::<Coordinates>().is_err());
    assert!("91.0,0.0".parse::<Coordinates>().unwrap_err().is_validation());
}

#[test]
fn coordinates_validate() {
    assert!(Coordinates::new(0.0, 0.0).validate().is_ok());
    assert!(Coordinates::new(-90.0, 180.0).validate().is_ok());
    assert!(Coordinates::new(0.0, -180.5).validate().is_err());
    assert!(Coordinates::new(f64::NAN, 0.0).validate().is_err());
}
