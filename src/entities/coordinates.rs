use std::str::FromStr;

use geo_types::{Geometry, Point};
use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.lat, coordinates.lng)
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.lng, coordinates.lat)
    }
}

impl From<Coordinates> for Geometry<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Geometry::Point(coordinates.into())
    }
}

impl From<Point<f64>> for Coordinates {
    fn from(point: Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

/// Parses `"lat,lng"`.
impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s.split_once(',').ok_or_else(|| invalid_input_error())?;

        let lat: f64 = lat.trim().parse().map_err(|_| invalid_input_error())?;
        let lng: f64 = lng.trim().parse().map_err(|_| invalid_input_error())?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(invalid_input_error());
        }

        Ok(Self { lat, lng })
    }
}

#[test]
fn coordinates_parse_test() {
    let coordinates: Coordinates = "14.617776, 121.102570".parse().unwrap();
    assert_eq!(coordinates, Coordinates::new(14.617776, 121.10257));

    assert!("14.6".parse::<Coordinates>().is_err());
    assert!("north,east".parse::<Coordinates>().is_err());
    assert!("91.0,0.0".parse::<Coordinates>().is_err());
}

#[test]
fn coordinates_point_axis_order_test() {
    let point: Point<f64> = Coordinates::new(14.5, 121.0).into();
    assert_eq!(point.x(), 121.0);
    assert_eq!(point.y(), 14.5);

    let back: Coordinates = point.into();
    assert_eq!(back, Coordinates::new(14.5, 121.0));
    assert_eq!(String::from(back), "14.5,121");
}
