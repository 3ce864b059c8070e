use async_trait::async_trait;

use super::{Geolocator, PositionOptions};
use crate::{entities::Coordinates, error::Error};

/// Reports a position set in configuration, for hosts with no locating
/// hardware or network lookup.
#[derive(Debug)]
pub struct FixedPosition {
    coordinates: Coordinates,
}

impl FixedPosition {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl Geolocator for FixedPosition {
    async fn current_position(&self, _options: PositionOptions) -> Result<Coordinates, Error> {
        Ok(self.coordinates)
    }
}

#[tokio::test]
async fn fixed_position_test() {
    let geolocator = FixedPosition::new(Coordinates::new(14.6, 121.1));

    let position = tokio_test::assert_ok!(
        geolocator
            .current_position(PositionOptions::default())
            .await
    );
    assert_eq!(position, Coordinates::new(14.6, 121.1));
}
