use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Geocoder;
use crate::{
    entities::{Coordinates, PlaceSuggestion},
    error::{invalid_input_error, upstream_error, Error},
};

/// One entry of a Nominatim `search` response. Coordinates come back as
/// strings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

impl TryFrom<Place> for PlaceSuggestion {
    type Error = Error;

    fn try_from(place: Place) -> Result<Self, Self::Error> {
        let lat: f64 = place.lat.parse().map_err(|_| upstream_error())?;
        let lng: f64 = place.lon.parse().map_err(|_| upstream_error())?;

        Ok(PlaceSuggestion::new(
            place.display_name,
            Coordinates::new(lat, lng),
        ))
    }
}

pub fn into_suggestions(places: Vec<Place>) -> Result<Vec<PlaceSuggestion>, Error> {
    places.into_iter().map(PlaceSuggestion::try_from).collect()
}

#[derive(Debug)]
pub struct Nominatim {
    client: reqwest::Client,
    api_base: String,
    limit: Option<u32>,
}

impl Nominatim {
    pub fn new(client: reqwest::Client, api_base: String, limit: Option<u32>) -> Self {
        Self {
            client,
            api_base,
            limit,
        }
    }
}

#[async_trait]
impl Geocoder for Nominatim {
    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<PlaceSuggestion>, Error> {
        let url = format!("{}/search", self.api_base.trim_end_matches('/'));

        let mut request = self
            .client
            .get(url)
            .query(&[("format", "json")])
            .query(&[("q", query)]);

        if let Some(limit) = self.limit {
            request = request.query(&[("limit", limit)]);
        }

        let res = request.send().await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let places: Vec<Place> = res.json().await?;

        tracing::debug!("nominatim returned {} places", places.len());

        into_suggestions(places)
    }
}
