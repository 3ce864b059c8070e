use async_trait::async_trait;
use serde::Deserialize;

use super::{Geolocator, PositionOptions};
use crate::{
    entities::Coordinates,
    error::{geolocation_error, Error},
};

#[derive(Debug, Deserialize)]
struct Response {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

fn into_position(response: Response) -> Result<Coordinates, Error> {
    if response.error {
        return Err(geolocation_error(
            response.reason.unwrap_or_else(|| "position unavailable".into()),
        ));
    }

    match (response.latitude, response.longitude) {
        (Some(lat), Some(lng)) => Ok(Coordinates::new(lat, lng)),
        _ => Err(geolocation_error("position unavailable")),
    }
}

/// Approximate position from the host's public IP address via ipapi.co.
#[derive(Debug)]
pub struct IpApi {
    client: reqwest::Client,
    api_base: String,
}

impl IpApi {
    pub fn new(client: reqwest::Client, api_base: String) -> Self {
        Self { client, api_base }
    }
}

#[async_trait]
impl Geolocator for IpApi {
    #[tracing::instrument(skip(self))]
    async fn current_position(&self, options: PositionOptions) -> Result<Coordinates, Error> {
        if options.high_accuracy {
            tracing::debug!("high accuracy requested, IP lookup is city-level at best");
        }

        let url = format!("{}/json/", self.api_base.trim_end_matches('/'));

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| geolocation_error(err.to_string()))?;

        let data: Response = res
            .json()
            .await
            .map_err(|err| geolocation_error(err.to_string()))?;

        into_position(data)
    }
}

#[test]
fn position_response_test() {
    let body = r#"{"ip": "203.0.113.7", "city": "Pasig", "latitude": 14.5764, "longitude": 121.0851}"#;
    let response: Response = serde_json::from_str(body).unwrap();

    assert_eq!(
        into_position(response).unwrap(),
        Coordinates::new(14.5764, 121.0851)
    );
}

#[test]
fn error_response_test() {
    let body = r#"{"error": true, "reason": "RateLimited"}"#;
    let response: Response = serde_json::from_str(body).unwrap();

    assert_eq!(
        into_position(response).unwrap_err(),
        geolocation_error("RateLimited")
    );
}
