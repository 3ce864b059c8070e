pub mod fixed;
pub mod ipapi;
pub mod nominatim;
pub mod osrm;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{Config, GeolocationSource},
    entities::{Coordinates, PlaceSuggestion, PlannedRoute},
    error::Error,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Candidates in the order the service ranks them; empty means no match.
    async fn search(&self, query: &str) -> Result<Vec<PlaceSuggestion>, Error>;
}

#[async_trait]
pub trait Geolocator: Send + Sync {
    /// One-shot position request. A failure carries the reason as its message.
    async fn current_position(&self, options: PositionOptions) -> Result<Coordinates, Error>;
}

#[async_trait]
pub trait RoutePlanner: Send + Sync {
    async fn plan(&self, waypoints: &[Coordinates]) -> Result<PlannedRoute, Error>;
}

pub type DynGeocoder = Arc<dyn Geocoder>;
pub type DynGeolocator = Arc<dyn Geolocator>;
pub type DynRoutePlanner = Arc<dyn RoutePlanner>;

/// The upstream capabilities a session talks to. A missing geolocator means
/// the device cannot report its position.
#[derive(Clone)]
pub struct Services {
    pub geocoder: DynGeocoder,
    pub geolocator: Option<DynGeolocator>,
    pub planner: DynRoutePlanner,
}

impl Services {
    #[tracing::instrument(name = "Services::from_config", skip_all)]
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        let geocoder = nominatim::Nominatim::new(
            client.clone(),
            config.nominatim_api_base.clone(),
            config.nominatim_limit,
        );

        let planner = osrm::Osrm::new(
            client.clone(),
            config.osrm_api_base.clone(),
            config.osrm_profile.clone(),
        );

        let geolocator: Option<DynGeolocator> = match &config.geolocation {
            GeolocationSource::Ip => Some(Arc::new(ipapi::IpApi::new(
                client,
                config.ipapi_base.clone(),
            ))),
            GeolocationSource::Fixed(coordinates) => {
                Some(Arc::new(fixed::FixedPosition::new(*coordinates)))
            }
            GeolocationSource::Unsupported => None,
        };

        Ok(Self {
            geocoder: Arc::new(geocoder),
            geolocator,
            planner: Arc::new(planner),
        })
    }
}
