use async_trait::async_trait;
use geo_types::LineString;
use serde::Deserialize;

use super::RoutePlanner;
use crate::{
    entities::{Coordinates, PlannedRoute},
    error::{invalid_input_error, routing_error, upstream_error, Error},
};

#[derive(Debug, Deserialize)]
struct Response {
    code: String,
    message: Option<String>,
    routes: Option<Vec<Route>>,
}

#[derive(Debug, Deserialize)]
struct Route {
    distance: f64,
    duration: f64,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    // [lng, lat] pairs
    coordinates: Vec<[f64; 2]>,
}

fn into_planned_route(
    waypoints: &[Coordinates],
    response: Response,
) -> Result<PlannedRoute, Error> {
    if response.code != "Ok" {
        return Err(routing_error(
            response.message.unwrap_or(response.code),
        ));
    }

    let route = response
        .routes
        .and_then(|routes| routes.into_iter().next())
        .ok_or_else(|| routing_error("no route found"))?;

    let path: LineString<f64> = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lng, lat]| (lng, lat))
        .collect::<Vec<_>>()
        .into();

    Ok(PlannedRoute {
        waypoints: waypoints.to_vec(),
        path,
        distance: route.distance,
        duration: route.duration,
    })
}

/// Client for the OSRM `route` service.
#[derive(Debug)]
pub struct Osrm {
    client: reqwest::Client,
    api_base: String,
    profile: String,
}

impl Osrm {
    pub fn new(client: reqwest::Client, api_base: String, profile: String) -> Self {
        Self {
            client,
            api_base,
            profile,
        }
    }
}

#[async_trait]
impl RoutePlanner for Osrm {
    #[tracing::instrument(skip(self))]
    async fn plan(&self, waypoints: &[Coordinates]) -> Result<PlannedRoute, Error> {
        if waypoints.len() < 2 {
            return Err(invalid_input_error());
        }

        let points = waypoints
            .iter()
            .map(|c| format!("{},{}", c.lng, c.lat))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/route/v1/{}/{}",
            self.api_base.trim_end_matches('/'),
            self.profile,
            points
        );

        let res = self
            .client
            .get(url)
            .query(&[("overview", "full")])
            .query(&[("geometries", "geojson")])
            .send()
            .await?;

        // OSRM reports unroutable requests as 400 with a JSON body
        if res.status().is_server_error() {
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        into_planned_route(waypoints, data)
    }
}
