use geo_types::LineString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannedRoute {
    pub waypoints: Vec<Coordinates>,
    pub path: LineString<f64>,
    // meters
    pub distance: f64,
    // seconds
    pub duration: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteOverlay {
    pub id: Uuid,
    pub route: PlannedRoute,
    pub reroute_on_drag: bool,
}

impl RouteOverlay {
    pub fn new(route: PlannedRoute) -> Self {
        RouteOverlay {
            id: Uuid::new_v4(),
            route,
            reroute_on_drag: true,
        }
    }
}
