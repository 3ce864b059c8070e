use serde::Serialize;
use uuid::Uuid;

use crate::config::MapSettings;
use crate::entities::{Coordinates, Marker, PlannedRoute, RouteOverlay};
use crate::map::MapView;
use crate::ui::UiSurface;

pub const USER_LOCATION_POPUP: &str = "Your Location";

/// What a client sees: the map and the surrounding UI.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub map: MapView,
    pub ui: UiSurface,
}

/// Per-session state. Each overlay slot owns the overlay it points at and
/// removes it from the map before pointing at a new one.
#[derive(Debug)]
pub struct Session {
    pub map: MapView,
    pub ui: UiSurface,
    user_marker: Option<Uuid>,
    destination_marker: Option<Uuid>,
    route_overlay: Option<Uuid>,
    // waypoints of the latest route request, kept for re-routing on drag
    route_waypoints: Option<Vec<Coordinates>>,
    query_token: u64,
    route_token: u64,
}

impl Session {
    pub fn new(settings: &MapSettings) -> Self {
        Session {
            map: MapView::new(settings),
            ui: UiSurface::new(),
            user_marker: None,
            destination_marker: None,
            route_overlay: None,
            route_waypoints: None,
            query_token: 0,
            route_token: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            map: self.map.clone(),
            ui: self.ui.clone(),
        }
    }

    pub fn user_location(&self) -> Option<Coordinates> {
        let id = self.user_marker.as_ref()?;
        self.map.marker(id).map(|marker| marker.coordinates)
    }

    pub fn place_user_marker(&mut self, coordinates: Coordinates, zoom: u8) {
        if let Some(id) = self.user_marker.take() {
            self.map.remove_marker(&id);
        }

        let marker = Marker::new(coordinates, USER_LOCATION_POPUP.into());
        self.user_marker = Some(self.map.add_marker(marker));
        self.map.set_view(coordinates, zoom);
    }

    /// Removes the destination marker and the route overlay, if any.
    pub fn clear_destination(&mut self) {
        if let Some(id) = self.destination_marker.take() {
            self.map.remove_marker(&id);
        }
        if let Some(id) = self.route_overlay.take() {
            self.map.remove_route(&id);
        }
        self.route_waypoints = None;
    }

    pub fn place_destination(&mut self, coordinates: Coordinates, popup: String) {
        let marker = Marker::new(coordinates, popup);
        self.destination_marker = Some(self.map.add_marker(marker));
    }

    pub fn route_waypoints(&self) -> Option<&[Coordinates]> {
        self.route_waypoints.as_deref()
    }

    /// Records the waypoints of a new route request and returns its token.
    pub fn begin_route(&mut self, waypoints: Vec<Coordinates>) -> u64 {
        self.route_waypoints = Some(waypoints);
        self.route_token += 1;
        self.route_token
    }

    pub fn is_latest_route(&self, token: u64) -> bool {
        self.route_token == token
    }

    pub fn show_route(&mut self, route: PlannedRoute) {
        if let Some(id) = self.route_overlay.take() {
            self.map.remove_route(&id);
        }
        self.route_overlay = Some(self.map.add_route(RouteOverlay::new(route)));
    }

    pub fn begin_query(&mut self) -> u64 {
        self.query_token += 1;
        self.query_token
    }

    /// Makes every lookup in flight stale.
    pub fn cancel_queries(&mut self) {
        self.query_token += 1;
    }

    pub fn is_latest_query(&self, token: u64) -> bool {
        self.query_token == token
    }
}
