use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::MapSettings;
use crate::entities::{Coordinates, Marker, RouteOverlay};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

/// The rendered map: view position, base tiles and every overlay on top.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub tiles: TileLayer,
    markers: BTreeMap<Uuid, Marker>,
    routes: BTreeMap<Uuid, RouteOverlay>,
}

impl MapView {
    pub fn new(settings: &MapSettings) -> Self {
        MapView {
            center: settings.default_center,
            zoom: settings.default_zoom,
            tiles: TileLayer {
                url_template: settings.tile_url.clone(),
                attribution: settings.tile_attribution.clone(),
            },
            markers: BTreeMap::new(),
            routes: BTreeMap::new(),
        }
    }

    pub fn set_view(&mut self, center: Coordinates, zoom: u8) {
        self.center = center;
        self.zoom = zoom;
    }

    pub fn add_marker(&mut self, marker: Marker) -> Uuid {
        let id = marker.id;
        self.markers.insert(id, marker);
        id
    }

    pub fn remove_marker(&mut self, id: &Uuid) -> Option<Marker> {
        self.markers.remove(id)
    }

    pub fn add_route(&mut self, overlay: RouteOverlay) -> Uuid {
        let id = overlay.id;
        self.routes.insert(id, overlay);
        id
    }

    pub fn remove_route(&mut self, id: &Uuid) -> Option<RouteOverlay> {
        self.routes.remove(id)
    }

    pub fn marker(&self, id: &Uuid) -> Option<&Marker> {
        self.markers.get(id)
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    pub fn routes(&self) -> impl Iterator<Item = &RouteOverlay> {
        self.routes.values()
    }
}
