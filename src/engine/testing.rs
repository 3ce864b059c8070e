use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use geo_types::LineString;
use tokio::sync::oneshot;

use super::Engine;
use crate::{
    config::MapSettings,
    entities::{Coordinates, PlaceSuggestion, PlannedRoute},
    error::{geolocation_error, routing_error, upstream_error, Error},
    external::{Geocoder, Geolocator, PositionOptions, RoutePlanner, Services},
};

#[derive(Default)]
pub struct MockGeocoder {
    responses: Mutex<HashMap<String, Vec<PlaceSuggestion>>>,
    failing: Mutex<HashSet<String>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    queries: Mutex<Vec<String>>,
}

impl MockGeocoder {
    pub fn respond(&self, query: &str, suggestions: Vec<PlaceSuggestion>) {
        self.responses
            .lock()
            .unwrap()
            .insert(query.into(), suggestions);
    }

    pub fn fail(&self, query: &str) {
        self.failing.lock().unwrap().insert(query.into());
    }

    /// Holds the response to `query` back until the returned sender fires.
    pub fn hold(&self, query: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(query.into(), rx);
        tx
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<PlaceSuggestion>, Error> {
        self.queries.lock().unwrap().push(query.into());

        let gate = self.gates.lock().unwrap().remove(query);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.failing.lock().unwrap().contains(query) {
            return Err(upstream_error());
        }

        let suggestions = self
            .responses
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default();

        Ok(suggestions)
    }
}

pub struct MockGeolocator {
    outcome: Result<Coordinates, String>,
    calls: AtomicUsize,
}

impl MockGeolocator {
    pub fn at(coordinates: Coordinates) -> Self {
        Self {
            outcome: Ok(coordinates),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geolocator for MockGeolocator {
    async fn current_position(&self, _options: PositionOptions) -> Result<Coordinates, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map_err(geolocation_error)
    }
}

#[derive(Default)]
pub struct MockPlanner {
    requests: Mutex<Vec<Vec<Coordinates>>>,
    failing: Mutex<bool>,
    gates: Mutex<Vec<(Vec<Coordinates>, oneshot::Receiver<()>)>>,
}

impl MockPlanner {
    pub fn requests(&self) -> Vec<Vec<Coordinates>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn fail(&self) {
        *self.failing.lock().unwrap() = true;
    }

    /// Holds the plan for `waypoints` back until the returned sender fires.
    pub fn hold(&self, waypoints: Vec<Coordinates>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push((waypoints, rx));
        tx
    }
}

#[async_trait]
impl RoutePlanner for MockPlanner {
    async fn plan(&self, waypoints: &[Coordinates]) -> Result<PlannedRoute, Error> {
        self.requests.lock().unwrap().push(waypoints.to_vec());

        let gate = {
            let mut gates = self.gates.lock().unwrap();
            gates
                .iter()
                .position(|(held, _)| held == waypoints)
                .map(|idx| gates.remove(idx).1)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if *self.failing.lock().unwrap() {
            return Err(routing_error("Impossible route between points"));
        }

        let path: LineString<f64> = waypoints
            .iter()
            .map(|c| (c.lng, c.lat))
            .collect::<Vec<_>>()
            .into();

        Ok(PlannedRoute {
            waypoints: waypoints.to_vec(),
            path,
            distance: 1000.0,
            duration: 120.0,
        })
    }
}

pub struct Mocks {
    pub geocoder: Arc<MockGeocoder>,
    pub geolocator: Option<Arc<MockGeolocator>>,
    pub planner: Arc<MockPlanner>,
}

pub fn map_settings() -> MapSettings {
    MapSettings {
        default_center: Coordinates::new(14.617776, 121.10257),
        default_zoom: 13,
        located_zoom: 14,
        tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
        tile_attribution: "&copy; OpenStreetMap contributors".into(),
    }
}

pub fn engine_with(geolocator: Option<MockGeolocator>) -> (Engine, Mocks) {
    let geocoder = Arc::new(MockGeocoder::default());
    let planner = Arc::new(MockPlanner::default());
    let geolocator = geolocator.map(Arc::new);

    let services = Services {
        geocoder: geocoder.clone(),
        geolocator: geolocator
            .clone()
            .map(|g| g as Arc<dyn Geolocator>),
        planner: planner.clone(),
    };

    let engine = Engine::new(services, &map_settings(), PositionOptions::default());

    (
        engine,
        Mocks {
            geocoder,
            geolocator,
            planner,
        },
    )
}

pub const USER: Coordinates = Coordinates {
    lat: 14.5764,
    lng: 121.0851,
};

pub fn manila_candidates() -> Vec<PlaceSuggestion> {
    vec![
        PlaceSuggestion::new(
            "Manila, Capital District, Metro Manila, Philippines",
            Coordinates::new(14.5904492, 120.9803621),
        ),
        PlaceSuggestion::new(
            "Manila Bay, Philippines",
            Coordinates::new(14.5825, 120.973),
        ),
        PlaceSuggestion::new(
            "Manila Ocean Park, Ermita, Manila, Philippines",
            Coordinates::new(14.5792, 120.9724),
        ),
    ]
}
