use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::{Coordinates, UiEvent};
use crate::error::Error;
use crate::session::Snapshot;

#[async_trait]
pub trait LocationAPI {
    /// One-shot position request; the outcome is reported through the status
    /// area.
    async fn acquire_location(&self) -> Result<(), Error>;
}

#[async_trait]
pub trait SuggestionAPI {
    async fn on_query_changed(&self, text: &str) -> Result<(), Error>;
}

#[async_trait]
pub trait SelectionAPI {
    async fn select_place(&self, coordinates: Coordinates, name: &str) -> Result<(), Error>;
    async fn select_suggestion(&self, index: usize) -> Result<(), Error>;
    async fn search(&self) -> Result<(), Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn request_route(&self, destination: Coordinates) -> Result<(), Error>;
    async fn drag_waypoint(&self, index: usize, coordinates: Coordinates) -> Result<(), Error>;
}

#[async_trait]
pub trait ViewAPI {
    async fn snapshot(&self) -> Snapshot;
}

#[async_trait]
pub trait EventAPI {
    async fn dispatch(&self, event: UiEvent) -> Result<(), Error>;
}

pub trait API: LocationAPI + SuggestionAPI + SelectionAPI + RouteAPI + ViewAPI + EventAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
