mod event_api;
mod location_api;
mod route_api;
mod selection_api;
mod suggestion_api;

#[cfg(test)]
pub(crate) mod testing;

use tokio::sync::Mutex;

use crate::{
    api::API,
    config::MapSettings,
    external::{PositionOptions, Services},
    session::Session,
};

pub use suggestion_api::MIN_QUERY_LENGTH;

/// Drives one map session. The session lock is only held while state is
/// mutated, never across an upstream call, so request chains can overlap.
pub struct Engine {
    services: Services,
    position_options: PositionOptions,
    located_zoom: u8,
    session: Mutex<Session>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(services: Services, map: &MapSettings, position_options: PositionOptions) -> Self {
        Self {
            services,
            position_options,
            located_zoom: map.located_zoom,
            session: Mutex::new(Session::new(map)),
        }
    }
}

impl API for Engine {}
