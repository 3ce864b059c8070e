use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{EventAPI, LocationAPI, RouteAPI, SelectionAPI, SuggestionAPI, ViewAPI},
    entities::UiEvent,
    error::Error,
    session::Snapshot,
};

#[async_trait]
impl EventAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, event: UiEvent) -> Result<(), Error> {
        match event {
            UiEvent::Load => self.acquire_location().await,
            UiEvent::QueryChanged { text } => self.on_query_changed(&text).await,
            UiEvent::SuggestionClicked { index } => self.select_suggestion(index).await,
            UiEvent::SearchClicked => self.search().await,
            UiEvent::WaypointDragged { index, coordinates } => {
                self.drag_waypoint(index, coordinates).await
            }
        }
    }
}

#[async_trait]
impl ViewAPI for Engine {
    async fn snapshot(&self) -> Snapshot {
        self.session.lock().await.snapshot()
    }
}
