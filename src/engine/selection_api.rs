use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{RouteAPI, SelectionAPI},
    entities::{Coordinates, MessageKind},
    error::{invalid_input_error, invalid_state_error, Error},
};

#[async_trait]
impl SelectionAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn select_place(&self, coordinates: Coordinates, name: &str) -> Result<(), Error> {
        {
            let mut session = self.session.lock().await;
            session.cancel_queries();
            session.ui.loading = false;
            session.ui.input = name.to_string();
            session.ui.hide_suggestions();
        }

        self.request_route(coordinates).await
    }

    #[tracing::instrument(skip(self))]
    async fn select_suggestion(&self, index: usize) -> Result<(), Error> {
        let suggestion = {
            let session = self.session.lock().await;

            if !session.ui.suggestions_visible {
                return Err(invalid_state_error());
            }

            session
                .ui
                .suggestions
                .get(index)
                .cloned()
                .ok_or_else(|| invalid_input_error())?
        };

        self.select_place(suggestion.coordinates, &suggestion.display_name)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn search(&self) -> Result<(), Error> {
        let query = self.session.lock().await.ui.input.trim().to_string();

        if query.is_empty() {
            let mut session = self.session.lock().await;
            session
                .ui
                .notify(MessageKind::Error, "Please enter a location.");
            return Ok(());
        }

        match self.services.geocoder.search(&query).await {
            Ok(suggestions) => match suggestions.into_iter().next() {
                Some(first) => {
                    self.select_place(first.coordinates, &first.display_name)
                        .await
                }
                None => {
                    let mut session = self.session.lock().await;
                    session.ui.notify(MessageKind::Error, "Location not found.");
                    Ok(())
                }
            },
            Err(err) => {
                tracing::warn!("search lookup failed: {}", err);
                let mut session = self.session.lock().await;
                session
                    .ui
                    .notify(MessageKind::Error, "Error fetching location data.");
                Ok(())
            }
        }
    }
}
