use super::Engine;

use async_trait::async_trait;

use crate::{api::SuggestionAPI, entities::MessageKind, error::Error};

/// Shorter queries never reach the geocoder. Length is counted in UTF-16
/// code units, the way browser input fields report it.
pub const MIN_QUERY_LENGTH: usize = 3;

#[async_trait]
impl SuggestionAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn on_query_changed(&self, text: &str) -> Result<(), Error> {
        let token = {
            let mut session = self.session.lock().await;
            session.ui.input = text.to_string();

            if text.encode_utf16().count() < MIN_QUERY_LENGTH {
                return Ok(());
            }

            session.ui.loading = true;
            session.begin_query()
        };

        let result = self.services.geocoder.search(text).await;

        let mut session = self.session.lock().await;

        if !session.is_latest_query(token) {
            tracing::debug!("discarding stale suggestions for query {}", token);
            return Ok(());
        }

        session.ui.loading = false;

        match result {
            Ok(suggestions) => {
                let empty = suggestions.is_empty();
                session.ui.show_suggestions(suggestions);

                if empty {
                    session.ui.notify(MessageKind::Error, "No results found.");
                }
            }
            Err(err) => {
                tracing::warn!("suggestion lookup failed: {}", err);
                session
                    .ui
                    .notify(MessageKind::Error, "Error fetching suggestions.");
            }
        }

        Ok(())
    }
}
