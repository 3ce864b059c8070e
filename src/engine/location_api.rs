use super::Engine;

use async_trait::async_trait;

use crate::{api::LocationAPI, entities::MessageKind, error::Error};

#[async_trait]
impl LocationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn acquire_location(&self) -> Result<(), Error> {
        let geolocator = match &self.services.geolocator {
            Some(geolocator) => geolocator.clone(),
            None => {
                let mut session = self.session.lock().await;
                session.ui.notify(
                    MessageKind::Error,
                    "Geolocation is not supported on this device.",
                );
                return Ok(());
            }
        };

        let result = geolocator.current_position(self.position_options).await;

        let mut session = self.session.lock().await;

        match result {
            Ok(coordinates) => {
                tracing::info!("user located at {}", String::from(coordinates));
                session.place_user_marker(coordinates, self.located_zoom);
                session.ui.notify(MessageKind::Success, "Location found!");
            }
            Err(err) => {
                session.ui.notify(
                    MessageKind::Error,
                    format!("Geolocation failed: {}", err.message),
                );
            }
        }

        Ok(())
    }
}
