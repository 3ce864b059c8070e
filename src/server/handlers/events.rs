use axum::extract::{Extension, Json};

use crate::api::{DynAPI, EventAPI, ViewAPI};
use crate::entities::UiEvent;
use crate::error::Error;
use crate::session::Snapshot;

/// Handles one UI event and answers with the view it leaves behind.
pub async fn dispatch(
    Extension(api): Extension<DynAPI>,
    Json(event): Json<UiEvent>,
) -> Result<Json<Snapshot>, Error> {
    api.dispatch(event).await?;

    Ok(api.snapshot().await.into())
}
