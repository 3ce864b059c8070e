use axum::extract::{Extension, Json};

use crate::api::{DynAPI, ViewAPI};
use crate::session::Snapshot;

pub async fn find(Extension(api): Extension<DynAPI>) -> Json<Snapshot> {
    api.snapshot().await.into()
}
