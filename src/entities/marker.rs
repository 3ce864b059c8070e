use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Marker {
    pub id: Uuid,
    pub coordinates: Coordinates,
    pub popup: String,
    pub popup_open: bool,
}

impl Marker {
    /// A marker with its popup already open.
    pub fn new(coordinates: Coordinates, popup: String) -> Self {
        Marker {
            id: Uuid::new_v4(),
            coordinates,
            popup,
            popup_open: true,
        }
    }
}
