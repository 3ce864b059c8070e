use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// A geocoding candidate as rendered in the suggestion list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub display_name: String,
    pub coordinates: Coordinates,
}

impl PlaceSuggestion {
    pub fn new(display_name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            display_name: display_name.into(),
            coordinates,
        }
    }
}
