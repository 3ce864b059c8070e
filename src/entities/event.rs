use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// Everything the UI surface can report. Each variant has exactly one handler,
/// see `EventAPI::dispatch`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    Load,
    QueryChanged { text: String },
    SuggestionClicked { index: usize },
    SearchClicked,
    WaypointDragged { index: usize, coordinates: Coordinates },
}

#[test]
fn ui_event_json_test() {
    let event: UiEvent =
        serde_json::from_str(r#"{"event": "query_changed", "text": "Manila"}"#).unwrap();
    assert_eq!(
        event,
        UiEvent::QueryChanged {
            text: "Manila".into()
        }
    );

    let event: UiEvent = serde_json::from_str(
        r#"{"event": "waypoint_dragged", "index": 1, "coordinates": {"lat": 1.0, "lng": 2.0}}"#,
    )
    .unwrap();
    assert_eq!(
        event,
        UiEvent::WaypointDragged {
            index: 1,
            coordinates: Coordinates::new(1.0, 2.0)
        }
    );

    let event: UiEvent = serde_json::from_str(r#"{"event": "load"}"#).unwrap();
    assert_eq!(event, UiEvent::Load);
}
