mod coordinates;
mod event;
mod marker;
mod message;
mod route;
mod suggestion;

pub use coordinates::Coordinates;
pub use event::UiEvent;
pub use marker::Marker;
pub use message::{Message, MessageKind};
pub use route::{PlannedRoute, RouteOverlay};
pub use suggestion::PlaceSuggestion;
