use serde::{Deserialize, Serialize};

use crate::entities::{Message, MessageKind, PlaceSuggestion};

/// Single-slot status area. A new message replaces the previous one.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatusArea {
    message: Option<Message>,
}

impl StatusArea {
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }
}

/// Everything outside the map itself: the query input, the suggestion list,
/// the loading indicator and the status area.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UiSurface {
    pub input: String,
    pub suggestions: Vec<PlaceSuggestion>,
    pub suggestions_visible: bool,
    pub loading: bool,
    pub status: StatusArea,
}

impl UiSurface {
    pub fn new() -> Self {
        UiSurface {
            input: String::new(),
            suggestions: Vec::new(),
            suggestions_visible: false,
            loading: false,
            status: StatusArea::default(),
        }
    }

    pub fn notify(&mut self, kind: MessageKind, text: impl Into<String>) {
        let message = Message::new(kind, text.into());

        match kind {
            MessageKind::Error => tracing::warn!("{}", message.text),
            MessageKind::Success => tracing::info!("{}", message.text),
        }

        self.status.message = Some(message);
    }

    pub fn show_suggestions(&mut self, suggestions: Vec<PlaceSuggestion>) {
        self.suggestions = suggestions;
        self.suggestions_visible = true;
    }

    pub fn hide_suggestions(&mut self) {
        self.suggestions_visible = false;
    }
}
