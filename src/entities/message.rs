use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Error,
    Success,
}

impl MessageKind {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Error => "red",
            Self::Success => "green",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    pub color: String,
    pub shown_at: DateTime<Utc>,
}

impl Message {
    pub fn new(kind: MessageKind, text: String) -> Self {
        Message {
            text,
            kind,
            color: kind.color().into(),
            shown_at: Utc::now(),
        }
    }
}
