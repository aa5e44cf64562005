use crate::snapshot::SessionSnapshot;
use crate::types::CategoryKey;
use serde::{Deserialize, Serialize};

// Message shapes exchanged with a rendering surface: one intent per button, answered with
// a fresh snapshot or an error string.

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Intent {
    GetSnapshot,
    AddPlayer { name: String },
    RemovePlayer { index: usize },
    ToggleCategory { key: CategoryKey },
    StartRound,
    ShowSecret,
    NextPlayer,
    RevealImpostor,
    RequestReset,
    ConfirmPrompt,
    CancelPrompt,
    DismissPrompt,
}

impl Intent {
    /// Intents that stay available while a prompt covers the screen.
    pub fn allowed_under_prompt(&self) -> bool {
        matches!(
            self,
            Intent::GetSnapshot
                | Intent::ConfirmPrompt
                | Intent::CancelPrompt
                | Intent::DismissPrompt
        )
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Reply {
    Snapshot(SessionSnapshot),
    Error(String),
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Envelope<T> {
    pub id: Option<String>,
    #[serde(flatten)]
    pub message: T,
}
