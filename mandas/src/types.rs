use crate::constants::{CONFIRM_CANCEL, CONFIRM_RESET_BODY, CONFIRM_RESET_YES, TITLE_CONFIRM};
use serde::{Deserialize, Serialize};
use std::fmt;

// Shared value types for the dataset, the round engine and the session. They carry no
// behaviour beyond naming and labelling; state changes live in game.rs and session.rs.

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    Places,
    Food,
    Objects,
    Sports,
    Jobs,
    Countries,
    QuranChapters,
    FootballPlayers,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 8] = [
        CategoryKey::Places,
        CategoryKey::Food,
        CategoryKey::Objects,
        CategoryKey::Sports,
        CategoryKey::Jobs,
        CategoryKey::Countries,
        CategoryKey::QuranChapters,
        CategoryKey::FootballPlayers,
    ];

    /// Key used in the words document.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Places => "places",
            CategoryKey::Food => "food",
            CategoryKey::Objects => "objects",
            CategoryKey::Sports => "sports",
            CategoryKey::Jobs => "jobs",
            CategoryKey::Countries => "countries",
            CategoryKey::QuranChapters => "quran_chapters",
            CategoryKey::FootballPlayers => "football_players",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryKey::Places => "أماكن",
            CategoryKey::Food => "أكل",
            CategoryKey::Objects => "أشياء",
            CategoryKey::Sports => "رياضات",
            CategoryKey::Jobs => "وظائف",
            CategoryKey::Countries => "دول",
            CategoryKey::QuranChapters => "سور",
            CategoryKey::FootballPlayers => "لاعبين كرة",
        }
    }

    pub fn parse(key: &str) -> Option<CategoryKey> {
        let key = key.trim();
        CategoryKey::ALL
            .into_iter()
            .find(|k| k.as_str() == key || k.display_name() == key)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// The two shipped variants of the app differ only in which categories they offer.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Edition {
    Classic,
    #[default]
    Full,
}

impl Edition {
    pub fn categories(&self) -> &'static [CategoryKey] {
        match self {
            Edition::Classic => &[
                CategoryKey::Places,
                CategoryKey::Food,
                CategoryKey::Objects,
                CategoryKey::Sports,
                CategoryKey::Jobs,
                CategoryKey::Countries,
                CategoryKey::QuranChapters,
            ],
            Edition::Full => &CategoryKey::ALL,
        }
    }

    pub fn parse(value: &str) -> Option<Edition> {
        match value.trim().to_lowercase().as_str() {
            "classic" => Some(Edition::Classic),
            "full" => Some(Edition::Full),
            _ => None,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Category {
    pub key: CategoryKey,
    pub name: String,
    pub words: Vec<String>,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum RevealStep {
    Name,
    Secret,
}

/// What the current player sees once they ask for their word.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum SecretCard {
    Word(String),
    Impostor,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum PendingAction {
    ResetToSetup,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Prompt {
    Info {
        title: String,
        body: String,
    },
    Confirm {
        title: String,
        body: String,
        confirm_label: String,
        cancel_label: String,
        action: PendingAction,
    },
}

impl Prompt {
    pub fn info(title: &str, body: impl Into<String>) -> Self {
        Prompt::Info {
            title: title.to_string(),
            body: body.into(),
        }
    }

    pub fn confirm_reset() -> Self {
        Prompt::Confirm {
            title: TITLE_CONFIRM.to_string(),
            body: CONFIRM_RESET_BODY.to_string(),
            confirm_label: CONFIRM_RESET_YES.to_string(),
            cancel_label: CONFIRM_CANCEL.to_string(),
            action: PendingAction::ResetToSetup,
        }
    }

    pub fn pending_action(&self) -> Option<PendingAction> {
        match self {
            Prompt::Info { .. } => None,
            Prompt::Confirm { action, .. } => Some(*action),
        }
    }
}
