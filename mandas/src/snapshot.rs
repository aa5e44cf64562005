use crate::constants::GAME_NAME;
use crate::session::{Phase, Session};
use crate::types::{CategoryKey, Prompt, SecretCard};
use serde::{Deserialize, Serialize};

// Everything a rendering surface needs to draw the current screen. It only ever exposes
// what the person holding the device is allowed to see.

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CategoryToggle {
    pub key: CategoryKey,
    pub name: String,
    pub enabled: bool,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Setup {
        categories: Vec<CategoryToggle>,
        players: Vec<String>,
    },
    RevealName {
        player: String,
    },
    RevealSecret {
        player: String,
        category: String,
        card: SecretCard,
    },
    Discussion {
        impostor: Option<String>,
    },
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub title: String,
    pub phase: String,
    pub screen: Screen,
    pub prompt: Option<Prompt>,
}

impl SessionSnapshot {
    pub fn capture(session: &Session) -> Self {
        let screen = match session.phase() {
            Phase::Setup => Screen::Setup {
                categories: session
                    .edition()
                    .categories()
                    .iter()
                    .map(|key| CategoryToggle {
                        key: *key,
                        name: key.display_name().to_string(),
                        enabled: session.is_enabled(*key),
                    })
                    .collect(),
                players: session.players().to_vec(),
            },
            Phase::Reveal(round) => match round.visible_card() {
                None => Screen::RevealName {
                    player: round.current_player().to_string(),
                },
                Some(card) => Screen::RevealSecret {
                    player: round.current_player().to_string(),
                    category: round.category_name.clone(),
                    card,
                },
            },
            Phase::Discussion {
                round,
                impostor_shown,
            } => Screen::Discussion {
                impostor: impostor_shown.then(|| round.impostor_name().to_string()),
            },
        };
        SessionSnapshot {
            title: GAME_NAME.to_string(),
            phase: session.phase().name().to_string(),
            screen,
            prompt: session.prompt().cloned(),
        }
    }
}
