pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod intent;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod types;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, StartError, TransitionError};
pub use game::{Advance, RoundState};
pub use intent::{Envelope, Intent, Reply};
pub use rng::RoundRng;
pub use session::{Phase, Session};
pub use snapshot::{Screen, SessionSnapshot};
pub use types::*;

impl Session {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }

    /// Applies one user intent and returns what the screen should show next. Start
    /// failures open an info prompt; out-of-order presses are ignored.
    pub fn apply(&mut self, intent: Intent) -> Reply {
        if self.prompt().is_some() && !intent.allowed_under_prompt() {
            log::debug!("ignoring {:?} while a prompt is open", intent);
            return Reply::Snapshot(self.snapshot());
        }
        match intent {
            Intent::GetSnapshot => {}
            Intent::AddPlayer { name } => {
                if !self.add_player(&name) {
                    log::debug!("ignoring blank player name");
                }
            }
            Intent::RemovePlayer { index } => {
                if self.remove_player(index).is_none() {
                    return Reply::Error(format!("no player at position {}", index));
                }
            }
            Intent::ToggleCategory { key } => {
                if !self.toggle_category(key) {
                    return Reply::Error(format!(
                        "category {} is not available",
                        key.as_str()
                    ));
                }
            }
            Intent::StartRound => match self.start_round() {
                Ok(_) => {}
                Err(StartError::RoundInProgress) => {
                    log::warn!("ignored out-of-order action: start while revealing")
                }
                Err(err) => {
                    log::info!("round not started: {:?}", err);
                    self.show_info(err.title(), err.to_string());
                }
            },
            Intent::ShowSecret => warn_on_guard(self.show_secret()),
            Intent::NextPlayer => warn_on_guard(self.advance_to_next_player()),
            Intent::RevealImpostor => warn_on_guard(self.reveal_impostor().map(|_| ())),
            Intent::RequestReset => self.request_reset(),
            Intent::ConfirmPrompt => {
                self.confirm();
            }
            Intent::CancelPrompt => self.cancel(),
            Intent::DismissPrompt => self.dismiss(),
        }
        Reply::Snapshot(self.snapshot())
    }
}

fn warn_on_guard(result: Result<(), TransitionError>) {
    if let Err(err) = result {
        log::warn!("ignored out-of-order action: {}", err);
    }
}
