use crate::catalog::Catalog;
use crate::constants::{MIN_PLAYERS, MIN_WORDS_PER_CATEGORY};
use crate::error::{StartError, TransitionError};
use crate::rng::{DrawKind, RoundRng};
use crate::types::{CategoryKey, RevealStep, SecretCard};
use serde::{Deserialize, Serialize};

// Round engine. A round is a plain value: each reveal transition builds the next value
// from the current one and leaves the original untouched.

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct RoundState {
    pub number: u32,
    pub players: Vec<String>,
    pub category: CategoryKey,
    pub category_name: String,
    pub secret_word: String,
    pub impostor_index: usize,
    pub revealed: Vec<bool>,
    pub current_index: usize,
    pub step: RevealStep,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Another player still has to see their card.
    Next(RoundState),
    /// Everyone has seen their card; the round moves to discussion.
    Complete(RoundState),
}

impl Advance {
    pub fn into_round(self) -> RoundState {
        match self {
            Advance::Next(round) | Advance::Complete(round) => round,
        }
    }
}

/// Checks the three start conditions in order: player count, category selection, and
/// the word list size of every selected category.
pub fn check_start(
    player_count: usize,
    active: &[CategoryKey],
    catalog: &Catalog,
) -> Result<(), StartError> {
    if player_count < MIN_PLAYERS {
        return Err(StartError::NotEnoughPlayers {
            count: player_count,
        });
    }
    if active.is_empty() {
        return Err(StartError::NoCategorySelected);
    }
    for key in active {
        if catalog.words(*key).is_err() {
            return Err(StartError::WordListTooSmall { category: *key });
        }
    }
    Ok(())
}

pub fn build_round(
    number: u32,
    players: &[String],
    active: &[CategoryKey],
    catalog: &Catalog,
    rng: &mut RoundRng,
) -> Result<RoundState, StartError> {
    check_start(players.len(), active, catalog)?;

    let category = active[rng.pick(active.len(), number, DrawKind::Category)];
    let words = catalog
        .words(category)
        .map_err(|_| StartError::WordListTooSmall { category })?;
    debug_assert!(words.len() >= MIN_WORDS_PER_CATEGORY);
    let secret_word = words[rng.pick(words.len(), number, DrawKind::Secret)].clone();
    let impostor_index = rng.pick(players.len(), number, DrawKind::Impostor);

    Ok(RoundState {
        number,
        players: players.to_vec(),
        category,
        category_name: category.display_name().to_string(),
        secret_word,
        impostor_index,
        revealed: vec![false; players.len()],
        current_index: 0,
        step: RevealStep::Name,
    })
}

impl RoundState {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn current_player(&self) -> &str {
        self.players
            .get(self.current_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn impostor_name(&self) -> &str {
        self.players
            .get(self.impostor_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_impostor(&self, index: usize) -> bool {
        index == self.impostor_index
    }

    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    pub fn card_for(&self, index: usize) -> SecretCard {
        if self.is_impostor(index) {
            SecretCard::Impostor
        } else {
            SecretCard::Word(self.secret_word.clone())
        }
    }

    /// Card of the player currently holding the device, once they asked for it.
    pub fn visible_card(&self) -> Option<SecretCard> {
        match self.step {
            RevealStep::Name => None,
            RevealStep::Secret => Some(self.card_for(self.current_index)),
        }
    }

    pub fn show_secret(&self) -> Result<RoundState, TransitionError> {
        if self.is_complete() {
            return Err(TransitionError::NotRevealing);
        }
        if self.step != RevealStep::Name {
            return Err(TransitionError::SecretAlreadyShown);
        }
        Ok(RoundState {
            step: RevealStep::Secret,
            ..self.clone()
        })
    }

    pub fn advance(&self) -> Result<Advance, TransitionError> {
        if self.is_complete() {
            return Err(TransitionError::NotRevealing);
        }
        if self.step != RevealStep::Secret {
            return Err(TransitionError::SecretNotShown);
        }
        let current = self.current_index;
        let revealed: Vec<bool> = self
            .revealed
            .iter()
            .enumerate()
            .map(|(idx, r)| *r || idx == current)
            .collect();
        let next = (current + 1..revealed.len()).find(|idx| !revealed[*idx]);
        let round = RoundState {
            revealed,
            current_index: next.unwrap_or(current),
            step: RevealStep::Name,
            ..self.clone()
        };
        Ok(match next {
            Some(_) => Advance::Next(round),
            None => Advance::Complete(round),
        })
    }
}
