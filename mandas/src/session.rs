use crate::catalog::Catalog;
use crate::error::{StartError, TransitionError};
use crate::game::{build_round, check_start, Advance, RoundState};
use crate::rng::RoundRng;
use crate::types::{CategoryKey, Edition, PendingAction, Prompt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Session controller: the player list, the category selection, the active phase and the
// prompt currently blocking the screen, if any.

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Reveal(RoundState),
    Discussion {
        round: RoundState,
        impostor_shown: bool,
    },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Reveal(_) => "reveal",
            Phase::Discussion { .. } => "discussion",
        }
    }

    pub fn round(&self) -> Option<&RoundState> {
        match self {
            Phase::Setup => None,
            Phase::Reveal(round) | Phase::Discussion { round, .. } => Some(round),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    catalog: Catalog,
    edition: Edition,
    players: Vec<String>,
    enabled: BTreeSet<CategoryKey>,
    phase: Phase,
    prompt: Option<Prompt>,
    rounds_played: u32,
    rng: RoundRng,
}

impl Session {
    pub fn new(catalog: Catalog, edition: Edition, rng: RoundRng) -> Self {
        Self {
            catalog,
            edition,
            players: Vec::new(),
            enabled: edition.categories().iter().copied().collect(),
            phase: Phase::Setup,
            prompt: None,
            rounds_played: 0,
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.phase.round()
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn rng(&self) -> &RoundRng {
        &self.rng
    }

    pub fn is_enabled(&self, key: CategoryKey) -> bool {
        self.enabled.contains(&key)
    }

    /// Enabled categories in the edition's display order.
    pub fn active_categories(&self) -> Vec<CategoryKey> {
        self.edition
            .categories()
            .iter()
            .copied()
            .filter(|k| self.enabled.contains(k))
            .collect()
    }

    pub fn add_player(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.players.push(name.to_string());
        true
    }

    pub fn remove_player(&mut self, index: usize) -> Option<String> {
        if index >= self.players.len() {
            return None;
        }
        Some(self.players.remove(index))
    }

    /// Flips a category on or off. Keys the edition does not offer are ignored.
    pub fn toggle_category(&mut self, key: CategoryKey) -> bool {
        if !self.edition.categories().contains(&key) {
            log::warn!("category {} is not part of this edition", key.as_str());
            return false;
        }
        if !self.enabled.remove(&key) {
            self.enabled.insert(key);
        }
        true
    }

    pub fn validate_start(&self) -> Result<(), StartError> {
        check_start(
            self.players.len(),
            &self.active_categories(),
            &self.catalog,
        )
    }

    /// Rolls a fresh round from setup or discussion. Nothing changes on failure; a
    /// round still being revealed has to be reset first.
    pub fn start_round(&mut self) -> Result<RoundState, StartError> {
        if matches!(self.phase, Phase::Reveal(_)) {
            return Err(StartError::RoundInProgress);
        }
        let number = self.rounds_played + 1;
        let round = build_round(
            number,
            &self.players,
            &self.active_categories(),
            &self.catalog,
            &mut self.rng,
        )?;
        log::info!(
            "round {} started: {} players, category {}",
            number,
            round.player_count(),
            round.category.as_str()
        );
        self.rounds_played = number;
        self.phase = Phase::Reveal(round.clone());
        Ok(round)
    }

    pub fn show_secret(&mut self) -> Result<(), TransitionError> {
        let next = match &self.phase {
            Phase::Reveal(round) => round.show_secret()?,
            _ => return Err(TransitionError::NotRevealing),
        };
        log::debug!("player {} is viewing their card", next.current_index);
        self.phase = Phase::Reveal(next);
        Ok(())
    }

    pub fn advance_to_next_player(&mut self) -> Result<(), TransitionError> {
        let advance = match &self.phase {
            Phase::Reveal(round) => round.advance()?,
            _ => return Err(TransitionError::NotRevealing),
        };
        self.phase = match advance {
            Advance::Next(round) => {
                log::debug!("handing over to player {}", round.current_index);
                Phase::Reveal(round)
            }
            Advance::Complete(round) => {
                log::info!("round {} fully revealed, discussion starts", round.number);
                Phase::Discussion {
                    round,
                    impostor_shown: false,
                }
            }
        };
        Ok(())
    }

    pub fn reveal_impostor(&mut self) -> Result<&str, TransitionError> {
        match &mut self.phase {
            Phase::Discussion {
                round,
                impostor_shown,
            } => {
                *impostor_shown = true;
                Ok(round.impostor_name())
            }
            _ => Err(TransitionError::NotInDiscussion),
        }
    }

    pub fn reset_to_setup(&mut self) {
        if let Some(round) = self.phase.round() {
            log::info!("round {} discarded, back to setup", round.number);
        }
        self.phase = Phase::Setup;
    }

    /// Leaving mid-reveal loses the round, so it waits for confirmation. From
    /// discussion or setup the reset happens straight away.
    pub fn request_reset(&mut self) {
        if matches!(self.phase, Phase::Reveal(_)) {
            self.prompt = Some(Prompt::confirm_reset());
        } else {
            self.reset_to_setup();
        }
    }

    pub fn show_info(&mut self, title: &str, body: impl Into<String>) {
        self.prompt = Some(Prompt::info(title, body));
    }

    /// Closes the open prompt and runs whatever it was guarding.
    pub fn confirm(&mut self) -> Option<PendingAction> {
        let action = self.prompt.take()?.pending_action();
        if let Some(PendingAction::ResetToSetup) = action {
            self.reset_to_setup();
        }
        action
    }

    /// Backs out of a confirm prompt. Info prompts are closed with `dismiss`.
    pub fn cancel(&mut self) {
        if matches!(self.prompt, Some(Prompt::Confirm { .. })) {
            self.prompt = None;
        }
    }

    pub fn dismiss(&mut self) {
        if matches!(self.prompt, Some(Prompt::Info { .. })) {
            self.prompt = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RevealStep, SecretCard};
    use std::collections::HashSet;

    fn food_only_catalog() -> Catalog {
        Catalog::from_json(r#"{"food": ["تفاح", "موز", "برتقال", "عنب"]}"#).unwrap()
    }

    fn session_with(players: &[&str]) -> Session {
        let mut session = Session::new(Catalog::embedded().unwrap(), Edition::Full, RoundRng::new(42));
        for p in players {
            session.add_player(p);
        }
        session
    }

    fn food_session(players: &[&str]) -> Session {
        let mut session = Session::new(food_only_catalog(), Edition::Full, RoundRng::new(1));
        for key in Edition::Full.categories() {
            if *key != CategoryKey::Food {
                session.toggle_category(*key);
            }
        }
        for p in players {
            session.add_player(p);
        }
        session
    }

    fn play_through(session: &mut Session) {
        let count = session.round().unwrap().player_count();
        for _ in 0..count {
            session.show_secret().unwrap();
            session.advance_to_next_player().unwrap();
        }
    }

    #[test]
    fn add_player_trims_and_rejects_blank_names() {
        let mut session = session_with(&[]);
        assert!(session.add_player("  سارة "));
        assert!(!session.add_player("   "));
        assert!(!session.add_player(""));
        assert!(session.add_player("سارة"));
        assert_eq!(session.players(), &["سارة".to_string(), "سارة".to_string()]);
    }

    #[test]
    fn remove_player_by_position() {
        let mut session = session_with(&["A", "B", "C"]);
        assert_eq!(session.remove_player(1), Some("B".to_string()));
        assert_eq!(session.remove_player(5), None);
        assert_eq!(session.players(), &["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn every_edition_category_starts_enabled() {
        let session = Session::new(Catalog::embedded().unwrap(), Edition::Classic, RoundRng::new(1));
        assert_eq!(session.active_categories(), Edition::Classic.categories());
        assert!(!session.is_enabled(CategoryKey::FootballPlayers));
    }

    #[test]
    fn toggle_flips_and_ignores_foreign_keys() {
        let mut session = Session::new(Catalog::embedded().unwrap(), Edition::Classic, RoundRng::new(1));
        assert!(session.toggle_category(CategoryKey::Food));
        assert!(!session.is_enabled(CategoryKey::Food));
        assert!(session.toggle_category(CategoryKey::Food));
        assert!(session.is_enabled(CategoryKey::Food));
        assert!(!session.toggle_category(CategoryKey::FootballPlayers));
        assert!(!session.is_enabled(CategoryKey::FootballPlayers));
    }

    #[test]
    fn too_few_players_fails_without_mutation() {
        for count in 0..3 {
            let names: Vec<String> = (0..count).map(|i| format!("P{}", i)).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let mut session = session_with(&refs);
            assert_eq!(
                session.validate_start(),
                Err(StartError::NotEnoughPlayers { count })
            );
            assert_eq!(
                session.start_round().err(),
                Some(StartError::NotEnoughPlayers { count })
            );
            assert_eq!(session.phase(), &Phase::Setup);
            assert_eq!(session.rounds_played(), 0);
            assert!(session.rng().history().is_empty());
            assert!(session.prompt().is_none());
        }
    }

    #[test]
    fn no_selected_category_is_reported() {
        let mut session = session_with(&["A", "B", "C"]);
        for key in Edition::Full.categories() {
            session.toggle_category(*key);
        }
        assert_eq!(session.validate_start(), Err(StartError::NoCategorySelected));
    }

    #[test]
    fn undersized_category_is_reported() {
        let catalog = Catalog::from_json(r#"{"places": ["a", "b", "c"]}"#).unwrap();
        let mut session = Session::new(catalog, Edition::Full, RoundRng::new(1));
        for p in ["A", "B", "C"] {
            session.add_player(p);
        }
        let err = session.validate_start().unwrap_err();
        assert_eq!(
            err,
            StartError::WordListTooSmall {
                category: CategoryKey::Places
            }
        );
        assert_eq!(err.to_string(), "قائمة كلمات فئة أماكن صغيرة جدًا.");
    }

    #[test]
    fn three_players_with_food_reach_discussion() {
        let mut session = food_session(&["A", "B", "C"]);
        let round = session.start_round().unwrap();
        assert_eq!(round.category, CategoryKey::Food);
        assert!(["تفاح", "موز", "برتقال", "عنب"].contains(&round.secret_word.as_str()));
        assert!(round.impostor_index < 3);

        let mut order = Vec::new();
        for call in 0..3 {
            let current = session.round().unwrap().current_index;
            order.push(current);
            session.show_secret().unwrap();
            session.advance_to_next_player().unwrap();
            let expected = if call < 2 { "reveal" } else { "discussion" };
            assert_eq!(session.phase().name(), expected);
        }
        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(session.round().unwrap().revealed, vec![true; 3]);
    }

    #[test]
    fn non_impostors_see_the_secret() {
        let mut session = session_with(&["A", "B", "C", "D"]);
        session.start_round().unwrap();
        let secret = session.round().unwrap().secret_word.clone();
        let impostor = session.round().unwrap().impostor_index;
        for _ in 0..4 {
            session.show_secret().unwrap();
            let round = session.round().unwrap();
            let card = round.visible_card().unwrap();
            if round.current_index == impostor {
                assert_eq!(card, SecretCard::Impostor);
            } else {
                assert_eq!(card, SecretCard::Word(secret.clone()));
            }
            session.advance_to_next_player().unwrap();
        }
    }

    #[test]
    fn out_of_order_calls_leave_state_alone() {
        let mut session = session_with(&["A", "B", "C"]);
        assert_eq!(session.show_secret(), Err(TransitionError::NotRevealing));
        assert_eq!(
            session.reveal_impostor().err(),
            Some(TransitionError::NotInDiscussion)
        );
        session.start_round().unwrap();
        let before = session.phase().clone();
        assert_eq!(
            session.advance_to_next_player(),
            Err(TransitionError::SecretNotShown)
        );
        assert_eq!(session.phase(), &before);
        session.show_secret().unwrap();
        assert_eq!(
            session.show_secret(),
            Err(TransitionError::SecretAlreadyShown)
        );
        assert_eq!(session.round().unwrap().step, RevealStep::Secret);
    }

    #[test]
    fn reveal_impostor_in_discussion() {
        let mut session = session_with(&["A", "B", "C"]);
        session.start_round().unwrap();
        play_through(&mut session);
        let expected = session.round().unwrap().impostor_name().to_string();
        assert_eq!(session.reveal_impostor().unwrap(), expected);
        match session.phase() {
            Phase::Discussion { impostor_shown, .. } => assert!(*impostor_shown),
            other => panic!("unexpected phase {:?}", other),
        }
    }

    #[test]
    fn replay_rerolls_everything() {
        let mut session = session_with(&["A", "B", "C", "D", "E"]);
        let mut categories = HashSet::new();
        let mut secrets = HashSet::new();
        let mut impostors = HashSet::new();
        for n in 1..=60 {
            let round = session.start_round().unwrap();
            assert_eq!(round.number, n);
            categories.insert(round.category);
            secrets.insert(round.secret_word);
            impostors.insert(round.impostor_index);
            play_through(&mut session);
            session.reveal_impostor().unwrap();
        }
        assert!(categories.len() > 1);
        assert!(secrets.len() > 1);
        assert!(impostors.len() > 1);
        assert_eq!(session.rounds_played(), 60);
    }

    #[test]
    fn replay_clears_the_impostor_flag() {
        let mut session = session_with(&["A", "B", "C"]);
        session.start_round().unwrap();
        play_through(&mut session);
        session.reveal_impostor().unwrap();
        session.start_round().unwrap();
        assert_eq!(session.phase().name(), "reveal");
        play_through(&mut session);
        assert!(matches!(
            session.phase(),
            Phase::Discussion {
                impostor_shown: false,
                ..
            }
        ));
    }

    #[test]
    fn edits_do_not_touch_a_running_round() {
        let mut session = session_with(&["A", "B", "C"]);
        session.start_round().unwrap();
        let before = session.round().unwrap().clone();
        session.remove_player(0);
        session.add_player("D");
        session.toggle_category(before.category);
        assert_eq!(session.round().unwrap(), &before);
        play_through(&mut session);
        assert_eq!(session.phase().name(), "discussion");
    }

    #[test]
    fn mid_reveal_reset_waits_for_confirmation() {
        let mut session = session_with(&["A", "B", "C"]);
        session.start_round().unwrap();
        session.request_reset();
        assert_eq!(session.phase().name(), "reveal");
        assert_eq!(
            session.prompt().and_then(Prompt::pending_action),
            Some(PendingAction::ResetToSetup)
        );

        session.cancel();
        assert!(session.prompt().is_none());
        assert_eq!(session.phase().name(), "reveal");

        session.request_reset();
        assert_eq!(session.confirm(), Some(PendingAction::ResetToSetup));
        assert_eq!(session.phase(), &Phase::Setup);
        assert!(session.prompt().is_none());
        assert_eq!(session.players().len(), 3);
    }

    #[test]
    fn start_is_refused_while_revealing() {
        let mut session = session_with(&["A", "B", "C"]);
        session.start_round().unwrap();
        session.show_secret().unwrap();
        session.advance_to_next_player().unwrap();
        let before = session.phase().clone();
        let history = session.rng().history().len();

        assert_eq!(session.start_round().err(), Some(StartError::RoundInProgress));
        assert_eq!(session.phase(), &before);
        assert_eq!(session.rounds_played(), 1);
        assert_eq!(session.rng().history().len(), history);
    }

    #[test]
    fn cancel_and_dismiss_close_only_their_prompt_kind() {
        let mut session = session_with(&["A", "B", "C"]);
        session.start_round().unwrap();
        session.request_reset();
        session.dismiss();
        assert_eq!(
            session.prompt().and_then(Prompt::pending_action),
            Some(PendingAction::ResetToSetup)
        );
        session.cancel();
        assert!(session.prompt().is_none());

        session.show_info("t", "b");
        session.cancel();
        assert!(session.prompt().is_some());
        session.dismiss();
        assert!(session.prompt().is_none());
        assert_eq!(session.phase().name(), "reveal");
    }

    #[test]
    fn reset_from_discussion_is_immediate() {
        let mut session = session_with(&["A", "B", "C"]);
        session.start_round().unwrap();
        play_through(&mut session);
        session.request_reset();
        assert!(session.prompt().is_none());
        assert_eq!(session.phase(), &Phase::Setup);
    }

    #[test]
    fn confirming_an_info_prompt_runs_nothing() {
        let mut session = session_with(&["A", "B", "C"]);
        session.start_round().unwrap();
        session.show_info("t", "b");
        assert_eq!(session.confirm(), None);
        assert_eq!(session.phase().name(), "reveal");
        assert_eq!(session.confirm(), None);
    }
}
