use tracing::debug;

use crate::types::{Character, JudgeEvaluation, Role, MAX_ROUNDS, MAX_ROUND_SCORE};

/// Where the show is in its lifecycle. Construction starts at
/// `AwaitingProfiles`; there is nothing observable before that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingProfiles,
    RoundInProgress,
    RoundComplete,
    Finished,
}

/// The single in-memory record of the show. Owned by the director and only
/// ever mutated from its one control flow.
#[derive(Debug, Clone)]
pub struct ShowState {
    pub suitor_a: Character,
    pub suitor_b: Character,
    pub judge: Character,
    pub round_count: u32,
    /// Latest generated scenario; overwritten each round, empty before round 1.
    pub current_event: String,
    pub phase: Phase,
}

impl ShowState {
    pub fn new() -> Self {
        Self {
            suitor_a: Character::new(Role::SuitorA),
            suitor_b: Character::new(Role::SuitorB),
            judge: Character::new(Role::Judge),
            round_count: 0,
            current_event: String::new(),
            phase: Phase::AwaitingProfiles,
        }
    }

    pub fn character(&self, role: Role) -> &Character {
        match role {
            Role::SuitorA => &self.suitor_a,
            Role::SuitorB => &self.suitor_b,
            Role::Judge => &self.judge,
        }
    }

    pub fn character_mut(&mut self, role: Role) -> &mut Character {
        match role {
            Role::SuitorA => &mut self.suitor_a,
            Role::SuitorB => &mut self.suitor_b,
            Role::Judge => &mut self.judge,
        }
    }

    /// All three profiles written. Gate for the first round.
    pub fn profiles_ready(&self) -> bool {
        !self.suitor_a.profile.is_empty()
            && !self.suitor_b.profile.is_empty()
            && !self.judge.profile.is_empty()
    }

    pub fn rounds_remaining(&self) -> bool {
        self.round_count < MAX_ROUNDS
    }

    /// Fold one judged round into the durable record. Utterances land in
    /// fixed A-then-B order; scores accumulate; the round counter advances
    /// exactly once.
    pub fn commit_round(
        &mut self,
        event: String,
        dialogue_a: String,
        dialogue_b: String,
        evaluation: &JudgeEvaluation,
    ) {
        self.current_event = event;
        self.suitor_a.dialogue.push(dialogue_a);
        self.suitor_b.dialogue.push(dialogue_b);
        self.suitor_a.total_score += evaluation.suitor_a_score;
        self.suitor_b.total_score += evaluation.suitor_b_score;
        self.round_count += 1;
        debug!(
            round = self.round_count,
            score_a = self.suitor_a.total_score,
            score_b = self.suitor_b.total_score,
            "round committed"
        );
    }

    /// Running total as a percentage of the maximum attainable, clamped to
    /// [0,100]. The denominator trusts the per-round cap of 10, which the
    /// judge prompt asks for but nothing enforces.
    pub fn score_percentage(&self, role: Role) -> f64 {
        let max = (MAX_ROUNDS * MAX_ROUND_SCORE) as f64;
        let pct = self.character(role).total_score as f64 / max * 100.0;
        pct.clamp(0.0, 100.0)
    }
}

impl Default for ShowState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state() -> ShowState {
        let mut state = ShowState::new();
        state.suitor_a.profile = "a poet".to_string();
        state.suitor_b.profile = "a pilot".to_string();
        state.judge.profile = "a skeptic".to_string();
        state
    }

    #[test]
    fn fresh_state_awaits_profiles() {
        let state = ShowState::new();
        assert_eq!(state.phase, Phase::AwaitingProfiles);
        assert_eq!(state.round_count, 0);
        assert!(state.current_event.is_empty());
        assert!(!state.profiles_ready());
    }

    #[test]
    fn profiles_ready_needs_all_three() {
        let mut state = ShowState::new();
        state.suitor_a.profile = "a poet".to_string();
        state.suitor_b.profile = "a pilot".to_string();
        assert!(!state.profiles_ready());
        state.judge.profile = "a skeptic".to_string();
        assert!(state.profiles_ready());
    }

    #[test]
    fn commit_round_appends_a_then_b_and_accumulates() {
        let mut state = ready_state();
        let eval = JudgeEvaluation {
            suitor_a_score: 7,
            suitor_a_reasoning: "sharp".to_string(),
            suitor_b_score: 3,
            suitor_b_reasoning: "safe".to_string(),
        };
        state.commit_round(
            "a sudden gust".to_string(),
            "line a".to_string(),
            "line b".to_string(),
            &eval,
        );

        assert_eq!(state.round_count, 1);
        assert_eq!(state.current_event, "a sudden gust");
        assert_eq!(state.suitor_a.dialogue, vec!["line a"]);
        assert_eq!(state.suitor_b.dialogue, vec!["line b"]);
        assert_eq!(state.suitor_a.total_score, 7);
        assert_eq!(state.suitor_b.total_score, 3);
    }

    #[test]
    fn score_percentage_clamps() {
        let mut state = ready_state();
        state.suitor_a.total_score = 25;
        assert!((state.score_percentage(Role::SuitorA) - 50.0).abs() < f64::EPSILON);

        // Over-cap totals (service broke its 1..=10 contract) still clamp.
        state.suitor_b.total_score = 999;
        assert!((state.score_percentage(Role::SuitorB) - 100.0).abs() < f64::EPSILON);
    }
}
