//! The round controller. Owns the show state and drives it through
//! profile setup, the fixed round sequence, and the final verdict.

use anyhow::Result;
use tracing::{info, warn};

use courtship_core::{
    prompts, JudgeEvaluation, Phase, Role, RoundResult, ShowError, ShowState, FALLBACK_EVENT,
    MAX_ROUNDS,
};

use crate::traits::TextGenerator;

pub struct Director<G> {
    generator: G,
    state: ShowState,
}

impl<G: TextGenerator> Director<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            state: ShowState::new(),
        }
    }

    pub fn state(&self) -> &ShowState {
        &self.state
    }

    #[cfg(any(test, feature = "test-support"))]
    pub fn state_mut(&mut self) -> &mut ShowState {
        &mut self.state
    }

    #[cfg(any(test, feature = "test-support"))]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Expand a seed description into a character card and store it.
    /// Nothing is committed on failure; the caller reports and may retry.
    pub async fn generate_profile(&mut self, role: Role, description: &str) -> Result<String> {
        if self.state.phase == Phase::Finished {
            return Err(ShowError::ShowFinished.into());
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(ShowError::EmptyDescription(role).into());
        }

        let profile = self
            .generator
            .generate(&prompts::profile(description))
            .await?;

        let character = self.state.character_mut(role);
        character.description = description.to_string();
        character.profile = profile.clone();

        info!(role = role.display_name(), "profile generated");
        if self.state.profiles_ready() {
            info!("all three profiles ready, the show can begin");
        }
        Ok(profile)
    }

    /// Play one full round: event, both suitor lines, judging, scoring.
    ///
    /// The two suitor generations run concurrently and are joined; if either
    /// fails the round aborts with nothing committed. Event generation
    /// failure is masked by the fixed fallback event. A judge evaluation
    /// that cannot be produced or decoded becomes the neutral 5/5 fallback,
    /// so a round that got both lines always completes.
    pub async fn play_round(&mut self) -> Result<RoundResult> {
        if !self.state.profiles_ready() {
            return Err(ShowError::ProfilesNotReady.into());
        }
        match self.state.phase {
            Phase::RoundInProgress => return Err(ShowError::RoundInFlight.into()),
            Phase::Finished => return Err(ShowError::ShowFinished.into()),
            Phase::AwaitingProfiles | Phase::RoundComplete => {}
        }
        if !self.state.rounds_remaining() {
            return Err(ShowError::RoundsExhausted.into());
        }

        let prior_phase = self.state.phase;
        self.state.phase = Phase::RoundInProgress;
        let round = self.state.round_count + 1;
        info!(round, "round starting");

        let event = match self.generator.generate(&prompts::event()).await {
            Ok(text) => squash_lines(&text),
            Err(err) => {
                warn!(round, error = %err, "event generation failed, using fallback event");
                FALLBACK_EVENT.to_string()
            }
        };

        // Both prompts are built from pre-round state, then awaited together.
        // Either failure fails the pair; partial results are dropped.
        let prompt_a = prompts::suitor_turn(&self.state, Role::SuitorA, &event);
        let prompt_b = prompts::suitor_turn(&self.state, Role::SuitorB, &event);
        let pair = futures::try_join!(
            self.generator.generate(&prompt_a),
            self.generator.generate(&prompt_b),
        );
        let (dialogue_a, dialogue_b) = match pair {
            Ok(pair) => pair,
            Err(err) => {
                self.state.phase = prior_phase;
                warn!(round, error = %err, "suitor turn failed, round aborted");
                return Err(err.into());
            }
        };

        let judge_prompt =
            prompts::judge_evaluation(&self.state, &event, &dialogue_a, &dialogue_b);
        let evaluation = match self.generator.generate_json(&judge_prompt).await {
            Ok(raw) => decode_evaluation(&raw),
            Err(err) => {
                warn!(round, error = %err, "judge evaluation failed, scoring neutral");
                JudgeEvaluation::neutral()
            }
        };

        self.state
            .commit_round(event.clone(), dialogue_a.clone(), dialogue_b.clone(), &evaluation);
        self.state.phase = Phase::RoundComplete;

        Ok(RoundResult {
            round,
            event,
            dialogue_a,
            dialogue_b,
            evaluation,
        })
    }

    /// The judge's closing speech. Only once all rounds are played; the show
    /// is terminal after this succeeds.
    pub async fn finale(&mut self) -> Result<String> {
        if self.state.phase == Phase::Finished {
            return Err(ShowError::ShowFinished.into());
        }
        if self.state.rounds_remaining() {
            return Err(ShowError::ShowStillRunning(MAX_ROUNDS).into());
        }

        let verdict = self
            .generator
            .generate(&prompts::final_verdict(&self.state))
            .await?;
        self.state.phase = Phase::Finished;
        info!(
            score_a = self.state.suitor_a.total_score,
            score_b = self.state.suitor_b.total_score,
            "final verdict delivered"
        );
        Ok(verdict)
    }

    /// Reveal what a suitor was thinking when a given line was spoken.
    /// Read-only; the line must actually have been said.
    pub async fn monologue(&self, role: Role, line: &str) -> Result<String> {
        if !role.is_suitor() || !self.state.character(role).dialogue.iter().any(|l| l == line) {
            return Err(ShowError::UnknownLine(role).into());
        }
        let monologue = self
            .generator
            .generate(&prompts::inner_monologue(&self.state, role, line))
            .await?;
        Ok(monologue)
    }
}

/// Events render on one line; collapse whatever the model wrapped.
fn squash_lines(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Judge output decoding. Any shape problem yields the neutral fallback
/// rather than aborting the round.
fn decode_evaluation(raw: &str) -> JudgeEvaluation {
    match serde_json::from_str(raw) {
        Ok(evaluation) => evaluation,
        Err(err) => {
            warn!(error = %err, "judge evaluation did not decode, scoring neutral");
            JudgeEvaluation::neutral()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squash_lines_flattens_wrapping() {
        assert_eq!(
            squash_lines("a sudden\r\n  gust of wind\n"),
            "a sudden gust of wind"
        );
    }

    #[test]
    fn decode_evaluation_malformed_is_neutral() {
        // Missing closing brace.
        let raw = r#"{"suitorA_score": 7, "suitorA_reasoning": "x""#;
        assert_eq!(decode_evaluation(raw), JudgeEvaluation::neutral());
    }

    #[test]
    fn decode_evaluation_valid_passes_through() {
        let raw = r#"{
            "suitorA_score": 9,
            "suitorA_reasoning": "daring",
            "suitorB_score": 2,
            "suitorB_reasoning": "timid"
        }"#;
        let evaluation = decode_evaluation(raw);
        assert_eq!(evaluation.suitor_a_score, 9);
        assert_eq!(evaluation.suitor_b_score, 2);
    }
}
