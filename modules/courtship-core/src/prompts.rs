//! Prompt assembly. Pure string building, no I/O, no mutation.
//!
//! Dialogue history is always included in full, alternating one line from
//! each suitor per round. History grows without bound across rounds; the
//! model must see the whole prior conversation.

use crate::state::ShowState;
use crate::types::{Character, Role, MAX_ROUNDS};

/// Opener used in place of history before the first round.
const HISTORY_OPENER: &str = "This is the start of your conversation.";

/// Expand a short user-supplied description into a full character card.
pub fn profile(description: &str) -> String {
    format!(
        "You are a professional screenwriter. Take the following very brief \
         character description and expand it into a richer, more vivid and \
         appealing character introduction. Include the character's name, \
         personality, occupation, values, and a few interesting secrets or \
         quirks, so the character feels real and believable. Write the \
         introduction in the first person, as \"I\".\n\n\
         Original description: \"{description}\""
    )
}

/// Ask for a one-sentence dramatic incident to drop into the date.
pub fn event() -> String {
    "You are a romantic scene designer. For a date currently in progress, \
     invent a short, interesting sudden event. It should spark conversation \
     and add drama or a romantic mood. Describe the event in a single \
     sentence, with no extra explanation.\n\n\
     For example:\n\
     - A flock of pigeons bursts up from the square and circles overhead.\n\
     - An elderly couple nearby suddenly starts dancing to distant music.\n\
     - A shy flower girl hands the person being courted a single rose."
        .to_string()
}

/// Full dialogue history as alternating labeled lines, A then B per round.
pub fn dialogue_history(suitor_a: &Character, suitor_b: &Character) -> String {
    if suitor_a.dialogue.is_empty() {
        return HISTORY_OPENER.to_string();
    }

    let mut history = String::from("Here is your conversation so far:\n");
    for (line_a, line_b) in suitor_a.dialogue.iter().zip(&suitor_b.dialogue) {
        history.push_str(&format!("{}: {}\n", suitor_a.name, line_a));
        history.push_str(&format!("{}: {}\n", suitor_b.name, line_b));
    }
    history
}

/// A suitor's turn: react in character to the event, in front of the rival
/// and the judge, with the full conversation in view.
pub fn suitor_turn(state: &ShowState, role: Role, event: &str) -> String {
    let suitor = state.character(role);
    let rival = state.character(role.rival());
    let judge = &state.judge;
    let history = dialogue_history(&state.suitor_a, &state.suitor_b);

    format!(
        "You are {name}.\n\
         Your character sheet:\n{profile}\n\n\
         You are courting {judge_name}, whose character sheet is:\n{judge_profile}\n\n\
         Your rival is {rival_name}, whose character sheet is:\n{rival_profile}\n\n\
         {history}\n\
         ---\n\
         IMPORTANT SUDDEN EVENT: this just happened: \"{event}\"\n\
         ---\n\n\
         It is your turn to speak. Staying true to your personality, work the \
         sudden event into a single line that will win over {judge_name}. Be \
         natural, inventive, in character, and mindful of both your rival and \
         the judge's temperament. Output only your line, with no commentary.",
        name = suitor.name,
        profile = suitor.profile,
        judge_name = judge.name,
        judge_profile = judge.profile,
        rival_name = rival.name,
        rival_profile = rival.profile,
        history = history,
        event = event,
    )
}

/// The judge scores both lines. Asks for strict JSON matching
/// [`crate::types::JudgeEvaluation`].
pub fn judge_evaluation(state: &ShowState, event: &str, line_a: &str, line_b: &str) -> String {
    format!(
        "You are {judge_name}.\n\
         Your character sheet:\n{judge_profile}\n\n\
         A sudden event just happened: \"{event}\"\n\n\
         Right after it, both suitors made their move.\n\n\
         Suitor A ({a_name}) said: \"{line_a}\"\n\
         Suitor B ({b_name}) said: \"{line_b}\"\n\n\
         In line with your personality and values, and judging how each \
         reacted to the event, evaluate both performances. Score each from 1 \
         to 10 and explain your reasoning. Be incisive, stay in character, \
         and comment on whether they used the event cleverly.\n\n\
         Reply strictly in the following JSON format, with no other text:\n\
         {{\n\
           \"suitorA_score\": <score, number>,\n\
           \"suitorA_reasoning\": \"<verdict on A>\",\n\
           \"suitorB_score\": <score, number>,\n\
           \"suitorB_reasoning\": \"<verdict on B>\"\n\
         }}",
        judge_name = state.judge.name,
        judge_profile = state.judge.profile,
        a_name = state.suitor_a.name,
        b_name = state.suitor_b.name,
        line_a = line_a,
        line_b = line_b,
        event = event,
    )
}

/// Tie or winner framing for the final verdict. Tie gets its own wording.
pub fn verdict_context(state: &ShowState) -> String {
    let score_a = state.suitor_a.total_score;
    let score_b = state.suitor_b.total_score;

    if score_a == score_b {
        format!(
            "After {MAX_ROUNDS} rounds of conversation, the two suitors have \
             somehow ended in a dead tie at {score_a} points each, leaving \
             you with an agonizing decision."
        )
    } else {
        let winner = if score_a > score_b {
            &state.suitor_a
        } else {
            &state.suitor_b
        };
        format!(
            "After {MAX_ROUNDS} rounds of conversation, {} has come out \
             ahead with {} points.",
            winner.name,
            score_a.max(score_b)
        )
    }
}

/// The judge's closing speech: announce the choice and justify it.
pub fn final_verdict(state: &ShowState) -> String {
    format!(
        "You are {judge_name}. Your character sheet:\n{judge_profile}\n\n\
         {context}\n\n\
         The final scores:\n\
         - {a_name}: {score_a} points\n\
         - {b_name}: {score_b} points\n\n\
         Suitor A ({a_name})'s character sheet:\n{profile_a}\n\n\
         Suitor B ({b_name})'s character sheet:\n{profile_b}\n\n\
         Based on your personality, the totals, and everything that happened, \
         deliver your closing speech. In it you must:\n\
         1. Announce your final choice (or, in a tie, how you will decide).\n\
         2. Explain the choice in detail, tying their performances to your values.\n\
         3. Say something gracious to the other suitor (or to both).\n\
         Be moving, sincere, and in character. Output only the speech itself.",
        judge_name = state.judge.name,
        judge_profile = state.judge.profile,
        context = verdict_context(state),
        a_name = state.suitor_a.name,
        b_name = state.suitor_b.name,
        score_a = state.suitor_a.total_score,
        score_b = state.suitor_b.total_score,
        profile_a = state.suitor_a.profile,
        profile_b = state.suitor_b.profile,
    )
}

/// History up to and including the given line, for the inner monologue.
/// Stops right after the speaker's line so later rounds don't leak in.
pub fn history_up_to(state: &ShowState, role: Role, line: &str) -> String {
    let mut history = String::new();
    for (line_a, line_b) in state.suitor_a.dialogue.iter().zip(&state.suitor_b.dialogue) {
        history.push_str(&format!("{}: {}\n", state.suitor_a.name, line_a));
        if role == Role::SuitorA && line_a == line {
            break;
        }
        history.push_str(&format!("{}: {}\n", state.suitor_b.name, line_b));
        if role == Role::SuitorB && line_b == line {
            break;
        }
    }
    if history.is_empty() {
        history = "This is the opening of the conversation.".to_string();
    }
    history
}

/// Reveal what a suitor was really thinking when a given line was spoken.
pub fn inner_monologue(state: &ShowState, role: Role, line: &str) -> String {
    let suitor = state.character(role);
    let rival = state.character(role.rival());
    let history = history_up_to(state, role, line);

    format!(
        "You are a first-rate psychoanalyst and screenwriter. Analyze the \
         following situation in depth:\n\n\
         Speaker: {name}\n\
         Character sheet: {profile}\n\n\
         Courting: {judge_name} (sheet: {judge_profile})\n\
         Rival: {rival_name} (sheet: {rival_profile})\n\n\
         The moment: this had just happened: \"{event}\"\n\
         Relevant history:\n{history}\n\
         The line just spoken: \"{line}\"\n\n\
         Your task: in the first person (\"What I was thinking was...\"), \
         reveal {name}'s true thoughts, strategy, or feelings at the moment \
         of that line. Be sharp and true to the character. What motive drove \
         it? What effect was intended? How do they see the judge and the \
         rival? Output only the inner monologue, lean and forceful.",
        name = suitor.name,
        profile = suitor.profile,
        judge_name = state.judge.name,
        judge_profile = state.judge.profile,
        rival_name = rival.name,
        rival_profile = rival.profile,
        event = state.current_event,
        history = history,
        line = line,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JudgeEvaluation;

    fn state_with_rounds(rounds: usize) -> ShowState {
        let mut state = ShowState::new();
        state.suitor_a.profile = "I am a poet.".to_string();
        state.suitor_b.profile = "I am a pilot.".to_string();
        state.judge.profile = "I am hard to impress.".to_string();
        for i in 0..rounds {
            state.commit_round(
                format!("event {i}"),
                format!("a{i}"),
                format!("b{i}"),
                &JudgeEvaluation::neutral(),
            );
        }
        state
    }

    #[test]
    fn empty_history_uses_opener() {
        let state = state_with_rounds(0);
        assert_eq!(
            dialogue_history(&state.suitor_a, &state.suitor_b),
            HISTORY_OPENER
        );
    }

    #[test]
    fn history_alternates_a_then_b_per_round() {
        let state = state_with_rounds(3);
        let history = dialogue_history(&state.suitor_a, &state.suitor_b);
        let lines: Vec<&str> = history.lines().skip(1).collect();
        assert_eq!(
            lines,
            vec![
                "Suitor A: a0",
                "Suitor B: b0",
                "Suitor A: a1",
                "Suitor B: b1",
                "Suitor A: a2",
                "Suitor B: b2",
            ]
        );
    }

    #[test]
    fn suitor_turn_carries_full_history_and_event() {
        // Nothing gets truncated, however long the show runs.
        let state = state_with_rounds(5);
        let prompt = suitor_turn(&state, Role::SuitorA, "a violinist appears");
        for i in 0..5 {
            assert!(prompt.contains(&format!("a{i}")));
            assert!(prompt.contains(&format!("b{i}")));
        }
        assert!(prompt.contains("a violinist appears"));
        assert!(prompt.contains("I am a pilot."));
        assert!(prompt.contains("I am hard to impress."));
    }

    #[test]
    fn judge_prompt_names_both_lines() {
        let state = state_with_rounds(0);
        let prompt = judge_evaluation(&state, "sudden rain", "line a", "line b");
        assert!(prompt.contains("\"line a\""));
        assert!(prompt.contains("\"line b\""));
        assert!(prompt.contains("suitorA_score"));
        assert!(prompt.contains("suitorB_reasoning"));
    }

    #[test]
    fn verdict_context_tie_branch() {
        let mut state = state_with_rounds(5);
        state.suitor_a.total_score = 25;
        state.suitor_b.total_score = 25;
        let context = verdict_context(&state);
        assert!(context.contains("dead tie"));
        assert!(!context.contains("come out"));
    }

    #[test]
    fn verdict_context_winner_branch() {
        let mut state = state_with_rounds(5);
        state.suitor_a.total_score = 18;
        state.suitor_b.total_score = 31;
        let context = verdict_context(&state);
        assert!(context.contains("Suitor B"));
        assert!(context.contains("31"));
        assert!(!context.contains("tie"));
    }

    #[test]
    fn history_up_to_stops_at_speakers_line() {
        let state = state_with_rounds(3);
        let history = history_up_to(&state, Role::SuitorA, "a1");
        assert!(history.contains("a0"));
        assert!(history.contains("b0"));
        assert!(history.ends_with("Suitor A: a1\n"));
        assert!(!history.contains("b1"));
        assert!(!history.contains("a2"));
    }

    #[test]
    fn history_up_to_includes_a_line_before_b_stop() {
        let state = state_with_rounds(2);
        let history = history_up_to(&state, Role::SuitorB, "b0");
        assert!(history.ends_with("Suitor B: b0\n"));
        assert!(history.contains("a0"));
        assert!(!history.contains("a1"));
    }
}
