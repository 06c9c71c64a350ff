//! Console rendering. Pure output sink; nothing here reads show state back.

use courtship_core::{Role, RoundResult, ShowState};

const BAR_WIDTH: usize = 25;

pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn status(&self, text: &str) {
        println!("\n>> {text}");
    }

    pub fn profile_card(&self, role: Role, profile: &str) {
        println!("\n┌─ {} ─────", role.display_name());
        for line in profile.lines() {
            println!("│ {line}");
        }
        println!("└──────────");
    }

    pub fn event_banner(&self, round: u32, event: &str) {
        println!("\n═══ Round {round} ═══");
        println!("⚡ {event}");
    }

    pub fn dialogue(&self, role: Role, line: &str) {
        println!("\n{}: \u{201c}{line}\u{201d}", role.display_name());
    }

    pub fn round_scores(&self, result: &RoundResult) {
        let eval = &result.evaluation;
        println!("\n--- Round {} scores ---", result.round);
        println!(
            "{}: {}/10  \u{201c}{}\u{201d}",
            Role::SuitorA.display_name(),
            eval.suitor_a_score,
            eval.suitor_a_reasoning
        );
        println!(
            "{}: {}/10  \u{201c}{}\u{201d}",
            Role::SuitorB.display_name(),
            eval.suitor_b_score,
            eval.suitor_b_reasoning
        );
    }

    pub fn totals(&self, state: &ShowState) {
        for role in [Role::SuitorA, Role::SuitorB] {
            println!(
                "{} total: {:>3}  {}",
                role.display_name(),
                state.character(role).total_score,
                score_bar(state.score_percentage(role)),
            );
        }
    }

    pub fn verdict(&self, verdict: &str) {
        println!("\n🏆 ═══ The Final Verdict ═══ 🏆\n");
        println!("{verdict}");
    }

    pub fn monologue(&self, role: Role, monologue: &str) {
        println!("\n({} thinks: {monologue})", role.display_name());
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-width progress bar for a percentage already clamped to [0,100].
fn score_bar(percentage: f64) -> String {
    let filled = (percentage / 100.0 * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}
