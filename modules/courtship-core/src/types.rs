use serde::{Deserialize, Serialize};

/// Number of rounds in a full show.
pub const MAX_ROUNDS: u32 = 5;

/// Per-round score ceiling. A contract with the judge prompt, not something
/// enforced locally.
pub const MAX_ROUND_SCORE: u32 = 10;

/// Event used when event generation fails. The round continues with this.
pub const FALLBACK_EVENT: &str =
    "A light drizzle starts to fall, and the smell of rain on warm pavement fills the air.";

/// Reasoning attached to the neutral fallback evaluation.
pub const FALLBACK_REASONING: &str =
    "The judge's notes came back garbled, so both suitors get a courtesy score this round.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    SuitorA,
    SuitorB,
    Judge,
}

impl Role {
    pub fn display_name(self) -> &'static str {
        match self {
            Role::SuitorA => "Suitor A",
            Role::SuitorB => "Suitor B",
            Role::Judge => "The Judge",
        }
    }

    /// The suitor competing against this one. Panics on the judge.
    pub fn rival(self) -> Role {
        match self {
            Role::SuitorA => Role::SuitorB,
            Role::SuitorB => Role::SuitorA,
            Role::Judge => unreachable!("the judge has no rival"),
        }
    }

    pub fn is_suitor(self) -> bool {
        matches!(self, Role::SuitorA | Role::SuitorB)
    }
}

/// One of the three personas on stage.
#[derive(Debug, Clone)]
pub struct Character {
    pub name: &'static str,
    /// User-supplied seed text, empty until submitted.
    pub description: String,
    /// AI-expanded biography, empty until generated.
    pub profile: String,
    /// One utterance per round spoken. Suitors only; stays empty for the judge.
    pub dialogue: Vec<String>,
    pub total_score: u32,
}

impl Character {
    pub fn new(role: Role) -> Self {
        Self {
            name: role.display_name(),
            description: String::new(),
            profile: String::new(),
            dialogue: Vec::new(),
            total_score: 0,
        }
    }
}

/// What the judge returns each round. Wire field names follow the JSON the
/// judge prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeEvaluation {
    #[serde(rename = "suitorA_score")]
    pub suitor_a_score: u32,
    #[serde(rename = "suitorA_reasoning")]
    pub suitor_a_reasoning: String,
    #[serde(rename = "suitorB_score")]
    pub suitor_b_score: u32,
    #[serde(rename = "suitorB_reasoning")]
    pub suitor_b_reasoning: String,
}

impl JudgeEvaluation {
    /// Neutral stand-in used when the judge's JSON cannot be decoded.
    pub fn neutral() -> Self {
        Self {
            suitor_a_score: 5,
            suitor_a_reasoning: FALLBACK_REASONING.to_string(),
            suitor_b_score: 5,
            suitor_b_reasoning: FALLBACK_REASONING.to_string(),
        }
    }
}

/// Everything produced by one completed round. Ephemeral; the durable bits
/// have already been folded into the show state by the time this is returned.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub round: u32,
    pub event: String,
    pub dialogue_a: String,
    pub dialogue_b: String,
    pub evaluation: JudgeEvaluation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_decodes_wire_names() {
        let raw = r#"{
            "suitorA_score": 7,
            "suitorA_reasoning": "bold",
            "suitorB_score": 3,
            "suitorB_reasoning": "flat"
        }"#;
        let eval: JudgeEvaluation = serde_json::from_str(raw).unwrap();
        assert_eq!(eval.suitor_a_score, 7);
        assert_eq!(eval.suitor_b_score, 3);
        assert_eq!(eval.suitor_b_reasoning, "flat");
    }

    #[test]
    fn neutral_fallback_is_five_five() {
        let eval = JudgeEvaluation::neutral();
        assert_eq!(eval.suitor_a_score, 5);
        assert_eq!(eval.suitor_b_score, 5);
        assert_eq!(eval.suitor_a_reasoning, eval.suitor_b_reasoning);
    }

    #[test]
    fn rival_swaps_suitors() {
        assert_eq!(Role::SuitorA.rival(), Role::SuitorB);
        assert_eq!(Role::SuitorB.rival(), Role::SuitorA);
    }
}
