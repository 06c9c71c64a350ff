use thiserror::Error;

use crate::types::Role;

#[derive(Debug, Error)]
pub enum ShowError {
    #[error("{} needs a non-empty description before a profile can be written", .0.display_name())]
    EmptyDescription(Role),

    #[error("all three profiles must be generated before the first round")]
    ProfilesNotReady,

    #[error("a round is already in progress")]
    RoundInFlight,

    #[error("all rounds are played; only the final verdict remains")]
    RoundsExhausted,

    #[error("the final verdict needs all {0} rounds played first")]
    ShowStillRunning(u32),

    #[error("the show is over; reload to start a new one")]
    ShowFinished,

    #[error("no such line spoken by {}", .0.display_name())]
    UnknownLine(Role),
}
