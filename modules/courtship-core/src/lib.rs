pub mod config;
pub mod error;
pub mod prompts;
pub mod state;
pub mod types;

pub use config::Config;
pub use error::ShowError;
pub use state::{Phase, ShowState};
pub use types::*;
