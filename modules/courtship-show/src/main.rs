use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use courtship_core::{Config, Role, MAX_ROUNDS};
use courtship_show::{ConsolePresenter, Director};
use gemini_client::GeminiClient;

#[derive(Parser)]
#[command(name = "courtship", about = "An AI-scripted dating show in your terminal")]
struct Args {
    /// Override the Gemini model from GEMINI_MODEL / the default.
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("courtship=info".parse()?))
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    let model = args.model.unwrap_or(config.gemini_model);
    info!(model, "courtship starting");

    let client = GeminiClient::new(&config.gemini_api_key, &model);
    let mut director = Director::new(client);
    let presenter = ConsolePresenter::new();

    presenter.status("Welcome to the show. First, the three characters.");

    for role in [Role::SuitorA, Role::SuitorB, Role::Judge] {
        loop {
            let description = read_line(&format!(
                "Describe {} in a sentence or two: ",
                role.display_name()
            ))?;
            match director.generate_profile(role, &description).await {
                Ok(profile) => {
                    presenter.profile_card(role, &profile);
                    break;
                }
                Err(err) => presenter.status(&format!("Profile generation failed: {err}")),
            }
        }
    }

    presenter.status(&format!(
        "All characters are ready. {MAX_ROUNDS} rounds ahead."
    ));

    while director.state().rounds_remaining() {
        let round = director.state().round_count + 1;
        read_line(&format!("Press Enter to start round {round}... "))?;
        presenter.status(&format!("Round {round} underway..."));

        match director.play_round().await {
            Ok(result) => {
                presenter.event_banner(result.round, &result.event);
                presenter.dialogue(Role::SuitorA, &result.dialogue_a);
                presenter.dialogue(Role::SuitorB, &result.dialogue_b);
                presenter.round_scores(&result);
                presenter.totals(director.state());
                offer_monologues(&director, &presenter, &result).await?;
            }
            Err(err) => {
                presenter.status(&format!("Round failed: {err}. Press Enter to retry."));
            }
        }
    }

    presenter.status("All rounds are played. Time for the final verdict.");
    loop {
        read_line("Press Enter for the verdict... ")?;
        match director.finale().await {
            Ok(verdict) => {
                presenter.verdict(&verdict);
                break;
            }
            Err(err) => presenter.status(&format!("Verdict failed: {err}. Press Enter to retry.")),
        }
    }

    Ok(())
}

/// Post-round prompt: peek inside a suitor's head, or move on.
async fn offer_monologues<G: courtship_show::TextGenerator>(
    director: &Director<G>,
    presenter: &ConsolePresenter,
    result: &courtship_core::RoundResult,
) -> Result<()> {
    loop {
        let choice = read_line("Type 'a' or 'b' to hear what a suitor was thinking, or Enter to continue: ")?;
        let (role, line) = match choice.as_str() {
            "a" | "A" => (Role::SuitorA, &result.dialogue_a),
            "b" | "B" => (Role::SuitorB, &result.dialogue_b),
            _ => return Ok(()),
        };
        match director.monologue(role, line).await {
            Ok(monologue) => presenter.monologue(role, &monologue),
            Err(err) => presenter.status(&format!("Couldn't read their mind: {err}")),
        }
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}
