use anyhow::Result;
use clap::{Parser, Subcommand};
use finder_core::{Config, ResultState, Session, activate_result, provider_from_config};
use inquire::{Confirm, InquireError, Text};

use crate::views;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-finder", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Interactive city search (the default when no subcommand is given).
    Search {
        /// City to look up first, skipping the initial prompt.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Search { city }) => search(city).await,
            None => search(None).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match Text::new("OpenWeather API key:").prompt() {
        Ok(key) => key,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => return Ok(()),
        Err(err) => return Err(err.into()),
    };

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

/// The input → result loop. Each iteration is one full cycle: prompt,
/// validate, fetch, render, ask whether to search again.
async fn search(initial_city: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    let mut session = Session::new();
    let mut pending = initial_city;

    loop {
        // Input view.
        let input = match pending.take() {
            Some(city) => city,
            None => match Text::new("Enter city name").prompt() {
                Ok(input) => input,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            },
        };

        if let Err(err) = session.submit(&input) {
            println!("{err}");
            continue;
        }

        // Submit stored the validated query; keep a copy for the card header.
        let Some(city) = session.city().cloned() else {
            continue;
        };

        // Result view.
        println!("{}", views::loading());
        let outcome = activate_result(&session, provider.as_ref()).await;

        match session.accept(outcome) {
            Some(ResultState::Loaded(snapshot)) => {
                println!("{}", views::card(&city, &snapshot));
            }
            Some(ResultState::Unavailable) => println!("{}", views::unavailable()),
            Some(ResultState::Redirect) | None => {
                session.reset();
                continue;
            }
        }

        // The "Search Again" control.
        let again = match Confirm::new("Search again?").with_default(true).prompt() {
            Ok(again) => again,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        if !again {
            return Ok(());
        }

        session.reset();
    }
}
