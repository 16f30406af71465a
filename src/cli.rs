mod baseline;
mod fuel;
mod generator;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use url::Url;

use crate::{
    cli::{baseline::BaselineArgs, fuel::FuelArgs, generator::GeneratorArgs},
    prelude::*,
    session::Session,
    state::{Mode, Theme},
    storage::Storage,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// File which keeps the state between the runs.
    #[clap(long = "state-file", default_value = "fuelwyse.json", env = "FUELWYSE_STATE_FILE")]
    pub state_file: PathBuf,

    /// Opened share link, its parameters take precedence over the saved state.
    #[clap(long, env = "FUELWYSE_URL")]
    pub url: Option<Url>,

    /// Base address of the share links.
    #[clap(long = "share-url", default_value = "https://fuelwyse.app/", env = "FUELWYSE_SHARE_URL")]
    pub share_url: Url,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the estimate of the active mode.
    #[clap(name = "show")]
    Show,

    /// Edit the vehicle fuel parameters and switch to the fuel estimate.
    #[clap(name = "fuel")]
    Fuel(Box<FuelArgs>),

    /// Edit the generator parameters and switch to the generator estimate.
    #[clap(name = "gen")]
    Generator(Box<GeneratorArgs>),

    /// Freeze or drop the parameters to compare against.
    #[clap(name = "baseline")]
    Baseline(BaselineArgs),

    /// Print the share link.
    #[clap(name = "share")]
    Share {
        /// Print the plain-text summary with the link instead.
        #[clap(long)]
        text: bool,
    },

    /// Switch the color theme.
    #[clap(name = "theme")]
    Theme {
        #[clap(value_enum)]
        theme: Theme,
    },

    /// Start over with the defaults.
    #[clap(name = "reset")]
    Reset,
}

/// What to print once the command is done.
#[must_use]
pub enum Output {
    Estimate,
    Text(String),
}

impl Command {
    #[instrument(skip_all)]
    pub fn run<S: Storage>(self, session: &mut Session<S>, today: NaiveDate) -> Output {
        match self {
            Self::Show => Output::Estimate,
            Self::Fuel(args) => {
                session.set_mode(Mode::Fuel);
                args.apply(session.fuel_mut(), today);
                Output::Estimate
            }
            Self::Generator(args) => {
                session.set_mode(Mode::Generator);
                args.apply(session.generator_mut(), today);
                Output::Estimate
            }
            Self::Baseline(args) => {
                args.run(session);
                Output::Estimate
            }
            Self::Share { text: false } => Output::Text(session.share_url().into()),
            Self::Share { text: true } => Output::Text(session.share_text()),
            Self::Theme { theme } => {
                session.set_theme(theme);
                Output::Estimate
            }
            Self::Reset => {
                session.reset();
                Output::Estimate
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::{quantity::distance::Kilometers, storage::MemoryStorage};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn session() -> Session<MemoryStorage> {
        Session::builder()
            .storage(MemoryStorage::default())
            .base_url(Url::parse("https://fuelwyse.app/").unwrap())
            .boot()
    }

    #[test]
    fn test_verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_fuel_switches_mode() -> Result {
        let mut session = session();
        session.set_mode(Mode::Generator);
        let args = Args::try_parse_from(["fuelwyse", "fuel", "--distance", "12"])?;
        let _ = args.command.run(&mut session, today());
        assert_eq!(session.state().mode, Mode::Fuel);
        assert_eq!(session.state().fuel.distance, Kilometers(12.0));
        Ok(())
    }

    #[test]
    fn test_share() -> Result {
        let mut session = session();
        let args = Args::try_parse_from(["fuelwyse", "share"])?;
        match args.command.run(&mut session, today()) {
            Output::Text(link) => assert!(link.starts_with("https://fuelwyse.app/?mode=fuel&")),
            Output::Estimate => panic!("the link is expected"),
        }
        Ok(())
    }

    #[test]
    fn test_links_are_parsed() -> Result {
        let args = Args::try_parse_from([
            "fuelwyse",
            "--url",
            "https://fuelwyse.app/?fd=20#calc",
            "--share-url",
            "https://example.com/fuel/",
            "show",
        ])?;
        assert_eq!(args.url.as_ref().and_then(Url::query), Some("fd=20"));
        assert_eq!(args.share_url.path(), "/fuel/");
        assert!(Args::try_parse_from(["fuelwyse", "--url", "fuelwyse.app?fd=20", "show"]).is_err());
        Ok(())
    }

    #[test]
    fn test_baseline_and_theme() -> Result {
        let mut session = session();
        let _ = Args::try_parse_from(["fuelwyse", "baseline", "set", "gen"])?
            .command
            .run(&mut session, today());
        assert!(session.state().baseline.generator.is_some());
        let _ = Args::try_parse_from(["fuelwyse", "theme", "light"])?
            .command
            .run(&mut session, today());
        assert_eq!(session.state().theme, Theme::Light);
        Ok(())
    }
}
