//! Estimator state and its external representations.
//!
//! The state is kept in sync with a persisted JSON blob (last session) and
//! a share link query (explicit intent). The query always wins over the blob.

mod persist;
pub mod query;

use serde::{Deserialize, Serialize};

pub use self::query::Query;
use crate::{
    core::{
        comparison::Comparison,
        parameters::{FuelParameters, GeneratorParameters},
        projection::{project_fuel, project_generator},
    },
    prelude::*,
};

/// Active estimator.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Mode {
    /// Vehicle fuel.
    #[default]
    #[serde(rename = "fuel")]
    Fuel,

    /// Generator fuel.
    #[serde(rename = "gen")]
    #[value(name = "gen")]
    Generator,
}

impl Mode {
    /// Parse the share link value, which only knows about the two modes.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "fuel" => Some(Self::Fuel),
            "gen" => Some(Self::Generator),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Fuel => "fuel",
            Self::Generator => "gen",
        }
    }
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Theme {
    #[default]
    #[serde(rename = "dark")]
    Dark,

    #[serde(rename = "light")]
    Light,
}

/// Frozen parameter snapshots for the before-and-after comparison.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Baseline {
    pub fuel: Option<FuelParameters>,

    #[serde(rename = "gen")]
    pub generator: Option<GeneratorParameters>,
}

#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct State {
    pub theme: Theme,

    pub mode: Mode,

    pub fuel: FuelParameters,

    #[serde(rename = "gen")]
    pub generator: GeneratorParameters,

    pub baseline: Baseline,
}

impl State {
    /// Decode the state from the persisted blob and the share link query.
    ///
    /// Every path yields a valid state: a broken blob is discarded, and the invalid
    /// query parameters are skipped.
    #[instrument(skip_all)]
    pub fn decode(blob: Option<&str>, query: &Query) -> Self {
        let state = blob.map_or_else(Self::default, persist::restore);
        query.apply_to(state)
    }

    /// Full snapshot for the persistent storage, without any rounding.
    pub fn persist(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize the state")
    }

    /// Share link query, rounded for readability.
    #[must_use]
    pub fn encode(&self) -> String {
        Query::from(self).to_query_string()
    }

    /// Freeze the current parameters of the mode as its baseline.
    pub fn set_baseline(&mut self, mode: Mode) {
        match mode {
            Mode::Fuel => self.baseline.fuel = Some(self.fuel.clone()),
            Mode::Generator => self.baseline.generator = Some(self.generator.clone()),
        }
    }

    pub fn clear_baseline(&mut self, mode: Mode) {
        match mode {
            Mode::Fuel => self.baseline.fuel = None,
            Mode::Generator => self.baseline.generator = None,
        }
    }

    /// Compare the monthly cost against the baseline, if any.
    pub fn compare(&self, mode: Mode) -> Option<Comparison> {
        match mode {
            Mode::Fuel => self.baseline.fuel.as_ref().map(|baseline| Comparison {
                before: project_fuel(baseline).costs.monthly,
                now: project_fuel(&self.fuel).costs.monthly,
            }),
            Mode::Generator => self.baseline.generator.as_ref().map(|baseline| Comparison {
                before: project_generator(baseline).costs.monthly,
                now: project_generator(&self.generator).costs.monthly,
            }),
        }
    }
}
