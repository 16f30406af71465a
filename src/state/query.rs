//! Share link query string.
//!
//! Every parameter is carried as a raw string, so that a single bad value only drops
//! itself. Numbers are rounded on the way out to keep the links short.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    core::limits,
    fmt::format_compact,
    prelude::*,
    quantity::{
        currency::NairaPerLiter,
        distance::{Kilometers, KilometersPerLiter},
        time::Hours,
        volume::LitersPerHour,
    },
    state::{Mode, State},
};

#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(rename = "fu", skip_serializing_if = "Option::is_none")]
    pub fuel_usage: Option<String>,

    #[serde(rename = "fd", skip_serializing_if = "Option::is_none")]
    pub fuel_distance: Option<String>,

    #[serde(rename = "fvp", skip_serializing_if = "Option::is_none")]
    pub fuel_vehicle: Option<String>,

    #[serde(rename = "fef", skip_serializing_if = "Option::is_none")]
    pub fuel_efficiency: Option<String>,

    #[serde(rename = "ffp", skip_serializing_if = "Option::is_none")]
    pub fuel_price: Option<String>,

    #[serde(rename = "fpd", skip_serializing_if = "Option::is_none")]
    pub fuel_price_date: Option<String>,

    #[serde(rename = "gp", skip_serializing_if = "Option::is_none")]
    pub generator_pattern: Option<String>,

    #[serde(rename = "gpr", skip_serializing_if = "Option::is_none")]
    pub generator_preset: Option<String>,

    #[serde(rename = "gh", skip_serializing_if = "Option::is_none")]
    pub generator_hours: Option<String>,

    #[serde(rename = "gl", skip_serializing_if = "Option::is_none")]
    pub generator_load: Option<String>,

    #[serde(rename = "glph", skip_serializing_if = "Option::is_none")]
    pub generator_rate: Option<String>,

    #[serde(rename = "gfp", skip_serializing_if = "Option::is_none")]
    pub generator_price: Option<String>,

    #[serde(rename = "gpd", skip_serializing_if = "Option::is_none")]
    pub generator_price_date: Option<String>,
}

impl Query {
    /// Parse the bare query string.
    ///
    /// The first occurrence of a repeated parameter wins. An unparseable query is ignored
    /// as a whole.
    #[instrument(skip_all)]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let query = query
            .split('&')
            .unique_by(|pair| pair.split_once('=').map_or(*pair, |(key, _)| key))
            .join("&");
        serde_qs::from_str(&query).unwrap_or_else(|error| {
            warn!(error = format!("{error:#}"), "Ignoring the unreadable query");
            Self::default()
        })
    }

    /// Apply the recognised parameters over the state.
    ///
    /// Numbers are clamped into the valid ranges, while malformed numbers and dates
    /// leave the fields intact.
    pub fn apply_to(&self, mut state: State) -> State {
        if let Some(mode) = value(self.mode.as_ref()) {
            match Mode::from_tag(mode) {
                Some(mode) => state.mode = mode,
                None => debug!(mode, "Ignoring the unknown mode"),
            }
        }

        let fuel = &mut state.fuel;
        if let Some(usage) = value(self.fuel_usage.as_ref()) {
            fuel.usage = usage.into();
        }
        if let Some(distance) = number(self.fuel_distance.as_ref()) {
            fuel.set_distance(Kilometers(distance));
        }
        if let Some(vehicle) = value(self.fuel_vehicle.as_ref()) {
            fuel.vehicle = vehicle.into();
        }
        if let Some(efficiency) = number(self.fuel_efficiency.as_ref()) {
            fuel.set_efficiency(KilometersPerLiter(efficiency));
        }
        if let Some(price) = number(self.fuel_price.as_ref()) {
            fuel.set_price(NairaPerLiter(price));
        }
        if let Some(date) = value(self.fuel_price_date.as_ref()).and_then(|date| date.parse().ok()) {
            fuel.price_date = Some(date);
        }

        let generator = &mut state.generator;
        if let Some(pattern) = value(self.generator_pattern.as_ref()) {
            generator.pattern = pattern.into();
        }
        if let Some(preset) = value(self.generator_preset.as_ref()) {
            generator.preset = preset.into();
        }
        if let Some(hours) = number(self.generator_hours.as_ref()) {
            generator.set_hours_per_day(Hours(hours));
        }
        if let Some(load) = value(self.generator_load.as_ref()) {
            generator.load = load.into();
        }
        if let Some(rate) = number(self.generator_rate.as_ref()) {
            // Not through the setter, which would turn the preset into custom.
            generator.rate = limits::CONSUMPTION_RATE.clamp_or(LitersPerHour(rate), generator.rate);
        }
        if let Some(price) = number(self.generator_price.as_ref()) {
            generator.set_price(NairaPerLiter(price));
        }
        if let Some(date) =
            value(self.generator_price_date.as_ref()).and_then(|date| date.parse().ok())
        {
            generator.price_date = Some(date);
        }

        state
    }

    /// Render the query string, in the stable field order.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_else(|error| {
            error!(error = format!("{error:#}"), "Failed to encode the query");
            String::new()
        })
    }
}

impl From<&Url> for Query {
    fn from(link: &Url) -> Self {
        link.query().map_or_else(Self::default, Self::parse)
    }
}

impl From<&State> for Query {
    fn from(state: &State) -> Self {
        let (fuel, generator) = (&state.fuel, &state.generator);
        Self {
            mode: Some(state.mode.as_tag().to_owned()),
            fuel_usage: Some(fuel.usage.to_string()),
            fuel_distance: Some(format_compact(fuel.distance.round_to(1).0, 1)),
            fuel_vehicle: Some(fuel.vehicle.to_string()),
            fuel_efficiency: Some(format_compact(fuel.efficiency.round_to(1).0, 1)),
            fuel_price: Some(format_compact(fuel.price.round_to(0).0, 0)),
            fuel_price_date: fuel.price_date.map(|date| date.to_string()),
            generator_pattern: Some(generator.pattern.to_string()),
            generator_preset: Some(generator.preset.to_string()),
            generator_hours: Some(format_compact(generator.hours_per_day.round_to(1).0, 1)),
            generator_load: Some(generator.load.to_string()),
            generator_rate: Some(format_compact(generator.rate.round_to(2).0, 2)),
            generator_price: Some(format_compact(generator.price.round_to(0).0, 0)),
            generator_price_date: generator.price_date.map(|date| date.to_string()),
        }
    }
}

/// Trimmed non-empty value.
fn value(raw: Option<&String>) -> Option<&str> {
    raw.map(|raw| raw.trim()).filter(|value| !value.is_empty())
}

/// Parsed number, including the non-finite ones which the setters reject.
fn number(raw: Option<&String>) -> Option<f64> {
    value(raw)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::core::{generator::GeneratorPreset, usage::UsageFrequency};

    #[test]
    fn test_from_link() -> Result {
        let query = Query::from(&Url::parse("https://fuelwyse.app/?mode=gen&fd=20#top")?);
        assert_eq!(query.mode.as_deref(), Some("gen"));
        assert_eq!(query.fuel_distance.as_deref(), Some("20"));
        assert_eq!(Query::from(&Url::parse("https://fuelwyse.app/")?), Query::default());
        Ok(())
    }

    #[test]
    fn test_query_in_fragment_is_not_read() -> Result {
        let query = Query::from(&Url::parse("https://fuelwyse.app/#calc?fd=20")?);
        assert_eq!(query, Query::default());
        Ok(())
    }

    #[test]
    fn test_bare_query() {
        assert_eq!(Query::parse("fd=20").fuel_distance.as_deref(), Some("20"));
        assert_eq!(Query::parse("?fd=20").fuel_distance.as_deref(), Some("20"));
        assert_eq!(Query::parse(""), Query::default());
    }

    #[test]
    fn test_first_repeated_parameter_wins() {
        let query = Query::parse("?fd=20&mode=gen&fd=30");
        assert_eq!(query.fuel_distance.as_deref(), Some("20"));
        assert_eq!(query.mode.as_deref(), Some("gen"));
    }

    #[test]
    fn test_unknown_parameters_are_ignored() {
        let query = Query::parse("?utm_source=whatsapp&fu=weekly");
        assert_eq!(query.fuel_usage.as_deref(), Some("weekly"));
    }

    #[test]
    fn test_mode_is_closed() {
        let state = Query::parse("?mode=boat").apply_to(State::default());
        assert_eq!(state.mode, Mode::Fuel);
        let state = Query::parse("?mode=gen").apply_to(State::default());
        assert_eq!(state.mode, Mode::Generator);
    }

    #[test]
    fn test_malformed_numbers_are_skipped() {
        let state = Query::parse("?fd=far&fef=&ffp=NaN&gh=%2012%20").apply_to(State::default());
        assert_eq!(state.fuel.distance, Kilometers(30.0));
        assert_eq!(state.fuel.efficiency, KilometersPerLiter(14.0));
        assert_eq!(state.fuel.price, NairaPerLiter(700.0));
        assert_eq!(state.generator.hours_per_day, Hours(12.0));
    }

    #[test]
    fn test_numbers_are_clamped() {
        let state = Query::parse("?fd=-3&fef=0&gh=48&glph=500&gfp=0.5").apply_to(State::default());
        assert_eq!(state.fuel.distance, Kilometers::ZERO);
        assert_eq!(state.fuel.efficiency, KilometersPerLiter(0.1));
        assert_eq!(state.generator.hours_per_day, Hours(24.0));
        assert_eq!(state.generator.rate, LitersPerHour(99.0));
        assert_eq!(state.generator.price, NairaPerLiter(1.0));
    }

    #[test]
    fn test_rate_keeps_preset() {
        let state = Query::parse("?gpr=2.5&glph=0.95").apply_to(State::default());
        assert_eq!(state.generator.preset, GeneratorPreset::Kva25);
        assert_eq!(state.generator.rate, LitersPerHour(0.95));
    }

    #[test]
    fn test_tags_are_not_validated() {
        let state = Query::parse("?fu=hourly").apply_to(State::default());
        assert_eq!(state.fuel.usage, UsageFrequency::Other("hourly".to_owned()));
    }

    #[test]
    fn test_dates() {
        let state = Query::parse("?fpd=2026-10-16&gpd=tomorrow").apply_to(State::default());
        assert_eq!(state.fuel.price_date, NaiveDate::from_ymd_opt(2026, 10, 16));
        assert_eq!(state.generator.price_date, None);
    }

    #[test]
    fn test_encode_defaults() {
        assert_eq!(
            State::default().encode(),
            "mode=fuel&fu=daily&fd=30&fvp=small&fef=14&ffp=700\
             &gp=daily&gpr=0.8&gh=4&gl=medium&glph=0.35&gfp=700",
        );
    }

    #[test]
    fn test_encode_rounds() {
        let mut state = State::default();
        state.fuel.distance = Kilometers(12.345_678);
        state.fuel.price = NairaPerLiter(812.6);
        state.generator.rate = LitersPerHour(0.333_333_333);
        let query = Query::from(&state);
        assert_eq!(query.fuel_distance.as_deref(), Some("12.3"));
        assert_eq!(query.fuel_price.as_deref(), Some("813"));
        assert_eq!(query.generator_rate.as_deref(), Some("0.33"));
        assert_eq!(query.fuel_price_date, None);
    }

    #[test]
    fn test_encode_rounds_ties_up() {
        let mut state = State::default();
        state.fuel.distance = Kilometers(2.25);
        state.fuel.price = NairaPerLiter(812.5);
        state.generator.rate = LitersPerHour(0.125);
        let query = Query::from(&state);
        assert_eq!(query.fuel_distance.as_deref(), Some("2.3"));
        assert_eq!(query.fuel_price.as_deref(), Some("813"));
        assert_eq!(query.generator_rate.as_deref(), Some("0.13"));
    }
}
