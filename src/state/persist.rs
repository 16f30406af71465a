//! Lenient reader of the persisted state blob.
//!
//! The blob is read into a patch where every field is optional, and a field which fails
//! to parse is dropped on its own instead of spoiling the entire blob. The patch is then
//! applied over the defaults.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, NoneAsEmptyString, PickFirst, serde_as};

use crate::{
    core::{
        generator::{GeneratorPreset, LoadLevel},
        limits,
        parameters::{FuelParameters, GeneratorParameters},
        pattern::UsagePattern,
        usage::UsageFrequency,
        vehicle::VehiclePreset,
    },
    prelude::*,
    quantity::{
        currency::NairaPerLiter,
        distance::{Kilometers, KilometersPerLiter},
        time::Hours,
        volume::LitersPerHour,
    },
    state::{Baseline, Mode, State, Theme},
};

/// Restore the state from the blob, falling back to the defaults if it is unreadable.
pub fn restore(blob: &str) -> State {
    match serde_json::from_str::<StatePatch>(blob) {
        Ok(patch) => patch.into(),
        Err(error) => {
            warn!(error = format!("{error:#}"), "Discarding the unreadable state");
            State::default()
        }
    }
}

#[serde_as]
#[derive(Default, Deserialize)]
#[serde(default)]
struct StatePatch {
    #[serde_as(as = "DefaultOnError")]
    theme: Option<Theme>,

    #[serde_as(as = "DefaultOnError")]
    mode: Option<Mode>,

    #[serde_as(as = "DefaultOnError")]
    fuel: Option<FuelPatch>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(rename = "gen")]
    generator: Option<GeneratorPatch>,

    #[serde_as(as = "DefaultOnError")]
    baseline: Option<BaselinePatch>,
}

impl From<StatePatch> for State {
    fn from(patch: StatePatch) -> Self {
        let mut state = Self::default();
        if let Some(theme) = patch.theme {
            state.theme = theme;
        }
        if let Some(mode) = patch.mode {
            state.mode = mode;
        }
        if let Some(fuel) = patch.fuel {
            fuel.apply_to(&mut state.fuel);
        }
        if let Some(generator) = patch.generator {
            generator.apply_to(&mut state.generator);
        }
        if let Some(baseline) = patch.baseline {
            state.baseline = baseline.into();
        }
        state
    }
}

#[serde_as]
#[derive(Default, Deserialize)]
#[serde(default)]
struct BaselinePatch {
    #[serde_as(as = "DefaultOnError")]
    fuel: Option<FuelPatch>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(rename = "gen")]
    generator: Option<GeneratorPatch>,
}

impl From<BaselinePatch> for Baseline {
    fn from(patch: BaselinePatch) -> Self {
        Self {
            fuel: patch.fuel.map(|patch| {
                let mut fuel = FuelParameters::default();
                patch.apply_to(&mut fuel);
                fuel
            }),
            generator: patch.generator.map(|patch| {
                let mut generator = GeneratorParameters::default();
                patch.apply_to(&mut generator);
                generator
            }),
        }
    }
}

/// Numbers are accepted both as JSON numbers and as numeric strings.
#[serde_as]
#[derive(Default, Deserialize)]
#[serde(default)]
struct FuelPatch {
    #[serde_as(as = "DefaultOnError")]
    usage: Option<UsageFrequency>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(rename = "distanceKm")]
    distance: Option<f64>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(rename = "vehiclePreset")]
    vehicle: Option<VehiclePreset>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(rename = "efficiencyKmPerL")]
    efficiency: Option<f64>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(rename = "fuelPrice")]
    price: Option<f64>,

    #[serde_as(as = "DefaultOnError<NoneAsEmptyString>")]
    #[serde(rename = "fuelPriceDate")]
    price_date: Option<NaiveDate>,
}

impl FuelPatch {
    fn apply_to(self, fuel: &mut FuelParameters) {
        if let Some(usage) = self.usage {
            fuel.usage = usage;
        }
        if let Some(distance) = self.distance {
            fuel.distance = limits::DISTANCE.clamp_or(Kilometers(distance), limits::restored::DISTANCE);
        }
        if let Some(vehicle) = self.vehicle {
            fuel.vehicle = vehicle;
        }
        if let Some(efficiency) = self.efficiency {
            fuel.efficiency = limits::EFFICIENCY
                .clamp_or(KilometersPerLiter(efficiency), limits::restored::EFFICIENCY);
        }
        if let Some(price) = self.price {
            fuel.price = limits::FUEL_PRICE.clamp_or(NairaPerLiter(price), limits::restored::FUEL_PRICE);
        }
        fuel.price_date = self.price_date;
    }
}

#[serde_as]
#[derive(Default, Deserialize)]
#[serde(default)]
struct GeneratorPatch {
    #[serde_as(as = "DefaultOnError")]
    pattern: Option<UsagePattern>,

    #[serde_as(as = "DefaultOnError")]
    preset: Option<GeneratorPreset>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(rename = "hoursPerDay")]
    hours_per_day: Option<f64>,

    #[serde_as(as = "DefaultOnError")]
    load: Option<LoadLevel>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(rename = "litresPerHour")]
    rate: Option<f64>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(rename = "fuelPrice")]
    price: Option<f64>,

    #[serde_as(as = "DefaultOnError<NoneAsEmptyString>")]
    #[serde(rename = "fuelPriceDate")]
    price_date: Option<NaiveDate>,
}

impl GeneratorPatch {
    fn apply_to(self, generator: &mut GeneratorParameters) {
        if let Some(pattern) = self.pattern {
            generator.pattern = pattern;
        }
        if let Some(preset) = self.preset {
            generator.preset = preset;
        }
        if let Some(hours) = self.hours_per_day {
            generator.hours_per_day =
                limits::HOURS_PER_DAY.clamp_or(Hours(hours), limits::restored::HOURS_PER_DAY);
        }
        if let Some(load) = self.load {
            generator.load = load;
        }
        if let Some(rate) = self.rate {
            generator.rate = limits::CONSUMPTION_RATE
                .clamp_or(LitersPerHour(rate), limits::restored::CONSUMPTION_RATE);
        }
        if let Some(price) = self.price {
            generator.price =
                limits::FUEL_PRICE.clamp_or(NairaPerLiter(price), limits::restored::FUEL_PRICE);
        }
        generator.price_date = self.price_date;
    }
}
