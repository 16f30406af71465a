use chrono::NaiveDate;
use serde::Serialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::{
    core::{
        generator::{GeneratorPreset, LoadLevel},
        limits,
        pattern::UsagePattern,
        usage::UsageFrequency,
        vehicle::VehiclePreset,
    },
    prelude::*,
    quantity::{
        Finite,
        currency::NairaPerLiter,
        distance::{Kilometers, KilometersPerLiter},
        time::Hours,
        volume::LitersPerHour,
    },
};

/// Vehicle fuel parameters.
///
/// Setters clamp the values into the valid ranges and keep the previous value
/// when the new one is not a number.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FuelParameters {
    pub usage: UsageFrequency,

    /// Distance per trip.
    #[serde(rename = "distanceKm")]
    pub distance: Kilometers,

    #[serde(rename = "vehiclePreset")]
    pub vehicle: VehiclePreset,

    #[serde(rename = "efficiencyKmPerL")]
    pub efficiency: KilometersPerLiter,

    #[serde(rename = "fuelPrice")]
    pub price: NairaPerLiter,

    /// Date when the fuel price was last checked.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(rename = "fuelPriceDate")]
    pub price_date: Option<NaiveDate>,
}

impl Default for FuelParameters {
    fn default() -> Self {
        Self {
            usage: UsageFrequency::Daily,
            distance: Kilometers(30.0),
            vehicle: VehiclePreset::Small,
            efficiency: VehiclePreset::Small.efficiency(),
            price: NairaPerLiter(700.0),
            price_date: None,
        }
    }
}

impl FuelParameters {
    pub fn set_distance(&mut self, distance: Kilometers) {
        self.distance = limits::DISTANCE.clamp_or(distance, self.distance);
    }

    /// Apply the manually typed distance rounded to 100 meters.
    ///
    /// Negative and non-finite distances are rejected, and `false` is returned.
    pub fn apply_manual_distance(&mut self, distance: Kilometers) -> bool {
        if !distance.is_finite() || distance < Kilometers::ZERO {
            return false;
        }
        self.set_distance(distance.round_to(1));
        true
    }

    /// Select the vehicle preset and fill in its efficiency.
    pub fn select_vehicle(&mut self, vehicle: VehiclePreset) {
        self.efficiency = vehicle.efficiency();
        self.vehicle = vehicle;
    }

    pub fn set_efficiency(&mut self, efficiency: KilometersPerLiter) {
        self.efficiency = limits::EFFICIENCY.clamp_or(efficiency, self.efficiency);
    }

    pub fn set_price(&mut self, price: NairaPerLiter) {
        self.price = limits::FUEL_PRICE.clamp_or(price, self.price);
    }

    /// Replace the price and mark it as checked today.
    ///
    /// Returns `false` and leaves the parameters intact if the price is not positive.
    pub fn update_price(&mut self, price: NairaPerLiter, today: NaiveDate) -> bool {
        if !price.is_finite() || price <= NairaPerLiter::ZERO {
            return false;
        }
        self.set_price(price);
        self.price_date = Some(today);
        true
    }
}

/// Generator parameters.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratorParameters {
    pub pattern: UsagePattern,

    pub preset: GeneratorPreset,

    #[serde(rename = "hoursPerDay")]
    pub hours_per_day: Hours,

    pub load: LoadLevel,

    /// Consumption rate, derived from the preset and load unless the preset is custom.
    #[serde(rename = "litresPerHour")]
    pub rate: LitersPerHour,

    #[serde(rename = "fuelPrice")]
    pub price: NairaPerLiter,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(rename = "fuelPriceDate")]
    pub price_date: Option<NaiveDate>,
}

impl Default for GeneratorParameters {
    fn default() -> Self {
        Self {
            pattern: UsagePattern::Daily,
            preset: GeneratorPreset::Kva08,
            hours_per_day: Hours(4.0),
            load: LoadLevel::Medium,
            rate: GeneratorPreset::Kva08.base_rate() * LoadLevel::Medium.multiplier(),
            price: NairaPerLiter(700.0),
            price_date: None,
        }
    }
}

impl GeneratorParameters {
    /// Switch the pattern, and nudge the running hours towards what the pattern implies.
    pub fn set_pattern(&mut self, pattern: UsagePattern) {
        match pattern {
            UsagePattern::Occasional if self.hours_per_day > Hours(6.0) => {
                self.hours_per_day = Hours(2.0);
            }
            UsagePattern::Business if self.hours_per_day < Hours(6.0) => {
                self.hours_per_day = Hours(8.0);
            }
            _ => {}
        }
        self.pattern = pattern;
    }

    pub fn select_preset(&mut self, preset: GeneratorPreset) {
        self.preset = preset;
        self.derive_rate();
    }

    pub fn set_load(&mut self, load: LoadLevel) {
        self.load = load;
        self.derive_rate();
    }

    /// Re-derive the consumption rate from the preset and load, unless the preset is custom.
    pub fn derive_rate(&mut self) {
        if let Some(rate) = self.preset.rate_at(&self.load) {
            debug!(preset = %self.preset, load = %self.load, ?rate, "derived the consumption rate");
            self.rate = limits::CONSUMPTION_RATE.clamp_or(rate, self.rate);
        }
    }

    /// Override the consumption rate, which turns the preset into custom.
    pub fn set_rate(&mut self, rate: LitersPerHour) {
        self.rate = limits::CONSUMPTION_RATE.clamp_or(rate, self.rate);
        self.preset = GeneratorPreset::Custom;
    }

    pub fn set_hours_per_day(&mut self, hours: Hours) {
        self.hours_per_day = limits::HOURS_PER_DAY.clamp_or(hours, self.hours_per_day);
    }

    pub fn set_price(&mut self, price: NairaPerLiter) {
        self.price = limits::FUEL_PRICE.clamp_or(price, self.price);
    }

    /// Replace the price and mark it as checked today.
    pub fn update_price(&mut self, price: NairaPerLiter, today: NaiveDate) -> bool {
        if !price.is_finite() || price <= NairaPerLiter::ZERO {
            return false;
        }
        self.set_price(price);
        self.price_date = Some(today);
        true
    }
}
