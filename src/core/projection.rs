//! Cost projections.
//!
//! Both projections are pure: the parameters are clamped into their valid ranges
//! on the way in, so that the division by efficiency can never hit zero.

use crate::{
    core::{
        limits,
        parameters::{FuelParameters, GeneratorParameters},
        usage::UsageFrequency,
    },
    quantity::{
        currency::{Naira, NairaPerHour, NairaPerKilometer},
        distance::Kilometers,
        volume::Liters,
    },
};

pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_WEEK: f64 = 7.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Cost scaled to the usual billing periods.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Costs {
    pub daily: Naira,
    pub weekly: Naira,
    pub monthly: Naira,
    pub yearly: Naira,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FuelProjection {
    /// Number of trips per month.
    pub monthly_multiplier: f64,

    pub monthly_distance: Kilometers,
    pub liters_monthly: Liters,
    pub cost_per_km: NairaPerKilometer,
    pub costs: Costs,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeneratorProjection {
    pub days_per_month: f64,
    pub liters_per_day: Liters,
    pub liters_monthly: Liters,
    pub cost_per_hour: NairaPerHour,
    pub costs: Costs,
}

pub fn project_fuel(parameters: &FuelParameters) -> FuelProjection {
    let distance = limits::DISTANCE.clamp_or(parameters.distance, limits::FALLBACK_DISTANCE);
    let efficiency =
        limits::EFFICIENCY.clamp_or(parameters.efficiency, limits::FALLBACK_EFFICIENCY);
    let price = limits::FUEL_PRICE.clamp_or(parameters.price, limits::FALLBACK_FUEL_PRICE);

    let monthly_multiplier = parameters.usage.monthly_multiplier();
    let monthly_distance = distance * monthly_multiplier;
    let liters_monthly = monthly_distance / efficiency;
    let monthly = liters_monthly * price;

    FuelProjection {
        monthly_multiplier,
        monthly_distance,
        liters_monthly,
        cost_per_km: price / efficiency,
        costs: Costs {
            daily: monthly / DAYS_PER_MONTH,
            weekly: monthly / UsageFrequency::WEEKS_PER_MONTH,
            monthly,
            yearly: monthly * MONTHS_PER_YEAR,
        },
    }
}

/// Project the generator costs.
///
/// Note that the weekly cost assumes seven typical running days regardless of the pattern,
/// while the monthly cost uses the pattern's active days, so for non-daily patterns
/// the weekly cost does not scale up to the monthly one.
pub fn project_generator(parameters: &GeneratorParameters) -> GeneratorProjection {
    let hours_per_day =
        limits::HOURS_PER_DAY.clamp_or(parameters.hours_per_day, limits::FALLBACK_HOURS_PER_DAY);
    let rate =
        limits::CONSUMPTION_RATE.clamp_or(parameters.rate, limits::FALLBACK_CONSUMPTION_RATE);
    let price = limits::FUEL_PRICE.clamp_or(parameters.price, limits::FALLBACK_FUEL_PRICE);

    let days_per_month = parameters.pattern.days_per_month();
    let liters_per_day = hours_per_day * rate;
    let liters_monthly = liters_per_day * days_per_month;
    let monthly = liters_monthly * price;
    let daily = liters_per_day * price;

    GeneratorProjection {
        days_per_month,
        liters_per_day,
        liters_monthly,
        cost_per_hour: rate * price,
        costs: Costs {
            daily,
            weekly: daily * DAYS_PER_WEEK,
            monthly,
            yearly: monthly * MONTHS_PER_YEAR,
        },
    }
}
