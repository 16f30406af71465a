//! Plain-text summaries for sharing.

use itertools::Itertools;

use crate::core::{
    parameters::{FuelParameters, GeneratorParameters},
    projection::{project_fuel, project_generator},
};

const DISCLAIMER: &str = "Disclaimer: This is an estimate. Actual fuel usage and costs may vary.";

#[must_use]
pub fn fuel_text(parameters: &FuelParameters, link: &str) -> String {
    let projection = project_fuel(parameters);
    [
        "FuelWyse (Estimate): Fuel Cost".to_owned(),
        format!("Monthly cost: {}", projection.costs.monthly),
        format!("Vehicle: {}", parameters.vehicle.label()),
        format!("Distance: {} per {}", parameters.distance, parameters.usage),
        format!("Efficiency: {}", parameters.efficiency),
        format!("Fuel price: {}", parameters.price),
    ]
    .into_iter()
    .chain(parameters.price_date.map(|date| format!("Price last updated: {date}")))
    .chain([
        format!("Monthly fuel: {}", projection.liters_monthly),
        format!("Cost per km: {}", projection.cost_per_km),
        DISCLAIMER.to_owned(),
        format!("Share link: {link}"),
    ])
    .join("\n")
}

#[must_use]
pub fn generator_text(parameters: &GeneratorParameters, link: &str) -> String {
    let projection = project_generator(parameters);
    [
        "FuelWyse (Estimate): Generator Cost".to_owned(),
        format!("Monthly cost: {}", projection.costs.monthly),
        format!("Pattern: {} ({} days/month)", parameters.pattern, projection.days_per_month),
        format!("Generator: {} • Load: {}", parameters.preset.label(), parameters.load),
        format!("Hours/day: {}", parameters.hours_per_day),
        format!("Litres/hour: {}", parameters.rate),
        format!("Fuel price: {}", parameters.price),
    ]
    .into_iter()
    .chain(parameters.price_date.map(|date| format!("Price last updated: {date}")))
    .chain([
        format!("Fuel/day: {}", projection.liters_per_day),
        format!("Cost/hour: {}", projection.cost_per_hour),
        DISCLAIMER.to_owned(),
        format!("Share link: {link}"),
    ])
    .join("\n")
}
