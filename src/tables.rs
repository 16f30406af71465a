use std::fmt::Display;

use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        comparison::Comparison,
        parameters::{FuelParameters, GeneratorParameters},
        projection::{Costs, FuelProjection, GeneratorProjection},
        range::RangeEstimate,
    },
    fmt::FormattedPercentage,
    quantity::currency::Naira,
    state::Theme,
};

const fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Cyan,
        Theme::Light => Color::DarkBlue,
    }
}

fn new_table(theme: Theme, header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(
        header.into_iter().map(|title| Cell::new(title).fg(accent(theme))).collect::<Vec<_>>(),
    );
    table
}

fn price_cell(price: impl Display, date: Option<NaiveDate>) -> Cell {
    match date {
        Some(date) => Cell::new(format!("{price} (checked {date})")),
        None => Cell::new(price),
    }
}

pub fn build_fuel_table(
    fuel: &FuelParameters,
    projection: &FuelProjection,
    theme: Theme,
) -> Table {
    let mut table = new_table(theme, vec!["Vehicle", "Trip", "Usage", "Efficiency", "Fuel price"]);
    table.add_row(vec![
        Cell::new(fuel.vehicle.label()),
        Cell::new(fuel.distance).set_alignment(CellAlignment::Right),
        Cell::new(&fuel.usage),
        Cell::new(fuel.efficiency).set_alignment(CellAlignment::Right),
        price_cell(fuel.price, fuel.price_date),
    ]);
    table.add_row(vec![
        Cell::new("Per month").add_attribute(Attribute::Dim),
        Cell::new(projection.monthly_distance).set_alignment(CellAlignment::Right),
        Cell::new(format!("× {}", projection.monthly_multiplier)).add_attribute(Attribute::Dim),
        Cell::new(projection.liters_monthly).set_alignment(CellAlignment::Right),
        Cell::new(projection.cost_per_km),
    ]);
    table
}

pub fn build_generator_table(
    generator: &GeneratorParameters,
    projection: &GeneratorProjection,
    theme: Theme,
) -> Table {
    let mut table =
        new_table(theme, vec!["Generator", "Load", "Pattern", "Running", "Rate", "Fuel price"]);
    table.add_row(vec![
        Cell::new(generator.preset.label()),
        Cell::new(&generator.load),
        Cell::new(&generator.pattern),
        Cell::new(format!("{}/day", generator.hours_per_day)).set_alignment(CellAlignment::Right),
        Cell::new(generator.rate).set_alignment(CellAlignment::Right),
        price_cell(generator.price, generator.price_date),
    ]);
    table.add_row(vec![
        Cell::new("Per month").add_attribute(Attribute::Dim),
        Cell::new(""),
        Cell::new(format!("{} days", projection.days_per_month)).add_attribute(Attribute::Dim),
        Cell::new(format!("{}/day", projection.liters_per_day)).set_alignment(CellAlignment::Right),
        Cell::new(projection.liters_monthly).set_alignment(CellAlignment::Right),
        Cell::new(projection.cost_per_hour),
    ]);
    table
}

/// Costs over the periods, with the uncertainty band.
pub fn build_costs_table(costs: &Costs, theme: Theme) -> Table {
    let mut table = new_table(theme, vec!["Period", "Low", "Estimate", "High"]);
    for (period, cost) in [
        ("Daily", costs.daily),
        ("Weekly", costs.weekly),
        ("Monthly", costs.monthly),
        ("Yearly", costs.yearly),
    ] {
        let range = RangeEstimate::from(cost);
        table.add_row(vec![
            Cell::new(period),
            Cell::new(range.low).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(range.average).set_alignment(CellAlignment::Right).fg(accent(theme)),
            Cell::new(range.high).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

/// Monthly cost against the baseline.
pub fn build_comparison_table(comparison: &Comparison, theme: Theme) -> Table {
    let (verdict, color) =
        if comparison.is_increase() { ("Increase", Color::Red) } else { ("Savings", Color::Green) };
    let difference = comparison.difference();
    let magnitude = if difference < Naira::ZERO { -difference } else { difference };

    let mut table = new_table(theme, vec!["Before", "Now", "Change", ""]);
    table.add_row(vec![
        Cell::new(comparison.before).set_alignment(CellAlignment::Right),
        Cell::new(comparison.now).set_alignment(CellAlignment::Right),
        Cell::new(verdict).fg(color),
        Cell::new(format!(
            "{magnitude} ({})",
            FormattedPercentage(comparison.relative_difference().abs()),
        ))
        .fg(color),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_table() {
        let comparison = Comparison { before: Naira(52_500.0), now: Naira(42_000.0) };
        let rendered = build_comparison_table(&comparison, Theme::Dark).to_string();
        assert!(rendered.contains("Savings"));
        assert!(rendered.contains("₦10,500 (20.0%)"));
    }

    #[test]
    fn test_costs_table() {
        let costs = Costs {
            daily: Naira(1000.0),
            weekly: Naira(7000.0),
            monthly: Naira(30_000.0),
            yearly: Naira(360_000.0),
        };
        let rendered = build_costs_table(&costs, Theme::Light).to_string();
        assert!(rendered.contains("₦900"));
        assert!(rendered.contains("₦396,000"));
    }
}
