use chrono::NaiveDate;
use clap::Parser;

use crate::{
    core::{
        generator::{GeneratorPreset, LoadLevel},
        parameters::GeneratorParameters,
        pattern::UsagePattern,
    },
    prelude::*,
    quantity::{currency::NairaPerLiter, time::Hours, volume::LitersPerHour},
};

#[derive(Parser)]
pub struct GeneratorArgs {
    /// Usage pattern: `occasional`, `daily`, or `business`.
    ///
    /// Switching the pattern nudges the running hours towards the typical ones.
    #[clap(long)]
    pattern: Option<UsagePattern>,

    /// Generator size: `0.8`, `1.6`, `2.5`, `3.5`, `5` (kVA), or `custom`.
    #[clap(long)]
    preset: Option<GeneratorPreset>,

    /// Running hours per day.
    #[clap(long)]
    hours: Option<Hours>,

    /// Electrical load: `low`, `medium`, or `high`.
    #[clap(long)]
    load: Option<LoadLevel>,

    /// Consumption rate in liters per hour, which turns the preset into custom.
    #[clap(long)]
    rate: Option<LitersPerHour>,

    /// Fuel price per liter.
    #[clap(long)]
    price: Option<NairaPerLiter>,

    /// Date when the fuel price was checked.
    #[clap(long = "price-date")]
    price_date: Option<NaiveDate>,

    /// Fuel price per liter, checked today.
    #[clap(long = "quick-price", conflicts_with_all = ["price", "price_date"])]
    quick_price: Option<NairaPerLiter>,
}

impl GeneratorArgs {
    pub fn apply(self, generator: &mut GeneratorParameters, today: NaiveDate) {
        if let Some(pattern) = self.pattern {
            generator.set_pattern(pattern);
        }
        if let Some(hours) = self.hours {
            generator.set_hours_per_day(hours);
        }
        if let Some(preset) = self.preset {
            generator.select_preset(preset);
        }
        if let Some(load) = self.load {
            generator.set_load(load);
        }
        if let Some(rate) = self.rate {
            generator.set_rate(rate);
        }
        if let Some(price) = self.price {
            generator.set_price(price);
        }
        if let Some(date) = self.price_date {
            generator.price_date = Some(date);
        }
        if let Some(price) = self.quick_price
            && !generator.update_price(price, today)
        {
            warn!(?price, "Ignoring the invalid price");
        }
    }
}
