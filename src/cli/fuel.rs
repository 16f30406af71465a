use chrono::NaiveDate;
use clap::Parser;

use crate::{
    core::{parameters::FuelParameters, usage::UsageFrequency, vehicle::VehiclePreset},
    prelude::*,
    quantity::{
        currency::NairaPerLiter,
        distance::{Kilometers, KilometersPerLiter},
    },
};

#[derive(Parser)]
pub struct FuelArgs {
    /// Trip frequency: `oneoff`, `daily`, `weekly`, or `monthly`.
    #[clap(long)]
    usage: Option<UsageFrequency>,

    /// Distance per trip in kilometers.
    #[clap(long, allow_negative_numbers = true)]
    distance: Option<Kilometers>,

    /// Distance per trip as measured by hand, rounded to 100 meters.
    #[clap(long = "manual-distance", allow_negative_numbers = true, conflicts_with = "distance")]
    manual_distance: Option<Kilometers>,

    /// Vehicle preset, which also fills in its typical efficiency.
    #[clap(long)]
    vehicle: Option<VehiclePreset>,

    /// Fuel efficiency in kilometers per liter.
    #[clap(long)]
    efficiency: Option<KilometersPerLiter>,

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

impl FuelArgs {
    pub fn apply(self, fuel: &mut FuelParameters, today: NaiveDate) {
        if let Some(usage) = self.usage {
            fuel.usage = usage;
        }
        if let Some(vehicle) = self.vehicle {
            fuel.select_vehicle(vehicle);
        }
        if let Some(efficiency) = self.efficiency {
            fuel.set_efficiency(efficiency);
        }
        if let Some(distance) = self.distance {
            fuel.set_distance(distance);
        }
        if let Some(distance) = self.manual_distance
            && !fuel.apply_manual_distance(distance)
        {
            warn!(?distance, "Ignoring the invalid distance");
        }
        if let Some(price) = self.price {
            fuel.set_price(price);
        }
        if let Some(date) = self.price_date {
            fuel.price_date = Some(date);
        }
        if let Some(price) = self.quick_price
            && !fuel.update_price(price, today)
        {
            warn!(?price, "Ignoring the invalid price");
        }
    }
}
