//! Valid ranges of the numeric parameters, and the fallbacks for non-finite values.
//!
//! Shared by the projection engine and the state codec, so that a value accepted by one
//! is always accepted by the other.

use crate::quantity::{
    Bounds,
    currency::NairaPerLiter,
    distance::{Kilometers, KilometersPerLiter},
    time::Hours,
    volume::LitersPerHour,
};

pub const DISTANCE: Bounds<Kilometers> =
    Bounds { min: Kilometers::ZERO, max: Kilometers(999_999.0) };

pub const EFFICIENCY: Bounds<KilometersPerLiter> =
    Bounds { min: KilometersPerLiter(0.1), max: KilometersPerLiter(9999.0) };

pub const FUEL_PRICE: Bounds<NairaPerLiter> =
    Bounds { min: NairaPerLiter(1.0), max: NairaPerLiter(999_999.0) };

pub const HOURS_PER_DAY: Bounds<Hours> = Bounds { min: Hours::ZERO, max: Hours::ONE_DAY };

pub const CONSUMPTION_RATE: Bounds<LitersPerHour> =
    Bounds { min: LitersPerHour(0.01), max: LitersPerHour(99.0) };

pub const FALLBACK_DISTANCE: Kilometers = Kilometers::ZERO;
pub const FALLBACK_EFFICIENCY: KilometersPerLiter = KilometersPerLiter(10.0);
pub const FALLBACK_FUEL_PRICE: NairaPerLiter = NairaPerLiter(700.0);
pub const FALLBACK_HOURS_PER_DAY: Hours = Hours::ZERO;
pub const FALLBACK_CONSUMPTION_RATE: LitersPerHour = LitersPerHour(0.5);

/// Fallbacks for the non-finite values of a restored state.
pub mod restored {
    use super::*;

    pub const DISTANCE: Kilometers = Kilometers(30.0);
    pub const EFFICIENCY: KilometersPerLiter = KilometersPerLiter(12.0);
    pub const FUEL_PRICE: NairaPerLiter = NairaPerLiter(700.0);
    pub const HOURS_PER_DAY: Hours = Hours(4.0);
    pub const CONSUMPTION_RATE: LitersPerHour = LitersPerHour(0.6);
}
