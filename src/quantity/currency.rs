//! Nigerian naira amounts and prices.

use crate::quantity::{
    distance::KilometersPerLiter,
    volume::{Liters, LitersPerHour},
};

quantity!(Naira, via: f64, prefix: "₦", suffix: "", precision: 0);
quantity!(
    /// Fuel unit price.
    NairaPerLiter, via: f64, prefix: "₦", suffix: "/L", precision: 0
);
quantity!(NairaPerKilometer, via: f64, prefix: "₦", suffix: "/km", precision: 2);
quantity!(NairaPerHour, via: f64, prefix: "₦", suffix: "/h", precision: 0);

implement_mul!(Liters, NairaPerLiter, Naira);
implement_mul!(LitersPerHour, NairaPerLiter, NairaPerHour);
implement_div!(NairaPerLiter, KilometersPerLiter, NairaPerKilometer);
