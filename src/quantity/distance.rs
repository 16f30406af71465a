use crate::quantity::volume::Liters;

quantity!(Kilometers, via: f64, suffix: "km", precision: 1);
quantity!(
    /// Fuel efficiency.
    KilometersPerLiter, via: f64, suffix: "km/L", precision: 1
);

implement_div!(Kilometers, KilometersPerLiter, Liters);
