use crate::quantity::time::Hours;

quantity!(Liters, via: f64, suffix: "L", precision: 2);
quantity!(
    /// Generator fuel consumption rate.
    LitersPerHour, via: f64, suffix: "L/h", precision: 2
);

implement_mul!(Hours, LitersPerHour, Liters);
