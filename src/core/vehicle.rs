use crate::quantity::distance::KilometersPerLiter;

tag! {
    /// Vehicle type which supplies the starting fuel efficiency.
    VehiclePreset {
        Small => "small",
        Sedan => "sedan",
        Suv => "suv",
        Bus => "bus",
        Truck => "truck",
        Custom => "custom",
    }
}

impl VehiclePreset {
    /// Typical fuel efficiency, unrecognised presets fall back to a small car.
    pub fn efficiency(&self) -> KilometersPerLiter {
        match self {
            Self::Small | Self::Other(_) => KilometersPerLiter(14.0),
            Self::Sedan => KilometersPerLiter(12.0),
            Self::Suv => KilometersPerLiter(9.0),
            Self::Bus => KilometersPerLiter(4.0),
            Self::Truck => KilometersPerLiter(3.5),
            Self::Custom => KilometersPerLiter(10.0),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Small => "Small car",
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
            Self::Bus => "Bus",
            Self::Truck => "Truck",
            Self::Custom => "Custom",
            Self::Other(tag) => tag,
        }
    }
}
