tag! {
    /// How often the trip is made.
    UsageFrequency {
        OneOff => "oneoff" | "one-off",
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
    }
}

impl UsageFrequency {
    /// Average number of weeks in a month.
    pub const WEEKS_PER_MONTH: f64 = 4.345;

    /// Multiplier used for unrecognised frequencies.
    pub const FALLBACK_MONTHLY_MULTIPLIER: f64 = 1.0;

    /// Number of trips per month.
    #[must_use]
    pub fn monthly_multiplier(&self) -> f64 {
        match self {
            Self::OneOff | Self::Monthly => 1.0,
            Self::Daily => 30.0,
            Self::Weekly => Self::WEEKS_PER_MONTH,
            Self::Other(_) => Self::FALLBACK_MONTHLY_MULTIPLIER,
        }
    }
}
