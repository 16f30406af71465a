tag! {
    /// Generator usage pattern.
    UsagePattern {
        /// A few days a month.
        Occasional => "occasional",

        /// Every day.
        Daily => "daily",

        /// Business days only.
        Business => "business",
    }
}

impl UsagePattern {
    pub const FALLBACK_DAYS_PER_MONTH: f64 = 30.0;

    /// Approximate number of days per month the generator runs.
    #[must_use]
    pub fn days_per_month(&self) -> f64 {
        match self {
            Self::Occasional => 12.0,
            Self::Daily => 30.0,
            Self::Business => 26.0,
            Self::Other(_) => Self::FALLBACK_DAYS_PER_MONTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_per_month() {
        assert_eq!(UsagePattern::Occasional.days_per_month(), 12.0);
        assert_eq!(UsagePattern::Daily.days_per_month(), 30.0);
        assert_eq!(UsagePattern::Business.days_per_month(), 26.0);
        assert_eq!(UsagePattern::from("weekends").days_per_month(), 30.0);
    }
}
