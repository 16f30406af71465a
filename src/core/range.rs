use crate::quantity::currency::Naira;

/// Low-average-high band around a cost estimate, to be upfront about its uncertainty.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RangeEstimate {
    pub low: Naira,
    pub average: Naira,
    pub high: Naira,
}

impl RangeEstimate {
    /// Relative half-width of the band.
    pub const DELTA: f64 = 0.10;
}

impl From<Naira> for RangeEstimate {
    fn from(average: Naira) -> Self {
        Self {
            low: average * (1.0 - Self::DELTA),
            average,
            high: average * (1.0 + Self::DELTA),
        }
    }
}
