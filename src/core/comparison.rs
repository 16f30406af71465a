use crate::quantity::currency::Naira;

/// Monthly cost of the baseline against the current parameters.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub before: Naira,
    pub now: Naira,
}

impl Comparison {
    pub fn difference(&self) -> Naira {
        self.now - self.before
    }

    /// Difference relative to the baseline, or zero when the baseline cost nothing.
    #[must_use]
    pub fn relative_difference(&self) -> f64 {
        if self.before > Naira::ZERO { self.difference() / self.before } else { 0.0 }
    }

    #[must_use]
    pub fn is_increase(&self) -> bool {
        self.difference() >= Naira::ZERO
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_savings() {
        let comparison = Comparison { before: Naira(52_500.0), now: Naira(42_000.0) };
        assert!(!comparison.is_increase());
        assert_eq!(comparison.difference(), Naira(-10_500.0));
        assert_abs_diff_eq!(comparison.relative_difference(), -0.2);
    }

    #[test]
    fn test_increase() {
        let comparison = Comparison { before: Naira(1000.0), now: Naira(1250.0) };
        assert!(comparison.is_increase());
        assert_abs_diff_eq!(comparison.relative_difference(), 0.25);
    }

    #[test]
    fn test_zero_baseline() {
        let comparison = Comparison { before: Naira::ZERO, now: Naira(100.0) };
        assert_abs_diff_eq!(comparison.relative_difference(), 0.0);
    }
}
