use crate::quantity::volume::LitersPerHour;

tag! {
    /// Generator size which supplies the base consumption rate.
    GeneratorPreset {
        /// 0.8 kVA.
        Kva08 => "0.8" | "0.8kVA",

        /// 1.6 kVA.
        Kva16 => "1.6" | "1.6kVA",

        /// 2.5 kVA.
        Kva25 => "2.5" | "2.5kVA",

        /// 3.5 kVA.
        Kva35 => "3.5" | "3.5kVA",

        /// 5 kVA.
        Kva50 => "5" | "5kVA",

        /// User-defined consumption rate, never re-derived.
        Custom => "custom",
    }
}

impl GeneratorPreset {
    /// Consumption rate at medium load. Unrecognised presets use 1 L/h.
    pub fn base_rate(&self) -> LitersPerHour {
        match self {
            Self::Kva08 => LitersPerHour(0.35),
            Self::Kva16 => LitersPerHour(0.60),
            Self::Kva25 => LitersPerHour(0.90),
            Self::Kva35 => LitersPerHour(1.20),
            Self::Kva50 => LitersPerHour(1.70),
            Self::Custom | Self::Other(_) => LitersPerHour(1.00),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Kva08 => "0.8kVA",
            Self::Kva16 => "1.6kVA",
            Self::Kva25 => "2.5kVA",
            Self::Kva35 => "3.5kVA",
            Self::Kva50 => "5kVA",
            Self::Custom | Self::Other(_) => "Custom",
        }
    }

    /// Consumption rate at the specified load, rounded to centiliters per hour.
    ///
    /// Returns [`None`] for the custom preset: its rate is whatever the user has set.
    pub fn rate_at(&self, load: &LoadLevel) -> Option<LitersPerHour> {
        match self {
            Self::Custom => None,
            _ => Some((self.base_rate() * load.multiplier()).round_to(2)),
        }
    }
}

tag! {
    /// Electrical demand on the generator.
    LoadLevel {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

impl LoadLevel {
    pub const FALLBACK_MULTIPLIER: f64 = 1.0;

    #[must_use]
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Low => 0.80,
            Self::Medium => 1.00,
            Self::High => 1.25,
            Self::Other(_) => Self::FALLBACK_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!(GeneratorPreset::from("0.8kVA"), GeneratorPreset::Kva08);
        assert_eq!(GeneratorPreset::from("5"), GeneratorPreset::Kva50);
        assert_eq!(GeneratorPreset::Kva25.as_str(), "2.5");
    }

    #[test]
    fn test_rate_at_load() {
        let rate = GeneratorPreset::Kva16.rate_at(&LoadLevel::High).unwrap();
        assert_abs_diff_eq!(rate.0, 0.75);
        let rate = GeneratorPreset::Kva08.rate_at(&LoadLevel::Low).unwrap();
        assert_abs_diff_eq!(rate.0, 0.28);
        let rate = GeneratorPreset::Kva35.rate_at(&LoadLevel::from("extreme")).unwrap();
        assert_abs_diff_eq!(rate.0, 1.2);
    }

    #[test]
    fn test_custom_rate_is_not_derived() {
        assert_eq!(GeneratorPreset::Custom.rate_at(&LoadLevel::High), None);
    }

    #[test]
    fn test_unknown_preset_uses_one_liter() {
        let rate = GeneratorPreset::from("7.5").rate_at(&LoadLevel::Medium).unwrap();
        assert_abs_diff_eq!(rate.0, 1.0);
    }
}
