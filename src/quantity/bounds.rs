/// Value that may be NaN or infinite.
pub trait Finite {
    fn is_finite(&self) -> bool;
}

/// Inclusive range of valid values of a parameter.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: Copy + Ord + Finite> Bounds<T> {
    /// Clamp the value into the bounds.
    ///
    /// Non-finite values cannot be clamped meaningfully, so the fallback is returned instead.
    pub fn clamp_or(&self, value: T, fallback: T) -> T {
        if value.is_finite() { value.clamp(self.min, self.max) } else { fallback }
    }
}
