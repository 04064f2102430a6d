/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The golden ratio's complement: ρ = 2 - φ ≈ 0.381966
///
/// Each interior point sits a fraction ρ of the bracket width in from one end.
pub(super) const RHO: f64 = 2.0 - PHI;

/// Golden section search bracket.
///
/// Maintains the outer interval `[low, high]` and two interior points
/// `inner_low = low + ρ·width` and `inner_high = high - ρ·width`.
/// Interior points are always recomputed from the bounds, so
/// `low <= inner_low <= inner_high <= high` holds after every shrink.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) low: f64,
    pub(super) high: f64,
    pub(super) inner_low: f64,
    pub(super) inner_high: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds with interior points positioned by the golden ratio.
    ///
    /// Callers must ensure `low < high`.
    pub(super) fn new(low: f64, high: f64) -> Self {
        let (inner_low, inner_high) = interior(low, high);
        Self {
            low,
            high,
            inner_low,
            inner_high,
        }
    }

    pub(super) fn width(&self) -> f64 {
        self.high - self.low
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Shrinks the bounds to `[low, inner_high]`.
    ///
    /// The new `inner_high` lands on the old `inner_low`.
    pub(super) fn shrink_high(&mut self) {
        *self = Self::new(self.low, self.inner_high);
    }

    /// Shrinks the bounds to `[inner_low, high]`.
    ///
    /// The new `inner_low` lands on the old `inner_high`.
    pub(super) fn shrink_low(&mut self) {
        *self = Self::new(self.inner_low, self.high);
    }
}

fn interior(low: f64, high: f64) -> (f64, f64) {
    let width = high - low;
    (low + RHO * width, high - RHO * width)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bracket_initialized_with_golden_ratio_points() {
        let bracket = GoldenBracket::new(0.0, 1.0);

        assert_relative_eq!(bracket.width(), 1.0);
        assert_relative_eq!(bracket.midpoint(), 0.5);

        // inner_low ≈ 0.382, inner_high ≈ 0.618
        assert_relative_eq!(bracket.inner_low, RHO);
        assert_relative_eq!(bracket.inner_high, 1.0 - RHO);
        assert_relative_eq!(bracket.inner_low, 0.381_966_011_250_105, epsilon = 1e-15);
    }

    #[test]
    fn shrink_high_keeps_old_inner_low_as_new_inner_high() {
        let mut bracket = GoldenBracket::new(-1.0, 1.0);
        let old = bracket;

        bracket.shrink_high();

        assert_relative_eq!(bracket.low, old.low);
        assert_relative_eq!(bracket.high, old.inner_high);
        assert_relative_eq!(bracket.inner_high, old.inner_low, epsilon = 1e-15);
        assert_relative_eq!(bracket.width(), (1.0 - RHO) * old.width(), epsilon = 1e-15);
    }

    #[test]
    fn shrink_low_keeps_old_inner_high_as_new_inner_low() {
        let mut bracket = GoldenBracket::new(-1.0, 1.0);
        let old = bracket;

        bracket.shrink_low();

        assert_relative_eq!(bracket.low, old.inner_low);
        assert_relative_eq!(bracket.high, old.high);
        assert_relative_eq!(bracket.inner_low, old.inner_high, epsilon = 1e-15);
        assert_relative_eq!(bracket.width(), (1.0 - RHO) * old.width(), epsilon = 1e-15);
    }

    #[test]
    fn interior_points_stay_ordered() {
        let mut bracket = GoldenBracket::new(-3.0, 7.0);

        for i in 0..60 {
            if i % 3 == 0 {
                bracket.shrink_high();
            } else {
                bracket.shrink_low();
            }
            assert!(bracket.low <= bracket.inner_low);
            assert!(bracket.inner_low <= bracket.inner_high);
            assert!(bracket.inner_high <= bracket.high);
        }
    }
}
