//! Online least-squares linear regression.
//!
//! Points are folded into running sums; the slope is available at any time
//! once two distinct x values were seen. X values are shifted by the first
//! point's x so that absolute timestamps late in a long run do not swamp
//! the sums.

/// Running regression over `(x, y)` points
///
/// **Public** - `GcModel` keeps one per post-GC memory trend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegressionLine {
    n: u64,
    origin: f64,
    sum_x: f64,
    sum_y: f64,
    sum_xy: f64,
    sum_xx: f64,
}

impl RegressionLine {
    /// Create an empty regression line
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one point
    pub fn add_point(&mut self, x: f64, y: f64) {
        if self.n == 0 {
            self.origin = x;
        }
        let x = x - self.origin;

        self.n += 1;
        self.sum_x += x;
        self.sum_y += y;
        self.sum_xy += x * y;
        self.sum_xx += x * x;
    }

    /// Number of points added since creation or the last `reset`
    pub fn point_count(&self) -> u64 {
        self.n
    }

    pub fn has_points(&self) -> bool {
        self.n > 0
    }

    /// Least-squares slope (y units per x unit)
    ///
    /// **Public** - `None` below two points or when all x values coincide
    pub fn slope(&self) -> Option<f64> {
        if self.n < 2 {
            return None;
        }

        let n = self.n as f64;
        let denominator = n * self.sum_xx - self.sum_x * self.sum_x;
        if denominator.abs() < f64::EPSILON {
            return None;
        }

        Some((n * self.sum_xy - self.sum_x * self.sum_y) / denominator)
    }

    /// Drop all points, starting a fresh segment
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope_of_straight_line() {
        let mut line = RegressionLine::new();
        line.add_point(0.0, 10.0);
        line.add_point(1.0, 20.0);
        line.add_point(2.0, 30.0);

        assert_eq!(line.point_count(), 3);
        assert_eq!(line.slope(), Some(10.0));
    }

    #[test]
    fn test_slope_needs_two_points() {
        let mut line = RegressionLine::new();
        assert!(line.slope().is_none());
        line.add_point(5.0, 1.0);
        assert!(line.slope().is_none());
    }

    #[test]
    fn test_vertical_points_have_no_slope() {
        let mut line = RegressionLine::new();
        line.add_point(3.0, 1.0);
        line.add_point(3.0, 9.0);
        assert!(line.slope().is_none());
    }

    #[test]
    fn test_large_offsets_stay_accurate() {
        let mut line = RegressionLine::new();
        for i in 0..100 {
            let x = 1.0e9 + i as f64;
            line.add_point(x, 2.0 * i as f64 - 7.0);
        }
        let slope = line.slope().unwrap();
        assert!((slope - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_noisy_line() {
        let mut line = RegressionLine::new();
        // y = 3x + noise that cancels out
        line.add_point(0.0, 1.0);
        line.add_point(1.0, 2.0);
        line.add_point(2.0, 7.0);
        line.add_point(3.0, 10.0);
        // sums: x=6 y=20 xy=46 xx=14 -> (4*46 - 120) / (56 - 36) = 3.2
        assert!((line.slope().unwrap() - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_reset_clears_segment() {
        let mut line = RegressionLine::new();
        line.add_point(0.0, 1.0);
        line.add_point(1.0, 2.0);
        line.reset();

        assert!(!line.has_points());
        line.add_point(10.0, 5.0);
        assert_eq!(line.point_count(), 1);
    }
}
