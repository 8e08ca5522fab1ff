//! Online accumulators for count/sum/mean/stddev/min/max.
//!
//! Values are folded in one at a time, nothing is retained. Mean and
//! variance use Welford's update so long logs stay numerically stable.
//!
//! Derived values (`average`, `standard_deviation`, `min`, `max`) return
//! `None` until at least one value was added. `n` and `sum` are always
//! available so callers can do their own rate math behind an `n > 0` check.

/// Accumulator for floating point samples (pause times, slopes, ratios)
///
/// **Public** - one instance per tracked metric in `GcModel`
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleData {
    n: u64,
    sum: f64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Default for DoubleData {
    fn default() -> Self {
        Self::new()
    }
}

impl DoubleData {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            n: 0,
            sum: 0.0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a single sample
    pub fn add(&mut self, x: f64) {
        self.add_weighted(x, 1);
    }

    /// Add a sample that counts `weight` times
    ///
    /// **Public** - used to fold regression segments, weighted by their
    /// point count, into a running average
    pub fn add_weighted(&mut self, x: f64, weight: u64) {
        if weight == 0 {
            return;
        }

        self.n += weight;
        let w = weight as f64;
        self.sum += x * w;

        // Weighted Welford update
        let delta = x - self.mean;
        self.mean += delta * w / self.n as f64;
        self.m2 += delta * (x - self.mean) * w;

        if x < self.min {
            self.min = x;
        }
        if x > self.max {
            self.max = x;
        }
    }

    /// Number of samples
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Sum of all samples
    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn average(&self) -> Option<f64> {
        (self.n > 0).then_some(self.mean)
    }

    /// Sample standard deviation (n - 1 divisor), `0.0` for a single sample
    pub fn standard_deviation(&self) -> Option<f64> {
        match self.n {
            0 => None,
            1 => Some(0.0),
            n => Some((self.m2 / (n - 1) as f64).max(0.0).sqrt()),
        }
    }

    pub fn min(&self) -> Option<f64> {
        (self.n > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.n > 0).then_some(self.max)
    }
}

/// Accumulator for integral samples (heap sizes, freed and promoted memory)
///
/// Sum, min and max stay exact; mean and deviation are tracked in `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntData {
    n: u64,
    sum: i64,
    min: i64,
    max: i64,
    mean: f64,
    m2: f64,
}

impl Default for IntData {
    fn default() -> Self {
        Self::new()
    }
}

impl IntData {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            n: 0,
            sum: 0,
            min: i64::MAX,
            max: i64::MIN,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Add a single sample
    pub fn add(&mut self, x: i64) {
        self.n += 1;
        self.sum = self.sum.saturating_add(x);

        let xf = x as f64;
        let delta = xf - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (xf - self.mean);

        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn average(&self) -> Option<f64> {
        (self.n > 0).then_some(self.mean)
    }

    /// Sample standard deviation (n - 1 divisor), `0.0` for a single sample
    pub fn standard_deviation(&self) -> Option<f64> {
        match self.n {
            0 => None,
            1 => Some(0.0),
            n => Some((self.m2 / (n - 1) as f64).max(0.0).sqrt()),
        }
    }

    pub fn min(&self) -> Option<i64> {
        (self.n > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<i64> {
        (self.n > 0).then_some(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_data_empty() {
        let data = DoubleData::new();
        assert_eq!(data.n(), 0);
        assert_eq!(data.sum(), 0.0);
        assert!(data.average().is_none());
        assert!(data.standard_deviation().is_none());
        assert!(data.min().is_none());
        assert!(data.max().is_none());
    }

    #[test]
    fn test_double_data_basic() {
        let mut data = DoubleData::new();
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            data.add(x);
        }

        assert_eq!(data.n(), 8);
        assert!((data.sum() - 40.0).abs() < 1e-9);
        assert!((data.average().unwrap() - 5.0).abs() < 1e-9);
        // sample variance = 32 / 7
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((data.standard_deviation().unwrap() - expected).abs() < 1e-9);
        assert_eq!(data.min(), Some(2.0));
        assert_eq!(data.max(), Some(9.0));
    }

    #[test]
    fn test_double_data_weighted_matches_repeated() {
        let mut weighted = DoubleData::new();
        weighted.add_weighted(3.0, 3);
        weighted.add(7.0);

        let mut repeated = DoubleData::new();
        for x in [3.0, 3.0, 3.0, 7.0] {
            repeated.add(x);
        }

        assert_eq!(weighted.n(), repeated.n());
        assert!((weighted.sum() - repeated.sum()).abs() < 1e-9);
        assert!((weighted.average().unwrap() - repeated.average().unwrap()).abs() < 1e-9);
        assert!(
            (weighted.standard_deviation().unwrap() - repeated.standard_deviation().unwrap()).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_double_data_zero_weight_ignored() {
        let mut data = DoubleData::new();
        data.add_weighted(42.0, 0);
        assert!(data.is_empty());
    }

    #[test]
    fn test_int_data_basic() {
        let mut data = IntData::new();
        data.add(100);
        data.add(50);
        data.add(200);

        assert_eq!(data.n(), 3);
        assert_eq!(data.sum(), 350);
        assert_eq!(data.min(), Some(50));
        assert_eq!(data.max(), Some(200));
    }

    #[test]
    fn test_int_data_deviation() {
        let mut data = IntData::new();
        for x in [10, 20, 30] {
            data.add(x);
        }
        assert_eq!(data.average(), Some(20.0));
        assert_eq!(data.standard_deviation(), Some(10.0));
    }

    #[test]
    fn test_int_data_negative_values() {
        let mut data = IntData::new();
        data.add(-20);
        data.add(10);

        assert_eq!(data.sum(), -10);
        assert_eq!(data.min(), Some(-20));
        assert_eq!(data.average(), Some(-5.0));
    }

    #[test]
    fn test_single_sample_deviation_is_zero() {
        let mut data = IntData::new();
        data.add(7);
        assert_eq!(data.standard_deviation(), Some(0.0));
    }
}
