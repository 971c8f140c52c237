//! Dispersion test shared by the point and region trees
//!
//! Both trees decide whether a node is homogeneous enough to stay a leaf
//! by computing a spread statistic over the node's values and comparing
//! it to a threshold. A node stops subdividing when
//!
//! ```text
//! dispersion <= threshold  ||  depth >= max_depth
//! ```
//!
//! and subdivides otherwise. Empty and single-value inputs always have
//! dispersion `0`.

use crate::error::{TreeError, TreeResult};
use std::fmt;

/// Spread statistic computed over a node's values.
#[derive(Debug, Clone, Copy)]
pub enum Statistic {
    /// Sample variance (divisor `n - 1`)
    Variance,
    /// Population variance (divisor `n`)
    PopulationVariance,
    /// Population standard deviation (divisor `n`)
    StdDev,
    /// Sample standard deviation (divisor `n - 1`)
    SampleStdDev,
    /// Caller-supplied statistic
    ///
    /// Only called with two or more values. It should be deterministic and
    /// return a finite value; a NaN result never satisfies the threshold,
    /// so such nodes subdivide until the depth limit.
    Custom(fn(&[f64]) -> f64),
}

impl Statistic {
    /// Compute the statistic over `values`
    ///
    /// # Examples
    ///
    /// ```
    /// use quadsplit_tree::Statistic;
    ///
    /// assert_eq!(Statistic::Variance.compute(&[0.0, 10.0]), 50.0);
    /// assert_eq!(Statistic::StdDev.compute(&[0.0, 10.0]), 5.0);
    /// assert_eq!(Statistic::Variance.compute(&[3.0]), 0.0);
    /// ```
    pub fn compute(&self, values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }
        let n = values.len() as f64;
        match self {
            Statistic::Variance => sum_squared_deviations(values) / (n - 1.0),
            Statistic::PopulationVariance => sum_squared_deviations(values) / n,
            Statistic::StdDev => (sum_squared_deviations(values) / n).sqrt(),
            Statistic::SampleStdDev => (sum_squared_deviations(values) / (n - 1.0)).sqrt(),
            Statistic::Custom(f) => f(values),
        }
    }

    /// Short name used in logs and text dumps
    pub fn name(&self) -> &'static str {
        match self {
            Statistic::Variance => "variance",
            Statistic::PopulationVariance => "population variance",
            Statistic::StdDev => "stddev",
            Statistic::SampleStdDev => "sample stddev",
            Statistic::Custom(_) => "custom",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Two-pass: deviations are taken about the mean, never E[x^2] - E[x]^2.
fn sum_squared_deviations(values: &[f64]) -> f64 {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean) * (v - mean)).sum()
}

/// Options for the subdivision test
#[derive(Debug, Clone, Copy)]
pub struct DispersionConfig {
    /// Statistic computed over a node's values
    pub statistic: Statistic,
    /// Largest dispersion a leaf may keep
    pub threshold: f64,
    /// Depth at which subdivision stops regardless of dispersion (>= 1)
    ///
    /// Subdivision also stops earlier where the box can no longer be
    /// halved: a single grid cell in a region tree, or a point-tree box
    /// whose midpoint rounds onto an edge in `f64`.
    pub max_depth: u32,
}

impl Default for DispersionConfig {
    fn default() -> Self {
        Self {
            statistic: Statistic::StdDev,
            threshold: 1.0,
            max_depth: 7,
        }
    }
}

impl DispersionConfig {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the statistic
    pub fn with_statistic(mut self, statistic: Statistic) -> Self {
        self.statistic = statistic;
        self
    }

    /// Set the threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the depth limit
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check that the options can drive a tree
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidConfiguration`] if `max_depth` is 0 or
    /// `threshold` is not finite.
    pub fn validate(&self) -> TreeResult<()> {
        if self.max_depth == 0 {
            return Err(TreeError::InvalidConfiguration(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if !self.threshold.is_finite() {
            return Err(TreeError::InvalidConfiguration(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Dispersion of `values` under the configured statistic
    #[inline]
    pub fn dispersion(&self, values: &[f64]) -> f64 {
        self.statistic.compute(values)
    }

    /// Check if a node with this dispersion and depth stays a leaf
    #[inline]
    pub fn should_stop(&self, dispersion: f64, depth: u32) -> bool {
        dispersion <= self.threshold || depth >= self.max_depth
    }

    /// Check if a node with this dispersion and depth subdivides
    #[inline]
    pub fn should_subdivide(&self, dispersion: f64, depth: u32) -> bool {
        !self.should_stop(dispersion, depth)
    }
}
