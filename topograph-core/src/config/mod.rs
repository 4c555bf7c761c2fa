//! Generation parameters and their validation rules.
//!
//! [`GenerationConfig`] is an immutable value. Field changes go through the
//! `with_*` methods, which return a fresh configuration or the
//! [`ConfigError`] describing why the change was rejected. Callers that set
//! several fields at once use [`GenerationConfigBuilder`], which validates
//! everything together in [`GenerationConfigBuilder::build`].

use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// Accepted node counts.
pub const NODE_COUNT_RANGE: RangeInclusive<usize> = 3..=20;
/// Smallest accepted lower degree bound.
pub const MIN_DEGREE_FLOOR: usize = 1;
/// Largest accepted upper degree bound.
pub const MAX_DEGREE_CAP: usize = 4;

const DEFAULT_NODE_COUNT: usize = 5;
const DEFAULT_MIN_DEGREE: usize = 1;
const DEFAULT_MAX_DEGREE: usize = 4;
const DEFAULT_MIN_WEIGHT: u32 = 1;
const DEFAULT_MAX_WEIGHT: u32 = 10;

/// Inclusive range edge weights are drawn from.
///
/// # Examples
/// ```
/// use topograph_core::WeightRange;
///
/// let range = WeightRange::new(2, 9)?;
/// assert_eq!((range.min(), range.max()), (2, 9));
/// assert!(WeightRange::new(0, 3).is_err());
/// assert!(WeightRange::new(5, 4).is_err());
/// # Ok::<(), topograph_core::ConfigError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeightRange {
    min: u32,
    max: u32,
}

impl WeightRange {
    /// Creates a weight range.
    ///
    /// # Errors
    /// Returns [`ConfigError::WeightBelowOne`] when either bound is zero and
    /// [`ConfigError::WeightRangeInverted`] when `min > max`.
    pub const fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min == 0 {
            return Err(ConfigError::WeightBelowOne { got: min });
        }
        if max == 0 {
            return Err(ConfigError::WeightBelowOne { got: max });
        }
        if min > max {
            return Err(ConfigError::WeightRangeInverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min(&self) -> u32 { self.min }

    /// Returns the upper bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max(&self) -> u32 { self.max }

    /// Returns `true` when `weight` lies within the range.
    #[must_use]
    pub const fn contains(&self, weight: u32) -> bool {
        weight >= self.min && weight <= self.max
    }

    /// Returns the range as a [`RangeInclusive`] for sampling.
    #[must_use]
    pub const fn as_range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_WEIGHT,
            max: DEFAULT_MAX_WEIGHT,
        }
    }
}

/// Parameters for one [`crate::GraphGenerator::generate`] run.
///
/// `min_degree` is carried and validated but not enforced by the generator;
/// only `max_degree` caps node degrees.
///
/// # Examples
/// ```
/// use topograph_core::{GenerationConfig, WeightRange};
///
/// let config = GenerationConfig::default()
///     .with_node_count(12)?
///     .with_degree_bounds(2, 3)?
///     .with_weights(WeightRange::new(1, 5)?);
/// assert_eq!(config.node_count(), 12);
/// assert_eq!((config.min_degree(), config.max_degree()), (2, 3));
/// assert!(config.weighted());
/// # Ok::<(), topograph_core::ConfigError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GenerationConfig {
    node_count: usize,
    min_degree: usize,
    max_degree: usize,
    weighted: bool,
    weight_range: WeightRange,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            min_degree: DEFAULT_MIN_DEGREE,
            max_degree: DEFAULT_MAX_DEGREE,
            weighted: false,
            weight_range: WeightRange::default(),
        }
    }
}

impl GenerationConfig {
    /// Creates an unweighted configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when any value is outside its domain.
    pub fn new(node_count: usize, min_degree: usize, max_degree: usize) -> Result<Self, ConfigError> {
        Self {
            node_count,
            min_degree,
            max_degree,
            ..Self::default()
        }
        .validated()
    }

    /// Starts a builder populated with the default configuration.
    #[must_use]
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }

    /// Returns the number of nodes to create.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the advisory lower degree bound.
    #[must_use]
    #[rustfmt::skip]
    pub const fn min_degree(&self) -> usize { self.min_degree }

    /// Returns the degree cap applied during generation.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_degree(&self) -> usize { self.max_degree }

    /// Returns whether edges receive random weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weighted(&self) -> bool { self.weighted }

    /// Returns the weight range used when [`Self::weighted`] is set.
    ///
    /// The range is kept while weighting is off so toggling it back on
    /// restores the previous bounds.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight_range(&self) -> WeightRange { self.weight_range }

    /// Returns a copy with a different node count.
    ///
    /// # Errors
    /// Returns [`ConfigError::NodeCountOutOfRange`] outside [`NODE_COUNT_RANGE`].
    pub fn with_node_count(self, node_count: usize) -> Result<Self, ConfigError> {
        Self { node_count, ..self }.validated()
    }

    /// Returns a copy with a different lower degree bound.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the bound is below [`MIN_DEGREE_FLOOR`] or
    /// above the current upper bound.
    pub fn with_min_degree(self, min_degree: usize) -> Result<Self, ConfigError> {
        Self { min_degree, ..self }.validated()
    }

    /// Returns a copy with a different degree cap.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the cap exceeds [`MAX_DEGREE_CAP`] or is
    /// below the current lower bound.
    pub fn with_max_degree(self, max_degree: usize) -> Result<Self, ConfigError> {
        Self { max_degree, ..self }.validated()
    }

    /// Returns a copy with both degree bounds replaced at once.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the pair violates the degree rules.
    pub fn with_degree_bounds(
        self,
        min_degree: usize,
        max_degree: usize,
    ) -> Result<Self, ConfigError> {
        Self {
            min_degree,
            max_degree,
            ..self
        }
        .validated()
    }

    /// Returns a copy with weighting switched on or off.
    #[must_use]
    pub const fn with_weighting(self, weighted: bool) -> Self {
        Self { weighted, ..self }
    }

    /// Returns a weighted copy drawing weights from `weight_range`.
    #[must_use]
    pub const fn with_weights(self, weight_range: WeightRange) -> Self {
        Self {
            weighted: true,
            weight_range,
            ..self
        }
    }

    /// Checks every field against its domain.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found, checking node count, then the
    /// degree bounds, then the weight range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !NODE_COUNT_RANGE.contains(&self.node_count) {
            return Err(ConfigError::NodeCountOutOfRange {
                got: self.node_count,
                min: *NODE_COUNT_RANGE.start(),
                max: *NODE_COUNT_RANGE.end(),
            });
        }
        if self.min_degree < MIN_DEGREE_FLOOR {
            return Err(ConfigError::MinDegreeTooSmall {
                got: self.min_degree,
                min: MIN_DEGREE_FLOOR,
            });
        }
        if self.max_degree > MAX_DEGREE_CAP {
            return Err(ConfigError::MaxDegreeTooLarge {
                got: self.max_degree,
                max: MAX_DEGREE_CAP,
            });
        }
        if self.max_degree < self.min_degree {
            return Err(ConfigError::DegreeBoundsInverted {
                min_degree: self.min_degree,
                max_degree: self.max_degree,
            });
        }
        WeightRange::new(self.weight_range.min, self.weight_range.max).map(|_| ())
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    #[cfg(test)]
    pub(crate) const fn unchecked(node_count: usize, min_degree: usize, max_degree: usize) -> Self {
        Self {
            node_count,
            min_degree,
            max_degree,
            weighted: false,
            weight_range: WeightRange {
                min: DEFAULT_MIN_WEIGHT,
                max: DEFAULT_MAX_WEIGHT,
            },
        }
    }
}

/// Collects raw generation parameters and validates them together.
///
/// # Examples
/// ```
/// use topograph_core::GenerationConfig;
///
/// let config = GenerationConfig::builder()
///     .with_node_count(8)
///     .with_min_degree(2)
///     .with_max_degree(3)
///     .with_weight_bounds(2, 6)
///     .with_weighting(true)
///     .build()?;
/// assert_eq!(config.weight_range().max(), 6);
///
/// let err = GenerationConfig::builder().with_node_count(40).build();
/// assert!(err.is_err());
/// # Ok::<(), topograph_core::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GenerationConfigBuilder {
    node_count: usize,
    min_degree: usize,
    max_degree: usize,
    weighted: bool,
    min_weight: u32,
    max_weight: u32,
}

impl Default for GenerationConfigBuilder {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            min_degree: DEFAULT_MIN_DEGREE,
            max_degree: DEFAULT_MAX_DEGREE,
            weighted: false,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }
}

impl GenerationConfigBuilder {
    /// Overrides the node count.
    #[must_use]
    pub const fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Overrides the advisory lower degree bound.
    #[must_use]
    pub const fn with_min_degree(mut self, min_degree: usize) -> Self {
        self.min_degree = min_degree;
        self
    }

    /// Overrides the degree cap.
    #[must_use]
    pub const fn with_max_degree(mut self, max_degree: usize) -> Self {
        self.max_degree = max_degree;
        self
    }

    /// Enables or disables random edge weights.
    #[must_use]
    pub const fn with_weighting(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Overrides the inclusive weight bounds.
    #[must_use]
    pub const fn with_weight_bounds(mut self, min_weight: u32, max_weight: u32) -> Self {
        self.min_weight = min_weight;
        self.max_weight = max_weight;
        self
    }

    /// Validates the collected values and produces a [`GenerationConfig`].
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        GenerationConfig {
            node_count: self.node_count,
            min_degree: self.min_degree,
            max_degree: self.max_degree,
            weighted: self.weighted,
            weight_range: WeightRange {
                min: self.min_weight,
                max: self.max_weight,
            },
        }
        .validated()
    }
}

#[cfg(test)]
mod tests;
