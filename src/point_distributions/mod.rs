#![warn(missing_docs)]
//! Module for generating point distributions
//!
//! The available strategies are [`Grid`] and [`Random`]. A [`Generator`] selects one of them
//! from a [`GenerationConfig`], and [`generate`] turns the result into a labeled [`PointSet`].
//!
//! ## Example
//!
//! ```rust
//! use coordgen::config::{AxisBounds, GenerationConfig, GenerationMode};
//! use coordgen::point_distributions::generate;
//!
//! let config = GenerationConfig::new(
//!     vec![AxisBounds::new(0.0, 1.0).unwrap(); 3],
//!     100,
//!     1.0,
//!     GenerationMode::Grid,
//! )
//! .unwrap();
//! let points = generate(&config, None).unwrap();
//! assert_eq!(points.len(), 8);
//! assert_eq!(points.get(7).unwrap().coords(), &[1.0, 1.0, 1.0]);
//! ```
use crate::{
    config::{GenerationConfig, GenerationMode},
    error::CgResult,
    point::{Dimension, PointSet},
};
use log::{info, warn};

mod grid;
mod random;

pub use grid::{Grid, GRID_EPSILON};
pub use random::Random;

/// Trait for the generation of point distributions
pub trait PointDistribution {
    /// Returns the [`Dimension`] of the generated points.
    fn dimension(&self) -> Dimension;
    /// Generate the point distribution.
    ///
    /// Returns one coordinate tuple per point, in generation order.
    fn generate(&self) -> Vec<Vec<f64>>;
}

/// A point distribution strategy selected by [`GenerationMode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Generator {
    /// see [`Grid`]
    Grid(Grid),
    /// see [`Random`]
    Random(Random),
}

impl Generator {
    /// Create the [`Generator`] described by a [`GenerationConfig`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the config is invalid.
    pub fn from_config(config: &GenerationConfig) -> CgResult<Self> {
        config.validate()?;
        Ok(match config.mode {
            GenerationMode::Grid => {
                Grid::new(config.bounds.clone(), config.spacing, config.count)?.into()
            }
            GenerationMode::Random => Random::new(config.bounds.clone(), config.count)?.into(),
        })
    }
    /// Returns the [`GenerationMode`] of this [`Generator`].
    #[must_use]
    pub const fn mode(&self) -> GenerationMode {
        match self {
            Self::Grid(_) => GenerationMode::Grid,
            Self::Random(_) => GenerationMode::Random,
        }
    }
}

impl PointDistribution for Generator {
    fn dimension(&self) -> Dimension {
        match self {
            Self::Grid(g) => g.dimension(),
            Self::Random(r) => r.dimension(),
        }
    }
    fn generate(&self) -> Vec<Vec<f64>> {
        match self {
            Self::Grid(g) => g.generate(),
            Self::Random(r) => r.generate(),
        }
    }
}

/// Generate a labeled [`PointSet`] as described by a [`GenerationConfig`].
///
/// The points are labeled "P1".."PN" in generation order unless `labels` contains exactly one
/// label per generated point.
///
/// # Errors
///
/// This function will return an error if the config is invalid.
pub fn generate(config: &GenerationConfig, labels: Option<Vec<String>>) -> CgResult<PointSet> {
    let generator = Generator::from_config(config)?;
    let points = PointSet::from_coordinates(generator.dimension(), generator.generate(), labels)?;
    if points.is_empty() {
        warn!("{} generation produced no points", generator.mode());
    } else {
        info!(
            "Generated {} {} points in {} mode",
            points.len(),
            points.dimension(),
            generator.mode()
        );
    }
    Ok(points)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{config::AxisBounds, error::CoordGenError};
    use assert_matches::assert_matches;
    fn unit_bounds(nr_of_axes: usize) -> Vec<AxisBounds> {
        vec![AxisBounds::new(0.0, 1.0).unwrap(); nr_of_axes]
    }
    #[test]
    fn from_config() {
        let config =
            GenerationConfig::new(unit_bounds(3), 10, 0.5, GenerationMode::Grid).unwrap();
        let generator = Generator::from_config(&config).unwrap();
        assert_eq!(generator.mode(), GenerationMode::Grid);
        assert_eq!(generator.dimension(), Dimension::Three);
        let config =
            GenerationConfig::new(unit_bounds(2), 10, 0.5, GenerationMode::Random).unwrap();
        let generator = Generator::from_config(&config).unwrap();
        assert_eq!(generator.mode(), GenerationMode::Random);
        assert_eq!(generator.dimension(), Dimension::Two);
    }
    #[test]
    fn from_invalid_config() {
        let config = GenerationConfig {
            bounds: unit_bounds(3),
            count: 0,
            spacing: 1.0,
            mode: GenerationMode::Random,
        };
        assert_matches!(
            Generator::from_config(&config),
            Err(CoordGenError::InvalidConfiguration(_))
        );
        assert_matches!(
            generate(&config, None),
            Err(CoordGenError::InvalidConfiguration(_))
        );
        let config = GenerationConfig {
            bounds: unit_bounds(3),
            count: 10,
            spacing: 0.0,
            mode: GenerationMode::Grid,
        };
        assert_matches!(
            generate(&config, None),
            Err(CoordGenError::InvalidConfiguration(_))
        );
    }
    #[test]
    fn generate_grid() {
        let config =
            GenerationConfig::new(unit_bounds(3), 100, 1.0, GenerationMode::Grid).unwrap();
        let points = generate(&config, None).unwrap();
        assert_eq!(points.len(), 8);
        assert_eq!(points.get(0).unwrap().coords(), &[0.0, 0.0, 0.0]);
        assert_eq!(points.get(7).unwrap().coords(), &[1.0, 1.0, 1.0]);
        assert_eq!(points.labels(), vec!["P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8"]);
    }
    #[test]
    fn generate_grid_truncated() {
        let config = GenerationConfig::new(unit_bounds(3), 2, 1.0, GenerationMode::Grid).unwrap();
        let points = generate(&config, None).unwrap();
        assert_eq!(
            points.coordinates(),
            vec![vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 1.0]]
        );
    }
    #[test]
    fn generate_random() {
        let config = GenerationConfig::new(
            vec![
                AxisBounds::new(-10.0, 10.0).unwrap(),
                AxisBounds::new(0.0, 100.0).unwrap(),
                AxisBounds::new(-3.0, -2.0).unwrap(),
            ],
            250,
            1.0,
            GenerationMode::Random,
        )
        .unwrap();
        let points = generate(&config, None).unwrap();
        assert_eq!(points.len(), 250);
        for p in &points {
            for (value, b) in p.coords().iter().zip(&config.bounds) {
                assert!(b.contains(*value));
            }
        }
    }
    #[test]
    fn generate_with_labels() {
        let config = GenerationConfig::new(unit_bounds(2), 4, 1.0, GenerationMode::Grid).unwrap();
        let labels: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| (*s).to_string()).collect();
        let points = generate(&config, Some(labels)).unwrap();
        assert_eq!(points.labels(), vec!["A", "B", "C", "D"]);
        let points = generate(&config, Some(vec!["A".into()])).unwrap();
        assert_eq!(points.labels(), vec!["P1", "P2", "P3", "P4"]);
    }
    #[test]
    fn unknown_mode() {
        assert_matches!(
            GenerationConfig::from_inputs(&["0", "1", "0", "1", "0", "1"], "5", "1", "spiral"),
            Err(CoordGenError::InvalidConfiguration(msg)) if msg.contains("spiral")
        );
    }
}
