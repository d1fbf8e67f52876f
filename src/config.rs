#![warn(missing_docs)]
//! Configuration of a point generation request.
//!
//! A [`GenerationConfig`] can be built from parsed values, from the raw strings typed into a
//! shell (see [`GenerationConfig::from_inputs`]) or read from a YAML file.
use crate::{
    error::{CgResult, CoordGenError},
    point::Dimension,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, str::FromStr};
use strum::{Display, EnumIter, EnumString};

/// Strategy used for generating points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GenerationMode {
    /// evenly spaced points on the Cartesian product of the per-axis sequences
    Grid,
    /// independent, uniformly distributed points
    #[default]
    Random,
}

impl GenerationMode {
    /// Parse a mode string (case insensitive).
    ///
    /// # Errors
    ///
    /// This function will return [`CoordGenError::InvalidConfiguration`] naming the string if it
    /// is not a known mode.
    pub fn parse(mode: &str) -> CgResult<Self> {
        Self::from_str(mode.trim()).map_err(|_| {
            CoordGenError::InvalidConfiguration(format!(
                "unknown mode '{mode}'. Use 'grid' or 'random'"
            ))
        })
    }
}

/// Lower and upper limit of one coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// lower limit
    pub min: f64,
    /// upper limit
    pub max: f64,
}

impl AxisBounds {
    /// Create new [`AxisBounds`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - one of the limits is not finite.
    ///   - `min` > `max`.
    ///   - `max - min` is not representable as finite number.
    pub fn new(min: f64, max: f64) -> CgResult<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }
    /// Check the invariants of these [`AxisBounds`].
    ///
    /// # Errors
    ///
    /// This function will return [`CoordGenError::InvalidConfiguration`] under the conditions
    /// listed for [`AxisBounds::new`].
    pub fn validate(&self) -> CgResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(CoordGenError::InvalidConfiguration(
                "axis limits must be finite".into(),
            ));
        }
        if self.min > self.max {
            return Err(CoordGenError::InvalidConfiguration(format!(
                "axis minimum ({}) must be <= maximum ({})",
                self.min, self.max
            )));
        }
        if !self.width().is_finite() {
            return Err(CoordGenError::InvalidConfiguration(format!(
                "axis range [{}, {}] is too wide",
                self.min, self.max
            )));
        }
        Ok(())
    }
    /// Returns `max - min`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
    /// Returns `true` if `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// All parameters of a generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// bounds per axis. Two entries for planar, three for spatial point sets.
    pub bounds: Vec<AxisBounds>,
    /// requested number of points. Upper limit in grid mode, exact number in random mode.
    pub count: usize,
    /// distance between neighbouring grid points (grid mode only)
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    /// generation strategy
    #[serde(default)]
    pub mode: GenerationMode,
}

const fn default_spacing() -> f64 {
    1.0
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            bounds: vec![
                AxisBounds { min: 0.0, max: 10.0 },
                AxisBounds { min: 0.0, max: 10.0 },
                AxisBounds { min: 0.0, max: 10.0 },
            ],
            count: 100,
            spacing: default_spacing(),
            mode: GenerationMode::default(),
        }
    }
}

/// Parse a real number typed by the user.
///
/// # Errors
///
/// This function will return [`CoordGenError::InvalidConfiguration`] if `input` is not a finite
/// number.
pub fn parse_f64(input: &str, what: &str) -> CgResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            CoordGenError::InvalidConfiguration(format!("{what} must be a number, got '{input}'"))
        })
}

/// Parse a point count typed by the user. Negative numbers are rejected.
///
/// # Errors
///
/// This function will return [`CoordGenError::InvalidConfiguration`] if `input` is not a
/// non-negative integer.
pub fn parse_count(input: &str) -> CgResult<usize> {
    let count = input.trim().parse::<i64>().map_err(|_| {
        CoordGenError::InvalidConfiguration(format!(
            "number of points must be an integer, got '{input}'"
        ))
    })?;
    usize::try_from(count).map_err(|_| {
        CoordGenError::InvalidConfiguration(format!(
            "number of points must not be negative, got {count}"
        ))
    })
}

fn check_spacing(spacing: f64) -> CgResult<()> {
    if spacing.is_finite() && spacing > 0.0 {
        Ok(())
    } else {
        Err(CoordGenError::InvalidConfiguration(format!(
            "spacing must be > 0 and finite in grid mode, got {spacing}"
        )))
    }
}

/// Parse a grid spacing typed by the user.
///
/// # Errors
///
/// This function will return [`CoordGenError::InvalidConfiguration`] if `input` is not a finite
/// number > 0.
pub fn parse_spacing(input: &str) -> CgResult<f64> {
    let spacing = parse_f64(input, "spacing")?;
    check_spacing(spacing)?;
    Ok(spacing)
}

impl GenerationConfig {
    /// Create a new, validated [`GenerationConfig`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the parameters violate one of the checks of
    /// [`GenerationConfig::validate`].
    pub fn new(
        bounds: Vec<AxisBounds>,
        count: usize,
        spacing: f64,
        mode: GenerationMode,
    ) -> CgResult<Self> {
        let config = Self {
            bounds,
            count,
            spacing,
            mode,
        };
        config.validate()?;
        Ok(config)
    }
    /// Create a [`GenerationConfig`] from raw text inputs as typed into a shell.
    ///
    /// `bounds` holds `min, max` pairs for each axis in the order x, y[, z].
    ///
    /// # Errors
    ///
    /// This function will return [`CoordGenError::InvalidConfiguration`] if
    ///   - a value is not numeric.
    ///   - the number of bound values is neither 4 nor 6.
    ///   - the mode is unknown.
    ///   - the resulting config is invalid.
    pub fn from_inputs(bounds: &[&str], count: &str, spacing: &str, mode: &str) -> CgResult<Self> {
        if bounds.len() != 4 && bounds.len() != 6 {
            return Err(CoordGenError::InvalidConfiguration(format!(
                "expected 4 or 6 axis limits, got {}",
                bounds.len()
            )));
        }
        let mut axis_bounds = Vec::with_capacity(bounds.len() / 2);
        for (pair, axis) in bounds.chunks(2).zip(crate::point::AXIS_NAMES) {
            let min = parse_f64(pair[0], &format!("{axis} min"))?;
            let max = parse_f64(pair[1], &format!("{axis} max"))?;
            axis_bounds.push(AxisBounds { min, max });
        }
        Self::new(
            axis_bounds,
            parse_count(count)?,
            parse_f64(spacing, "spacing")?,
            GenerationMode::parse(mode)?,
        )
    }
    /// Read a [`GenerationConfig`] from a YAML file.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the file cannot be read.
    ///   - the file content cannot be parsed.
    ///   - the parsed config is invalid.
    pub fn from_yaml_file(path: &Path) -> CgResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CoordGenError::IoFailure(format!("cannot read file {} : {e}", path.display()))
        })?;
        Self::from_yaml(&contents)
    }
    /// Parse a [`GenerationConfig`] from a YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the string cannot be parsed or the config is
    /// invalid.
    pub fn from_yaml(yaml: &str) -> CgResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }
    /// Serialize this [`GenerationConfig`] to YAML.
    ///
    /// # Errors
    ///
    /// This function will return an error if serialization fails.
    pub fn to_yaml(&self) -> CgResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CoordGenError::Other(format!("serialization of config failed: {e}")))
    }
    /// Check the invariants of this config.
    ///
    /// # Errors
    ///
    /// This function will return [`CoordGenError::InvalidConfiguration`] if
    ///   - there are not 2 or 3 axes.
    ///   - an axis has non-finite limits or `min` > `max`.
    ///   - `spacing` is not finite and > 0 in grid mode.
    ///   - `count` is zero in random mode.
    pub fn validate(&self) -> CgResult<()> {
        if self.bounds.len() != 2 && self.bounds.len() != 3 {
            return Err(CoordGenError::InvalidConfiguration(format!(
                "bounds for 2 or 3 axes required, got {}",
                self.bounds.len()
            )));
        }
        for bounds in &self.bounds {
            bounds.validate()?;
        }
        match self.mode {
            GenerationMode::Grid => check_spacing(self.spacing)?,
            GenerationMode::Random => {
                if self.count == 0 {
                    return Err(CoordGenError::InvalidConfiguration(
                        "number of points must be > 0 in random mode".into(),
                    ));
                }
            }
        }
        Ok(())
    }
    /// Returns the [`Dimension`] of the point sets generated with this config.
    ///
    /// # Errors
    ///
    /// This function will return an error if the config has neither 2 nor 3 axes.
    pub fn dimension(&self) -> CgResult<Dimension> {
        Dimension::from_nr_of_axes(self.bounds.len()).map_err(|_| {
            CoordGenError::InvalidConfiguration(format!(
                "bounds for 2 or 3 axes required, got {}",
                self.bounds.len()
            ))
        })
    }
}
