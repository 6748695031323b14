//! Kernel settings, stored as YAML next to the rest of a propagation setup.

use crate::constants::{DEFAULT_STEP, DU, MAX_TABULATED_DEGREE};
use crate::degree::DegreeSelector;
use crate::error::{GravityError, GravityResult};
use crate::layout::JacobianLayout;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Reference length used to non-dimensionalize radius (km).
    pub distance_unit: f64,
    /// Gravity accuracy target handed to the degree selector.
    pub tolerance: f64,
    /// Ceiling on the selected degree, in `[1, 100]`.
    pub max_degree: u32,
    /// Central-difference step (km).
    pub step: f64,
    pub layout: JacobianLayout,
}

impl Default for KernelConfig {
    fn default() -> Self {
        KernelConfig {
            distance_unit: DU,
            tolerance: 1e-9,
            max_degree: MAX_TABULATED_DEGREE,
            step: DEFAULT_STEP,
            layout: JacobianLayout::packed(),
        }
    }
}

impl KernelConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_max_degree(mut self, max_degree: u32) -> Self {
        self.max_degree = max_degree;
        self
    }

    pub fn selector(&self) -> DegreeSelector {
        DegreeSelector::new(self.distance_unit, self.max_degree)
    }

    pub fn validate(&self) -> GravityResult<()> {
        if !(self.distance_unit.is_finite() && self.distance_unit > 0.0) {
            return Err(GravityError::InvalidConfig(format!(
                "distance_unit must be positive, got {}",
                self.distance_unit
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(GravityError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_degree == 0 || self.max_degree > MAX_TABULATED_DEGREE {
            return Err(GravityError::InvalidConfig(format!(
                "max_degree must be in [1, {}], got {}",
                MAX_TABULATED_DEGREE, self.max_degree
            )));
        }
        if self.step == 0.0 || !self.step.is_finite() {
            return Err(GravityError::InvalidStep(self.step));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> GravityResult<KernelConfig> {
    let s = std::fs::read_to_string(path)?;
    let config: KernelConfig = serde_yaml::from_str(&s)?;
    config.validate()?;
    log::debug!("loaded kernel config from {}: {:?}", path.display(), config);
    Ok(config)
}

pub fn save_config(config: &KernelConfig, path: &Path) -> GravityResult<()> {
    let s = serde_yaml::to_string(config)?;
    std::fs::write(path, s)?;
    Ok(())
}
