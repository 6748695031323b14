//! Radially adaptive selection of the spherical-harmonic gravity degree.
//!
//! The degree surface was tuned offline: for each radius bin and tolerance
//! bin it holds the smallest degree whose truncation error stays below the
//! tolerance. Selection is a bounded scan and a table read, cheap enough to
//! run at every evaluation point of the integrator.
//!
//! Reference: Probe, Macomber, Read, Woollands, Junkins, "Radially Adaptive
//! Evaluation of the Spherical Harmonic Gravity Series for Numerical Orbit
//! Propagation", AAS/AIAA Space Flight Mechanics Meeting, 2015.

use crate::constants::{DU, MAX_TABULATED_DEGREE};
use crate::tables::{DEGREE_SURFACE, RADIUS_BINS, RADIUS_BOUNDARIES, TOLERANCE_BINS};
use glam::DVec3;

/// 1-based tolerance column for `tolerance`, clamped to `[1, 14]`.
///
/// The column is `trunc(|log10(tolerance) + 1|)`. Zero, negative and NaN
/// tolerances fall in the tightest column.
pub fn tolerance_bin(tolerance: f64) -> usize {
    let bin = (tolerance.log10() + 1.0).abs().trunc();
    if bin.is_nan() || bin >= TOLERANCE_BINS as f64 {
        TOLERANCE_BINS
    } else {
        (bin as usize).max(1)
    }
}

/// 1-based radius row for a non-dimensional radius.
///
/// Picks the last bin whose inner boundary is at or below `radius`, so ties
/// go to the farther bin. Radii below every boundary, and NaN, land in bin 1,
/// which asks for the most harmonics.
pub fn radius_bin(radius: f64) -> usize {
    // boundaries are sorted, so the count at or below `radius` is the last match
    RADIUS_BOUNDARIES
        .partition_point(|b| *b <= radius)
        .clamp(1, RADIUS_BINS)
}

/// Raw surface entry for 1-based bins. Out of range bins are clamped.
pub fn tabulated_degree(radius_bin: usize, tolerance_bin: usize) -> u32 {
    let r = radius_bin.clamp(1, RADIUS_BINS);
    let t = tolerance_bin.clamp(1, TOLERANCE_BINS);
    DEGREE_SURFACE[(r - 1) * TOLERANCE_BINS + (t - 1)] as u32
}

/// Smallest certified degree for `position` (km) at `tolerance`, never above
/// `max_degree`.
pub fn select_degree(position: DVec3, tolerance: f64, max_degree: u32) -> u32 {
    select_degree_in_units(position, tolerance, max_degree, DU)
}

/// As [`select_degree`], with an explicit reference length for the radius.
pub fn select_degree_in_units(
    position: DVec3,
    tolerance: f64,
    max_degree: u32,
    distance_unit: f64,
) -> u32 {
    let r = position.length() / distance_unit;
    let degree = tabulated_degree(radius_bin(r), tolerance_bin(tolerance));
    degree.min(max_degree.clamp(1, MAX_TABULATED_DEGREE))
}

/// Selection parameters bundled for use inside a propagation loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeSelector {
    pub distance_unit: f64,
    pub max_degree: u32,
}

impl Default for DegreeSelector {
    fn default() -> Self {
        DegreeSelector {
            distance_unit: DU,
            max_degree: MAX_TABULATED_DEGREE,
        }
    }
}

impl DegreeSelector {
    pub fn new(distance_unit: f64, max_degree: u32) -> Self {
        if max_degree == 0 || max_degree > MAX_TABULATED_DEGREE {
            log::debug!(
                "max degree {} clamped to [1, {}]",
                max_degree,
                MAX_TABULATED_DEGREE
            );
        }
        DegreeSelector {
            distance_unit,
            max_degree: max_degree.clamp(1, MAX_TABULATED_DEGREE),
        }
    }

    pub fn select(&self, position: DVec3, tolerance: f64) -> u32 {
        select_degree_in_units(position, tolerance, self.max_degree, self.distance_unit)
    }
}
