use crate::degree::DegreeSelector;
use crate::error::GravityResult;
use crate::jacobian::GravityGradient;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selected degree over a radius sweep, one row per radius and one column
/// per tolerance.
pub fn export_degree_surface(
    selector: &DegreeSelector,
    radii: &[f64],
    tolerances: &[f64],
    filename: &Path,
) -> GravityResult<()> {
    let mut writer = csv::Writer::from_path(filename)?;

    let mut header = vec!["radius".to_string()];
    header.extend(tolerances.iter().map(|tol| format!("tol={:e}", tol)));
    writer.write_record(&header)?;

    for r in radii {
        let position = DVec3::new(r * selector.distance_unit, 0.0, 0.0);
        let mut record = vec![format!("{:e}", r)];
        record.extend(
            tolerances
                .iter()
                .map(|tol| selector.select(position, *tol).to_string()),
        );
        writer.write_record(&record)?;
    }

    writer.flush()?;

    Ok(())
}

/// Numerical gradient next to the closed form at one point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientReport {
    pub position: DVec3,
    pub tolerance: f64,
    pub degree: u32,
    pub step: f64,
    pub numeric: GravityGradient,
    pub analytic: GravityGradient,
    pub relative_error: f64,
}

pub fn write_report(reports: &[GradientReport], filename: &Path) -> GravityResult<()> {
    let s = serde_yaml::to_string(reports)?;
    std::fs::write(filename, s)?;
    Ok(())
}
