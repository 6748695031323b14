//! Gravity fields the gradient builder can difference.
//!
//! The full spherical-harmonic evaluator lives outside this crate; it plugs
//! in through [`GravityField`], usually via [`FnField`]. The closed-form
//! fields here are for validation and for propagating far from the body.

use crate::constants::{DU, J2, MAX_TABULATED_DEGREE, MU};
use crate::error::{GravityError, GravityResult};
use glam::{DMat3, DVec3};

/// Acceleration as a function of position and truncation degree.
pub trait GravityField {
    /// Acceleration at `position`, truncated at `degree`.
    fn acceleration(&self, position: DVec3, degree: u32) -> GravityResult<DVec3>;

    /// Highest degree this field can evaluate.
    fn max_degree(&self) -> u32;
}

impl<F: GravityField + ?Sized> GravityField for &F {
    fn acceleration(&self, position: DVec3, degree: u32) -> GravityResult<DVec3> {
        (**self).acceleration(position, degree)
    }

    fn max_degree(&self) -> u32 {
        (**self).max_degree()
    }
}

fn check_degree(degree: u32, max: u32) -> GravityResult<()> {
    if degree == 0 {
        return Err(GravityError::InvalidDegree(degree));
    }
    if degree > max {
        return Err(GravityError::DegreeOutOfRange { degree, max });
    }
    Ok(())
}

/// Radius of a position that is finite and outside `body_radius`.
fn physical_radius(position: DVec3, body_radius: f64) -> GravityResult<f64> {
    if !position.is_finite() {
        return Err(GravityError::NonFinite);
    }
    let r = position.length();
    if r == 0.0 || r < body_radius {
        return Err(GravityError::NonPhysicalPosition { radius: r });
    }
    Ok(r)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub mu: f64,
    /// Positions below this radius are rejected.
    pub radius: f64,
    pub max_degree: u32,
}

impl PointMass {
    pub fn new(mu: f64, radius: f64) -> Self {
        PointMass {
            mu,
            radius,
            max_degree: MAX_TABULATED_DEGREE,
        }
    }

    pub fn earth() -> Self {
        PointMass::new(MU, DU)
    }

    /// -mu / r^3 (I - 3 r_hat r_hat^T), column n holding d(accel)/d(r_n).
    pub fn analytic_gradient(&self, position: DVec3) -> DMat3 {
        let r = position.length();
        let u = position / r;
        let outer = DMat3::from_cols(u * u.x, u * u.y, u * u.z);
        (DMat3::IDENTITY - outer * 3.0) * (-self.mu / r.powi(3))
    }
}

impl GravityField for PointMass {
    fn acceleration(&self, position: DVec3, degree: u32) -> GravityResult<DVec3> {
        check_degree(degree, self.max_degree)?;
        let r = physical_radius(position, self.radius)?;
        Ok(position * (-self.mu / r.powi(3)))
    }

    fn max_degree(&self) -> u32 {
        self.max_degree
    }
}

/// Point mass plus the J2 oblateness term, which switches on at degree 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZonalJ2 {
    pub mu: f64,
    pub radius: f64,
    pub j2: f64,
    pub max_degree: u32,
}

impl ZonalJ2 {
    pub fn earth() -> Self {
        ZonalJ2 {
            mu: MU,
            radius: DU,
            j2: J2,
            max_degree: MAX_TABULATED_DEGREE,
        }
    }

    fn j2_accel(&self, position: DVec3, r: f64) -> DVec3 {
        let r2 = r * r;
        let factor = 1.5 * self.j2 * self.mu * self.radius.powi(2) / (r2 * r2 * r);
        let z2_r2 = position.z * position.z / r2;
        DVec3::new(
            factor * position.x * (5.0 * z2_r2 - 1.0),
            factor * position.y * (5.0 * z2_r2 - 1.0),
            factor * position.z * (5.0 * z2_r2 - 3.0),
        )
    }
}

impl GravityField for ZonalJ2 {
    fn acceleration(&self, position: DVec3, degree: u32) -> GravityResult<DVec3> {
        check_degree(degree, self.max_degree)?;
        let r = physical_radius(position, self.radius)?;
        let mut accel = position * (-self.mu / r.powi(3));
        if degree >= 2 {
            accel += self.j2_accel(position, r);
        }
        Ok(accel)
    }

    fn max_degree(&self) -> u32 {
        self.max_degree
    }
}

/// Adapts an external evaluator closure into a [`GravityField`].
///
/// Failures from the closure are passed through untouched; only degree 0 is
/// rejected up front.
pub struct FnField<F> {
    func: F,
    max_degree: u32,
}

impl<F> FnField<F>
where
    F: Fn(DVec3, u32) -> GravityResult<DVec3>,
{
    pub fn new(max_degree: u32, func: F) -> Self {
        FnField { func, max_degree }
    }
}

impl<F> GravityField for FnField<F>
where
    F: Fn(DVec3, u32) -> GravityResult<DVec3>,
{
    fn acceleration(&self, position: DVec3, degree: u32) -> GravityResult<DVec3> {
        if degree == 0 {
            return Err(GravityError::InvalidDegree(degree));
        }
        (self.func)(position, degree)
    }

    fn max_degree(&self) -> u32 {
        self.max_degree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_mass_surface_gravity() {
        let field = PointMass::earth();
        let a = field.acceleration(DVec3::new(DU, 0.0, 0.0), 1).unwrap();
        // ~9.798 m/s^2 at the equator
        assert_relative_eq!(a.x, -9.798e-3, max_relative = 1e-3);
        assert_eq!(a.y, 0.0);
        assert_eq!(a.z, 0.0);
    }

    #[test]
    fn point_mass_ignores_degree() {
        let field = PointMass::earth();
        let p = DVec3::new(7000.0, -1200.0, 300.0);
        let a1 = field.acceleration(p, 1).unwrap();
        let a100 = field.acceleration(p, 100).unwrap();
        assert_eq!(a1, a100);
    }

    #[test]
    fn degree_contract() {
        let field = PointMass::earth();
        let p = DVec3::new(7000.0, 0.0, 0.0);
        assert!(matches!(
            field.acceleration(p, 0),
            Err(GravityError::InvalidDegree(0))
        ));
        assert!(matches!(
            field.acceleration(p, 101),
            Err(GravityError::DegreeOutOfRange { degree: 101, max: 100 })
        ));
    }

    #[test]
    fn rejects_non_physical_positions() {
        let field = ZonalJ2::earth();
        assert!(matches!(
            field.acceleration(DVec3::ZERO, 2),
            Err(GravityError::NonPhysicalPosition { .. })
        ));
        assert!(matches!(
            field.acceleration(DVec3::new(3000.0, 0.0, 0.0), 2),
            Err(GravityError::NonPhysicalPosition { .. })
        ));
        assert!(matches!(
            field.acceleration(DVec3::new(f64::NAN, 7000.0, 0.0), 2),
            Err(GravityError::NonFinite)
        ));
    }

    #[test]
    fn j2_switches_on_at_degree_two() {
        let field = ZonalJ2::earth();
        let p = DVec3::new(7000.0, 0.0, 0.0);
        let a1 = field.acceleration(p, 1).unwrap();
        let a2 = field.acceleration(p, 2).unwrap();
        let a50 = field.acceleration(p, 50).unwrap();
        assert_eq!(a2, a50);
        // equatorial J2 pulls inward, about 1e-3 of the central term
        let extra = a2.x - a1.x;
        assert!(extra < 0.0);
        assert_relative_eq!(extra / a1.x, 1.5 * J2 * (DU / 7000.0).powi(2), max_relative = 1e-9);
    }

    #[test]
    fn analytic_gradient_is_traceless() {
        let field = PointMass::earth();
        let g = field.analytic_gradient(DVec3::new(7000.0, 2000.0, -500.0));
        let trace = g.x_axis.x + g.y_axis.y + g.z_axis.z;
        assert!(trace.abs() < 1e-20);
        assert_relative_eq!(g.x_axis.y, g.y_axis.x, max_relative = 1e-12);
    }

    #[test]
    fn closure_field_passes_errors_through() {
        let field = FnField::new(100, |p: DVec3, _d: u32| {
            if p.x > 0.0 {
                Ok(DVec3::ONE)
            } else {
                Err(GravityError::NonPhysicalPosition { radius: p.length() })
            }
        });
        assert_eq!(field.acceleration(DVec3::X, 3).unwrap(), DVec3::ONE);
        assert!(matches!(
            field.acceleration(-DVec3::X, 3),
            Err(GravityError::NonPhysicalPosition { .. })
        ));
        assert!(matches!(
            field.acceleration(DVec3::X, 0),
            Err(GravityError::InvalidDegree(0))
        ));
        assert_eq!(field.max_degree(), 100);
    }
}
