//! Central-difference gravity gradients for the variational equations.
//!
//! Each state row is perturbed by `±h` along one position axis at a time and
//! the field is evaluated at both points, so a row costs six field
//! evaluations and a full block of six rows costs 36. The step is fixed per
//! call rather than adaptive: truncation error is O(h^2) and roundoff grows
//! like eps/h, and the caller picks where to sit between the two.

use crate::constants::{DEFAULT_STEP, STM_ROWS};
use crate::error::{GravityError, GravityResult};
use crate::field::GravityField;
use crate::layout::JacobianLayout;
use crate::pv::StateBlock;
use glam::{DMat3, DVec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// d(acceleration)/d(position) at one row.
///
/// Column `n` of the matrix is the derivative of the acceleration vector
/// with respect to position component `n`, so `partial(n, m)` is
/// d accel_m / d r_n.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityGradient(pub DMat3);

impl GravityGradient {
    pub const ZERO: GravityGradient = GravityGradient(DMat3::ZERO);

    pub fn from_cols_array_2d(cols: &[[f64; 3]; 3]) -> Self {
        GravityGradient(DMat3::from_cols_array_2d(cols))
    }

    pub fn to_cols_array_2d(&self) -> [[f64; 3]; 3] {
        self.0.to_cols_array_2d()
    }

    pub fn partial(&self, n: usize, m: usize) -> f64 {
        self.0.col(n)[m]
    }

    /// Divergence of the field; zero in free space up to differencing error.
    pub fn trace(&self) -> f64 {
        self.0.x_axis.x + self.0.y_axis.y + self.0.z_axis.z
    }

    /// Largest |J - J^T| entry. A conservative field has a symmetric gradient.
    pub fn asymmetry(&self) -> f64 {
        let t = self.0.transpose();
        crate::math::max_abs_diff(&self.0.to_cols_array_2d(), &t.to_cols_array_2d())
    }

    /// Row-major 6x6 system matrix `[[0, I], [G, 0]]` of the variational
    /// equations, where `G[m][n]` is d accel_m / d r_n.
    pub fn system_matrix(&self) -> [[f64; 6]; 6] {
        let mut a = [[0.0; 6]; 6];
        for i in 0..3 {
            a[i][i + 3] = 1.0;
        }
        for m in 0..3 {
            for n in 0..3 {
                a[m + 3][n] = self.partial(n, m);
            }
        }
        a
    }
}

impl From<DMat3> for GravityGradient {
    fn from(m: DMat3) -> Self {
        GravityGradient(m)
    }
}

fn check_step(h: f64) -> GravityResult<()> {
    if h == 0.0 || !h.is_finite() {
        return Err(GravityError::InvalidStep(h));
    }
    Ok(())
}

/// One axis of the difference: (a(r + h e_n) - a(r - h e_n)) / 2h.
fn axis_partial<F: GravityField + ?Sized>(
    field: &F,
    position: DVec3,
    axis: usize,
    degree: u32,
    h: f64,
) -> GravityResult<DVec3> {
    let mut plus = position;
    let mut minus = position;
    plus[axis] += h;
    minus[axis] -= h;
    let fp = field.acceleration(plus, degree)?;
    let fm = field.acceleration(minus, degree)?;
    Ok((fp - fm) / (2.0 * h))
}

/// Gravity gradient at a single position.
pub fn central_difference_gradient<F: GravityField + ?Sized>(
    field: &F,
    position: DVec3,
    degree: u32,
    h: f64,
) -> GravityResult<GravityGradient> {
    if degree == 0 {
        return Err(GravityError::InvalidDegree(degree));
    }
    check_step(h)?;

    let dx = axis_partial(field, position, 0, degree, h)?;
    let dy = axis_partial(field, position, 1, degree, h)?;
    let dz = axis_partial(field, position, 2, degree, h)?;

    let gradient = GravityGradient(DMat3::from_cols(dx, dy, dz));
    log::trace!(
        "gradient at {:?} degree {} trace {:e}",
        position,
        degree,
        gradient.trace()
    );
    Ok(gradient)
}

/// Gradients for all six rows of `rows`, evaluated at `degree` with step `h`.
///
/// Fails as a whole on the first field error; no partial result is returned.
pub fn build_gravity_jacobian<F: GravityField + ?Sized>(
    rows: &StateBlock,
    degree: u32,
    field: &F,
    h: f64,
) -> GravityResult<[GravityGradient; STM_ROWS]> {
    if degree == 0 {
        return Err(GravityError::InvalidDegree(degree));
    }
    check_step(h)?;

    let mut blocks = [GravityGradient::ZERO; STM_ROWS];
    for (block, row) in blocks.iter_mut().zip(rows.iter()) {
        *block = central_difference_gradient(field, row.pos, degree, h)?;
    }
    Ok(blocks)
}

/// [`build_gravity_jacobian`] with the default step.
pub fn build_gravity_jacobian_default<F: GravityField + ?Sized>(
    rows: &StateBlock,
    degree: u32,
    field: &F,
) -> GravityResult<[GravityGradient; STM_ROWS]> {
    build_gravity_jacobian(rows, degree, field, DEFAULT_STEP)
}

/// Same result as [`build_gravity_jacobian`], rows evaluated on the rayon pool.
pub fn build_gravity_jacobian_par<F: GravityField + Sync + ?Sized>(
    rows: &StateBlock,
    degree: u32,
    field: &F,
    h: f64,
) -> GravityResult<[GravityGradient; STM_ROWS]> {
    if degree == 0 {
        return Err(GravityError::InvalidDegree(degree));
    }
    check_step(h)?;

    let computed: Vec<GravityGradient> = rows
        .par_iter()
        .map(|row| central_difference_gradient(field, row.pos, degree, h))
        .collect::<GravityResult<Vec<_>>>()?;

    let mut blocks = [GravityGradient::ZERO; STM_ROWS];
    blocks.copy_from_slice(&computed);
    Ok(blocks)
}

/// Builds the six gradients and writes them into the integrator's buffer.
///
/// The buffer is only written once every row has succeeded and the layout
/// has been validated against it.
pub fn build_gravity_jacobian_into<F: GravityField + ?Sized>(
    rows: &StateBlock,
    degree: u32,
    field: &F,
    h: f64,
    layout: &JacobianLayout,
    buffer: &mut [f64],
) -> GravityResult<()> {
    layout.validate(buffer.len())?;
    let blocks = build_gravity_jacobian(rows, degree, field, h)?;
    layout.write_validated(&blocks, buffer);
    Ok(())
}
