//! Gravity degree selection and gravity-gradient partials for propagating
//! the state transition matrix alongside a trajectory.
//!
//! Two kernels run at every evaluation point of the integrator:
//!
//! - [`degree::select_degree`] reads the radially adaptive degree surface to
//!   pick the lowest spherical-harmonic degree that meets a tolerance.
//! - [`jacobian::build_gravity_jacobian`] differences a [`field::GravityField`]
//!   at six stacked state rows to get d(accel)/d(position) for each row.
//!
//! ```
//! use gravstm::prelude::*;
//!
//! let field = PointMass::earth();
//! let rows = uniform_state_block(PV::new((7000.0, 0.0, 1000.0), (0.0, 7.5, 0.0)));
//! let degree = select_degree(rows[0].pos, 1e-9, field.max_degree).max(1);
//! let blocks = build_gravity_jacobian(&rows, degree, &field, DEFAULT_STEP).unwrap();
//!
//! let mut buffer = vec![0.0; PACKED_LEN];
//! JacobianLayout::packed().scatter(&blocks, &mut buffer).unwrap();
//! ```

pub mod config;
pub mod constants;
pub mod degree;
pub mod error;
pub mod field;
pub mod file_export;
pub mod jacobian;
pub mod kernel;
pub mod layout;
pub mod math;
pub mod prelude;
pub mod pv;
pub mod tables;
