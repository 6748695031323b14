pub use crate::config::{load_config, save_config, KernelConfig};
pub use crate::constants::{DEFAULT_STEP, DU, MAX_TABULATED_DEGREE, MU, STM_ROWS};
pub use crate::degree::{select_degree, select_degree_in_units, DegreeSelector};
pub use crate::error::{GravityError, GravityResult};
pub use crate::field::{FnField, GravityField, PointMass, ZonalJ2};
pub use crate::jacobian::{
    build_gravity_jacobian, build_gravity_jacobian_into, build_gravity_jacobian_par,
    central_difference_gradient, GravityGradient,
};
pub use crate::kernel::VariationalKernel;
pub use crate::layout::{JacobianLayout, PACKED_LEN};
pub use crate::math::{linspace, logspace};
pub use crate::pv::{state_block_from_slice, uniform_state_block, StateBlock, PV};
pub use glam::{DMat3, DVec3};
