use crate::config::KernelConfig;
use crate::constants::STM_ROWS;
use crate::degree::DegreeSelector;
use crate::error::GravityResult;
use crate::field::GravityField;
use crate::jacobian::{build_gravity_jacobian, GravityGradient};
use crate::pv::StateBlock;

/// Degree selection followed by gradient assembly, the order the
/// integrator calls them in at every evaluation point.
pub struct VariationalKernel<F> {
    pub field: F,
    pub config: KernelConfig,
    selector: DegreeSelector,
}

impl<F: GravityField> VariationalKernel<F> {
    pub fn new(field: F, config: KernelConfig) -> GravityResult<Self> {
        config.validate()?;
        let selector = config.selector();
        Ok(VariationalKernel {
            field,
            config,
            selector,
        })
    }

    /// Degree shared by all six rows: the largest any row asks for, floored
    /// at 1 and capped by what the field supports.
    pub fn degree_for(&self, rows: &StateBlock) -> u32 {
        let selected = rows
            .iter()
            .map(|row| self.selector.select(row.pos, self.config.tolerance))
            .max()
            .unwrap_or(1);
        if selected == 0 {
            log::debug!("degree surface returned 0, evaluating at degree 1");
        }
        selected.max(1).min(self.field.max_degree().max(1))
    }

    pub fn gradients(&self, rows: &StateBlock) -> GravityResult<(u32, [GravityGradient; STM_ROWS])> {
        let degree = self.degree_for(rows);
        let blocks = build_gravity_jacobian(rows, degree, &self.field, self.config.step)?;
        Ok((degree, blocks))
    }

    /// Selects the degree, builds the gradients and writes them with the
    /// configured layout. Returns the degree used.
    pub fn write_gradients(&self, rows: &StateBlock, buffer: &mut [f64]) -> GravityResult<u32> {
        self.config.layout.validate(buffer.len())?;
        let (degree, blocks) = self.gradients(rows)?;
        self.config.layout.write_validated(&blocks, buffer);
        Ok(degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DU;
    use crate::error::GravityError;
    use crate::field::{FnField, PointMass, ZonalJ2};
    use crate::layout::{JacobianLayout, PACKED_LEN};
    use crate::pv::{uniform_state_block, PV};
    use glam::DVec3;
    use more_asserts::assert_lt;

    #[test]
    fn far_out_loose_tolerance_floors_at_one() {
        let kernel = VariationalKernel::new(
            PointMass::earth(),
            KernelConfig::default().with_tolerance(5e-3),
        )
        .unwrap();
        let rows = uniform_state_block(PV::pos((11.0 * DU, 0.0, 0.0)));
        assert_eq!(kernel.degree_for(&rows), 1);
        let (degree, _) = kernel.gradients(&rows).unwrap();
        assert_eq!(degree, 1);
    }

    #[test]
    fn innermost_row_sets_the_degree() {
        let kernel = VariationalKernel::new(
            FnField::new(100, |q: DVec3, d: u32| {
                assert_eq!(d, 15);
                Ok(q)
            }),
            KernelConfig::default().with_tolerance(5e-10),
        )
        .unwrap();
        let mut rows = uniform_state_block(PV::pos((9.0 * DU, 0.0, 0.0)));
        rows[3] = PV::pos((2.0 * DU, 0.0, 0.0));
        assert_lt!(kernel.selector.select(rows[0].pos, 5e-10), 15);
        assert_eq!(kernel.degree_for(&rows), 15);
        kernel.gradients(&rows).unwrap();
    }

    #[test]
    fn capped_by_field_support() {
        let field = ZonalJ2 {
            max_degree: 2,
            ..ZonalJ2::earth()
        };
        let kernel = VariationalKernel::new(field, KernelConfig::default()).unwrap();
        let rows = uniform_state_block(PV::pos((1.05 * DU, 0.0, 0.0)));
        assert_eq!(kernel.degree_for(&rows), 2);
        kernel.gradients(&rows).unwrap();
    }

    #[test]
    fn writes_with_configured_layout() {
        let config = KernelConfig {
            layout: JacobianLayout::for_node(1),
            ..KernelConfig::default()
        };
        let kernel = VariationalKernel::new(PointMass::earth(), config).unwrap();
        let rows = uniform_state_block(PV::new((7000.0, 0.0, 0.0), (0.0, 7.5, 0.0)));

        let mut buffer = vec![0.0; PACKED_LEN];
        assert!(matches!(
            kernel.write_gradients(&rows, &mut buffer),
            Err(GravityError::BufferTooSmall { .. })
        ));

        let mut buffer = vec![0.0; 2 * PACKED_LEN];
        kernel.write_gradients(&rows, &mut buffer).unwrap();
        assert!(buffer[..PACKED_LEN].iter().all(|v| *v == 0.0));
        assert!(buffer[PACKED_LEN + 6] > 0.0);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = KernelConfig::default().with_step(f64::NAN);
        assert!(VariationalKernel::new(PointMass::earth(), config).is_err());
    }
}
