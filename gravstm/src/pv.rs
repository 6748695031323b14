use crate::constants::{ROW_LEN, STM_ROWS};
use crate::error::{GravityError, GravityResult};
use glam::DVec3;

/// One position/velocity row of the batched state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PV {
    pub pos: DVec3,
    pub vel: DVec3,
}

/// The six stacked rows handed over by the integrator.
pub type StateBlock = [PV; STM_ROWS];

impl PV {
    pub fn zero() -> Self {
        PV {
            pos: DVec3::ZERO,
            vel: DVec3::ZERO,
        }
    }

    pub fn new(pos: impl Into<DVec3>, vel: impl Into<DVec3>) -> Self {
        PV {
            pos: pos.into(),
            vel: vel.into(),
        }
    }

    pub fn pos(pos: impl Into<DVec3>) -> Self {
        PV::new(pos, DVec3::ZERO)
    }

    pub fn from_row(row: &[f64; ROW_LEN]) -> Self {
        PV::new(
            DVec3::new(row[0], row[1], row[2]),
            DVec3::new(row[3], row[4], row[5]),
        )
    }

    pub fn to_row(&self) -> [f64; ROW_LEN] {
        [
            self.pos.x, self.pos.y, self.pos.z, self.vel.x, self.vel.y, self.vel.z,
        ]
    }
}

/// Unpacks a contiguous row-major state buffer (6 rows of 6 values).
/// Values past the first 36 are ignored.
pub fn state_block_from_slice(x: &[f64]) -> GravityResult<StateBlock> {
    let required = STM_ROWS * ROW_LEN;
    if x.len() < required {
        return Err(GravityError::StateTooShort {
            required,
            len: x.len(),
        });
    }

    let mut block = [PV::zero(); STM_ROWS];
    for (pv, chunk) in block.iter_mut().zip(x.chunks_exact(ROW_LEN)) {
        let mut row = [0.0; ROW_LEN];
        row.copy_from_slice(chunk);
        *pv = PV::from_row(&row);
    }
    Ok(block)
}

/// Every row at the same position and velocity, which is how a single
/// trajectory point is usually presented.
pub fn uniform_state_block(pv: PV) -> StateBlock {
    [pv; STM_ROWS]
}

impl std::fmt::Display for PV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P({:0.3}, {:0.3}, {:0.3}) V({:0.5}, {:0.5}, {:0.5})",
            self.pos.x, self.pos.y, self.pos.z, self.vel.x, self.vel.y, self.vel.z
        )
    }
}

impl From<(DVec3, DVec3)> for PV {
    fn from(x: (DVec3, DVec3)) -> PV {
        PV::new(x.0, x.1)
    }
}

impl From<((f64, f64, f64), (f64, f64, f64))> for PV {
    fn from(x: ((f64, f64, f64), (f64, f64, f64))) -> PV {
        let r: DVec3 = x.0.into();
        let v: DVec3 = x.1.into();
        PV::new(r, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpack_rows() {
        let x: Vec<f64> = (0..36).map(|i| i as f64).collect();
        let block = state_block_from_slice(&x).unwrap();
        assert_eq!(block[0].pos, DVec3::new(0.0, 1.0, 2.0));
        assert_eq!(block[0].vel, DVec3::new(3.0, 4.0, 5.0));
        assert_eq!(block[5].pos, DVec3::new(30.0, 31.0, 32.0));
        assert_eq!(block[2].to_row(), [12.0, 13.0, 14.0, 15.0, 16.0, 17.0]);
    }

    #[test]
    fn short_state_rejected() {
        let x = [1.0; 35];
        match state_block_from_slice(&x) {
            Err(GravityError::StateTooShort { required, len }) => {
                assert_eq!(required, 36);
                assert_eq!(len, 35);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
