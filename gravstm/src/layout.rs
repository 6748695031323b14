//! Where gravity-gradient partials land in the integrator's derivative buffer.
//!
//! For row `i` the layout zeroes the six values starting at
//! `base_offset + i * row_stride + velocity_offset`, then writes partial
//! `(n, m)` (d accel_m / d r_n) to
//! `base_offset + i * row_stride + block_offset + n * axis_stride + m`.
//! A row may overwrite its own zeroed slice, but no index may be written by
//! two different rows.

use crate::constants::STM_ROWS;
use crate::error::{GravityError, GravityResult};
use crate::jacobian::GravityGradient;
use serde::{Deserialize, Serialize};

/// Values touched per row: six zeroed plus nine partials.
pub const PACKED_ROW_LEN: usize = 15;

/// Buffer length of one [`JacobianLayout::packed`] block.
pub const PACKED_LEN: usize = STM_ROWS * PACKED_ROW_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JacobianLayout {
    pub base_offset: usize,
    pub row_stride: usize,
    pub velocity_offset: usize,
    pub block_offset: usize,
    pub axis_stride: usize,
}

impl Default for JacobianLayout {
    fn default() -> Self {
        JacobianLayout::packed()
    }
}

impl JacobianLayout {
    /// Rows back to back: six zeros then the 3x3 block, row-major in `n`.
    pub const fn packed() -> Self {
        JacobianLayout {
            base_offset: 0,
            row_stride: PACKED_ROW_LEN,
            velocity_offset: 0,
            block_offset: 6,
            axis_stride: 3,
        }
    }

    /// Packed layout for one node of a buffer holding consecutive nodes.
    pub const fn for_node(node: usize) -> Self {
        JacobianLayout::packed().with_base_offset(node * PACKED_LEN)
    }

    pub const fn with_base_offset(self, base_offset: usize) -> Self {
        JacobianLayout {
            base_offset,
            ..self
        }
    }

    fn row_start(&self, row: usize) -> usize {
        self.base_offset + row * self.row_stride
    }

    fn zero_range(&self, row: usize) -> std::ops::Range<usize> {
        let start = self.row_start(row) + self.velocity_offset;
        start..start + 6
    }

    fn partial_index(&self, row: usize, n: usize, m: usize) -> usize {
        self.row_start(row) + self.block_offset + n * self.axis_stride + m
    }

    /// Smallest buffer that holds every index this layout touches.
    pub fn required_len(&self) -> usize {
        (0..STM_ROWS)
            .map(|row| {
                let zero_end = self.zero_range(row).end;
                let block_end = self.partial_index(row, 2, 2) + 1;
                zero_end.max(block_end)
            })
            .max()
            .unwrap_or(0)
    }

    /// Checks that `len` is large enough and that rows never share an index.
    pub fn validate(&self, len: usize) -> GravityResult<()> {
        let required = self.required_len();
        if len < required {
            return Err(GravityError::BufferTooSmall { required, len });
        }

        let mut touched: Vec<(usize, usize)> = Vec::with_capacity(STM_ROWS * PACKED_ROW_LEN);
        for row in 0..STM_ROWS {
            let mut indices: Vec<usize> = self.zero_range(row).collect();
            for n in 0..3 {
                for m in 0..3 {
                    indices.push(self.partial_index(row, n, m));
                }
            }
            indices.sort_unstable();
            indices.dedup();
            touched.extend(indices.into_iter().map(|i| (i, row)));
        }
        touched.sort_unstable();

        for w in touched.windows(2) {
            if w[0].0 == w[1].0 {
                return Err(GravityError::OverlappingLayout {
                    first: w[0].1,
                    second: w[1].1,
                    index: w[0].0,
                });
            }
        }
        Ok(())
    }

    /// Writes all six blocks into `buffer`. Nothing is written unless the
    /// layout validates against the buffer.
    pub fn scatter(
        &self,
        blocks: &[GravityGradient; STM_ROWS],
        buffer: &mut [f64],
    ) -> GravityResult<()> {
        self.validate(buffer.len())?;
        self.write_validated(blocks, buffer);
        Ok(())
    }

    /// [`JacobianLayout::scatter`] without the check, for callers that have
    /// already run [`JacobianLayout::validate`] on a buffer of this length.
    pub(crate) fn write_validated(&self, blocks: &[GravityGradient; STM_ROWS], buffer: &mut [f64]) {
        for (row, block) in blocks.iter().enumerate() {
            buffer[self.zero_range(row)].fill(0.0);
            for n in 0..3 {
                for m in 0..3 {
                    buffer[self.partial_index(row, n, m)] = block.partial(n, m);
                }
            }
        }
    }

    /// Reads six blocks back out of a buffer written with this layout.
    pub fn gather(&self, buffer: &[f64]) -> GravityResult<[GravityGradient; STM_ROWS]> {
        let required = self.required_len();
        if buffer.len() < required {
            return Err(GravityError::BufferTooSmall {
                required,
                len: buffer.len(),
            });
        }
        let mut blocks = [GravityGradient::ZERO; STM_ROWS];
        for (row, block) in blocks.iter_mut().enumerate() {
            let mut cols = [[0.0; 3]; 3];
            for (n, col) in cols.iter_mut().enumerate() {
                for (m, value) in col.iter_mut().enumerate() {
                    *value = buffer[self.partial_index(row, n, m)];
                }
            }
            *block = GravityGradient::from_cols_array_2d(&cols);
        }
        Ok(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DMat3;

    fn numbered_blocks() -> [GravityGradient; STM_ROWS] {
        let mut blocks = [GravityGradient::ZERO; STM_ROWS];
        for (i, b) in blocks.iter_mut().enumerate() {
            let base = 100.0 * (i + 1) as f64;
            *b = GravityGradient::from(DMat3::from_cols_array(&[
                base + 0.0,
                base + 1.0,
                base + 2.0,
                base + 10.0,
                base + 11.0,
                base + 12.0,
                base + 20.0,
                base + 21.0,
                base + 22.0,
            ]));
        }
        blocks
    }

    #[test]
    fn packed_layout_positions() {
        let layout = JacobianLayout::packed();
        assert_eq!(layout.required_len(), PACKED_LEN);
        layout.validate(PACKED_LEN).unwrap();

        let mut buffer = vec![f64::NAN; PACKED_LEN];
        layout.scatter(&numbered_blocks(), &mut buffer).unwrap();

        assert!(buffer[0..6].iter().all(|v| *v == 0.0));
        assert_eq!(&buffer[6..15], &[100.0, 101.0, 102.0, 110.0, 111.0, 112.0, 120.0, 121.0, 122.0]);
        assert!(buffer[15..21].iter().all(|v| *v == 0.0));
        assert_eq!(buffer[21], 200.0);
        assert_eq!(buffer[89], 622.0);
        assert!(buffer.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn gather_reads_back() {
        let layout = JacobianLayout::for_node(2);
        let mut buffer = vec![0.0; layout.required_len() + 7];
        let blocks = numbered_blocks();
        layout.scatter(&blocks, &mut buffer).unwrap();
        assert_eq!(layout.gather(&buffer).unwrap(), blocks);
        assert!(buffer[..2 * PACKED_LEN].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn nodes_do_not_touch_each_other() {
        let mut buffer = vec![-1.0; 3 * PACKED_LEN];
        JacobianLayout::for_node(1)
            .scatter(&numbered_blocks(), &mut buffer)
            .unwrap();
        assert!(buffer[..PACKED_LEN].iter().all(|v| *v == -1.0));
        assert!(buffer[2 * PACKED_LEN..].iter().all(|v| *v == -1.0));
    }

    #[test]
    fn validated_write_matches_scatter() {
        let layout = JacobianLayout::for_node(1).with_base_offset(97);
        let blocks = numbered_blocks();
        let len = layout.required_len() + 3;

        let mut checked = vec![-2.0; len];
        layout.scatter(&blocks, &mut checked).unwrap();

        let mut direct = vec![-2.0; len];
        layout.validate(len).unwrap();
        layout.write_validated(&blocks, &mut direct);

        assert_eq!(checked, direct);
        assert_eq!(layout.gather(&direct).unwrap(), blocks);
    }

    #[test]
    fn short_buffer_is_untouched() {
        let layout = JacobianLayout::packed();
        let mut buffer = vec![7.0; PACKED_LEN - 1];
        match layout.scatter(&numbered_blocks(), &mut buffer) {
            Err(GravityError::BufferTooSmall { required, len }) => {
                assert_eq!(required, PACKED_LEN);
                assert_eq!(len, PACKED_LEN - 1);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(buffer.iter().all(|v| *v == 7.0));
    }

    #[test]
    fn fixed_absolute_offsets_collide() {
        // rows 6 apart with axis blocks 15 apart: row 3 zeroes row 0's second axis
        let layout = JacobianLayout {
            base_offset: 0,
            row_stride: 6,
            velocity_offset: 0,
            block_offset: 3,
            axis_stride: 15,
        };
        assert_eq!(layout.required_len(), 66);
        match layout.validate(66) {
            Err(GravityError::OverlappingLayout { first, second, .. }) => {
                assert!(first < second);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn zero_stride_collides() {
        let layout = JacobianLayout {
            row_stride: 0,
            ..JacobianLayout::packed()
        };
        assert!(matches!(
            layout.validate(PACKED_LEN),
            Err(GravityError::OverlappingLayout { first: 0, second: 1, index: 0 })
        ));
    }

    #[test]
    fn interleaved_layout_is_accepted() {
        // zeros and block share a row: block overwrites part of its own zeros
        let layout = JacobianLayout {
            base_offset: 4,
            row_stride: 12,
            velocity_offset: 0,
            block_offset: 3,
            axis_stride: 3,
        };
        assert_eq!(layout.required_len(), 4 + 5 * 12 + 12);
        layout.validate(layout.required_len()).unwrap();
    }
}
