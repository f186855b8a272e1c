//! Direct-indexed pairwise cumulative sum.

use crate::BLOCKSIZE;
use strided_traits::SumScalar;

/// Cumulative sum of `n` strided elements of `x` into `y`, seeded by `sum`.
///
/// Leaf blocks keep a block-local running total and write `sum + total`,
/// so the seed never enters the local accumulation.
///
/// `offset_x`/`offset_y` are signed so that sub-ranges of a negatively
/// strided walk can be expressed, but every index actually touched must be
/// in bounds. Out-of-range indices panic through slice indexing.
#[allow(clippy::too_many_arguments)]
pub(crate) fn cusumpw<T: SumScalar>(
    n: usize,
    sum: T,
    x: &[T],
    stride_x: isize,
    offset_x: isize,
    y: &mut [T],
    stride_y: isize,
    offset_y: isize,
) {
    debug_assert!(n > 0);

    if n <= BLOCKSIZE {
        let mut ix = offset_x;
        let mut iy = offset_y;
        let mut s = x[ix as usize];
        y[iy as usize] = sum + s;
        for _ in 1..n {
            ix += stride_x;
            iy += stride_y;
            s = s + x[ix as usize];
            y[iy as usize] = sum + s;
        }
        return;
    }

    let half = n / 2;
    let h = half as isize;
    cusumpw(half, sum, x, stride_x, offset_x, y, stride_y, offset_y);

    let carry = y[(offset_y + (h - 1) * stride_y) as usize];
    cusumpw(
        n - half,
        carry,
        x,
        stride_x,
        offset_x + h * stride_x,
        y,
        stride_y,
        offset_y + h * stride_y,
    );
}
