//! Pairwise cumulative sum through element accessors.
//!
//! Same summation tree as [`crate::kernel`], but every read goes through
//! [`Accessor::get`] and every write through [`AccessorMut::set`]. Results
//! are bit-identical to the direct-indexed kernel for the same inputs.

use crate::BLOCKSIZE;
use strided_traits::{Accessor, AccessorMut, SumScalar};

#[allow(clippy::too_many_arguments)]
pub(crate) fn cusumpw<T, X, Y>(
    n: usize,
    sum: T,
    x: &X,
    stride_x: isize,
    offset_x: isize,
    y: &mut Y,
    stride_y: isize,
    offset_y: isize,
) where
    T: SumScalar,
    X: Accessor<T> + ?Sized,
    Y: AccessorMut<T> + ?Sized,
{
    debug_assert!(n > 0);

    if n <= BLOCKSIZE {
        let mut ix = offset_x;
        let mut iy = offset_y;
        let mut s = x.get(ix as usize);
        y.set(iy as usize, sum + s);
        for _ in 1..n {
            ix += stride_x;
            iy += stride_y;
            s = s + x.get(ix as usize);
            y.set(iy as usize, sum + s);
        }
        return;
    }

    let half = n / 2;
    let h = half as isize;
    cusumpw(half, sum, x, stride_x, offset_x, y, stride_y, offset_y);

    let carry = y.get((offset_y + (h - 1) * stride_y) as usize);
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
