//! Public pairwise cumulative-sum entry points.

use crate::auxiliary::stride_to_offset;
use crate::{accessors, kernel};
use strided_traits::{Accessor, AccessorMut, SumScalar};

/// Cumulative sum of strided elements using pairwise summation.
///
/// Writes `y[offset_y + k * stride_y] = sum + x[offset_x] + ... + x[offset_x + k * stride_x]`
/// for `k` in `0..n` and returns `y`.
///
/// - `n <= 0` is a no-op.
/// - For `n == 1` the strides are never applied.
/// - Strides may be negative. Zero strides are not special-cased.
///
/// The access strategy is chosen once: if both `x` and `y` expose
/// contiguous storage, the direct-indexed kernel runs, otherwise the whole
/// computation goes through [`Accessor::get`] / [`AccessorMut::set`].
///
/// # Panics
/// Addressing is not validated. An index outside either container panics
/// (or whatever the container's `get`/`set` does). See
/// [`crate::try_cusumpw_strided`] for a validating variant.
///
/// # Example
///
/// ```rust
/// use strided_cusum::cusumpw_strided;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let mut y = [0.0; 5];
/// cusumpw_strided(5, 10.0, &x, 1, 0, &mut y, 1, 0);
/// assert_eq!(y, [11.0, 13.0, 16.0, 20.0, 25.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn cusumpw_strided<'a, T, X, Y>(
    n: isize,
    sum: T,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &'a mut Y,
    stride_y: isize,
    offset_y: usize,
) -> &'a mut Y
where
    T: SumScalar,
    X: Accessor<T> + ?Sized,
    Y: AccessorMut<T> + ?Sized,
{
    if n <= 0 {
        return y;
    }
    let len = n as usize;
    let ox = offset_x as isize;
    let oy = offset_y as isize;

    let indexed = match (x.as_indexed(), y.as_indexed_mut()) {
        (Some(xs), Some(ys)) => {
            kernel::cusumpw(len, sum, xs, stride_x, ox, ys, stride_y, oy);
            true
        }
        _ => false,
    };
    if !indexed {
        accessors::cusumpw(len, sum, x, stride_x, ox, y, stride_y, oy);
    }

    log::trace!(
        "cusumpw: {} path n={} x=({}, {}) y=({}, {})",
        if indexed { "indexed" } else { "accessor" },
        n,
        stride_x,
        offset_x,
        stride_y,
        offset_y
    );
    y
}

/// Cumulative sum of strided elements, with offsets implied by the strides.
///
/// Each operand starts at [`stride_to_offset`]`(n, stride)`: index `0` for
/// positive strides, the last addressed element for negative strides.
///
/// ```rust
/// use strided_cusum::cusumpw;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let mut y = [0.0; 5];
/// cusumpw(3, 0.0, &x, 2, &mut y, -1);
/// // x[0], x[2], x[4] summed into y[2], y[1], y[0]
/// assert_eq!(y, [9.0, 4.0, 1.0, 0.0, 0.0]);
/// ```
pub fn cusumpw<'a, T, X, Y>(
    n: isize,
    sum: T,
    x: &X,
    stride_x: isize,
    y: &'a mut Y,
    stride_y: isize,
) -> &'a mut Y
where
    T: SumScalar,
    X: Accessor<T> + ?Sized,
    Y: AccessorMut<T> + ?Sized,
{
    let offset_x = stride_to_offset(n, stride_x);
    let offset_y = stride_to_offset(n, stride_y);
    cusumpw_strided(n, sum, x, stride_x, offset_x, y, stride_y, offset_y)
}
