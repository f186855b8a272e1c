//! Bounds-checked entry points.
//!
//! These validate that every index the kernel will touch lies inside its
//! operand before running it. The summation itself is unchanged.

use crate::auxiliary::checked_stride_to_offset;
use crate::cusum::cusumpw_strided;
use crate::{Result, StridedError};
use strided_traits::{Accessor, AccessorMut, SumScalar};

/// Validate that `offset + i * stride` stays within `[0, len)` for `i` in `0..n`.
fn validate_bounds(
    operand: &'static str,
    len: usize,
    n: isize,
    stride: isize,
    offset: usize,
) -> Result<()> {
    let first = isize::try_from(offset).map_err(|_| StridedError::OffsetOverflow)?;
    let last = stride
        .checked_mul(n - 1)
        .and_then(|span| first.checked_add(span))
        .ok_or(StridedError::OffsetOverflow)?;

    let (lo, hi) = if last < first {
        (last, first)
    } else {
        (first, last)
    };
    if lo < 0 {
        return Err(StridedError::OutOfBounds {
            operand,
            index: lo,
            len,
        });
    }
    if hi as usize >= len {
        return Err(StridedError::OutOfBounds {
            operand,
            index: hi,
            len,
        });
    }
    Ok(())
}

/// [`crate::cusumpw_strided`] with addressing validated up front.
///
/// `n <= 0` always succeeds and leaves `y` untouched.
///
/// ```rust
/// use strided_cusum::{try_cusumpw_strided, StridedError};
///
/// let x = [1.0, 2.0, 3.0];
/// let mut y = [0.0; 3];
/// let err = try_cusumpw_strided(3, 0.0, &x, 2, 0, &mut y, 1, 0).unwrap_err();
/// assert_eq!(
///     err,
///     StridedError::OutOfBounds { operand: "x", index: 4, len: 3 }
/// );
/// assert_eq!(y, [0.0; 3]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn try_cusumpw_strided<'a, T, X, Y>(
    n: isize,
    sum: T,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &'a mut Y,
    stride_y: isize,
    offset_y: usize,
) -> Result<&'a mut Y>
where
    T: SumScalar,
    X: Accessor<T> + ?Sized,
    Y: AccessorMut<T> + ?Sized,
{
    if n <= 0 {
        return Ok(y);
    }
    let checked = validate_bounds("x", x.len(), n, stride_x, offset_x)
        .and_then(|()| validate_bounds("y", y.len(), n, stride_y, offset_y));
    if let Err(err) = checked {
        log::debug!("try_cusumpw_strided: rejected n={n}: {err}");
        return Err(err);
    }
    Ok(cusumpw_strided(
        n, sum, x, stride_x, offset_x, y, stride_y, offset_y,
    ))
}

/// [`crate::cusumpw`] with addressing validated up front.
pub fn try_cusumpw<'a, T, X, Y>(
    n: isize,
    sum: T,
    x: &X,
    stride_x: isize,
    y: &'a mut Y,
    stride_y: isize,
) -> Result<&'a mut Y>
where
    T: SumScalar,
    X: Accessor<T> + ?Sized,
    Y: AccessorMut<T> + ?Sized,
{
    let offset_x = checked_stride_to_offset(n, stride_x).ok_or(StridedError::OffsetOverflow)?;
    let offset_y = checked_stride_to_offset(n, stride_y).ok_or(StridedError::OffsetOverflow)?;
    try_cusumpw_strided(n, sum, x, stride_x, offset_x, y, stride_y, offset_y)
}
