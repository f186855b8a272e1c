//! Addressing helpers for strided sequences.

/// Starting index for a strided walk over `n` elements.
///
/// A positive stride starts at index `0`. A negative stride starts at the
/// last of the `n` addressed elements, `(1 - n) * stride`, so the walk ends
/// at index `0`.
///
/// ```rust
/// use strided_cusum::stride_to_offset;
///
/// assert_eq!(stride_to_offset(4, 2), 0);
/// assert_eq!(stride_to_offset(4, -2), 6);
/// assert_eq!(stride_to_offset(0, -2), 0);
/// ```
///
/// # Panics
/// Panics on overflow when debug assertions are enabled. Use the checked
/// entry points for untrusted sizes.
pub fn stride_to_offset(n: isize, stride: isize) -> usize {
    if n <= 0 || stride >= 0 {
        return 0;
    }
    ((1 - n) * stride) as usize
}

/// Like [`stride_to_offset`], but `None` on overflow.
pub(crate) fn checked_stride_to_offset(n: isize, stride: isize) -> Option<usize> {
    if n <= 0 || stride >= 0 {
        return Some(0);
    }
    let offset = (1 - n).checked_mul(stride)?;
    usize::try_from(offset).ok()
}
