//! Pairwise cumulative summation over strided sequences.
//!
//! The kernels in this crate compute `y[k] = sum + x[0] + ... + x[k]` over
//! sequences addressed as `offset + i * stride`, with independent strides
//! and offsets for input and output. Summation is pairwise: the index range
//! is split in half recursively and the right half is seeded with the last
//! cumulative value of the left half. Rounding error therefore grows as
//! `O(log2 N)` instead of `O(N)`, and so does the recursion depth.
//!
//! Ranges of at most [`BLOCKSIZE`] elements are accumulated left to right
//! into a block-local total, and each output is `seed + total`. With a zero
//! seed, short runs match naive accumulation bit for bit, including the
//! sign of zero.
//!
//! # Entry points
//!
//! - [`cusumpw_strided`]: explicit strides and offsets
//! - [`cusumpw`]: strides only; offsets derived with [`stride_to_offset`]
//! - [`try_cusumpw_strided`], [`try_cusumpw`]: bounds-checked variants
//!
//! # Element access
//!
//! Containers are read through [`Accessor`] and written through
//! [`AccessorMut`]. When both operands expose contiguous storage the
//! direct-indexed kernel runs; otherwise the whole call goes through
//! `get`/`set`. Both paths produce identical results. [`AccessorArray`]
//! wraps a slice-backed container to force the get/set path.
//!
//! # Example
//!
//! ```rust
//! use strided_cusum::cusumpw_strided;
//!
//! let x = vec![2.0, 1.0, 2.0, -2.0, -2.0, 2.0, 3.0, 4.0];
//! let mut y = vec![0.0; 8];
//!
//! // Every other element of x, starting at index 1
//! cusumpw_strided(4, 0.0, &x, 2, 1, &mut y, 1, 0);
//! assert_eq!(y, [1.0, -1.0, 1.0, 5.0, 0.0, 0.0, 0.0, 0.0]);
//! ```
//!
//! Negative strides walk backwards:
//!
//! ```rust
//! use strided_cusum::cusumpw;
//!
//! let x = [1.0, 2.0, 3.0];
//! let mut y = [0.0; 3];
//! cusumpw(3, 0.0, &x, -1, &mut y, 1);
//! assert_eq!(y, [3.0, 5.0, 6.0]);
//! ```

mod accessor_array;
mod accessors;
mod auxiliary;
mod checked;
mod cusum;
mod kernel;

pub use accessor_array::AccessorArray;
pub use auxiliary::stride_to_offset;
pub use checked::{try_cusumpw, try_cusumpw_strided};
pub use cusum::{cusumpw, cusumpw_strided};

pub use strided_traits::{Accessor, AccessorMut, SumScalar};

// ============================================================================
// Constants
// ============================================================================

/// Block size for pairwise summation.
///
/// Ranges of at most this many elements are accumulated sequentially;
/// longer ranges are split in half. Changing it changes the summation tree
/// and therefore the rounding of results for `N > BLOCKSIZE`.
pub const BLOCKSIZE: usize = 128;

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the bounds-checked entry points.
///
/// The unchecked kernels never return errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StridedError {
    /// An addressed element lies outside the operand.
    #[error("{operand}: index {index} out of bounds for length {len}")]
    OutOfBounds {
        operand: &'static str,
        index: isize,
        len: usize,
    },

    /// Integer overflow while computing an element offset.
    #[error("offset overflow while computing element index")]
    OffsetOverflow,
}

/// Result type for checked strided operations.
pub type Result<T> = std::result::Result<T, StridedError>;
