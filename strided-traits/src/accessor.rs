//! Element access for strided kernels.
//!
//! Kernels address a container only through a flat index
//! `offset + i * stride`. Two access strategies exist:
//!
//! - **Indexed**: the container exposes its storage as a contiguous slice
//!   and the kernel indexes it directly.
//! - **Accessor**: the container only offers `get(i)` / `set(i, v)`, e.g.
//!   because elements are computed, packed, or live behind interior
//!   mutability.
//!
//! [`Accessor::as_indexed`] and [`AccessorMut::as_indexed_mut`] are how a
//! kernel tells the two apart. They are queried once per call, never per
//! element.

/// Read access to the elements of a container.
pub trait Accessor<T> {
    /// Number of addressable elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    /// Implementations may panic if `index >= self.len()`.
    fn get(&self, index: usize) -> T;

    /// Contiguous storage for direct indexing, if the container has one.
    ///
    /// Returning `None` makes kernels fall back to [`Accessor::get`].
    #[inline]
    fn as_indexed(&self) -> Option<&[T]> {
        None
    }
}

/// Write access to the elements of a container.
pub trait AccessorMut<T>: Accessor<T> {
    /// Stores `value` at `index`.
    ///
    /// # Panics
    /// Implementations may panic if `index >= self.len()`.
    fn set(&mut self, index: usize, value: T);

    /// Mutable contiguous storage for direct indexing, if any.
    #[inline]
    fn as_indexed_mut(&mut self) -> Option<&mut [T]> {
        None
    }
}

// ---------------------------------------------------------------------------
// Slice-backed containers: always indexed
// ---------------------------------------------------------------------------

impl<T: Copy> Accessor<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn as_indexed(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T: Copy> AccessorMut<T> for [T] {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn as_indexed_mut(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

impl<T: Copy, const N: usize> Accessor<T> for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn as_indexed(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T: Copy, const N: usize> AccessorMut<T> for [T; N] {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn as_indexed_mut(&mut self) -> Option<&mut [T]> {
        Some(self.as_mut_slice())
    }
}

impl<T: Copy> Accessor<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn as_indexed(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T: Copy> AccessorMut<T> for Vec<T> {
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn as_indexed_mut(&mut self) -> Option<&mut [T]> {
        Some(self.as_mut_slice())
    }
}
