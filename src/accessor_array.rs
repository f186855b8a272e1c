//! A container wrapper that only exposes element accessors.

use strided_traits::{Accessor, AccessorMut};

/// Wraps a slice-backed container and hides its contiguous storage.
///
/// Kernels see only [`Accessor::get`] / [`AccessorMut::set`], so passing an
/// `AccessorArray` as either operand selects the accessor path for the
/// whole call.
///
/// ```rust
/// use strided_cusum::{cusumpw_strided, AccessorArray};
///
/// let x = AccessorArray::new(vec![1.0, 2.0, 3.0]);
/// let mut y = AccessorArray::new(vec![0.0; 3]);
/// cusumpw_strided(3, 0.0, &x, 1, 0, &mut y, 1, 0);
/// assert_eq!(y.into_inner(), vec![1.0, 3.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessorArray<C> {
    inner: C,
}

impl<C> AccessorArray<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn as_inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Accessor<T> for AccessorArray<C>
where
    T: Copy,
    C: AsRef<[T]>,
{
    #[inline]
    fn len(&self) -> usize {
        self.inner.as_ref().len()
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self.inner.as_ref()[index]
    }
}

impl<T, C> AccessorMut<T> for AccessorArray<C>
where
    T: Copy,
    C: AsRef<[T]> + AsMut<[T]>,
{
    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self.inner.as_mut()[index] = value;
    }
}
