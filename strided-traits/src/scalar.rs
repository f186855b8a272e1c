//! Scalar type bounds for cumulative summation.

/// Element types usable with the pairwise cumulative-sum kernels.
///
/// Only `Copy` and `Add` are required: the kernels never need a zero or a
/// multiplication, because every run is seeded by the caller. Floating-point
/// types keep their IEEE 754 addition semantics (signed zero, NaN
/// propagation), which the kernels rely on rather than emulate.
///
/// Custom semirings (e.g. max-plus types whose `Add` is `max`) satisfy the
/// bound as well, turning the kernels into cumulative-max scans.
pub trait SumScalar: Copy + std::ops::Add<Output = Self> {}

impl<T> SumScalar for T where T: Copy + std::ops::Add<Output = T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Float;

    fn assert_sum_scalar<T: SumScalar>() {}

    fn add_twice<T: SumScalar>(seed: T, x: T) -> T {
        seed + x + x
    }

    #[test]
    fn test_standard_types() {
        assert_sum_scalar::<f32>();
        assert_sum_scalar::<f64>();
        assert_sum_scalar::<i32>();
        assert_sum_scalar::<i64>();
        assert_sum_scalar::<num_complex::Complex64>();
    }

    #[test]
    fn test_signed_zero_survives_generic_add() {
        fn check<T: SumScalar + Float>() {
            let r = add_twice(T::neg_zero(), T::neg_zero());
            assert!(r.is_zero() && r.is_sign_negative());
        }
        check::<f32>();
        check::<f64>();
    }

    #[test]
    fn test_max_plus_type() {
        // Add = max, so a cumulative sum becomes a running maximum
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct MaxPlus(f64);

        impl std::ops::Add for MaxPlus {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                MaxPlus(self.0.max(rhs.0))
            }
        }

        assert_sum_scalar::<MaxPlus>();
        assert_eq!(add_twice(MaxPlus(1.0), MaxPlus(5.0)), MaxPlus(5.0));
        assert_eq!(add_twice(MaxPlus(7.0), MaxPlus(5.0)), MaxPlus(7.0));
    }
}
