//! Shared traits for the strided-cusum ecosystem.
//!
//! This crate provides the trait definitions shared between `strided-cusum`
//! and external container crates.
//!
//! External crates can depend on `strided-traits` to implement [`Accessor`]
//! and [`AccessorMut`] for their own containers without orphan rule
//! violations.

pub mod accessor;
pub mod scalar;

pub use accessor::{Accessor, AccessorMut};
pub use scalar::SumScalar;
