use num_traits::{Float, NumAssignOps, NumOps};
use std::fmt::{Debug, Display};

/// A trait representing the element types a [`Matrix`](super::Matrix) can hold.
///
/// Restricted to floating-point types (`f32`, `f64`): every engine kernel needs
/// `exp`/`tanh`, division by a sample count and NaN-aware comparisons.
pub trait Scalar:
    Float // Includes Num + Copy + Bounded + Signed + etc.
    + NumAssignOps
    + NumOps
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Converts a `usize` count (e.g. the number of samples) into the scalar type.
    fn from_usize(n: usize) -> Self {
        <Self as num_traits::NumCast>::from(n).unwrap_or_else(Self::nan)
    }

    /// Converts an `f64` constant into the scalar type.
    fn from_f64(v: f64) -> Self {
        <Self as num_traits::NumCast>::from(v).unwrap_or_else(Self::nan)
    }
}

impl Scalar for f32 {}
impl Scalar for f64 {}
