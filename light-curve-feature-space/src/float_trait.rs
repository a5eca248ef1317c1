use crate::registry::{Registry, BUILTIN_F32, BUILTIN_F64};

use conv::prelude::*;
use num_traits::float::Float as NumFloat;
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::AddAssign;

/// Floating point type features are evaluated with, either `f32` or `f64`
pub trait Float:
    'static
    + NumFloat
    + Sum
    + AddAssign
    + ValueFrom<usize>
    + ValueFrom<f32>
    + ApproxFrom<f64>
    + Send
    + Sync
    + Display
    + Debug
{
    fn half() -> Self;
    fn two() -> Self;
    fn three() -> Self;

    /// Catalog of the built-in features evaluated with this float type
    fn builtin_registry() -> &'static Registry<Self>;
}

macro_rules! float_impl {
    ($float: ty, $registry: ident) => {
        impl Float for $float {
            #[inline]
            fn half() -> Self {
                0.5
            }

            #[inline]
            fn two() -> Self {
                2.0
            }

            #[inline]
            fn three() -> Self {
                3.0
            }

            fn builtin_registry() -> &'static Registry<Self> {
                &$registry
            }
        }
    };
}

float_impl!(f32, BUILTIN_F32);
float_impl!(f64, BUILTIN_F64);
