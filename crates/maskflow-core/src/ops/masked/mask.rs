//! Mask element interpretation
//!
//! Masks may be boolean or numeric. Any nonzero value (including NaN) marks
//! the element as included; zero/false marks it as excluded.

use crate::Tensor;

/// Element type usable in a mask tensor
pub trait MaskElement: Copy + 'static {
    /// Whether the corresponding input element takes part in the operation
    fn is_unmasked(&self) -> bool;
}

impl MaskElement for bool {
    #[inline]
    fn is_unmasked(&self) -> bool {
        *self
    }
}

macro_rules! impl_mask_element_int {
    ($($ty:ty),*) => {
        $(
            impl MaskElement for $ty {
                #[inline]
                fn is_unmasked(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

macro_rules! impl_mask_element_float {
    ($($ty:ty),*) => {
        $(
            impl MaskElement for $ty {
                #[inline]
                fn is_unmasked(&self) -> bool {
                    *self != 0.0
                }
            }
        )*
    };
}

impl_mask_element_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_mask_element_float!(f32, f64);

/// Coerce a mask to strict booleans (`true` = included)
pub fn to_bool_mask<M: MaskElement>(mask: &Tensor<M>) -> Tensor<bool> {
    Tensor::from_array(mask.array().mapv(|m| m.is_unmasked()))
}

/// Positions to overwrite with a sentinel: the logical inverse of the mask
pub fn fill_positions<M: MaskElement>(mask: &Tensor<M>) -> Tensor<bool> {
    Tensor::from_array(mask.array().mapv(|m| !m.is_unmasked()))
}
