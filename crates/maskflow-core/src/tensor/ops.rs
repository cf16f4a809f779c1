//! Tensor Methods
//!
//! Method forms of the functional operations in [`crate::ops`]. Each method
//! delegates directly; see the free functions for semantics.

use super::core::Tensor;
use crate::ops::masked::{MaskElement, MaxMin};
use crate::{Result, TensorError};
use scirs2_core::num_traits::{Float, FromPrimitive, NumCast, ToPrimitive, Zero};

impl<T: Clone> Tensor<T> {
    /// Copy the elements out in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }

    /// Extract the value of a single-element tensor
    pub fn to_scalar(&self) -> Result<T> {
        if self.numel() != 1 {
            return Err(TensorError::invalid_shape(
                "to_scalar",
                "tensor must hold exactly one element",
                self.shape.dims(),
            ));
        }
        self.data.iter().next().cloned().ok_or_else(|| {
            TensorError::invalid_shape_simple("to_scalar on empty tensor".to_string())
        })
    }

    /// Sum along specified axes
    pub fn sum(&self, axes: Option<&[i32]>, keepdims: bool) -> Result<Self>
    where
        T: Zero + std::ops::Add<Output = T>,
    {
        crate::ops::sum(self, axes, keepdims)
    }

    /// Mean along specified axes
    pub fn mean(&self, axes: Option<&[i32]>, keepdims: bool) -> Result<Self>
    where
        T: Float + FromPrimitive,
    {
        crate::ops::mean(self, axes, keepdims)
    }

    /// Maximum values along specified axes
    pub fn max(&self, axes: Option<&[i32]>, keepdims: bool) -> Result<Self>
    where
        T: Float,
    {
        crate::ops::max(self, axes, keepdims)
    }

    /// Minimum values along specified axes
    pub fn min(&self, axes: Option<&[i32]>, keepdims: bool) -> Result<Self>
    where
        T: Float,
    {
        crate::ops::min(self, axes, keepdims)
    }

    pub fn softmax(&self, axis: Option<i32>) -> Result<Self>
    where
        T: Float,
    {
        crate::ops::softmax(self, axis)
    }

    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Self> {
        crate::ops::broadcast_to(self, shape)
    }

    /// Replace elements where `mask` is true with `value`
    pub fn masked_fill(&self, mask: &Tensor<bool>, value: T) -> Result<Self> {
        crate::ops::masked_fill(self, mask, value)
    }

    /// Elements where `mask` is true, flattened in row-major order
    pub fn masked_select(&self, mask: &Tensor<bool>) -> Result<Self> {
        crate::ops::masked_select(self, mask)
    }

    pub fn cast<U: NumCast>(&self) -> Result<Tensor<U>>
    where
        T: ToPrimitive + Copy,
    {
        crate::ops::cast(self)
    }

    pub fn masked_sum<M: MaskElement>(
        &self,
        mask: Option<&Tensor<M>>,
        axes: Option<&[i32]>,
        keepdims: bool,
    ) -> Result<Self>
    where
        T: Zero + std::ops::Add<Output = T>,
    {
        crate::ops::masked_sum(self, mask, axes, keepdims)
    }

    pub fn masked_mean<M: MaskElement>(
        &self,
        mask: Option<&Tensor<M>>,
        axes: Option<&[i32]>,
        keepdims: bool,
    ) -> Result<Self>
    where
        T: Float + FromPrimitive,
    {
        crate::ops::masked_mean(self, mask, axes, keepdims)
    }

    pub fn masked_max<M: MaskElement>(
        &self,
        mask: Option<&Tensor<M>>,
        dim: Option<i32>,
        keepdims: bool,
    ) -> Result<MaxMin<T>>
    where
        T: Float,
    {
        crate::ops::masked_max(self, mask, dim, keepdims)
    }

    pub fn masked_min<M: MaskElement>(
        &self,
        mask: Option<&Tensor<M>>,
        dim: Option<i32>,
        keepdims: bool,
    ) -> Result<MaxMin<T>>
    where
        T: Float,
    {
        crate::ops::masked_min(self, mask, dim, keepdims)
    }

    pub fn masked_softmax<M: MaskElement>(
        &self,
        mask: Option<&Tensor<M>>,
        dim: Option<i32>,
    ) -> Result<Self>
    where
        T: Float,
    {
        crate::ops::masked_softmax(self, mask, dim)
    }
}
