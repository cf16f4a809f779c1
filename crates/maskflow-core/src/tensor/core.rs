//! Core Tensor Structure and Properties
//!
//! The tensor is a thin owner of an `ndarray` dynamic-rank array plus its
//! cached `Shape`. All numeric work is delegated to `ndarray`.

use crate::Shape;
use scirs2_core::ndarray::ArrayD;

/// Dense N-dimensional tensor backed by an `ArrayD<T>`
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
    pub(in crate::tensor) data: ArrayD<T>,
    pub(in crate::tensor) shape: Shape,
}

impl<T> Tensor<T> {
    /// Get the shape of the tensor
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Borrow the underlying array
    pub fn array(&self) -> &ArrayD<T> {
        &self.data
    }

    /// Consume the tensor and return the underlying array
    pub fn into_array(self) -> ArrayD<T> {
        self.data
    }

    /// Get the value at a specific index
    pub fn get(&self, index: &[usize]) -> Option<T>
    where
        T: Clone,
    {
        if index.len() != self.data.ndim() {
            return None;
        }
        self.data.get(index).cloned()
    }

    /// Get the underlying data as a slice when it is contiguous
    pub fn as_slice(&self) -> Option<&[T]> {
        self.data.as_slice()
    }

    /// Check if tensor is empty (has no elements)
    pub fn is_empty(&self) -> bool {
        self.shape.size() == 0
    }

    /// Get the total number of elements
    pub fn numel(&self) -> usize {
        self.shape.size()
    }

    /// Get the number of dimensions (rank)
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Check if tensor is a scalar (0-dimensional)
    pub fn is_scalar(&self) -> bool {
        self.shape.rank() == 0
    }

    /// Check if two tensors have the same shape
    pub fn same_shape<U>(&self, other: &Tensor<U>) -> bool {
        self.shape == other.shape
    }

    /// Check if tensors are broadcastable
    pub fn is_broadcastable_with<U>(&self, other: &Tensor<U>) -> bool {
        self.shape.broadcast_shape(&other.shape).is_some()
    }
}
