//! Tensor Module
//!
//! - **core**: tensor structure and properties
//! - **creation**: constructors
//! - **ops**: method forms of the functional operations in [`crate::ops`]

pub mod core;
pub mod creation;
pub mod ops;

pub use core::Tensor;
