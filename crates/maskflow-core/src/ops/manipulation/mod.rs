//! Tensor manipulation operations
//!
//! - **shape**: broadcasting
//! - **indexing**: condition-driven selection and filling
//! - **utilities**: element type conversion

pub mod indexing;
pub mod shape;
pub mod utilities;

pub use indexing::{masked_fill, masked_select, where_op};
pub use shape::{broadcast_shapes, broadcast_to};
pub use utilities::cast;
