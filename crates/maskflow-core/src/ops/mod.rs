pub mod activation;
pub mod manipulation;
pub mod masked;
pub mod reduction;

pub use activation::softmax;
pub use manipulation::{broadcast_shapes, broadcast_to, cast, masked_fill, masked_select, where_op};
pub use masked::{
    call_reduction, fill_with_mask, masked_max, masked_mean, masked_mean_as, masked_min,
    masked_softmax, masked_softmax_as, masked_sum, masked_sum_as, MaskElement, MaxMin,
    ReduceDims,
};
pub use reduction::{
    argmax, argmin, max, max_with_indices, mean, min, min_with_indices, normalize_axis, sum,
};
