use super::mask::{fill_positions, MaskElement};
use crate::ops::manipulation::masked_fill;
use crate::{Result, Tensor};

/// Replace every masked-out element of `input` with `fill_value`
///
/// The result equals `input` wherever `mask` is nonzero/true and
/// `fill_value` wherever it is zero/false. `input` is never modified. The
/// result has the broadcast shape of `input` and `mask`.
pub fn fill_with_mask<T, M>(input: &Tensor<T>, mask: &Tensor<M>, fill_value: T) -> Result<Tensor<T>>
where
    T: Clone,
    M: MaskElement,
{
    let inverted = fill_positions(mask);
    masked_fill(input, &inverted, fill_value)
}
