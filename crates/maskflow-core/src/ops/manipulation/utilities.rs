//! Element type conversion

use crate::{Result, Tensor, TensorError};
use scirs2_core::num_traits::{NumCast, ToPrimitive};

/// Cast operation - convert tensor to a different element type
///
/// Each element goes through `NumCast`, so float-to-float and int-to-float
/// conversions always succeed while values a target type cannot hold
/// (NaN or infinity into an integer type, out-of-range integers) fail with
/// `InvalidArgument`.
///
/// # Example
/// ```
/// use maskflow_core::{ops::cast, Tensor};
/// let tensor_f32 = Tensor::from_vec(vec![1.0f32, 2.0], &[2]).unwrap();
/// let tensor_f64: Tensor<f64> = cast(&tensor_f32).unwrap();
/// assert_eq!(tensor_f64.as_slice().unwrap(), &[1.0, 2.0]);
/// ```
pub fn cast<T, U>(tensor: &Tensor<T>) -> Result<Tensor<U>>
where
    T: ToPrimitive + Copy,
    U: NumCast,
{
    let mut converted = Vec::with_capacity(tensor.numel());
    for &value in tensor.array().iter() {
        let value = U::from(value).ok_or_else(|| {
            TensorError::invalid_argument_op(
                "cast",
                &format!(
                    "value not representable as {}",
                    std::any::type_name::<U>()
                ),
            )
        })?;
        converted.push(value);
    }

    let array = scirs2_core::ndarray::ArrayD::from_shape_vec(
        scirs2_core::ndarray::IxDyn(tensor.shape().dims()),
        converted,
    )
    .map_err(|e| TensorError::invalid_shape_simple(e.to_string()))?;
    Ok(Tensor::from_array(array))
}
