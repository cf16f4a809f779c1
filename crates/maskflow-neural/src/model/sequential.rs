use crate::layers::{Layer, LayerType, MaskedLayer};
use maskflow_core::{Result, Tensor};

/// Sequential pipeline that applies masked layers in order
///
/// The same mask is handed to every stage. An empty pipeline returns its
/// input unchanged.
pub struct MaskedSequential<T> {
    layers: Vec<Box<dyn MaskedLayer<T>>>,
    training: bool,
}

impl<T: Clone> MaskedSequential<T> {
    /// Create a new pipeline with the given layers
    pub fn new(layers: Vec<Box<dyn MaskedLayer<T>>>) -> Self {
        Self {
            layers,
            training: false,
        }
    }

    /// Get the number of layers in the pipeline
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if the pipeline is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Add a layer to the end of the sequence
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, layer: Box<dyn MaskedLayer<T>>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Get a reference to the layer at the given index
    pub fn get_layer(&self, index: usize) -> Option<&dyn MaskedLayer<T>> {
        self.layers.get(index).map(|layer| layer.as_ref())
    }

    pub fn is_training(&self) -> bool {
        self.training
    }

    /// Run every stage with the same optional mask
    pub fn forward(&self, input: &Tensor<T>, mask: Option<&Tensor<bool>>) -> Result<Tensor<T>> {
        tracing::trace!(
            stages = self.layers.len(),
            masked = mask.is_some(),
            "masked sequential forward"
        );
        let mut output = input.clone();
        for layer in &self.layers {
            output = layer.forward_masked(&output, mask)?;
        }
        Ok(output)
    }

    /// Set the pipeline to training mode
    pub fn train(&mut self) {
        self.set_mode(true);
    }

    /// Set the pipeline to evaluation mode
    pub fn eval(&mut self) {
        self.set_mode(false);
    }

    fn set_mode(&mut self, training: bool) {
        self.training = training;
        for layer in &mut self.layers {
            layer.set_training(training);
        }
    }
}

impl<T: Clone> Clone for MaskedSequential<T> {
    fn clone(&self) -> Self {
        Self {
            layers: self
                .layers
                .iter()
                .map(|layer| layer.clone_masked_box())
                .collect(),
            training: self.training,
        }
    }
}

impl<T: Clone + 'static> Layer<T> for MaskedSequential<T> {
    fn forward(&self, input: &Tensor<T>) -> Result<Tensor<T>> {
        MaskedSequential::forward(self, input, None)
    }

    fn parameters(&self) -> Vec<&Tensor<T>> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor<T>> {
        self.layers
            .iter_mut()
            .flat_map(|layer| layer.parameters_mut())
            .collect()
    }

    fn set_training(&mut self, training: bool) {
        self.set_mode(training);
    }

    fn clone_box(&self) -> Box<dyn Layer<T>> {
        Box::new(self.clone())
    }

    fn layer_type(&self) -> LayerType {
        LayerType::Sequential
    }
}

impl<T: Clone + 'static> MaskedLayer<T> for MaskedSequential<T> {
    fn forward_masked(&self, input: &Tensor<T>, mask: Option<&Tensor<bool>>) -> Result<Tensor<T>> {
        MaskedSequential::forward(self, input, mask)
    }

    fn clone_masked_box(&self) -> Box<dyn MaskedLayer<T>> {
        Box::new(self.clone())
    }
}
