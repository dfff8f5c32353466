use rand::Rng;

use crate::{activation::activation::ActivationFunction, errors::ParityError, layers::dense::Layer};

#[derive(Debug, Clone)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples.
    ///
    /// # Errors
    /// `InvalidArgument` for an empty layer list or a zero-sized layer;
    /// `ShapeMismatch` when a layer's input size differs from the previous
    /// layer's size.
    pub fn new<R: Rng + ?Sized>(
        layer_specs: Vec<(usize, usize, ActivationFunction)>,
        rng: &mut R,
    ) -> Result<Network, ParityError> {
        if layer_specs.is_empty() {
            return Err(ParityError::invalid_argument("network needs at least one layer"));
        }
        for (i, &(size, input_size, _)) in layer_specs.iter().enumerate() {
            if size == 0 || input_size == 0 {
                return Err(ParityError::invalid_argument(format!("layer {i} has a zero dimension")));
            }
            if i > 0 && layer_specs[i - 1].0 != input_size {
                return Err(ParityError::ShapeMismatch {
                    expected: layer_specs[i - 1].0,
                    actual: input_size,
                });
            }
        }

        let layers = layer_specs.into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation, rng))
            .collect();
        Ok(Network { layers })
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, |l| l.input_size)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, |l| l.size)
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.feed_from(&current);
        }
        current
    }

    /// Forward pass for inference; leaves stored activations untouched.
    pub fn predict(&self, input: &[f64]) -> Vec<f64> {
        self.layers.iter()
            .fold(input.to_vec(), |current, layer| layer.output_for(&current))
    }
}
