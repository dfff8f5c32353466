use rand::Rng;

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

#[derive(Debug, Clone)]
pub struct Layer{
    pub size: usize,
    pub input_size: usize,
    pub neurons: Matrix,
    pre_neurons: Matrix,  // pre-activation values (z = xW + b) needed for correct derivative
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction
}

impl Layer {
    /// Weights use He init ahead of ReLU and Xavier init otherwise; biases start at zero.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        let weights = match activation {
            ActivationFunction::ReLU => Matrix::he(input_size, size, rng),
            ActivationFunction::Sigmoid => Matrix::xavier(input_size, size, rng),
        };

        Layer {
            size,
            input_size,
            neurons: Matrix::zeros(1, size),
            pre_neurons: Matrix::zeros(1, size),
            weights,
            biases: Matrix::zeros(1, size),
            activator: activation
        }
    }

    fn pre_activation(&self, input: &[f64]) -> Matrix {
        &Matrix::row(input.to_vec()) * &self.weights + self.biases.clone()
    }

    /// Forward pass that records activations for a following backward pass.
    pub fn feed_from(&mut self, input: &[f64]) -> Vec<f64> {
        let z = self.pre_activation(input);
        let a = z.map(|x| self.activator.function(x));
        self.pre_neurons = z;
        self.neurons = a.clone();
        a.data.into_iter().next().unwrap_or_default()
    }

    /// Forward pass without touching the recorded activations.
    pub fn output_for(&self, input: &[f64]) -> Vec<f64> {
        let a = self.pre_activation(input).map(|x| self.activator.function(x));
        a.data.into_iter().next().unwrap_or_default()
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(
        &self,
        next_layer_delta: &Matrix,
        inputs: &Matrix,
    ) -> (Matrix, Matrix) {
        // derivative(z) must be evaluated at the pre-activation, not at a
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // δ = error ⊙ σ'(z)
        let layer_delta = next_layer_delta.hadamard(&act_derivative);

        let weights_adjustment = &inputs.transpose() * &layer_delta;
        let biases_adjustment = layer_delta;

        (weights_adjustment, biases_adjustment)
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, weights_grad: &Matrix, biases_grad: &Matrix, lr: f64) {
        self.weights = self.weights.zip_map(weights_grad, |w, g| w - g * lr);
        self.biases = self.biases.zip_map(biases_grad, |b, g| b - g * lr);
    }

    /// Subtracts ready-made parameter steps (already scaled by the optimizer).
    pub fn apply_steps(&mut self, weights_step: &Matrix, biases_step: &Matrix) {
        self.weights = self.weights.zip_map(weights_step, |w, s| w - s);
        self.biases = self.biases.zip_map(biases_step, |b, s| b - s);
    }
}
