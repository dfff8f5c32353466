use crate::{math::matrix::Matrix, layers::dense::Layer};
use crate::optim::optimizer::Optimizer;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, _index: usize, layer: &mut Layer, weights_grad: &Matrix, biases_grad: &Matrix) {
        layer.apply_gradients(weights_grad, biases_grad, self.learning_rate);
    }
}
