use serde::{Deserialize, Serialize};

use crate::{math::matrix::Matrix, layers::dense::Layer};
use crate::optim::{adam::Adam, sgd::Sgd};

/// Updates one layer's parameters from its averaged mini-batch gradients.
///
/// `index` identifies the layer within its network so that stateful
/// optimizers can keep per-layer moments.
pub trait Optimizer {
    fn step(&mut self, index: usize, layer: &mut Layer, weights_grad: &Matrix, biases_grad: &Matrix);
}

/// Optimizer selection as it appears in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerKind {
    #[default]
    Adam,
    Sgd,
}

impl OptimizerKind {
    pub fn build(self, learning_rate: f64) -> Box<dyn Optimizer> {
        match self {
            OptimizerKind::Adam => Box::new(Adam::new(learning_rate)),
            OptimizerKind::Sgd => Box::new(Sgd::new(learning_rate)),
        }
    }
}
