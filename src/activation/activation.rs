use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
    ReLU,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
        }
    }

    /// Derivative with respect to the pre-activation `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            },
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centred_at_half() {
        assert_eq!(ActivationFunction::Sigmoid.function(0.0), 0.5);
        assert_eq!(ActivationFunction::Sigmoid.derivative(0.0), 0.25);
        assert!(ActivationFunction::Sigmoid.function(40.0) > 0.999);
    }

    #[test]
    fn relu_clamps_negatives() {
        assert_eq!(ActivationFunction::ReLU.function(-2.0), 0.0);
        assert_eq!(ActivationFunction::ReLU.function(3.5), 3.5);
        assert_eq!(ActivationFunction::ReLU.derivative(-2.0), 0.0);
        assert_eq!(ActivationFunction::ReLU.derivative(3.5), 1.0);
    }
}
