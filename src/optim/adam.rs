use crate::{math::matrix::Matrix, layers::dense::Layer};
use crate::optim::optimizer::Optimizer;

/// First and second moment estimates for one layer.
#[derive(Debug, Clone)]
struct Moments {
    t: i32,
    m_w: Matrix,
    v_w: Matrix,
    m_b: Matrix,
    v_b: Matrix,
}

impl Moments {
    fn for_layer(layer: &Layer) -> Moments {
        let (wr, wc) = (layer.weights.rows, layer.weights.cols);
        let (br, bc) = (layer.biases.rows, layer.biases.cols);
        Moments {
            t: 0,
            m_w: Matrix::zeros(wr, wc),
            v_w: Matrix::zeros(wr, wc),
            m_b: Matrix::zeros(br, bc),
            v_b: Matrix::zeros(br, bc),
        }
    }
}

/// Adam with bias-corrected moment estimates.
///
/// Defaults: β1 = 0.9, β2 = 0.999, ε = 1e-7.
#[derive(Debug, Clone)]
pub struct Adam {
    pub learning_rate: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
    moments: Vec<Option<Moments>>,
}

impl Adam {
    pub fn new(learning_rate: f64) -> Adam {
        Adam {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-7,
            moments: Vec::new(),
        }
    }

    /// Returns the parameter step for one tensor and updates its moments in place.
    fn update(&self, t: i32, m: &mut Matrix, v: &mut Matrix, grad: &Matrix) -> Matrix {
        let (b1, b2) = (self.beta1, self.beta2);
        *m = m.zip_map(grad, |m, g| b1 * m + (1.0 - b1) * g);
        *v = v.zip_map(grad, |v, g| b2 * v + (1.0 - b2) * g * g);

        let m_corr = 1.0 - b1.powi(t);
        let v_corr = 1.0 - b2.powi(t);
        let (lr, eps) = (self.learning_rate, self.epsilon);
        m.zip_map(v, |m, v| lr * (m / m_corr) / ((v / v_corr).sqrt() + eps))
    }
}

impl Optimizer for Adam {
    fn step(&mut self, index: usize, layer: &mut Layer, weights_grad: &Matrix, biases_grad: &Matrix) {
        if self.moments.len() <= index {
            self.moments.resize(index + 1, None);
        }
        let mut state = self.moments[index].take().unwrap_or_else(|| Moments::for_layer(layer));
        state.t += 1;

        let w_step = self.update(state.t, &mut state.m_w, &mut state.v_w, weights_grad);
        let b_step = self.update(state.t, &mut state.m_b, &mut state.v_b, biases_grad);
        layer.apply_steps(&w_step, &b_step);

        self.moments[index] = Some(state);
    }
}
