//! Parity classifier: a fixed 8 → 8 (ReLU) → 1 (Sigmoid) network over
//! little-endian bit vectors.
//!
//! The output is the probability that the encoded integer is odd, matching
//! the dataset label convention (label = bit 0).

use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::activation::activation::ActivationFunction;
use crate::dataset::{builder::DEFAULT_WIDTH, dataset::Dataset};
use crate::encoding::{bit_encoder::encode, bit_vector::BitVector};
use crate::errors::ParityError;
use crate::network::network::Network;
use crate::optim::optimizer::Optimizer;
use crate::train::{
    epoch_stats::EpochStats,
    evaluate::{evaluate, Evaluation},
    loop_fn::train_loop,
    train_config::TrainConfig,
};

/// Hidden layer width.
pub const HIDDEN_UNITS: usize = 8;

pub struct ParityClassifier {
    network: Network,
    rng: StdRng,
}

impl ParityClassifier {
    /// Creates an untrained classifier. A `seed` makes weight initialization
    /// and batch shuffling reproducible; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Result<ParityClassifier, ParityError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let network = Network::new(vec![
            (HIDDEN_UNITS, DEFAULT_WIDTH, ActivationFunction::ReLU),
            (1, HIDDEN_UNITS, ActivationFunction::Sigmoid),
        ], &mut rng)?;
        Ok(ParityClassifier { network, rng })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Trains on `dataset` and returns the per-epoch history.
    pub fn fit(
        &mut self,
        dataset: &Dataset,
        optimizer: &mut dyn Optimizer,
        config: &TrainConfig,
    ) -> Result<Vec<EpochStats>, ParityError> {
        info!(
            "fitting on {} samples: {} epochs, batch size {}",
            dataset.len(), config.epochs, config.batch_size
        );
        train_loop(
            &mut self.network,
            &dataset.inputs(),
            &dataset.targets(),
            optimizer,
            config,
            &mut self.rng,
        )
    }

    pub fn evaluate(&self, dataset: &Dataset) -> Result<Evaluation, ParityError> {
        let scores = evaluate(&self.network, &dataset.inputs(), &dataset.targets())?;
        info!(
            "evaluated {} samples: loss = {:.6}, accuracy = {:.2}%",
            dataset.len(), scores.loss, scores.accuracy * 100.0
        );
        Ok(scores)
    }

    /// Probability that `bits` encodes an odd integer.
    pub fn predict(&self, bits: &BitVector) -> Result<f64, ParityError> {
        if bits.len() != self.network.input_size() {
            return Err(ParityError::ShapeMismatch {
                expected: self.network.input_size(),
                actual: bits.len(),
            });
        }
        Ok(self.network.predict(&bits.to_f64_row())[0])
    }

    /// Encodes `n` at the network width and predicts whether it is even.
    pub fn is_even(&self, n: i64) -> Result<bool, ParityError> {
        let odd = self.predict(&encode(n, DEFAULT_WIDTH)?)?;
        Ok(odd <= 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::builder::build;
    use crate::optim::adam::Adam;

    #[test]
    fn fixed_architecture() {
        let c = ParityClassifier::new(Some(0)).unwrap();
        let layers = &c.network().layers;
        assert_eq!(layers.len(), 2);
        assert_eq!((layers[0].input_size, layers[0].size), (8, 8));
        assert_eq!(layers[0].activator, ActivationFunction::ReLU);
        assert_eq!((layers[1].input_size, layers[1].size), (8, 1));
        assert_eq!(layers[1].activator, ActivationFunction::Sigmoid);
    }

    #[test]
    fn same_seed_same_weights() {
        let a = ParityClassifier::new(Some(9)).unwrap();
        let b = ParityClassifier::new(Some(9)).unwrap();
        assert_eq!(a.network().layers[0].weights, b.network().layers[0].weights);
    }

    #[test]
    fn predict_returns_a_probability() {
        let c = ParityClassifier::new(Some(1)).unwrap();
        let p = c.predict(&encode(51, 8).unwrap()).unwrap();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn predict_rejects_other_widths() {
        let c = ParityClassifier::new(Some(1)).unwrap();
        let err = c.predict(&encode(5, 4).unwrap()).unwrap_err();
        assert!(matches!(err, ParityError::ShapeMismatch { expected: 8, actual: 4 }));
    }

    #[test]
    fn is_even_rejects_negative_queries() {
        let c = ParityClassifier::new(Some(1)).unwrap();
        assert!(matches!(c.is_even(-2), Err(ParityError::InvalidArgument { .. })));
    }

    #[test]
    fn fit_improves_training_loss() {
        let mut c = ParityClassifier::new(Some(3)).unwrap();
        let train = build(0, 100).unwrap();
        let before = c.evaluate(&train).unwrap().loss;
        let history = c.fit(&train, &mut Adam::new(0.01), &TrainConfig::new(20, 10)).unwrap();
        assert_eq!(history.len(), 20);
        assert!(c.evaluate(&train).unwrap().loss < before);
    }
}
