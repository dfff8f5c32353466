use std::time::Instant;

use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::errors::ParityError;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::optimizer::Optimizer;
use crate::train::epoch_stats::EpochStats;
use crate::train::evaluate::{check_shapes, evaluate};
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs of shuffled mini-batch
/// descent on mean-squared error and returns one `EpochStats` per epoch.
///
/// # Arguments
/// - `network`      — mutable reference to the network; modified in place
/// - `train_inputs` — training samples, each a `Vec<f64>` of length `input_size`
/// - `train_labels` — corresponding targets, same length as `train_inputs`
/// - `optimizer`    — applies the averaged gradients of each batch
/// - `config`       — epochs and batch size
/// - `rng`          — drives the per-epoch shuffle
///
/// # Errors
/// `EmptyDataset` for an empty training set, `InvalidArgument` for a zero
/// batch size, `ShapeMismatch` when inputs or labels do not fit the network.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    train_inputs: &[Vec<f64>],
    train_labels: &[Vec<f64>],
    optimizer: &mut dyn Optimizer,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<EpochStats>, ParityError> {
    check_shapes(network, train_inputs, train_labels)?;
    if config.batch_size == 0 {
        return Err(ParityError::invalid_argument("batch_size must be at least 1"));
    }

    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let train_loss = run_one_epoch(
            network,
            train_inputs,
            train_labels,
            optimizer,
            config.batch_size,
            rng,
        );

        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        let train_accuracy = evaluate(network, train_inputs, train_labels)?.accuracy;

        info!(
            "epoch {epoch}/{}: loss = {train_loss:.6}, accuracy = {train_accuracy:.4} ({elapsed_ms} ms)",
            config.epochs
        );

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            train_accuracy,
            elapsed_ms,
        });
    }

    Ok(history)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Runs one full epoch of mini-batch updates over the training data.
/// Returns the mean loss over all samples.
fn run_one_epoch<R: Rng + ?Sized>(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    optimizer: &mut dyn Optimizer,
    batch_size: usize,
    rng: &mut R,
) -> f64 {
    let n = inputs.len();
    let mut total_loss = 0.0;

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    for batch in indices.chunks(batch_size) {
        let mut acc_grads: Vec<(Matrix, Matrix)> = network.layers.iter()
            .map(|layer| (
                Matrix::zeros(layer.weights.rows, layer.weights.cols),
                Matrix::zeros(layer.biases.rows, layer.biases.cols),
            ))
            .collect();

        for &idx in batch {
            let input    = &inputs[idx];
            let expected = &labels[idx];

            let output = network.forward(input);
            total_loss += MseLoss::loss(&output, expected);

            let mut delta = Matrix::row(MseLoss::derivative(&output, expected));

            // Backward pass.
            for i in (0..network.layers.len()).rev() {
                let input_for_layer = if i == 0 {
                    Matrix::row(input.clone())
                } else {
                    network.layers[i - 1].neurons.clone()
                };

                let (w_grad, b_grad) = network.layers[i].compute_gradients(&delta, &input_for_layer);

                if i > 0 {
                    // Propagate δ_i through the weights to get ∂L/∂a_{i-1}.
                    delta = &b_grad * &network.layers[i].weights.transpose();
                }

                acc_grads[i].0 = acc_grads[i].0.clone() + w_grad;
                acc_grads[i].1 = acc_grads[i].1.clone() + b_grad;
            }
        }

        let inv_batch = 1.0 / batch.len() as f64;
        for (i, (w_acc, b_acc)) in acc_grads.into_iter().enumerate() {
            let w_avg = w_acc.map(|x| x * inv_batch);
            let b_avg = b_acc.map(|x| x * inv_batch);
            optimizer.step(i, &mut network.layers[i], &w_avg, &b_avg);
        }
    }

    total_loss / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use crate::optim::{adam::Adam, sgd::Sgd};
    use rand::{rngs::StdRng, SeedableRng};

    fn and_gate() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        (
            vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
            vec![vec![0.0], vec![0.0], vec![0.0], vec![1.0]],
        )
    }

    fn small_net(rng: &mut StdRng) -> Network {
        Network::new(vec![
            (4, 2, ActivationFunction::ReLU),
            (1, 4, ActivationFunction::Sigmoid),
        ], rng).unwrap()
    }

    #[test]
    fn returns_one_stat_per_epoch() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut net = small_net(&mut rng);
        let (x, y) = and_gate();
        let history = train_loop(&mut net, &x, &y, &mut Sgd::new(0.1), &TrainConfig::new(3, 2), &mut rng).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.iter().map(|s| s.epoch).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(history.iter().all(|s| s.total_epochs == 3));
    }

    #[test]
    fn adam_drives_loss_down() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut net = small_net(&mut rng);
        let (x, y) = and_gate();
        let before = evaluate(&net, &x, &y).unwrap().loss;
        let history = train_loop(&mut net, &x, &y, &mut Adam::new(0.05), &TrainConfig::new(300, 4), &mut rng).unwrap();
        let after = evaluate(&net, &x, &y).unwrap().loss;
        assert!(after < before, "loss went from {before} to {after}");
        assert!(history.last().unwrap().train_loss < history[0].train_loss);
    }

    #[test]
    fn zero_epochs_leaves_network_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut net = small_net(&mut rng);
        let weights = net.layers[0].weights.clone();
        let (x, y) = and_gate();
        let history = train_loop(&mut net, &x, &y, &mut Sgd::new(0.1), &TrainConfig::new(0, 2), &mut rng).unwrap();
        assert!(history.is_empty());
        assert_eq!(net.layers[0].weights, weights);
    }

    #[test]
    fn rejects_zero_batch_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut net = small_net(&mut rng);
        let (x, y) = and_gate();
        let err = train_loop(&mut net, &x, &y, &mut Sgd::new(0.1), &TrainConfig::new(1, 0), &mut rng).unwrap_err();
        assert!(matches!(err, ParityError::InvalidArgument { .. }));
    }

    #[test]
    fn rejects_mismatched_labels() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut net = small_net(&mut rng);
        let (x, _) = and_gate();
        let err = train_loop(&mut net, &x, &[vec![1.0]], &mut Sgd::new(0.1), &TrainConfig::default(), &mut rng).unwrap_err();
        assert!(matches!(err, ParityError::ShapeMismatch { expected: 4, actual: 1 }));
    }

    #[test]
    fn rejects_empty_training_set() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut net = small_net(&mut rng);
        let err = train_loop(&mut net, &[], &[], &mut Sgd::new(0.1), &TrainConfig::default(), &mut rng).unwrap_err();
        assert!(matches!(err, ParityError::EmptyDataset));
    }
}
