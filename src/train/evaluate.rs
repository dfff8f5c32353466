use crate::errors::ParityError;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;

/// Loss and accuracy of a network over a labelled set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub loss: f64,
    /// Fraction in [0, 1].
    pub accuracy: f64,
}

/// Scores `network` without modifying it.
///
/// A sample counts as correct when every output is on the same side of 0.5
/// as its target (outputs of exactly 0.5 count as the negative class).
pub fn evaluate(
    network: &Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
) -> Result<Evaluation, ParityError> {
    check_shapes(network, inputs, labels)?;

    let (total_loss, correct) = inputs.iter().zip(labels.iter())
        .map(|(input, label)| {
            let output = network.predict(input);
            (MseLoss::loss(&output, label), is_correct(&output, label))
        })
        .fold((0.0, 0usize), |(loss, hits), (l, ok)| (loss + l, hits + usize::from(ok)));

    let n = inputs.len() as f64;
    Ok(Evaluation {
        loss: total_loss / n,
        accuracy: correct as f64 / n,
    })
}

pub(crate) fn is_correct(predicted: &[f64], expected: &[f64]) -> bool {
    predicted.iter().zip(expected.iter())
        .all(|(p, e)| (*p > 0.5) == (*e > 0.5))
}

/// Validates a labelled set against the network's input and output widths.
pub(crate) fn check_shapes(
    network: &Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
) -> Result<(), ParityError> {
    if inputs.is_empty() {
        return Err(ParityError::EmptyDataset);
    }
    if inputs.len() != labels.len() {
        return Err(ParityError::ShapeMismatch { expected: inputs.len(), actual: labels.len() });
    }
    if let Some(bad) = inputs.iter().find(|x| x.len() != network.input_size()) {
        return Err(ParityError::ShapeMismatch { expected: network.input_size(), actual: bad.len() });
    }
    if let Some(bad) = labels.iter().find(|y| y.len() != network.output_size()) {
        return Err(ParityError::ShapeMismatch { expected: network.output_size(), actual: bad.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use crate::math::matrix::Matrix;
    use rand::{rngs::StdRng, SeedableRng};

    /// Single sigmoid unit that outputs > 0.5 exactly when input[0] is 1.
    fn bit_zero_detector() -> Network {
        let mut net = Network::new(
            vec![(1, 2, ActivationFunction::Sigmoid)],
            &mut StdRng::seed_from_u64(0),
        ).unwrap();
        net.layers[0].weights = Matrix::from_data(vec![vec![10.0], vec![0.0]]);
        net.layers[0].biases = Matrix::row(vec![-5.0]);
        net
    }

    #[test]
    fn perfect_detector_scores_full_accuracy() {
        let net = bit_zero_detector();
        let inputs = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]];
        let labels = vec![vec![1.0], vec![0.0], vec![1.0]];
        let eval = evaluate(&net, &inputs, &labels).unwrap();
        assert_eq!(eval.accuracy, 1.0);
        assert!(eval.loss < 0.01);
    }

    #[test]
    fn flipped_labels_score_zero() {
        let net = bit_zero_detector();
        let inputs = vec![vec![1.0, 0.0], vec![0.0, 0.0]];
        let labels = vec![vec![0.0], vec![1.0]];
        assert_eq!(evaluate(&net, &inputs, &labels).unwrap().accuracy, 0.0);
    }

    #[test]
    fn empty_set_is_an_error() {
        let net = bit_zero_detector();
        assert!(matches!(evaluate(&net, &[], &[]), Err(ParityError::EmptyDataset)));
    }

    #[test]
    fn wrong_input_width_is_an_error() {
        let net = bit_zero_detector();
        let err = evaluate(&net, &[vec![1.0; 3]], &[vec![1.0]]).unwrap_err();
        assert!(matches!(err, ParityError::ShapeMismatch { expected: 2, actual: 3 }));
    }
}
