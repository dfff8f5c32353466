pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod encoding;
pub mod dataset;
pub mod model;
pub mod config;
pub mod errors;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use loss::mse::MseLoss;
pub use optim::{Adam, Optimizer, OptimizerKind, Sgd};
pub use train::{evaluate, train_loop, EpochStats, Evaluation, TrainConfig};
pub use encoding::{decode, encode, encode_exact, BitVector};
pub use dataset::{build, build_with_width, Dataset, Sample};
pub use model::ParityClassifier;
pub use config::DemoConfig;
pub use errors::ParityError;
