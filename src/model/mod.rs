pub mod classifier;

pub use classifier::ParityClassifier;
