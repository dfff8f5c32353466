pub mod builder;
pub mod dataset;
pub mod sample;

pub use builder::{build, build_with_width, DEFAULT_WIDTH};
pub use dataset::Dataset;
pub use sample::Sample;
