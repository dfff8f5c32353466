use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::ParityError;
use crate::optim::optimizer::OptimizerKind;
use crate::train::train_config::TrainConfig;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "PARITY_NN_CONFIG";

/// Half-open integer range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub start: i64,
    pub end: i64,
}

/// Settings for the demo run. Fields missing from a JSON file keep their
/// defaults; the network architecture itself is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub train_range: RangeConfig,
    pub eval_range: RangeConfig,
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    pub optimizer: OptimizerKind,
    pub seed: Option<u64>,
    pub queries: Vec<i64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            train_range: RangeConfig { start: 0, end: 100 },
            eval_range: RangeConfig { start: 1000, end: 10_000 },
            epochs: 100,
            batch_size: 10,
            learning_rate: 0.001,
            optimizer: OptimizerKind::Adam,
            seed: None,
            queries: vec![51, 76],
        }
    }
}

impl DemoConfig {
    /// Reads and validates a configuration from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<DemoConfig, ParityError> {
        let file = std::fs::File::open(path.as_ref())?;
        let reader = std::io::BufReader::new(file);
        let config: DemoConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by `PARITY_NN_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<DemoConfig, ParityError> {
        DemoConfig::resolve(std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    fn resolve(path: Option<PathBuf>) -> Result<DemoConfig, ParityError> {
        match path {
            Some(path) => {
                info!("loading configuration from {}", path.display());
                DemoConfig::load_json(path)
            }
            None => Ok(DemoConfig::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ParityError> {
        if self.batch_size == 0 {
            return Err(config_error("batch_size must be at least 1"));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(config_error(format!(
                "learning_rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        for (name, range) in [("train_range", self.train_range), ("eval_range", self.eval_range)] {
            if range.start < 0 {
                return Err(config_error(format!("{name} must not start below zero")));
            }
            if range.end <= range.start {
                return Err(config_error(format!("{name} is empty")));
            }
        }
        if let Some(&n) = self.queries.iter().find(|&&n| n < 0) {
            return Err(config_error(format!("queries must not be negative, got {n}")));
        }
        Ok(())
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.epochs, self.batch_size)
    }
}

fn config_error(message: impl Into<String>) -> ParityError {
    ParityError::Config { message: message.into() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_follow_the_reference_run() {
        let c = DemoConfig::default();
        assert_eq!(c.train_range, RangeConfig { start: 0, end: 100 });
        assert_eq!(c.eval_range, RangeConfig { start: 1000, end: 10_000 });
        assert_eq!(c.train_config(), TrainConfig::new(100, 10));
        assert_eq!(c.optimizer, OptimizerKind::Adam);
        assert_eq!(c.queries, vec![51, 76]);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config(r#"{ "epochs": 5, "optimizer": "sgd", "seed": 7 }"#);
        let c = DemoConfig::load_json(file.path()).unwrap();
        assert_eq!(c.epochs, 5);
        assert_eq!(c.optimizer, OptimizerKind::Sgd);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.batch_size, 10);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let file = write_config(r#"{ "hidden_units": 16 }"#);
        assert!(matches!(DemoConfig::load_json(file.path()), Err(ParityError::Serialization(_))));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = write_config(r#"{ "batch_size": 0 }"#);
        assert!(matches!(DemoConfig::load_json(file.path()), Err(ParityError::Config { .. })));

        let file = write_config(r#"{ "eval_range": { "start": -10, "end": 5 } }"#);
        assert!(matches!(DemoConfig::load_json(file.path()), Err(ParityError::Config { .. })));
    }

    #[test]
    fn negative_queries_are_rejected_before_training() {
        let file = write_config(r#"{ "queries": [51, -3] }"#);
        let err = DemoConfig::load_json(file.path()).unwrap_err();
        assert!(matches!(err, ParityError::Config { ref message } if message.contains("-3")));

        let config = DemoConfig { queries: vec![0, 76], ..DemoConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DemoConfig::load_json(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ParityError::Io(_)));
    }

    #[test]
    fn resolve_without_path_uses_defaults() {
        assert_eq!(DemoConfig::resolve(None).unwrap(), DemoConfig::default());
    }

    #[test]
    fn resolve_with_path_loads_it() {
        let file = write_config(r#"{ "queries": [3] }"#);
        let c = DemoConfig::resolve(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(c.queries, vec![3]);
    }
}
