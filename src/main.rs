use std::process::ExitCode;

use env_logger::{Builder, Env};
use log::{debug, error, info};

use parity_nn::{dataset, DemoConfig, ParityClassifier, ParityError};

fn main() -> ExitCode {
    setup_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` overrides the default `info` level.
fn setup_logging() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
}

fn run() -> Result<(), ParityError> {
    let config = DemoConfig::from_env()?;
    info!("configuration: {}", serde_json::to_string(&config)?);

    let train = dataset::build(config.train_range.start, config.train_range.end)?;
    let rows: Vec<_> = train.samples().iter().map(|s| &s.input).collect();
    debug!("training inputs: {}", serde_json::to_string(&rows)?);
    debug!("training labels: {}", serde_json::to_string(&train.labels())?);

    let mut classifier = ParityClassifier::new(config.seed)?;
    let mut optimizer = config.optimizer.build(config.learning_rate);
    classifier.fit(&train, &mut *optimizer, &config.train_config())?;

    let eval = dataset::build(config.eval_range.start, config.eval_range.end)?;
    let scores = classifier.evaluate(&eval)?;
    println!("accuracy {:.2}", scores.accuracy * 100.0);

    for &n in &config.queries {
        println!("is_even({n}) = {}", classifier.is_even(n)?);
    }
    Ok(())
}
