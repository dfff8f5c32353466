use crate::dataset::sample::Sample;

/// Ordered samples for a contiguous integer range, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Dataset {
        Dataset { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn labels(&self) -> Vec<u8> {
        self.samples.iter().map(|s| s.label).collect()
    }

    /// One row per sample, bits as 0.0 / 1.0.
    pub fn inputs(&self) -> Vec<Vec<f64>> {
        self.samples.iter().map(|s| s.input.to_f64_row()).collect()
    }

    /// One single-element row per sample holding the label.
    pub fn targets(&self) -> Vec<Vec<f64>> {
        self.samples.iter().map(|s| vec![f64::from(s.label)]).collect()
    }
}
