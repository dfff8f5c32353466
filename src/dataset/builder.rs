use log::{debug, warn};

use crate::dataset::dataset::Dataset;
use crate::dataset::sample::Sample;
use crate::encoding::bit_encoder::{encode, fits_in};
use crate::errors::ParityError;

/// Bit width used for every network input.
pub const DEFAULT_WIDTH: usize = 8;

/// Builds one sample per integer in `[start, end)` at `DEFAULT_WIDTH` bits.
pub fn build(start: i64, end: i64) -> Result<Dataset, ParityError> {
    build_with_width(start, end, DEFAULT_WIDTH)
}

/// Builds one sample per integer in `[start, end)`, ascending.
///
/// Empty when `end <= start`. Integers needing more than `width` bits are
/// truncated by the encoder; the label is unaffected since bit 0 survives.
///
/// # Errors
/// `InvalidArgument` if the range contains a negative integer or `width` is 0.
pub fn build_with_width(start: i64, end: i64, width: usize) -> Result<Dataset, ParityError> {
    let samples = (start..end)
        .map(|i| encode(i, width).map(Sample::from_bits))
        .collect::<Result<Vec<_>, _>>()?;

    let truncated = truncated_count(start, end, width);
    if truncated > 0 {
        warn!("{truncated} of {} samples in [{start}, {end}) exceed {width} bits and were truncated", samples.len());
    }
    debug!("built {} samples for [{start}, {end}) at width {width}", samples.len());

    Ok(Dataset::new(samples))
}

/// Number of integers in `[start, end)` that need more than `width` bits.
pub(crate) fn truncated_count(start: i64, end: i64, width: usize) -> usize {
    (start..end).filter(|&i| !fits_in(i, width)).count()
}
