// Shuffling and train/test partitioning of loaded samples.

use crate::dataset::VecDataset;
use crate::error::DataError;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffles `items` in place.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Number of leading items that go to the training part:
/// `floor(fraction * n) + 1`, capped at `n`.
///
/// # Errors
///
/// Returns `DataError::InvalidSplit` unless `0 < fraction < 1`.
pub fn train_size(n: usize, fraction: f64) -> Result<usize, DataError> {
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(DataError::InvalidSplit(fraction));
    }
    let k = (fraction * n as f64).floor() as usize + 1;
    Ok(k.min(n))
}

/// Splits `items` in order into a training part of [`train_size`] items and
/// a test part holding the rest.
pub fn train_test_split<T: Clone>(
    mut items: Vec<T>,
    fraction: f64,
) -> Result<(VecDataset<T>, VecDataset<T>), DataError> {
    let k = train_size(items.len(), fraction)?;
    let test = items.split_off(k);
    debug!("Split {} items into {} train / {} test", k + test.len(), k, test.len());
    Ok((VecDataset::new(items), VecDataset::new(test)))
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
