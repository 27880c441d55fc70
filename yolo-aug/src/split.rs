//! Deterministic train/test splitting.

use crate::{common::*, Ratio};

pub const DEFAULT_SPLIT_SEED: u64 = 42;

pub fn default_train_ratio() -> Ratio {
    Ratio::new_unchecked(0.8)
}

/// Assigns each item to the train side when its uniform draw is below
/// `train_ratio`, otherwise to the test side.
///
/// One draw is taken per item in order from a generator seeded with `seed`,
/// so the split only depends on the seed and the item count. Both sides keep
/// the input order.
pub fn train_test_split<T>(items: &[T], train_ratio: Ratio, seed: u64) -> (Vec<T>, Vec<T>)
where
    T: Clone,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let thresh = train_ratio.to_f64();
    let (train, test): (Vec<_>, Vec<_>) = items
        .iter()
        .cloned()
        .partition(|_| rng.gen::<f64>() < thresh);

    debug!(
        "split {} items into {} train and {} test items",
        items.len(),
        train.len(),
        test.len()
    );
    (train, test)
}
