use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Error, Result};

/// Builds the random source handed to the samplers. A fixed seed gives a
/// reproducible run; `None` seeds from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            log::debug!("seeding rng with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Materialises a mapping's values in its iteration order.
///
/// Works for anything that yields `(key, value)` pairs, so an
/// insertion-ordered map keeps its order and a `BTreeMap` yields key order.
pub fn values_of<K, V, I>(mapping: I) -> Vec<V>
where
    I: IntoIterator<Item = (K, V)>,
{
    mapping.into_iter().map(|(_, value)| value).collect()
}

/// Draws `count` elements without replacement. Every `count`-subset of
/// positions is equally likely and the result is in draw order.
///
/// Runs a partial Fisher-Yates shuffle over the indices, stopping after
/// `count` swaps.
pub fn sample_unique<T, R>(rng: &mut R, items: &[T], count: usize) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let available = items.len();
    if count > available {
        return Err(Error::SampleSize {
            requested: count,
            available,
        });
    }

    let mut indices: Vec<usize> = (0..available).collect();
    for i in 0..count {
        let j = rng.gen_range(i..available);
        indices.swap(i, j);
    }

    Ok(indices[..count].iter().map(|&i| items[i].clone()).collect())
}

/// Draws `count` elements with replacement: each draw picks uniformly from
/// the whole collection, so values may repeat.
pub fn repeated_choice<T, R>(rng: &mut R, items: &[T], count: usize) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if count == 0 {
        return Ok(Vec::new());
    }
    if items.is_empty() {
        return Err(Error::EmptyCollection { requested: count });
    }

    Ok((0..count)
        .map(|_| items[rng.gen_range(0..items.len())].clone())
        .collect())
}
