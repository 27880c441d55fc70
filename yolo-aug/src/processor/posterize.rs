//! The random posterization.

use super::should_apply;
use crate::{common::*, Ratio};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomPosterInit {
    pub prob: Ratio,
    /// The kept bit depth is drawn from `[min_bits, max_bits)`.
    pub min_bits: u8,
    pub max_bits: u8,
}

impl RandomPosterInit {
    pub fn build(self) -> Result<RandomPoster> {
        let Self {
            prob,
            min_bits,
            max_bits,
        } = self;
        ensure!(min_bits >= 1, "min_bits must be at least 1");
        ensure!(max_bits <= 9, "max_bits must not exceed 9");
        ensure!(min_bits < max_bits, "min_bits must be less than max_bits");

        Ok(RandomPoster {
            prob,
            min_bits,
            max_bits,
        })
    }
}

impl Default for RandomPosterInit {
    fn default() -> Self {
        Self {
            prob: Ratio::new_unchecked(0.3),
            min_bits: 3,
            max_bits: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomPoster {
    prob: Ratio,
    min_bits: u8,
    max_bits: u8,
}

impl RandomPoster {
    pub fn forward<R>(&self, image: RgbImage, rng: &mut R) -> RgbImage
    where
        R: Rng + ?Sized,
    {
        if !should_apply(self.prob, rng) {
            return image;
        }
        let bits = rng.gen_range(self.min_bits..self.max_bits);
        trace!("apply posterization with {} bits", bits);
        posterize(image, bits)
    }
}

/// Keeps the `bits` most significant bits of every channel value.
pub fn posterize(mut image: RgbImage, bits: u8) -> RgbImage {
    let mask = !u8::MAX.checked_shr(bits as u32).unwrap_or(0);
    image.iter_mut().for_each(|value| *value &= mask);
    image
}
