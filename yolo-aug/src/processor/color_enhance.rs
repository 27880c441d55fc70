//! The random color saturation jitter.

use super::{grayscale, should_apply};
use crate::{common::*, Ratio};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomEnhanceInit {
    pub prob: Ratio,
    /// The enhancement factor is drawn from `[0, max_strength)`.
    pub max_strength: R64,
}

impl RandomEnhanceInit {
    pub fn build(self) -> Result<RandomEnhance> {
        let Self { prob, max_strength } = self;
        ensure!(max_strength >= 0.0, "max_strength must be non-negative");

        Ok(RandomEnhance {
            prob,
            max_strength: max_strength.raw(),
        })
    }
}

impl Default for RandomEnhanceInit {
    fn default() -> Self {
        Self {
            prob: Ratio::new_unchecked(0.4),
            max_strength: r64(2.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomEnhance {
    prob: Ratio,
    max_strength: f64,
}

impl RandomEnhance {
    pub fn forward<R>(&self, image: RgbImage, rng: &mut R) -> RgbImage
    where
        R: Rng + ?Sized,
    {
        if !should_apply(self.prob, rng) {
            return image;
        }
        let strength = self.max_strength * rng.gen::<f64>();
        trace!("apply color enhancement with strength {}", strength);
        enhance_color(&image, strength)
    }
}

/// Interpolates each pixel between its gray level and its original color.
///
/// A factor of 0 gives a gray image, 1 gives the original, larger values
/// saturate colors further.
pub fn enhance_color(image: &RgbImage, factor: f64) -> RgbImage {
    let gray = grayscale(image);
    let mut output = image.clone();

    output
        .pixels_mut()
        .zip(gray.pixels())
        .for_each(|(pixel, base)| {
            pixel
                .0
                .iter_mut()
                .zip(base.0.iter())
                .for_each(|(value, &base)| {
                    let base = base as f64;
                    let blended = base + factor * (*value as f64 - base);
                    *value = blended.round().clamp(0.0, 255.0) as u8;
                });
        });

    output
}
