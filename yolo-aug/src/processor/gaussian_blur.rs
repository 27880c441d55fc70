//! The random Gaussian blur.

use super::should_apply;
use crate::{common::*, Ratio};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomGaussianBlurInit {
    pub prob: Ratio,
    /// The blur sigma is drawn from `[0, max_sigma)`.
    pub max_sigma: R64,
}

impl RandomGaussianBlurInit {
    pub fn build(self) -> Result<RandomGaussianBlur> {
        let Self { prob, max_sigma } = self;
        ensure!(max_sigma >= 0.0, "max_sigma must be non-negative");

        Ok(RandomGaussianBlur {
            prob,
            max_sigma: max_sigma.raw(),
        })
    }
}

impl Default for RandomGaussianBlurInit {
    fn default() -> Self {
        Self {
            prob: Ratio::new_unchecked(0.5),
            max_sigma: r64(1.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomGaussianBlur {
    prob: Ratio,
    max_sigma: f64,
}

impl RandomGaussianBlur {
    pub fn forward<R>(&self, image: RgbImage, rng: &mut R) -> RgbImage
    where
        R: Rng + ?Sized,
    {
        if !should_apply(self.prob, rng) {
            return image;
        }
        let sigma = self.max_sigma * rng.gen::<f64>();
        trace!("apply Gaussian blur with sigma {}", sigma);
        gaussian_blur(image, sigma as f32)
    }
}

/// Blurs with the given sigma. A non-positive sigma leaves the image as is.
pub fn gaussian_blur(image: RgbImage, sigma: f32) -> RgbImage {
    if sigma <= 0.0 || image.width() == 0 || image.height() == 0 {
        return image;
    }
    imageops::blur(&image, sigma)
}
