//! The random grayscale conversion.

use super::should_apply;
use crate::{common::*, Ratio};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomGrayscaleInit {
    pub prob: Ratio,
}

impl RandomGrayscaleInit {
    pub fn build(self) -> RandomGrayscale {
        RandomGrayscale { prob: self.prob }
    }
}

impl Default for RandomGrayscaleInit {
    fn default() -> Self {
        Self {
            prob: Ratio::new_unchecked(0.2),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomGrayscale {
    prob: Ratio,
}

impl RandomGrayscale {
    pub fn forward<R>(&self, image: RgbImage, rng: &mut R) -> RgbImage
    where
        R: Rng + ?Sized,
    {
        if !should_apply(self.prob, rng) {
            return image;
        }
        trace!("apply grayscale");
        grayscale(&image)
    }
}

/// Converts to ITU-R 601 luma and replicates it over the three channels.
pub fn grayscale(image: &RgbImage) -> RgbImage {
    let mut output = image.clone();
    output.pixels_mut().for_each(|pixel| {
        let luma = luma_601(*pixel);
        *pixel = Rgb([luma, luma, luma]);
    });
    output
}

/// `L = (299 R + 587 G + 114 B) / 1000` in 16-bit fixed point, rounded.
fn luma_601(pixel: Rgb<u8>) -> u8 {
    let Rgb([r, g, b]) = pixel;
    let luma = r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000;
    (luma >> 16) as u8
}
