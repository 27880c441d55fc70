//! The random sharpening.

use super::should_apply;
use crate::{common::*, Ratio};

/// 3x3 sharpening kernel, normalized by its sum of 16.
const SHARPEN_KERNEL: [f32; 9] = [
    -2.0, -2.0, -2.0, // row 1
    -2.0, 32.0, -2.0, // row 2
    -2.0, -2.0, -2.0, // row 3
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomSharpnessInit {
    pub prob: Ratio,
}

impl RandomSharpnessInit {
    pub fn build(self) -> RandomSharpness {
        RandomSharpness { prob: self.prob }
    }
}

impl Default for RandomSharpnessInit {
    fn default() -> Self {
        Self {
            prob: Ratio::new_unchecked(0.5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomSharpness {
    prob: Ratio,
}

impl RandomSharpness {
    pub fn forward<R>(&self, image: RgbImage, rng: &mut R) -> RgbImage
    where
        R: Rng + ?Sized,
    {
        if !should_apply(self.prob, rng) {
            return image;
        }
        trace!("apply sharpening");
        sharpen(&image)
    }
}

/// Applies the sharpening kernel. Border pixels keep their input values and
/// images smaller than the kernel are returned unchanged.
pub fn sharpen(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    if width < 3 || height < 3 {
        return image.clone();
    }

    let mut output: RgbImage = imageops::filter3x3(image, &SHARPEN_KERNEL);

    // filter3x3 only writes interior pixels
    for x in 0..width {
        output.put_pixel(x, 0, *image.get_pixel(x, 0));
        output.put_pixel(x, height - 1, *image.get_pixel(x, height - 1));
    }
    for y in 0..height {
        output.put_pixel(0, y, *image.get_pixel(0, y));
        output.put_pixel(width - 1, y, *image.get_pixel(width - 1, y));
    }

    output
}
