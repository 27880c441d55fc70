//! The random mirroring.

use super::should_apply;
use crate::{common::*, Ratio};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipDirection {
    /// Mirror left-right, `x' = width - x`.
    Horizontal,
    /// Mirror top-bottom, `y' = height - y`.
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomFlipInit {
    pub prob: Ratio,
    pub direction: FlipDirection,
}

impl RandomFlipInit {
    pub fn build(self) -> RandomFlip {
        let Self { prob, direction } = self;
        RandomFlip { prob, direction }
    }
}

#[derive(Debug, Clone)]
pub struct RandomFlip {
    prob: Ratio,
    direction: FlipDirection,
}

impl RandomFlip {
    pub fn forward<R>(
        &self,
        image: RgbImage,
        bboxes: Vec<XYWH<f64>>,
        rng: &mut R,
    ) -> (RgbImage, Vec<XYWH<f64>>)
    where
        R: Rng + ?Sized,
    {
        if !should_apply(self.prob, rng) {
            return (image, bboxes);
        }
        trace!("apply {:?} flip", self.direction);
        flip(image, &bboxes, self.direction)
    }
}

/// Mirrors the image and reflects box centers within the image frame.
pub fn flip(
    mut image: RgbImage,
    bboxes: &[XYWH<f64>],
    direction: FlipDirection,
) -> (RgbImage, Vec<XYWH<f64>>) {
    let (width, height) = image.dimensions();

    let transform = match direction {
        FlipDirection::Horizontal => {
            imageops::flip_horizontal_in_place(&mut image);
            Transform::hflip(width as f64)
        }
        FlipDirection::Vertical => {
            imageops::flip_vertical_in_place(&mut image);
            Transform::vflip(height as f64)
        }
    };
    let bboxes = bboxes.iter().map(|bbox| &transform * bbox).collect();

    (image, bboxes)
}
