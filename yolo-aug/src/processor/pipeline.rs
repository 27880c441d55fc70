//! The ordered augmentation chain.

use super::*;
use crate::{common::*, config::AugmentConfig};

/// Applies every stage in the canonical order on an image and its boxes.
///
/// The pipeline only holds stage parameters. All randomness comes from the
/// generator passed to [AugmentPipeline::forward], so one pipeline can be
/// shared across threads that each own a generator.
#[derive(Debug, Clone)]
pub struct AugmentPipeline {
    grayscale: RandomGrayscale,
    enhance: RandomEnhance,
    erasing: RandomErasing,
    resize: RandomResize,
    horizontal_flip: RandomFlip,
    vertical_flip: RandomFlip,
    blur: RandomGaussianBlur,
    sharpness: RandomSharpness,
    poster: RandomPoster,
}

impl AugmentPipeline {
    pub fn from_config(config: &AugmentConfig) -> Result<Self> {
        let AugmentConfig {
            grayscale_prob,
            enhance_prob,
            max_enhance_strength,
            erasing_prob,
            erasing_max_width,
            erasing_max_num,
            resize_prob,
            max_shrink,
            horizontal_flip_prob,
            vertical_flip_prob,
            blur_prob,
            max_blur_sigma,
            sharpness_prob,
            poster_prob,
        } = *config;

        let grayscale = RandomGrayscaleInit {
            prob: grayscale_prob,
        }
        .build();
        let enhance = RandomEnhanceInit {
            prob: enhance_prob,
            max_strength: max_enhance_strength,
        }
        .build()
        .context("invalid color enhancement parameters")?;
        let erasing = RandomErasingInit {
            prob: erasing_prob,
            max_width: erasing_max_width,
            max_num: erasing_max_num,
        }
        .build()
        .context("invalid random erasing parameters")?;
        let resize = RandomResizeInit {
            prob: resize_prob,
            max_shrink,
        }
        .build()
        .context("invalid random resizing parameters")?;
        let horizontal_flip = RandomFlipInit {
            prob: horizontal_flip_prob,
            direction: FlipDirection::Horizontal,
        }
        .build();
        let vertical_flip = RandomFlipInit {
            prob: vertical_flip_prob,
            direction: FlipDirection::Vertical,
        }
        .build();
        let blur = RandomGaussianBlurInit {
            prob: blur_prob,
            max_sigma: max_blur_sigma,
        }
        .build()
        .context("invalid Gaussian blur parameters")?;
        let sharpness = RandomSharpnessInit {
            prob: sharpness_prob,
        }
        .build();
        let poster = RandomPosterInit {
            prob: poster_prob,
            ..Default::default()
        }
        .build()?;

        debug!("augmentation pipeline built from {:?}", config);

        Ok(Self {
            grayscale,
            enhance,
            erasing,
            resize,
            horizontal_flip,
            vertical_flip,
            blur,
            sharpness,
            poster,
        })
    }

    pub fn forward<R>(
        &self,
        image: RgbImage,
        bboxes: Vec<XYWH<f64>>,
        rng: &mut R,
    ) -> (RgbImage, Vec<XYWH<f64>>)
    where
        R: Rng + ?Sized,
    {
        let image = self.grayscale.forward(image, rng);
        let image = self.enhance.forward(image, rng);
        let image = self.erasing.forward(image, rng);
        let (image, bboxes) = self.resize.forward(image, bboxes, rng);
        let (image, bboxes) = self.horizontal_flip.forward(image, bboxes, rng);
        let (image, bboxes) = self.vertical_flip.forward(image, bboxes, rng);
        let image = self.blur.forward(image, rng);
        let image = self.sharpness.forward(image, rng);
        let image = self.poster.forward(image, rng);
        (image, bboxes)
    }
}
