//! The random shrink-and-pad resizing.

use super::should_apply;
use crate::{common::*, Ratio};
use image::imageops::FilterType;

/// The fill color of the area left uncovered after shrinking.
pub const PAD_COLOR: Rgb<u8> = Rgb([127, 127, 127]);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomResizeInit {
    pub prob: Ratio,
    /// Per-axis ratios are drawn from `(1 - max_shrink, 1]`.
    pub max_shrink: Ratio,
}

impl RandomResizeInit {
    pub fn build(self) -> Result<RandomResize> {
        let Self { prob, max_shrink } = self;
        ensure!(max_shrink.to_f64() < 1.0, "max_shrink must be less than 1.0");
        Ok(RandomResize { prob, max_shrink })
    }
}

impl Default for RandomResizeInit {
    fn default() -> Self {
        Self {
            prob: Ratio::new_unchecked(0.5),
            max_shrink: Ratio::new_unchecked(0.3),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomResize {
    prob: Ratio,
    max_shrink: Ratio,
}

impl RandomResize {
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

        let max_shrink = self.max_shrink.to_f64();
        let ratio_x = 1.0 - max_shrink * rng.gen::<f64>();
        let ratio_y = 1.0 - max_shrink * rng.gen::<f64>();
        trace!("apply resizing with ratios ({}, {})", ratio_x, ratio_y);

        shrink_and_pad(&image, &bboxes, ratio_x, ratio_y)
    }
}

/// Shrinks the image by per-axis ratios, places it at the top-left corner of a
/// gray canvas of the original size and rescales the boxes accordingly.
pub fn shrink_and_pad(
    image: &RgbImage,
    bboxes: &[XYWH<f64>],
    ratio_x: f64,
    ratio_y: f64,
) -> (RgbImage, Vec<XYWH<f64>>) {
    let (width, height) = image.dimensions();
    let mut canvas = RgbImage::from_pixel(width, height, PAD_COLOR);

    if width > 0 && height > 0 {
        let new_w = ((ratio_x * width as f64) as u32).max(1);
        let new_h = ((ratio_y * height as f64) as u32).max(1);
        let resized = imageops::resize(image, new_w, new_h, FilterType::CatmullRom);
        imageops::overlay(&mut canvas, &resized, 0, 0);
    }

    let transform = Transform::scale(ratio_x, ratio_y);
    let bboxes = bboxes.iter().map(|bbox| &transform * bbox).collect();

    (canvas, bboxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn shrink_and_pad_layout() {
        let image = RgbImage::from_pixel(100, 80, Rgb([255, 0, 0]));
        let bboxes = vec![XYWH {
            x: 50.0,
            y: 40.0,
            w: 20.0,
            h: 10.0,
        }];
        let (output, bboxes) = shrink_and_pad(&image, &bboxes, 0.5, 0.75);

        assert_eq!(output.dimensions(), (100, 80));

        let inside = output.get_pixel(10, 10);
        assert!(inside[0] > 250 && inside[1] < 5 && inside[2] < 5);
        assert_eq!(*output.get_pixel(60, 10), PAD_COLOR);
        assert_eq!(*output.get_pixel(10, 70), PAD_COLOR);
        assert_eq!(*output.get_pixel(99, 79), PAD_COLOR);

        assert_eq!(bboxes.len(), 1);
        assert_abs_diff_eq!(bboxes[0].x, 25.0);
        assert_abs_diff_eq!(bboxes[0].y, 30.0);
        assert_abs_diff_eq!(bboxes[0].w, 10.0);
        assert_abs_diff_eq!(bboxes[0].h, 7.5);
    }

    #[test]
    fn random_resize_ratio_range() {
        let resize = RandomResizeInit {
            prob: Ratio::one(),
            max_shrink: Ratio::try_from(0.3).unwrap(),
        }
        .build()
        .unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        (0..20).for_each(|_| {
            let image = RgbImage::from_pixel(50, 50, Rgb([0, 0, 0]));
            let bboxes = vec![XYWH {
                x: 10.0,
                y: 10.0,
                w: 10.0,
                h: 10.0,
            }];
            let (output, bboxes) = resize.forward(image, bboxes, &mut rng);
            assert_eq!(output.dimensions(), (50, 50));
            let XYWH { x, y, w, h } = bboxes[0];
            assert!((7.0..=10.0).contains(&x) && (7.0..=10.0).contains(&y));
            assert_abs_diff_eq!(x, w);
            assert_abs_diff_eq!(y, h);
        });
    }

    #[test]
    fn resize_rejects_full_shrink() {
        let init = RandomResizeInit {
            prob: Ratio::one(),
            max_shrink: Ratio::one(),
        };
        assert!(init.build().is_err());
    }
}
