//! The random erasing algorithm.

use super::should_apply;
use crate::{common::*, Ratio};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect as PixelRect};

const ERASE_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomErasingInit {
    pub prob: Ratio,
    /// The exclusive upper bound of patch sides in pixels.
    pub max_width: u32,
    /// The exclusive upper bound of the number of patches.
    pub max_num: u32,
}

impl RandomErasingInit {
    pub fn build(self) -> Result<RandomErasing> {
        let Self {
            prob,
            max_width,
            max_num,
        } = self;
        ensure!(max_width >= 4, "max_width must be at least 4");
        ensure!(max_num >= 2, "max_num must be at least 2");

        Ok(RandomErasing {
            prob,
            max_width,
            max_num,
        })
    }
}

impl Default for RandomErasingInit {
    fn default() -> Self {
        Self {
            prob: Ratio::new_unchecked(0.5),
            max_width: 36,
            max_num: 4,
        }
    }
}

/// Occludes random rectangular patches with black. Bounding boxes are left
/// as they are, even when an object is covered entirely.
#[derive(Debug, Clone)]
pub struct RandomErasing {
    prob: Ratio,
    max_width: u32,
    max_num: u32,
}

impl RandomErasing {
    pub fn forward<R>(&self, mut image: RgbImage, rng: &mut R) -> RgbImage
    where
        R: Rng + ?Sized,
    {
        if !should_apply(self.prob, rng) {
            return image;
        }

        let num = rng.gen_range(1..self.max_num);
        let (width, _height) = image.dimensions();

        if self.position_bound(width) <= 0 {
            debug!(
                "image width {} does not exceed erasing size {}, patches are placed at the origin",
                width, self.max_width
            );
        }

        trace!("apply random erasing with {} patches", num);
        for _ in 0..num {
            let [left, top, patch_w, patch_h] = self.sample_patch(width, rng);
            erase(&mut image, left, top, patch_w, patch_h);
        }

        image
    }

    /// The exclusive upper bound of patch positions on both axes.
    ///
    /// It derives from the image width alone, so on a wide and short image
    /// the top edge may land below the bottom of the image.
    pub fn position_bound(&self, width: u32) -> i64 {
        width as i64 - self.max_width as i64
    }

    /// Draws one patch as `[left, top, width, height]`.
    pub fn sample_patch<R>(&self, image_width: u32, rng: &mut R) -> [u32; 4]
    where
        R: Rng + ?Sized,
    {
        let bound = self.position_bound(image_width);
        let patch_w = rng.gen_range((self.max_width / 4)..self.max_width);
        let patch_h = rng.gen_range((self.max_width / 4)..self.max_width);
        let left = sample_position(bound, rng);
        let top = sample_position(bound, rng);
        [left, top, patch_w, patch_h]
    }
}

/// Fills the patch with black. Parts outside the image are dropped.
pub fn erase(image: &mut RgbImage, left: u32, top: u32, width: u32, height: u32) {
    if width == 0 || height == 0 {
        return;
    }
    let rect = PixelRect::at(left as i32, top as i32).of_size(width, height);
    draw_filled_rect_mut(image, rect, ERASE_COLOR);
}

fn sample_position<R>(bound: i64, rng: &mut R) -> u32
where
    R: Rng + ?Sized,
{
    if bound > 0 {
        rng.gen_range(0..bound) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erasing_only_blackens_pixels() {
        let image = RgbImage::from_pixel(64, 64, Rgb([200, 150, 100]));
        let erasing = RandomErasingInit {
            prob: Ratio::one(),
            max_width: 32,
            max_num: 4,
        }
        .build()
        .unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        let output = erasing.forward(image, &mut rng);

        assert_eq!(output.dimensions(), (64, 64));
        assert!(output.pixels().any(|&pixel| pixel == ERASE_COLOR));
        assert!(output
            .pixels()
            .all(|&pixel| pixel == ERASE_COLOR || pixel == Rgb([200, 150, 100])));
    }

    #[test]
    fn erasing_small_image_does_not_panic() {
        let erasing = RandomErasingInit {
            prob: Ratio::one(),
            max_width: 32,
            max_num: 4,
        }
        .build()
        .unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        [(1, 1), (8, 8), (20, 100), (100, 20)]
            .into_iter()
            .for_each(|(w, h)| {
                let image = RgbImage::from_pixel(w, h, Rgb([255, 255, 255]));
                let output = erasing.forward(image, &mut rng);
                assert_eq!(output.dimensions(), (w, h));
            });
    }

    #[test]
    fn erase_clips_to_image() {
        let mut image = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        erase(&mut image, 8, 8, 5, 5);

        assert_eq!(*image.get_pixel(9, 9), ERASE_COLOR);
        assert_eq!(*image.get_pixel(8, 8), ERASE_COLOR);
        assert_eq!(*image.get_pixel(7, 7), Rgb([255, 255, 255]));
    }

    #[test]
    fn erasing_top_bound_follows_width() {
        let erasing = RandomErasingInit {
            prob: Ratio::one(),
            max_width: 32,
            max_num: 4,
        }
        .build()
        .unwrap();
        assert_eq!(erasing.position_bound(200), 168);
        assert_eq!(erasing.position_bound(20), -12);

        // 200x40 image, a height-based bound would keep top below 8
        let mut rng = StdRng::seed_from_u64(17);
        let patches: Vec<_> = (0..500)
            .map(|_| erasing.sample_patch(200, &mut rng))
            .collect();

        assert!(patches.iter().all(|&[left, top, w, h]| {
            left < 168 && top < 168 && (8..32).contains(&w) && (8..32).contains(&h)
        }));
        assert!(patches.iter().any(|&[_, top, _, _]| top > 8));
        assert!(patches.iter().any(|&[_, top, _, _]| top >= 40));

        let mut rng = StdRng::seed_from_u64(17);
        assert!((0..50).all(|_| {
            let [left, top, _, _] = erasing.sample_patch(20, &mut rng);
            left == 0 && top == 0
        }));
    }

    #[test]
    fn erasing_rejects_small_max_width() {
        let init = RandomErasingInit {
            prob: Ratio::one(),
            max_width: 3,
            max_num: 4,
        };
        assert!(init.build().is_err());
    }
}
