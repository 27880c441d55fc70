//! Data augmentation building blocks.

pub mod color_enhance;
pub mod gaussian_blur;
pub mod grayscale;
pub mod pipeline;
pub mod posterize;
pub mod random_erasing;
pub mod random_flip;
pub mod random_resize;
pub mod sharpness;

pub use color_enhance::*;
pub use gaussian_blur::*;
pub use grayscale::*;
pub use pipeline::*;
pub use posterize::*;
pub use random_erasing::*;
pub use random_flip::*;
pub use random_resize::*;
pub use sharpness::*;

use crate::{common::*, Ratio};

/// Draws `u` uniformly from `[0, 1)` and tells whether a stage gated by `prob` fires.
///
/// The stage is skipped when `prob < u`, so it fires with probability `prob`.
pub fn should_apply<R>(prob: Ratio, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    let draw: f64 = rng.gen();
    draw <= prob.to_f64()
}
