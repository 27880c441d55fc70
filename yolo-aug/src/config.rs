//! Augmentation configuration format.

use crate::{common::*, Ratio};

/// Stage probabilities and parameters of the augmentation pipeline.
///
/// Fields absent from a configuration file take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    /// The probability to convert to grayscale.
    pub grayscale_prob: Ratio,
    /// The probability to jitter color saturation.
    pub enhance_prob: Ratio,
    /// The upper bound of the saturation factor.
    pub max_enhance_strength: R64,
    /// The probability to erase random patches.
    pub erasing_prob: Ratio,
    /// The exclusive upper bound of erased patch sides in pixels.
    pub erasing_max_width: u32,
    /// The exclusive upper bound of the number of erased patches.
    pub erasing_max_num: u32,
    /// The probability to shrink the image onto a gray canvas.
    pub resize_prob: Ratio,
    /// The maximum shrinking rate per axis.
    pub max_shrink: Ratio,
    /// The probability to apply horizontal flip.
    pub horizontal_flip_prob: Ratio,
    /// The probability to apply vertical flip.
    pub vertical_flip_prob: Ratio,
    /// The probability to apply Gaussian blur.
    pub blur_prob: Ratio,
    /// The upper bound of the blur sigma.
    pub max_blur_sigma: R64,
    /// The probability to sharpen.
    pub sharpness_prob: Ratio,
    /// The probability to posterize.
    pub poster_prob: Ratio,
}

impl AugmentConfig {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        let config = json5::from_str(&text)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;
        debug!("loaded augmentation config '{}'", path.display());
        Ok(config)
    }
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            grayscale_prob: Ratio::new_unchecked(0.2),
            enhance_prob: Ratio::new_unchecked(0.4),
            max_enhance_strength: r64(2.0),
            erasing_prob: Ratio::new_unchecked(0.5),
            erasing_max_width: 32,
            erasing_max_num: 4,
            resize_prob: Ratio::new_unchecked(0.5),
            max_shrink: Ratio::new_unchecked(0.3),
            horizontal_flip_prob: Ratio::new_unchecked(0.5),
            vertical_flip_prob: Ratio::new_unchecked(0.5),
            blur_prob: Ratio::new_unchecked(0.5),
            max_blur_sigma: r64(1.0),
            sharpness_prob: Ratio::new_unchecked(0.5),
            poster_prob: Ratio::new_unchecked(0.3),
        }
    }
}
