//! Randomized data augmentation for detection model training.

mod common;
pub mod config;
pub mod processor;
pub mod ratio;
pub mod split;
pub mod visualize;

pub use config::AugmentConfig;
pub use processor::AugmentPipeline;
pub use ratio::Ratio;
