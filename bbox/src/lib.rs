//! Bounding box types and coordinate conversions.

mod common;

pub use convert::*;
pub mod convert;

pub use transform::*;
mod transform;

pub use rect::*;
pub mod rect;

pub use xyxy::*;
pub mod xyxy;

pub use xywh::*;
pub mod xywh;

pub use element::*;
pub mod element;

pub mod prelude {
    pub use crate::rect::{Rect, RectNum};
}
