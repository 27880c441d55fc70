use super::{Rect, XYXY};
use crate::{common::*, Element, Transform};

/// Bounding box given by its center and full width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XYWH<T> {
    pub x: T,
    pub y: T,
    pub w: T,
    pub h: T,
}

impl<T> XYWH<T>
where
    T: Element,
{
    /// Moves the center through the transform. Sizes follow the magnitude of
    /// the scaling factors only, so mirroring leaves `w` and `h` unchanged.
    pub fn transform(&self, transform: &Transform<T>) -> Self {
        Self {
            x: self.x * transform.sx + transform.tx,
            y: self.y * transform.sy + transform.ty,
            w: self.w * transform.sx.abs(),
            h: self.h * transform.sy.abs(),
        }
    }
}

impl<T> Rect for XYWH<T>
where
    T: Copy + Num,
{
    type Type = T;

    fn xmin(&self) -> T {
        let two = T::one() + T::one();
        self.x - self.w / two
    }

    fn ymin(&self) -> T {
        let two = T::one() + T::one();
        self.y - self.h / two
    }

    fn xmax(&self) -> T {
        let two = T::one() + T::one();
        self.x + self.w / two
    }

    fn ymax(&self) -> T {
        let two = T::one() + T::one();
        self.y + self.h / two
    }

    fn cx(&self) -> T {
        self.x
    }

    fn cy(&self) -> T {
        self.y
    }

    fn w(&self) -> T {
        self.w
    }

    fn h(&self) -> T {
        self.h
    }
}

impl<T> From<XYXY<T>> for XYWH<T>
where
    T: Copy + Num,
{
    fn from(from: XYXY<T>) -> Self {
        Self::from(&from)
    }
}

impl<T> From<&XYXY<T>> for XYWH<T>
where
    T: Copy + Num,
{
    fn from(from: &XYXY<T>) -> Self {
        let two = T::one() + T::one();
        let XYXY {
            xmin,
            ymin,
            xmax,
            ymax,
        } = *from;
        Self {
            x: (xmax + xmin) / two,
            y: (ymax + ymin) / two,
            w: xmax - xmin,
            h: ymax - ymin,
        }
    }
}
