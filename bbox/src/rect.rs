use super::{XYWH, XYXY};
use crate::common::*;

/// The generic rectangle.
pub trait Rect {
    type Type;

    fn xmin(&self) -> Self::Type;
    fn ymin(&self) -> Self::Type;
    fn xmax(&self) -> Self::Type;
    fn ymax(&self) -> Self::Type;
    fn cx(&self) -> Self::Type;
    fn cy(&self) -> Self::Type;
    fn w(&self) -> Self::Type;
    fn h(&self) -> Self::Type;
}

pub trait RectNum: Rect
where
    Self::Type: Num + Copy,
{
    fn xyxy(&self) -> [Self::Type; 4] {
        [self.xmin(), self.ymin(), self.xmax(), self.ymax()]
    }

    fn to_xyxy(&self) -> XYXY<Self::Type> {
        XYXY {
            xmin: self.xmin(),
            ymin: self.ymin(),
            xmax: self.xmax(),
            ymax: self.ymax(),
        }
    }

    fn to_xywh(&self) -> XYWH<Self::Type> {
        XYWH {
            x: self.cx(),
            y: self.cy(),
            w: self.w(),
            h: self.h(),
        }
    }
}

impl<T> RectNum for T
where
    T: Rect,
    T::Type: Num + Copy,
{
}
