use super::{Rect, XYWH};
use crate::{common::*, Element, Transform};

/// Bounding box given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XYXY<T> {
    pub xmin: T,
    pub ymin: T,
    pub xmax: T,
    pub ymax: T,
}

impl<T> XYXY<T>
where
    T: Element,
{
    /// Builds a box after checking that the corners are finite and ordered.
    pub fn try_new(xmin: T, ymin: T, xmax: T, ymax: T) -> Result<Self> {
        ensure!(
            [xmin, ymin, xmax, ymax].iter().all(|val| val.is_finite()),
            "box coordinates must be finite"
        );
        ensure!(
            xmax >= xmin && ymax >= ymin,
            "xmax >= xmin and ymax >= ymin must hold"
        );
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// Maps both corners and re-orders them, so a mirroring transform keeps
    /// `xmin <= xmax` and `ymin <= ymax`.
    pub fn transform(&self, transform: &Transform<T>) -> Self {
        let x1 = self.xmin * transform.sx + transform.tx;
        let x2 = self.xmax * transform.sx + transform.tx;
        let y1 = self.ymin * transform.sy + transform.ty;
        let y2 = self.ymax * transform.sy + transform.ty;

        Self {
            xmin: x1.min(x2),
            ymin: y1.min(y2),
            xmax: x1.max(x2),
            ymax: y1.max(y2),
        }
    }
}

impl<T> Rect for XYXY<T>
where
    T: Copy + Num,
{
    type Type = T;

    fn xmin(&self) -> T {
        self.xmin
    }

    fn ymin(&self) -> T {
        self.ymin
    }

    fn xmax(&self) -> T {
        self.xmax
    }

    fn ymax(&self) -> T {
        self.ymax
    }

    fn cx(&self) -> T {
        let two = T::one() + T::one();
        (self.xmin + self.xmax) / two
    }

    fn cy(&self) -> T {
        let two = T::one() + T::one();
        (self.ymin + self.ymax) / two
    }

    fn w(&self) -> T {
        self.xmax - self.xmin
    }

    fn h(&self) -> T {
        self.ymax - self.ymin
    }
}

impl<T> From<XYWH<T>> for XYXY<T>
where
    T: Copy + Num,
{
    fn from(from: XYWH<T>) -> Self {
        Self::from(&from)
    }
}

impl<T> From<&XYWH<T>> for XYXY<T>
where
    T: Copy + Num,
{
    fn from(from: &XYWH<T>) -> Self {
        let two = T::one() + T::one();
        let XYWH { x, y, w, h } = *from;
        Self {
            xmin: x - w / two,
            ymin: y - h / two,
            xmax: x + w / two,
            ymax: y + h / two,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xyxy_try_new_rejects_inverted_corners() {
        assert!(XYXY::try_new(10.0, 10.0, 30.0, 30.0).is_ok());
        assert!(XYXY::try_new(30.0, 10.0, 10.0, 30.0).is_err());
        assert!(XYXY::try_new(0.0, f64::NAN, 1.0, 1.0).is_err());
    }

    #[test]
    fn xyxy_mirror_keeps_corner_order() {
        let bbox = XYXY {
            xmin: 10.0,
            ymin: 10.0,
            xmax: 30.0,
            ymax: 30.0,
        };
        let flipped = bbox.transform(&Transform::hflip(100.0));
        assert_eq!(
            flipped,
            XYXY {
                xmin: 70.0,
                ymin: 10.0,
                xmax: 90.0,
                ymax: 30.0,
            }
        );
    }
}
