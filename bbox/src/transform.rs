use super::{XYWH, XYXY};
use crate::{common::*, Element};

/// Per-axis affine map `v' = v * s + t`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transform<T> {
    pub sx: T,
    pub sy: T,
    pub tx: T,
    pub ty: T,
}

impl<T> Transform<T>
where
    T: Element,
{
    pub fn identity() -> Self {
        Self::scale(T::one(), T::one())
    }

    pub fn scale(sx: T, sy: T) -> Self {
        Self {
            sx,
            sy,
            tx: T::zero(),
            ty: T::zero(),
        }
    }

    /// Mirrors left-right within an image of the given width, `x' = width - x`.
    pub fn hflip(width: T) -> Self {
        Self {
            sx: -T::one(),
            sy: T::one(),
            tx: width,
            ty: T::zero(),
        }
    }

    /// Mirrors top-bottom within an image of the given height, `y' = height - y`.
    pub fn vflip(height: T) -> Self {
        Self {
            sx: T::one(),
            sy: -T::one(),
            tx: T::zero(),
            ty: height,
        }
    }

    pub fn inverse(&self) -> Self {
        let sx = T::one() / self.sx;
        let sy = T::one() / self.sy;
        let tx = -self.tx / self.sx;
        let ty = -self.ty / self.sy;

        Self { sx, sy, tx, ty }
    }
}

impl<T> Mul<&XYXY<T>> for &Transform<T>
where
    T: Element,
{
    type Output = XYXY<T>;

    fn mul(self, rhs: &XYXY<T>) -> Self::Output {
        rhs.transform(self)
    }
}

impl<T> Mul<&XYWH<T>> for &Transform<T>
where
    T: Element,
{
    type Output = XYWH<T>;

    fn mul(self, rhs: &XYWH<T>) -> Self::Output {
        rhs.transform(self)
    }
}

impl<T> Mul<&Transform<T>> for &Transform<T>
where
    T: Element,
{
    type Output = Transform<T>;

    fn mul(self, rhs: &Transform<T>) -> Self::Output {
        Transform {
            sx: self.sx * rhs.sx,
            sy: self.sy * rhs.sy,
            tx: rhs.tx * self.sx + self.tx,
            ty: rhs.ty * self.sy + self.ty,
        }
    }
}
