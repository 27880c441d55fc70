//! Conversions between box representations.

use super::{RectNum, XYWH, XYXY};
use crate::Element;

/// The ratio between the 416-pixel detector input and the 224-pixel display size.
pub const DEFAULT_RESIZE_RATIO: f64 = 416.0 / 224.0;

pub fn xyxy_to_xywh<T>(bbox: &XYXY<T>) -> XYWH<T>
where
    T: Element,
{
    bbox.to_xywh()
}

pub fn xywh_to_xyxy<T>(bbox: &XYWH<T>) -> XYXY<T>
where
    T: Element,
{
    bbox.to_xyxy()
}

pub fn xyxys_to_xywhs<T>(bboxes: &[XYXY<T>]) -> Vec<XYWH<T>>
where
    T: Element,
{
    bboxes.iter().map(xyxy_to_xywh).collect()
}

pub fn xywhs_to_xyxys<T>(bboxes: &[XYWH<T>]) -> Vec<XYXY<T>>
where
    T: Element,
{
    bboxes.iter().map(xywh_to_xyxy).collect()
}

/// Divides every corner coordinate by `ratio`.
pub fn resize_box<T>(bbox: &XYXY<T>, ratio: T) -> XYXY<T>
where
    T: Element,
{
    XYXY {
        xmin: bbox.xmin / ratio,
        ymin: bbox.ymin / ratio,
        xmax: bbox.xmax / ratio,
        ymax: bbox.ymax / ratio,
    }
}

pub fn resize_boxes<T>(bboxes: &[XYXY<T>], ratio: T) -> Vec<XYXY<T>>
where
    T: Element,
{
    bboxes.iter().map(|bbox| resize_box(bbox, ratio)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::prelude::*;

    #[test]
    fn xyxy_to_xywh_center_and_size() {
        let xywh = xyxy_to_xywh(&XYXY {
            xmin: 10.0,
            ymin: 20.0,
            xmax: 30.0,
            ymax: 60.0,
        });
        assert_eq!(
            xywh,
            XYWH {
                x: 20.0,
                y: 40.0,
                w: 20.0,
                h: 40.0,
            }
        );
    }

    #[test]
    fn xywh_to_xyxy_corners() {
        let xyxy = xywh_to_xyxy(&XYWH {
            x: 20.0,
            y: 40.0,
            w: 20.0,
            h: 40.0,
        });
        assert_eq!(
            xyxy,
            XYXY {
                xmin: 10.0,
                ymin: 20.0,
                xmax: 30.0,
                ymax: 60.0,
            }
        );
    }

    #[test]
    fn xyxy_xywh_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);

        (0..1000).for_each(|_| {
            let xmin: f64 = rng.gen_range(-500.0..500.0);
            let ymin: f64 = rng.gen_range(-500.0..500.0);
            let xmax = xmin + rng.gen_range(1e-3..500.0);
            let ymax = ymin + rng.gen_range(1e-3..500.0);
            let orig = XYXY {
                xmin,
                ymin,
                xmax,
                ymax,
            };

            let back = xywh_to_xyxy(&xyxy_to_xywh(&orig));
            assert_abs_diff_eq!(back.xmin, orig.xmin, epsilon = 1e-6);
            assert_abs_diff_eq!(back.ymin, orig.ymin, epsilon = 1e-6);
            assert_abs_diff_eq!(back.xmax, orig.xmax, epsilon = 1e-6);
            assert_abs_diff_eq!(back.ymax, orig.ymax, epsilon = 1e-6);
        });
    }

    #[test]
    fn list_conversions_preserve_order() {
        let xyxys = vec![
            XYXY {
                xmin: 0.0,
                ymin: 0.0,
                xmax: 2.0,
                ymax: 2.0,
            },
            XYXY {
                xmin: 5.0,
                ymin: 5.0,
                xmax: 9.0,
                ymax: 7.0,
            },
        ];
        let xywhs = xyxys_to_xywhs(&xyxys);
        assert_eq!(xywhs.len(), 2);
        assert_abs_diff_eq!(xywhs[0].x, 1.0);
        assert_abs_diff_eq!(xywhs[1].x, 7.0);
        assert_eq!(xywhs_to_xyxys(&xywhs), xyxys);
        assert!(xyxys_to_xywhs::<f64>(&[]).is_empty());
    }

    #[test]
    fn resize_box_divides_by_ratio() {
        let bbox = XYXY {
            xmin: 41.6,
            ymin: 83.2,
            xmax: 208.0,
            ymax: 416.0,
        };
        let resized = resize_box(&bbox, DEFAULT_RESIZE_RATIO);
        assert_abs_diff_eq!(resized.xmin, 22.4, epsilon = 1e-9);
        assert_abs_diff_eq!(resized.ymin, 44.8, epsilon = 1e-9);
        assert_abs_diff_eq!(resized.xmax, 112.0, epsilon = 1e-9);
        assert_abs_diff_eq!(resized.ymax, 224.0, epsilon = 1e-9);

        let resized = resize_boxes(&[bbox, bbox], 2.0);
        assert_eq!(resized.len(), 2);
        assert_abs_diff_eq!(resized[1].xmax, 104.0);
    }
}
