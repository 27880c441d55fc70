use anyhow::Result;
use bbox::{xywhs_to_xyxys, xyxys_to_xywhs, XYWH, XYXY};
use image::{Rgb, RgbImage};
use rand::{rngs::StdRng, SeedableRng};
use std::path::{Path, PathBuf};
use yolo_aug::{
    processor::{shrink_and_pad, PAD_COLOR},
    AugmentConfig, AugmentPipeline,
};

lazy_static::lazy_static! {
    static ref CONFIG_DIR: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("cfg");
}

fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

fn sample_bboxes() -> Vec<XYWH<f64>> {
    vec![
        XYWH {
            x: 15.0,
            y: 20.0,
            w: 10.0,
            h: 12.0,
        },
        XYWH {
            x: 80.0,
            y: 35.5,
            w: 30.0,
            h: 9.0,
        },
        XYWH {
            x: 140.0,
            y: -10.0,
            w: 40.0,
            h: 40.0,
        },
    ]
}

#[test]
fn horizontal_flip_end_to_end() -> Result<()> {
    let config = AugmentConfig::open(CONFIG_DIR.join("hflip_only.json5"))?;
    let pipeline = AugmentPipeline::from_config(&config)?;
    let mut rng = StdRng::seed_from_u64(42);

    let image = gradient_image(100, 100);
    let bboxes = xyxys_to_xywhs(&[XYXY {
        xmin: 10.0,
        ymin: 10.0,
        xmax: 30.0,
        ymax: 30.0,
    }]);
    let (output, bboxes) = pipeline.forward(image.clone(), bboxes, &mut rng);

    assert_eq!(
        xywhs_to_xyxys(&bboxes),
        vec![XYXY {
            xmin: 70.0,
            ymin: 10.0,
            xmax: 90.0,
            ymax: 30.0,
        }]
    );
    assert_eq!(output.get_pixel(99, 7), image.get_pixel(0, 7));
    Ok(())
}

#[test]
fn pipeline_preserves_box_count_and_order() -> Result<()> {
    let pipeline = AugmentPipeline::from_config(&AugmentConfig::default())?;
    let mut rng = StdRng::seed_from_u64(7);

    (0..50).try_for_each(|_| -> Result<_> {
        let orig = sample_bboxes();
        let (output, bboxes) = pipeline.forward(gradient_image(160, 120), orig.clone(), &mut rng);

        assert_eq!(output.dimensions(), (160, 120));
        assert_eq!(bboxes.len(), orig.len());

        // only resizing touches box sizes, and it never enlarges them
        bboxes.iter().zip(&orig).for_each(|(new, orig)| {
            assert!(new.w > 0.0 && new.h > 0.0);
            assert!(new.w <= orig.w && new.h <= orig.h);
        });
        Ok(())
    })?;

    let (_, bboxes) = pipeline.forward(gradient_image(32, 32), vec![], &mut rng);
    assert!(bboxes.is_empty());
    Ok(())
}

#[test]
fn erasing_keeps_boxes() -> Result<()> {
    let config = AugmentConfig::open(CONFIG_DIR.join("erasing_only.json5"))?;
    let pipeline = AugmentPipeline::from_config(&config)?;
    let mut rng = StdRng::seed_from_u64(3);

    let image = RgbImage::from_pixel(128, 96, Rgb([255, 255, 255]));
    let (output, bboxes) = pipeline.forward(image, sample_bboxes(), &mut rng);

    assert_eq!(bboxes, sample_bboxes());
    assert!(output.pixels().any(|&pixel| pixel == Rgb([0, 0, 0])));
    Ok(())
}

#[test]
fn resize_scales_boxes_and_pads() {
    let image = RgbImage::from_pixel(120, 90, Rgb([10, 200, 10]));
    let (output, bboxes) = shrink_and_pad(&image, &sample_bboxes(), 0.75, 0.8);

    assert_eq!(output.dimensions(), (120, 90));
    assert_eq!(*output.get_pixel(119, 10), PAD_COLOR);
    assert_eq!(*output.get_pixel(10, 89), PAD_COLOR);
    assert_eq!(*output.get_pixel(0, 0), Rgb([10, 200, 10]));

    bboxes.iter().zip(sample_bboxes()).for_each(|(new, orig)| {
        assert_eq!(new.x, orig.x * 0.75);
        assert_eq!(new.y, orig.y * 0.8);
        assert_eq!(new.w, orig.w * 0.75);
        assert_eq!(new.h, orig.h * 0.8);
    });
}
