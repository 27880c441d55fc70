//! Rendering helpers for inspecting samples and predictions.

use crate::common::*;
use ab_glyph::{Font, FontVec};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size},
    rect::Rect as PixelRect,
};
use ndarray::{Array2, Array3};

pub const BOX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const LABEL_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// The pixel height of score labels.
pub const LABEL_SCALE: f32 = 12.0;

/// The blending weight of the heatmap over the base image.
pub const HEATMAP_ALPHA: f32 = 0.6;

/// Per-channel means subtracted in BGR order by the VGG16 preprocessing.
pub const VGG_BGR_MEAN: [f32; 3] = [103.939, 116.779, 123.68];

/// Font files probed for score labels, in order.
const FONT_PATHS: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loads the first readable system font among [FONT_PATHS].
pub fn load_font() -> Option<FontVec> {
    FONT_PATHS.iter().find_map(|path| {
        let data = std::fs::read(path).ok()?;
        FontVec::try_from_vec(data).ok()
    })
}

/// Draws hollow rectangles for each box on a copy of the image.
///
/// With `clip`, coordinates are clamped to `[1, width - 1]` and
/// `[1, height - 1]`. Otherwise the raw coordinates are drawn and the parts
/// falling outside of the canvas are dropped. The edges pass through the
/// rounded corner coordinates, both ends included.
///
/// When `scores` is given, each box gets its confidence in percent written
/// at its bottom-left corner. Labels are skipped when no system font is found.
pub fn draw_bboxes<R>(
    image: &RgbImage,
    bboxes: &[R],
    scores: Option<&[f64]>,
    clip: bool,
) -> Result<RgbImage>
where
    R: Rect<Type = f64>,
{
    let font = scores.and_then(|_| {
        let font = load_font();
        if font.is_none() {
            warn!("no usable font found, score labels are not drawn");
        }
        font
    });
    draw_bboxes_with_font(image, bboxes, scores, font.as_ref(), clip)
}

/// Same as [draw_bboxes] with the label font given by the caller.
pub fn draw_bboxes_with_font<R, F>(
    image: &RgbImage,
    bboxes: &[R],
    scores: Option<&[f64]>,
    font: Option<&F>,
    clip: bool,
) -> Result<RgbImage>
where
    R: Rect<Type = f64>,
    F: Font,
{
    if let Some(scores) = scores {
        ensure!(
            scores.len() == bboxes.len(),
            "expect {} scores, but get {}",
            bboxes.len(),
            scores.len()
        );
    }

    let mut canvas = image.clone();
    let (width, height) = canvas.dimensions();
    let max_x = (width as f64 - 1.0).max(1.0);
    let max_y = (height as f64 - 1.0).max(1.0);

    for (index, bbox) in bboxes.iter().enumerate() {
        let [xmin, ymin, xmax, ymax] = bbox.xyxy();
        let [xmin, ymin, xmax, ymax] = if clip {
            [
                xmin.clamp(1.0, max_x),
                ymin.clamp(1.0, max_y),
                xmax.clamp(1.0, max_x),
                ymax.clamp(1.0, max_y),
            ]
        } else {
            [xmin, ymin, xmax, ymax]
        };

        let left = xmin.round();
        let top = ymin.round();
        let right = xmax.round();
        let bottom = ymax.round();
        if !(right - left >= 1.0 && bottom - top >= 1.0) {
            continue;
        }

        let rect = PixelRect::at(left as i32, top as i32)
            .of_size((right - left) as u32 + 1, (bottom - top) as u32 + 1);
        draw_hollow_rect_mut(&mut canvas, rect, BOX_COLOR);

        if let (Some(scores), Some(font)) = (scores, font) {
            draw_score_label(&mut canvas, left as i32, bottom as i32, scores[index], font);
        }
    }

    Ok(canvas)
}

/// Writes `100 * score` with one decimal on a red patch above the bottom edge.
fn draw_score_label<F>(canvas: &mut RgbImage, left: i32, bottom: i32, score: f64, font: &F)
where
    F: Font,
{
    let text = format!("{:.1}", 100.0 * score);
    let (text_w, text_h) = text_size(LABEL_SCALE, font, &text);
    let x = left + 3;
    let y = bottom - 4 - text_h as i32;

    let background = PixelRect::at(x - 1, y - 1).of_size(text_w + 2, text_h + 2);
    draw_filled_rect_mut(canvas, background, BOX_COLOR);
    draw_text_mut(canvas, LABEL_COLOR, x, y, LABEL_SCALE, font, &text);
}

/// Blends a low resolution confidence map over the first channel of the image.
///
/// The map is upsampled by repeating each cell `height / map_height` times
/// vertically and `width / map_width` times horizontally. Pixels beyond the
/// upsampled extent show the base only.
pub fn overlay_heatmap(image: &RgbImage, heatmap: &Array2<f32>, alpha: f32) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    let (map_h, map_w) = heatmap.dim();
    ensure!(map_h > 0 && map_w > 0, "heatmap must not be empty");
    ensure!(
        map_h <= height as usize && map_w <= width as usize,
        "heatmap size {}x{} exceeds image size {}x{}",
        map_w,
        map_h,
        width,
        height
    );
    ensure!(
        (0.0..=1.0).contains(&alpha),
        "alpha must be within range [0.0, 1.0], but get {}",
        alpha
    );

    let y_repeat = height as usize / map_h;
    let x_repeat = width as usize / map_w;
    let upsampled = Array2::from_shape_fn((map_h * y_repeat, map_w * x_repeat), |(row, col)| {
        heatmap[[row / y_repeat, col / x_repeat]]
    });

    let output = RgbImage::from_fn(width, height, |x, y| {
        let base = image.get_pixel(x, y)[0] as f32;
        match upsampled.get((y as usize, x as usize)) {
            Some(&value) => {
                let color = heat_color(value);
                let blend = |channel: f32| {
                    ((1.0 - alpha) * base + alpha * channel)
                        .round()
                        .clamp(0.0, 255.0) as u8
                };
                Rgb([blend(color[0]), blend(color[1]), blend(color[2])])
            }
            None => {
                let base = base as u8;
                Rgb([base, base, base])
            }
        }
    });

    Ok(output)
}

/// Maps a confidence in `[0, 1]` onto a ramp from near white to dark red.
fn heat_color(value: f32) -> [f32; 3] {
    const LOW: [f32; 3] = [255.0, 245.0, 240.0];
    const HIGH: [f32; 3] = [103.0, 0.0, 13.0];

    let value = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };
    [
        LOW[0] + (HIGH[0] - LOW[0]) * value,
        LOW[1] + (HIGH[1] - LOW[1]) * value,
        LOW[2] + (HIGH[2] - LOW[2]) * value,
    ]
}

/// Reverses the VGG16 preprocessing on a channel-first BGR tensor.
///
/// The means are added back, channels are reordered to RGB, values are
/// clipped to `[0, 255]` and truncated to integers.
pub fn tensor_to_image(tensor: &Array3<f32>) -> Result<RgbImage> {
    let (channels, height, width) = tensor.dim();
    ensure!(
        channels == 3,
        "channel size must be 3, but get {}",
        channels
    );
    let width = u32::try_from(width)?;
    let height = u32::try_from(height)?;

    let image = RgbImage::from_fn(width, height, |x, y| {
        let (x, y) = (x as usize, y as usize);
        let channel =
            |index: usize| (tensor[[index, y, x]] + VGG_BGR_MEAN[index]).clamp(0.0, 255.0) as u8;
        Rgb([channel(2), channel(1), channel(0)])
    });

    Ok(image)
}
