use anyhow::{Context, Result};
use bbox::{XYWH, XYXY};
use clap::Parser;
use rand::prelude::*;
use std::{
    env,
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};
use yolo_aug::{
    split::{train_test_split, DEFAULT_SPLIT_SEED},
    visualize::draw_bboxes,
    AugmentConfig, AugmentPipeline, Ratio,
};

#[derive(Debug, Clone, Parser)]
/// Augment detection samples and inspect their boxes
enum Opts {
    /// Run the augmentation pipeline on one image and its boxes
    Augment {
        /// input image
        image_file: PathBuf,
        /// input boxes, a JSON array of corner boxes
        boxes_file: PathBuf,
        /// output image
        output_image_file: PathBuf,
        /// output boxes
        output_boxes_file: PathBuf,
        #[clap(long)]
        /// JSON5 pipeline configuration, defaults are used when absent
        config: Option<PathBuf>,
        #[clap(long)]
        /// random seed, drawn from entropy when absent
        seed: Option<u64>,
    },
    /// Split the lines of a list file into train and test lists
    Split {
        /// input list, one item per line
        list_file: PathBuf,
        /// output train list
        train_file: PathBuf,
        /// output test list
        test_file: PathBuf,
        #[clap(long, default_value = "0.8")]
        /// probability of an item landing in the train list
        ratio: f64,
        #[clap(long, default_value_t = DEFAULT_SPLIT_SEED)]
        /// random seed
        seed: u64,
    },
    /// Draw boxes over an image
    Draw {
        /// input image
        image_file: PathBuf,
        /// input boxes, a JSON array of corner boxes
        boxes_file: PathBuf,
        /// output image
        output_file: PathBuf,
        #[clap(long)]
        /// JSON array of box confidences written as percent labels
        scores: Option<PathBuf>,
        #[clap(long)]
        /// draw raw coordinates without clamping them into the image
        no_clip: bool,
    },
    /// Write the default pipeline configuration
    DefaultConfig {
        /// output configuration file
        output_file: PathBuf,
    },
}

fn main() -> Result<()> {
    // setup tracing
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).compact();
    let filter_layer = {
        let filter = EnvFilter::from_default_env();
        if env::var("RUST_LOG").is_err() {
            filter.add_directive(LevelFilter::INFO.into())
        } else {
            filter
        }
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    match Opts::parse() {
        Opts::Augment {
            image_file,
            boxes_file,
            output_image_file,
            output_boxes_file,
            config,
            seed,
        } => {
            augment(
                image_file,
                boxes_file,
                output_image_file,
                output_boxes_file,
                config,
                seed,
            )?;
        }
        Opts::Split {
            list_file,
            train_file,
            test_file,
            ratio,
            seed,
        } => {
            split(list_file, train_file, test_file, ratio, seed)?;
        }
        Opts::Draw {
            image_file,
            boxes_file,
            output_file,
            scores,
            no_clip,
        } => {
            draw(image_file, boxes_file, output_file, scores, !no_clip)?;
        }
        Opts::DefaultConfig { output_file } => {
            default_config(output_file)?;
        }
    }

    Ok(())
}

fn augment(
    image_file: impl AsRef<Path>,
    boxes_file: impl AsRef<Path>,
    output_image_file: impl AsRef<Path>,
    output_boxes_file: impl AsRef<Path>,
    config_file: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let config = match &config_file {
        Some(path) => AugmentConfig::open(path)?,
        None => AugmentConfig::default(),
    };
    let pipeline = AugmentPipeline::from_config(&config)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let image = load_image(&image_file)?;
    let bboxes: Vec<XYWH<f64>> = load_bboxes(&boxes_file)?
        .iter()
        .map(bbox::xyxy_to_xywh)
        .collect();

    let (image, bboxes) = pipeline.forward(image, bboxes, &mut rng);
    let bboxes = bbox::xywhs_to_xyxys(&bboxes);

    let output_image_file = output_image_file.as_ref();
    image
        .save(output_image_file)
        .with_context(|| format!("unable to save '{}'", output_image_file.display()))?;
    save_json(&output_boxes_file, &bboxes)?;

    info!(
        "wrote {} boxes to '{}'",
        bboxes.len(),
        output_boxes_file.as_ref().display()
    );
    Ok(())
}

fn split(
    list_file: impl AsRef<Path>,
    train_file: impl AsRef<Path>,
    test_file: impl AsRef<Path>,
    ratio: f64,
    seed: u64,
) -> Result<()> {
    let ratio = Ratio::try_from(ratio)?;
    let list_file = list_file.as_ref();
    let text = fs::read_to_string(list_file)
        .with_context(|| format!("unable to read '{}'", list_file.display()))?;
    let items: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

    let (train, test) = train_test_split(&items, ratio, seed);
    save_lines(&train_file, &train)?;
    save_lines(&test_file, &test)?;

    info!("split {} items into {} train and {} test", items.len(), train.len(), test.len());
    Ok(())
}

fn draw(
    image_file: impl AsRef<Path>,
    boxes_file: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
    scores_file: Option<PathBuf>,
    clip: bool,
) -> Result<()> {
    let image = load_image(&image_file)?;
    let bboxes = load_bboxes(&boxes_file)?;
    let scores: Option<Vec<f64>> = match &scores_file {
        Some(path) => {
            let reader = BufReader::new(
                File::open(path)
                    .with_context(|| format!("unable to open '{}'", path.display()))?,
            );
            let scores = serde_json::from_reader(reader)
                .with_context(|| format!("unable to parse scores in '{}'", path.display()))?;
            Some(scores)
        }
        None => None,
    };
    let output = draw_bboxes(&image, &bboxes, scores.as_deref(), clip)?;

    let output_file = output_file.as_ref();
    output
        .save(output_file)
        .with_context(|| format!("unable to save '{}'", output_file.display()))?;
    Ok(())
}

fn default_config(output_file: impl AsRef<Path>) -> Result<()> {
    save_json(&output_file, &AugmentConfig::default())?;
    info!("wrote default config to '{}'", output_file.as_ref().display());
    Ok(())
}

fn load_image(path: impl AsRef<Path>) -> Result<image::RgbImage> {
    let path = path.as_ref();
    let image = image::open(path)
        .with_context(|| format!("unable to open image '{}'", path.display()))?
        .into_rgb8();
    Ok(image)
}

fn load_bboxes(path: impl AsRef<Path>) -> Result<Vec<XYXY<f64>>> {
    let path = path.as_ref();
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("unable to open '{}'", path.display()))?,
    );
    let bboxes: Vec<XYXY<f64>> = serde_json::from_reader(reader)
        .with_context(|| format!("unable to parse boxes in '{}'", path.display()))?;

    bboxes
        .into_iter()
        .enumerate()
        .map(|(index, bbox)| {
            let XYXY {
                xmin,
                ymin,
                xmax,
                ymax,
            } = bbox;
            XYXY::try_new(xmin, ymin, xmax, ymax)
                .with_context(|| format!("invalid box at index {}", index))
        })
        .collect()
}

fn save_json<T>(path: impl AsRef<Path>, value: &T) -> Result<()>
where
    T: serde::Serialize,
{
    let path = path.as_ref();
    let writer = BufWriter::new(
        File::create(path).with_context(|| format!("unable to create '{}'", path.display()))?,
    );
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

fn save_lines(path: impl AsRef<Path>, lines: &[&str]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(
        File::create(path).with_context(|| format!("unable to create '{}'", path.display()))?,
    );
    lines
        .iter()
        .try_for_each(|line| writeln!(writer, "{}", line))?;
    writer.flush()?;
    Ok(())
}
