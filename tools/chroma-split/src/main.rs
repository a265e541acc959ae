// chroma-split: adjust an image in YCbCr or HSV and write its isolated channels

use anyhow::Context;
use chroma::{
    load_image, save_png, Adjustments, Channel, ColorModel, Pipeline, PipelineOptions,
};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Model {
    Ycbcr,
    Hsv,
}

impl From<Model> for ColorModel {
    fn from(model: Model) -> Self {
        match model {
            Model::Ycbcr => ColorModel::Ycbcr,
            Model::Hsv => ColorModel::Hsv,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "chroma-split")]
#[command(about = "Scale YCbCr/HSV channels of an image and render each channel on its own")]
struct Cli {
    /// Input image (any format the image crate decodes)
    input: PathBuf,

    /// Directory for the output PNGs
    #[arg(short, long, default_value = "chroma-out")]
    out_dir: PathBuf,

    /// Color model the adjustments are applied in
    #[arg(short, long, value_enum, default_value = "ycbcr")]
    model: Model,

    /// JSON file with default adjustments, e.g. {"ycbcr": {"y": 50}}
    #[arg(short, long)]
    adjustments: Option<PathBuf>,

    /// Luma factor in percent (0-100)
    #[arg(long)]
    y: Option<f64>,

    /// Blue-difference chroma factor in percent (0-100)
    #[arg(long)]
    cb: Option<f64>,

    /// Red-difference chroma factor in percent (0-100)
    #[arg(long)]
    cr: Option<f64>,

    /// Hue factor in percent (0-100)
    #[arg(long)]
    h: Option<f64>,

    /// Saturation factor in percent (0-100)
    #[arg(long)]
    s: Option<f64>,

    /// Value factor in percent (0-100)
    #[arg(long)]
    v: Option<f64>,

    /// Skip writing the six isolated channel images
    #[arg(long)]
    no_isolate: bool,

    /// Process on the calling thread only
    #[arg(long)]
    sequential: bool,
}

impl Cli {
    fn overrides(&self) -> [(Channel, Option<f64>); 6] {
        [
            (Channel::Y, self.y),
            (Channel::Cb, self.cb),
            (Channel::Cr, self.cr),
            (Channel::H, self.h),
            (Channel::S, self.s),
            (Channel::V, self.v),
        ]
    }
}

/// Parse an adjustments JSON document; missing channels default to 100%
fn parse_adjustments(text: &str) -> anyhow::Result<Adjustments> {
    Ok(serde_json::from_str(text)?)
}

/// Layer per-channel flag values over a base set of adjustments
fn apply_overrides(
    mut adjustments: Adjustments,
    overrides: &[(Channel, Option<f64>)],
) -> Adjustments {
    for &(channel, factor) in overrides {
        if let Some(factor) = factor {
            adjustments = adjustments.with_factor(channel, factor);
        }
    }
    adjustments
}

/// Adjustments from the optional JSON file, with command-line flags taking precedence
fn resolve_adjustments(cli: &Cli) -> anyhow::Result<Adjustments> {
    let base = match cli.adjustments.as_deref() {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading adjustments from {}", path.display()))?;
            parse_adjustments(&text)
                .with_context(|| format!("parsing adjustments in {}", path.display()))?
        }
        None => Adjustments::default(),
    };
    Ok(apply_overrides(base, &cli.overrides()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chroma_split=info,chroma_pipeline=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let adjustments = resolve_adjustments(&cli)?;

    let image = load_image(&cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    tracing::info!(
        width = image.width(),
        height = image.height(),
        input = %cli.input.display(),
        "loaded image"
    );

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let options = if cli.sequential {
        PipelineOptions::sequential()
    } else {
        PipelineOptions::default()
    };
    let pipeline = Pipeline::new(options);

    let model = ColorModel::from(cli.model);
    let adjusted = pipeline.process(&image, model, &adjustments)?;
    let adjusted_path = cli.out_dir.join(format!("adjusted-{}.png", model));
    save_png(&adjusted, &adjusted_path)
        .with_context(|| format!("writing {}", adjusted_path.display()))?;
    let factors = model.channels().map(|channel| (channel.name(), adjustments.factor(channel)));
    tracing::info!(path = %adjusted_path.display(), ?factors, "wrote adjusted image");

    if cli.no_isolate {
        return Ok(());
    }

    let channels = pipeline.isolate(&image)?;
    for (channel, buffer) in channels.iter() {
        let path = cli.out_dir.join(format!("channel-{}.png", channel));
        save_png(buffer, &path).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), %channel, "wrote isolated channel");
    }

    Ok(())
}
