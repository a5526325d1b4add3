use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gifscrub", version)]
struct Cli {
    /// Emit debug-level logs on stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite frames and write them as PNGs.
    Frames(FramesArgs),
    /// Print timeline segments as JSON lines.
    Segments(SegmentsArgs),
    /// Print canvas size, frame count and total duration.
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input GIF.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory; frames are written as `frame_0000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Only write this frame (0-based).
    #[arg(long)]
    index: Option<usize>,
}

#[derive(Parser, Debug)]
struct SegmentsArgs {
    /// Input GIF.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Timeline options JSON (`threshold`, `px_per_ms`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum segment width; overrides the config file.
    #[arg(long)]
    threshold: Option<f64>,

    /// Display pixels per millisecond; overrides the config file.
    #[arg(long)]
    px_per_ms: Option<f64>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input GIF.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Segments(args) => cmd_segments(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let frames = gifscrub::load_gif(&args.in_path)?;
    let comp = gifscrub::FrameCompositor::new(&frames)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let indices: Vec<usize> = match args.index {
        Some(i) => vec![i],
        None => (0..comp.len()).collect(),
    };
    for i in indices {
        let out = args.out_dir.join(format!("frame_{i:04}.png"));
        write_png(&out, comp.get(i)?)?;
        tracing::info!(path = %out.display(), "wrote frame");
    }
    Ok(())
}

fn cmd_segments(args: SegmentsArgs) -> anyhow::Result<()> {
    let mut opts = match &args.config {
        Some(path) => gifscrub::TimelineOpts::from_path(path)?,
        None => gifscrub::TimelineOpts::default(),
    };
    if let Some(t) = args.threshold {
        opts.threshold = t;
    }
    if let Some(s) = args.px_per_ms {
        opts.px_per_ms = s;
    }
    opts.validate()?;

    let frames = gifscrub::load_gif(&args.in_path)?;
    let units = gifscrub::display_units(frames.iter().map(|f| f.delay_ms), opts.px_per_ms);
    let squasher = gifscrub::SegmentSquasher::new(opts.threshold)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for segment in squasher.squash(units) {
        serde_json::to_writer(&mut out, &segment).context("write segment json")?;
        std::io::Write::write_all(&mut out, b"\n").context("write stdout")?;
    }
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let frames = gifscrub::load_gif(&args.in_path)?;
    let comp = gifscrub::FrameCompositor::new(&frames)?;
    let total_ms: u64 = comp.delays_ms().iter().map(|&d| u64::from(d)).sum();
    let canvas = comp.canvas();
    let info = serde_json::json!({
        "width": canvas.width,
        "height": canvas.height,
        "frames": comp.len(),
        "duration_ms": total_ms,
    });
    println!("{info}");
    Ok(())
}

fn write_png(path: &Path, buf: &gifscrub::PixelBuffer) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        buf.data(),
        buf.width(),
        buf.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
