use std::{io::Write as _, path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wanderline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the animation headlessly and write the last frame as a PNG.
    Frame(FrameArgs),
    /// Run the animation headlessly and print one JSON snapshot per tick.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Surface width in pixels.
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 60)]
    ticks: u64,

    /// Seed for the loop generator (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Background config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Pointer position held for the whole run, as `X,Y`.
    #[arg(long, value_parser = parse_point)]
    pointer: Option<(f64, f64)>,

    /// TTF/OTF used for badge labels; labels are skipped without one.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Tick at which the pointer jumps onto the marker.
    #[arg(long)]
    engage_at: Option<u64>,

    /// Ticks the pointer stays on the marker before leaving.
    #[arg(long, default_value_t = 1)]
    hold: u64,
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok((x, y))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn load_config(scene: &SceneArgs) -> anyhow::Result<wanderline::BackgroundConfig> {
    let mut config = match &scene.config {
        Some(path) => wanderline::BackgroundConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => wanderline::BackgroundConfig::default(),
    };
    if scene.seed.is_some() {
        config.seed = scene.seed;
    }
    config.validate()?;
    Ok(config)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(&args.scene)?;
    let viewport = wanderline::Viewport::new(args.scene.width, args.scene.height)?;

    let font_bytes = match &args.font {
        Some(path) => Some(Arc::new(
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?,
        )),
        None => None,
    };
    let settings = wanderline::RenderSettings {
        clear_rgba: Some([18, 20, 28, 255]),
        font_bytes,
    };
    let mut backend = wanderline::create_backend(wanderline::BackendKind::Cpu, &settings)?;

    let pointer = wanderline::PointerCell::default();
    if let Some((x, y)) = args.pointer {
        pointer.set(wanderline::Point::new(x, y));
    }

    let mut frame_loop = wanderline::BackgroundLoop::mount(
        config,
        viewport,
        pointer,
        wanderline::ManualScheduler::new(),
    )?;

    let mut last = None;
    for _ in 0..args.scene.ticks.max(1) {
        if let Some(frame) = frame_loop.pump(Some(backend.as_mut())) {
            last = Some(frame);
        }
    }
    let frame = last.context("no frame was painted (degenerate loop?)")?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    let state = frame_loop.background().snapshot();
    eprintln!(
        "wrote {} (tick {}, {:?})",
        args.out.display(),
        state.tick,
        state.interaction
    );
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let config = load_config(&args.scene)?;
    let viewport = wanderline::Viewport::new(args.scene.width, args.scene.height)?;

    let mut background = wanderline::AnimatedBackground::new(config)?;
    background.resize(viewport)?;

    let engaged = |t: u64| match args.engage_at {
        Some(start) => t >= start && t < start.saturating_add(args.hold.max(1)),
        None => false,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for t in 0..args.scene.ticks {
        let pointer = if engaged(t) {
            background
                .marker()
                .map_or(wanderline::OFFSCREEN, |sample| sample.point)
        } else {
            wanderline::OFFSCREEN
        };
        background.tick(pointer);
        let line = serde_json::to_string(&background.snapshot()).context("encode snapshot")?;
        writeln!(out, "{line}").context("write snapshot")?;
    }
    Ok(())
}
