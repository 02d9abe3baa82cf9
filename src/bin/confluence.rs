use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "confluence", version)]
struct Cli {
    /// Log verbosity written to stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the scene at one scroll position as SVG or PNG.
    Frame(FrameArgs),
    /// Print the generated path data as JSON.
    Paths(PathsArgs),
    /// Print the timeline values over the whole scroll range.
    Timeline(TimelineArgs),
    /// Print the default scene configuration as JSON.
    Defaults,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Scene config JSON (defaults are used for missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content feed JSON; its anchor event seeds the fallback breakpoint.
    #[arg(long)]
    feed: Option<PathBuf>,

    /// Anchor offset from the container top, in pixels.
    #[arg(long, requires = "scrollable")]
    anchor_offset: Option<f64>,

    /// Container scrollable height, in pixels.
    #[arg(long, requires = "anchor_offset")]
    scrollable: Option<f64>,

    /// Viewport width used to pick the geometry class.
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f64,

    /// Raster scale (PNG output only).
    #[arg(long, default_value_t = 0.25)]
    scale: f32,

    /// Output path; `.png` rasterizes, anything else writes SVG.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PathsArgs {
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ClassChoice::Regular)]
    class: ClassChoice,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of progress intervals to print.
    #[arg(long, default_value_t = 20)]
    steps: u32,

    /// Breakpoint to evaluate against (defaults to the config fallback).
    #[arg(long)]
    breakpoint: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClassChoice {
    Compact,
    Regular,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Paths(args) => cmd_paths(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Defaults => {
            println!("{}", confluence::SceneConfig::default().to_json_pretty()?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<confluence::SceneConfig> {
    match path {
        Some(p) => confluence::SceneConfig::from_path(p)
            .with_context(|| format!("load scene config '{}'", p.display())),
        None => Ok(confluence::SceneConfig::default()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let viewport = confluence::Viewport::new(args.viewport_width, 800.0)?;

    let mut engine = match &args.feed {
        Some(p) => {
            let feed = confluence::ContentFeed::from_path(p)?;
            confluence::TimelineEngine::with_feed(config, &feed, viewport)?
        }
        None => confluence::TimelineEngine::new(config, viewport)?,
    };

    if let (Some(offset), Some(scrollable)) = (args.anchor_offset, args.scrollable) {
        let probe = confluence::StaticProbe(Some(confluence::AnchorGeometry {
            container_top: 0.0,
            scrollable_height: scrollable,
            anchor_top: offset,
        }));
        engine.on_layout(confluence::LayoutTrigger::Mount, &probe);
    }

    let frame = engine.on_progress(args.progress);
    let svg = confluence::preview::svg::render_svg(engine.config(), &frame)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let is_png = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if is_png {
        confluence::preview::raster::rasterize_svg(&svg, args.scale)?.save_png(&args.out)?;
    } else {
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    }

    eprintln!(
        "wrote {} (breakpoint {:.3})",
        args.out.display(),
        frame.breakpoint
    );
    Ok(())
}

fn cmd_paths(args: PathsArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let class = match args.class {
        ClassChoice::Compact => confluence::ViewportClass::Compact,
        ClassChoice::Regular => confluence::ViewportClass::Regular,
    };
    let geometry = confluence::SceneGeometry::build(&config, class)?;

    let out = serde_json::json!({
        "class": geometry.class,
        "primary": geometry.primary.svg_path_data(),
        "secondary": geometry.secondary.svg_path_data(),
        "merge": geometry.merge.as_ref().map(|m| m.descriptor.svg_path_data()),
        "join": geometry.merge.as_ref().map(|m| m.join),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let controller = confluence::TimelineController::new(config.timeline.clone())?;
    let breakpoint = args.breakpoint.unwrap_or(config.fallback_breakpoint);
    let steps = args.steps.max(1);

    println!("progress\tbase\tmerge\tmeet\tmerge_opacity\tcontent");
    for i in 0..=steps {
        let p = f64::from(i) / f64::from(steps);
        let v = controller.evaluate(p, breakpoint);
        println!(
            "{p:.3}\t{:.3}\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
            v.base_draw, v.merge_draw, v.meet_opacity, v.merge_opacity, v.content_opacity
        );
    }
    Ok(())
}
