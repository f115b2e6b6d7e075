use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use sha2::Digest as _;

use rasterblit::{BlitRequest, BlitThreading, FilterMode, Region};

#[derive(Parser, Debug)]
#[command(name = "rasterblit", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resample a region of an image into a new PNG.
    Blit(BlitArgs),
    /// Print the extent an image would be uniformly scaled to.
    Fit(FitArgs),
}

#[derive(Parser, Debug)]
struct BlitArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// JSON blit request. Replaces the region, size and filter flags.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Source region as `x,y,w,h` (defaults to the whole image).
    #[arg(long, value_parser = parse_region)]
    src_rect: Option<Region>,

    /// Destination width; the height follows the source aspect unless also given.
    #[arg(long)]
    width: Option<u32>,

    /// Destination height; the width follows the source aspect unless also given.
    #[arg(long)]
    height: Option<u32>,

    /// With both --width and --height, match the source's longer axis instead of the shorter.
    #[arg(long)]
    fill: bool,

    /// Resampling filter.
    #[arg(long, value_enum, default_value_t = FilterChoice::Nearest)]
    filter: FilterChoice,

    /// Resample rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Rows per parallel batch (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_rows: usize,

    /// Print the SHA-256 of the output pixels.
    #[arg(long)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Target width.
    #[arg(long)]
    width: Option<u32>,

    /// Target height.
    #[arg(long)]
    height: Option<u32>,

    /// With both targets, match the source's longer axis instead of the shorter.
    #[arg(long)]
    fill: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Nearest,
    Bilinear,
    Bicubic,
}

impl From<FilterChoice> for FilterMode {
    fn from(choice: FilterChoice) -> Self {
        match choice {
            FilterChoice::Nearest => FilterMode::Nearest,
            FilterChoice::Bilinear => FilterMode::Bilinear,
            FilterChoice::Bicubic => FilterMode::Bicubic,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Blit(args) => cmd_blit(args),
        Command::Fit(args) => cmd_fit(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_region(s: &str) -> Result<Region, String> {
    s.parse::<Region>().map_err(|e| e.to_string())
}

fn cmd_blit(args: BlitArgs) -> anyhow::Result<()> {
    let src = image::open(&args.in_path)
        .with_context(|| format!("open image '{}'", args.in_path.display()))?
        .to_rgba8();

    let req = match &args.request {
        Some(path) => read_request_json(path)?,
        None => request_from_flags(&args, src.width(), src.height())?,
    };
    req.validate()?;

    let canvas_w = canvas_extent(req.dst.x, req.dst.width)?;
    let canvas_h = canvas_extent(req.dst.y, req.dst.height)?;
    let mut dst = image::RgbaImage::new(canvas_w, canvas_h);

    let threading = BlitThreading {
        parallel: args.parallel,
        chunk_rows: args.chunk_rows,
        threads: args.threads,
    };
    let stats = rasterblit::blit_with_threading(&mut dst, &src, &req, &threading)?;
    tracing::info!(?stats, "blit done");

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    dst.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    if args.digest {
        println!("{}", sha256_hex(dst.as_raw()));
    }
    eprintln!(
        "wrote {} ({}x{}, {} of {} pixels written)",
        args.out.display(),
        canvas_w,
        canvas_h,
        stats.pixels_written,
        stats.pixels_total
    );
    Ok(())
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let (w, h) = image::image_dimensions(&args.in_path)
        .with_context(|| format!("read image dimensions '{}'", args.in_path.display()))?;
    let (fw, fh) = rasterblit::fit_extent(w, h, args.width, args.height, args.fill);
    println!("{fw}x{fh}");
    Ok(())
}

fn read_request_json(path: &Path) -> anyhow::Result<BlitRequest> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read blit request '{}'", path.display()))?;
    BlitRequest::from_json(&json)
        .with_context(|| format!("parse blit request '{}'", path.display()))
}

fn request_from_flags(args: &BlitArgs, img_w: u32, img_h: u32) -> anyhow::Result<BlitRequest> {
    let src = match args.src_rect {
        Some(r) => r,
        None => Region::from_size(to_i32(img_w)?, to_i32(img_h)?),
    };
    src.validate("source")?;

    let (dw, dh) = rasterblit::fit_extent(
        src.width.unsigned_abs(),
        src.height.unsigned_abs(),
        args.width,
        args.height,
        args.fill,
    );
    let dst = Region::from_size(to_i32(dw)?, to_i32(dh)?);
    Ok(BlitRequest::new(dst, src, args.filter.into()))
}

fn canvas_extent(origin: i32, extent: i32) -> anyhow::Result<u32> {
    let end = i64::from(origin) + i64::from(extent);
    u32::try_from(end.max(0)).context("destination canvas too large")
}

fn to_i32(v: u32) -> anyhow::Result<i32> {
    i32::try_from(v).with_context(|| format!("extent {v} exceeds i32 range"))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
