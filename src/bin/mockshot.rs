use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "mockshot", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every catalog still and the sidebar demo GIF.
    All(AllArgs),
    /// Render one catalog still as a PNG.
    Scene(SceneArgs),
    /// Render a scene descriptor JSON file as a PNG.
    Render(RenderArgs),
    /// Print a catalog scene's descriptor as JSON.
    Dump(DumpArgs),
    /// Print which font file each catalog text style resolves to.
    Fonts(FontArgs),
}

#[derive(Args, Debug)]
struct FontArgs {
    /// Extra font directory (repeatable); scanned after system fonts and `./fonts`.
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct AllArgs {
    /// Output directory.
    #[arg(long, default_value = "docs/media")]
    out_dir: PathBuf,

    /// Render animation frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Catalog scene: hero, desktop, mobile, mobile-open or showcase.
    #[arg(long)]
    name: mockshot::catalog::CatalogScene,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene descriptor JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Catalog scene to print.
    #[arg(long)]
    name: mockshot::catalog::CatalogScene,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::All(args) => cmd_all(args),
        Command::Scene(args) => cmd_scene(args),
        Command::Render(args) => cmd_render(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn settings_with(fonts: FontArgs) -> anyhow::Result<mockshot::RenderSettings> {
    let mut settings = mockshot::RenderSettings::from_env()?;
    settings.font_dirs.extend(fonts.font_dirs);
    Ok(settings)
}

fn cmd_all(args: AllArgs) -> anyhow::Result<()> {
    let mut settings = settings_with(args.fonts)?;
    settings.parallel |= args.parallel;
    if args.threads.is_some() {
        settings.threads = args.threads;
    }

    let written = mockshot::render_catalog(&args.out_dir, &settings)
        .with_context(|| format!("render catalog into '{}'", args.out_dir.display()))?;
    for path in written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let desc = args.name.descriptor()?;
    render_to_png(&desc, &args.out, args.fonts)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let desc = mockshot::SceneDescriptor::from_path(&args.in_path)?;
    render_to_png(&desc, &args.out, args.fonts)
}

fn render_to_png(
    desc: &mockshot::SceneDescriptor,
    out: &Path,
    fonts: FontArgs,
) -> anyhow::Result<()> {
    let settings = settings_with(fonts)?;
    let mut composer = mockshot::SceneComposer::new(mockshot::FontProvider::new(&settings));
    let canvas = composer.build_scene(desc)?;
    mockshot::write_png(&canvas, out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let desc = args.name.descriptor()?;
    println!("{}", desc.to_json_pretty()?);
    Ok(())
}

fn cmd_fonts(args: FontArgs) -> anyhow::Result<()> {
    let settings = settings_with(args)?;
    let mut provider = mockshot::FontProvider::new(&settings);
    eprintln!("font diagnostics ({} faces):", provider.face_count());

    for weight in [mockshot::FontWeight::Regular, mockshot::FontWeight::Bold] {
        let handle = provider.load_font(mockshot::DEFAULT_FAMILY, weight, 16.0);
        eprintln!("  {} {:?}:", mockshot::DEFAULT_FAMILY, weight);
        match &handle.source {
            mockshot::FontSource::Face(face) => {
                eprintln!("    family:   {}", face.family);
                eprintln!("    index:    {}", face.index);
                eprintln!("    sha256:   {}", sha256_hex(&face.bytes));
            }
            mockshot::FontSource::Builtin => eprintln!("    family:   <built-in blocks>"),
        }
        eprintln!("    fallback: {}", handle.fallback);
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
