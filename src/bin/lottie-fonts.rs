use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use lottie_fonts::{Animation, AnimationUpdated, FontCatalog, FontSelector};

#[derive(Parser, Debug)]
#[command(name = "lottie-fonts", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the selectable fonts.
    Fonts(FontsArgs),
    /// Show the active font and every text layer's font reference.
    Inspect(InspectArgs),
    /// Replace the active font of an animation.
    Swap(SwapArgs),
}

#[derive(Parser, Debug)]
struct FontsArgs {
    /// Font catalog JSON (defaults to the built-in catalog).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Animation JSON whose active font should be marked.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Print the option list as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input animation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SwapArgs {
    /// Input animation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Identifier (`fName`) of the font to switch to.
    #[arg(long)]
    font: String,

    /// Output animation JSON (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Font catalog JSON (defaults to the built-in catalog).
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Fonts(args) => cmd_fonts(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Swap(args) => cmd_swap(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<FontCatalog> {
    match path {
        Some(path) => FontCatalog::from_path(path)
            .with_context(|| format!("load font catalog '{}'", path.display())),
        None => Ok(FontCatalog::builtin()),
    }
}

fn load_animation(path: &Path) -> anyhow::Result<Animation> {
    Animation::from_path(path).with_context(|| format!("load animation '{}'", path.display()))
}

fn cmd_fonts(args: FontsArgs) -> anyhow::Result<()> {
    let selector = FontSelector::new(load_catalog(args.catalog.as_deref())?);
    let animation = args.in_path.as_deref().map(load_animation).transpose()?;
    let options = selector.options(animation.as_ref());

    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &options).context("write font options")?;
        writeln!(out)?;
        return Ok(());
    }
    for option in options.iter().filter(|o| !o.is_placeholder()) {
        let marker = if option.selected { '*' } else { ' ' };
        let font = selector
            .catalog()
            .find(&option.id)
            .with_context(|| format!("font option '{}' missing from catalog (bug)", option.id))?;
        writeln!(
            out,
            "{marker} {:<32} {} / {}",
            option.id, font.family, font.style
        )?;
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let animation = load_animation(&args.in_path)?;

    let mut out = std::io::stdout().lock();
    match animation.active_font() {
        Some(font) => writeln!(
            out,
            "active font: {} ({} / {})",
            font.id, font.family, font.style
        )?,
        None => writeln!(out, "active font: none")?,
    }

    let refs = animation.font_references();
    writeln!(out, "text layers: {}", refs.len())?;
    for r in &refs {
        writeln!(
            out,
            "  {}[{}] {:<24} {}",
            r.scope,
            r.index,
            r.layer.as_deref().unwrap_or("<unnamed>"),
            r.font
        )?;
    }

    let malformed = animation.malformed_text_layers();
    if malformed > 0 {
        writeln!(out, "malformed text layers: {malformed}")?;
    }
    Ok(())
}

fn cmd_swap(args: SwapArgs) -> anyhow::Result<()> {
    let mut animation = load_animation(&args.in_path)?;
    let mut selector = FontSelector::new(load_catalog(args.catalog.as_deref())?);

    selector.subscribe(|event: &AnimationUpdated<'_>| {
        tracing::info!(
            from = %event.rewrite.previous.id,
            to = %event.rewrite.current.id,
            "animation updated"
        );
    });
    let Some(rewrite) = selector.select(&mut animation, Some(args.font.as_str())) else {
        if selector.catalog().find(&args.font).is_none() {
            anyhow::bail!("font '{}' is not in the catalog", args.font);
        }
        anyhow::bail!(
            "animation '{}' has no font table entries",
            args.in_path.display()
        );
    };

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            animation.write_path(out)?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            animation.to_writer_pretty(&mut stdout)?;
            writeln!(stdout)?;
        }
    }

    eprintln!(
        "{} -> {}: {} layer(s), {} asset layer(s) rewritten",
        rewrite.previous.id,
        rewrite.current.id,
        rewrite.layers.rewritten,
        rewrite.asset_layers.rewritten
    );
    if rewrite.malformed() > 0 {
        eprintln!("skipped {} malformed text layer(s)", rewrite.malformed());
    }
    Ok(())
}
