use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelcraft::{
    AssetCategory, DEFAULT_REELS, DEFAULT_ROWS, Orientation, Project, ProjectDraft, ProjectStore,
};

#[derive(Parser, Debug)]
#[command(name = "reelcraft", version)]
struct Cli {
    /// Directory holding one subdirectory per project.
    #[arg(long, global = true, env = "REELCRAFT_ROOT", default_value = "data/projects")]
    root: PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a project and print its id.
    New(NewArgs),
    /// List projects, newest first.
    List,
    /// Print a project document and report missing asset files.
    Show(ShowArgs),
    /// Fit a local bitmap for a category and add it to a project.
    Import(ImportArgs),
    /// Render the preview screen as a PNG.
    Preview(PreviewArgs),
    /// Write the project directory as a zip archive.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct NewArgs {
    /// Project title.
    #[arg(long, default_value = "My Slot Game")]
    title: String,

    /// Free-text theme.
    #[arg(long, default_value = "")]
    theme: String,

    /// Style guide prepended to every prompt.
    #[arg(long, default_value = "")]
    style_lock: String,

    /// Reel count (3-7).
    #[arg(long, default_value_t = DEFAULT_REELS)]
    reels: u32,

    /// Row count (3-6).
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u32,

    /// `landscape` or `portrait`.
    #[arg(long, default_value_t = Orientation::Landscape)]
    orientation: Orientation,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Project id.
    id: String,
}

#[derive(Parser, Debug)]
struct ImportArgs {
    /// Project id.
    id: String,

    /// Target category, e.g. `Symbols` or `Frame`.
    #[arg(long)]
    category: AssetCategory,

    /// Bitmap to import.
    #[arg(long)]
    file: PathBuf,

    /// Stored file name (defaults to the input's file stem plus `.png`).
    #[arg(long)]
    name: Option<String>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Project id.
    id: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Project id.
    id: String,

    /// Output zip path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let store = ProjectStore::new(cli.root);
    match cli.cmd {
        Command::New(args) => cmd_new(&store, args),
        Command::List => cmd_list(&store),
        Command::Show(args) => cmd_show(&store, args),
        Command::Import(args) => cmd_import(&store, args),
        Command::Preview(args) => cmd_preview(&store, args),
        Command::Export(args) => cmd_export(&store, args),
    }
}

fn cmd_new(store: &ProjectStore, args: NewArgs) -> anyhow::Result<()> {
    let project = Project::new(ProjectDraft {
        title: args.title,
        theme: args.theme,
        style_lock: args.style_lock,
        reels: args.reels,
        rows: args.rows,
        orientation: args.orientation,
        preview_config: None,
    })?;
    store.create(&project)?;
    println!("{}", project.id);
    Ok(())
}

fn cmd_list(store: &ProjectStore) -> anyhow::Result<()> {
    for summary in store.list()? {
        let created = chrono::DateTime::from_timestamp(summary.created_at as i64, 0)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        println!("{}\t{}\t{}", summary.id, created, summary.title);
    }
    Ok(())
}

fn cmd_show(store: &ProjectStore, args: ShowArgs) -> anyhow::Result<()> {
    let project = store.load(&args.id)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&project).context("serialize project")?
    );
    for missing in store.check_assets(&project)? {
        eprintln!(
            "missing {} asset {}: {}",
            missing.category, missing.asset_id, missing.path
        );
    }
    Ok(())
}

fn cmd_import(store: &ProjectStore, args: ImportArgs) -> anyhow::Result<()> {
    let mut project = store.load(&args.id)?;
    let image = image::open(&args.file)
        .with_context(|| format!("decode image '{}'", args.file.display()))?;
    let name = match args.name {
        Some(name) => name,
        None => default_png_name(&args.file)?,
    };
    let asset = reelcraft::import_asset(store, &mut project, args.category, &name, &image)?;
    println!("{}\t{}", asset.id, asset.path);
    Ok(())
}

fn cmd_preview(store: &ProjectStore, args: PreviewArgs) -> anyhow::Result<()> {
    let project = store.load(&args.id)?;
    let render = reelcraft::render_project_preview(store, &project)?;
    for missing in &render.missing {
        eprintln!(
            "skipped missing {} asset {}",
            missing.category, missing.asset_id
        );
    }

    create_parent_dir(&args.out)?;
    render
        .image
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(store: &ProjectStore, args: ExportArgs) -> anyhow::Result<()> {
    let bytes = reelcraft::export_project_zip(store, &args.id)?;
    create_parent_dir(&args.out)?;
    std::fs::write(&args.out, bytes)
        .with_context(|| format!("write zip '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn default_png_name(path: &Path) -> anyhow::Result<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .with_context(|| format!("no usable file name in '{}'", path.display()))?;
    Ok(format!("{stem}.png"))
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
