use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use humu_slides::outline::{self, SlideRecord};
use humu_slides::shell::Shell;
use humu_slides::{Config, EditingSession, GenerateRequest, OutlineSource, Studio, theme};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "humu-slides", version, about = "Turn a topic into a slide deck")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Remote outline endpoint (overrides the configuration file).
    #[arg(long, global = true, env = "HUMU_SLIDES_ENDPOINT")]
    endpoint: Option<String>,

    /// More diagnostics on stderr (repeat for more).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an outline for a topic and export it as a deck.
    Generate(GenerateArgs),
    /// Export a deck from an outline JSON file.
    Export(ExportArgs),
    /// Edit an outline interactively.
    Edit(EditArgs),
    /// List the available themes.
    Themes,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Presentation topic.
    topic: String,

    /// Number of slides (clamped to 3..=20).
    #[arg(long, allow_negative_numbers = true)]
    slides: Option<i64>,

    /// Theme key.
    #[arg(long)]
    theme: Option<String>,

    /// Output directory for the deck.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also write the outline as JSON to this path.
    #[arg(long)]
    outline: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Outline JSON file.
    input: PathBuf,

    /// Theme key.
    #[arg(long)]
    theme: Option<String>,

    /// Output directory for the deck.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct EditArgs {
    /// Outline JSON file to start from.
    input: Option<PathBuf>,

    /// Generate a starting outline for this topic.
    #[arg(long, conflicts_with = "input")]
    topic: Option<String>,

    /// Number of slides for --topic.
    #[arg(long, allow_negative_numbers = true, requires = "topic")]
    slides: Option<i64>,

    /// Theme key.
    #[arg(long)]
    theme: Option<String>,

    /// Output directory for `export`.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = Config::load_or_default(cli.config.as_deref())
        .context("load configuration")?
        .with_endpoint(cli.endpoint);

    match cli.cmd {
        Command::Generate(args) => cmd_generate(config, args).await,
        Command::Export(args) => cmd_export(config, args),
        Command::Edit(args) => cmd_edit(config, args).await,
        Command::Themes => cmd_themes(),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::WARN,
        (false, 1) => Level::INFO,
        (false, 2) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn with_overrides(mut config: Config, theme: Option<&str>, out: Option<PathBuf>) -> Config {
    if let Some(theme) = theme {
        config = config.with_theme(theme);
    }
    if let Some(out) = out {
        config = config.with_output_dir(out);
    }
    config
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create output dir '{}'", dir.display()))
}

async fn cmd_generate(config: Config, args: GenerateArgs) -> anyhow::Result<()> {
    let config = with_overrides(config, args.theme.as_deref(), args.out);
    let studio = Studio::new(&config).context("invalid configuration")?;
    let mut session = EditingSession::new();

    let mut request = GenerateRequest::new(args.topic);
    if let Some(count) = args.slides {
        request = request.with_slide_count(count);
    }

    let source = studio.generate(&mut session, &request).await?;
    if source == OutlineSource::Local && studio.adapter().endpoint().is_some() {
        eprintln!("Remote outline unavailable; used local templates.");
    }

    if let Some(path) = args.outline {
        outline::save_outline(&path, session.slides())
            .with_context(|| format!("write outline '{}'", path.display()))?;
        println!("{}", path.display());
    }

    ensure_dir(studio.output_dir())?;
    let path = studio.export(&session).context("export deck")?;
    println!("{}", path.display());
    Ok(())
}

fn read_outline(path: &Path) -> anyhow::Result<Vec<SlideRecord>> {
    outline::load_outline(path).with_context(|| format!("read outline '{}'", path.display()))
}

fn cmd_export(config: Config, args: ExportArgs) -> anyhow::Result<()> {
    let config = with_overrides(config, args.theme.as_deref(), args.out);
    let studio = Studio::new(&config).context("invalid configuration")?;

    let mut session = EditingSession::with_outline(read_outline(&args.input)?);
    session.set_theme(&config.defaults.theme);

    ensure_dir(studio.output_dir())?;
    let path = studio.export(&session).context("export deck")?;
    println!("{}", path.display());
    Ok(())
}

async fn cmd_edit(config: Config, args: EditArgs) -> anyhow::Result<()> {
    let config = with_overrides(config, args.theme.as_deref(), args.out);
    let studio = Studio::new(&config).context("invalid configuration")?;

    let mut session = EditingSession::new();
    session.set_theme(&config.defaults.theme);

    if let Some(ref input) = args.input {
        session.set_outline(read_outline(input)?);
    } else if let Some(topic) = args.topic {
        let mut request = GenerateRequest::new(topic);
        if let Some(count) = args.slides {
            request = request.with_slide_count(count);
        }
        studio.generate(&mut session, &request).await?;
    }

    ensure_dir(studio.output_dir())?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&studio, &mut session)
        .run(stdin.lock(), stdout.lock())
        .await
        .context("editor")?;
    Ok(())
}

fn cmd_themes() -> anyhow::Result<()> {
    for (key, colors) in theme::all() {
        let marker = if key == theme::DEFAULT_THEME { " (default)" } else { "" };
        println!(
            "{key}{marker}: background {} title {} text {} accent {}",
            colors.background, colors.title_color, colors.text_color, colors.accent
        );
    }
    Ok(())
}
