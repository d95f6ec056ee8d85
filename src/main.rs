// Rebrand CLI
//
// Detects branding in an HTML file, rewrites it with replacement values and a
// generated theme, and unpacks self-writing documents.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kodegen_tools_rebrand::theme::catalog;
use kodegen_tools_rebrand::unpacker::unpack_with_outcome;
use kodegen_tools_rebrand::{ExportFormat, Field, RebrandConfig, Session};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// JSON file overriding the default selector lists and settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print detected branding and navigation as JSON
    Detect {
        input: PathBuf,
    },
    /// Rewrite a document with new branding
    Rewrite(RewriteArgs),
    /// Decode a document.write(...) wrapper
    Unpack {
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the theme catalog
    Themes {
        /// Print every color role as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct RewriteArgs {
    input: PathBuf,

    #[arg(long)]
    brand: Option<String>,
    #[arg(long)]
    slogan: Option<String>,
    /// Replacement logo URL
    #[arg(long)]
    logo: Option<String>,
    #[arg(long)]
    company: Option<String>,

    /// Theme name, or "original" to keep the document's styling
    #[arg(long)]
    theme: Option<String>,
    /// solid | gradient
    #[arg(long)]
    color_mode: Option<String>,
    /// default | gradient | dark
    #[arg(long)]
    background: Option<String>,
    /// default | top | left | right
    #[arg(long)]
    nav_position: Option<String>,
    #[arg(long)]
    font_family: Option<String>,
    /// #rrggbb
    #[arg(long)]
    primary_color: Option<String>,

    /// Navigation relabel as INDEX=LABEL (repeatable)
    #[arg(long = "nav", value_parser = parse_nav_override)]
    nav: Vec<(usize, String)>,

    /// Append the runtime enforcement script
    #[arg(long)]
    enforce: bool,

    /// Wrap the output in a self-writing script
    #[arg(long)]
    packed: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_nav_override(raw: &str) -> Result<(usize, String), String> {
    let (index, label) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=LABEL, got '{raw}'"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad navigation index '{index}': {e}"))?;
    Ok((index, label.to_string()))
}

async fn load_config(path: Option<&Path>) -> Result<RebrandConfig> {
    let Some(path) = path else {
        return Ok(RebrandConfig::default());
    };
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading config {}", path.display()))?;
    RebrandConfig::from_json_str(&json).with_context(|| format!("invalid config {}", path.display()))
}

async fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, content)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

async fn run_rewrite(config: &RebrandConfig, args: RewriteArgs) -> Result<()> {
    let mut session = Session::new(config)?;
    session
        .load_path(&args.input)
        .await
        .with_context(|| format!("reading {}", args.input.display()))?;

    let settings = [
        (Field::BrandReplacement, args.brand),
        (Field::SloganReplacement, args.slogan),
        (Field::LogoReplacement, args.logo),
        (Field::CompanyReplacement, args.company),
        (Field::ThemeName, args.theme),
        (Field::ColorMode, args.color_mode),
        (Field::BackgroundStyle, args.background),
        (Field::NavPosition, args.nav_position),
        (Field::FontFamily, args.font_family),
        (Field::PrimaryColor, args.primary_color),
    ];
    for (field, value) in settings {
        if let Some(value) = value {
            session.set_field(field, value);
        }
    }

    for (index, label) in args.nav {
        if !session.set_nav_override(index, label) {
            anyhow::bail!(
                "no navigation item at index {index} ({} found)",
                session.navigation().len()
            );
        }
    }
    session.set_enforce_runtime(args.enforce);

    let format = if args.packed {
        ExportFormat::Packed
    } else {
        ExportFormat::Plain
    };
    let output = session.export(format)?;
    emit(args.output.as_deref(), &output).await
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).await?;

    match cli.command {
        Command::Detect { input } => {
            let mut session = Session::new(&config)?;
            session
                .load_path(&input)
                .await
                .with_context(|| format!("reading {}", input.display()))?;
            let report = serde_json::json!({
                "detection": session.detection(),
                "fields": session.fields(),
                "navigation": session.navigation(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Rewrite(args) => run_rewrite(&config, args).await?,
        Command::Unpack { input, output } => {
            let raw = tokio::fs::read_to_string(&input)
                .await
                .with_context(|| format!("reading {}", input.display()))?;
            let (markup, outcome) = unpack_with_outcome(&raw);
            info!(?outcome, "Unpack finished");
            emit(output.as_deref(), &markup).await?;
        }
        Command::Themes { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(catalog::all())?);
            } else {
                for theme in catalog::all() {
                    println!("{:<10} {}  {}", theme.name, theme.primary, theme.font_family);
                }
            }
        }
    }

    Ok(())
}
