use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use postdoc::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "postdoc.toml";
const FRONTMATTER_FENCE: &str = "---";

#[derive(Parser)]
#[command(name = "postdoc")]
#[command(about = "Convert lightweight blog markup to HTML, Typst or PDF")]
struct Cli {
    /// Input markup file
    input: PathBuf,

    /// Output file (defaults to stdout, or the input name with .pdf for PDF)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Config file (defaults to ./postdoc.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Typst,
    Pdf,
    Json,
    Source,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => {
            ensure!(path.exists(), "Config file {} not found", path.display());
            Config::load(path)?
        }
        None => Config::load(Path::new(DEFAULT_CONFIG))?,
    };

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("Error reading {}", cli.input.display()))?;
    let markdown = strip_frontmatter(&raw);

    let blocks = postdoc::segment(markdown);
    let rendered = match cli.format {
        Format::Html => postdoc::blocks_to_html(&blocks, &config.html).into_bytes(),
        Format::Typst => postdoc::blocks_to_typst(&blocks, &config).into_bytes(),
        Format::Json => postdoc::blocks_to_json(&blocks)?.into_bytes(),
        Format::Source => postdoc::blocks_to_source(&blocks).into_bytes(),
        Format::Pdf => postdoc::blocks_to_pdf(&blocks, &config)?,
    };

    // PDF is binary, so it goes to a file even without --output
    let output = match cli.output {
        Some(output) => Some(output),
        None if cli.format == Format::Pdf => Some(cli.input.with_extension("pdf")),
        None => None,
    };

    match output {
        Some(output) => {
            fs::write(&output, rendered)
                .with_context(|| format!("Error writing {}", output.display()))?;
            info!(output = %output.display(), blocks = blocks.len(), "wrote output");
        }
        None => io::stdout().write_all(&rendered)?,
    }

    Ok(())
}

/// Skip a leading `---` front matter block; its fields are not interpreted here.
///
/// Both fences must be whole lines. Without a closing fence the text is
/// returned unchanged.
fn strip_frontmatter(markdown: &str) -> &str {
    let Some((first, _)) = markdown.split_once('\n') else {
        return markdown;
    };
    if first.trim_end() != FRONTMATTER_FENCE {
        return markdown;
    }

    let mut offset = first.len() + 1;
    for line in markdown[offset..].split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == FRONTMATTER_FENCE {
            return markdown[offset..].trim_start_matches(['\r', '\n']);
        }
    }
    markdown
}
