use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use zxml::{Config, DuplicatePolicy, EmptyTagStyle, FormatConfig, Indent};

#[derive(Debug, Parser)]
#[command(
    name = "zxml",
    version,
    about = "Parse an XML document and print it back in normalized form"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// How elements without children or text are written
    #[arg(long, value_enum, default_value_t = EmptyTagsArg::Short)]
    empty_tags: EmptyTagsArg,
    /// Indent with N spaces instead of tabs
    #[arg(long, value_name = "N")]
    indent_spaces: Option<usize>,
    /// Maximum element nesting depth (0 means unlimited)
    #[arg(long, value_name = "N", default_value_t = Config::default().max_depth)]
    max_depth: u16,
    /// Fail on repeated attribute or namespace keys within one tag
    #[arg(long)]
    reject_duplicates: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EmptyTagsArg {
    /// `<a />`
    Short,
    /// `<a></a>`
    Uniform,
}

impl From<EmptyTagsArg> for EmptyTagStyle {
    fn from(value: EmptyTagsArg) -> Self {
        match value {
            EmptyTagsArg::Short => Self::Short,
            EmptyTagsArg::Uniform => Self::Uniform,
        }
    }
}

impl Args {
    fn parse_config(&self) -> Config {
        let duplicates = if self.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::LastWins
        };
        Config {
            max_depth: self.max_depth,
            ..Config::default()
        }
        .with_duplicates(duplicates)
    }

    fn format_config(&self) -> FormatConfig {
        FormatConfig {
            indent: self.indent_spaces.map_or(Indent::Tab, Indent::Spaces),
            empty_tag_style: self.empty_tags.into(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    debug!(?args, "starting");

    let input_data = read_input(&args.input)?;
    let doc = zxml::from_str_with_config(&input_data, args.parse_config())
        .with_context(|| format!("failed to parse {}", describe(&args.input)))?;
    info!(root = %doc.root.name, "parsed document");

    let output = zxml::to_string_with_config(&doc, &args.format_config());
    write_output(&args.output, output.as_bytes())?;
    Ok(())
}

fn describe(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
