//! calcfont CLI (made by FontLab https://www.fontlab.com/)

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use log::LevelFilter;

use calcfont_core::builder::{default_output, Builder};
use calcfont_core::charset::{parse_codepoint_list, CharacterSet};
use calcfont_core::discovery::CandidateDiscovery;
use calcfont_core::output::write_json_pretty;
use calcfont_core::subset::FontToolsSubset;

/// Build `assets/font.ttf` for the calculator. Every flag is optional.
#[derive(Debug, Parser)]
#[command(
    name = "calcfont",
    about = "Subset a system font down to the calculator's characters (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// Source font candidates in priority order (replaces the platform list)
    #[arg(long = "source-font", value_hint = ValueHint::FilePath)]
    source_fonts: Vec<PathBuf>,

    /// Project root; the font is written to <root>/assets/font.ttf
    /// [default: the workspace this binary was built from]
    #[arg(long = "project-root", value_hint = ValueHint::DirPath)]
    project_root: Option<PathBuf>,

    /// Write the subset here instead of <root>/assets/font.ttf
    #[arg(short = 'o', long = "output", value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Extra characters to keep, given as literal text
    #[arg(long = "extra-chars")]
    extra_chars: Option<String>,

    /// Extra codepoints or ranges to keep (e.g. U+00B0,U+2070-U+2079)
    #[arg(short = 'u', long = "codepoints", value_hint = ValueHint::Other)]
    codepoints: Vec<String>,

    /// Subsetter executable (defaults to $CALCFONT_SUBSET_TOOL or pyftsubset)
    #[arg(long = "subset-tool", value_hint = ValueHint::CommandName)]
    subset_tool: Option<PathBuf>,

    /// Show what would run without writing anything
    #[arg(long = "dry-run", action = ArgAction::SetTrue)]
    dry_run: bool,

    /// Print the build report as JSON on stdout (progress goes to stderr)
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// More log output (-vv for trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,
}

/// Parse CLI args and run the build.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    run_build(&cli)
}

fn run_build(cli: &Cli) -> Result<()> {
    let builder = build_builder(cli)?;
    let tool = match &cli.subset_tool {
        Some(program) => FontToolsSubset::new(program),
        None => FontToolsSubset::from_env(),
    };

    if cli.json {
        let report = builder.run(&tool, io::stderr().lock())?;
        write_json_pretty(&report, io::stdout().lock())?;
    } else {
        builder.run(&tool, io::stdout().lock())?;
    }

    Ok(())
}

fn build_builder(cli: &Cli) -> Result<Builder> {
    let root = resolve_project_root(cli);

    let mut builder = Builder::new(&root)
        .with_chars(build_charset(cli)?)
        .dry_run(cli.dry_run);

    if !cli.source_fonts.is_empty() {
        builder = builder.with_discovery(CandidateDiscovery::new(cli.source_fonts.iter()));
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&root));
    log::debug!("writing subset to {}", output.display());
    Ok(builder.with_output(output))
}

fn resolve_project_root(cli: &Cli) -> PathBuf {
    match &cli.project_root {
        Some(root) => {
            log::debug!("project root {} (from --project-root)", root.display());
            root.clone()
        }
        None => {
            let root = default_project_root();
            log::debug!(
                "project root {} (build-time workspace; pass --project-root to change)",
                root.display()
            );
            root
        }
    }
}

fn build_charset(cli: &Cli) -> Result<CharacterSet> {
    let mut extra = Vec::new();
    for chunk in &cli.codepoints {
        extra.extend(
            parse_codepoint_list(chunk).with_context(|| format!("invalid --codepoints: {chunk}"))?,
        );
    }
    if let Some(text) = &cli.extra_chars {
        extra.extend(text.chars());
    }

    Ok(CharacterSet::calculator().with_extra(extra))
}

/// The workspace root: one level above this crate, as `assets/` lives there.
fn default_project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

fn log_level(cli: &Cli) -> LevelFilter {
    if cli.quiet {
        return LevelFilter::Error;
    }
    match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(cli: &Cli) {
    let _ = env_logger::Builder::new()
        .filter_level(log_level(cli))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
