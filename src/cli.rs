use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::data::{
    load_category_dataset, load_emoji_records, CategoryDataset, EmojiRecord,
    DEFAULT_CATEGORY_SOURCE_PATH, DEFAULT_EMOJI_SOURCE_PATH,
};
use crate::error::{Result, SourceError};
use crate::merge::{merge_emojis, CategoryRules, MergeOutput, MergeReport};
use crate::output::{render, write_output, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "emoji-merge",
    about = "Merge emoji metadata and categories into the client lookup module",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge the sources and write the generated module
    Generate(GenerateArgs),
    /// Merge the sources and report duplicates without writing anything
    Check(SourceArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Primary emoji list
    #[arg(long, default_value = DEFAULT_EMOJI_SOURCE_PATH)]
    pub emoji: PathBuf,
    /// Secondary category dataset
    #[arg(long, default_value = DEFAULT_CATEGORY_SOURCE_PATH)]
    pub categories: PathBuf,
    /// JSON file overriding the static category tables
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub sources: SourceArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Js)]
    pub format: OutputFormat,
    /// File whose contents are placed at the top of the module
    #[arg(long)]
    pub banner: Option<PathBuf>,
    /// Output path; stdout when omitted
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run_with_args(args: &[String]) -> i32 {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };

    match cli.command {
        Command::Generate(args) => handle_generate(&args),
        Command::Check(args) => handle_check(&args),
    }
}

fn handle_generate(args: &GenerateArgs) -> i32 {
    match generate(args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let merged = merge_sources(&args.sources)?;
    if !merged.report.is_clean() {
        print_report(&merged.report);
    }

    let banner = args.banner.as_deref().map(read_banner).transpose()?;
    let text = render(&merged.document, args.format, banner.as_deref())?;
    write_output(args.output.as_deref(), &text)?;

    log_summary(&merged);
    Ok(())
}

fn handle_check(args: &SourceArgs) -> i32 {
    let merged = match merge_sources(args) {
        Ok(merged) => merged,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };

    let doc = &merged.document;
    println!(
        "check complete: emojis={}, aliases={}, codepoints={}, categories={}, duplicates={}",
        doc.emojis.len(),
        doc.alias_index.len(),
        doc.codepoint_index.len(),
        doc.category_names.len(),
        merged.report.diagnostics.len()
    );

    if merged.report.is_clean() {
        return 0;
    }
    print_report(&merged.report);
    1
}

/// Duplicates go straight to stderr so no log filter can hide them.
fn print_report(report: &MergeReport) {
    eprintln!(
        "found {} duplicate alias(es) and {} duplicate codepoint(s)",
        report.duplicate_aliases().count(),
        report.duplicate_codepoints().count()
    );
    for diagnostic in &report.diagnostics {
        eprintln!("- {diagnostic}");
    }
}

fn merge_sources(args: &SourceArgs) -> Result<MergeOutput> {
    let (records, dataset, rules) = load_inputs(args)?;
    Ok(merge_emojis(&records, &dataset, &rules))
}

fn load_inputs(args: &SourceArgs) -> Result<(Vec<EmojiRecord>, CategoryDataset, CategoryRules)> {
    let records = load_emoji_records(&args.emoji)?;
    let dataset = load_category_dataset(&args.categories)?;
    let rules = match &args.rules {
        Some(path) => CategoryRules::load(path)?,
        None => CategoryRules::default(),
    };
    Ok((records, dataset, rules))
}

fn read_banner(path: &Path) -> std::result::Result<String, SourceError> {
    fs::read_to_string(path).map_err(|cause| SourceError::Unavailable {
        source_name: "banner",
        path: path.to_path_buf(),
        cause,
    })
}

fn log_summary(merged: &MergeOutput) {
    let doc = &merged.document;
    info!(
        emojis = doc.emojis.len(),
        aliases = doc.alias_index.len(),
        codepoints = doc.codepoint_index.len(),
        categories = doc.category_names.len(),
        duplicates = merged.report.diagnostics.len(),
        "generated emoji module"
    );
}
