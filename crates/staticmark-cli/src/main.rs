//! Staticmark CLI - Render Markdown pages and build static sites
//!
//! Commands:
//!   render    Render a document to HTML (or inspect its blocks)
//!   title     Print the document title
//!   validate  Check a document for errors
//!   stats     Show document statistics
//!   build     Build a site from content, static assets and a template

mod config;
mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use staticmark_core::parser::{inline_runs, parse_blocks};
use staticmark_core::{
    build_site, convert_document, extract_title, markdown_to_html, text_to_spans, Block,
    BlockType, Inline,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::{Config, Overrides};
use error::CliError;

/// Staticmark - Markdown to HTML for static sites.
#[derive(Parser)]
#[command(name = "smark", version, about)]
struct Cli {
    /// Enable info logging; `render` also lists blocks instead of HTML.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document to HTML.
    Render {
        file: PathBuf,
        /// Print classified blocks and inline spans as JSON.
        #[arg(short, long)]
        json: bool,
    },
    /// Print the first level-1 heading.
    Title { file: PathBuf },
    /// Check a document for errors without output.
    Validate {
        file: PathBuf,
        /// Report as JSON.
        #[arg(short, long)]
        json: bool,
    },
    /// Show document statistics.
    Stats { file: PathBuf },
    /// Build a site.
    Build(BuildArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Config file (defaults to ./staticmark.toml when present).
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Markdown content directory.
    #[arg(long)]
    content: Option<PathBuf>,
    /// Static assets directory.
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,
    /// HTML template.
    #[arg(long)]
    template: Option<PathBuf>,
    /// Output directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Render { file, json } => cmd_render(&read_input(&file)?, json, cli.verbose),
        Commands::Title { file } => cmd_title(&read_input(&file)?),
        Commands::Validate { file, json } => cmd_validate(&read_input(&file)?, json),
        Commands::Stats { file } => cmd_stats(&read_input(&file)?),
        Commands::Build(args) => cmd_build(args),
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(input: &str, json: bool, verbose: bool) -> Result<(), CliError> {
    let blocks = parse_blocks(input);

    if json {
        let doc = convert_blocks(&blocks)?;
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else if verbose {
        print_blocks_verbose(&blocks)?;
    } else {
        println!("{}", markdown_to_html(input)?);
    }

    Ok(())
}

// =============================================================================
// Title Command
// =============================================================================

fn cmd_title(input: &str) -> Result<(), CliError> {
    println!("{}", extract_title(input)?);
    Ok(())
}

// =============================================================================
// Validate Command
// =============================================================================

fn cmd_validate(input: &str, json: bool) -> Result<(), CliError> {
    let errors = collect_errors(input);

    if errors.is_empty() {
        if json {
            println!(r#"{{"valid": true, "errors": []}}"#);
        } else {
            println!("Valid: no errors found");
        }
        return Ok(());
    }

    if json {
        let report = JsonValidation {
            valid: false,
            errors: errors.iter().map(String::as_str).collect(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        eprintln!("Invalid: {} error(s) found", errors.len());
        for error in &errors {
            eprintln!("  - {}", error);
        }
    }

    Err(CliError::Invalid(errors.len()))
}

/// Conversion, rendering and title extraction failures, in that order.
fn collect_errors(input: &str) -> Vec<String> {
    let mut errors = Vec::new();

    match convert_document(input) {
        Ok(root) => {
            if let Err(e) = root.render() {
                errors.push(e.to_string());
            }
        }
        Err(e) => errors.push(e.to_string()),
    }

    if let Err(e) = extract_title(input) {
        errors.push(e.to_string());
    }

    errors
}

#[derive(Serialize)]
struct JsonValidation<'a> {
    valid: bool,
    errors: Vec<&'a str>,
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(input: &str) -> Result<(), CliError> {
    let blocks = parse_blocks(input);
    let stats = DocumentStats::from_blocks(&blocks, input);
    let title = extract_title(input).unwrap_or_else(|_| "(none)".to_string());

    println!("Document Statistics");
    println!("-------------------");
    println!("Title:        {}", title);
    println!();
    println!("Content:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Code blocks:    {}", stats.code_blocks);
    println!("  Quotes:         {}", stats.quotes);
    println!("  Lists:          {}", stats.lists);
    println!("  List items:     {}", stats.list_items);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);
    println!();
    println!("Errors:         {}", collect_errors(input).len());

    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct DocumentStats {
    total_blocks: usize,
    headings: usize,
    paragraphs: usize,
    code_blocks: usize,
    quotes: usize,
    lists: usize,
    list_items: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_blocks(blocks: &[Block], input: &str) -> Self {
        let mut stats = Self {
            total_blocks: blocks.len(),
            chars: input.chars().count(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
            ..Default::default()
        };

        for block in blocks {
            match block.kind {
                BlockType::Heading(_) => stats.headings += 1,
                BlockType::Paragraph => stats.paragraphs += 1,
                BlockType::CodeFence => stats.code_blocks += 1,
                BlockType::Quote => stats.quotes += 1,
                BlockType::UnorderedList | BlockType::OrderedList => {
                    stats.lists += 1;
                    stats.list_items += block.lines().count();
                }
            }
        }

        stats
    }
}

// =============================================================================
// Build Command
// =============================================================================

fn cmd_build(args: BuildArgs) -> Result<(), CliError> {
    let (config, base) = Config::load(args.config.as_deref())?;
    let overrides = Overrides {
        content_dir: args.content,
        static_dir: args.static_dir,
        template: args.template,
        output_dir: args.output,
    };
    let site = config.into_site_config(&base, overrides);
    debug!(
        content = %site.content_dir.display(),
        static_dir = %site.static_dir.display(),
        template = %site.template_path.display(),
        output = %site.output_dir.display(),
        "Resolved site configuration"
    );

    let summary = build_site(&site)?;
    println!(
        "Built {} page(s), copied {} file(s) into {}",
        summary.pages_written,
        summary.files_copied,
        site.output_dir.display()
    );

    Ok(())
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonDocument {
    blocks: Vec<JsonBlock>,
}

#[derive(Serialize)]
struct JsonBlock {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<u8>,
    start: u32,
    end: u32,
    /// One entry per list item, a single entry otherwise.
    runs: Vec<Vec<JsonInline>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonInline {
    Text { content: String },
    Bold { content: String },
    Italic { content: String },
    Code { content: String },
    Link { content: String, url: String },
    Image { alt: String, url: String },
}

fn convert_blocks(blocks: &[Block]) -> Result<JsonDocument, CliError> {
    let mut out = Vec::with_capacity(blocks.len());
    for block in blocks {
        out.push(convert_block(block)?);
    }
    Ok(JsonDocument { blocks: out })
}

fn convert_block(block: &Block) -> Result<JsonBlock, CliError> {
    let runs = inline_runs(block).map_err(|e| e.with_span(block.span))?;

    let mut json_runs = Vec::with_capacity(runs.len());
    for run in &runs {
        let spans = text_to_spans(run).map_err(|e| e.with_span(block.span))?;
        json_runs.push(spans.iter().map(convert_inline).collect());
    }

    Ok(JsonBlock {
        kind: block.kind.name(),
        level: match block.kind {
            BlockType::Heading(level) => Some(level),
            _ => None,
        },
        start: block.span.start,
        end: block.span.end,
        runs: json_runs,
    })
}

fn convert_inline(inline: &Inline) -> JsonInline {
    match inline {
        Inline::Text(t) => JsonInline::Text {
            content: t.to_string(),
        },
        Inline::Bold(t) => JsonInline::Bold {
            content: t.to_string(),
        },
        Inline::Italic(t) => JsonInline::Italic {
            content: t.to_string(),
        },
        Inline::Code(t) => JsonInline::Code {
            content: t.to_string(),
        },
        Inline::Link { text, url } => JsonInline::Link {
            content: text.to_string(),
            url: url.to_string(),
        },
        Inline::Image { alt, url } => JsonInline::Image {
            alt: alt.to_string(),
            url: url.to_string(),
        },
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn print_blocks_verbose(blocks: &[Block]) -> Result<(), CliError> {
    println!("=== Blocks ===");

    for (i, block) in blocks.iter().enumerate() {
        println!();
        println!(
            "[{}] {} @ {}..{}",
            i + 1,
            describe_block(block),
            block.span.start,
            block.span.end
        );

        let runs = inline_runs(block).map_err(|e| e.with_span(block.span))?;
        for (n, run) in runs.iter().enumerate() {
            let spans = text_to_spans(run).map_err(|e| e.with_span(block.span))?;
            if runs.len() > 1 {
                println!("  Item {}: {}", n + 1, format_inlines(&spans));
            } else {
                println!("  Content: {}", format_inlines(&spans));
            }
        }
    }

    Ok(())
}

fn describe_block(block: &Block) -> String {
    match block.kind {
        BlockType::Heading(level) => format!("Heading (level {})", level),
        BlockType::UnorderedList | BlockType::OrderedList => {
            format!("{} ({} items)", block.kind.name(), block.lines().count())
        }
        kind => kind.name().to_string(),
    }
}

fn format_inlines(inlines: &[Inline]) -> String {
    let mut result = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) => result.push_str(t),
            Inline::Bold(t) => {
                result.push_str("[b:");
                result.push_str(t);
                result.push(']');
            }
            Inline::Italic(t) => {
                result.push_str("[i:");
                result.push_str(t);
                result.push(']');
            }
            Inline::Code(t) => {
                result.push_str("[code:");
                result.push_str(t);
                result.push(']');
            }
            Inline::Link { text, url } => {
                result.push_str("[link:");
                result.push_str(text);
                result.push_str(" -> ");
                result.push_str(url);
                result.push(']');
            }
            Inline::Image { alt, url } => {
                result.push_str("[img:");
                result.push_str(alt);
                result.push_str(" -> ");
                result.push_str(url);
                result.push(']');
            }
        }
    }
    result.replace('\n', "\\n")
}
