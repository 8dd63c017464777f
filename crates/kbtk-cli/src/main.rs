use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tabwriter::TabWriter;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use kbtk_io::generate::{CostCalculator, ExtractedInputs, TokenCounter, approximate_token_count, build_prompt};
use kbtk_io::prelude::*;

/// Characters shown per element by `inspect`.
const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Parser)]
#[command(name = "kbtk", version, about = "KBTK lesson-plan document generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write a new Document JSON holding every input template.
    Templates {
        /// Output Document JSON path
        #[arg(long)]
        out: PathBuf,
    },
    /// List the elements of a Document JSON.
    Inspect {
        /// Input Document JSON path
        document: PathBuf,
    },
    /// Print the text between an input tag's markers.
    Extract {
        /// Input Document JSON path
        document: PathBuf,
        /// Input tag name, e.g. input_RPPH
        #[arg(long)]
        tag: InputTag,
    },
    /// Render a text file into an output region.
    Format {
        /// Input Document JSON path
        document: PathBuf,
        /// Output region tag, e.g. activity_detail
        #[arg(long)]
        region: ContentType,
        /// Plain-text content using the line markup
        #[arg(long)]
        content: PathBuf,
        /// Where to write the result (defaults to rewriting the input)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Extract inputs, generate content and format it into the document.
    Generate {
        /// Input Document JSON path
        document: PathBuf,
        /// rpph, activity-detail, assessment-guide or story
        #[arg(long = "type")]
        content_type: ContentType,
        /// Where to write the result (defaults to rewriting the input)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Provider config file (TOML, YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Disable the progress bar
        #[arg(long)]
        no_progress: bool,
    },
    /// Count the prompt tokens a generation would send.
    Estimate {
        /// Input Document JSON path
        document: PathBuf,
        /// rpph, activity-detail, assessment-guide or story
        #[arg(long = "type")]
        content_type: ContentType,
        /// Provider config file; without a usable key the count is approximated
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    match cli.cmd {
        Command::Templates { out } => {
            let mut doc = Document::new();
            insert_all_templates(&mut doc)?;
            write_document(&doc, &out)?;
        }
        Command::Inspect { document } => {
            let doc = read_document(&document)?;
            print_elements(&doc)?;
        }
        Command::Extract { document, tag } => {
            let doc = read_document(&document)?;
            match extract_input(&doc, tag) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(2);
                }
            }
        }
        Command::Format { document, region, content, out } => {
            let mut doc = read_document(&document)?;
            let content = fs::read_to_string(&content)
                .with_context(|| format!("failed to read {}", content.display()))?;

            let fallback = doc.num_children().saturating_sub(1);
            if !format_output_response(&mut doc, &content, fallback, &region.output_options()) {
                eprintln!("failed to format output into <{}>", region.output_tag());
                std::process::exit(2);
            }
            write_document(&doc, out.as_deref().unwrap_or(&document))?;
        }
        Command::Generate { document, content_type, out, config, no_progress } => {
            let mut doc = read_document(&document)?;
            let config = ProviderConfig::load(config.as_deref())?;
            let client = AnthropicClient::new(config)?;

            let bar = progress::bar(!no_progress);
            let result = process(&mut doc, content_type, &client, |pct, msg| {
                bar.set_position(u64::from(pct));
                bar.set_message(msg.to_string());
            })
            .await;

            match result {
                Ok(outcome) => {
                    bar.finish_and_clear();
                    write_document(&doc, out.as_deref().unwrap_or(&document))?;
                    println!("{content_type} generated successfully!");
                    print_stats(&outcome.generation.stats)?;
                }
                Err(e) => {
                    bar.abandon();
                    eprintln!("{e}");
                    std::process::exit(2);
                }
            }
        }
        Command::Estimate { document, content_type, config } => {
            let doc = read_document(&document)?;

            let mut inputs = ExtractedInputs::new();
            for &tag in content_type.required_tags() {
                match extract_input(&doc, tag) {
                    Ok(text) => {
                        inputs.insert(tag, text);
                    }
                    Err(e) => {
                        eprintln!("{e}");
                        std::process::exit(2);
                    }
                }
            }
            let prompt = build_prompt(content_type, &inputs);

            let tokens = match ProviderConfig::load(config.as_deref()) {
                Ok(cfg) => TokenCounter::new(cfg)?.count_tokens(&prompt).await,
                Err(e) => {
                    warn!(error = %e, "provider config unavailable; approximating token count");
                    approximate_token_count(&prompt)
                }
            };
            let cost = CostCalculator::default().cost_in_rupiah(tokens, 0);

            let mut tw = TabWriter::new(io::stdout());
            writeln!(tw, "content_type\t{}", content_type.slug())?;
            writeln!(tw, "prompt_chars\t{}", prompt.chars().count())?;
            writeln!(tw, "input_tokens\t{tokens}")?;
            writeln!(tw, "input_cost\tRp {cost}")?;
            tw.flush()?;
        }
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .without_time()
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize logging: {error}"))
}

fn read_document(path: &Path) -> Result<Document> {
    let s = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_document_json_str(&s).with_context(|| format!("failed to load {}", path.display()))
}

fn write_document(doc: &Document, path: &Path) -> Result<()> {
    let json = to_document_json_string(doc)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn print_elements(doc: &Document) -> Result<()> {
    let mut tw = TabWriter::new(io::stdout());
    writeln!(tw, "index\tkind\tstyle\tpreview")?;
    for (index, el) in doc.elements.iter().enumerate() {
        writeln!(tw, "{index}\t{}\t{}\t{}", kind_label(el), style_label(el), preview(&el.text))?;
    }
    tw.flush()?;
    Ok(())
}

fn print_stats(stats: &GenerationStats) -> Result<()> {
    let mut tw = TabWriter::new(io::stdout());
    writeln!(tw, "input_tokens\t{}", stats.input_tokens)?;
    writeln!(tw, "output_tokens\t{}", stats.output_tokens)?;
    writeln!(tw, "total_tokens\t{}", stats.total_tokens)?;
    writeln!(tw, "cost\tRp {}", stats.cost_in_rupiah)?;
    tw.flush()?;
    Ok(())
}

fn kind_label(el: &Element) -> &'static str {
    match el.kind {
        ElementKind::Paragraph => "paragraph",
        ElementKind::ListItem => "list_item",
    }
}

fn style_label(el: &Element) -> String {
    let mut label = if el.is_list_item() {
        format!("level{}", el.nesting_level.unwrap_or(0))
    } else {
        el.heading.as_str().to_string()
    };
    if !el.bold_ranges.is_empty() || el.attributes.bold == Some(true) {
        label.push_str("+bold");
    }
    label
}

/// Single-line preview, bounded to `PREVIEW_CHARS` with an ellipsis when cut.
fn preview(text: &str) -> String {
    let flat = text.replace(['\t', '\n'], " ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let mut out: String = flat.chars().take(PREVIEW_CHARS - 1).collect();
    out.push('…');
    out
}

mod progress {
    use indicatif::{ProgressBar, ProgressStyle};

    pub fn bar(enabled: bool) -> ProgressBar {
        if !enabled {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(100);
        let style = ProgressStyle::with_template("{bar:30} {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar
    }
}
