//! PaperSum CLI: summarize a paper from a PDF, URL, text file or raw text.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Args, Parser};
use papersum_acquire::{read_text_file, SourceKind, Summarizer};
use papersum_core::{PaperMetadata, PaperSumConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const RULE: &str = "================================================================================";

#[derive(Parser, Debug)]
#[command(name = "papersum")]
#[command(about = "Research paper summarization")]
#[command(after_help = "Examples:
  papersum --pdf paper.pdf --output summary.md
  papersum --url https://arxiv.org/abs/2301.00001 --json-output data.json
  papersum --text \"paper content...\" --title \"My Paper\" --print-markdown")]
#[command(group(
    ArgGroup::new("outputs")
        .required(true)
        .multiple(true)
        .args(["output", "json_output", "print_markdown", "print_json"])
))]
struct Cli {
    #[command(flatten)]
    input: Input,

    /// Paper title
    #[arg(long)]
    title: Option<String>,

    /// Paper authors
    #[arg(long)]
    authors: Option<String>,

    /// Venue and year (e.g. "ICML 2023")
    #[arg(long)]
    venue_year: Option<String>,

    /// DOI or arXiv ID
    #[arg(long)]
    doi_arxiv: Option<String>,

    /// Write the Markdown summary to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the JSON report to this file
    #[arg(short, long)]
    json_output: Option<PathBuf>,

    /// Print the Markdown summary to stdout
    #[arg(long)]
    print_markdown: bool,

    /// Print the JSON report to stdout
    #[arg(long)]
    print_json: bool,

    /// Suppress progress messages
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    /// Path to a PDF file
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// URL of the paper (arXiv or any web page / PDF)
    #[arg(long)]
    url: Option<String>,

    /// Raw paper text
    #[arg(long)]
    text: Option<String>,

    /// Path to a text file
    #[arg(long)]
    text_file: Option<PathBuf>,
}

impl Cli {
    fn metadata(&self) -> PaperMetadata {
        PaperMetadata {
            title: self.title.clone(),
            authors: self.authors.clone(),
            venue_year: self.venue_year.clone(),
            doi_or_arxiv: self.doi_arxiv.clone(),
            ..Default::default()
        }
        .normalized()
    }

    /// Progress lines are `info` events; `-q` keeps only errors.
    fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}

/// Resolve the input flags into the summarizer's input string and kind.
fn resolve_input(cli: &Cli) -> Result<(String, SourceKind)> {
    let input = &cli.input;
    if let Some(path) = &input.pdf {
        if !path.exists() {
            bail!("PDF file not found: {}", path.display());
        }
        info!("Processing PDF: {}", path.display());
        return Ok((path.to_string_lossy().into_owned(), SourceKind::Pdf));
    }
    if let Some(url) = &input.url {
        info!("Fetching from URL: {}", url);
        return Ok((url.clone(), SourceKind::Url));
    }
    if let Some(text) = &input.text {
        info!("Processing provided text...");
        return Ok((text.clone(), SourceKind::Text));
    }
    if let Some(path) = &input.text_file {
        if !path.exists() {
            bail!("Text file not found: {}", path.display());
        }
        let text = read_text_file(path)
            .with_context(|| format!("Error reading text file {}", path.display()))?;
        info!("Processing text file: {}", path.display());
        return Ok((text, SourceKind::Text));
    }
    bail!("one of --pdf, --url, --text or --text-file is required")
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

async fn run(cli: Cli) -> Result<()> {
    let config = PaperSumConfig::from_env();
    papersum_extract::sentences::init(config.splitter);

    info!("Initializing PaperSum...");
    let summarizer = Summarizer::new(&config)?;

    let (input, kind) = resolve_input(&cli)?;
    info!("Analyzing paper... This may take a few moments.");
    let summary = summarizer
        .summarize_source(&input, Some(kind), cli.metadata())
        .await
        .context("Error processing paper")?;
    info!("Analysis complete!");

    let json = serde_json::to_string_pretty(&summary.report)?;

    if let Some(path) = &cli.output {
        write_file(path, &summary.document)?;
        info!("Markdown summary saved to: {}", path.display());
    }
    if let Some(path) = &cli.json_output {
        write_file(path, &json)?;
        info!("JSON data saved to: {}", path.display());
    }
    if cli.print_markdown {
        println!("\n{}\nMARKDOWN SUMMARY\n{}", RULE, RULE);
        println!("{}", summary.document);
    }
    if cli.print_json {
        println!("\n{}\nJSON DATA\n{}", RULE, RULE);
        println!("{}", json);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("papersum").chain(args.iter().copied()))
    }

    #[test]
    fn test_requires_exactly_one_input() {
        assert!(parse(&["--print-json"]).is_err());
        assert!(parse(&["--text", "a", "--url", "http://x", "--print-json"]).is_err());
        assert!(parse(&["--text", "a", "--print-json"]).is_ok());
    }

    #[test]
    fn test_requires_an_output() {
        assert!(parse(&["--text", "a"]).is_err());
        let cli = parse(&["--text", "a", "-o", "out.md", "-j", "out.json", "-q"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.md")));
        assert_eq!(cli.json_output, Some(PathBuf::from("out.json")));
        assert!(cli.quiet);
    }

    #[test]
    fn test_quiet_hides_progress_events() {
        let cli = parse(&["--text", "a", "--print-json"]).unwrap();
        assert_eq!(cli.default_log_filter(), "info");
        let cli = parse(&["--text", "a", "--print-json", "-q"]).unwrap();
        assert_eq!(cli.default_log_filter(), "error");
    }

    #[test]
    fn test_metadata_flags() {
        let cli = parse(&[
            "--text",
            "a",
            "--title",
            "My Paper",
            "--authors",
            " ",
            "--venue-year",
            "ICML 2023",
            "--doi-arxiv",
            "arXiv:2301.00001",
            "--print-markdown",
        ])
        .unwrap();
        let metadata = cli.metadata();
        assert_eq!(metadata.title.as_deref(), Some("My Paper"));
        assert_eq!(metadata.authors, None);
        assert_eq!(metadata.venue_year.as_deref(), Some("ICML 2023"));
        assert_eq!(metadata.doi_or_arxiv.as_deref(), Some("arXiv:2301.00001"));
    }

    #[test]
    fn test_text_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.txt");
        std::fs::write(&path, "Abstract\nWe propose X.").unwrap();
        let path_arg = path.to_string_lossy().to_string();
        let cli = parse(&["--text-file", path_arg.as_str(), "--print-json", "-q"]).unwrap();
        let (text, kind) = resolve_input(&cli).unwrap();
        assert_eq!(text, "Abstract\nWe propose X.");
        assert_eq!(kind, SourceKind::Text);
    }

    #[test]
    fn test_missing_pdf_is_an_error() {
        let cli = parse(&["--pdf", "/nonexistent/paper.pdf", "--print-json", "-q"]).unwrap();
        assert!(resolve_input(&cli).is_err());
    }

    #[tokio::test]
    async fn test_run_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let md = dir.path().join("summary.md");
        let json = dir.path().join("summary.json");
        let md_arg = md.to_string_lossy().to_string();
        let json_arg = json.to_string_lossy().to_string();
        let cli = parse(&[
            "--text",
            "Abstract\nWe propose X. We show Y. It works.\n\nIntroduction\n...",
            "--title",
            "X",
            "-o",
            md_arg.as_str(),
            "-j",
            json_arg.as_str(),
            "-q",
        ])
        .unwrap();
        run(cli).await.unwrap();

        let markdown = std::fs::read_to_string(&md).unwrap();
        assert!(markdown.starts_with("# 📄 Research Paper Summary: X\n"));
        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(report["tldr"], "We propose X. We show Y. It works.");
    }
}
