//! CLI tool for rendering the RASS Academy user guide as DOCX and PPTX.

use anyhow::{Context, Result};
use clap::Parser;
use guide_core::{build_document, Deck, Document, MarkdownConverter};
use guide_docx::DocxWriter;
use guide_pptx::PptxWriter;
use std::path::{Path, PathBuf};

const BANNER_WIDTH: usize = 60;

/// Render the RASS Academy user guide markdown as a Word document and a slide deck.
#[derive(Parser, Debug)]
#[command(name = "guide-render")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Markdown source file
    #[arg(short, long, default_value = "RASS_ACADEMY_COMPLETE_USER_GUIDE.md")]
    input: PathBuf,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File name of the generated Word document
    #[arg(long, default_value = "RASS_ACADEMY_USER_GUIDE.docx")]
    docx_name: String,

    /// File name of the generated PowerPoint deck
    #[arg(long, default_value = "RASS_ACADEMY_USER_GUIDE.pptx")]
    pptx_name: String,

    /// Print the converted block outline as JSON to stdout
    #[arg(short, long)]
    print: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    // Keep stdout pure JSON when printing the outline.
    let progress = !args.print;

    if progress {
        print_rule();
        println!("RASS Academy Professional Documentation Generator");
        print_rule();
        println!();
    }

    let outputs = render(&args)?;

    if progress {
        println!();
        print_rule();
        println!("✓ All documents created successfully!");
        print_rule();
        println!();
        println!("Generated files:");
        println!("  1. {} (Markdown)", args.input.display());
        println!("  2. {} (Word Document)", outputs.docx.display());
        println!("  3. {} (PowerPoint)", outputs.pptx.display());
        println!();
    }

    Ok(())
}

/// Paths of the files written by one run.
#[derive(Debug)]
struct Outputs {
    docx: PathBuf,
    pptx: PathBuf,
}

/// Read the source, then write the document and the deck.
fn render(args: &Args) -> Result<Outputs> {
    let progress = !args.print;
    let document = load_document(&args.input)?;

    if args.print {
        println!("{}", block_outline(&document)?);
    }

    let docx = get_output_path(args.output.as_deref(), &args.docx_name)?;
    let pptx = get_output_path(args.output.as_deref(), &args.pptx_name)?;

    if progress {
        println!("Creating DOCX document...");
    }
    DocxWriter::new()
        .save(&document, &docx)
        .with_context(|| format!("Failed to write {}", docx.display()))?;
    if progress {
        println!("✓ DOCX document created: {}", docx.display());
        println!();
        println!("Creating PowerPoint presentation...");
    }

    let deck = Deck::rass_academy();
    log::debug!("Rendering {} slides", deck.len());
    PptxWriter::new()
        .save(&deck, &pptx)
        .with_context(|| format!("Failed to write {}", pptx.display()))?;
    if progress {
        println!("✓ PowerPoint presentation created: {}", pptx.display());
    }

    Ok(Outputs { docx, pptx })
}

/// JSON array of the document blocks, tagged by `kind`.
fn block_outline(document: &Document) -> Result<String> {
    serde_json::to_string_pretty(&document.blocks).context("Failed to serialize block outline")
}

/// Read and convert the markdown source.
fn load_document(input_path: &Path) -> Result<Document> {
    let source = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;
    log::debug!("Read {} bytes from {}", source.len(), input_path.display());

    let document = build_document(&source, &MarkdownConverter::new());
    log::debug!("Converted into {} blocks", document.len());
    Ok(document)
}

/// Determine the path for an output file, creating the output directory if needed.
fn get_output_path(output_dir: Option<&Path>, file_name: &str) -> Result<PathBuf> {
    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(file_name)
        }
        None => PathBuf::from(file_name),
    };

    Ok(output_path)
}

fn print_rule() {
    println!("{}", "=".repeat(BANNER_WIDTH));
}
