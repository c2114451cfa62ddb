//! p2mdump - Dump a pdf2msgpack stream as JSON or text
//!
//! A command line tool that decodes the stream written by pdf2msgpack and
//! prints the header and pages as JSON lines or as a readable summary.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use p2m_core::api::{PageIterator, ReadOptions, read_pages};
use p2m_core::{Meta, Page};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Output type for the decoded stream.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// One JSON object per line: the header, then each page (default)
    #[default]
    Json,
    /// Per-page summary followed by the page text
    Text,
}

/// Decode a pdf2msgpack stream and dump its contents.
#[derive(Parser, Debug)]
#[command(name = "p2mdump")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the stream, or "-" for stdin
    #[arg(default_value = "-")]
    file: String,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Only print the document metadata
    #[arg(long = "meta-only", action = ArgAction::SetTrue)]
    meta_only: bool,

    /// Inclusive one-based page range to print, like 1-10
    #[arg(long)]
    pages: Option<String>,

    /// The maximum number of pages to print (0 = no limit)
    #[arg(short = 'm', long, default_value = "0")]
    maxpages: usize,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "json")]
    output_type: OutputType,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header<'a> {
    version: i64,
    meta: &'a Meta,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_options(args: &Args) -> Result<ReadOptions> {
    let page_range = args
        .pages
        .as_deref()
        .map(ReadOptions::parse_page_range)
        .transpose()?;
    Ok(ReadOptions {
        page_range,
        maxpages: args.maxpages,
        meta_only: args.meta_only,
    })
}

fn write_meta_text<W: Write>(out: &mut W, version: i64, meta: &Meta) -> io::Result<()> {
    writeln!(out, "version: {version}")?;
    writeln!(out, "pages: {}", meta.pages)?;
    for (label, value) in [
        ("file name", Some(meta.file_name.as_str())),
        ("title", meta.title.as_deref()),
        ("author", meta.author.as_deref()),
        ("creator", Some(meta.creator.as_str())),
        ("producer", Some(meta.producer.as_str())),
    ] {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            writeln!(out, "{label}: {value}")?;
        }
    }
    for font in meta.fonts() {
        writeln!(
            out,
            "font: {} ({}, {}){}{}",
            font.name,
            font.font_type,
            font.encoding,
            if font.embedded { " embedded" } else { "" },
            if font.subset { " subset" } else { "" },
        )?;
    }
    Ok(())
}

fn write_page_text<W: Write>(out: &mut W, page: &Page) -> io::Result<()> {
    writeln!(
        out,
        "page {}: {}x{}, {} glyphs, {} paths",
        page.number,
        page.size.w,
        page.size.h,
        page.glyphs.len(),
        page.paths.len()
    )?;
    writeln!(out, "{}", page.text())
}

fn create_output(outfile: &str) -> Result<Box<dyn Write>> {
    if outfile == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(outfile)
        .with_context(|| format!("failed to create output file {outfile}"))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn dump<R: Read, W: Write>(
    mut pages: PageIterator<R>,
    out: &mut W,
    output_type: OutputType,
) -> Result<()> {
    let version = pages.version();
    match output_type {
        OutputType::Json => {
            serde_json::to_writer(
                &mut *out,
                &Header {
                    version,
                    meta: pages.meta(),
                },
            )?;
            writeln!(out)?;
        }
        OutputType::Text => write_meta_text(out, version, pages.meta())?,
    }

    for page in &mut pages {
        let page = page?;
        debug!(page = page.number, "writing page");
        match output_type {
            OutputType::Json => {
                serde_json::to_writer(&mut *out, &page)?;
                writeln!(out)?;
            }
            OutputType::Text => write_page_text(out, &page)?,
        }
    }

    out.flush()?;
    Ok(())
}

fn process<R: Read>(source: R, args: &Args, options: ReadOptions) -> Result<()> {
    let pages = read_pages(source, Some(options))?;
    info!(
        version = pages.version(),
        declared_pages = pages.meta().pages,
        "opened stream"
    );

    // Only touch the output once the header has decoded.
    let mut output = create_output(&args.outfile)?;
    dump(pages, &mut output, args.output_type)
}

fn run(args: &Args) -> Result<()> {
    let options = build_options(args)?;

    if args.file == "-" {
        process(io::stdin().lock(), args, options)
    } else {
        let path = PathBuf::from(&args.file);
        let file =
            File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
        process(file, args, options)
            .with_context(|| format!("error processing {}", path.display()))
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
