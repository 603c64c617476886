//! etchr - README section tool

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use etchr::notebook::normalize_file_content;
use etchr::{Document, estimate_tokens, unique_slugs, validate_section_content};

#[derive(Parser)]
#[command(name = "etchr")]
#[command(version, about = "README section tool", long_about = None)]
#[command(after_help = "EXAMPLES:
    etchr README.md out.md      Normalize a README through the section model
    etchr -i README.md          Show the section outline and token estimate
    etchr --json README.md      Print the section list as JSON
    etchr --check body.md       Verify a fragment contains no headings")]
struct Cli {
    /// Input file (markdown or Jupyter notebook)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file for the recompiled document
    #[arg(value_name = "OUTPUT", required_unless_present_any = ["info", "json", "check"])]
    output: Option<String>,

    /// Show the section outline without writing anything
    #[arg(short, long)]
    info: bool,

    /// Print the section list as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Check that the input contains no section headings
    #[arg(long)]
    check: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = if cli.check {
        check_fragment(&cli.input)
    } else if cli.info {
        show_outline(&cli.input)
    } else if cli.json {
        dump_json(&cli.input)
    } else {
        let output = cli.output.expect("output required");
        normalize(&cli.input, &output, cli.quiet)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load(path: &str) -> Result<Document, String> {
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let content = normalize_file_content(&raw);
    Ok(Document::parse(&content))
}

fn normalize(input: &str, output: &str, quiet: bool) -> Result<(), String> {
    let doc = load(input)?;
    if doc.is_empty() {
        return Err(format!("no sections found in {input}"));
    }

    let mut compiled = doc.compile();
    compiled.push('\n');
    fs::write(output, compiled).map_err(|e| e.to_string())?;

    if !quiet {
        println!("{input} -> {output} ({} sections)", doc.len());
    }
    Ok(())
}

fn show_outline(path: &str) -> Result<(), String> {
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let content = normalize_file_content(&raw);
    let doc = Document::parse(&content);

    println!("File: {path}");
    println!("Sections: {}", doc.len());
    let slugs = unique_slugs(doc.sections());
    for (section, slug) in doc.sections().iter().zip(&slugs) {
        let indent = "  ".repeat(section.level.depth() - 1);
        println!("  {indent}{} {} (#{slug})", section.level.marker(), section.title);
    }
    println!("Tokens: ~{}", estimate_tokens(&content));

    Ok(())
}

fn dump_json(path: &str) -> Result<(), String> {
    let doc = load(path)?;
    let json = serde_json::to_string_pretty(doc.sections()).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn check_fragment(path: &str) -> Result<(), String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    if validate_section_content(&content) {
        println!("{path}: no section headings");
        Ok(())
    } else {
        Err(format!("{path}: contains section headings"))
    }
}
