//! mdxml - Markdown to sectioned XML converter

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use mdxml::{Error, Section, parse_markdown, write_xml};

#[derive(Parser)]
#[command(name = "mdxml")]
#[command(version, about = "Convert Markdown files to XML format", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdxml input.md output.xml           Convert Markdown to XML
    mdxml docs/readme.md docs/readme.xml
    mdxml -i input.md                   Show parsed sections
    mdxml -i --json input.md            Show parsed sections as JSON")]
struct Cli {
    /// Input Markdown file (.md)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output XML file
    #[arg(value_name = "OUTPUT", required_unless_present = "info")]
    output: Option<String>,

    /// Show parsed sections without converting
    #[arg(short, long)]
    info: bool,

    /// Print sections as JSON (with --info)
    #[arg(long, requires = "info")]
    json: bool,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = if cli.info {
        show_info(&cli.input, cli.json)
    } else {
        let output = cli.output.as_deref().expect("output required");
        convert(&cli.input, output, cli.verbose, cli.quiet)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Check that the input path exists, is a regular file, and looks like Markdown.
fn validate_input(path: &str) -> Result<(), Error> {
    let p = Path::new(path);

    if !p.exists() {
        return Err(Error::InvalidInput(format!(
            "input file does not exist: {path}"
        )));
    }
    if !p.is_file() {
        return Err(Error::InvalidInput(format!(
            "input path is not a file: {path}"
        )));
    }

    let is_md = p
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    if !is_md {
        return Err(Error::UnsupportedFormat(format!(
            "input file must be a Markdown file (.md): {path}"
        )));
    }

    Ok(())
}

fn load_sections(path: &str) -> Result<Vec<Section>, Error> {
    validate_input(path)?;
    let text = std::fs::read_to_string(path)?;
    parse_markdown(&text)
}

fn show_info(path: &str, json: bool) -> Result<(), Error> {
    let sections = load_sections(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&sections).expect("sections serialize"));
        return Ok(());
    }

    println!("File: {path}");
    println!("Sections: {}", sections.len());
    for (i, section) in sections.iter().enumerate() {
        println!(
            "  Section {}: Level {} - '{}'",
            i + 1,
            section.level(),
            section.heading()
        );
    }

    Ok(())
}

fn convert(input: &str, output: &str, verbose: bool, quiet: bool) -> Result<(), Error> {
    let sections = load_sections(input)?;
    if verbose {
        println!("Found {} sections in {input}", sections.len());
        for (i, section) in sections.iter().enumerate() {
            println!(
                "  Section {}: Level {} - '{}'",
                i + 1,
                section.level(),
                section.heading()
            );
        }
    }

    write_xml(&sections, output)?;
    if verbose {
        println!("XML written to: {output}");
    }

    if !quiet {
        println!(
            "Success: Converted {} sections from '{input}' to '{output}'",
            sections.len()
        );
    }

    Ok(())
}
