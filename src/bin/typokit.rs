//! Typokit CLI - punctuation converter and HTML table generator

#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, BufRead, Read, Write};
#[cfg(feature = "cli")]
use std::process;
#[cfg(feature = "cli")]
use tracing::{debug, info};
#[cfg(feature = "cli")]
use tracing_subscriber::filter::LevelFilter;
#[cfg(feature = "cli")]
use typokit::{
    count_glyphs,
    table::{parse_dimension, parse_merge_region, MergeInput, END_OF_REGIONS},
    translate, AlignMode, ConversionError, ConversionResult, MergeRegion, TableOptions, TableSpec,
};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "typokit")]
#[command(version)]
#[command(about = "Typokit - CJK punctuation converter and HTML table generator", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert full-width punctuation to ASCII
    Punct {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate an HTML table with merged cells
    Table {
        /// Number of rows
        #[arg(short, long, required_unless_present = "interactive")]
        rows: Option<usize>,

        /// Number of columns
        #[arg(short, long, required_unless_present = "interactive")]
        cols: Option<usize>,

        /// Text alignment: left, center, right (or 1, 2, 3)
        #[arg(short, long, default_value = "center", value_parser = parse_align)]
        align: AlignMode,

        /// Merge region as [(r1,c1),(r2,c2)]; repeat for several regions
        #[arg(short, long = "merge", value_name = "REGION", value_parser = parse_region)]
        merges: Vec<MergeRegion>,

        /// Ask for the table layout on the terminal
        #[arg(short, long, conflicts_with_all = ["rows", "cols", "align", "merges"])]
        interactive: bool,

        /// Emit the table on a single line
        #[arg(long)]
        compact: bool,

        /// Spaces per indentation level
        #[arg(long, default_value_t = 4, conflicts_with = "compact")]
        indent: usize,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_tracing(determine_log_level(cli.verbose, cli.quiet));

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn determine_log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(feature = "cli")]
fn init_tracing(level: LevelFilter) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

#[cfg(feature = "cli")]
fn run(command: Commands) -> ConversionResult<()> {
    match command {
        Commands::Punct { input, output } => {
            let content = read_input(input.as_deref())?;
            let converted = translate(&content);
            info!(
                glyphs = count_glyphs(&content),
                bytes_in = content.len(),
                bytes_out = converted.len(),
                "converted punctuation"
            );
            write_output(output.as_deref(), &converted, false)?;
        }

        Commands::Table {
            rows,
            cols,
            align,
            merges,
            interactive,
            compact,
            indent,
            output,
        } => {
            let spec = if interactive {
                let stdin = io::stdin();
                let mut stderr = io::stderr();
                prompt_table_spec(&mut stdin.lock(), &mut stderr)?
            } else {
                TableSpec {
                    rows: rows.unwrap_or_default(),
                    cols: cols.unwrap_or_default(),
                    align,
                    merges,
                }
            };
            debug!(?spec, "table spec");

            let options = if compact {
                TableOptions::compact()
            } else {
                TableOptions::with_indent(indent)
            };
            let html = spec.generate(&options)?;
            write_output(output.as_deref(), &html, true)?;
        }

        Commands::Info => {
            println!("Typokit - CJK punctuation converter and HTML table generator");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Full-width punctuation → ASCII (12 glyphs)");
            println!("  ✓ HTML tables with rowspan/colspan merging");
            println!("  ✓ Region validation (bounds, overlap, single cells)");
            println!("  ✓ Interactive table prompt");
            println!();
        }
    }

    Ok(())
}

/// Read a whole file, or stdin when no path is given
#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> ConversionResult<String> {
    match path {
        Some(path) => {
            debug!(path, "reading input file");
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write to a file, or stdout when no path is given
#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str, trailing_newline: bool) -> ConversionResult<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            file.write_all(content.as_bytes())?;
            if trailing_newline {
                writeln!(file)?;
            }
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if trailing_newline {
                writeln!(stdout)?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn parse_align(s: &str) -> Result<AlignMode, String> {
    s.parse::<AlignMode>().map_err(|e| e.to_string())
}

#[cfg(feature = "cli")]
fn parse_region(s: &str) -> Result<MergeRegion, String> {
    match parse_merge_region(s) {
        Ok(MergeInput::Region(region)) => Ok(region),
        Ok(MergeInput::End) => Err(format!("'{}' is only meaningful at the prompt", s.trim())),
        Err(e) => Err(e.to_string()),
    }
}

/// Ask for rows, columns, alignment and merge regions, one answer per line
///
/// Invalid answers are reported and asked again. Regions are checked against
/// the table size and the regions already entered as soon as they are typed.
#[cfg(feature = "cli")]
fn prompt_table_spec<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> ConversionResult<TableSpec> {
    writeln!(out, "Table layout:")?;
    let rows = ask(input, out, "> Number of rows: ", parse_dimension)?;
    let cols = ask(input, out, "> Number of columns: ", parse_dimension)?;
    let align = ask(
        input,
        out,
        "> Alignment (1 = left, 2 = center, 3 = right): ",
        |s| s.parse::<AlignMode>(),
    )?;

    writeln!(
        out,
        "Enter each merged cell as [(r1,c1),(r2,c2)] (top-left and bottom-right unit cells), {} to finish:",
        END_OF_REGIONS
    )?;

    let mut spec = TableSpec::new(rows, cols, align);
    loop {
        let prompt = format!("> Merged cell {}: ", spec.merges.len() + 1);
        let answer = ask(input, out, &prompt, parse_merge_region)?;
        let MergeInput::Region(region) = answer else {
            break;
        };

        let candidate = spec.clone().merge(region);
        match candidate.validate() {
            Ok(()) => spec = candidate,
            Err(e) => writeln!(out, "  {}", e)?,
        }
    }

    writeln!(out, "Regions: {}", format_regions(&spec.merges))?;
    Ok(spec)
}

/// Prompt until `parse` accepts a line
#[cfg(feature = "cli")]
fn ask<R, W, T, F>(input: &mut R, out: &mut W, prompt: &str, parse: F) -> ConversionResult<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> ConversionResult<T>,
{
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(ConversionError::invalid("input ended before the table was complete"));
        }

        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => writeln!(out, "  {}", e)?,
        }
    }
}

#[cfg(feature = "cli")]
fn format_regions(regions: &[MergeRegion]) -> String {
    let items: Vec<String> = regions.iter().map(|r| r.to_string()).collect();
    format!("[{}]", items.join(","))
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install typokit --features cli");
    eprintln!("  typokit <COMMAND> [OPTIONS]");
}
