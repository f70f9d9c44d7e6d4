//! Command-line interface implementation

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::encoder::{encode_sprite, TARGET_H, TARGET_W};
use crate::loader::{load_grid, LoadError};
use crate::output::{resolve_output_path, write_literal};
use crate::palette::PaletteMap;
use crate::picker::{list_csv_files, prompt_choice};
use crate::vhdl::{render_literal, LiteralStyle};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Largest accepted canvas edge. Far beyond any real sprite, but small
/// enough that the output stays allocatable.
const MAX_CANVAS: i64 = 4096;

/// csv2vhdl - Convert CSV sprite grids of palette indices to VHDL constants
#[derive(Parser)]
#[command(name = "csv2vhdl")]
#[command(about = "Convert CSV sprite grids of palette indices to VHDL constants")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a CSV grid to a VHDL array-constant literal
    Convert {
        /// Input CSV file, or a directory to pick a CSV from interactively
        input: PathBuf,

        /// Output file or directory. If omitted, the literal is printed
        /// to standard output
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Canvas width in cells
        #[arg(long, default_value_t = TARGET_W as u32, value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS))]
        width: u32,

        /// Canvas height in cells
        #[arg(long, default_value_t = TARGET_H as u32, value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS))]
        height: u32,

        /// Strict mode: treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// JSON file with a custom token -> 4-bit code mapping table
        #[arg(long)]
        mapping: Option<PathBuf>,

        /// Name of the generated VHDL constant
        #[arg(long, default_value = "SPRITE")]
        name: String,

        /// VHDL type of the generated constant
        #[arg(long = "type", default_value = "sprite_t")]
        type_name: String,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            width,
            height,
            strict,
            mapping,
            name,
            type_name,
        } => {
            let style = LiteralStyle {
                constant: name,
                type_name,
            };
            run_convert(
                &input,
                output.as_deref(),
                width as usize,
                height as usize,
                strict,
                mapping.as_deref(),
                &style,
            )
        }
    }
}

/// Execute the convert command
fn run_convert(
    input: &Path,
    output: Option<&Path>,
    width: usize,
    height: usize,
    strict: bool,
    mapping: Option<&Path>,
    style: &LiteralStyle,
) -> ExitCode {
    // A directory input means: show the picker menu
    let input = if input.is_dir() {
        match pick_from_directory(input) {
            Ok(Some(path)) => path,
            Ok(None) => return ExitCode::from(EXIT_INVALID_ARGS),
            Err(e) => {
                eprintln!("Error: Cannot list '{}': {}", input.display(), e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    } else {
        input.to_path_buf()
    };

    // Mapping table: custom file or the canonical 16 entries
    let palette = match mapping {
        Some(path) => match PaletteMap::from_json_file(path) {
            Ok(palette) => palette,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        },
        None => PaletteMap::default(),
    };

    // Load the raw grid
    let grid = match load_grid(&input) {
        Ok(grid) => grid,
        Err(e @ LoadError::SourceUnavailable { .. }) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        Err(e @ LoadError::MalformedSource { .. }) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Encode: total, but may report lossy cells
    let (sprite, warnings) = encode_sprite(&grid, &palette, width, height);

    // In strict mode, warnings are fatal before anything is written
    if strict && !warnings.is_empty() {
        for warning in &warnings {
            eprintln!("Error: {}", warning.message);
        }
        return ExitCode::from(EXIT_ERROR);
    }

    let text = render_literal(&sprite, style);

    let output_path = resolve_output_path(&input, output);
    if let Err(e) = write_literal(&text, output_path.as_deref()) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }
    if let Some(path) = &output_path {
        println!("Saved: {}", path.display());
    }

    // Print warnings to stderr (in lenient mode)
    for warning in &warnings {
        eprintln!("Warning: {}", warning.message);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// List the directory's CSV files and ask the user to pick one.
fn pick_from_directory(dir: &Path) -> io::Result<Option<PathBuf>> {
    let files = list_csv_files(dir)?;
    if files.is_empty() {
        eprintln!("Error: No .csv files found in '{}'", dir.display());
        return Ok(None);
    }

    let stdin = io::stdin();
    let stderr = io::stderr();
    let picked = prompt_choice(&files, stdin.lock(), stderr.lock())?;

    match picked {
        Some(path) => {
            eprintln!("Using file: {}", path.display());
            Ok(Some(path))
        }
        None => {
            eprintln!("Error: Invalid selection.");
            Ok(None)
        }
    }
}
