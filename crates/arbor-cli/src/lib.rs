//! CLI logic for the Arbor outline diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Read},
};

use log::info;

use arbor::{ArborError, DiagramBuilder, SYNTAX_REFERENCE};

/// Input path that selects standard input.
const STDIN_PATH: &str = "-";

/// Run the Arbor CLI application
///
/// Reads the outline, renders it to SVG and writes the result to the output
/// file. With `--syntax` only the syntax reference is printed.
///
/// # Errors
///
/// Returns `ArborError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Outlines that cannot be parsed, even after normalization
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ArborError> {
    if args.syntax {
        print!("{SYNTAX_REFERENCE}");
        return Ok(());
    }

    let input = args.input.as_deref().unwrap_or(STDIN_PATH);
    info!(
        input_path = input,
        output_path = args.output;
        "Processing outline"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let source = read_input(input)?;

    let builder = DiagramBuilder::new(app_config);
    let outline = builder.parse(&source)?;
    if outline.was_normalized() {
        info!("Input was rewritten into outline syntax");
    }
    let svg = builder.render_svg(&outline)?;

    fs::write(&args.output, svg)?;

    if let Some(path) = &args.emit_outline {
        fs::write(path, outline.source())?;
        info!(outline_file = path; "Outline text written");
    }

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

fn read_input(input: &str) -> io::Result<String> {
    if input == STDIN_PATH {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}
