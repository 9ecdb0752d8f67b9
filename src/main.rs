use boxpaint::{parse_document, PipelineBuilder, PipelineError};
use std::env;
use std::fs;

/// Renders a JSON box description to PDF.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Paints a JSON box tree description to a PDF file.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/boxes.json> <path/to/output.pdf> [path/to/paint-config.json]",
            args[0]
        );
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];

    let mut builder = PipelineBuilder::new();
    if let Some(config_path) = args.get(3) {
        println!("Loading paint config from {}", config_path);
        builder = builder.with_paint_config_json(&fs::read_to_string(config_path)?)?;
    }

    println!("Loading boxes from {}", input_path);
    let pages = parse_document(&fs::read_to_string(input_path)?)?;

    println!("Generating PDF to {}...", output_path);
    builder.build().generate_to_file(&pages, output_path)?;

    println!("Successfully generated {}", output_path);
    Ok(())
}
