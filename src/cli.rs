//! CLI argument parsing with clap, plus subcommand handlers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{default_path, DEFAULT_CONFIG};
use crate::engine::charset::NAMED_SETS;

/// Parse and validate a positive column count.
fn parse_columns(s: &str) -> Result<u32, String> {
    let columns: u32 = s.parse().map_err(|_| format!("'{s}' is not a valid number"))?;
    if columns == 0 {
        return Err("Columns must be greater than 0".to_string());
    }
    Ok(columns)
}

/// Parse and validate a non-negative adjustment scalar.
fn parse_scalar(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("'{s}' is not a valid number"))?;
    if !(0.0..=10.0).contains(&value) {
        return Err(format!("Value must be between 0.0 and 10.0, got {value}"));
    }
    Ok(value)
}

/// Convert images and frame sequences to ASCII text art
#[derive(Parser, Debug)]
#[command(name = "asciiframe")]
#[command(version, about = "Image and frame-sequence to ASCII art converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Convert a photo at 80 columns
    asciiframe photo.png --columns 80

    # Block glyphs with ordered dithering
    asciiframe photo.png --charset blocks --dither ordered

    # Color HTML output
    asciiframe photo.png --color --html out.html

    # Convert every frame in a directory
    asciiframe frames ./frames ./out --columns 100

    # List the built-in character sets
    asciiframe charsets")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input image path (PNG, JPEG, BMP, GIF)
    pub input: Option<PathBuf>,

    /// Output width in character cells
    #[arg(long, value_parser = parse_columns)]
    pub columns: Option<u32>,

    /// Character set name (standard, simple, blocks, binary, matrix,
    /// edges) or a literal glyph string, densest first
    #[arg(long)]
    pub charset: Option<String>,

    /// Dithering: none, ordered, floyd, atkinson, stucki, sierra
    #[arg(long)]
    pub dither: Option<String>,

    /// Invert brightness (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// Brightness scalar (1.0 = neutral)
    #[arg(long, value_parser = parse_scalar)]
    pub brightness: Option<f32>,

    /// Contrast scalar (1.0 = neutral)
    #[arg(long, value_parser = parse_scalar)]
    pub contrast: Option<f32>,

    /// Gamma (1.0 = neutral)
    #[arg(long, value_parser = parse_scalar)]
    pub gamma: Option<f32>,

    /// Saturation scalar for color mode (1.0 = neutral)
    #[arg(long, value_parser = parse_scalar)]
    pub saturation: Option<f32>,

    /// Replace tone with Sobel edge magnitude
    #[arg(long)]
    pub edges: bool,

    /// Emit per-run color markup alongside the text grid
    #[arg(long)]
    pub color: bool,

    /// Write the text grid to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write the color markup as an HTML document (requires --color)
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List built-in character sets
    Charsets,
    /// Convert every image in a directory
    Frames {
        /// Directory of input frames, processed in filename order
        input: PathBuf,
        /// Directory for the converted .txt frames
        output: PathBuf,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

/// List built-in character sets and print them to stdout.
pub fn list_charsets() {
    println!("Built-in character sets (densest glyph first):");
    for (name, glyphs) in NAMED_SETS {
        println!("  {name:<10} \"{glyphs}\"");
    }
    println!();
    println!("Use --charset <name> or pass a literal glyph string.");
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction) {
    match action {
        ConfigAction::Show => {
            let config_path = default_path();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
                match std::fs::read_to_string(&config_path) {
                    Ok(content) => {
                        println!();
                        print!("{content}");
                    }
                    Err(e) => {
                        eprintln!("Error reading config file: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                println!("Config file: {} (not found)", config_path.display());
                println!("Run 'asciiframe config init' to create it.");
            }
        }
        ConfigAction::Init => {
            let config_path = default_path();

            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'asciiframe config show' to view current settings.");
                std::process::exit(1);
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {e}");
                    std::process::exit(1);
                }
            }

            if let Err(e) = std::fs::write(&config_path, DEFAULT_CONFIG) {
                eprintln!("Error writing config file: {e}");
                std::process::exit(1);
            }

            println!("Created config file: {}", config_path.display());
        }
    }
}
