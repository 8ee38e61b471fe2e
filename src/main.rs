use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info};

use asciiframe::cli::{self, Args, Command};
use asciiframe::config::Config;
use asciiframe::engine::{self, charset, ConvertOptions, DitherMode};
use asciiframe::export;
use asciiframe::frames;
use asciiframe::raster::Raster;

/// Merge settings: CLI args > config file > built-in defaults.
fn merge_options(args: &Args, config: &Config) -> ConvertOptions {
    let base = config.base_options();
    ConvertOptions {
        columns: args.columns.unwrap_or(base.columns),
        charset: args
            .charset
            .as_deref()
            .map(|name| charset::resolve(name).to_string())
            .unwrap_or(base.charset),
        dither: args
            .dither
            .as_deref()
            .map(DitherMode::from_name)
            .unwrap_or(base.dither),
        invert: args.invert || base.invert,
        brightness: args.brightness.unwrap_or(base.brightness),
        contrast: args.contrast.unwrap_or(base.contrast),
        gamma: args.gamma.unwrap_or(base.gamma),
        saturation: args.saturation.unwrap_or(base.saturation),
        edges: args.edges || base.edges,
        color: args.color || base.color,
    }
}

/// Decode an image file into an RGBA raster.
fn load_raster(path: &Path) -> Result<Raster, String> {
    let image = image::open(path)
        .map_err(|e| format!("Failed to read image '{}': {}", path.display(), e))?;
    Ok(Raster::from(image.to_rgba8()))
}

/// Image files in a directory, sorted by filename for stable frame order.
fn list_frame_paths(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory '{}': {}", dir.display(), e))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("png" | "jpg" | "jpeg" | "bmp" | "gif")
            )
        })
        .collect();
    paths.sort();
    Ok(paths)
}

/// Convert one image and write or print the result.
fn run_convert(input: &Path, args: &Args, options: &ConvertOptions) -> Result<(), String> {
    let raster = load_raster(input)?;
    debug!(
        "loaded {}x{} raster from {}",
        raster.width,
        raster.height,
        input.display()
    );

    let rendered = engine::convert(&raster, options);

    if let Some(ref html_path) = args.html {
        export::write_markup(html_path, &rendered).map_err(|e| e.to_string())?;
    }

    match args.output {
        Some(ref path) => export::write_text(path, &rendered).map_err(|e| e.to_string())?,
        None => {
            // Only print to stdout when no file output was requested
            if args.html.is_none() {
                print!("{}", rendered.text());
            }
        }
    }
    Ok(())
}

/// Convert every image in a directory to numbered .txt frames.
fn run_frames(input: &Path, output: &Path, options: &ConvertOptions) -> Result<(), String> {
    let paths = list_frame_paths(input)?;
    if paths.is_empty() {
        return Err(format!("No image files found in '{}'", input.display()));
    }

    std::fs::create_dir_all(output)
        .map_err(|e| format!("Failed to create output directory '{}': {}", output.display(), e))?;

    let mut decoded = Vec::with_capacity(paths.len());
    for path in &paths {
        decoded.push(load_raster(path)?);
    }

    let results = frames::convert_all(&decoded, options, |done, total| {
        info!("converted frame {done}/{total}");
        eprint!("\rConverting frame {done}/{total}");
    });
    eprintln!();

    for (i, rendered) in results.iter().enumerate() {
        let path = output.join(format!("frame_{i:05}.txt"));
        export::write_text(&path, rendered).map_err(|e| e.to_string())?;
    }

    if results.len() < paths.len() {
        println!(
            "Interrupted: wrote {}/{} frames to {}",
            results.len(),
            paths.len(),
            output.display()
        );
    } else {
        println!("Wrote {} frames to {}", results.len(), output.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Some(Command::Charsets) => {
            cli::list_charsets();
            return;
        }
        Some(Command::Config { ref action }) => {
            cli::handle_config_action(action.clone());
            return;
        }
        _ => {}
    }

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let options = merge_options(&args, &config);

    if let Err(e) = frames::setup_ctrlc_handler() {
        eprintln!("Warning: Could not set up Ctrl+C handler: {e}");
    }

    let result = match args.command {
        Some(Command::Frames {
            ref input,
            ref output,
        }) => run_frames(input, output, &options),
        _ => match args.input {
            Some(ref input) => run_convert(input, &args, &options),
            None => Err("No input image provided".to_string()),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
