//! Writers for conversion output.
//!
//! Plain text goes to `.txt` files as-is; the color markup grid is wrapped
//! in a minimal monospace HTML document so a browser renders the runs in
//! color. Rasterizing text back to pixels (PNG and friends) is the job of
//! external exporters, not this crate.

use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::engine::Rendered;

/// Errors writing output files.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Asked for a markup export from a conversion without color mode.
    #[error("conversion has no color markup; re-run with color mode enabled")]
    NoMarkup,
}

/// Write the plain text grid to a file.
pub fn write_text(path: &Path, rendered: &Rendered) -> Result<(), ExportError> {
    std::fs::write(path, rendered.text()).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote text grid to {}", path.display());
    Ok(())
}

/// Write the color markup grid as a standalone HTML document.
pub fn write_markup(path: &Path, rendered: &Rendered) -> Result<(), ExportError> {
    let markup = rendered.markup().ok_or(ExportError::NoMarkup)?;
    std::fs::write(path, html_document(markup)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote markup grid to {}", path.display());
    Ok(())
}

/// Wrap a markup grid in a minimal dark-background monospace page.
fn html_document(markup: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"></head>\n\
         <body style=\"background:#000;margin:0\">\n\
         <pre style=\"font:12px/1.15 monospace;margin:0;padding:10px\">\n\
         {markup}</pre>\n</body>\n</html>\n"
    )
}
