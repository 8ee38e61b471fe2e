//! asciiframe library crate.
//!
//! Converts decoded RGBA rasters into ASCII text art. The conversion
//! pipeline lives in [`engine`]; [`worker`] adds a debounced background
//! thread for interactive callers and [`frames`] converts whole frame
//! sequences with progress reporting.

pub mod cli;
pub mod config;
pub mod engine;
pub mod export;
pub mod frames;
pub mod raster;
pub mod worker;
