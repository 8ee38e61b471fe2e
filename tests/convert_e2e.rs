//! End-to-end conversion tests: raster in, text/markup out.

use std::sync::Arc;

use asciiframe::engine::{self, charset, grid_rows, ConvertOptions, DitherMode, Rendered};
use asciiframe::export;
use asciiframe::frames;
use asciiframe::raster::Raster;
use asciiframe::worker::ConvertWorker;

/// Fill a raster with one solid RGBA color.
fn solid_raster(width: u32, height: u32, rgba: [u8; 4]) -> Raster {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..width * height {
        data.extend_from_slice(&rgba);
    }
    Raster::from_rgba(width, height, data).unwrap()
}

/// Left half one color, right half another.
fn split_raster(width: u32, height: u32, left: [u8; 4], right: [u8; 4]) -> Raster {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..height {
        for x in 0..width {
            data.extend_from_slice(if x < width / 2 { &left } else { &right });
        }
    }
    Raster::from_rgba(width, height, data).unwrap()
}

fn options(columns: u32, charset: &str) -> ConvertOptions {
    ConvertOptions {
        columns,
        charset: charset.to_string(),
        ..ConvertOptions::default()
    }
}

// ==================== Basic Conversion Tests ====================

#[test]
fn test_white_square_maps_to_densest_glyph() {
    let raster = solid_raster(2, 2, [255, 255, 255, 255]);
    let rendered = engine::convert(&raster, &options(2, "@ "));
    assert_eq!(rendered.text(), "@@\n");
}

#[test]
fn test_black_square_maps_to_sparsest_glyph() {
    let raster = solid_raster(2, 2, [0, 0, 0, 255]);
    let rendered = engine::convert(&raster, &options(2, "@ "));
    assert_eq!(rendered.text(), "  \n");
}

#[test]
fn test_output_shape_matches_grid_rows() {
    for (w, h, columns) in [(100, 100, 40), (320, 240, 60), (30, 200, 10), (640, 64, 12)] {
        let raster = solid_raster(w, h, [128, 128, 128, 255]);
        let rendered = engine::convert(&raster, &options(columns, charset::STANDARD));
        let lines: Vec<&str> = rendered.text().lines().collect();

        let expected_rows = grid_rows(w, h, columns) as usize;
        assert_eq!(lines.len(), expected_rows, "{w}x{h} at {columns} columns");
        for line in lines {
            assert_eq!(line.chars().count(), columns as usize);
        }
        assert!(rendered.text().ends_with('\n'));
    }
}

#[test]
fn test_empty_charset_yields_empty_output() {
    let raster = solid_raster(4, 4, [128, 128, 128, 255]);

    let rendered = engine::convert(&raster, &options(4, ""));
    assert_eq!(rendered, Rendered::Text(String::new()));

    let mut opts = options(4, "");
    opts.color = true;
    let rendered = engine::convert(&raster, &opts);
    assert_eq!(rendered.text(), "");
    assert_eq!(rendered.markup(), Some(""));
}

#[test]
fn test_invert_flips_extremes() {
    let raster = solid_raster(2, 2, [255, 255, 255, 255]);
    let mut opts = options(2, "@ ");
    opts.invert = true;
    let rendered = engine::convert(&raster, &opts);
    assert_eq!(rendered.text(), "  \n");
}

#[test]
fn test_named_charset_resolution_happens_before_convert() {
    // The engine takes resolved glyph strings; "blocks" as a literal would
    // be a 6-glyph custom set, resolve() is the caller's job
    let raster = solid_raster(2, 2, [255, 255, 255, 255]);
    let rendered = engine::convert(&raster, &options(2, charset::resolve("blocks")));
    assert_eq!(rendered.text(), "██\n");
}

// ==================== Dither Pipeline Tests ====================

#[test]
fn test_dither_modes_keep_output_shape() {
    let raster = split_raster(40, 40, [30, 30, 30, 255], [220, 220, 220, 255]);
    for dither in [
        DitherMode::None,
        DitherMode::Ordered,
        DitherMode::Floyd,
        DitherMode::Atkinson,
        DitherMode::Stucki,
        DitherMode::Sierra,
    ] {
        let mut opts = options(20, charset::SIMPLE);
        opts.dither = dither;
        let rendered = engine::convert(&raster, &opts);
        let lines: Vec<&str> = rendered.text().lines().collect();
        assert_eq!(lines.len(), 10, "{} changed row count", dither.name());
        assert!(lines.iter().all(|l| l.chars().count() == 20));
    }
}

#[test]
fn test_ordered_dither_breaks_up_mid_gray() {
    let raster = solid_raster(16, 16, [128, 128, 128, 255]);
    let mut opts = options(8, "@ ");
    opts.dither = DitherMode::Ordered;
    let rendered = engine::convert(&raster, &opts);
    let body: String = rendered.text().chars().filter(|&c| c != '\n').collect();
    // Mid gray with 2 levels becomes a mix of both glyphs, not a flat field
    assert!(body.contains('@'));
    assert!(body.contains(' '));
}

// ==================== Edge Mode Tests ====================

#[test]
fn test_edges_flat_image_goes_dark() {
    // No gradients anywhere: edge magnitude 0, everything maps to space
    let raster = solid_raster(20, 20, [200, 200, 200, 255]);
    let mut opts = options(10, "@ ");
    opts.edges = true;
    let rendered = engine::convert(&raster, &opts);
    let body: String = rendered.text().chars().filter(|&c| c != '\n').collect();
    assert!(body.chars().all(|c| c == ' '));
}

#[test]
fn test_edges_contrast_seam_lights_up() {
    let raster = split_raster(40, 40, [0, 0, 0, 255], [255, 255, 255, 255]);
    let mut opts = options(20, "@ ");
    opts.edges = true;
    let rendered = engine::convert(&raster, &opts);
    assert!(rendered.text().contains('@'), "seam produced no edge glyphs");
}

#[test]
fn test_edges_do_not_touch_color_markup() {
    let raster = split_raster(40, 40, [255, 0, 0, 255], [0, 0, 255, 255]);
    let mut with_edges = options(20, charset::SIMPLE);
    with_edges.color = true;
    with_edges.edges = true;
    let mut without_edges = with_edges.clone();
    without_edges.edges = false;

    let a = engine::convert(&raster, &with_edges);
    let b = engine::convert(&raster, &without_edges);

    // Same colors appear in both markups even though the glyphs differ
    assert!(a.markup().unwrap().contains("rgb(255,0,0)"));
    assert!(a.markup().unwrap().contains("rgb(0,0,255)"));
    assert!(b.markup().unwrap().contains("rgb(255,0,0)"));
}

// ==================== Color Markup Tests ====================

#[test]
fn test_color_halves_produce_two_runs_per_row() {
    let raster = split_raster(8, 4, [255, 0, 0, 255], [0, 0, 255, 255]);
    let mut opts = options(4, "@");
    opts.color = true;
    let rendered = engine::convert(&raster, &opts);

    let markup = rendered.markup().unwrap();
    for line in markup.lines() {
        assert_eq!(line.matches("<span").count(), 2, "line: {line}");
        assert_eq!(line.matches("</span>").count(), 2);
    }
    assert!(markup.contains("<span style=\"color:rgb(255,0,0)\">@@</span>"));
    assert!(markup.contains("<span style=\"color:rgb(0,0,255)\">@@</span>"));
}

#[test]
fn test_color_text_grid_matches_plain_conversion() {
    let raster = split_raster(16, 16, [40, 40, 40, 255], [230, 230, 230, 255]);
    let plain = engine::convert(&raster, &options(8, charset::STANDARD));
    let mut opts = options(8, charset::STANDARD);
    opts.color = true;
    let colored = engine::convert(&raster, &opts);
    assert_eq!(plain.text(), colored.text());
}

#[test]
fn test_color_markup_escapes_glyphs() {
    let raster = solid_raster(4, 4, [255, 255, 255, 255]);
    let mut opts = options(2, "<");
    opts.color = true;
    let rendered = engine::convert(&raster, &opts);
    assert_eq!(rendered.text(), "<<\n");
    assert!(rendered.markup().unwrap().contains("&lt;&lt;"));
    assert!(!rendered.markup().unwrap().contains("><<"));
}

#[test]
fn test_saturation_zero_makes_monochrome_markup() {
    let raster = split_raster(8, 8, [255, 0, 0, 255], [0, 255, 0, 255]);
    let mut opts = options(4, "@");
    opts.color = true;
    opts.saturation = 0.0;
    let rendered = engine::convert(&raster, &opts);
    // Every rgb() triple has equal components
    for piece in rendered.markup().unwrap().split("rgb(").skip(1) {
        let triple: Vec<u32> = piece
            .split(')')
            .next()
            .unwrap()
            .split(',')
            .map(|c| c.parse().unwrap())
            .collect();
        assert_eq!(triple[0], triple[1]);
        assert_eq!(triple[1], triple[2]);
    }
}

// ==================== Worker Tests ====================

#[test]
fn test_worker_round_trip_matches_engine() {
    let raster = Arc::new(split_raster(32, 32, [0, 0, 0, 255], [255, 255, 255, 255]));
    let opts = options(16, charset::STANDARD);
    let direct = engine::convert(&raster, &opts);

    let worker = ConvertWorker::spawn();
    worker.submit(raster, opts).unwrap();
    assert_eq!(worker.recv().unwrap(), direct);
}

#[test]
fn test_worker_survives_many_submissions() {
    let worker = ConvertWorker::spawn();
    let raster = Arc::new(solid_raster(4, 4, [255, 255, 255, 255]));
    for columns in 1..=10 {
        worker.submit(raster.clone(), options(columns, "@ ")).unwrap();
    }
    // A burst coalesces; the reply reflects the last submission
    let rendered = worker.recv().unwrap();
    let first_line = rendered.text().lines().next().unwrap();
    assert_eq!(first_line.chars().count(), 10);
}

// ==================== Frame Batch Tests ====================

#[test]
fn test_frame_batch_converts_in_order() {
    let frames: Vec<Raster> = (0..4)
        .map(|i| solid_raster(2, 2, [i * 80, i * 80, i * 80, 255]))
        .collect();
    let opts = options(2, "@ ");

    let mut progress = Vec::new();
    let results = frames::convert_all(&frames, &opts, |done, total| progress.push((done, total)));

    assert_eq!(results.len(), 4);
    assert_eq!(progress, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    // Frame 0 is black, frame 3 is bright
    assert_eq!(results[0].text(), "  \n");
    assert_eq!(results[3].text(), "@@\n");
}

// ==================== Export Tests ====================

#[test]
fn test_export_text_writes_grid_verbatim() {
    let raster = solid_raster(2, 2, [255, 255, 255, 255]);
    let rendered = engine::convert(&raster, &options(2, "@ "));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    export::write_text(&path, &rendered).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "@@\n");
}

#[test]
fn test_export_markup_wraps_html_document() {
    let raster = split_raster(4, 4, [255, 0, 0, 255], [0, 0, 255, 255]);
    let mut opts = options(2, "@");
    opts.color = true;
    let rendered = engine::convert(&raster, &opts);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.html");
    export::write_markup(&path, &rendered).unwrap();

    let doc = std::fs::read_to_string(&path).unwrap();
    assert!(doc.starts_with("<!doctype html>"));
    assert!(doc.contains(rendered.markup().unwrap()));
}
