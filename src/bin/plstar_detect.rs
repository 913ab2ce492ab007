use plstar_detector::config::detect::{self, InputMode};
use plstar_detector::edges::edge_map;
use plstar_detector::image::io::{load_grayscale_image, save_mask_png, write_json_file};
use plstar_detector::image::ImageF32;
use plstar_detector::mask::BinaryMask;
use plstar_detector::StarDetector;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = detect::load_config(Path::new(&config_path))?;

    let detector = StarDetector::new(config.params.clone()).map_err(|e| e.to_string())?;
    let image = load_grayscale_image(&config.input)?;
    let view = image.as_view();

    let report = match config.mode {
        InputMode::Mask => detector.detect_bytes(view),
        InputMode::Edges => detector.detect_grayscale(view),
    }
    .map_err(|e| format!("Detection failed on {}: {e}", config.input.display()))?;

    write_json_file(&config.output.report_json, &report)?;
    println!("{}", report.summary());
    for (i, star) in report.stars.iter().enumerate() {
        println!(
            "  star {i}: center=({:.1}, {:.1}) directions={} complete_spokes={}",
            star.center.x, star.center.y, star.supported_directions, star.complete_spokes
        );
    }
    println!("Saved report to {}", config.output.report_json.display());

    if let Some(path) = &config.output.skeleton_image {
        let line_mask = match config.mode {
            InputMode::Mask => {
                let mask = BinaryMask::from_u8(view, config.params.preprocess.threshold)
                    .map_err(|e| e.to_string())?;
                detector.preprocess_mask(&mask).skeleton
            }
            InputMode::Edges => edge_map(&ImageF32::from_u8(view), &config.params.edges),
        };
        save_mask_png(&line_mask, path)?;
        println!("Saved line mask to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: plstar_detect <config.json>".to_string()
}
