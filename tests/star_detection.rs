mod common;

use common::synthetic_mask::{dist, draw_star, star_mask, to_gray};
use plstar_detector::diagnostics::FrontEnd;
use plstar_detector::image::{ImageF32, ImageU8};
use plstar_detector::lines::HoughOptions;
use plstar_detector::{BinaryMask, DetectorParams, SpokeDirection, StarDetector};

fn params() -> DetectorParams {
    DetectorParams {
        hough: HoughOptions {
            threshold: 30,
            min_line_length: 20.0,
            max_line_gap: 5,
            ..HoughOptions::default()
        },
        ..DetectorParams::default()
    }
}

fn detector() -> StarDetector {
    let _ = env_logger::builder().is_test(true).try_init();
    StarDetector::new(params()).unwrap()
}

#[test]
fn single_star_is_found_with_all_spokes() {
    let center = [100.0, 100.0];
    let mask = star_mask(200, 200, center, 60.0, 3.0);
    let report = detector().detect(&mask).unwrap();

    assert_eq!(report.stars.len(), 1, "{}", report.summary());
    let star = &report.stars[0];
    let tol = params().distance_tolerance;
    assert!(dist(star.position(), center) <= tol / 2.0, "center {:?}", star.position());
    assert_eq!(star.supported_directions, 6);
    assert_eq!(star.spokes.len(), 6);
    for (spoke, dir) in star.spokes.iter().zip(SpokeDirection::ALL) {
        assert_eq!(spoke.direction, dir);
        assert!(spoke.length_px >= 30.0, "{dir:?} traced {:.1}px", spoke.length_px);
    }
    assert!(!star.segments.is_empty());
    assert!(star.segments.iter().all(|s| s.class.is_some()));
}

#[test]
fn trace_reports_every_stage() {
    let mask = star_mask(200, 200, [100.0, 100.0], 60.0, 3.0);
    let report = detector().detect(&mask).unwrap();
    let trace = &report.trace;

    assert_eq!((trace.input.width, trace.input.height), (200, 200));
    assert_eq!(trace.input.front_end, FrontEnd::Skeleton);
    assert_eq!(trace.preprocess.foreground, mask.count());
    assert!(trace.preprocess.line_pixels < trace.preprocess.closed);
    assert!(trace.segments.len() >= 3);
    assert!(trace.intersections >= 3);
    assert!(trace.clusters.iter().any(|c| c.candidate));
    for label in ["preprocess", "lines", "classify", "intersect", "cluster", "validate", "reconstruct"] {
        assert!(trace.timings.stage_ms(label).is_some(), "missing timing {label}");
    }

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["stars"][0]["center"]["supportedDirections"].is_number());
    assert!(json["trace"]["segments"].is_array());
}

#[test]
fn two_distant_stars_are_reported_separately() {
    let mut mask = BinaryMask::zeros(420, 260);
    let centers = [[100.0, 130.0], [300.0, 130.0]];
    for c in centers {
        draw_star(&mut mask, c, 60.0, 3.0, &SpokeDirection::ALL);
    }
    let report = detector().detect(&mask).unwrap();

    assert_eq!(report.stars.len(), 2, "{}", report.summary());
    let mut found: Vec<[f32; 2]> = report.stars.iter().map(|s| s.position()).collect();
    found.sort_by(|a, b| a[0].total_cmp(&b[0]));
    for (got, want) in found.iter().zip(centers) {
        assert!(dist(*got, want) <= 10.0, "got {got:?} want {want:?}");
    }
    assert!(report.stars.iter().all(|s| s.supported_directions == 6));
}

#[test]
fn empty_mask_yields_no_stars() {
    let mask = BinaryMask::zeros(128, 96);
    let report = detector().detect(&mask).unwrap();
    assert!(report.stars.is_empty());
    assert!(report.trace.segments.is_empty());
    assert_eq!(report.trace.intersections, 0);
}

#[test]
fn star_with_two_missing_spokes_is_still_found() {
    use SpokeDirection::*;
    let center = [90.0, 90.0];
    let mut mask = BinaryMask::zeros(180, 180);
    draw_star(&mut mask, center, 60.0, 3.0, &[Deg120, Deg180, Deg240, Deg300]);
    let report = detector().detect(&mask).unwrap();

    assert_eq!(report.stars.len(), 1, "{}", report.summary());
    let star = &report.stars[0];
    assert!(dist(star.position(), center) <= 10.0);
    assert!(star.supported_directions >= 4);
    assert!(star.center.support(Deg0).is_none());
    assert!(star.center.support(Deg60).is_none());
}

#[test]
fn byte_and_probability_inputs_match_binary_input() {
    let mask = star_mask(160, 160, [80.0, 80.0], 55.0, 3.0);
    let det = detector();
    let expected = det.detect(&mask).unwrap();

    let gray = to_gray(&mask);
    let view = ImageU8 {
        w: 160,
        h: 160,
        stride: 160,
        data: &gray,
    };
    let from_bytes = det.detect_bytes(view).unwrap();

    let probs: Vec<f32> = mask.as_bytes().iter().map(|&v| if v != 0 { 0.9 } else { 0.1 }).collect();
    let map = ImageF32::from_vec(160, 160, probs).unwrap();
    let from_probs = det.detect_probability(&map).unwrap();

    for report in [&from_bytes, &from_probs] {
        assert_eq!(report.stars.len(), expected.stars.len());
        for (a, b) in report.stars.iter().zip(&expected.stars) {
            assert_eq!(a.center, b.center);
            assert_eq!(a.spokes, b.spokes);
        }
    }
}

#[test]
fn grayscale_rendering_uses_edge_front_end() {
    let center = [100.0, 100.0];
    let mask = star_mask(200, 200, center, 70.0, 3.0);
    let gray = to_gray(&mask);
    let view = ImageU8 {
        w: 200,
        h: 200,
        stride: 200,
        data: &gray,
    };
    let report = detector().detect_grayscale(view).unwrap();

    assert_eq!(report.trace.input.front_end, FrontEnd::Edges);
    assert!(report.trace.timings.stage_ms("edges").is_some());
    assert!(
        report.stars.iter().any(|s| dist(s.position(), center) <= 10.0),
        "{}",
        report.summary()
    );
}

#[test]
fn batch_matches_sequential_detection() {
    let mut two = BinaryMask::zeros(420, 260);
    draw_star(&mut two, [100.0, 130.0], 60.0, 3.0, &SpokeDirection::ALL);
    draw_star(&mut two, [300.0, 130.0], 60.0, 3.0, &SpokeDirection::ALL);
    let masks = vec![
        star_mask(200, 200, [100.0, 100.0], 60.0, 3.0),
        BinaryMask::zeros(64, 64),
        two,
    ];
    let det = detector();
    let batch = det.detect_batch(&masks);
    assert_eq!(batch.len(), masks.len());
    for (result, mask) in batch.iter().zip(&masks) {
        let batch_report = result.as_ref().unwrap();
        let single = det.detect(mask).unwrap();
        let a: Vec<_> = batch_report.stars.iter().map(|s| s.center.clone()).collect();
        let b: Vec<_> = single.stars.iter().map(|s| s.center.clone()).collect();
        assert_eq!(a, b);
    }
    assert_eq!(batch[0].as_ref().unwrap().stars.len(), 1);
    assert!(batch[1].as_ref().unwrap().stars.is_empty());
    assert_eq!(batch[2].as_ref().unwrap().stars.len(), 2);
}
