use plstar_detector::image::{ImageF32, ImageU8};
use plstar_detector::{BinaryMask, ConfigError, DetectError, DetectorParams, InputError, StarDetector};

#[test]
fn invalid_parameters_fail_before_processing() {
    let _ = env_logger::builder().is_test(true).try_init();
    let params = DetectorParams {
        min_supported_directions: 7,
        ..DetectorParams::default()
    };
    let err = StarDetector::new(params).unwrap_err();
    assert_eq!(err, ConfigError::SupportedDirectionsOutOfRange { value: 7 });
    assert!(err.to_string().contains("[1, 6]"));

    let mut params = DetectorParams::default();
    params.cluster.eps = -1.0;
    assert!(matches!(
        StarDetector::new(params),
        Err(ConfigError::NonPositive {
            field: "cluster.eps",
            ..
        })
    ));
}

#[test]
fn zero_sized_mask_is_an_input_error() {
    let _ = env_logger::builder().is_test(true).try_init();
    let det = StarDetector::new(DetectorParams::default()).unwrap();
    let err = det.detect(&BinaryMask::zeros(0, 12)).unwrap_err();
    assert_eq!(
        err,
        DetectError::Input(InputError::EmptyDimensions {
            width: 0,
            height: 12
        })
    );
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn mismatched_buffers_are_rejected_not_truncated() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert_eq!(
        BinaryMask::from_raw(4, 4, vec![0; 15]),
        Err(InputError::LengthMismatch {
            expected: 16,
            found: 15
        })
    );
    assert!(ImageF32::from_vec(3, 3, vec![0.0; 10]).is_err());

    let det = StarDetector::new(DetectorParams::default()).unwrap();
    let data = vec![0u8; 20];
    let short = ImageU8 {
        w: 5,
        h: 5,
        stride: 5,
        data: &data,
    };
    assert!(matches!(
        det.detect_bytes(short),
        Err(DetectError::Input(InputError::LengthMismatch { .. }))
    ));
    let narrow = ImageU8 {
        w: 5,
        h: 4,
        stride: 4,
        data: &data,
    };
    assert!(matches!(
        det.detect_grayscale(narrow),
        Err(DetectError::Input(InputError::StrideTooSmall { stride: 4, width: 5 }))
    ));
}

#[test]
fn overlapping_probability_rows_are_rejected() {
    let _ = env_logger::builder().is_test(true).try_init();
    let overlapping = ImageF32 {
        w: 4,
        h: 3,
        stride: 1,
        data: vec![1.0; 6],
    };
    assert_eq!(
        BinaryMask::from_f32(&overlapping, 0.5),
        Err(InputError::StrideTooSmall { stride: 1, width: 4 })
    );
    let det = StarDetector::new(DetectorParams::default()).unwrap();
    assert!(matches!(
        det.detect_probability(&overlapping),
        Err(DetectError::Input(InputError::StrideTooSmall { .. }))
    ));
}

#[test]
fn empty_inputs_are_not_errors() {
    let _ = env_logger::builder().is_test(true).try_init();
    let det = StarDetector::new(DetectorParams::default()).unwrap();
    let map = ImageF32::new(40, 30);
    let report = det.detect_probability(&map).unwrap();
    assert!(report.stars.is_empty());
    assert!(det.detect_segments(Vec::new(), &BinaryMask::zeros(40, 30)).is_empty());
}
