//! Canonical orientations and angle classification.
//!
//! A star has six spokes 60° apart. Detected segments are undirected, so they
//! are sorted into three [`LineClass`]es (`0°`, `60°`, `120°` modulo 180°).
//! Validation and reconstruction work per directed [`SpokeDirection`]
//! (`0°, 60°, …, 300°`); each direction maps onto the line class
//! `direction mod 180°`, so two opposite spokes share one class but are
//! checked independently.
use crate::angle::{line_distance_deg, unit_vector};
use crate::lines::Segment;
use log::debug;
use serde::{Deserialize, Serialize};

/// One of the three undirected canonical orientations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LineClass {
    #[serde(rename = "0")]
    Deg0,
    #[serde(rename = "60")]
    Deg60,
    #[serde(rename = "120")]
    Deg120,
}

impl LineClass {
    /// All classes in ascending angle order.
    pub const ALL: [LineClass; 3] = [LineClass::Deg0, LineClass::Deg60, LineClass::Deg120];

    pub fn degrees(self) -> f32 {
        match self {
            LineClass::Deg0 => 0.0,
            LineClass::Deg60 => 60.0,
            LineClass::Deg120 => 120.0,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One of the six directed spoke angles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpokeDirection {
    #[serde(rename = "0")]
    Deg0,
    #[serde(rename = "60")]
    Deg60,
    #[serde(rename = "120")]
    Deg120,
    #[serde(rename = "180")]
    Deg180,
    #[serde(rename = "240")]
    Deg240,
    #[serde(rename = "300")]
    Deg300,
}

impl SpokeDirection {
    pub const ALL: [SpokeDirection; 6] = [
        SpokeDirection::Deg0,
        SpokeDirection::Deg60,
        SpokeDirection::Deg120,
        SpokeDirection::Deg180,
        SpokeDirection::Deg240,
        SpokeDirection::Deg300,
    ];

    pub fn degrees(self) -> f32 {
        60.0 * self as u8 as f32
    }

    /// The undirected class this ray lies on.
    pub fn line_class(self) -> LineClass {
        LineClass::ALL[self as usize % 3]
    }

    pub fn opposite(self) -> SpokeDirection {
        SpokeDirection::ALL[(self as usize + 3) % 6]
    }

    /// Unit step along the ray in image coordinates (y down).
    pub fn unit(self) -> [f32; 2] {
        unit_vector(self.degrees())
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Nearest canonical class within `tolerance_deg`, or `None`.
///
/// Equidistant classes resolve to the smaller angle.
pub fn classify_angle(angle_deg: f32, tolerance_deg: f32) -> Option<LineClass> {
    let mut best: Option<(LineClass, f32)> = None;
    for class in LineClass::ALL {
        let dist = line_distance_deg(angle_deg, class.degrees());
        if dist > tolerance_deg {
            continue;
        }
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((class, dist)),
        }
    }
    best.map(|(class, _)| class)
}

/// Assign a class to every segment. Unclassified segments are kept with
/// `class == None` so they can still be reported.
pub fn classify_segments(segments: Vec<Segment>, tolerance_deg: f32) -> Vec<Segment> {
    let classified: Vec<Segment> = segments
        .into_iter()
        .map(|seg| {
            let class = classify_angle(seg.angle_deg, tolerance_deg);
            seg.with_class(class)
        })
        .collect();
    let mut counts = [0usize; 3];
    for class in classified.iter().filter_map(|s| s.class) {
        counts[class.index()] += 1;
    }
    debug!(
        "AngleClassifier::run segments={} c0={} c60={} c120={} unclassified={}",
        classified.len(),
        counts[0],
        counts[1],
        counts[2],
        classified.len() - counts.iter().sum::<usize>()
    );
    classified
}
