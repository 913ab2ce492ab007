//! Angle utilities shared by the classification, validation and ray stages.
//!
//! Everything here works in degrees. Undirected quantities (line
//! orientations) live in `[0, 180)`; directed quantities (spoke rays) live in
//! `[0, 360)`.

const FOLD_SNAP_DEG: f32 = 1e-5;

/// Folds any angle into the undirected range `[0, 180)`.
#[inline]
pub fn fold_half_turn(angle_deg: f32) -> f32 {
    let norm = angle_deg.rem_euclid(180.0);
    if norm >= 180.0 - FOLD_SNAP_DEG {
        0.0
    } else {
        norm
    }
}

/// Wraps any angle into the directed range `[0, 360)`.
#[inline]
pub fn fold_full_turn(angle_deg: f32) -> f32 {
    let norm = angle_deg.rem_euclid(360.0);
    if norm >= 360.0 - FOLD_SNAP_DEG {
        0.0
    } else {
        norm
    }
}

/// Smallest difference between two line orientations, treating antipodal
/// directions as equal. Returns a value in `[0, 90]`.
#[inline]
pub fn line_distance_deg(a: f32, b: f32) -> f32 {
    let diff = (fold_half_turn(a) - fold_half_turn(b)).abs();
    diff.min(180.0 - diff)
}

/// Smallest difference between two ray directions. Returns a value in `[0, 180]`.
#[inline]
pub fn direction_distance_deg(a: f32, b: f32) -> f32 {
    let diff = (fold_full_turn(a) - fold_full_turn(b)).abs();
    diff.min(360.0 - diff)
}

/// Undirected orientation of the vector `(dx, dy)` in image coordinates.
#[inline]
pub fn orientation_deg(dx: f32, dy: f32) -> f32 {
    fold_half_turn(dy.atan2(dx).to_degrees())
}

/// Unit vector pointing along `angle_deg` (x right, y down).
#[inline]
pub fn unit_vector(angle_deg: f32) -> [f32; 2] {
    let rad = angle_deg.to_radians();
    [rad.cos(), rad.sin()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn fold_half_turn_basic() {
        assert!(approx_eq(fold_half_turn(30.0), 30.0));
        assert!(approx_eq(fold_half_turn(-45.0), 135.0));
        assert!(approx_eq(fold_half_turn(180.0), 0.0));
        assert!(approx_eq(fold_half_turn(540.0), 0.0));
        assert!(approx_eq(fold_half_turn(-120.0), 60.0));
    }

    #[test]
    fn line_distance_handles_wrap() {
        assert!(approx_eq(line_distance_deg(178.0, 0.0), 2.0));
        assert!(approx_eq(line_distance_deg(0.0, 180.0), 0.0));
        assert!(approx_eq(line_distance_deg(0.0, 90.0), 90.0));
        assert!(approx_eq(line_distance_deg(10.0, 130.0), 60.0));
    }

    #[test]
    fn line_distance_is_symmetric() {
        let a = 17.5f32;
        let b = 151.0f32;
        assert!(approx_eq(line_distance_deg(a, b), line_distance_deg(b, a)));
    }

    #[test]
    fn direction_distance_keeps_opposites_apart() {
        assert!(approx_eq(direction_distance_deg(0.0, 180.0), 180.0));
        assert!(approx_eq(direction_distance_deg(350.0, 10.0), 20.0));
        assert!(approx_eq(direction_distance_deg(-60.0, 300.0), 0.0));
    }

    #[test]
    fn orientation_of_opposite_vectors_matches() {
        assert!(approx_eq(orientation_deg(1.0, 0.0), orientation_deg(-1.0, 0.0)));
        let a = orientation_deg(0.5, 3f32.sqrt() / 2.0);
        assert!(approx_eq(a, 60.0));
        assert!(approx_eq(orientation_deg(-0.5, -(3f32.sqrt()) / 2.0), a));
    }
}
