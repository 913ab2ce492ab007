//! Zhang–Suen thinning.
//!
//! Iteratively peels boundary pixels in two alternating sub-passes until the
//! shape is one pixel wide. Each sub-pass only deletes pixels that are simple
//! (exactly one background→foreground transition around them) and not end
//! points, so connectivity is preserved.
use crate::mask::BinaryMask;
use log::debug;

/// Clockwise neighbourhood starting north: P2..P9.
const RING: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub fn skeletonize(mask: &BinaryMask) -> BinaryMask {
    let mut skel = mask.clone();
    let mut marked: Vec<(usize, usize)> = Vec::new();
    let mut iterations = 0usize;
    loop {
        let mut changed = false;
        for first_pass in [true, false] {
            marked.clear();
            for (x, y) in skel.foreground() {
                if removable(&skel, x, y, first_pass) {
                    marked.push((x, y));
                }
            }
            for &(x, y) in &marked {
                skel.set(x, y, false);
            }
            changed |= !marked.is_empty();
        }
        iterations += 1;
        if !changed {
            break;
        }
    }
    debug!(
        "skeletonize iterations={} pixels_in={} pixels_out={}",
        iterations,
        mask.count(),
        skel.count()
    );
    skel
}

fn removable(mask: &BinaryMask, x: usize, y: usize, first_pass: bool) -> bool {
    let mut p = [false; 8];
    for (slot, &(dx, dy)) in p.iter_mut().zip(RING.iter()) {
        *slot = mask.is_set(x as isize + dx, y as isize + dy);
    }
    let neighbours = p.iter().filter(|&&v| v).count();
    if !(2..=6).contains(&neighbours) {
        return false;
    }
    let transitions = (0..8).filter(|&i| !p[i] && p[(i + 1) % 8]).count();
    if transitions != 1 {
        return false;
    }
    let [p2, _, p4, _, p6, _, p8, _] = p;
    if first_pass {
        !(p2 && p4 && p6) && !(p4 && p6 && p8)
    } else {
        !(p2 && p4 && p8) && !(p2 && p6 && p8)
    }
}
