use super::options::HoughOptions;
use super::segment::{Segment, SegmentId};
use crate::mask::BinaryMask;

/// Progressive probabilistic Hough transform over a binary edge/skeleton mask.
///
/// Pixels are visited in raster order. Each pixel votes once into a
/// `(theta, rho)` accumulator; as soon as a cell reaches the vote threshold,
/// the line through that pixel is walked in both directions across gaps of at
/// most `max_line_gap` pixels. Walked pixels are removed from the pending set
/// and, if the segment is long enough, their earlier votes are withdrawn so
/// they cannot seed a second detection.
pub(crate) struct HoughExtractor<'a> {
    mask: &'a BinaryMask,
    options: HoughOptions,
    trig: Vec<(f32, f32)>,
    num_rho: usize,
    rho_offset: isize,
    accumulator: Vec<u32>,
    cell_votes: Vec<u32>,
    pending: Vec<bool>,
    voted: Vec<bool>,
    segments: Vec<Segment>,
}

impl<'a> HoughExtractor<'a> {
    pub(crate) fn new(mask: &'a BinaryMask, options: HoughOptions) -> Self {
        let theta_bins = options.theta_bins.max(1);
        let trig = (0..theta_bins)
            .map(|k| {
                let theta = k as f32 * std::f32::consts::PI / theta_bins as f32;
                (theta.cos(), theta.sin())
            })
            .collect();
        let reach = (mask.w() + mask.h()) as f32 / options.rho_step;
        let rho_offset = reach.ceil() as isize;
        let num_rho = 2 * rho_offset as usize + 1;
        let n = mask.w() * mask.h();
        Self {
            mask,
            options,
            trig,
            num_rho,
            rho_offset,
            accumulator: vec![0; theta_bins * num_rho],
            cell_votes: vec![0; theta_bins],
            pending: mask.as_bytes().iter().map(|&v| v != 0).collect(),
            voted: vec![false; n],
            segments: Vec::new(),
        }
    }

    pub(crate) fn extract(mut self) -> Vec<Segment> {
        let points: Vec<(usize, usize)> = self.mask.foreground().collect();
        for (x, y) in points {
            self.process_point(x, y);
        }
        self.segments
    }

    fn process_point(&mut self, x: usize, y: usize) {
        let idx = y * self.mask.w() + x;
        if !self.pending[idx] {
            return;
        }

        self.vote(x, y, 1);
        self.voted[idx] = true;
        let Some(theta_idx) = self.strongest_theta() else {
            return;
        };

        let (cos_t, sin_t) = self.trig[theta_idx];
        // Line direction is perpendicular to the accumulator normal.
        let (dx, dy) = (-sin_t, cos_t);
        let major = dx.abs().max(dy.abs());
        let step = [dx / major, dy / major];

        let forward = self.walk(x, y, step);
        let backward = self.walk(x, y, [-step[0], -step[1]]);

        let p0 = [backward.0 as f32, backward.1 as f32];
        let p1 = [forward.0 as f32, forward.1 as f32];
        let length = ((p1[0] - p0[0]).powi(2) + (p1[1] - p0[1]).powi(2)).sqrt();
        let good_line = length >= self.options.min_line_length;

        self.clear(x, y, good_line);
        for (end, dir) in [(forward, step), (backward, [-step[0], -step[1]])] {
            self.clear_towards(x, y, dir, end, good_line);
        }

        if good_line {
            let id = SegmentId(self.segments.len() as u32);
            self.segments.push(Segment::new(id, p0, p1));
        }
    }

    /// Adds `delta` votes to this pixel's cell in every theta bin and records
    /// the resulting per-bin counts in `cell_votes`.
    fn vote(&mut self, x: usize, y: usize, delta: i32) {
        for (k, &(cos_t, sin_t)) in self.trig.iter().enumerate() {
            let rho = x as f32 * cos_t + y as f32 * sin_t;
            let r = (rho / self.options.rho_step).round() as isize + self.rho_offset;
            let cell = &mut self.accumulator[k * self.num_rho + r as usize];
            *cell = (*cell as i64 + delta as i64).max(0) as u32;
            self.cell_votes[k] = *cell;
        }
    }

    /// Theta bin of the strongest cell from the last vote, if it reaches the
    /// threshold. A straight run of pixels usually ties over a few adjacent
    /// bins; the middle of the tied bins (with wrap-around at π) is taken.
    fn strongest_theta(&self) -> Option<usize> {
        let max = self.cell_votes.iter().copied().max().unwrap_or(0);
        if max < self.options.threshold {
            return None;
        }
        let bins = self.cell_votes.len() as isize;
        let mut tied: Vec<isize> = self
            .cell_votes
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == max)
            .map(|(k, _)| k as isize)
            .collect();
        let wraps = tied.first() == Some(&0) && tied.last() == Some(&(bins - 1));
        if wraps {
            for k in tied.iter_mut() {
                if *k >= bins / 2 {
                    *k -= bins;
                }
            }
            tied.sort_unstable();
        }
        let mid = tied[(tied.len() - 1) / 2];
        Some(mid.rem_euclid(bins) as usize)
    }

    /// Follows the line from `(x, y)` and returns the last pending pixel
    /// reached before the gap budget runs out or the image ends.
    fn walk(&self, x: usize, y: usize, step: [f32; 2]) -> (usize, usize) {
        let mut end = (x, y);
        let mut gap = 0u32;
        let mut k = 1.0f32;
        loop {
            let px = (x as f32 + step[0] * k).round() as isize;
            let py = (y as f32 + step[1] * k).round() as isize;
            if !self.in_bounds(px, py) {
                break;
            }
            let (px, py) = (px as usize, py as usize);
            if self.pending[py * self.mask.w() + px] {
                gap = 0;
                end = (px, py);
            } else {
                gap += 1;
                if gap > self.options.max_line_gap {
                    break;
                }
            }
            k += 1.0;
        }
        end
    }

    /// Replays a walk up to `end`, removing pixels from the pending set.
    fn clear_towards(&mut self, x: usize, y: usize, step: [f32; 2], end: (usize, usize), unvote: bool) {
        if end == (x, y) {
            return;
        }
        let mut k = 1.0f32;
        loop {
            let px = (x as f32 + step[0] * k).round() as isize;
            let py = (y as f32 + step[1] * k).round() as isize;
            if !self.in_bounds(px, py) {
                break;
            }
            let (px, py) = (px as usize, py as usize);
            self.clear(px, py, unvote);
            if (px, py) == end {
                break;
            }
            k += 1.0;
        }
    }

    fn clear(&mut self, x: usize, y: usize, unvote: bool) {
        let idx = y * self.mask.w() + x;
        if !self.pending[idx] {
            return;
        }
        if unvote && self.voted[idx] {
            self.vote(x, y, -1);
            self.voted[idx] = false;
        }
        self.pending[idx] = false;
    }

    #[inline]
    fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.mask.w() && (y as usize) < self.mask.h()
    }
}
