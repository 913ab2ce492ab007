//! Density clustering of intersection points into candidate star centers.
//!
//! DBSCAN over Euclidean distance: a point is a core point when at least
//! `min_pts` points (itself included) lie within `eps`. Clusters grow from
//! core points in input order; border points join the first cluster that
//! reaches them and everything else is noise.
use crate::classify::LineClass;
use crate::intersect::{ClassPair, IntersectionPoint};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterOptions {
    /// Neighborhood radius in pixels.
    pub eps: f32,
    /// Minimum neighborhood size (including the point) for a core point.
    pub min_pts: usize,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            eps: 10.0,
            min_pts: 3,
        }
    }
}

/// A dense group of intersection points.
#[derive(Clone, Debug)]
pub struct Cluster {
    pub points: Vec<IntersectionPoint>,
    pub centroid: [f32; 2],
    /// Distinct class pairs present, sorted.
    pub class_pairs: Vec<ClassPair>,
}

impl Cluster {
    fn from_points(points: Vec<IntersectionPoint>) -> Self {
        let n = points.len().max(1) as f32;
        let (sx, sy) = points
            .iter()
            .fold((0.0f32, 0.0f32), |(sx, sy), p| (sx + p.x, sy + p.y));
        let mut class_pairs: Vec<ClassPair> = points.iter().map(|p| p.classes).collect();
        class_pairs.sort();
        class_pairs.dedup();
        Self {
            points,
            centroid: [sx / n, sy / n],
            class_pairs,
        }
    }

    /// Line classes touched by any contributing intersection.
    pub fn classes(&self) -> Vec<LineClass> {
        let mut classes: Vec<LineClass> = self
            .class_pairs
            .iter()
            .flat_map(|pair| pair.classes())
            .collect();
        classes.sort();
        classes.dedup();
        classes
    }

    /// True when all three line classes contribute.
    pub fn covers_all_classes(&self) -> bool {
        self.classes().len() == LineClass::ALL.len()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Label {
    Unvisited,
    Noise,
    Cluster(usize),
}

/// DBSCAN labels per point: `Some(cluster)` or `None` for noise.
pub fn dbscan(points: &[[f32; 2]], eps: f32, min_pts: usize) -> Vec<Option<usize>> {
    let eps_sq = eps * eps;
    let neighbors = |i: usize| -> Vec<usize> {
        let [xi, yi] = points[i];
        points
            .iter()
            .enumerate()
            .filter(|(_, [x, y])| (x - xi).powi(2) + (y - yi).powi(2) <= eps_sq)
            .map(|(j, _)| j)
            .collect()
    };

    let mut labels = vec![Label::Unvisited; points.len()];
    let mut next_cluster = 0usize;
    for i in 0..points.len() {
        if labels[i] != Label::Unvisited {
            continue;
        }
        let seeds = neighbors(i);
        if seeds.len() < min_pts {
            labels[i] = Label::Noise;
            continue;
        }
        let cluster = next_cluster;
        next_cluster += 1;
        labels[i] = Label::Cluster(cluster);

        let mut queue = seeds;
        let mut head = 0;
        while head < queue.len() {
            let j = queue[head];
            head += 1;
            match labels[j] {
                Label::Cluster(_) => continue,
                Label::Noise => {
                    labels[j] = Label::Cluster(cluster);
                    continue;
                }
                Label::Unvisited => labels[j] = Label::Cluster(cluster),
            }
            let more = neighbors(j);
            if more.len() >= min_pts {
                queue.extend(more);
            }
        }
    }

    labels
        .into_iter()
        .map(|label| match label {
            Label::Cluster(c) => Some(c),
            _ => None,
        })
        .collect()
}

/// Groups intersection points into clusters, in order of first core point.
pub fn cluster_intersections(points: &[IntersectionPoint], options: &ClusterOptions) -> Vec<Cluster> {
    let positions: Vec<[f32; 2]> = points.iter().map(|p| p.position()).collect();
    let labels = dbscan(&positions, options.eps, options.min_pts);
    let count = labels.iter().flatten().max().map_or(0, |&c| c + 1);
    let mut groups: Vec<Vec<IntersectionPoint>> = vec![Vec::new(); count];
    for (p, label) in points.iter().zip(&labels) {
        if let Some(c) = label {
            groups[*c].push(p.clone());
        }
    }
    let clusters: Vec<Cluster> = groups.into_iter().map(Cluster::from_points).collect();
    debug!(
        "CenterClusterer::run points={} eps={:.1} min_pts={} clusters={} noise={}",
        points.len(),
        options.eps,
        options.min_pts,
        clusters.len(),
        labels.iter().filter(|l| l.is_none()).count()
    );
    clusters
}

/// Clusters that touch all three line classes.
pub fn candidate_centers(clusters: &[Cluster]) -> Vec<&Cluster> {
    clusters.iter().filter(|c| c.covers_all_classes()).collect()
}
