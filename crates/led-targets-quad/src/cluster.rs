//! Grouping of candidates by their distance to the image center.
//!
//! The four LEDs of a constellation sit at roughly the same radius around
//! the image center, while clutter is scattered. Candidates are sorted by
//! that radius and cut into runs wherever two neighbours are more than
//! `gap` apart (single linkage in one dimension).

use serde::{Deserialize, Serialize};

use crate::params::LedFinderParams;
use crate::shape::ShapeDescriptor;
use crate::validate::validate_cluster;

/// Indices into the distance-sorted candidate list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub members: Vec<usize>,
}

/// Maximum distance gap between neighbours of one cluster, in pixels.
pub fn cluster_gap(width: usize, height: usize, params: &LedFinderParams) -> f32 {
    (width.min(height) / params.cluster_divisor.max(1)) as f32
}

/// Stable ascending sort by `distance_to_image_center`.
pub fn sort_by_distance(candidates: &mut [ShapeDescriptor]) {
    candidates.sort_by(|a, b| {
        a.distance_to_image_center
            .total_cmp(&b.distance_to_image_center)
    });
}

/// Split sorted candidates into runs of neighbours no more than `gap` apart.
///
/// `candidates` must be sorted with [`sort_by_distance`]. Every index lands
/// in exactly one cluster; no validation happens here.
pub fn build_clusters(candidates: &[ShapeDescriptor], gap: f32) -> Vec<Cluster> {
    debug_assert!(candidates
        .windows(2)
        .all(|w| w[0].distance_to_image_center <= w[1].distance_to_image_center));

    let mut clusters = Vec::new();
    let Some(first) = candidates.first() else {
        return clusters;
    };

    let mut current = Cluster { members: vec![0] };
    let mut prev = first.distance_to_image_center;
    for (idx, c) in candidates.iter().enumerate().skip(1) {
        if c.distance_to_image_center - prev > gap {
            clusters.push(std::mem::replace(
                &mut current,
                Cluster { members: vec![idx] },
            ));
        } else {
            current.members.push(idx);
        }
        prev = c.distance_to_image_center;
    }
    clusters.push(current);
    clusters
}

/// Clusters that cover all four quadrants, reduced to one member per quadrant.
pub fn build_validated_clusters(candidates: &[ShapeDescriptor], gap: f32) -> Vec<Cluster> {
    build_clusters(candidates, gap)
        .into_iter()
        .filter_map(|cluster| validate_cluster(cluster, candidates))
        .collect()
}
