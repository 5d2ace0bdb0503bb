use crate::cluster::Cluster;
use crate::quadrant::QUADRANT_COUNT;
use crate::shape::ShapeDescriptor;

/// First validated cluster whose representatives all score below `max_circularity`.
///
/// Clusters are examined in the order given (nearest to the image center
/// first); later clusters are never looked at once one qualifies.
pub fn select_cluster<'c>(
    clusters: &'c [Cluster],
    candidates: &[ShapeDescriptor],
    max_circularity: f32,
) -> Option<&'c Cluster> {
    clusters.iter().find(|cluster| {
        let passing = cluster
            .members
            .iter()
            .filter(|&&idx| candidates[idx].circularity < max_circularity)
            .count();
        passing >= QUADRANT_COUNT
    })
}
