use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::cluster::Cluster;
use crate::quadrant::QUADRANT_COUNT;
use crate::shape::ShapeDescriptor;

/// Keep one representative per quadrant, or reject the cluster.
///
/// Clusters that miss a quadrant are rejected. Within a quadrant the
/// candidate with the lowest circularity wins; on ties the earlier member
/// (closer to the image center) is kept. The returned members are ordered
/// by quadrant index.
pub fn validate_cluster(cluster: Cluster, candidates: &[ShapeDescriptor]) -> Option<Cluster> {
    let mut best: BTreeMap<usize, usize> = BTreeMap::new();
    for &idx in &cluster.members {
        let c = &candidates[idx];
        match best.entry(c.quadrant_index) {
            Entry::Vacant(e) => {
                e.insert(idx);
            }
            Entry::Occupied(mut e) => {
                if c.circularity < candidates[*e.get()].circularity {
                    e.insert(idx);
                }
            }
        }
    }

    if best.len() < QUADRANT_COUNT {
        return None;
    }

    Some(Cluster {
        members: best.into_values().collect(),
    })
}
