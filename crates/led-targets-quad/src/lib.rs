//! Four-LED constellation detector.
//!
//! Design idea:
//! - Split the image into four quadrants and search each one independently.
//! - Binarize each quadrant against its own brightest pixel and score every
//!   traced boundary (circularity, median radius, distance to image center).
//! - Group candidates of all quadrants whose distances to the image center
//!   are close, keep the roundest candidate per quadrant.
//! - Accept the first group whose four members are all round enough.
//!
//! Boundary tracing itself is delegated to a [`BoundaryTracer`]; the
//! `led-targets` facade provides one backed by `imageproc`.

pub mod cluster;
pub mod decide;
pub mod extract;
pub mod quadrant;
pub mod shape;
pub mod validate;

mod detector;
mod error;
mod params;
mod result;

pub use cluster::{build_clusters, build_validated_clusters, cluster_gap, Cluster};
pub use decide::select_cluster;
pub use detector::LedFinder;
pub use error::LedDetectError;
pub use extract::{adaptive_threshold, BoundaryTracer};
pub use params::LedFinderParams;
pub use quadrant::{partition, Quadrant, QUADRANT_COUNT};
pub use result::{LedDetectionResult, LedMarker};
pub use shape::{describe_boundary, ShapeDescriptor, ShapeRejection};
pub use validate::validate_cluster;
