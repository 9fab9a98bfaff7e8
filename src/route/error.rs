use thiserror::Error;

use super::path::Segment;

/// Structural input failures. Every variant aborts the whole bundle; no
/// partial route list is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("number of start ports must match number of end ports, got {left} and {right}")]
    PortCountMismatch { left: usize, right: usize },

    #[error("path segment must be horizontal or vertical, got {segment:?}")]
    InvalidPath { segment: Segment },

    #[error("no sort rule for orientation pair ({start}, {end}); bundles must face a cardinal direction")]
    UnsupportedOrientationPair { start: f64, end: f64 },

    #[error("separation fan needs a zero offset at either end of the bundle, got {first} and {last}")]
    AmbiguousSeparation { first: f64, last: f64 },

    #[error("displaced segments must cross as horizontal/vertical, got {first:?} and {second:?}")]
    NonManhattanIntersection { first: Segment, second: Segment },

    #[error(transparent)]
    Assemble(#[from] crate::assemble::AssembleError),
}
