use crate::port::{Cardinal, Port};

/// Axis and direction a bundle is ordered by before pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortKey {
    AscendingX,
    AscendingY,
    DescendingX,
    DescendingY,
}

/// Which edge of each bank is geometrically "first" for a given pair of
/// bundle facings. The table is a frozen convention covering all sixteen
/// facing pairs; deriving it from the angles at runtime would not reproduce
/// the same pairing topology.
pub(crate) fn sort_keys(start: Cardinal, end: Cardinal) -> (SortKey, SortKey) {
    use Cardinal::*;
    use SortKey::*;
    match (start, end) {
        (East, West) => (AscendingY, AscendingY),
        (East, North) => (AscendingY, AscendingX),
        (East, East) => (AscendingY, DescendingY),
        (East, South) => (AscendingY, DescendingX),
        (North, East) => (AscendingX, AscendingY),
        (North, North) => (AscendingX, DescendingX),
        (North, West) => (AscendingX, DescendingY),
        (North, South) => (AscendingX, AscendingX),
        (West, North) => (AscendingY, DescendingX),
        (West, East) => (AscendingY, AscendingY),
        (West, South) => (AscendingY, AscendingX),
        (West, West) => (AscendingY, DescendingY),
        (South, North) => (AscendingX, AscendingX),
        (South, South) => (AscendingX, DescendingX),
        (South, East) => (AscendingX, DescendingY),
        (South, West) => (AscendingX, AscendingY),
    }
}

pub(crate) fn sort_bundle(ports: &mut [Port], key: SortKey) {
    match key {
        SortKey::AscendingX => ports.sort_by(|a, b| a.x().total_cmp(&b.x())),
        SortKey::AscendingY => ports.sort_by(|a, b| a.y().total_cmp(&b.y())),
        SortKey::DescendingX => ports.sort_by(|a, b| b.x().total_cmp(&a.x())),
        SortKey::DescendingY => ports.sort_by(|a, b| b.y().total_cmp(&a.y())),
    }
}
