use super::error::RouteError;

/// Coordinate tolerance shared by every axis test in the router.
pub const EPSILON: f64 = 1e-5;

pub type Point = (f64, f64);
pub type Segment = (Point, Point);

pub(crate) fn is_vertical(segment: Segment) -> bool {
    (segment.0.0 - segment.1.0).abs() < EPSILON
}

pub(crate) fn is_horizontal(segment: Segment) -> bool {
    (segment.0.1 - segment.1.1).abs() < EPSILON
}

/// Sign with a true zero, so zero-length segments displace nothing.
pub(crate) fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Travel direction of a Manhattan segment along its own axis.
pub(crate) fn segment_sign(segment: Segment) -> f64 {
    if is_vertical(segment) {
        sign(segment.1.1 - segment.0.1)
    } else {
        sign(segment.1.0 - segment.0.0)
    }
}

// Horizontal segments shift in +Y, vertical segments in -X (both scaled by
// the segment direction sign). The asymmetry selects which side of the
// nominal path a bundle fans toward; both signs are load-bearing.
const SHIFT_HORIZONTAL: f64 = 1.0;
const SHIFT_VERTICAL: f64 = -1.0;

/// Copy of `segment` translated perpendicular to its own direction by
/// `offset`.
pub(crate) fn displace(segment: Segment, offset: f64) -> Result<Segment, RouteError> {
    let (dx, dy) = if is_horizontal(segment) {
        (0.0, SHIFT_HORIZONTAL * segment_sign(segment) * offset)
    } else if is_vertical(segment) {
        (SHIFT_VERTICAL * segment_sign(segment) * offset, 0.0)
    } else {
        return Err(RouteError::InvalidPath { segment });
    };
    Ok((
        (segment.0.0 + dx, segment.0.1 + dy),
        (segment.1.0 + dx, segment.1.1 + dy),
    ))
}

/// Corner between two displaced segments: the vertical member fixes X, the
/// horizontal member fixes Y.
pub(crate) fn intersection(first: Segment, second: Segment) -> Result<Point, RouteError> {
    if is_horizontal(first) && is_vertical(second) {
        Ok((second.0.0, first.0.1))
    } else if is_horizontal(second) && is_vertical(first) {
        Ok((first.0.0, second.0.1))
    } else {
        Err(RouteError::NonManhattanIntersection { first, second })
    }
}

/// Collapses duplicate points and runs of same-axis collinear points down to
/// their endpoints, so every surviving pair of consecutive points is a
/// genuine horizontal or vertical segment. A surviving diagonal segment is
/// an error, never silently repaired.
pub fn normalize_path(points: &[Point]) -> Result<Vec<Point>, RouteError> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &point in points {
        if let Some(&last) = out.last()
            && (point.0 - last.0).abs() < EPSILON
            && (point.1 - last.1).abs() < EPSILON
        {
            continue;
        }
        while out.len() >= 2 {
            let a = out[out.len() - 2];
            let b = out[out.len() - 1];
            let same_axis = (is_horizontal((a, b)) && is_horizontal((b, point)))
                || (is_vertical((a, b)) && is_vertical((b, point)));
            if !same_axis {
                break;
            }
            out.pop();
        }
        out.push(point);
    }
    if out.len() < 2 {
        let point = points.first().copied().unwrap_or((0.0, 0.0));
        return Err(RouteError::InvalidPath {
            segment: (point, point),
        });
    }
    for pair in out.windows(2) {
        let segment = (pair[0], pair[1]);
        if !is_horizontal(segment) && !is_vertical(segment) {
            return Err(RouteError::InvalidPath { segment });
        }
    }
    Ok(out)
}
