use crate::port::{Cardinal, Port};

use super::Route;
use super::error::RouteError;
use super::path::{Point, Segment, displace, intersection};
use super::snap::{snap_to_end_x, snap_to_end_y};

/// Builds one route per port pair by displacing every trunk segment
/// laterally and re-intersecting consecutive displaced segments to recover
/// the corners.
pub(crate) fn fan_out(
    ports1: &[Port],
    ports2: &[Port],
    trunk: &[Point],
    offsets_start: &[f64],
    offsets_mid: &[f64],
    end_facing: Cardinal,
) -> Result<Vec<Route>, RouteError> {
    let segments: Vec<Segment> = trunk.windows(2).map(|pair| (pair[0], pair[1])).collect();
    let last = segments.len() - 1;

    let mut routes = Vec::with_capacity(ports1.len());
    for (index, (source, destination)) in ports1.iter().zip(ports2).enumerate() {
        let mut previous_offset = offsets_start[index];
        let mut points: Vec<Point> = Vec::with_capacity(segments.len() + 1);

        for (j, &segment) in segments.iter().enumerate() {
            let offset = if j == 0 {
                previous_offset
            } else {
                offsets_mid[index]
            };
            let displaced = displace(segment, offset)?;

            // Consecutive displaced segments generally do not share an
            // endpoint; the corner is where the two displaced lines cross.
            let corner = if j == 0 {
                displaced.0
            } else {
                let previous = displace(segments[j - 1], previous_offset)?;
                intersection(displaced, previous)?
            };
            points.push(corner);

            if j == last {
                points.push(destination.position);
                if end_facing.is_horizontal() {
                    snap_to_end_y(&mut points, destination.position.1);
                } else {
                    snap_to_end_x(&mut points, destination.position.0);
                }
            }
            previous_offset = offset;
        }

        // The displacement math may drift; the source port position is
        // authoritative.
        points[0] = source.position;
        routes.push(Route { points });
    }
    Ok(routes)
}
