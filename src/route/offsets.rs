use crate::port::{Cardinal, Port};

use super::error::RouteError;
use super::path::{Point, sign};

/// Signed distance of every port from the reference point, measured along
/// the axis perpendicular to the bundle facing.
pub(crate) fn start_offsets(ports: &[Port], reference: Point, facing: Cardinal) -> Vec<f64> {
    if facing.is_horizontal() {
        ports.iter().map(|port| port.y() - reference.1).collect()
    } else {
        ports.iter().map(|port| port.x() - reference.0).collect()
    }
}

/// Offsets applied on the interior of the trunk. With a separation the fan
/// is re-pitched to uniform spacing anchored at the zero-offset end of the
/// bank; without one, ports keep their natural spacing throughout.
pub(crate) fn mid_offsets(start: &[f64], separation: Option<f64>) -> Result<Vec<f64>, RouteError> {
    let Some(separation) = separation else {
        return Ok(start.to_vec());
    };
    // A single port rides the nominal path; there is nothing to re-pitch.
    if start.len() < 2 {
        return Ok(vec![0.0; start.len()]);
    }
    if start[0] == 0.0 {
        let direction = sign(start[1]);
        Ok((0..start.len())
            .map(|i| direction * separation * i as f64)
            .collect())
    } else if start[start.len() - 1] == 0.0 {
        let direction = sign(start[start.len() - 2]);
        let mut offsets: Vec<f64> = (0..start.len())
            .map(|i| direction * separation * i as f64)
            .collect();
        offsets.reverse();
        Ok(offsets)
    } else {
        Err(RouteError::AmbiguousSeparation {
            first: start[0],
            last: start[start.len() - 1],
        })
    }
}
