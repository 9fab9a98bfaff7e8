mod error;
mod fanout;
mod offsets;
pub(crate) mod path;
mod snap;
mod sort;

pub use error::RouteError;
pub use path::{EPSILON, Point, Segment, normalize_path};

use crate::config::RouterConfig;
use crate::port::{Cardinal, Port};

/// One finished centerline polyline, running from the source port position
/// to the destination port position through Manhattan corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub points: Vec<Point>,
}

impl Route {
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| {
                let (a, b) = (pair[0], pair[1]);
                ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
            })
            .sum()
    }
}

/// Connects two equal-length banks of ports with parallel Manhattan routes
/// that all follow `waypoints`. Port `i` of the sorted first bank is wired
/// to port `i` of the sorted second bank; every route is the shared trunk
/// displaced sideways by that port's offset.
pub fn route_bundle(
    ports1: &[Port],
    ports2: &[Port],
    waypoints: &[Point],
    config: &RouterConfig,
) -> Result<Vec<Route>, RouteError> {
    if ports1.len() != ports2.len() {
        return Err(RouteError::PortCountMismatch {
            left: ports1.len(),
            right: ports2.len(),
        });
    }
    if ports1.is_empty() {
        return Ok(Vec::new());
    }

    let mut ports1: Vec<Port> = ports1.iter().map(Port::normalized).collect();
    let mut ports2: Vec<Port> = ports2.iter().map(Port::normalized).collect();

    let start_angle = ports1[0].orientation;
    let end_angle = ports2[0].orientation;
    let (Some(start_facing), Some(end_facing)) = (
        Cardinal::from_degrees(start_angle),
        Cardinal::from_degrees(end_angle),
    ) else {
        return Err(RouteError::UnsupportedOrientationPair {
            start: start_angle,
            end: end_angle,
        });
    };

    // The trunk runs between the two reference ports: the banks' first
    // entries as supplied, before any sorting.
    let mut trunk: Vec<Point> = Vec::with_capacity(waypoints.len() + 2);
    trunk.push(ports1[0].position);
    trunk.extend_from_slice(waypoints);
    trunk.push(ports2[0].position);
    let trunk = normalize_path(&trunk)?;

    if config.sort_ports {
        let (start_key, end_key) = sort::sort_keys(start_facing, end_facing);
        sort::sort_bundle(&mut ports1, start_key);
        sort::sort_bundle(&mut ports2, end_key);
    }

    let mut offsets_start = offsets::start_offsets(&ports1, trunk[0], start_facing);
    let mut offsets_mid = offsets::mid_offsets(&offsets_start, config.separation)?;

    // North/South banks fan mirrored relative to the displacement
    // handedness; compensate by flipping every offset.
    if !start_facing.is_horizontal() {
        for offset in &mut offsets_start {
            *offset = -*offset;
        }
        for offset in &mut offsets_mid {
            *offset = -*offset;
        }
    }

    fanout::fan_out(
        &ports1,
        &ports2,
        &trunk,
        &offsets_start,
        &offsets_mid,
        end_facing,
    )
}

/// Routes a single port pair along the waypoints: a bundle of one.
pub fn route_single(
    port1: Port,
    port2: Port,
    waypoints: &[Point],
    config: &RouterConfig,
) -> Result<Route, RouteError> {
    let mut routes = route_bundle(&[port1], &[port2], waypoints, config)?;
    Ok(routes.remove(0))
}
