//! Corner rounding boundary: consumes finished routes and emits concrete
//! bend, straight and taper geometry along each centerline.

use std::f64::consts::FRAC_PI_2;

use thiserror::Error;

use crate::config::{CrossSection, RouterConfig};
use crate::port::Port;
use crate::route::path::{is_horizontal, is_vertical};
use crate::route::{EPSILON, Point, Route, RouteError, Segment, route_bundle};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssembleError {
    #[error(
        "segment into corner {corner} is too short for bend radius {radius}: has {available}, needs {required}"
    )]
    BendFeasibility {
        corner: usize,
        radius: f64,
        available: f64,
        required: f64,
    },

    #[error("assembler input must be a Manhattan polyline with distinct corners, got segment {segment:?}")]
    MalformedInput { segment: Segment },
}

/// Concrete geometry for one stretch of an assembled route.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteElement {
    Straight {
        from: Point,
        to: Point,
        width: f64,
    },
    Taper {
        from: Point,
        to: Point,
        width_in: f64,
        width_out: f64,
    },
    Bend {
        corner: Point,
        enter: Point,
        exit: Point,
        radius: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssembledRoute {
    pub elements: Vec<RouteElement>,
    /// Centerline length including bend arcs.
    pub length: f64,
}

/// Replaces the corners of a finished route with bend shapes and fills the
/// straight stretches. Implementations own bend radius feasibility; the
/// routing core never second-guesses them.
pub trait Assembler {
    fn assemble(
        &self,
        route: &Route,
        cross_section: &CrossSection,
    ) -> Result<AssembledRoute, AssembleError>;
}

/// Rounds every corner with a quarter-circle bend of the cross-section
/// radius, widening long straights between tapers when the cross-section
/// asks for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularBendAssembler;

impl Assembler for CircularBendAssembler {
    fn assemble(
        &self,
        route: &Route,
        cross_section: &CrossSection,
    ) -> Result<AssembledRoute, AssembleError> {
        let points = &route.points;
        validate_input(points)?;

        let radius = cross_section.radius;

        // Every corner consumes one radius from each adjacent segment.
        for (i, pair) in points.windows(2).enumerate() {
            let available = segment_length(pair[0], pair[1]);
            let corners_touching = usize::from(i > 0) + usize::from(i < points.len() - 2);
            let required = radius * corners_touching as f64;
            if available + EPSILON < required {
                return Err(AssembleError::BendFeasibility {
                    corner: if i > 0 { i } else { 1 },
                    radius,
                    available,
                    required,
                });
            }
        }

        let mut elements = Vec::new();
        let mut length = 0.0;
        let mut cursor = points[0];
        for corner_index in 1..points.len() - 1 {
            let corner = points[corner_index];
            let enter = step_towards(corner, points[corner_index - 1], radius);
            let exit = step_towards(corner, points[corner_index + 1], radius);
            emit_straight(&mut elements, &mut length, cursor, enter, cross_section);
            elements.push(RouteElement::Bend {
                corner,
                enter,
                exit,
                radius,
            });
            length += FRAC_PI_2 * radius;
            cursor = exit;
        }
        emit_straight(
            &mut elements,
            &mut length,
            cursor,
            points[points.len() - 1],
            cross_section,
        );

        Ok(AssembledRoute { elements, length })
    }
}

/// Routes a bundle and feeds every polyline through `assembler`. A
/// feasibility failure aborts the whole bundle and surfaces unchanged.
pub fn route_bundle_assembled<A: Assembler>(
    ports1: &[Port],
    ports2: &[Port],
    waypoints: &[Point],
    config: &RouterConfig,
    assembler: &A,
) -> Result<Vec<AssembledRoute>, RouteError> {
    let routes = route_bundle(ports1, ports2, waypoints, config)?;
    let mut assembled = Vec::with_capacity(routes.len());
    for route in &routes {
        assembled.push(assembler.assemble(route, &config.cross_section)?);
    }
    Ok(assembled)
}

fn validate_input(points: &[Point]) -> Result<(), AssembleError> {
    if points.len() < 2 {
        let point = points.first().copied().unwrap_or((0.0, 0.0));
        return Err(AssembleError::MalformedInput {
            segment: (point, point),
        });
    }
    for pair in points.windows(2) {
        let segment = (pair[0], pair[1]);
        if !is_horizontal(segment) && !is_vertical(segment) {
            return Err(AssembleError::MalformedInput { segment });
        }
    }
    for triple in points.windows(3) {
        let first = (triple[0], triple[1]);
        let second = (triple[1], triple[2]);
        let same_axis = (is_horizontal(first) && is_horizontal(second))
            || (is_vertical(first) && is_vertical(second));
        if same_axis {
            return Err(AssembleError::MalformedInput { segment: second });
        }
    }
    Ok(())
}

fn segment_length(a: Point, b: Point) -> f64 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

/// Point at `distance` from `from`, along the line towards `towards`.
fn step_towards(from: Point, towards: Point, distance: f64) -> Point {
    let dx = towards.0 - from.0;
    let dy = towards.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len < EPSILON {
        return from;
    }
    (from.0 + dx / len * distance, from.1 + dy / len * distance)
}

fn emit_straight(
    elements: &mut Vec<RouteElement>,
    total: &mut f64,
    from: Point,
    to: Point,
    cross_section: &CrossSection,
) {
    let length = segment_length(from, to);
    if length < EPSILON {
        return;
    }
    *total += length;

    if cross_section.auto_widen
        && length > 2.0 * cross_section.taper_length + EPSILON
        && let Some(wide) = cross_section.width_wide
    {
        let widen_start = step_towards(from, to, cross_section.taper_length);
        let widen_end = step_towards(to, from, cross_section.taper_length);
        elements.push(RouteElement::Taper {
            from,
            to: widen_start,
            width_in: cross_section.width,
            width_out: wide,
        });
        elements.push(RouteElement::Straight {
            from: widen_start,
            to: widen_end,
            width: wide,
        });
        elements.push(RouteElement::Taper {
            from: widen_end,
            to,
            width_in: wide,
            width_out: cross_section.width,
        });
    } else {
        elements.push(RouteElement::Straight {
            from,
            to,
            width: cross_section.width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_route() -> Route {
        Route {
            points: vec![(0.0, 0.0), (50.0, 0.0), (50.0, 40.0)],
        }
    }

    #[test]
    fn rounds_a_single_corner() {
        let cross_section = CrossSection::default();
        let assembled = CircularBendAssembler
            .assemble(&l_route(), &cross_section)
            .unwrap();

        let bends: Vec<_> = assembled
            .elements
            .iter()
            .filter(|element| matches!(element, RouteElement::Bend { .. }))
            .collect();
        assert_eq!(bends.len(), 1);
        assert_eq!(
            bends[0],
            &RouteElement::Bend {
                corner: (50.0, 0.0),
                enter: (40.0, 0.0),
                exit: (50.0, 10.0),
                radius: 10.0,
            }
        );

        // 40 + 30 of straight plus one quarter arc.
        let expected = 70.0 + FRAC_PI_2 * 10.0;
        assert!((assembled.length - expected).abs() < 1e-9);
    }

    #[test]
    fn straight_route_has_no_bends() {
        let route = Route {
            points: vec![(0.0, 5.0), (80.0, 5.0)],
        };
        let assembled = CircularBendAssembler
            .assemble(&route, &CrossSection::default())
            .unwrap();
        assert_eq!(assembled.elements.len(), 1);
        assert!((assembled.length - 80.0).abs() < 1e-9);
    }

    #[test]
    fn short_segment_fails_feasibility() {
        let route = Route {
            points: vec![(0.0, 0.0), (5.0, 0.0), (5.0, 40.0)],
        };
        let err = CircularBendAssembler
            .assemble(&route, &CrossSection::default())
            .unwrap_err();
        assert_eq!(
            err,
            AssembleError::BendFeasibility {
                corner: 1,
                radius: 10.0,
                available: 5.0,
                required: 10.0,
            }
        );
    }

    #[test]
    fn interior_segment_needs_room_for_both_corners() {
        let route = Route {
            points: vec![(0.0, 0.0), (50.0, 0.0), (50.0, 15.0), (100.0, 15.0)],
        };
        let err = CircularBendAssembler
            .assemble(&route, &CrossSection::default())
            .unwrap_err();
        assert!(matches!(
            err,
            AssembleError::BendFeasibility {
                corner: 1,
                required,
                ..
            } if required == 20.0
        ));
    }

    #[test]
    fn auto_widen_inserts_tapers_on_long_straights() {
        let cross_section = CrossSection {
            auto_widen: true,
            ..CrossSection::default()
        };
        let route = Route {
            points: vec![(0.0, 0.0), (100.0, 0.0)],
        };
        let assembled = CircularBendAssembler.assemble(&route, &cross_section).unwrap();

        assert_eq!(assembled.elements.len(), 3);
        assert!(matches!(
            assembled.elements[0],
            RouteElement::Taper { width_out, .. } if width_out == 2.0
        ));
        assert!(matches!(
            assembled.elements[1],
            RouteElement::Straight { from, to, width }
                if from == (15.0, 0.0) && to == (85.0, 0.0) && width == 2.0
        ));
        assert!(matches!(
            assembled.elements[2],
            RouteElement::Taper { width_in, .. } if width_in == 2.0
        ));
    }

    #[test]
    fn short_straights_stay_at_port_width() {
        let cross_section = CrossSection {
            auto_widen: true,
            ..CrossSection::default()
        };
        let route = Route {
            points: vec![(0.0, 0.0), (20.0, 0.0)],
        };
        let assembled = CircularBendAssembler.assemble(&route, &cross_section).unwrap();
        assert_eq!(assembled.elements.len(), 1);
        assert!(matches!(
            assembled.elements[0],
            RouteElement::Straight { width, .. } if width == 0.5
        ));
    }

    #[test]
    fn collinear_corners_are_malformed_input() {
        let route = Route {
            points: vec![(0.0, 0.0), (20.0, 0.0), (50.0, 0.0)],
        };
        let err = CircularBendAssembler
            .assemble(&route, &CrossSection::default())
            .unwrap_err();
        assert!(matches!(err, AssembleError::MalformedInput { .. }));
    }

    #[test]
    fn diagonal_input_is_malformed() {
        let route = Route {
            points: vec![(0.0, 0.0), (20.0, 30.0)],
        };
        let err = CircularBendAssembler
            .assemble(&route, &CrossSection::default())
            .unwrap_err();
        assert!(matches!(err, AssembleError::MalformedInput { .. }));
    }
}
