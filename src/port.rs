use crate::route::path::{EPSILON, Point};

/// A connection point on a placed component: position, facing direction in
/// degrees (pointing away from the component) and trace width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Port {
    pub position: Point,
    pub orientation: f64,
    pub width: f64,
}

impl Port {
    pub fn new(position: Point, orientation: f64, width: f64) -> Self {
        Self {
            position,
            orientation,
            width,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.0
    }

    pub fn y(&self) -> f64 {
        self.position.1
    }

    /// Owned copy with the orientation folded into `[0, 360)`. Caller ports
    /// are never mutated.
    pub(crate) fn normalized(&self) -> Self {
        Self {
            orientation: self.orientation.rem_euclid(360.0),
            ..*self
        }
    }
}

/// The four directions a bundle may face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Cardinal {
    East,
    North,
    West,
    South,
}

impl Cardinal {
    /// Snaps a degree angle to a cardinal direction, or `None` when the
    /// angle is not within tolerance of one.
    pub(crate) fn from_degrees(angle: f64) -> Option<Self> {
        let folded = angle.rem_euclid(360.0);
        if folded < EPSILON || (folded - 360.0).abs() < EPSILON {
            Some(Self::East)
        } else if (folded - 90.0).abs() < EPSILON {
            Some(Self::North)
        } else if (folded - 180.0).abs() < EPSILON {
            Some(Self::West)
        } else if (folded - 270.0).abs() < EPSILON {
            Some(Self::South)
        } else {
            None
        }
    }

    /// East/West bundles measure port offsets along Y, North/South along X.
    pub(crate) fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_folds_orientation() {
        assert_eq!(Port::new((0.0, 0.0), -90.0, 0.5).normalized().orientation, 270.0);
        assert_eq!(Port::new((0.0, 0.0), 450.0, 0.5).normalized().orientation, 90.0);
        assert_eq!(Port::new((0.0, 0.0), 180.0, 0.5).normalized().orientation, 180.0);
    }

    #[test]
    fn normalized_does_not_mutate_the_caller_port() {
        let port = Port::new((1.0, 2.0), 720.0, 0.5);
        let _ = port.normalized();
        assert_eq!(port.orientation, 720.0);
    }

    #[test]
    fn cardinal_snapping() {
        assert_eq!(Cardinal::from_degrees(0.0), Some(Cardinal::East));
        assert_eq!(Cardinal::from_degrees(90.0), Some(Cardinal::North));
        assert_eq!(Cardinal::from_degrees(180.0), Some(Cardinal::West));
        assert_eq!(Cardinal::from_degrees(270.0), Some(Cardinal::South));
        assert_eq!(Cardinal::from_degrees(-90.0), Some(Cardinal::South));
        assert_eq!(Cardinal::from_degrees(360.0), Some(Cardinal::East));
        assert_eq!(Cardinal::from_degrees(45.0), None);
    }

    #[test]
    fn facing_axis() {
        assert!(Cardinal::East.is_horizontal());
        assert!(Cardinal::West.is_horizontal());
        assert!(!Cardinal::North.is_horizontal());
        assert!(!Cardinal::South.is_horizontal());
    }
}
