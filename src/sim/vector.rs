//! 3-component vector math
//!
//! x/y live in screen space, z is a pseudo-altitude used for projectile arcs.
//! Values are plain `Copy` data; every operation yields a new vector and
//! non-finite inputs propagate untouched.

use glam::DVec3;
use serde::{Deserialize, Serialize};

pub type Vector = DVec3;

pub const ZERO: Vector = DVec3::ZERO;
pub const X: Vector = DVec3::X;
pub const Y: Vector = DVec3::Y;
pub const Z: Vector = DVec3::Z;

/// Build a vector in the XY plane from polar coordinates (z is always 0)
#[inline]
pub fn from_polar(r: f64, theta: f64) -> Vector {
    DVec3::new(r * theta.cos(), r * theta.sin(), 0.0)
}

/// Bearing from `from` to `to` in the XY plane
#[inline]
pub fn angle_between(from: Vector, to: Vector) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// A 2D pointer target (e.g. a mouse position)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Point> for Vector {
    fn from(p: Point) -> Self {
        DVec3::new(p.x, p.y, 0.0)
    }
}
