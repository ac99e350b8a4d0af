//! Per-body "magic" physics and position integration
//!
//! The world is massless and forceless: instead of summing forces, each body
//! kind gets its velocity or spin rewritten directly every tick.

use super::body::{Body, BodyKind};
use super::state::GameState;
use super::vector::{self, Z};
use crate::tuning::Tuning;

/// Rate-limited rotation from `current` toward `goal`.
///
/// Uses the raw difference (no wraparound) and clamps its magnitude to
/// `max_rate` while keeping its sign.
#[inline]
pub fn seek(current: f64, goal: f64, max_rate: f64) -> f64 {
    let delta = goal - current;
    if delta == 0.0 {
        return 0.0;
    }
    delta.signum() * delta.abs().min(max_rate)
}

/// Proposed change to a body for one tick. `None` fields are left as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyDelta {
    pub vel: Option<vector::Vector>,
    pub angular_velocity: Option<f64>,
}

impl BodyDelta {
    pub fn apply(&self, body: &Body) -> Body {
        Body {
            vel: self.vel.unwrap_or(body.vel),
            angular_velocity: self.angular_velocity.unwrap_or(body.angular_velocity),
            ..body.clone()
        }
    }
}

/// Compute this tick's delta for `body`, reading only from the snapshot `state`.
/// Returns `None` when the body should be removed.
pub fn magic_physics(state: &GameState, body: &Body, tuning: &Tuning) -> Option<BodyDelta> {
    match body.kind {
        BodyKind::Projectile => {
            // Fell through the plane
            if body.pos.z < 0.0 {
                return None;
            }
            // Constant XY velocity, altitude under gravity
            Some(BodyDelta {
                vel: Some(body.vel + Z * (tuning.gravity * tuning.dt)),
                ..Default::default()
            })
        }
        BodyKind::Ship => {
            let Some(turret) = state.turret() else {
                return Some(BodyDelta::default());
            };
            // Ships steer straight for the turret
            let bearing = vector::angle_between(body.pos, turret.pos);
            Some(BodyDelta {
                vel: Some(vector::from_polar(tuning.ship_speed, body.angle)),
                angular_velocity: Some(seek(body.angle, bearing, tuning.ship_turn_rate)),
            })
        }
        BodyKind::Turret => Some(BodyDelta {
            angular_velocity: Some(seek(body.angle, state.user_angle, tuning.turret_turn_rate)),
            ..Default::default()
        }),
    }
}

/// Advance angle and position by one timestep
pub fn integrate(body: &Body, dt: f64) -> Body {
    Body {
        angle: body.angle + body.angular_velocity * dt,
        pos: body.pos + body.vel * dt,
        ..body.clone()
    }
}
