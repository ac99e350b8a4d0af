//! Simulation entities and identifier allocation

use serde::{Deserialize, Serialize};

use super::vector::{Vector, ZERO};

/// Body types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyKind {
    Ship,
    Projectile,
    Turret,
}

impl BodyKind {
    pub const ALL: [BodyKind; 3] = [BodyKind::Ship, BodyKind::Projectile, BodyKind::Turret];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Ship => "SHIP",
            BodyKind::Projectile => "PROJECTILE",
            BodyKind::Turret => "TURRET",
        }
    }

    fn index(&self) -> usize {
        match self {
            BodyKind::Ship => 0,
            BodyKind::Projectile => 1,
            BodyKind::Turret => 2,
        }
    }
}

/// A physical body in the (paper-)physical world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// `"<KIND>-<n>"` unless overridden at creation
    pub id: String,
    #[serde(rename = "label")]
    pub kind: BodyKind,
    /// Unix timestamp (ms)
    pub created_at: f64,
    /// Facing (radians, never normalized)
    pub angle: f64,
    /// Radians per tick
    pub angular_velocity: f64,
    pub pos: Vector,
    pub vel: Vector,
    /// x/y footprint, z altitude-correlated scale
    pub bounds: Vector,
}

/// Field overrides for a newly created body; unset fields take defaults
#[derive(Debug, Clone, Default)]
pub struct BodyInit {
    pub id: Option<String>,
    pub created_at: Option<f64>,
    pub angle: Option<f64>,
    pub angular_velocity: Option<f64>,
    pub pos: Option<Vector>,
    pub vel: Option<Vector>,
    pub bounds: Option<Vector>,
}

impl Body {
    /// Build a body from overrides. `fresh_id` is only consulted when no id
    /// override is given.
    pub fn new(kind: BodyKind, init: BodyInit, now: f64, fresh_id: impl FnOnce() -> String) -> Self {
        Self {
            id: init.id.unwrap_or_else(fresh_id),
            kind,
            created_at: init.created_at.unwrap_or(now),
            angle: init.angle.unwrap_or(0.0),
            angular_velocity: init.angular_velocity.unwrap_or(0.0),
            pos: init.pos.unwrap_or(ZERO),
            vel: init.vel.unwrap_or(ZERO),
            bounds: init.bounds.unwrap_or(ZERO),
        }
    }
}

/// Per-kind sequential id counters, scoped to one simulation session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    counters: [u64; 3],
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id for `kind` (first id is `<KIND>-1`)
    pub fn next_id(&mut self, kind: BodyKind) -> String {
        let counter = &mut self.counters[kind.index()];
        *counter += 1;
        format!("{}-{}", kind.as_str(), counter)
    }

    /// Number of ids handed out so far for `kind`
    pub fn issued(&self, kind: BodyKind) -> u64 {
        self.counters[kind.index()]
    }

    pub fn reset(&mut self) {
        self.counters = [0; 3];
    }
}
