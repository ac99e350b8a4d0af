//! Game state snapshot
//!
//! A `GameState` is never mutated once built: every operation reads one
//! snapshot and returns a new one, so older snapshots stay valid history.

use serde::{Deserialize, Serialize};

use super::body::{Body, BodyKind};

/// How the game ended (if it has)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    #[default]
    Pending,
    Defeat,
    Victory,
}

/// Complete simulation snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Append order, used for display layering only
    pub bodies: Vec<Body>,
    pub ships_sunk: u32,
    /// Unix timestamp (ms)
    pub start_time: f64,
    pub outcome: Outcome,
    pub width: f64,
    pub height: f64,
    /// Player-commanded aim (radians)
    pub user_angle: f64,
}

impl GameState {
    /// The turret, if it is still on the board
    pub fn turret(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.kind == BodyKind::Turret)
    }

    pub fn ships(&self) -> impl Iterator<Item = &Body> {
        self.bodies_of(BodyKind::Ship)
    }

    pub fn bodies_of(&self, kind: BodyKind) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(move |b| b.kind == kind)
    }

    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Pending
    }

    /// Copy of this snapshot with the aim replaced
    pub fn with_user_angle(&self, user_angle: f64) -> Self {
        Self {
            user_angle,
            ..self.clone()
        }
    }

    /// Copy of this snapshot with one more body appended
    pub fn with_body(&self, body: Body) -> Self {
        let mut bodies = Vec::with_capacity(self.bodies.len() + 1);
        bodies.extend(self.bodies.iter().cloned());
        bodies.push(body);
        Self {
            bodies,
            ..self.clone_without_bodies()
        }
    }

    /// Copy of this snapshot with a new body set and score/outcome
    pub fn advanced(&self, bodies: Vec<Body>, ships_sunk: u32, outcome: Outcome) -> Self {
        Self {
            bodies,
            ships_sunk,
            outcome,
            ..self.clone_without_bodies()
        }
    }

    fn clone_without_bodies(&self) -> Self {
        Self {
            bodies: Vec::new(),
            ships_sunk: self.ships_sunk,
            start_time: self.start_time,
            outcome: self.outcome,
            width: self.width,
            height: self.height,
            user_angle: self.user_angle,
        }
    }
}
