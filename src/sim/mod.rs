//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical timestep only
//! - Seeded RNG only
//! - Snapshots in, snapshots out (no mutation of a caller's state)
//! - No rendering or platform dependencies beyond the injectable clock

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod physics;
pub mod session;
pub mod state;
pub mod vector;

pub use autopilot::Autopilot;
pub use body::{Body, BodyInit, BodyKind, IdAllocator};
pub use collision::{HitSet, Resolution, can_interact, check_collision, find_hits, resolve_outcome};
pub use physics::{BodyDelta, integrate, magic_physics, seek};
pub use session::Simulation;
pub use state::{GameState, Outcome};
pub use vector::{Point, Vector};
