//! Coastal Defense - a turret holds the shore against incoming ships
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vector math, bodies, physics, collisions, game state)
//! - `view`: Renderer-facing projection of a game state
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;
pub mod view;

pub use sim::{GameState, Outcome, Simulation};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed logical timestep (one unit per tick, independent of wall-clock)
    pub const DT: f64 = 1.0;
    /// Host tick cadence in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 20;

    /// Vertical acceleration applied to projectiles each tick
    pub const GRAVITY: f64 = -1.0;

    /// Ships cruise at a constant speed
    pub const SHIP_SPEED: f64 = 5.0;
    /// Max ship rotation per tick (radians)
    pub const SHIP_TURN_RATE: f64 = 0.02;
    /// Max turret rotation per tick (radians)
    pub const TURRET_TURN_RATE: f64 = 0.1;
    /// Projectile muzzle speed as a multiple of ship speed
    pub const PROJECTILE_SPEED_FACTOR: f64 = 3.0;

    /// Proximity threshold (strict) for two bodies to count as colliding
    pub const COLLISION_RADIUS: f64 = 100.0;

    /// Per-tick probability of spawning a ship
    pub const SPAWN_CHANCE: f64 = 0.02;
    /// No spawns while this many ships are on the board
    pub const MAX_SHIPS: usize = 3;
    /// Sinking this many ships wins the game
    pub const SHIPS_TO_WIN: u32 = 3;

    /// Body geometry (x/y footprint, z altitude scale)
    pub const TURRET_BOUNDS: [f64; 3] = [100.0, 100.0, 10.0];
    pub const SHIP_BOUNDS: [f64; 3] = [300.0, 210.0, 200.0];
    pub const PROJECTILE_BOUNDS: [f64; 3] = [20.0, 20.0, 20.0];

    /// Turret sits this far from the top edge, raised to this altitude
    pub const TURRET_OFFSET_Y: f64 = 50.0;
    pub const TURRET_ALTITUDE: f64 = 50.0;
}
