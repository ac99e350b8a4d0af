//! Simulation session: start, fixed-timestep step, and player commands
//!
//! A `Simulation` owns everything that is not part of a snapshot: balance
//! tuning, per-kind id counters, the seeded spawn RNG and the clock. Each
//! operation reads a `GameState` and returns a fresh one.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{Body, BodyInit, BodyKind, IdAllocator};
use super::collision;
use super::physics;
use super::state::{GameState, Outcome};
use super::vector::{self, Point, Vector, Y, Z};
use crate::platform;
use crate::tuning::Tuning;

/// One game session (or several consecutive games sharing id counters)
#[derive(Debug, Clone)]
pub struct Simulation {
    tuning: Tuning,
    ids: IdAllocator,
    seed: u64,
    rng: Pcg32,
    clock: fn() -> f64,
}

impl Simulation {
    /// Create a session with default tuning and the given spawn seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            tuning,
            ids: IdAllocator::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock: platform::now_ms,
        }
    }

    /// Replace the timestamp source (ms since epoch)
    pub fn with_clock(mut self, clock: fn() -> f64) -> Self {
        self.clock = clock;
        self
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Restart id numbering at 1 for every kind
    pub fn reset_ids(&mut self) {
        self.ids.reset();
    }

    /// Create a body with defaults, allocating an id unless one is given
    pub fn create_body(&mut self, kind: BodyKind, init: BodyInit) -> Body {
        let now = (self.clock)();
        let ids = &mut self.ids;
        Body::new(kind, init, now, || ids.next_id(kind))
    }

    /// Build the opening snapshot: a lone turret near the top edge, aiming down
    pub fn start(&mut self, width: f64, height: f64) -> GameState {
        let t = &self.tuning;
        let init = BodyInit {
            angle: Some(std::f64::consts::FRAC_PI_2),
            bounds: Some(t.turret_bounds),
            pos: Some(Vector::new(width / 2.0, t.turret_offset_y, t.turret_altitude)),
            ..Default::default()
        };
        let turret = self.create_body(BodyKind::Turret, init);
        log::info!("Game started ({}x{}), turret {} at {:?}", width, height, turret.id, turret.pos);

        GameState {
            bodies: vec![turret],
            ships_sunk: 0,
            start_time: (self.clock)(),
            outcome: Outcome::Pending,
            width,
            height,
            user_angle: std::f64::consts::FRAC_PI_2,
        }
    }

    /// Advance one fixed timestep. Finished games are returned unchanged.
    pub fn step(&mut self, state: &GameState) -> GameState {
        if state.is_over() {
            return state.clone();
        }

        let t = &self.tuning;

        // Collisions are judged on the snapshot, before anything moves
        let hits = collision::find_hits(&state.bodies, t.collision_radius);
        let res = collision::resolve_outcome(
            &state.bodies,
            &hits,
            state.ships_sunk,
            state.outcome,
            t.ships_to_win,
        );
        for &(i, j) in hits.pairs() {
            log::debug!("{} collided with {}", state.bodies[i].id, state.bodies[j].id);
        }
        if res.outcome != state.outcome {
            log::info!("Game over: {:?} with {} ships sunk", res.outcome, res.ships_sunk);
        }

        let mut bodies = Vec::with_capacity(state.bodies.len() + 1);
        for (i, body) in state.bodies.iter().enumerate() {
            if hits.is_hit(i) {
                continue;
            }
            match physics::magic_physics(state, body, t) {
                Some(delta) => bodies.push(physics::integrate(&delta.apply(body), t.dt)),
                None => log::debug!("{} dropped below the plane", body.id),
            }
        }

        // Maybe spawn a new ship
        if state.ships().count() < t.max_ships && self.rng.random::<f64>() < t.spawn_chance {
            bodies.push(self.spawn_ship(state));
        }

        log::trace!("step: {} -> {} bodies", state.bodies.len(), bodies.len());
        state.advanced(bodies, res.ships_sunk, res.outcome)
    }

    /// A ship entering at a random x along the far edge, heading for the turret side
    pub fn spawn_ship(&mut self, state: &GameState) -> Body {
        let x = state.width * self.rng.random::<f64>();
        let init = BodyInit {
            angle: Some(-std::f64::consts::FRAC_PI_2),
            bounds: Some(self.tuning.ship_bounds),
            pos: Some(Vector::new(x, state.height, 0.0)),
            vel: Some(Y * -self.tuning.ship_speed),
            ..Default::default()
        };
        let ship = self.create_body(BodyKind::Ship, init);
        log::debug!("Spawned {} at x={:.1}", ship.id, x);
        ship
    }

    /// Point the player's aim at `target`. The turret then swings toward it
    /// at its own turn rate during `step`.
    pub fn rotate_cannon(&self, state: &GameState, target: Point) -> GameState {
        let Some(turret) = aim_source(state, target) else {
            return state.clone();
        };
        state.with_user_angle(vector::angle_between(turret.pos, target.into()))
    }

    /// Fire a projectile along the turret's current facing. Farther targets
    /// get a higher arc.
    pub fn fire_cannon(&mut self, state: &GameState, target: Point) -> GameState {
        let Some(turret) = aim_source(state, target) else {
            return state.clone();
        };

        let speed = self.tuning.projectile_speed();
        let angle = turret.angle;
        // Offset to the tip of the cannon, or so
        let muzzle = Vector::new(
            angle.cos() * turret.bounds.x / 2.0,
            angle.sin() * turret.bounds.y / 2.0,
            0.0,
        );
        let lift = ((turret.pos.distance(target.into()) / state.height) * std::f64::consts::FRAC_PI_2)
            .sin()
            * speed;

        let init = BodyInit {
            bounds: Some(self.tuning.projectile_bounds),
            pos: Some(turret.pos + muzzle),
            vel: Some(vector::from_polar(speed, angle) + Z * lift),
            ..Default::default()
        };
        let projectile = self.create_body(BodyKind::Projectile, init);
        log::debug!("Fired {} toward ({:.1}, {:.1})", projectile.id, target.x, target.y);
        state.with_body(projectile)
    }
}

/// The turret that a pointer command applies to, or `None` when the command
/// should be ignored
fn aim_source(state: &GameState, target: Point) -> Option<&Body> {
    if !target.is_finite() {
        log::warn!("Ignoring non-finite target ({}, {})", target.x, target.y);
        return None;
    }
    let turret = state.turret();
    if turret.is_none() {
        log::warn!("No turret on the board; command ignored");
    }
    turret
}
