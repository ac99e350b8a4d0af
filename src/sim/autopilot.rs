//! Idle/demo driver - AI plays the game
//!
//! Aims at the ship closest to the turret and fires once the barrel has
//! swung onto it. Used by the headless native build and by tests.

use super::session::Simulation;
use super::state::GameState;
use super::vector::Point;

/// Barrel must be within this many radians of the aim to fire
const AIM_TOLERANCE: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Minimum ticks between shots
    pub reload_ticks: u32,
    cooldown: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(25)
    }
}

impl Autopilot {
    pub fn new(reload_ticks: u32) -> Self {
        Self {
            reload_ticks,
            cooldown: 0,
        }
    }

    /// Ship nearest the turret (planar distance), as a pointer target
    pub fn pick_target(state: &GameState) -> Option<Point> {
        let turret = state.turret()?;
        state
            .ships()
            .min_by(|a, b| {
                a.pos
                    .truncate()
                    .distance(turret.pos.truncate())
                    .partial_cmp(&b.pos.truncate().distance(turret.pos.truncate()))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|ship| Point::new(ship.pos.x, ship.pos.y))
    }

    /// Apply this tick's aim/fire commands, then step the simulation.
    /// A finished game is handed back untouched.
    pub fn drive(&mut self, sim: &mut Simulation, state: &GameState) -> GameState {
        if state.is_over() {
            return state.clone();
        }
        self.cooldown = self.cooldown.saturating_sub(1);

        let mut state = state.clone();
        if let Some(target) = Self::pick_target(&state) {
            state = sim.rotate_cannon(&state, target);
            let on_target = state
                .turret()
                .is_some_and(|t| (t.angle - state.user_angle).abs() < AIM_TOLERANCE);
            if on_target && self.cooldown == 0 {
                state = sim.fire_cannon(&state, target);
                self.cooldown = self.reload_ticks;
            }
        }

        sim.step(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::{BodyInit, BodyKind};
    use crate::sim::state::Outcome;
    use glam::DVec3;

    #[test]
    fn test_pick_target_prefers_nearest() {
        let mut sim = Simulation::new(0);
        let s = sim.start(800.0, 600.0);
        assert_eq!(Autopilot::pick_target(&s), None);

        let far = sim.create_body(
            BodyKind::Ship,
            BodyInit {
                pos: Some(DVec3::new(0.0, 600.0, 0.0)),
                ..Default::default()
            },
        );
        let near = sim.create_body(
            BodyKind::Ship,
            BodyInit {
                pos: Some(DVec3::new(420.0, 300.0, 0.0)),
                ..Default::default()
            },
        );
        let s = s.with_body(far).with_body(near);
        assert_eq!(Autopilot::pick_target(&s), Some(Point::new(420.0, 300.0)));
    }

    #[test]
    fn test_drive_fires_when_aligned() {
        let mut sim = Simulation::with_tuning(
            0,
            crate::Tuning {
                spawn_chance: 0.0,
                ..Default::default()
            },
        );
        let s = sim.start(800.0, 600.0);
        // Ship straight below the turret: aim matches the opening facing (π/2)
        let ship = sim.create_body(
            BodyKind::Ship,
            BodyInit {
                pos: Some(DVec3::new(400.0, 500.0, 0.0)),
                angle: Some(-std::f64::consts::FRAC_PI_2),
                ..Default::default()
            },
        );
        let s = s.with_body(ship);

        let mut pilot = Autopilot::new(10);
        let next = pilot.drive(&mut sim, &s);
        assert_eq!(next.bodies_of(BodyKind::Projectile).count(), 1);

        // Reloading: no second shot on the next tick
        let next = pilot.drive(&mut sim, &next);
        assert_eq!(next.bodies_of(BodyKind::Projectile).count(), 1);
    }

    #[test]
    fn test_drive_leaves_finished_game_alone() {
        let mut sim = Simulation::new(0);
        let s = sim.start(800.0, 600.0);
        let ship = sim.create_body(
            BodyKind::Ship,
            BodyInit {
                pos: Some(DVec3::new(400.0, 500.0, 0.0)),
                ..Default::default()
            },
        );
        let won = GameState {
            outcome: Outcome::Victory,
            ships_sunk: 3,
            user_angle: 0.0,
            ..s.with_body(ship)
        };

        let mut pilot = Autopilot::new(10);
        let next = pilot.drive(&mut sim, &won);
        assert_eq!(next, won);
        assert_eq!(next.bodies_of(BodyKind::Projectile).count(), 0);
        assert_eq!(sim.ids().issued(BodyKind::Projectile), 0);
    }
}
