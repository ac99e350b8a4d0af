//! Data-driven game balance
//!
//! Defaults match `crate::consts`. On web a tuning document stored in
//! LocalStorage overrides them at startup.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Logical time per tick
    pub dt: f64,
    /// Host tick cadence (ms); the engine itself ignores wall-clock
    pub tick_interval_ms: u32,
    /// Vertical acceleration on projectiles
    pub gravity: f64,

    pub ship_speed: f64,
    pub ship_turn_rate: f64,
    pub turret_turn_rate: f64,
    /// Projectile speed = ship_speed * projectile_speed_factor
    pub projectile_speed_factor: f64,

    /// Strict proximity threshold for collisions
    pub collision_radius: f64,

    /// Per-tick spawn probability
    pub spawn_chance: f64,
    pub max_ships: usize,
    pub ships_to_win: u32,

    pub turret_bounds: DVec3,
    pub ship_bounds: DVec3,
    pub projectile_bounds: DVec3,
    pub turret_offset_y: f64,
    pub turret_altitude: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            dt: DT,
            tick_interval_ms: TICK_INTERVAL_MS,
            gravity: GRAVITY,

            ship_speed: SHIP_SPEED,
            ship_turn_rate: SHIP_TURN_RATE,
            turret_turn_rate: TURRET_TURN_RATE,
            projectile_speed_factor: PROJECTILE_SPEED_FACTOR,

            collision_radius: COLLISION_RADIUS,

            spawn_chance: SPAWN_CHANCE,
            max_ships: MAX_SHIPS,
            ships_to_win: SHIPS_TO_WIN,

            turret_bounds: DVec3::from_array(TURRET_BOUNDS),
            ship_bounds: DVec3::from_array(SHIP_BOUNDS),
            projectile_bounds: DVec3::from_array(PROJECTILE_BOUNDS),
            turret_offset_y: TURRET_OFFSET_Y,
            turret_altitude: TURRET_ALTITUDE,
        }
    }
}

impl Tuning {
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "coastal_defense_tuning";

    #[inline]
    pub fn projectile_speed(&self) -> f64 {
        self.ship_speed * self.projectile_speed_factor
    }

    /// Parse a JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native has no store; always defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.gravity, -1.0);
        assert_eq!(t.dt, 1.0);
        assert_eq!(t.ship_speed, 5.0);
        assert_eq!(t.projectile_speed(), 15.0);
        assert_eq!(t.collision_radius, 100.0);
        assert_eq!(t.max_ships, 3);
        assert_eq!(t.ships_to_win, 3);
        assert_eq!(t.turret_bounds, DVec3::new(100.0, 100.0, 10.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "spawn_chance": 0.5, "ships_to_win": 5 }"#).unwrap();
        assert_eq!(t.spawn_chance, 0.5);
        assert_eq!(t.ships_to_win, 5);
        assert_eq!(t.ship_turn_rate, SHIP_TURN_RATE);
    }

    #[test]
    fn test_json_roundtrip() {
        let t = Tuning {
            collision_radius: 42.0,
            ..Default::default()
        };
        let back = Tuning::from_json(&t.to_json().unwrap()).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_native_load_uses_defaults() {
        assert_eq!(Tuning::load(), Tuning::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
        assert!(Tuning::from_json(r#"{ "max_ships": "many" }"#).is_err());
    }
}
