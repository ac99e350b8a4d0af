//! Renderer-facing view of a game state
//!
//! Only outcome, score and per-body placement leave the simulation; velocity
//! and other physics internals stay behind this boundary.

pub mod hud;
pub mod sprite;

pub use hud::hud_message;
pub use sprite::{SpriteView, sprite_asset, sprites};
