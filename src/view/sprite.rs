//! Sprite placement for bodies
//!
//! Each body maps to one image, centered on its position, scaled up with
//! altitude above the turret deck and rotated to its facing.

use serde::Serialize;

use crate::sim::{Body, BodyKind, GameState};

/// Altitude at which sprites are drawn at natural size
const BASE_ALTITUDE: f64 = 50.0;
/// Extra scale per unit of altitude above `BASE_ALTITUDE`
const ALTITUDE_SCALE: f64 = 0.02;

/// Image asset for a body kind
pub fn sprite_asset(kind: BodyKind) -> &'static str {
    match kind {
        BodyKind::Projectile => "projectile.svg",
        BodyKind::Ship => "ship.svg",
        BodyKind::Turret => "cannon.svg",
    }
}

/// Everything a renderer needs to place one body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteView {
    pub id: String,
    pub kind: BodyKind,
    pub asset: &'static str,
    /// Top-left corner of the unscaled sprite
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    /// Radians
    pub rotation: f64,
}

impl SpriteView {
    pub fn from_body(body: &Body) -> Self {
        Self {
            id: body.id.clone(),
            kind: body.kind,
            asset: sprite_asset(body.kind),
            left: body.pos.x - body.bounds.x / 2.0,
            top: body.pos.y - body.bounds.y / 2.0,
            width: body.bounds.x,
            height: body.bounds.y,
            scale: 1.0 + (body.pos.z - BASE_ALTITUDE).max(0.0) * ALTITUDE_SCALE,
            rotation: body.angle,
        }
    }

    /// CSS transform string for DOM renderers
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}rad)",
            self.left, self.top, self.scale, self.rotation
        )
    }
}

/// Sprites in display order (append order of the bodies)
pub fn sprites(state: &GameState) -> Vec<SpriteView> {
    state.bodies.iter().map(SpriteView::from_body).collect()
}
