//! Proximity-based collision detection and outcome bookkeeping
//!
//! Collisions are approximate: two bodies touch when their centers are
//! closer than a fixed radius. Bounds play no part.

use super::body::{Body, BodyKind};
use super::state::Outcome;

/// Whitelist of body kinds allowed to interact. Ships can't collide with
/// other ships, and projectiles can't shoot each other (or the turret) down.
pub fn can_interact(a: BodyKind, b: BodyKind) -> bool {
    use BodyKind::*;
    matches!(
        (a, b),
        (Ship, Turret) | (Turret, Ship) | (Projectile, Ship) | (Ship, Projectile)
    )
}

/// Check whether two bodies collide
#[inline]
pub fn check_collision(a: &Body, b: &Body, radius: f64) -> bool {
    can_interact(a.kind, b.kind) && a.pos.distance(b.pos) < radius
}

/// Hit flags, indexed like the body slice they were computed from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitSet {
    hit: Vec<bool>,
    pairs: Vec<(usize, usize)>,
}

impl HitSet {
    #[inline]
    pub fn is_hit(&self, index: usize) -> bool {
        self.hit.get(index).copied().unwrap_or(false)
    }

    /// Colliding pairs `(i, j)` with `i < j`, in scan order
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Indices of every body hit at least once
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.hit.iter().enumerate().filter(|(_, h)| **h).map(|(i, _)| i)
    }
}

/// Examine every unordered pair once and mark both sides of each collision
pub fn find_hits(bodies: &[Body], radius: f64) -> HitSet {
    let mut hits = HitSet {
        hit: vec![false; bodies.len()],
        pairs: Vec::new(),
    };

    for (i, a) in bodies.iter().enumerate() {
        for (j, b) in bodies.iter().enumerate().skip(i + 1) {
            if check_collision(a, b, radius) {
                hits.hit[i] = true;
                hits.hit[j] = true;
                hits.pairs.push((i, j));
            }
        }
    }

    hits
}

/// Score and outcome after one tick's collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub ships_sunk: u32,
    pub outcome: Outcome,
}

/// Add this tick's sunk ships to the running total and derive the outcome.
/// A hit turret beats any ship count.
pub fn resolve_outcome(
    bodies: &[Body],
    hits: &HitSet,
    ships_sunk: u32,
    outcome: Outcome,
    ships_to_win: u32,
) -> Resolution {
    let mut turret_hit = false;
    let mut sunk_now = 0u32;
    for i in hits.indices() {
        match bodies[i].kind {
            BodyKind::Ship => sunk_now += 1,
            BodyKind::Turret => turret_hit = true,
            BodyKind::Projectile => {}
        }
    }

    let ships_sunk = ships_sunk + sunk_now;
    let outcome = if turret_hit {
        Outcome::Defeat
    } else if ships_sunk >= ships_to_win {
        Outcome::Victory
    } else {
        outcome
    };

    Resolution { ships_sunk, outcome }
}
