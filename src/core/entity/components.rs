//=========================================================================
// Components
//=========================================================================
//
// Plain data bundles attached to entities in the registry.
//
// Components carry no behavior; the entity manager's per-frame systems
// interpret them.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use hecs::Entity;

//=== Internal Dependencies ===============================================

use crate::core::render::Color;

//=== Spatial Components ==================================================

/// World-space position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
}

impl Transform {
    pub fn at(position: Vec2) -> Self {
        Self { position }
    }
}

/// Linear velocity in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub const ZERO: Self = Self(Vec2::ZERO);
}

//=== Rendering Components ================================================

/// A solid rectangle drawn centered on the entity's transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub size: Vec2,
    pub color: Color,
}

//=== Gameplay Components =================================================

/// Keyboard-driven player avatar.
///
/// `intent` is the raw input axis (-1..1 per component), refreshed by
/// key events; the update pass converts it into a velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Movement speed in pixels per second.
    pub speed: f32,

    /// Current input axis, updated from key events.
    pub intent: Vec2,
}

impl Player {
    pub fn with_speed(speed: f32) -> Self {
        Self { speed, intent: Vec2::ZERO }
    }
}

/// Enemy behavior archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Drifts along its initial heading.
    Basic,

    /// Re-aims at the player every update.
    Smart,
}

/// Hostile entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,

    /// Movement speed in pixels per second.
    pub speed: f32,
}

//=== Particle Components =================================================

/// Continuous particle source.
///
/// Emits particles around `angle` at `velocity`, pacing emission so that
/// roughly `max_particles` are alive once the system reaches steady
/// state. `alive` tracks live particles and never exceeds
/// `max_particles`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleEmitter {
    /// Upper bound on simultaneously live particles.
    pub max_particles: u32,

    /// Emission direction in radians (0 points right, grows clockwise
    /// in screen space).
    pub angle: f32,

    /// Particle lifetime in seconds.
    pub max_lifetime: f32,

    /// Initial particle speed in pixels per second.
    pub velocity: f32,

    /// Live particles spawned by this emitter.
    pub alive: u32,

    /// Fractional emission carry-over between frames.
    pub accumulator: f32,
}

impl ParticleEmitter {
    pub fn new(max_particles: u32, angle: f32, max_lifetime: f32, velocity: f32) -> Self {
        Self {
            max_particles,
            angle,
            max_lifetime,
            velocity,
            alive: 0,
            accumulator: 0.0,
        }
    }

    /// Particles per second needed to sustain `max_particles` live ones.
    pub fn emission_rate(&self) -> f32 {
        if self.max_lifetime > 0.0 {
            self.max_particles as f32 / self.max_lifetime
        } else {
            0.0
        }
    }
}

/// Short-lived particle owned by an emitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Seconds since the particle was emitted.
    pub age: f32,

    /// Age at which the particle despawns.
    pub lifetime: f32,

    /// Emitter that spawned this particle; its live count is decremented
    /// when the particle dies.
    pub emitter: Entity,
}

//=========================================================================
// Unit Tests
//=========================================================================
