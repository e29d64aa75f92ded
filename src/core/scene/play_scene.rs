//=========================================================================
// Play Scene
//=========================================================================
//
// The default gameplay scene installed by `Game::run`.
//
// Populates its entity set on entry (player, enemies, one particle
// system) and owns the HUD widgets. Per-frame entity work happens in the
// entity manager; this scene only forwards its hooks to the widgets.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::info;

//=== Internal Dependencies ===============================================

use crate::core::entity::EntityManager;
use crate::core::event::Event;
use crate::core::gui::{Panel, Widget};
use crate::core::render::{Color, RenderTarget};
use crate::core::scene::Scene;

//=== Initial Population ==================================================

const BASIC_ENEMIES: u32 = 3;
const SMART_ENEMIES: u32 = 2;

const PARTICLE_MAX: u32 = 64;
/// Emit upward; screen-space y grows downward.
const PARTICLE_ANGLE: f32 = -std::f32::consts::FRAC_PI_2;
const PARTICLE_LIFETIME: f32 = 1.5;
const PARTICLE_VELOCITY: f32 = 40.0;

const HUD_COLOR: Color = Color::rgb(32, 32, 32);

//=== PlayScene ===========================================================

/// Gameplay scene: one player, a handful of enemies, a particle system
/// and a HUD bar.
pub struct PlayScene {
    entities: EntityManager,
    widgets: Vec<Box<dyn Widget>>,
}

impl PlayScene {
    pub fn new() -> Self {
        let widgets: Vec<Box<dyn Widget>> = vec![Box::new(Panel::new(
            Vec2::new(8.0, 8.0),
            Vec2::new(200.0, 24.0),
            HUD_COLOR,
        ))];

        Self {
            entities: EntityManager::new(),
            widgets,
        }
    }

    /// The scene's widgets, mainly for tests and tooling.
    pub fn widgets(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }
}

impl Default for PlayScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for PlayScene {
    fn name(&self) -> &str {
        "play"
    }

    fn entity_manager(&self) -> &EntityManager {
        &self.entities
    }

    fn entity_manager_mut(&mut self) -> &mut EntityManager {
        &mut self.entities
    }

    fn on_enter(&mut self) {
        info!("Entering play scene");

        self.entities.spawn_player(1);
        self.entities.spawn_basic_enemy(BASIC_ENEMIES);
        self.entities.spawn_smart_enemy(SMART_ENEMIES);
        self.entities.spawn_particle_system(
            PARTICLE_MAX,
            PARTICLE_ANGLE,
            PARTICLE_LIFETIME,
            PARTICLE_VELOCITY,
        );
    }

    fn on_exit(&mut self) {
        info!("Leaving play scene");
    }

    fn process_events(&mut self, event: &Event) {
        for widget in &mut self.widgets {
            widget.process_events(event);
        }
    }

    fn process_update(&mut self, dt: f32) {
        for widget in &mut self.widgets {
            widget.process_update(dt);
        }
    }

    fn process_render(&self, target: &mut dyn RenderTarget) {
        for widget in &self.widgets {
            widget.process_render(target);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
