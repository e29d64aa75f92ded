//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle and active-scene switching.
//
// Architecture:
//   SceneManager
//     └─ active: Option<Box<dyn Scene>>
//
// Exactly one scene is active while the game runs. Replacing the active
// scene drops the previous one after its on_exit hook fires.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::entity::EntityManager;
use crate::core::event::Event;
use crate::core::render::RenderTarget;

//=== Module Declarations =================================================

mod play_scene;

pub use play_scene::PlayScene;

//=== Scene Trait =========================================================

/// A gameplay context owning its own entity set.
///
/// The game fans each frame phase out to the active scene's entity
/// manager first, then to the scene itself, so the `process_*` hooks
/// only cover scene-level state (widgets, scripted logic).
///
/// Lifecycle hooks have default empty implementations.
pub trait Scene {
    /// Name used in log output.
    fn name(&self) -> &str {
        "scene"
    }

    /// Borrows the scene's entity manager.
    fn entity_manager(&self) -> &EntityManager;

    /// Mutably borrows the scene's entity manager.
    fn entity_manager_mut(&mut self) -> &mut EntityManager;

    /// Called when the scene becomes active.
    ///
    /// Default implementation does nothing. Override to populate the
    /// entity set.
    fn on_enter(&mut self) {}

    /// Called right before the scene is replaced or cleared.
    ///
    /// Default implementation does nothing.
    fn on_exit(&mut self) {}

    /// Called for every event, after the entity manager has seen it.
    fn process_events(&mut self, _event: &Event) {}

    /// Called once per frame, after the entity manager has updated.
    fn process_update(&mut self, _dt: f32) {}

    /// Called once per frame, after the entity manager has rendered.
    fn process_render(&self, _target: &mut dyn RenderTarget) {}
}

//=== SceneManager ========================================================

/// Owns zero-or-one active scene.
///
/// The manager holds exclusive ownership: passing a scene to
/// [`set_active_scene`](Self::set_active_scene) transfers it, and the
/// previously active scene (if any) is destroyed.
#[derive(Default)]
pub struct SceneManager {
    active: Option<Box<dyn Scene>>,
}

impl SceneManager {
    /// Creates a manager with no active scene.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Makes `scene` the active scene, dropping the previous one.
    ///
    /// The outgoing scene receives `on_exit` before it is dropped; the
    /// incoming scene receives `on_enter` once installed.
    pub fn set_active_scene(&mut self, mut scene: Box<dyn Scene>) {
        if let Some(mut previous) = self.active.take() {
            debug!("Replacing active scene \"{}\" with \"{}\"", previous.name(), scene.name());
            previous.on_exit();
        } else {
            debug!("Activating scene \"{}\"", scene.name());
        }

        scene.on_enter();
        self.active = Some(scene);
    }

    /// Drops the active scene, if any, after its `on_exit` hook.
    pub fn clear(&mut self) {
        if let Some(mut previous) = self.active.take() {
            debug!("Clearing active scene \"{}\"", previous.name());
            previous.on_exit();
        }
    }

    /// The active scene, if one is set.
    pub fn active(&self) -> Option<&dyn Scene> {
        self.active.as_deref()
    }

    /// The active scene, mutably.
    pub fn active_mut(&mut self) -> Option<&mut Box<dyn Scene>> {
        self.active.as_mut()
    }

    /// True when a scene is active.
    pub fn has_active_scene(&self) -> bool {
        self.active.is_some()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
