//=========================================================================
// Frame Director
//=========================================================================
//
// Owns the running flag and the scene manager, and performs the
// per-frame fan-out independently of any platform layer:
//
//   events  → entity manager → scene → running flag
//   update  → entity manager → scene
//   render  → clear → entity manager → scene → present
//
// Keeping this separate from `Game` lets the whole loop body run
// headless in tests; `Game` only supplies real OS events and a real
// canvas.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::event::Event;
use crate::core::render::{Color, RenderTarget};
use crate::core::scene::SceneManager;

//=== Constants ===========================================================

/// Background color the frame is cleared to before rendering.
pub const CLEAR_COLOR: Color = Color::rgb(64, 64, 64);

//=== FrameControl ========================================================

/// Control flow for the main loop.
///
/// Each frame signals either to continue or to terminate the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Exit,
}

//=== Director ============================================================

/// Per-frame coordinator for the active scene.
///
/// `running` is true from construction until a [`Event::Quit`] is
/// processed; it never becomes true again. The quit check sits at the
/// frame boundary, so the frame that carries the quit event still runs
/// its update and render passes exactly once.
pub struct Director {
    scene_manager: SceneManager,
    running: bool,
}

impl Director {
    //--- Construction -----------------------------------------------------

    /// Creates a director with an empty scene manager, in the running
    /// state.
    pub fn new() -> Self {
        Self {
            scene_manager: SceneManager::new(),
            running: true,
        }
    }

    //--- Accessors --------------------------------------------------------

    /// False once a quit event has been processed.
    pub fn running(&self) -> bool {
        self.running
    }

    pub fn scene_manager(&self) -> &SceneManager {
        &self.scene_manager
    }

    pub fn scene_manager_mut(&mut self) -> &mut SceneManager {
        &mut self.scene_manager
    }

    //--- Frame Phases -----------------------------------------------------

    /// Fans one event out to the active scene's entity manager, then the
    /// scene itself, then applies engine-level reactions (resize
    /// logging, quit).
    pub fn process_events(&mut self, event: &Event) {
        if let Event::WindowResized { width, height } = event {
            info!("Window resized to {}x{}", width, height);
        }

        if let Some(scene) = self.scene_manager.active_mut() {
            scene.entity_manager_mut().process_events(event);
            scene.process_events(event);
        }

        if event.is_quit() {
            info!("Quit requested, stopping after this frame");
            self.running = false;
        }
    }

    /// Forwards the frame delta to the entity manager, then the scene.
    pub fn process_update(&mut self, dt: f32) {
        if let Some(scene) = self.scene_manager.active_mut() {
            scene.entity_manager_mut().process_update(dt);
            scene.process_update(dt);
        }
    }

    /// Renders the entity layer, then the scene, onto `target`.
    pub fn process_render(&self, target: &mut dyn RenderTarget) {
        if let Some(scene) = self.scene_manager.active() {
            scene.entity_manager().process_render(target);
            scene.process_render(target);
        }
    }

    //--- Frame Loop Body --------------------------------------------------

    /// Runs one full frame: events, update, clear/render/present.
    ///
    /// Returns [`FrameControl::Exit`] when the running flag has been
    /// cleared; the caller stops looping. A frame whose event batch
    /// contains a quit still performs its single update and render pass.
    pub fn advance_frame(
        &mut self,
        events: &[Event],
        dt: f32,
        target: &mut dyn RenderTarget,
    ) -> FrameControl {
        for event in events {
            self.process_events(event);
        }

        self.process_update(dt);

        target.clear(CLEAR_COLOR);
        self.process_render(target);
        target.present();

        if self.running {
            FrameControl::Continue
        } else {
            FrameControl::Exit
        }
    }
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::EntityManager;
    use crate::core::event::KeyCode;
    use crate::core::render::test_target::{DrawOp, RecordingTarget};
    use crate::core::scene::Scene;

    use std::cell::RefCell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    /// Hook invocation counters shared between a scene and its test.
    #[derive(Default, Clone)]
    struct Counts {
        events: Rc<RefCell<usize>>,
        updates: Rc<RefCell<usize>>,
        renders: Rc<RefCell<usize>>,
    }

    /// Scene that counts its hook invocations.
    #[derive(Default)]
    struct CountingScene {
        entities: EntityManager,
        counts: Counts,
    }

    impl CountingScene {
        fn with_counts(counts: Counts) -> Self {
            Self { entities: EntityManager::new(), counts }
        }
    }

    impl Scene for CountingScene {
        fn name(&self) -> &str {
            "counting"
        }

        fn entity_manager(&self) -> &EntityManager {
            &self.entities
        }

        fn entity_manager_mut(&mut self) -> &mut EntityManager {
            &mut self.entities
        }

        fn process_events(&mut self, _event: &Event) {
            *self.counts.events.borrow_mut() += 1;
        }

        fn process_update(&mut self, _dt: f32) {
            *self.counts.updates.borrow_mut() += 1;
        }

        fn process_render(&self, _target: &mut dyn RenderTarget) {
            *self.counts.renders.borrow_mut() += 1;
        }
    }

    fn director_with_counting_scene() -> Director {
        let mut director = Director::new();
        director
            .scene_manager_mut()
            .set_active_scene(Box::new(CountingScene::default()));
        director
    }

    //=====================================================================
    // Running Flag Tests
    //=====================================================================

    /// A fresh director is running.
    #[test]
    fn starts_running() {
        assert!(Director::new().running());
    }

    /// Quit-free event sequences keep the running flag true.
    #[test]
    fn quit_free_events_keep_running() {
        let mut director = director_with_counting_scene();

        let events = [
            Event::KeyDown { key: KeyCode::Space },
            Event::KeyUp { key: KeyCode::Space },
            Event::MouseMoved { x: 1.0, y: 2.0 },
            Event::WindowResized { width: 640, height: 480 },
            Event::Unidentified,
        ];
        for event in &events {
            director.process_events(event);
        }

        assert!(director.running());
    }

    /// A quit event clears the running flag.
    #[test]
    fn quit_stops_running() {
        let mut director = director_with_counting_scene();
        director.process_events(&Event::Quit);
        assert!(!director.running());
    }

    /// The running flag is monotone: once false, later events cannot
    /// revive it.
    #[test]
    fn running_flag_is_monotone() {
        let mut director = director_with_counting_scene();
        director.process_events(&Event::Quit);
        director.process_events(&Event::KeyDown { key: KeyCode::Space });
        assert!(!director.running());
    }

    //=====================================================================
    // Frame Loop Tests
    //=====================================================================

    /// A quit-free frame continues the loop and presents once.
    #[test]
    fn frame_without_quit_continues() {
        let mut director = director_with_counting_scene();
        let mut target = RecordingTarget::new();

        let control = director.advance_frame(&[], 1.0 / 60.0, &mut target);

        assert_eq!(control, FrameControl::Continue);
        assert_eq!(target.presents(), 1);
    }

    /// A frame carrying a quit event still runs exactly one update and
    /// one render pass, then exits.
    #[test]
    fn quit_frame_runs_one_full_pass() {
        let mut director = director_with_counting_scene();
        let mut target = RecordingTarget::new();

        let control = director.advance_frame(&[Event::Quit], 1.0 / 60.0, &mut target);

        assert_eq!(control, FrameControl::Exit);
        assert_eq!(target.ops[0], DrawOp::Clear(CLEAR_COLOR));
        assert_eq!(target.presents(), 1);
    }

    /// Scene hooks fire once per frame, events once per event.
    #[test]
    fn scene_hooks_fire_per_frame() {
        let counts = Counts::default();
        let mut director = Director::new();
        director
            .scene_manager_mut()
            .set_active_scene(Box::new(CountingScene::with_counts(counts.clone())));
        let mut target = RecordingTarget::new();

        let events = [Event::Unidentified, Event::Unidentified, Event::Quit];
        let control = director.advance_frame(&events, 1.0 / 60.0, &mut target);

        assert_eq!(control, FrameControl::Exit);
        assert_eq!(*counts.events.borrow(), 3);
        assert_eq!(*counts.updates.borrow(), 1);
        assert_eq!(*counts.renders.borrow(), 1);
    }

    /// Frames run safely with no active scene.
    #[test]
    fn frame_without_scene_is_safe() {
        let mut director = Director::new();
        let mut target = RecordingTarget::new();

        let control = director.advance_frame(
            &[Event::WindowResized { width: 1, height: 1 }],
            1.0 / 60.0,
            &mut target,
        );

        assert_eq!(control, FrameControl::Continue);
        assert_eq!(target.ops.len(), 2); // clear + present, nothing drawn
    }

    /// Events reach the entity layer before the scene: a key press is
    /// visible as player velocity after the same frame's update.
    #[test]
    fn events_reach_entity_layer() {
        use crate::core::entity::components::{Player, Velocity};

        let mut director = Director::new();
        let mut scene = CountingScene::default();
        scene.entities.spawn_player(1);
        director.scene_manager_mut().set_active_scene(Box::new(scene));

        let mut target = RecordingTarget::new();
        director.advance_frame(
            &[Event::KeyDown { key: KeyCode::KeyD }],
            1.0 / 60.0,
            &mut target,
        );

        let scene = director.scene_manager().active().unwrap();
        let mut query = scene.entity_manager().registry().query::<(&Player, &Velocity)>();
        let (_, (_, velocity)) = query.iter().next().unwrap();
        assert!(velocity.0.x > 0.0);
    }
}
