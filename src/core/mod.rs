//=========================================================================
// Engine Core
//
// Platform-independent engine systems.
//
// Everything in this tree runs headless: events arrive as portable
// `core::event::Event` values and drawing goes through the
// `core::render::RenderTarget` trait. The `platform` module supplies
// both from SDL at runtime; tests supply them directly.
//
// Layout:
// - `director` — per-frame fan-out and the running flag
// - `scene`    — Scene trait, SceneManager, PlayScene
// - `entity`   — EntityManager over the hecs registry, components
// - `gui`      — Widget trait and concrete widgets
// - `event`    — portable event/key/button types
// - `render`   — RenderTarget trait and Color
// - `settings` — window configuration
// - `time`     — frame delta clock
//
//=========================================================================

pub mod director;
pub mod entity;
pub mod event;
pub mod gui;
pub mod render;
pub mod scene;
pub mod settings;
pub mod time;
