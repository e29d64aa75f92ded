//=========================================================================
// Ember2D — Library Root
//
// This crate defines the public API surface of the Ember2D engine.
//
// Responsibilities:
// - Expose the engine entry point (`Game`)
// - Keep platform-specific modules (SDL integration) hidden from end
//   users
// - Provide clean separation between the high-level game facade and
//   the core subsystems (scenes, entities, widgets)
//
// Typical usage:
// ```no_run
// use ember2d::Game;
//
// fn main() -> Result<(), ember2d::GameError> {
//     let mut game = Game::builder().build()?;
//     game.run();
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains all platform-independent engine systems (scenes,
// entities, widgets, events). It is exposed publicly for engine-level
// extensibility, but normal application code will mostly use the
// top-level `Game` facade.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the SDL integration (window, renderer, event
// pump) and is kept private, as it is not part of the public API
// surface.
//
// `game` defines the main engine entry point and initialization logic.
//
mod game;
mod platform;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the `Game` types as the main entry point for applications,
// so users can simply `use ember2d::Game;` without having to know the
// internal module structure.
//
pub use game::{Game, GameBuilder, GameError};
