//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use ember2d::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine entry point
pub use crate::game::{Game, GameBuilder, GameError};

// Frame loop
pub use crate::core::director::{Director, FrameControl};

// Scene system
pub use crate::core::scene::{PlayScene, Scene, SceneManager};

// Entity layer
pub use crate::core::entity::EntityManager;

// GUI
pub use crate::core::gui::{Panel, Widget};

// Events and rendering
pub use crate::core::event::{Event, KeyCode, MouseButton};
pub use crate::core::render::{Color, RenderTarget};

// Configuration
pub use crate::core::settings::WindowSettings;
