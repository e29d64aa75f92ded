//=========================================================================
// GUI Widgets
//=========================================================================
//
// Positionable UI elements with per-frame hooks.
//
// Widgets mirror the engine's frame fan-out: a scene that owns widgets
// forwards events, updates and rendering to each of them in order. All
// hooks default to no-ops, so a widget only implements what it needs.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::core::event::Event;
use crate::core::render::{Color, RenderTarget};

//=== Widget Trait ========================================================

/// A positionable UI element.
///
/// Concrete widgets override only the hooks they care about:
///
/// ```rust
/// use ember2d::core::gui::Widget;
/// use glam::Vec2;
///
/// struct Crosshair {
///     position: Vec2,
/// }
///
/// impl Widget for Crosshair {
///     fn position(&self) -> Vec2 {
///         self.position
///     }
///
///     fn set_position(&mut self, position: Vec2) {
///         self.position = position;
///     }
/// }
/// ```
pub trait Widget {
    /// Screen-space position (pixels, top-left origin).
    fn position(&self) -> Vec2;

    /// Moves the widget.
    fn set_position(&mut self, position: Vec2);

    /// Called for every event delivered to the owning scene.
    ///
    /// Default implementation does nothing.
    fn process_events(&mut self, _event: &Event) {}

    /// Called once per frame with the delta time in seconds.
    ///
    /// Default implementation does nothing.
    fn process_update(&mut self, _dt: f32) {}

    /// Called once per frame after the entity layer has rendered.
    ///
    /// Default implementation does nothing.
    fn process_render(&self, _target: &mut dyn RenderTarget) {}
}

//=== Panel ===============================================================

/// A solid rectangle, the simplest concrete widget.
///
/// Used for HUD backgrounds and placeholder chrome.
pub struct Panel {
    position: Vec2,
    size: Vec2,
    color: Color,
}

impl Panel {
    pub fn new(position: Vec2, size: Vec2, color: Color) -> Self {
        Self { position, size, color }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Widget for Panel {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn process_render(&self, target: &mut dyn RenderTarget) {
        target.fill_rect(
            self.position.x,
            self.position.y,
            self.size.x,
            self.size.y,
            self.color,
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
