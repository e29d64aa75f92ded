//=========================================================================
// Render Target Interface
//=========================================================================
//
// The drawing seam between core logic and the platform renderer.
//
// Core code (scenes, widgets, the entity manager) draws through the
// `RenderTarget` trait; the platform layer implements it for the SDL
// canvas. Tests implement it with a recording target, so the whole frame
// loop runs headless.
//
//=========================================================================

//=== Color ===============================================================

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
}

//=== RenderTarget ========================================================

/// Surface the engine draws a frame onto.
///
/// Exactly one clear/draw/present cycle runs per frame:
///
/// ```text
/// clear(background) → process_render(...) → present()
/// ```
///
/// Coordinates are screen-space pixels with the origin at the top-left.
pub trait RenderTarget {
    /// Fills the whole target with `color`.
    fn clear(&mut self, color: Color);

    /// Draws an axis-aligned filled rectangle. `x`/`y` is the top-left
    /// corner.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Flips the finished frame onto the screen.
    fn present(&mut self);
}

//=========================================================================
// Test Support
//=========================================================================


//=========================================================================
// Unit Tests
//=========================================================================
