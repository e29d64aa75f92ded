//=========================================================================
// Platform Subsystem
//
// Bridges SDL (OS window, renderer, event queue) with the engine core.
//
// Architecture:
// ```text
//  ┌──────────────────────────┐
//  │  SDL                     │
//  │   ├─ window + canvas ────┼──► RenderTarget impl
//  │   └─ event pump ─────────┼──► core::event::Event
//  └──────────────────────────┘
// ```
//
// Responsibilities:
// - Acquire the SDL context, window, renderer and event pump
// - Release them in reverse order when `Video` drops (RAII)
// - Drain pending OS events each frame and convert them to engine events
// - Implement the core `RenderTarget` trait for the SDL canvas
//
// Failure here is fatal: if the video subsystem, window or renderer
// cannot be created the game cannot run, and the error is surfaced to
// the process entry point.
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;

//=== External Crates =====================================================

use log::{info, warn};
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;

//=== Internal Imports ====================================================

use crate::core::event::Event;
use crate::core::render::{Color, RenderTarget};
use crate::core::settings::WindowSettings;

//=== PlatformError =======================================================

/// Platform initialization errors.
///
/// All of these are fatal: there is no recovery path when SDL cannot
/// produce a window and renderer.
#[derive(Debug)]
pub enum PlatformError {
    /// SDL context initialization failed.
    SdlInit(String),

    /// Video subsystem initialization failed.
    VideoInit(String),

    /// Window creation failed.
    WindowCreation(String),

    /// Renderer creation failed.
    RendererCreation(String),

    /// Event pump acquisition failed.
    EventPump(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SdlInit(e) => write!(f, "SDL initialization failed: {}", e),
            Self::VideoInit(e) => write!(f, "Video subsystem initialization failed: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::RendererCreation(e) => write!(f, "Renderer creation failed: {}", e),
            Self::EventPump(e) => write!(f, "Event pump acquisition failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Video ===============================================================

/// Owns the OS window, the renderer and the event queue.
///
/// # Lifecycle
///
/// 1. **Construction**: `Video::new(settings)` initializes SDL video,
///    creates a centered resizable window and an accelerated renderer
/// 2. **Per frame**: `poll_events()` drains the OS queue;
///    `canvas_mut()` hands the render target to the frame
/// 3. **Shutdown**: dropping `Video` releases renderer, window and the
///    SDL context on every exit path
///
/// # Thread Safety
///
/// Not Send/Sync: SDL windowing must stay on the thread that created
/// it, which is also the thread running the main loop.
pub struct Video {
    canvas: Canvas<Window>,
    pump: EventPump,
}

impl Video {
    //--- Construction -----------------------------------------------------

    /// Initializes SDL and creates the window and renderer described by
    /// `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if any SDL object cannot be created.
    pub fn new(settings: &WindowSettings) -> Result<Self, PlatformError> {
        let sdl = sdl2::init().map_err(PlatformError::SdlInit)?;
        let video = sdl.video().map_err(PlatformError::VideoInit)?;

        let window = video
            .window(&settings.title, settings.width, settings.height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| PlatformError::RendererCreation(e.to_string()))?;

        let pump = sdl.event_pump().map_err(PlatformError::EventPump)?;

        info!(
            target: "platform",
            "Window created: \"{}\" {}x{}",
            settings.title,
            settings.width,
            settings.height
        );

        Ok(Self { canvas, pump })
    }

    //--- Per-Frame Access -------------------------------------------------

    /// Drains every pending OS event, converted to engine events.
    pub fn poll_events(&mut self) -> Vec<Event> {
        self.pump.poll_iter().map(Event::from).collect()
    }

    /// The render target for the current frame.
    pub fn canvas_mut(&mut self) -> &mut Canvas<Window> {
        &mut self.canvas
    }
}

//=== RenderTarget for the SDL Canvas =====================================

impl RenderTarget for Canvas<Window> {
    fn clear(&mut self, color: Color) {
        self.set_draw_color(to_sdl_color(color));
        Canvas::clear(self);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        self.set_draw_color(to_sdl_color(color));
        let rect = sdl2::rect::Rect::new(x as i32, y as i32, width as u32, height as u32);

        // A dropped rect is not worth aborting the frame over.
        if let Err(e) = Canvas::fill_rect(self, rect) {
            warn!(target: "platform", "fill_rect failed: {}", e);
        }
    }

    fn present(&mut self) {
        Canvas::present(self);
    }
}

fn to_sdl_color(color: Color) -> sdl2::pixels::Color {
    sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Window/renderer creation needs a display and is exercised
    // manually; these tests cover the error type contract.

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn platform_error_display_includes_cause() {
        let error = PlatformError::WindowCreation("no display".to_string());
        let message = error.to_string();
        assert!(message.contains("Window creation failed"));
        assert!(message.contains("no display"));
    }

    #[test]
    fn color_conversion_preserves_channels() {
        let color = to_sdl_color(Color::rgba(1, 2, 3, 4));
        assert_eq!(color, sdl2::pixels::Color::RGBA(1, 2, 3, 4));
    }
}
