//=========================================================================
// Engine Event Types
//
// Defines the internal representation of events delivered to the game
// each frame.
//
// This module abstracts away platform-specific events (SDL) into a
// unified, engine-friendly format consumed by scenes, widgets and the
// entity manager.
//
// Responsibilities:
// - Represent window, keyboard and mouse events in a stable, portable way
// - Keep every variant Copy-cheap (no heap allocations)
// - Provide a fallback (`Unidentified`) for events the engine ignores
//
// Event Flow:
// ```text
// Platform Layer (SDL)
//         ↓
//      Event (this module)
//         ↓
//    Director → Scene → EntityManager / Widgets
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Abstracts platform-specific button representations (SDL's button
/// codes) into a stable, portable enum. The `Other` variant covers side
/// buttons, macro buttons, and any non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key, not the character produced. Coverage:
/// alphanumeric keys, arrow keys and common special keys. Additional
/// keys can be added as needed without breaking existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    /// Directional navigation keys
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Fallback for keys not explicitly mapped by the platform layer.
    Unidentified,
}

//=== Event ===============================================================

/// A single event delivered to the game loop.
///
/// Produced by the platform layer once per OS event and fanned out to
/// the active scene's entity manager, then the scene itself.
///
/// # Event Types
///
/// - **Quit**: window close requested; clears the running flag
/// - **WindowResized**: new drawable size in pixels (logged by the game)
/// - **KeyDown/KeyUp**: discrete keyboard events
/// - **MouseButtonDown/MouseButtonUp**: discrete mouse button events,
///   with the cursor position at press time
/// - **MouseMoved**: cursor position updates (screen space, top-left
///   origin)
/// - **Unidentified**: unknown/unsupported events, ignored downstream
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Window close requested by the user or the OS.
    Quit,

    /// Window resized to a new drawable size (pixels).
    WindowResized { width: u32, height: u32 },

    /// Key pressed down.
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Mouse button pressed at the given cursor position.
    MouseButtonDown { button: MouseButton, x: f32, y: f32 },

    /// Mouse button released at the given cursor position.
    MouseButtonUp { button: MouseButton, x: f32, y: f32 },

    /// Mouse cursor moved to a new position.
    MouseMoved { x: f32, y: f32 },

    /// Unrecognized or unsupported event.
    Unidentified,
}

impl Event {
    /// Returns true for the quit request.
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
