//=========================================================================
// Platform Event Mapper
//
// Converts SDL events to engine-level `core::event` types. Provides a
// clean separation between OS-specific input and the engine's internal
// event representation.
//
// Responsibilities:
// - Translate quit, window, keyboard and mouse events
// - Ignore SDL events the engine has no use for
// - Provide fallbacks (`Unidentified`) for unmapped inputs
//
//=========================================================================

use sdl2::event::{Event as SdlEvent, WindowEvent as SdlWindowEvent};
use sdl2::keyboard::Keycode as SdlKeycode;
use sdl2::mouse::MouseButton as SdlMouseButton;

use crate::core::event::{Event, KeyCode, MouseButton};

//=== Key Conversion ======================================================
//
// Maps SDL keycodes to the engine's internal `KeyCode` enum. Only a
// subset of codes is supported; all others map to `Unidentified`.
//

impl From<SdlKeycode> for KeyCode {
    fn from(code: SdlKeycode) -> Self {
        use SdlKeycode::*;
        match code {
            //--- Numeric keys -------------------------------------------
            Num0 => KeyCode::Digit0, Num1 => KeyCode::Digit1,
            Num2 => KeyCode::Digit2, Num3 => KeyCode::Digit3,
            Num4 => KeyCode::Digit4, Num5 => KeyCode::Digit5,
            Num6 => KeyCode::Digit6, Num7 => KeyCode::Digit7,
            Num8 => KeyCode::Digit8, Num9 => KeyCode::Digit9,

            //--- Alphabetic keys ----------------------------------------
            A => KeyCode::KeyA, B => KeyCode::KeyB, C => KeyCode::KeyC,
            D => KeyCode::KeyD, E => KeyCode::KeyE, F => KeyCode::KeyF,
            G => KeyCode::KeyG, H => KeyCode::KeyH, I => KeyCode::KeyI,
            J => KeyCode::KeyJ, K => KeyCode::KeyK, L => KeyCode::KeyL,
            M => KeyCode::KeyM, N => KeyCode::KeyN, O => KeyCode::KeyO,
            P => KeyCode::KeyP, Q => KeyCode::KeyQ, R => KeyCode::KeyR,
            S => KeyCode::KeyS, T => KeyCode::KeyT, U => KeyCode::KeyU,
            V => KeyCode::KeyV, W => KeyCode::KeyW, X => KeyCode::KeyX,
            Y => KeyCode::KeyY, Z => KeyCode::KeyZ,

            //--- Arrow keys ---------------------------------------------
            Down => KeyCode::ArrowDown, Left => KeyCode::ArrowLeft,
            Right => KeyCode::ArrowRight, Up => KeyCode::ArrowUp,

            //--- Special keys -------------------------------------------
            Space => KeyCode::Space,
            Return => KeyCode::Enter,
            Escape => KeyCode::Escape,

            //--- Fallback -----------------------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

//=== Mouse Conversion ====================================================
//
// Maps SDL mouse button identifiers to internal mouse button types.
//

impl From<SdlMouseButton> for MouseButton {
    fn from(button: SdlMouseButton) -> Self {
        match button {
            SdlMouseButton::Left => MouseButton::Left,
            SdlMouseButton::Right => MouseButton::Right,
            SdlMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=== Full Event Conversion ===============================================
//
// Converts full SDL events into engine events. Unsupported events
// become `Event::Unidentified` and are ignored downstream.
//
// Notes:
// - `Quit` maps directly; it is what clears the running flag.
// - Both `Resized` and `SizeChanged` map to `WindowResized`, since SDL
//   reports programmatic and user resizes differently.
// - Key events without a keycode (rare) are unidentified.
//

impl From<SdlEvent> for Event {
    fn from(sdl_event: SdlEvent) -> Self {
        match sdl_event {
            //--- Lifecycle -----------------------------------------------
            SdlEvent::Quit { .. } => Event::Quit,

            //--- Window --------------------------------------------------
            SdlEvent::Window {
                win_event: SdlWindowEvent::Resized(w, h) | SdlWindowEvent::SizeChanged(w, h),
                ..
            } => Event::WindowResized {
                width: w.max(0) as u32,
                height: h.max(0) as u32,
            },

            //--- Keyboard ------------------------------------------------
            SdlEvent::KeyDown { keycode: Some(code), .. } => {
                Event::KeyDown { key: KeyCode::from(code) }
            }
            SdlEvent::KeyUp { keycode: Some(code), .. } => {
                Event::KeyUp { key: KeyCode::from(code) }
            }

            //--- Mouse ---------------------------------------------------
            SdlEvent::MouseButtonDown { mouse_btn, x, y, .. } => Event::MouseButtonDown {
                button: MouseButton::from(mouse_btn),
                x: x as f32,
                y: y as f32,
            },
            SdlEvent::MouseButtonUp { mouse_btn, x, y, .. } => Event::MouseButtonUp {
                button: MouseButton::from(mouse_btn),
                x: x as f32,
                y: y as f32,
            },
            SdlEvent::MouseMotion { x, y, .. } => Event::MouseMoved {
                x: x as f32,
                y: y as f32,
            },

            //--- Unhandled events ----------------------------------------
            _ => Event::Unidentified,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
