//=========================================================================
// Frame Clock
//=========================================================================
//
// Wall-clock delta-time source for the main loop.
//
// The game restarts the clock at the end of every frame; the elapsed
// time becomes the delta passed to the next update.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== FrameClock ==========================================================

/// Measures elapsed wall-clock time between frame starts.
///
/// `Instant` is monotonic, so the reported delta is always ≥ 0.
pub struct FrameClock {
    started: Instant,
}

impl FrameClock {
    /// Starts a new clock at the current instant.
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }

    /// Seconds elapsed since the clock was last (re)started.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Returns the elapsed seconds and restarts the clock.
    pub fn restart(&mut self) -> f32 {
        let elapsed = self.elapsed();
        self.started = Instant::now();
        elapsed
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::start()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
