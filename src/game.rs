//=========================================================================
// Ember2D Game
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──run()──>  [Main Loop]
//         │                        │
//         ├─ with_title()          ├─ owns Video (SDL window/renderer)
//         ├─ with_size()           ├─ owns Director (scenes, running)
//         └─ with_settings()       └─ blocks until quit
// ```
//
// The game is constructed explicitly in the process entry point and
// owns every resource it needs; there is no global instance. Dropping
// the game releases the renderer, the window and the SDL context.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::director::{Director, FrameControl};
use crate::core::scene::{PlayScene, SceneManager};
use crate::core::settings::{SettingsError, WindowSettings};
use crate::core::time::FrameClock;
use crate::platform::{PlatformError, Video};

//=== GameError ===========================================================

/// Fatal startup errors.
///
/// The engine has no recovery path for these; the process entry point
/// logs them and exits nonzero.
#[derive(Debug)]
pub enum GameError {
    /// SDL video/window/renderer initialization failed.
    Platform(PlatformError),

    /// The settings file was present but unreadable or invalid.
    Settings(SettingsError),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Platform(e) => write!(f, "Platform initialization failed: {}", e),
            Self::Settings(e) => write!(f, "Settings error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Platform(e) => Some(e),
            Self::Settings(e) => Some(e),
        }
    }
}

impl From<PlatformError> for GameError {
    fn from(e: PlatformError) -> Self {
        Self::Platform(e)
    }
}

impl From<SettingsError> for GameError {
    fn from(e: SettingsError) -> Self {
        Self::Settings(e)
    }
}

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// # Default Values
///
/// - **Title**: "Ember2D"
/// - **Size**: 800x600
///
/// # Examples
///
/// ```no_run
/// use ember2d::Game;
///
/// # fn main() -> Result<(), ember2d::GameError> {
/// let mut game = Game::builder()
///     .with_title("My Game")
///     .with_size(1280, 720)
///     .build()?;
/// game.run();
/// # Ok(())
/// # }
/// ```
pub struct GameBuilder {
    settings: WindowSettings,
}

impl GameBuilder {
    /// Creates a builder with default window settings.
    pub fn new() -> Self {
        Self { settings: WindowSettings::default() }
    }

    /// Replaces the entire window configuration.
    pub fn with_settings(mut self, settings: WindowSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.title = title.into();
        self
    }

    /// Sets the drawable size in pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.settings.width = width;
        self.settings.height = height;
        self
    }

    /// Builds the game, acquiring the window and renderer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] when SDL initialization, window creation
    /// or renderer creation fails.
    pub fn build(self) -> Result<Game, GameError> {
        info!(
            "Building game (\"{}\", {}x{})",
            self.settings.title, self.settings.width, self.settings.height
        );

        let video = Video::new(&self.settings)?;

        Ok(Game {
            video,
            settings: self.settings,
            director: Director::new(),
        })
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Game ================================================================

/// The engine runtime.
///
/// Owns the SDL window/renderer (via [`Video`]), the window settings
/// and the [`Director`] that drives scenes. Create via
/// [`Game::builder`].
///
/// # Main Loop
///
/// `run()` repeats until a quit event has been processed:
///
/// 1. Drain all pending OS events and fan them out
/// 2. Forward the previous frame's delta time to update
/// 3. Clear, render, present
/// 4. Restart the delta clock
///
/// The first frame uses a nominal 1/60 s delta because no previous
/// frame exists to measure.
pub struct Game {
    video: Video,
    settings: WindowSettings,
    director: Director,
}

impl Game {
    //--- Construction -----------------------------------------------------

    /// Starts configuring a new game.
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    //--- Accessors --------------------------------------------------------

    /// The window configuration the game was built with.
    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    /// The scene manager.
    pub fn scene_manager(&self) -> &SceneManager {
        self.director.scene_manager()
    }

    /// The scene manager, mutably.
    pub fn scene_manager_mut(&mut self) -> &mut SceneManager {
        self.director.scene_manager_mut()
    }

    /// False once a quit event has been processed.
    pub fn running(&self) -> bool {
        self.director.running()
    }

    //--- Execution --------------------------------------------------------

    /// Installs a fresh [`PlayScene`] and blocks in the main loop until
    /// quit.
    pub fn run(&mut self) {
        info!("Starting main loop");

        self.director
            .scene_manager_mut()
            .set_active_scene(Box::new(PlayScene::new()));

        let mut clock = FrameClock::start();
        let mut dt = 1.0 / 60.0;

        loop {
            let events = self.video.poll_events();

            let control = self
                .director
                .advance_frame(&events, dt, self.video.canvas_mut());

            if control == FrameControl::Exit {
                break;
            }

            dt = clock.restart();
        }

        self.director.scene_manager_mut().clear();
        info!("Main loop finished");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
