//=========================================================================
// Ember2D — Binary Entry Point
//
// Builds the game from the optional settings file and runs it. All
// fatal errors are logged and turned into a nonzero exit status; once
// the main loop starts, shutdown happens by closing the window.
//
//=========================================================================

use log::error;

use ember2d::core::settings::WindowSettings;
use ember2d::Game;

/// Settings file looked up next to the working directory.
const SETTINGS_PATH: &str = "settings.ron";

fn main() {
    env_logger::init();

    let settings = match WindowSettings::load_or_default(SETTINGS_PATH) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut game = match Game::builder().with_settings(settings).build() {
        Ok(game) => game,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    game.run();
}
