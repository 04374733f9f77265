//! Window configuration for the desktop app.

use std::env;

use app::APP_NAME;
use app::ui_scale::{UI_SCALE_ENV, UiScale};
use macroquad::window::{Conf, screen_dpi_scale};

const DEFAULT_WINDOW_WIDTH: i32 = 1100;
const DEFAULT_WINDOW_HEIGHT: i32 = 560;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // Low-DPI Linux sessions do not scale the framebuffer on their own.
        high_dpi: true,
        ..Default::default()
    }
}

pub fn runtime_ui_scale(saved: Option<f32>) -> UiScale {
    let env_override = env::var(UI_SCALE_ENV).ok();
    UiScale::resolve(screen_dpi_scale(), saved, env_override.as_deref())
}

#[cfg(test)]
mod tests {
    use super::build_window_conf;

    #[test]
    fn requests_a_high_dpi_framebuffer() {
        assert!(build_window_conf().high_dpi);
    }

    #[test]
    fn default_window_fits_the_default_frame() {
        let conf = build_window_conf();
        assert_eq!((conf.window_width, conf.window_height), (1100, 560));
    }
}
