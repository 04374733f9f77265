//! UI scale: the multiplier applied to the frame's font size.

pub const DEFAULT_UI_SCALE: f32 = 1.0;
pub const MIN_UI_SCALE: f32 = 0.5;
pub const MAX_UI_SCALE: f32 = 3.0;
pub const UI_SCALE_STEP: f32 = 0.1;
/// Environment variable that overrides both the saved and the DPI scale.
pub const UI_SCALE_ENV: &str = "GAME_UI_SCALE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiScaleAction {
    Increase,
    Decrease,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiScale(f32);

impl Default for UiScale {
    fn default() -> Self {
        Self(DEFAULT_UI_SCALE)
    }
}

impl UiScale {
    /// Non-finite input yields the default; everything else is clamped.
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(MIN_UI_SCALE, MAX_UI_SCALE))
    }

    pub fn get(self) -> f32 {
        self.0
    }

    pub fn apply(self, action: UiScaleAction) -> Self {
        match action {
            UiScaleAction::Increase => Self::new(self.0 + UI_SCALE_STEP),
            UiScaleAction::Decrease => Self::new(self.0 - UI_SCALE_STEP),
            UiScaleAction::Reset => Self::default(),
        }
    }

    /// Env override beats the saved value, which beats a high-DPI display.
    pub fn resolve(dpi_scale: f32, saved: Option<f32>, env_override: Option<&str>) -> Self {
        if let Some(scale) = env_override.and_then(|raw| raw.trim().parse::<f32>().ok()) {
            return Self::new(scale);
        }
        if let Some(scale) = saved {
            return Self::new(scale);
        }
        if dpi_scale.is_finite() && dpi_scale > 1.0 {
            return Self::new(dpi_scale);
        }
        Self::default()
    }

    pub fn scaled(self, value: f32) -> f32 {
        value * self.0
    }
}
