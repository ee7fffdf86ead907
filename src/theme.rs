use gpui::{Hsla, hsla};

/// Surface colors for the four indicator states plus interaction tokens.
#[derive(Clone, Copy, Debug)]
pub struct IndicatorPalette {
    pub idle_bg: Hsla,
    pub processing_bg: Hsla,
    pub error_bg: Hsla,
    pub success_bg: Hsla,
    pub fg: Hsla,
    pub disabled_opacity: f32,
}

impl Default for IndicatorPalette {
    fn default() -> Self {
        Self {
            idle_bg: hsla(211.0 / 360.0, 0.92, 0.48, 1.0),
            processing_bg: hsla(211.0 / 360.0, 0.50, 0.62, 1.0),
            error_bg: hsla(0.0, 0.72, 0.51, 1.0),
            success_bg: hsla(131.0 / 360.0, 0.54, 0.42, 1.0),
            fg: gpui::white(),
            disabled_opacity: 0.55,
        }
    }
}
