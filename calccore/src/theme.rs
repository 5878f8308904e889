//! Grid calculator theme
//!
//! Light gray chrome, white keys, orange operators, gray memory keys —
//! after the palette of the desk calculator this app reproduces.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The calculator palette.
pub struct CalcColors;

impl CalcColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    /// Window background (#B6B6B6).
    pub const FRAME_GRAY: Color32 = Color32::from_rgb(182, 182, 182);
    /// Memory key fill (#989896).
    pub const MEMORY_GRAY: Color32 = Color32::from_rgb(152, 152, 150);
    /// Operator key fill.
    pub const ORANGE: Color32 = Color32::from_rgb(255, 165, 0);
}

/// Theme configuration for the calculator window.
pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 15.0,
            item_spacing: 5.0,
        }
    }
}

impl CalcTheme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = CalcColors::FRAME_GRAY;
        visuals.panel_fill = CalcColors::FRAME_GRAY;
        visuals.extreme_bg_color = CalcColors::WHITE;

        visuals.window_rounding = Rounding::same(2.0);
        visuals.menu_rounding = Rounding::same(2.0);
        visuals.window_stroke = Stroke::new(1.0, CalcColors::BLACK);
        visuals.override_text_color = Some(CalcColors::BLACK);

        let outline = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.rounding = Rounding::same(2.0);
        };
        outline(&mut visuals.widgets.inactive);
        outline(&mut visuals.widgets.hovered);
        outline(&mut visuals.widgets.active);
        outline(&mut visuals.widgets.open);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(CalcColors::FRAME_GRAY)
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}
