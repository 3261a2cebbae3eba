use crate::controller::theme::ThemeMode;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(88, 101, 242);

pub fn visuals_for_mode(mode: ThemeMode) -> egui::Visuals {
    let mut visuals = match mode {
        ThemeMode::Light => {
            let mut v = egui::Visuals::light();
            v.panel_fill = egui::Color32::from_rgb(245, 246, 250);
            v.window_fill = egui::Color32::from_rgb(255, 255, 255);
            v.extreme_bg_color = egui::Color32::from_rgb(255, 255, 255);
            v
        }
        ThemeMode::Dark => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = Some(egui::Color32::from_rgb(236, 237, 240));
            v.panel_fill = egui::Color32::from_rgb(30, 31, 34);
            v.window_fill = egui::Color32::from_rgb(43, 45, 49);
            v.extreme_bg_color = egui::Color32::from_rgb(24, 25, 28);
            v
        }
    };

    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);
    visuals
}
