use eframe::egui;

use crate::ui::app_state::EmployeeRosterApp;
use crate::ui::components::theme::CURRENT_THEME;

impl EmployeeRosterApp {
    /// Render the page title with the roster size underneath
    pub fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(egui::RichText::new(&self.config.window_title)
                .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                .strong()
                .color(CURRENT_THEME.typography.heading));

            let count = self.employees().len();
            let subtitle = match count {
                0 => "No employees yet".to_string(),
                1 => "1 employee".to_string(),
                n => format!("{} employees", n),
            };
            ui.label(egui::RichText::new(subtitle)
                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                .color(CURRENT_THEME.typography.secondary));
            ui.add_space(15.0);
        });
    }
}
