//! Header bar: app title plus the save/export/import/reset actions.

use eframe::egui;

use crate::ui::app_state::FinanceDashboardApp;

impl FinanceDashboardApp {
    pub fn draw_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("💰 Monthly Finance Dashboard")
                    .font(egui::FontId::proportional(26.0))
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(4.0);
                if ui
                    .button(egui::RichText::new("🗑 Reset").color(egui::Color32::from_rgb(176, 0, 32)))
                    .clicked()
                {
                    self.show_reset_confirmation = true;
                }
                if ui.button("📥 Import").clicked() {
                    self.import_clicked();
                }
                if ui.button("📤 Export").clicked() {
                    self.export_clicked();
                }
                if ui.button("💾 Save").clicked() {
                    self.save_clicked();
                }
            });
        });
    }
}
