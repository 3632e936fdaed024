//! Summary cards: total income, total allocations, and current net worth.

use eframe::egui;

use crate::ui::app_state::FinanceDashboardApp;
use crate::ui::components::styling::{card_frame, format_currency};

impl FinanceDashboardApp {
    pub fn draw_summary_cards(&mut self, ui: &mut egui::Ui) {
        let totals = self.backend.totals();

        ui.columns(3, |columns| {
            summary_card(&mut columns[0], "Total Income", totals.income, None);
            summary_card(&mut columns[1], "Total Allocations", totals.outflow, None);
            summary_card(
                &mut columns[2],
                "Current Net Worth",
                totals.net_worth,
                Some("📈"),
            );
        });
    }
}

fn summary_card(ui: &mut egui::Ui, label: &str, amount: f64, icon: Option<&str>) {
    card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new(label)
                .size(12.0)
                .color(egui::Color32::from_rgb(102, 102, 102)),
        );
        ui.horizontal(|ui| {
            if let Some(icon) = icon {
                ui.label(egui::RichText::new(icon).size(20.0));
            }
            let color = if amount < 0.0 {
                egui::Color32::from_rgb(176, 0, 32)
            } else {
                egui::Color32::from_rgb(17, 17, 17)
            };
            ui.label(
                egui::RichText::new(format_currency(amount))
                    .font(egui::FontId::proportional(24.0))
                    .strong()
                    .color(color),
            );
        });
    });
}
