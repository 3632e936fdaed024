//! Setup cards: income targets, starting balances, and quick actions.

use eframe::egui;

use crate::ui::app_state::FinanceDashboardApp;
use crate::ui::components::styling::{card_frame, card_heading, format_currency};

impl FinanceDashboardApp {
    pub fn draw_setup_cards(&mut self, ui: &mut egui::Ui) {
        ui.columns(3, |columns| {
            self.draw_income_targets_card(&mut columns[0]);
            self.draw_starting_balances_card(&mut columns[1]);
            self.draw_quick_actions_card(&mut columns[2]);
        });
    }

    fn draw_income_targets_card(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            card_heading(ui, "Income Targets");

            let targets = &mut self.backend.state.income_targets;
            ui.horizontal(|ui| {
                ui.label("Stipend (₨)");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::DragValue::new(&mut targets.stipend)
                            .speed(1_000.0)
                            .range(0.0..=f64::MAX),
                    );
                });
            });
            ui.horizontal(|ui| {
                ui.label("Side income (₨)");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::DragValue::new(&mut targets.side)
                            .speed(1_000.0)
                            .range(0.0..=f64::MAX),
                    );
                });
            });
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!(
                    "Total monthly: {}",
                    format_currency(targets.total())
                ))
                .size(12.0)
                .color(egui::Color32::from_rgb(102, 102, 102)),
            );
        });
    }

    fn draw_starting_balances_card(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            card_heading(ui, "Starting Balances");

            let balances = &self.backend.state.balances;
            for (label, amount) in [
                ("Credit card", balances.debt_cc),
                ("Brother loan", balances.debt_brother),
                ("Student loan", balances.debt_student),
                ("Investments", balances.invest_bal),
                ("Emergency fund", balances.emergency_bal),
            ] {
                ui.horizontal(|ui| {
                    ui.label(label);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(format_currency(amount)).strong());
                    });
                });
            }
        });
    }

    fn draw_quick_actions_card(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            card_heading(ui, "🖩 Quick Actions");

            ui.horizontal(|ui| {
                let add_button = egui::Button::new(
                    egui::RichText::new("➕ Add Month").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(17, 17, 17));
                if ui.add(add_button).clicked() {
                    self.clear_messages();
                    self.backend.add_month();
                }
                if ui.button("Recalculate").clicked() {
                    self.clear_messages();
                    self.backend.recalculate();
                }
            });
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Start month")
                        .size(12.0)
                        .color(egui::Color32::from_rgb(102, 102, 102)),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut self.backend.state.start_month)
                        .desired_width(80.0)
                        .hint_text("YYYY-MM"),
                );
            });
        });
    }
}
