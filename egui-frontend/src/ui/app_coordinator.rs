//! # App Coordinator Module
//!
//! The `eframe::App` implementation: lays the single screen out top to
//! bottom (header, setup cards, summary cards, table, chart) inside one
//! scroll area, and draws the reset confirmation overlay when requested.

use eframe::egui;

use crate::ui::app_state::FinanceDashboardApp;

impl eframe::App for FinanceDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(egui::Color32::from_rgb(250, 250, 250)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(12.0);
                        self.draw_header(ui);
                        self.draw_message_line(ui);
                        ui.add_space(12.0);
                        self.draw_setup_cards(ui);
                        ui.add_space(12.0);
                        self.draw_summary_cards(ui);
                        ui.add_space(12.0);
                        self.draw_entries_table(ui);
                        ui.add_space(12.0);
                        self.draw_net_worth_chart(ui);
                        ui.add_space(16.0);
                    });
            });

        if self.show_reset_confirmation {
            self.draw_reset_confirmation(ctx);
        }
    }
}

impl FinanceDashboardApp {
    /// Transient success/error line under the header.
    fn draw_message_line(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = false;
        if let Some(message) = &self.error_message {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(176, 0, 32), message);
                if ui.small_button("✕").clicked() {
                    dismissed = true;
                }
            });
        } else if let Some(message) = &self.success_message {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(0, 128, 64), message);
                if ui.small_button("✕").clicked() {
                    dismissed = true;
                }
            });
        }
        if dismissed {
            self.clear_messages();
        }
    }

    /// Modal overlay asking the user to confirm a full reset.
    fn draw_reset_confirmation(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("reset_confirmation_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                egui::Frame::window(&ctx.style()).show(ui, |ui| {
                    ui.set_min_size(egui::vec2(320.0, 110.0));
                    ui.vertical_centered(|ui| {
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new("Reset all data?")
                                .font(egui::FontId::proportional(18.0))
                                .strong(),
                        );
                        ui.add_space(6.0);
                        ui.label("All rows are removed and the saved file is deleted.");
                        ui.add_space(12.0);
                        ui.horizontal(|ui| {
                            ui.add_space(60.0);
                            if ui.button("Cancel").clicked() {
                                self.show_reset_confirmation = false;
                            }
                            ui.add_space(10.0);
                            let reset_button = egui::Button::new(
                                egui::RichText::new("Reset").color(egui::Color32::WHITE),
                            )
                            .fill(egui::Color32::from_rgb(176, 0, 32));
                            if ui.add(reset_button).clicked() {
                                self.reset_confirmed();
                            }
                        });
                        ui.add_space(10.0);
                    });
                });
            });
    }
}
