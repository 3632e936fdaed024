//! Editable monthly entries table.
//!
//! One row per entry: the month and the nine raw income/allocation fields
//! are editable, the five balance columns are read-only output of the
//! projector. Editing any numeric cell re-projects from that row.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::ui::app_state::FinanceDashboardApp;
use crate::ui::components::styling::{card_frame, card_heading, format_currency};

const HEADERS: [&str; 15] = [
    "Month", "Stipend", "Side", "Debt", "Save", "Emerg", "Fixed", "Var", "Skills", "Charity",
    "CC", "Brother", "Student", "Invest Bal", "Emerg Bal",
];

impl FinanceDashboardApp {
    pub fn draw_entries_table(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            card_heading(ui, "Monthly Entries");

            if self.backend.state.rows.is_empty() {
                ui.label("No months yet. Use Add Month to create the first row.");
                return;
            }

            let mut edited: Option<usize> = None;
            {
                let rows = &mut self.backend.state.rows;
                egui::ScrollArea::horizontal().show(ui, |ui| {
                    TableBuilder::new(ui)
                        .striped(true)
                        .resizable(false)
                        .vscroll(false) // the page itself scrolls
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                        .column(Column::exact(80.0)) // month
                        .columns(Column::exact(78.0), 9) // editable amounts
                        .columns(Column::exact(100.0), 5) // projected balances
                        .header(26.0, |mut header| {
                            for title in HEADERS {
                                header.col(|ui| {
                                    ui.label(egui::RichText::new(title).strong());
                                });
                            }
                        })
                        .body(|mut body| {
                            for (index, entry) in rows.iter_mut().enumerate() {
                                body.row(26.0, |mut row| {
                                    row.col(|ui| {
                                        ui.add(
                                            egui::TextEdit::singleline(&mut entry.month)
                                                .desired_width(70.0)
                                                .hint_text("YYYY-MM"),
                                        );
                                    });
                                    for value in [
                                        &mut entry.stipend,
                                        &mut entry.side_income,
                                        &mut entry.debt_repayment,
                                        &mut entry.savings,
                                        &mut entry.emergency,
                                        &mut entry.fixed_costs,
                                        &mut entry.variable_costs,
                                        &mut entry.skills,
                                        &mut entry.charity,
                                    ] {
                                        row.col(|ui| {
                                            let response = ui.add(
                                                egui::DragValue::new(value)
                                                    .speed(1_000.0)
                                                    .range(0.0..=f64::MAX),
                                            );
                                            if response.changed() {
                                                edited = Some(index);
                                            }
                                        });
                                    }
                                    for balance in [
                                        entry.debt_cc,
                                        entry.debt_brother,
                                        entry.debt_student,
                                        entry.invest_bal,
                                        entry.emergency_bal,
                                    ] {
                                        row.col(|ui| {
                                            ui.label(format_currency(balance));
                                        });
                                    }
                                });
                            }
                        });
                });
            }

            if let Some(index) = edited {
                self.backend.entry_edited(index);
            }
        });
    }
}
