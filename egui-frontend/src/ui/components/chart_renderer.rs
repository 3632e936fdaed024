//! Net worth trend chart.
//!
//! One point per entry: `invest_bal + emergency_bal - total debt`, plotted
//! against the entry's position with the month labels on the x axis.

use eframe::egui;
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

use crate::ui::app_state::FinanceDashboardApp;
use crate::ui::components::styling::{card_frame, card_heading, format_currency};

impl FinanceDashboardApp {
    pub fn draw_net_worth_chart(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            card_heading(ui, "Net Worth Over Time");

            let rows = &self.backend.state.rows;
            if rows.is_empty() {
                ui.label("Add a month to see the net worth trend.");
                return;
            }

            let raw_points: Vec<[f64; 2]> = rows
                .iter()
                .enumerate()
                .map(|(i, entry)| [i as f64, entry.net_worth()])
                .collect();
            let months: Vec<String> = rows.iter().map(|entry| entry.month.clone()).collect();
            let tooltip_months = months.clone();

            let line_points: PlotPoints = raw_points.iter().copied().collect();
            let line = Line::new(line_points)
                .color(egui::Color32::from_rgb(100, 150, 255))
                .stroke(egui::Stroke::new(3.0, egui::Color32::from_rgb(100, 150, 255)));

            let marker_points: PlotPoints = raw_points.iter().copied().collect();
            let markers = Points::new(marker_points)
                .color(egui::Color32::from_rgb(100, 150, 255))
                .filled(true)
                .radius(4.0)
                .shape(MarkerShape::Circle)
                .name("Net worth");

            Plot::new("net_worth_chart")
                .height(280.0)
                .show_axes([true, true])
                .show_grid([true, true])
                .allow_boxed_zoom(false)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .x_axis_formatter(move |mark, _range| {
                    // Grid marks land between entries while zoomed; only
                    // label the integer positions that map to a month.
                    let index = mark.value.round();
                    if (mark.value - index).abs() > 1e-6 || index < 0.0 {
                        return String::new();
                    }
                    months
                        .get(index as usize)
                        .cloned()
                        .unwrap_or_default()
                })
                .y_axis_formatter(|mark, _range| format_currency(mark.value))
                .label_formatter(move |name, value| {
                    if name != "Net worth" {
                        return String::new();
                    }
                    let index = value.x.round() as usize;
                    match tooltip_months.get(index) {
                        Some(month) => format!("{}: {}", month, format_currency(value.y)),
                        None => format_currency(value.y),
                    }
                })
                .show(ui, |plot_ui| {
                    plot_ui.line(line);
                    plot_ui.points(markers);
                });
        });
    }
}
