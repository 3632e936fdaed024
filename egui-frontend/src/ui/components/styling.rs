//! Shared styling helpers: the card frame used by every section and the
//! rupee currency formatter.

use eframe::egui;

/// White card with rounded corners and a soft shadow, used for every
/// section of the screen.
pub fn card_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(egui::Color32::WHITE)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(14.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(0.0, 1.0),
            blur: 3.0,
            spread: 0.0,
            color: egui::Color32::from_black_alpha(16),
        })
}

/// Section heading inside a card.
pub fn card_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::proportional(16.0))
            .strong(),
    );
    ui.add_space(6.0);
}

/// Format a rupee amount with thousands separators and no decimals,
/// e.g. `-1234567.0` -> `"-₨ 1,234,567"`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;

    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-₨ {}", grouped)
    } else {
        format!("₨ {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "₨ 0");
        assert_eq!(format_currency(950.0), "₨ 950");
        assert_eq!(format_currency(48_000.0), "₨ 48,000");
        assert_eq!(format_currency(1_900_000.0), "₨ 1,900,000");
    }

    #[test]
    fn test_format_currency_negative_and_rounding() {
        assert_eq!(format_currency(-1_900_000.0), "-₨ 1,900,000");
        assert_eq!(format_currency(1234.6), "₨ 1,235");
    }
}
