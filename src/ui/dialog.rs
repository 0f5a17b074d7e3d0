use eframe::egui;

use crate::form::{Level, Notice};

/// Shows a notice in a native message box
/// Blocks the UI thread until the user presses OK or closes the box
pub fn show_native(notice: &Notice) {
    let level = match notice.level {
        Level::Info => rfd::MessageLevel::Info,
        Level::Error => rfd::MessageLevel::Error,
    };

    // Closing the box counts as dismissing it, so which button was used doesn't matter
    let _ = rfd::MessageDialog::new()
        .set_level(level)
        .set_title(notice.title)
        .set_description(notice.message.as_str())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Draws a notice as a fixed window in the centre of the form
/// Must be called every frame while the notice is pending, and returns true once OK is pressed
pub fn show_embedded(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut dismissed = false;

    egui::Window::new(notice.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let colour = match notice.level {
                Level::Info => ui.visuals().text_color(),
                Level::Error => ui.visuals().error_fg_color,
            };
            ui.colored_label(colour, notice.message.as_str());
            ui.add_space(8.);
            ui.vertical_centered(|ui| {
                dismissed = ui.button("OK").clicked();
            });
        });

    dismissed
}
