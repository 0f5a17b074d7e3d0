use credentials::CredentialTable;
use eframe::egui::{self, FontId, RichText, TextStyle};
use eframe::CreationContext;
use log::debug;

use crate::form::LoginForm;
use crate::options::{AppOptions, DialogStyle};
use crate::ui::dialog;

pub const WINDOW_TITLE: &str = "Vibration Sensor Login";
pub const HEADING: &str = "Vibration Sensor System";

const WINDOW_SIZE: [f32; 2] = [400., 300.];
// Roughly 30 characters at the body font size
const FIELD_WIDTH: f32 = 220.;
const BODY_SIZE: f32 = 12.;
const HEADING_SIZE: f32 = 16.;
const HINT_SIZE: f32 = 10.;

/// Create the login window & run until it is closed
pub fn gui(options: AppOptions) -> Result<(), eframe::Error> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        // Places the window in the middle of the screen on first layout
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| Box::new(App::new(cc, options))),
    )
}

/// Text listing every user in a table, shown under the form
pub fn hint_text(table: &CredentialTable) -> String {
    table.iter().fold(String::from("Mockup Users:"), |acc, c| {
        acc + format!("\n{}/{}", c.username, c.password).as_str()
    })
}

struct App {
    form: LoginForm,
    dialogs: DialogStyle,
    hint: Option<String>,
}

impl eframe::App for App {
    // Called on every interaction
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw(ctx);
        self.present(ctx);
    }
}

impl App {
    fn new(cc: &CreationContext, options: AppOptions) -> Self {
        configure_style(&cc.egui_ctx);

        let table = CredentialTable::mock();
        let form = match options.username {
            Some(u) => LoginForm::with_username(table, u),
            None => LoginForm::new(table),
        };
        let hint = options.show_hint.then(|| hint_text(form.table()));
        debug!("Opening login window with {:?} dialogs", options.dialogs);

        Self {
            form,
            dialogs: options.dialogs,
            hint,
        }
    }

    // GUI elements
    fn draw(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(20.);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            // Inputs are locked while a dialog is waiting to be closed
            ui.add_enabled_ui(self.form.is_idle(), |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(HEADING).size(HEADING_SIZE).strong());
                });
                ui.add_space(20.);

                let mut submitted = false;
                egui::Grid::new("login_fields")
                    .num_columns(2)
                    .spacing([10., 10.])
                    .show(ui, |ui| {
                        ui.label("Username:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form.username)
                                .desired_width(FIELD_WIDTH),
                        );
                        ui.end_row();

                        ui.label("Password:");
                        let password = ui.add(
                            egui::TextEdit::singleline(&mut self.form.password)
                                .password(true)
                                .desired_width(FIELD_WIDTH),
                        );
                        // Enter in the password field acts the same as the button
                        submitted |= password.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        ui.end_row();
                    });

                ui.add_space(20.);
                ui.vertical_centered(|ui| {
                    submitted |= ui.button("Login").clicked();
                });

                if let Some(hint) = &self.hint {
                    ui.add_space(10.);
                    ui.label(RichText::new(hint.as_str()).size(HINT_SIZE));
                }

                if submitted {
                    let _ = self.form.submit();
                }
            });
        });
    }

    // Shows the pending notice, if there is one
    fn present(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.form.pending() else {
            return;
        };

        match self.dialogs {
            DialogStyle::Native => {
                dialog::show_native(notice);
                self.form.dismiss();
                // Redraw with the form enabled again
                ctx.request_repaint();
            }
            DialogStyle::Embedded => {
                if dialog::show_embedded(ctx, notice) {
                    self.form.dismiss();
                }
            }
        }
    }
}

// Applies font sizes to match the rest of the system's tools
fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(BODY_SIZE));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::proportional(BODY_SIZE));
    ctx.set_style(style);
}
