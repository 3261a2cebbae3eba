use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::FormInput;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::UiEvent,
        reducer::{self, SubmissionView},
        submission::submit_form,
        theme::{on_theme_toggle, ThemeMode},
    },
    ui::theme::visuals_for_mode,
};

pub struct PdfGeneratorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    form: FormInput,
    view: SubmissionView,
    theme: ThemeMode,
    theme_toggle_label: &'static str,
    applied_theme: Option<ThemeMode>,
}

impl PdfGeneratorApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let theme = ThemeMode::default();
        Self {
            cmd_tx,
            ui_rx,
            form: FormInput::default(),
            view: SubmissionView::default(),
            theme,
            theme_toggle_label: theme.toggle_label(),
            applied_theme: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            reducer::apply(&mut self.view, event);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme != Some(self.theme) {
            ctx.set_visuals(visuals_for_mode(self.theme));
            self.applied_theme = Some(self.theme);
        }
    }

    fn form_field(
        ui: &mut egui::Ui,
        id: &'static str,
        label: &str,
        hint: &str,
        value: &mut String,
    ) -> egui::Response {
        ui.label(egui::RichText::new(label).strong());
        let edit = egui::TextEdit::singleline(value)
            .id_salt(id)
            .hint_text(
                egui::RichText::new(hint)
                    .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
            )
            .desired_width(f32::INFINITY);
        let response = ui.add_sized([ui.available_width(), 30.0], edit);
        ui.add_space(6.0);
        response
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("AI PDF Generator");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.theme_toggle_label).clicked() {
                        self.theme_toggle_label = on_theme_toggle(&mut self.theme);
                    }
                });
            });
        });
    }

    fn show_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                Self::form_field(
                    ui,
                    "word_input",
                    "Keyword",
                    "Single keyword, e.g. Investment",
                    &mut self.form.word,
                );
                Self::form_field(ui, "pages_input", "Pages", "1-5", &mut self.form.pages);
                Self::form_field(
                    ui,
                    "company_input",
                    "Company",
                    "Company name",
                    &mut self.form.company,
                );
                Self::form_field(ui, "title_input", "Title", "Document title", &mut self.form.title);
                Self::form_field(ui, "author_input", "Author", "Author name", &mut self.form.author);
                Self::form_field(
                    ui,
                    "subject_input",
                    "Subject",
                    "Document subject",
                    &mut self.form.subject,
                );

                ui.add_space(8.0);
                let generate = ui.add_sized(
                    [ui.available_width(), 36.0],
                    egui::Button::new(egui::RichText::new("Generate PDF").strong().size(16.0)),
                );
                if generate.clicked() {
                    submit_form(&self.form, &mut self.view, &self.cmd_tx);
                }

                ui.add_space(10.0);
                self.show_status(ui);
            });
        });
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        if let Some(message) = self.view.status.error_text() {
            ui.colored_label(ui.visuals().error_fg_color, message);
        }
        if let Some(text) = self.view.status.progress_text() {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label(text);
            });
        }
        if let Some(path) = &self.view.last_saved {
            ui.small(egui::RichText::new(format!("Last saved: {}", path.display())).weak());
        }
    }
}

impl eframe::App for PdfGeneratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        self.show_top_bar(ctx);
        self.show_form(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
