use eframe::egui::{
    self, Align, Align2, CentralPanel, ColorImage, Context, Frame, Layout, Margin, RichText, ScrollArea,
    SidePanel, TextEdit, TextureOptions, TopBottomPanel, Ui, Window,
};

use crate::config::APP;
use crate::ui::app::{ChartBotApp, PreviewState};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{HistoryEvent, HistoryPanel, Panel};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl ChartBotApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let busy = self.is_analyzing();

                if ui
                    .add_enabled(!busy, egui::Button::new(UI_TEXT.open_button))
                    .clicked()
                {
                    self.pick_image();
                }

                let analyze_label = if busy {
                    UI_TEXT.analyzing_button
                } else {
                    UI_TEXT.analyze_button
                };
                if ui
                    .add_enabled(self.can_analyze(), egui::Button::new(analyze_label))
                    .clicked()
                {
                    self.start_analysis();
                }

                if busy {
                    ui.spinner();
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.toggle_value(&mut self.show_history, UI_TEXT.history_toggle);
                    if ui
                        .add_enabled(!self.output.is_empty(), egui::Button::new(UI_TEXT.copy_button))
                        .clicked()
                    {
                        ctx.copy_text(self.output.clone());
                        self.status_note = Some(UI_TEXT.copied);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let status = format!(
                    "Tesseract: {}  |  v{}",
                    self.engine_status(),
                    APP.version
                );
                ui.label_status(status, self.analyzer.engine().is_some());

                if let Some(note) = self.status_note {
                    ui.separator();
                    ui.label_subdued(note);
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label_subdued(UI_TEXT.disclaimer);
                });
            });
        });
    }

    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(8));
        let events = SidePanel::right("history_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| HistoryPanel::new(&self.history).render(ui))
            .inner;

        for event in events {
            match event {
                HistoryEvent::Show(index) => self.show_history_entry(index),
                HistoryEvent::Clear => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("Clearing {} history entries", self.history.len());
                    }
                    self.history.clear();
                }
            }
        }
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(8));

        // Output first so the preview gets whatever height is left
        TopBottomPanel::bottom("output_panel")
            .resizable(true)
            .min_height(UI_CONFIG.output_min_height)
            .frame(central_panel_frame)
            .show(ctx, |ui| self.render_output(ui));

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| self.render_preview(ui));
    }

    fn render_preview(&mut self, ui: &mut Ui) {
        let preview_frame = Frame::new()
            .fill(UI_CONFIG.colors.preview_background)
            .inner_margin(Margin::same(10));

        preview_frame.show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.centered_and_justified(|ui| match &mut self.preview {
                PreviewState::Empty => {
                    ui.label(RichText::new(UI_TEXT.no_image).color(UI_CONFIG.colors.preview_text));
                }
                PreviewState::Failed(err) => {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(UI_TEXT.image_load_failed)
                                .color(UI_CONFIG.colors.error),
                        );
                        ui.label_subdued(err.to_string());
                    });
                }
                PreviewState::Loaded { chart, texture } => {
                    let handle = texture.get_or_insert_with(|| {
                        let image = ColorImage::from_rgba_unmultiplied(chart.size(), chart.rgba());
                        ui.ctx()
                            .load_texture("chart_preview", image, TextureOptions::LINEAR)
                    });
                    let size = chart.preview_size(APP.preview_max_width, ui.available_width());
                    ScrollArea::vertical()
                        .id_salt("chart_preview")
                        .show(ui, |ui| {
                            let [source_w, source_h] = chart.source_size();
                            ui.image((handle.id(), egui::vec2(size[0], size[1])))
                                .on_hover_text(format!(
                                    "{} ({}×{} px)",
                                    chart.file_name(),
                                    source_w,
                                    source_h
                                ));
                        });
                }
            });
        });
    }

    fn render_output(&mut self, ui: &mut Ui) {
        ScrollArea::vertical()
            .id_salt("report_output")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                // Read-only: a &str buffer cannot be edited
                let mut text = self.output.as_str();
                ui.add(
                    TextEdit::multiline(&mut text)
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
    }

    pub(super) fn render_warning_window(&mut self, ctx: &Context) {
        let Some(warning) = self.warning.clone() else {
            return;
        };

        let mut dismissed = false;
        Window::new(warning.title())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(warning.to_string());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button(UI_TEXT.ok_button).clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.warning = None;
        }
    }
}
