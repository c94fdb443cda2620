use eframe::egui::{RichText, ScrollArea, Ui};
use std::collections::VecDeque;
use strum::IntoEnumIterator;

use crate::analysis::Bias;
use crate::ui::app::HistoryEntry;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{format_level, spaced_separator};
use crate::utils::TimeUtils;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    /// Put the stored report back in the output area
    Show(usize),
    Clear,
}

/// Session history, newest first.
pub(super) struct HistoryPanel<'a> {
    entries: &'a VecDeque<HistoryEntry>,
}

impl<'a> HistoryPanel<'a> {
    pub(super) fn new(entries: &'a VecDeque<HistoryEntry>) -> Self {
        Self { entries }
    }

    fn render_bias_summary(&self, ui: &mut Ui) {
        for bias in Bias::iter() {
            let count = self.entries.iter().filter(|e| e.bias() == bias).count();
            ui.label_bias_count(bias, count);
        }
    }

    fn render_entry(&self, ui: &mut Ui, index: usize, entry: &HistoryEntry) -> bool {
        let mut clicked = false;
        ui.horizontal(|ui| {
            ui.label_subdued(TimeUtils::clock(&entry.at));
            let title = RichText::new(&entry.report.file_name)
                .color(UI_CONFIG.colors.subsection_heading);
            clicked = ui
                .selectable_label(false, title)
                .on_hover_text(format!(
                    "{}\n{} • {}",
                    entry.image_path.display(),
                    TimeUtils::standard(&entry.at),
                    TimeUtils::short_duration(entry.elapsed)
                ))
                .clicked();
        });
        ui.horizontal(|ui| {
            ui.label_bias(entry.bias());
            let level = entry
                .entry_level()
                .map(format_level)
                .unwrap_or_else(|| UI_TEXT.no_levels_short.to_string());
            ui.label_subdued(level);
        });
        if index + 1 < self.entries.len() {
            ui.separator();
        }
        clicked
    }
}

impl Panel for HistoryPanel<'_> {
    type Event = HistoryEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<HistoryEvent> {
        let mut events = Vec::new();

        ui.heading(
            RichText::new(UI_TEXT.history_heading.to_uppercase())
                .color(UI_CONFIG.colors.heading)
                .monospace(),
        );

        if self.entries.is_empty() {
            ui.label_subdued(UI_TEXT.history_empty);
            return events;
        }

        self.render_bias_summary(ui);
        if ui.small_button(UI_TEXT.history_clear).clicked() {
            events.push(HistoryEvent::Clear);
        }
        spaced_separator(ui);

        ScrollArea::vertical()
            .id_salt("history_panel")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, entry) in self.entries.iter().enumerate() {
                    if self.render_entry(ui, index, entry) {
                        events.push(HistoryEvent::Show(index));
                    }
                }
            });

        events
    }
}
