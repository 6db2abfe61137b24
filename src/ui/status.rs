//! Transient status notice shown under the app banner
//!
//! Export results land here so a failed browser launch is visible in the
//! UI rather than only in the logs.

use eframe::egui;

use super::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Holds at most one message at a time; a new notice replaces the old one.
#[derive(Default)]
pub struct StatusNotice {
    current: Option<(NoticeKind, String)>,
}

impl StatusNotice {
    pub fn info(&mut self, text: impl Into<String>) {
        self.current = Some((NoticeKind::Info, text.into()));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.current = Some((NoticeKind::Error, text.into()));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn message(&self) -> Option<(&NoticeKind, &str)> {
        self.current.as_ref().map(|(kind, text)| (kind, text.as_str()))
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some((kind, text)) = &self.current else {
            return;
        };
        let color = match kind {
            NoticeKind::Info => theme::NOTICE_INFO,
            NoticeKind::Error => theme::NOTICE_ERROR,
        };
        let text = text.clone();
        let mut dismissed = false;
        ui.horizontal(|ui| {
            ui.colored_label(color, text);
            if ui.small_button("\u{2715}").clicked() {
                dismissed = true;
            }
        });
        if dismissed {
            self.current = None;
        }
    }
}
