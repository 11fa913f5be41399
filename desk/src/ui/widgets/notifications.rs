//! # Notifications Widget
//!
//! Toast notifications using egui-notify. The app queues [`Notice`]s; the frame
//! loop drains them into the toasts.

use egui_notify::Toasts;

use crate::app::{Notice, NoticeLevel};

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    pub fn warning(&mut self, message: String) {
        self.toasts.warning(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Show a queued notice with its level
    pub fn push(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => self.success(notice.message),
            NoticeLevel::Info => self.info(notice.message),
            NoticeLevel::Warning => self.warning(notice.message),
            NoticeLevel::Error => self.error(notice.message),
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
