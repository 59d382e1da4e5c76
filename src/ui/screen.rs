//! Terminal-side state behind the [`Surface`](crate::surface::Surface) handle.

use super::form::Form;
use crate::surface::{Surface, Visibility};
use ratatui::layout::Rect;
use std::collections::VecDeque;

/// Modal visibility and the text node it displays
#[derive(Debug, Default)]
pub struct ModalView {
    pub visibility: Visibility,
    pub text: String,
    pub scroll: u16,
}

/// Where the form widgets were drawn in the last frame
#[derive(Debug, Default, Clone, Copy)]
pub struct FormLayout {
    pub article_text: Rect,
    pub article_url: Rect,
    pub trigger: Rect,
}

/// Everything the terminal shows. Implements [`Surface`] for the controller.
#[derive(Debug, Default)]
pub struct Screen {
    pub form: Form,
    pub modal: ModalView,
    pub layout: FormLayout,
    alerts: VecDeque<String>,
}

impl Screen {
    /// Alert currently blocking input, if any
    pub fn alert_message(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn acknowledge_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn scroll_modal_down(&mut self) {
        self.modal.scroll = self.modal.scroll.saturating_add(1);
    }

    pub fn scroll_modal_up(&mut self) {
        self.modal.scroll = self.modal.scroll.saturating_sub(1);
    }
}

impl Surface for Screen {
    fn alert(&mut self, message: &str) {
        self.alerts.push_back(message.to_string());
    }

    fn set_modal_text(&mut self, text: &str) {
        self.modal.text = text.to_string();
        self.modal.scroll = 0;
    }

    fn set_modal_visibility(&mut self, visibility: Visibility) {
        self.modal.visibility = visibility;
    }

    fn modal_visibility(&self) -> Visibility {
        self.modal.visibility
    }
}
