//! Render targets
//!
//! A [`View`] is the page surface: named containers whose content is
//! replaced wholesale, a toast slot and a yes/no confirmation prompt.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ui::{Toast, ToastHost};

pub trait View: Send + Sync {
    /// Replace a container's markup
    fn set_html(&self, target: &str, html: String);

    /// Replace a container's text
    fn set_text(&self, target: &str, text: String);

    fn show_toast(&self, toast: Toast);

    /// Ask the user a yes/no question
    fn confirm(&self, message: &str) -> bool;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory view keeping the latest content of every container
#[derive(Debug)]
pub struct MemoryView {
    content: Mutex<HashMap<String, String>>,
    renders: Mutex<HashMap<String, usize>>,
    toasts: ToastHost,
    toast_log: Mutex<Vec<Toast>>,
    confirm_answer: AtomicBool,
    prompts: Mutex<Vec<String>>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self {
            content: Mutex::default(),
            renders: Mutex::default(),
            toasts: ToastHost::new(),
            toast_log: Mutex::default(),
            confirm_answer: AtomicBool::new(true),
            prompts: Mutex::default(),
        }
    }
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of a container
    pub fn content(&self, target: &str) -> Option<String> {
        lock(&self.content).get(target).cloned()
    }

    /// How many times a container has been replaced
    pub fn render_count(&self, target: &str) -> usize {
        lock(&self.renders).get(target).copied().unwrap_or(0)
    }

    /// Toast currently on screen
    pub fn toast(&self) -> Option<Toast> {
        self.toasts.current()
    }

    /// Every toast shown so far, expired or not
    pub fn toast_log(&self) -> Vec<Toast> {
        lock(&self.toast_log).clone()
    }

    /// Answer given to every subsequent confirmation prompt
    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.store(answer, Ordering::SeqCst);
    }

    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    fn replace(&self, target: &str, value: String) {
        lock(&self.content).insert(target.to_string(), value);
        *lock(&self.renders).entry(target.to_string()).or_default() += 1;
    }
}

impl View for MemoryView {
    fn set_html(&self, target: &str, html: String) {
        self.replace(target, html);
    }

    fn set_text(&self, target: &str, text: String) {
        self.replace(target, text);
    }

    fn show_toast(&self, toast: Toast) {
        lock(&self.toast_log).push(toast.clone());
        self.toasts.show(toast);
    }

    fn confirm(&self, message: &str) -> bool {
        lock(&self.prompts).push(message.to_string());
        self.confirm_answer.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_replaced_wholesale() {
        let view = MemoryView::new();
        view.set_html("foodGrid", "<div>a</div>".into());
        view.set_html("foodGrid", "<div>b</div>".into());
        assert_eq!(view.content("foodGrid").as_deref(), Some("<div>b</div>"));
        assert_eq!(view.render_count("foodGrid"), 2);
        assert_eq!(view.render_count("other"), 0);
    }

    #[test]
    fn test_confirm_answer_and_prompts() {
        let view = MemoryView::new();
        assert!(view.confirm("Are you sure?"));
        view.answer_confirm(false);
        assert!(!view.confirm("Really?"));
        assert_eq!(view.prompts(), vec!["Are you sure?", "Really?"]);
    }
}
