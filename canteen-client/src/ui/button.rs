//! Button loading state

use super::html::escape;

const LOADING_LABEL: &str = "⏳ Loading...";

/// A button that can be switched into a disabled "loading" state and back,
/// restoring its original label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingButton {
    id: String,
    label: String,
    original: Option<String>,
}

impl LoadingButton {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            original: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start(&mut self) {
        if self.original.is_none() {
            self.original = Some(std::mem::replace(
                &mut self.label,
                LOADING_LABEL.to_string(),
            ));
        }
    }

    pub fn stop(&mut self) {
        if let Some(original) = self.original.take() {
            self.label = original;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.original.is_some()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn render(&self) -> String {
        let disabled = if self.is_loading() { " disabled" } else { "" };
        format!(
            r#"<button id="{}" class="btn btn-primary"{}>{}</button>"#,
            self.id,
            disabled,
            escape(&self.label)
        )
    }
}
