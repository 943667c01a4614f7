//! Fragment building blocks
//!
//! Pages assemble their fragments with `format!`; these helpers cover the
//! pieces every page needs: escaping, loading skeletons and the empty/error
//! state panel.

use std::fmt::Write;

/// Escape text for use inside element content or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `count` placeholder cards mimicking a card grid
pub fn skeleton_cards(count: usize, card_class: &str, body_class: &str, lines: usize) -> String {
    let mut body = String::new();
    for i in 0..lines {
        let class = if i == 1 {
            "skeleton-text short"
        } else {
            "skeleton-text"
        };
        let _ = write!(body, r#"<div class="{class}"></div>"#);
    }

    let card = format!(
        r#"<div class="{card_class} skeleton"><div class="skeleton-image"></div><div class="{body_class}">{body}</div></div>"#
    );
    card.repeat(count)
}

/// Centered spinner line used by list pages while loading
pub fn loading_panel(message: &str) -> String {
    format!(
        r#"<div class="loading-panel"><div class="loading-icon">⏳</div><div class="loading-message">{}</div></div>"#,
        escape(message)
    )
}

/// What the button in an empty/error panel does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// Re-run a page handler, e.g. `loadMenu`
    Retry { handler: &'static str },
    /// Plain link to another page
    Link { href: String, label: String },
}

/// Empty-state / error-state panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePanel {
    pub class: &'static str,
    pub icon: &'static str,
    pub title: String,
    pub message: String,
    pub action: Option<PanelAction>,
}

impl StatePanel {
    pub fn new(icon: &'static str, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class: "empty-state",
            icon,
            title: title.into(),
            message: message.into(),
            action: None,
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    pub fn with_retry(mut self, handler: &'static str) -> Self {
        self.action = Some(PanelAction::Retry { handler });
        self
    }

    pub fn with_link(mut self, href: impl Into<String>, label: impl Into<String>) -> Self {
        self.action = Some(PanelAction::Link {
            href: href.into(),
            label: label.into(),
        });
        self
    }

    pub fn render(&self) -> String {
        let action = match &self.action {
            Some(PanelAction::Retry { handler }) => format!(
                r#"<button class="btn btn-primary" data-action="{handler}">Retry</button>"#
            ),
            Some(PanelAction::Link { href, label }) => format!(
                r#"<a href="{}" class="btn btn-primary">{}</a>"#,
                escape(href),
                escape(label)
            ),
            None => String::new(),
        };

        format!(
            r#"<div class="{}"><div class="empty-icon">{}</div><h3 class="empty-title">{}</h3><p class="empty-message">{}</p>{}</div>"#,
            self.class,
            self.icon,
            escape(&self.title),
            escape(&self.message),
            action
        )
    }
}
