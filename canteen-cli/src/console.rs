//! Terminal rendering of page output

use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use canteen_client::pages::ALERT_TARGET;
use canteen_client::ui::{NoticeKind, Toast};
use canteen_client::{MemoryView, Navigator, Route, View};
use regex::Regex;

static TAG_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"<[^>]*>"));

/// Visible text of a fragment
pub fn plain_text(html: &str) -> String {
    let stripped = match TAG_RE.as_ref() {
        Ok(re) => re.replace_all(html, " ").into_owned(),
        Err(_) => html.to_string(),
    };
    let text = stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn label(target: &str) -> &str {
    match target {
        "walletBalance" => "Balance",
        "studentName" | "userName" => "Name",
        "studentRoll" => "Student",
        "userRoll" => "Roll No",
        "totalOrders" => "Total orders",
        "totalSpent" => "Total spent",
        "confirmedOrders" => "Confirmed",
        "formTitle" => "Form",
        other => other,
    }
}

/// Prints text updates, alerts and toasts as they happen and keeps every
/// fragment for later inspection.
pub struct ConsoleView {
    inner: MemoryView,
    assume_yes: bool,
}

impl ConsoleView {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            inner: MemoryView::new(),
            assume_yes,
        }
    }
}

impl View for ConsoleView {
    fn set_html(&self, target: &str, html: String) {
        if target == ALERT_TARGET {
            println!("{}", plain_text(&html));
        } else {
            tracing::debug!(container = target, bytes = html.len(), "render");
        }
        self.inner.set_html(target, html);
    }

    fn set_text(&self, target: &str, text: String) {
        println!("{}: {}", label(target), text);
        self.inner.set_text(target, text);
    }

    fn show_toast(&self, toast: Toast) {
        let icon = match toast.kind {
            NoticeKind::Success => "✅",
            NoticeKind::Error => "❌",
        };
        println!("{} {}", icon, toast.message);
        self.inner.show_toast(toast);
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }
}

/// Reports where the page would have sent the browser
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        println!("→ {}", route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let html = r#"<div class="alert alert-error"><span>❌</span><span>Tom &amp; Jerry</span></div>"#;
        assert_eq!(plain_text(html), "❌ Tom & Jerry");
    }

    #[test]
    fn test_view_keeps_fragments() {
        let view = ConsoleView::new(true);
        view.set_html("foodGrid", "<h3>Masala Chai</h3>".into());
        let html = view.inner.content("foodGrid").unwrap();
        assert_eq!(plain_text(&html), "Masala Chai");
        assert!(view.confirm("Are you sure you want to logout?"));
    }
}
