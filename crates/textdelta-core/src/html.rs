//! Pretty HTML rendering.

use crate::script::{EditScript, Op};

/// Renders a script as an HTML fragment with insertions and deletions
/// highlighted. `&`, `<` and `>` are escaped; newlines become a pilcrow
/// plus `<br>`.
pub fn pretty_html(script: &EditScript) -> String {
    let mut html = String::new();
    for (op, text) in script {
        let text = escape(text);
        match op {
            Op::Ins => {
                html.push_str("<ins style=\"background:#e6ffe6;\">");
                html.push_str(&text);
                html.push_str("</ins>");
            }
            Op::Del => {
                html.push_str("<del style=\"background:#ffe6e6;\">");
                html.push_str(&text);
                html.push_str("</del>");
            }
            Op::Eql => {
                html.push_str("<span>");
                html.push_str(&text);
                html.push_str("</span>");
            }
        }
    }
    html
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\n' => escaped.push_str("&para;<br>"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
