//! Host-side rendering helpers for component tests.

use dioxus::prelude::*;

/// Renders a root component to HTML.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Markup between the first `<tag ...>` and the matching-by-name `</tag>`.
/// Does not handle the same tag nested inside itself.
pub fn inner_html<'a>(html: &'a str, tag: &str) -> Option<&'a str> {
    let open = html.find(&format!("<{tag}"))?;
    let start = open + html[open..].find('>')? + 1;
    let end = start + html[start..].find(&format!("</{tag}>"))?;

    Some(&html[start..end])
}

/// Text left after stripping tags and comments, trimmed.
pub fn text_content(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.trim().to_string()
}
