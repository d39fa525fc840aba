use pulldown_cmark::{html, Options, Parser};

/// Renders markdown (league descriptions) to an HTML fragment.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);
    rendered
}
