//! Markdown Rendering
//!
//! Renders note bodies to HTML for the preview pane. Plain pulldown-cmark
//! with tables and strikethrough enabled; no syntax highlighting.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render a note body to HTML.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("# Heading\n\nsome *text*");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn renders_task_lists() {
        let html = render_markdown("- [x] done\n- [ ] pending");
        assert!(html.contains("checkbox"));
    }
}
