//! Markdown rendering for the analysis report.
//!
//! The backend speaks GitHub-flavored Markdown (tables, strikethrough,
//! task lists), so those extensions are enabled on top of CommonMark.
//! The same renderer feeds the on-screen panel and the HTML-based exports.

use pulldown_cmark::{html, Options, Parser};

/// Render a Markdown document to an HTML fragment.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let out = to_html("# Skills Assessment\n\nYou are doing fine.");
        assert!(out.contains("<h1>Skills Assessment</h1>"));
        assert!(out.contains("<p>You are doing fine.</p>"));
    }

    #[test]
    fn renders_gfm_tables() {
        let out = to_html("| Skill | Level |\n| --- | --- |\n| Rust | Senior |");
        assert!(out.contains("<table>"));
        assert!(out.contains("<td>Rust</td>"));
    }

    #[test]
    fn renders_fenced_code_blocks() {
        let out = to_html("```\nExample skill match: 85%\n```");
        assert!(out.contains("<pre><code>Example skill match: 85%"));
    }

    #[test]
    fn renders_strikethrough_and_task_lists() {
        let out = to_html("~~old goal~~\n\n- [x] Learn Rust\n- [ ] Ship it");
        assert!(out.contains("<del>old goal</del>"));
        assert!(out.contains("checked"));
    }

    #[test]
    fn renders_blockquotes() {
        let out = to_html("> Pro tip: be specific.");
        assert!(out.contains("<blockquote>"));
    }

    #[test]
    fn empty_input_renders_empty_fragment() {
        assert_eq!(to_html(""), "");
    }
}
