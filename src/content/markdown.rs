//! Markdown rendering with syntax highlighting

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::helpers::html_escape;

/// Markdown renderer for post bodies and standalone pages
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::with_theme("base16-ocean.dark")
    }

    pub fn with_theme(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
        }
    }

    /// Render markdown to HTML, highlighting fenced code blocks
    pub fn render(&self, markdown: &str) -> Result<String> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;

        let mut events: Vec<Event> = Vec::new();
        // (language, source) while inside a code block
        let mut code: Option<(String, String)> = None;

        for event in Parser::new_ext(markdown, options) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => {
                            info.split_whitespace().next().unwrap_or("").to_string()
                        }
                        CodeBlockKind::Indented => String::new(),
                    };
                    code = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, body)) = code.take() {
                        let lang = (!lang.is_empty()).then_some(lang.as_str());
                        events.push(Event::Html(CowStr::from(self.highlight(&body, lang))));
                    }
                }
                Event::Text(text) if code.is_some() => {
                    if let Some((_, body)) = code.as_mut() {
                        body.push_str(&text);
                    }
                }
                other => {
                    if code.is_none() {
                        events.push(other);
                    }
                }
            }
        }

        let mut output = String::new();
        html::push_html(&mut output, events.into_iter());
        Ok(output)
    }

    fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let highlighted = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
            .and_then(|theme| {
                highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok()
            });

        match highlighted {
            Some(html) => format!(r#"<figure class="highlight {}">{}</figure>"#, lang, html),
            None => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang,
                html_escape(code)
            ),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Async\n\nMastering asyncio.").unwrap();
        assert!(html.contains("<h1>Async</h1>"));
        assert!(html.contains("<p>Mastering asyncio.</p>"));
    }

    #[test]
    fn test_render_code_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer
            .render("```python\nmatch point:\n    case (0, 0): pass\n```")
            .unwrap();
        assert!(html.contains(r#"<figure class="highlight python">"#));
        assert!(html.contains("match"));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```nosuchlang\nx < y\n```").unwrap();
        assert!(html.contains("highlight nosuchlang"));
        assert!(html.contains("&lt;"));
    }
}
