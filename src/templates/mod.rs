//! Built-in StackScripts templates using the Tera template engine
//!
//! All templates are embedded in the binary; a site only supplies its
//! configuration, post list and assets.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::client::nav::ResolvedLink;

/// Template renderer with the embedded page shell
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Text is escaped explicitly with `| escape`; rendered markdown and JSON are not
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("stackscripts/layout.html")),
            ("index.html", include_str!("stackscripts/index.html")),
            ("blog.html", include_str!("stackscripts/blog.html")),
            ("post.html", include_str!("stackscripts/post.html")),
            ("page.html", include_str!("stackscripts/page.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("stackscripts/partials/header.html"),
            ),
            (
                "partials/hero.html",
                include_str!("stackscripts/partials/hero.html"),
            ),
            (
                "partials/grid.html",
                include_str!("stackscripts/partials/grid.html"),
            ),
            (
                "partials/footer.html",
                include_str!("stackscripts/partials/footer.html"),
            ),
            (
                "partials/particles.html",
                include_str!("stackscripts/partials/particles.html"),
            ),
        ])?;

        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: reformat a `YYYY-MM-DD` date; `LL` gives `March 10, 2024`
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "YYYY-MM-DD".to_string(),
    };

    let Ok(date) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") else {
        return Ok(tera::Value::String(s));
    };

    let formatted = match format.as_str() {
        "LL" => date.format("%B %-d, %Y").to_string(),
        "ll" => date.format("%b %-d, %Y").to_string(),
        _ => s,
    };
    Ok(tera::Value::String(formatted))
}

// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
    pub root: String,
    pub default_theme: String,
    pub generator_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandData {
    pub logo: String,
    pub logo_alt: String,
    pub prefix: String,
    pub accent: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchData {
    pub enabled: bool,
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToggleData {
    pub light_icon: String,
    pub dark_icon: String,
    pub initial_icon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionData {
    pub label: String,
    pub href: String,
    pub icon: String,
    pub aria_label: String,
    pub primary: bool,
    pub external: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroData {
    pub greeting: String,
    pub name: String,
    pub tagline: String,
    pub interests: String,
    pub welcome: String,
    pub actions: Vec<ActionData>,
}

/// Header, hero and footer shared by every page
#[derive(Debug, Clone, Serialize)]
pub struct ChromeData {
    pub brand: BrandData,
    pub home_href: String,
    pub blog_href: String,
    pub nav: Vec<ResolvedLink>,
    pub search: SearchData,
    pub toggle: ToggleData,
    pub hero: HeroData,
    pub footer_links: Vec<ResolvedLink>,
    pub social: Vec<ResolvedLink>,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridData {
    pub heading: String,
    pub heading_accent: String,
}

/// Asset URLs and inline script payloads
#[derive(Debug, Clone, Serialize)]
pub struct AssetsData {
    pub css: String,
    pub app_js: String,
    pub tailwind: Option<String>,
    pub font: Option<String>,
    pub guard_js: Option<String>,
    pub guard_payload: Option<String>,
    pub guard_cdn: Option<String>,
    pub particles_js: Option<String>,
    pub particles_options: Option<String>,
}

/// One post card in the grid
#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    /// Position in the post list, also the like-board index
    pub index: usize,
    pub title: String,
    pub href: String,
    pub thumbnail: String,
    pub category: String,
    pub category_href: String,
    pub author: String,
    pub date: String,
    pub likes: u32,
    pub liked: bool,
    /// Lower-cased text matched by the search box
    pub search: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostPageData {
    pub title: String,
    pub author: String,
    pub date: String,
    pub category: String,
    pub category_href: String,
    pub thumbnail: String,
    pub content: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryData {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_parse() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_date_format_filter() {
        let mut args = HashMap::new();
        args.insert("format".to_string(), tera::Value::String("LL".into()));
        let out = date_format_filter(&tera::Value::String("2024-03-10".into()), &args).unwrap();
        assert_eq!(out, tera::Value::String("March 10, 2024".into()));

        let out = date_format_filter(&tera::Value::String("2024-04-01".into()), &args).unwrap();
        assert_eq!(out, tera::Value::String("April 1, 2024".into()));

        let out =
            date_format_filter(&tera::Value::String("not a date".into()), &HashMap::new()).unwrap();
        assert_eq!(out, tera::Value::String("not a date".into()));
    }
}
