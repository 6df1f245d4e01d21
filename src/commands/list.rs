//! List site content

use anyhow::Result;

use crate::client::{GuardAction, GuardScript, KeyRule};
use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Render the listing for `content_type` as printable lines
pub fn lines(site: &Site, content_type: &str) -> Result<Vec<String>> {
    let loader = ContentLoader::new(site);
    let mut out = Vec::new();

    match content_type {
        "post" | "posts" => {
            let catalog = loader.load_posts()?;
            out.push(format!("Posts ({}):", catalog.len()));
            for post in &catalog {
                out.push(format!(
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.category
                ));
            }
        }
        "category" | "categories" => {
            let categories = loader.load_posts()?.categories();
            out.push(format!("Categories ({}):", categories.len()));
            for (name, count) in categories {
                out.push(format!("  {} ({})", name, count));
            }
        }
        "route" | "routes" => {
            let catalog = loader.load_posts()?;
            let pages = loader.load_pages()?;
            let routes = Generator::new(site)?.routes(&catalog, &pages);
            out.push(format!("Routes ({}):", routes.len()));
            out.extend(routes.into_iter().map(|r| format!("  {}", r)));
        }
        "guard" => {
            let guard = GuardScript::new(&site.config.guard);
            let state = if guard.enabled() { "enabled" } else { "disabled" };
            out.push(format!(
                "Guard ({}), devtools threshold {}px:",
                state,
                guard.detector().threshold
            ));
            for rule in guard.keys().rules() {
                out.push(format!("  {:<16} {}", describe(rule), action_name(rule.action)));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, route, guard",
                content_type
            );
        }
    }

    Ok(out)
}

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    for line in lines(site, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// `Ctrl+Shift+I` style chord name
fn describe(rule: &KeyRule) -> String {
    let mut chord = String::new();
    if rule.ctrl {
        chord.push_str("Ctrl+");
    }
    if rule.shift {
        chord.push_str("Shift+");
    }
    chord.push_str(&rule.key);
    if rule.ignore_case {
        chord.push_str(" (any case)");
    }
    chord
}

fn action_name(action: GuardAction) -> &'static str {
    match action {
        GuardAction::Allow => "allow",
        GuardAction::Suppress => "suppress",
        GuardAction::Block => "block",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> (TempDir, Site) {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        (tmp, site)
    }

    #[test]
    fn test_list_posts_in_list_order() {
        let (_tmp, site) = site();
        let out = lines(&site, "post").unwrap();
        assert_eq!(out[0], "Posts (12):");
        assert_eq!(
            out[1],
            "  2024-03-10 - Python 3.12: New Features and Performance Boosts [Python]"
        );
    }

    #[test]
    fn test_list_categories() {
        let (_tmp, site) = site();
        let out = lines(&site, "categories").unwrap();
        assert!(out[0].starts_with("Categories ("));
        assert!(out[1].starts_with("  Python ("));
    }

    #[test]
    fn test_list_routes() {
        let (_tmp, site) = site();
        let out = lines(&site, "route").unwrap();
        assert_eq!(out[1], "  /");
        assert_eq!(out[2], "  /blog/");
        assert!(out.contains(&"  /blog/mastering-python-pattern-matching/".to_string()));
    }

    #[test]
    fn test_list_guard() {
        let (_tmp, site) = site();
        let out = lines(&site, "guard").unwrap();
        assert_eq!(out[0], "Guard (enabled), devtools threshold 100px:");
        assert!(out.iter().any(|l| l.contains("Ctrl+Shift+I") && l.ends_with("block")));
        assert!(out.iter().any(|l| l.contains("F12") && l.ends_with("block")));
        assert!(out.iter().any(|l| l.contains("Ctrl+u") && l.ends_with("suppress")));
    }

    #[test]
    fn test_list_unknown_type() {
        let (_tmp, site) = site();
        assert!(lines(&site, "tag").is_err());
    }
}
