//! Header and footer link resolution

use serde::Serialize;

use crate::config::{NavLink, SocialLink};
use crate::helpers::{is_external, url_for};

/// A link ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLink {
    pub label: String,
    pub href: String,
    pub external: bool,
    /// Whether this link points at the page being rendered
    pub active: bool,
}

/// Resolve a configured href against the site root
pub fn resolve(root: &str, href: &str) -> String {
    url_for(root, href)
}

/// Resolve a list of links, marking the one matching `current` as active
pub fn resolve_links(root: &str, links: &[NavLink], current: &str) -> Vec<ResolvedLink> {
    let current_url = url_for(root, current);
    let current = normalize(&current_url);
    links
        .iter()
        .map(|link| {
            let href = resolve(root, &link.href);
            let external = is_external(&link.href);
            ResolvedLink {
                label: link.label.clone(),
                active: !external && normalize(&href) == current,
                href,
                external,
            }
        })
        .collect()
}

/// Social icons render with the icon name as their label
pub fn resolve_social(root: &str, links: &[SocialLink]) -> Vec<ResolvedLink> {
    links
        .iter()
        .map(|link| ResolvedLink {
            label: link.icon.clone(),
            href: resolve(root, &link.href),
            external: is_external(&link.href),
            active: false,
        })
        .collect()
}

/// `/blog` and `/blog/` name the same page
fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_nav_links_resolve_to_declared_paths() {
        let config = SiteConfig::default();
        let links = resolve_links("/", &config.nav, "/");
        let hrefs: Vec<_> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/", "/blog", "/about", "/contact"]);
        assert!(links.iter().all(|l| !l.external));
    }

    #[test]
    fn test_nav_links_under_subdirectory_root() {
        let config = SiteConfig::default();
        let links = resolve_links("/stack/", &config.nav, "/");
        let hrefs: Vec<_> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["/stack/", "/stack/blog", "/stack/about", "/stack/contact"]
        );
    }

    #[test]
    fn test_active_link() {
        let config = SiteConfig::default();
        let links = resolve_links("/", &config.nav, "/blog/");
        let active: Vec<_> = links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(active, vec!["Blog"]);
    }

    #[test]
    fn test_footer_links() {
        let config = SiteConfig::default();
        let links = resolve_links("/", &config.footer.links, "/");
        assert_eq!(links[0].href, "/terms");
        assert_eq!(links[4].href, "/contact");

        let social = resolve_social("/", &config.footer.social);
        assert_eq!(social[1].label, "github");
        assert_eq!(social[1].href, "https://github.com/yourprofile");
        assert!(social.iter().all(|l| l.external));
    }
}
