//! Site configuration (_config.yml)

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::chrome::{BrandConfig, FooterConfig, GridConfig, HeroConfig, NavLink, SearchConfig};
use super::effects::{CdnConfig, GuardConfig, ParticlesConfig};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Appearance
    /// Initial color scheme: light, dark or system
    pub default_theme: String,
    pub brand: BrandConfig,
    pub nav: Vec<NavLink>,
    pub search: SearchConfig,
    pub hero: HeroConfig,
    pub grid: GridConfig,
    pub footer: FooterConfig,

    // Client scripts
    pub particles: ParticlesConfig,
    pub guard: GuardConfig,
    pub cdn: CdnConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "StackScript | Tech & Code Blog".to_string(),
            description: "StackScript is a blog where developers explore the latest in coding, \
                software development, and tech innovations. Stay updated with tutorials, \
                insights, and best practices."
                .to_string(),
            author: "Santhosh Raj".to_string(),
            language: "en".to_string(),

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            default_theme: "system".to_string(),
            brand: BrandConfig::default(),
            nav: vec![
                NavLink::new("Home", "/"),
                NavLink::new("Blog", "/blog"),
                NavLink::new("About", "/about"),
                NavLink::new("Contact", "/contact"),
            ],
            search: SearchConfig::default(),
            hero: HeroConfig::default(),
            grid: GridConfig::default(),
            footer: FooterConfig::default(),

            particles: ParticlesConfig::default(),
            guard: GuardConfig::default(),
            cdn: CdnConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse {:?}: {}", path, e))?;
        Ok(config)
    }

    /// Internal link targets from the header and footer, without the leading slash
    ///
    /// These are the standalone pages a site may provide as `source/<name>.md`.
    pub fn page_targets(&self) -> Vec<String> {
        let mut targets: Vec<String> = Vec::new();
        let hrefs = self
            .nav
            .iter()
            .map(|l| l.href.as_str())
            .chain(self.footer.links.iter().map(|l| l.href.as_str()));

        for href in hrefs {
            if crate::helpers::is_external(href) || href.starts_with('#') {
                continue;
            }
            let name = href.trim_matches('/');
            // The home page, blog index, posts and category pages are generated, never authored
            if name.is_empty()
                || name == "blog"
                || name.starts_with("blog/")
                || name.starts_with("category/")
            {
                continue;
            }
            if !targets.iter().any(|t| t == name) {
                targets.push(name.to_string());
            }
        }

        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "StackScript | Tech & Code Blog");
        assert_eq!(config.default_theme, "system");
        assert_eq!(config.nav.len(), 4);
        assert_eq!(config.nav[1].href, "/blog");
        assert!(config.guard.enabled);
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
title: My Blog
author: Test User
default_theme: dark
guard:
  enabled: false
particles:
  count: 40
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.default_theme, "dark");
        assert!(!config.guard.enabled);
        // Unspecified fields of a section keep their defaults
        assert_eq!(config.guard.devtools_threshold, 100);
        assert_eq!(config.particles.count, 40);
        assert_eq!(config.particles.color, "#00ccff");
        assert_eq!(config.nav.len(), 4);
    }

    #[test]
    fn test_extra_fields_are_kept() {
        let config: SiteConfig = serde_yaml::from_str("analytics_id: UA-1\n").unwrap();
        assert_eq!(
            config.extra.get("analytics_id").and_then(|v| v.as_str()),
            Some("UA-1")
        );
    }

    #[test]
    fn test_page_targets() {
        let config = SiteConfig::default();
        let targets = config.page_targets();
        assert_eq!(
            targets,
            vec![
                "about",
                "contact",
                "terms",
                "privacy-policy",
                "cookie-policy",
                "about-us"
            ]
        );
    }

    #[test]
    fn test_page_targets_skip_generated_routes() {
        let mut config = SiteConfig::default();
        config.footer.links.clear();
        config.nav = vec![
            NavLink::new("Python", "/category/python/"),
            NavLink::new("Post", "/blog/some-post"),
            NavLink::new("About", "/about"),
        ];

        assert_eq!(config.page_targets(), vec!["about"]);
    }
}
