//! Header, hero, grid and footer configuration

use serde::{Deserialize, Serialize};

/// A labelled link in the header or footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Footer social icon link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name: twitter, github or linkedin
    pub icon: String,
    pub href: String,
}

impl SocialLink {
    pub fn new(icon: &str, href: &str) -> Self {
        Self {
            icon: icon.to_string(),
            href: href.to_string(),
        }
    }
}

/// Hero call-to-action button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLink {
    pub label: String,
    pub href: String,
    /// Icon name: book or github
    pub icon: String,
    /// Accessible label for the button
    pub aria_label: String,
    /// Render as the primary (blue) button
    #[serde(default)]
    pub primary: bool,
}

/// Logo and wordmark shown in the header and footer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub logo: String,
    pub logo_alt: String,
    /// Plain part of the wordmark
    pub prefix: String,
    /// Highlighted part of the wordmark
    pub accent: String,
    pub light_toggle_icon: String,
    pub dark_toggle_icon: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            logo: "/Logo.png".to_string(),
            logo_alt: "StackScripts Logo".to_string(),
            prefix: "Stack".to_string(),
            accent: "Scripts".to_string(),
            light_toggle_icon: "/light-toggle.svg".to_string(),
            dark_toggle_icon: "/dark-toggle.svg".to_string(),
        }
    }
}

/// Header search box
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub enabled: bool,
    pub placeholder: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            placeholder: "Search...".to_string(),
        }
    }
}

/// Hero banner text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub greeting: String,
    pub name: String,
    pub tagline: String,
    pub interests: String,
    pub welcome: String,
    pub actions: Vec<ActionLink>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            greeting: "Hi, I'm".to_string(),
            name: "Santhosh Raj".to_string(),
            tagline: "Passionate about".to_string(),
            interests: "Python, Django, React, Tailwind CSS, and AI.".to_string(),
            welcome: "A place where technology meets creativity. Enjoy high-quality content, \
                tutorials, and deep insights into web development, AI, and more. \
                Let's build something amazing together!"
                .to_string(),
            actions: vec![
                ActionLink {
                    label: "Read My Blog".to_string(),
                    href: "#blog".to_string(),
                    icon: "book".to_string(),
                    aria_label: "Read My Blog".to_string(),
                    primary: true,
                },
                ActionLink {
                    label: "GitHub".to_string(),
                    href: "https://github.com/yourgithub".to_string(),
                    icon: "github".to_string(),
                    aria_label: "Visit My GitHub Profile".to_string(),
                    primary: false,
                },
            ],
        }
    }
}

/// Post grid heading
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub heading: String,
    pub heading_accent: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            heading: "🚀 Latest".to_string(),
            heading_accent: "Blog Posts".to_string(),
        }
    }
}

/// Footer links and copyright line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub links: Vec<NavLink>,
    pub social: Vec<SocialLink>,
    pub copyright: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            links: vec![
                NavLink::new("Terms of Use", "/terms"),
                NavLink::new("Privacy Policy", "/privacy-policy"),
                NavLink::new("Cookie Policy", "/cookie-policy"),
                NavLink::new("About Us", "/about-us"),
                NavLink::new("Contact", "/contact"),
            ],
            social: vec![
                SocialLink::new("twitter", "https://twitter.com/yourprofile"),
                SocialLink::new("github", "https://github.com/yourprofile"),
                SocialLink::new("linkedin", "https://linkedin.com/in/yourprofile"),
            ],
            copyright: "© 2025 MetaBlog. All rights reserved.".to_string(),
        }
    }
}
