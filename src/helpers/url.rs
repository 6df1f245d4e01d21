//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped in asset paths; `/` and unreserved characters stay as-is
const PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Whether a link leaves the site
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("//")
        || href.starts_with("mailto:")
}

/// Join a path onto the site root with exactly one slash
///
/// External URLs and in-page fragments pass through unchanged.
///
/// # Examples
/// ```ignore
/// url_for("/blog/", "/css/site.css") // -> "/blog/css/site.css"
/// ```
pub fn url_for(root: &str, path: &str) -> String {
    if is_external(path) || path.starts_with('#') {
        return path.to_string();
    }

    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let path = url_for(&config.root, path);
    if is_external(&path) {
        return path;
    }
    format!("{}{}", config.url.trim_end_matches('/'), path)
}

/// Percent-encode an asset path, leaving its separators intact
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        assert_eq!(url_for("/", "/"), "/");
        assert_eq!(url_for("/", "/blog"), "/blog");
        assert_eq!(url_for("/", "about"), "/about");
        assert_eq!(url_for("/stack/", "/css/site.css"), "/stack/css/site.css");
        assert_eq!(url_for("/stack", "/"), "/stack/");
    }

    #[test]
    fn test_url_for_passes_through() {
        assert_eq!(
            url_for("/stack/", "https://github.com/yourgithub"),
            "https://github.com/yourgithub"
        );
        assert_eq!(url_for("/stack/", "#blog"), "#blog");
        assert_eq!(url_for("/stack/", "mailto:me@x.dev"), "mailto:me@x.dev");
    }

    #[test]
    fn test_full_url_for() {
        let mut config = SiteConfig::default();
        config.url = "https://stackscripts.dev/".to_string();
        config.root = "/".to_string();
        assert_eq!(
            full_url_for(&config, "/blog/x/"),
            "https://stackscripts.dev/blog/x/"
        );
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(
            encode_path("/images/thumbnails/my post.png"),
            "/images/thumbnails/my%20post.png"
        );
        assert_eq!(
            encode_path("/images/thumbnails/django_vs_flask.jpeg"),
            "/images/thumbnails/django_vs_flask.jpeg"
        );
    }
}
