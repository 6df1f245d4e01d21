//! Standalone page model

use serde::Serialize;

/// A page authored as `source/<name>.md`, such as `about` or `terms`
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Path segment without slashes, e.g. `privacy-policy`
    pub name: String,
    pub title: String,
    /// Rendered HTML
    pub content: String,
}

impl Page {
    /// Title used when the front-matter has none: `privacy-policy` -> `Privacy Policy`
    pub fn title_from_name(name: &str) -> String {
        name.split(['-', '_'])
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    pub fn href(&self) -> String {
        format!("/{}/", self.name)
    }
}
