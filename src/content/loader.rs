//! Content loader - loads the post list, post bodies and pages from the source directory

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{defaults, FrontMatter, MarkdownRenderer, Page, Post, PostCatalog};
use crate::Site;

/// Candidate post list files under `source/_data`, in lookup order
pub const POSTS_FILES: &[&str] = &["posts.yml", "posts.yaml", "posts.json", "posts.toml"];

/// TOML has no top-level arrays, so posts live under `[[posts]]`
#[derive(Serialize, Deserialize)]
struct TomlPosts {
    posts: Vec<Post>,
}

/// Loads content from the source directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// The first posts data file that exists, if any
    pub fn posts_file(&self) -> Option<PathBuf> {
        let data_dir = self.site.source_dir.join("_data");
        POSTS_FILES
            .iter()
            .map(|name| data_dir.join(name))
            .find(|path| path.is_file())
    }

    /// Load and validate the post list, attaching any markdown bodies
    pub fn load_posts(&self) -> Result<PostCatalog> {
        let records = match self.posts_file() {
            Some(path) => {
                let posts = read_posts_file(&path)?;
                tracing::debug!("Loaded {} post records from {:?}", posts.len(), path);
                posts
            }
            None => {
                tracing::info!("No posts data file found, using built-in posts");
                defaults::posts()
            }
        };

        let mut catalog = PostCatalog::new(records).map_err(|e| anyhow!("Invalid posts: {}", e))?;

        let posts_dir = self.site.source_dir.join("_posts");
        for post in catalog.iter_mut() {
            let body_path = posts_dir.join(format!("{}.md", post.slug));
            if !body_path.is_file() {
                continue;
            }
            if let Err(e) = self.attach_body(post, &body_path) {
                tracing::warn!("Failed to load post body {:?}: {}", body_path, e);
            }
        }

        Ok(catalog)
    }

    fn attach_body(&self, post: &mut Post, path: &Path) -> Result<()> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw)?;
        post.content = self.renderer.render(body)?;
        post.summary = fm.summary;
        post.tags = fm.tags;
        Ok(())
    }

    /// Load the standalone pages that header and footer links point at
    pub fn load_pages(&self) -> Result<Vec<Page>> {
        let mut pages = Vec::new();

        for name in self.site.config.page_targets() {
            let path = self.site.source_dir.join(format!("{}.md", name));
            if !path.is_file() {
                tracing::debug!("No page source for /{}/", name);
                continue;
            }
            match self.load_page(&name, &path) {
                Ok(page) => pages.push(page),
                Err(e) => tracing::warn!("Failed to load page {:?}: {}", path, e),
            }
        }

        Ok(pages)
    }

    fn load_page(&self, name: &str, path: &Path) -> Result<Page> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw)?;
        Ok(Page {
            name: name.to_string(),
            title: fm.title.unwrap_or_else(|| Page::title_from_name(name)),
            content: self.renderer.render(body)?,
        })
    }
}

/// Parse a posts data file according to its extension
pub fn read_posts_file(path: &Path) -> Result<Vec<Post>> {
    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    let posts = match ext {
        "yml" | "yaml" => serde_yaml::from_str::<Option<Vec<Post>>>(&content)
            .map(Option::unwrap_or_default)
            .map_err(|e| anyhow!("Failed to parse {:?}: {}", path, e))?,
        "json" => serde_json::from_str::<Vec<Post>>(&content)
            .map_err(|e| anyhow!("Failed to parse {:?}: {}", path, e))?,
        "toml" => toml::from_str::<TomlPosts>(&content)
            .map(|t| t.posts)
            .map_err(|e| anyhow!("Failed to parse {:?}: {}", path, e))?,
        _ => bail!("Unsupported posts file format: {:?}", path),
    };

    Ok(posts)
}

/// Write a post list back in the format implied by the file extension
pub fn write_posts_file(path: &Path, posts: &[Post]) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let content = match ext {
        "yml" | "yaml" => serde_yaml::to_string(posts)?,
        "json" => serde_json::to_string_pretty(posts)?,
        "toml" => toml::to_string(&TomlPosts {
            posts: posts.to_vec(),
        })?,
        _ => bail!("Unsupported posts file format: {:?}", path),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
