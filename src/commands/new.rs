//! Create a new post

use anyhow::{anyhow, bail, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::loader::{read_posts_file, write_posts_file, ContentLoader};
use crate::content::{defaults, FrontMatter, Post, PostCatalog};
use crate::Site;

/// Category for posts created without `--category`
pub const DEFAULT_CATEGORY: &str = "General";

/// Optional fields of a new post; blanks fall back to defaults
#[derive(Debug, Default, Clone)]
pub struct NewPostOptions {
    pub category: Option<String>,
    pub author: Option<String>,
    pub thumbnail: Option<String>,
}

/// Append a post to the posts data file and create its markdown body
///
/// Without a data file the built-in posts are written out first, so the
/// site keeps its existing cards.
pub fn create_post(site: &Site, title: &str, options: &NewPostOptions) -> Result<Post> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        bail!("Cannot derive a slug from title {:?}", title);
    }

    let loader = ContentLoader::new(site);
    let (posts_path, mut posts) = match loader.posts_file() {
        Some(path) => {
            let posts = read_posts_file(&path)?;
            (path, posts)
        }
        None => (default_posts_path(site), defaults::posts()),
    };

    if posts.iter().any(|p| p.slug == slug) {
        bail!("A post with slug `{}` already exists", slug);
    }

    let body_path = site.source_dir.join("_posts").join(format!("{}.md", slug));
    if body_path.exists() {
        bail!("File already exists: {:?}", body_path);
    }

    let pick = |value: &Option<String>, fallback: String| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or(fallback)
    };

    let post = Post::new(
        title.trim(),
        &slug,
        &pick(&options.author, site.config.author.clone()),
        chrono::Local::now().date_naive(),
        &pick(&options.category, DEFAULT_CATEGORY.to_string()),
        &pick(&options.thumbnail, format!("/images/thumbnails/{}.png", slug)),
    );

    posts.push(post.clone());
    // Validate the whole list before touching disk
    PostCatalog::new(posts.clone()).map_err(|e| anyhow!("Invalid post: {}", e))?;

    write_posts_file(&posts_path, &posts)?;
    tracing::debug!("Wrote {} posts to {:?}", posts.len(), posts_path);

    write_body(&body_path, title.trim())?;
    println!("Created: {:?}", body_path);

    Ok(post)
}

fn default_posts_path(site: &Site) -> PathBuf {
    site.source_dir.join("_data").join("posts.yml")
}

fn write_body(path: &Path, title: &str) -> Result<()> {
    let front_matter = FrontMatter {
        title: Some(title.to_string()),
        summary: None,
        tags: Vec::new(),
        extra: HashMap::new(),
    };
    let content = format!("---\n{}---\n\n", serde_yaml::to_string(&front_matter)?);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Run the new command
pub fn run(site: &Site, title: &str, options: &NewPostOptions) -> Result<()> {
    let post = create_post(site, title, options)?;
    tracing::info!("Added post `{}` in {}", post.slug, post.category);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Site) {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        (tmp, site)
    }

    #[test]
    fn test_new_post_seeds_defaults() {
        let (_tmp, site) = setup();
        let post = create_post(&site, "My First Rust Post", &NewPostOptions::default()).unwrap();

        assert_eq!(post.slug, "my-first-rust-post");
        assert_eq!(post.category, DEFAULT_CATEGORY);
        assert_eq!(post.author, site.config.author);
        assert_eq!(post.thumbnail, "/images/thumbnails/my-first-rust-post.png");

        let posts = read_posts_file(&default_posts_path(&site)).unwrap();
        assert_eq!(posts.len(), defaults::posts().len() + 1);
        assert_eq!(posts.last().unwrap().slug, "my-first-rust-post");

        let body = site.source_dir.join("_posts/my-first-rust-post.md");
        let raw = fs::read_to_string(body).unwrap();
        let (fm, _) = FrontMatter::parse(&raw).unwrap();
        assert_eq!(fm.title.as_deref(), Some("My First Rust Post"));
    }

    #[test]
    fn test_new_post_appends_to_existing_file() {
        let (_tmp, site) = setup();
        let path = site.source_dir.join("_data/posts.json");
        write_posts_file(&path, &[]).unwrap();

        let options = NewPostOptions {
            category: Some("Rust".to_string()),
            author: Some("Ann".to_string()),
            thumbnail: Some("  ".to_string()),
        };
        let post = create_post(&site, "Ownership: A Tour", &options).unwrap();
        assert_eq!(post.category, "Rust");
        assert_eq!(post.author, "Ann");
        assert_eq!(post.thumbnail, "/images/thumbnails/ownership-a-tour.png");

        let posts = read_posts_file(&path).unwrap();
        assert_eq!(posts.len(), 1);
        assert!(!default_posts_path(&site).exists());
    }

    #[test]
    fn test_new_post_rejects_duplicate_slug() {
        let (_tmp, site) = setup();
        create_post(&site, "Hello World", &NewPostOptions::default()).unwrap();
        let err = create_post(&site, "Hello, World!", &NewPostOptions::default()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_new_post_rejects_bad_thumbnail() {
        let (_tmp, site) = setup();
        let options = NewPostOptions {
            thumbnail: Some("images/x.png".to_string()),
            ..Default::default()
        };
        assert!(create_post(&site, "Bad Thumb", &options).is_err());
        assert!(!site.source_dir.join("_posts/bad-thumb.md").exists());
    }

    #[test]
    fn test_new_post_rejects_untitled() {
        let (_tmp, site) = setup();
        assert!(create_post(&site, "!!!", &NewPostOptions::default()).is_err());
    }
}
