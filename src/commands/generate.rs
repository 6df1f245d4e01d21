//! Generate static files

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Quiet period before a batch of changes triggers a rebuild
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Load content and render the whole site
pub fn run(site: &Site) -> Result<()> {
    let start = Instant::now();

    let loader = ContentLoader::new(site);
    let catalog = loader.load_posts()?;
    let pages = loader.load_pages()?;

    tracing::info!("Loaded {} posts and {} pages", catalog.len(), pages.len());

    let generator = Generator::new(site)?;
    generator.generate(&catalog, &pages)?;

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Paths whose changes trigger a rebuild
pub fn watch_targets(site: &Site) -> Vec<(PathBuf, RecursiveMode)> {
    let mut targets = Vec::new();
    if site.source_dir.exists() {
        targets.push((site.source_dir.clone(), RecursiveMode::Recursive));
    }
    let config_path = site.config_path();
    if config_path.exists() {
        targets.push((config_path, RecursiveMode::NonRecursive));
    }
    targets
}

/// Editor and VCS noise that should not trigger a rebuild
fn is_relevant(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.contains("node_modules")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}

/// Block on file events, regenerating after each debounced batch
///
/// The site is reopened on every rebuild so `_config.yml` edits apply.
/// `on_rebuilt` runs after each successful generation.
pub fn watch_blocking<F>(site: &Site, mut on_rebuilt: F) -> Result<()>
where
    F: FnMut(),
{
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(DEBOUNCE, tx)?;

    for (path, mode) in watch_targets(site) {
        debouncer.watcher().watch(&path, mode)?;
        tracing::debug!("Watching: {:?}", path);
    }

    for result in rx {
        match result {
            Ok(events) => {
                let changed: Vec<_> = events.iter().filter(|e| is_relevant(&e.path)).collect();
                if changed.is_empty() {
                    continue;
                }
                for event in &changed {
                    tracing::info!("File changed: {}", event.path.display());
                }

                match Site::new(&site.base_dir).and_then(|site| run(&site)) {
                    Ok(()) => on_rebuilt(),
                    Err(e) => tracing::error!("Generation failed: {:#}", e),
                }
            }
            Err(e) => tracing::error!("Watch error: {:?}", e),
        }
    }

    Ok(())
}

/// Watch for file changes and regenerate until interrupted
pub async fn watch(site: &Site) -> Result<()> {
    tracing::info!("Watching for changes. Press Ctrl+C to stop.");
    let site = site.clone();
    tokio::task::spawn_blocking(move || watch_blocking(&site, || {})).await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_generates_from_data_file() {
        let tmp = TempDir::new().unwrap();
        let data_dir = tmp.path().join("source/_data");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(
            data_dir.join("posts.yml"),
            r#"
- title: Only Post
  slug: only-post
  author: Ann
  date: 2024-05-01
  category: Rust
  thumbnail: /images/only.png
"#,
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        run(&site).unwrap();

        assert!(site.public_dir.join("blog/only-post/index.html").is_file());
        assert!(site.public_dir.join("category/rust/index.html").is_file());
        let index = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert_eq!(index.matches("<article data-card").count(), 1);
    }

    #[test]
    fn test_run_rejects_invalid_posts() {
        let tmp = TempDir::new().unwrap();
        let data_dir = tmp.path().join("source/_data");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(
            data_dir.join("posts.json"),
            r#"[{"title": "", "slug": "x", "author": "a", "date": "2024-01-01", "category": "c", "thumbnail": "/t.png"}]"#,
        )
        .unwrap();

        let site = Site::new(tmp.path()).unwrap();
        assert!(run(&site).is_err());
        assert!(!site.public_dir.join("index.html").exists());
    }

    #[test]
    fn test_watch_targets() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert!(watch_targets(&site).is_empty());

        fs::create_dir_all(&site.source_dir).unwrap();
        fs::write(site.config_path(), "title: x\n").unwrap();
        let targets = watch_targets(&site);
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].0, site.source_dir);
        assert_eq!(targets[1].1, RecursiveMode::NonRecursive);
    }

    #[test]
    fn test_is_relevant() {
        assert!(is_relevant(Path::new("source/_data/posts.yml")));
        assert!(!is_relevant(Path::new("source/.git/index")));
        assert!(!is_relevant(Path::new("source/about.md~")));
        assert!(!is_relevant(Path::new("source/.about.md.swp")));
    }
}
