//! Initialize a new StackScripts site

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::defaults;
use crate::content::loader::write_posts_file;
use crate::content::Page;

const CONFIG_HEADER: &str = "# StackScripts site configuration\n\
# Every key is optional; removed keys fall back to these defaults.\n\n";

/// Scaffold a site in `target_dir` with every default written out
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        bail!("A site already exists at {:?}", target_dir);
    }

    let config = SiteConfig::default();
    let source_dir = target_dir.join(&config.source_dir);

    fs::create_dir_all(source_dir.join("_data"))?;
    fs::create_dir_all(source_dir.join("_posts"))?;
    fs::create_dir_all(source_dir.join("images/thumbnails"))?;

    let yaml = serde_yaml::to_string(&config)?;
    fs::write(&config_path, format!("{}{}", CONFIG_HEADER, yaml))?;
    tracing::debug!("Wrote {:?}", config_path);

    write_posts_file(&source_dir.join("_data/posts.yml"), &defaults::posts())?;

    // A stub for each page the header and footer link to
    for name in config.page_targets() {
        let path = source_dir.join(format!("{}.md", name));
        let title = Page::title_from_name(&name);
        fs::write(&path, format!("---\ntitle: {}\n---\n\n# {}\n", title, title))?;
        tracing::debug!("Wrote {:?}", path);
    }

    Ok(())
}
