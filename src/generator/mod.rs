//! Generator module - renders the site into `public/` using the built-in Tera templates

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tera::Context;
use walkdir::WalkDir;

use crate::client::{
    nav, GuardScript, LikeBoard, ParticleOptions, ThemeMode, APP_JS, GUARD_JS, SITE_CSS,
};
use crate::content::{Page, Post, PostCatalog};
use crate::helpers::{encode_path, full_url_for, is_external, script_json, strip_html, truncate_words};
use crate::templates::{
    ActionData, AssetsData, BrandData, CardData, CategoryData, ChromeData, GridData, HeroData,
    NavPost, PageData, PostPageData, SearchData, SiteData, TemplateRenderer, ToggleData,
};
use crate::Site;

const APP_JS_PATH: &str = "js/app.js";
const GUARD_JS_PATH: &str = "js/guard.js";
const SITE_CSS_PATH: &str = "css/site.css";
const SEARCH_INDEX_PATH: &str = "search.json";

/// Meta description length for posts without a summary
const DESCRIPTION_LENGTH: usize = 160;

/// One entry of `search.json`
#[derive(Debug, Serialize)]
struct SearchEntry<'a> {
    title: &'a str,
    url: String,
    category: &'a str,
    author: &'a str,
    date: String,
}

/// Static site generator using Tera templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
    guard: GuardScript,
    theme: ThemeMode,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        let guard = GuardScript::new(&site.config.guard);
        let theme = ThemeMode::from_str(&site.config.default_theme).unwrap_or_else(|e| {
            tracing::warn!("{}, falling back to system", e);
            ThemeMode::System
        });

        Ok(Self {
            site: site.clone(),
            renderer,
            guard,
            theme,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, catalog: &PostCatalog, pages: &[Page]) -> Result<()> {
        let public_dir = &self.site.public_dir;
        fs::create_dir_all(public_dir)
            .map_err(|e| anyhow!("Failed to create {:?}: {}", public_dir, e))?;

        self.copy_source_assets()?;

        let site_data = self.build_site_data();
        let assets = self.build_assets_data()?;
        let board = LikeBoard::new(catalog.len());
        let all_cards = self.build_cards(catalog, &board, |_| true);

        self.generate_index(&site_data, &assets, &all_cards)?;
        self.generate_blog(&site_data, &assets, &all_cards)?;
        self.generate_posts(catalog, &site_data, &assets)?;
        let categories = self.generate_categories(catalog, &board, &site_data, &assets)?;
        self.generate_pages(pages, &site_data, &assets)?;

        self.write_scripts()?;
        self.generate_search_index(catalog)?;

        tracing::info!(
            "Generated {} posts, {} categories and {} pages",
            catalog.len(),
            categories,
            pages.len()
        );

        Ok(())
    }

    /// Every page path the generator renders, root-relative
    pub fn routes(&self, catalog: &PostCatalog, pages: &[Page]) -> Vec<String> {
        let root = &self.site.config.root;
        let mut routes = vec![nav::resolve(root, "/"), nav::resolve(root, "/blog/")];
        routes.extend(catalog.iter().map(|p| nav::resolve(root, &p.href())));
        routes.extend(
            catalog
                .categories()
                .keys()
                .map(|name| nav::resolve(root, &format!("/category/{}/", slug::slugify(name)))),
        );
        routes.extend(pages.iter().map(|p| nav::resolve(root, &p.href())));
        routes
    }

    fn build_site_data(&self) -> SiteData {
        let config = &self.site.config;
        SiteData {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            url: config.url.clone(),
            root: config.root.clone(),
            default_theme: self.theme.to_string(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Header, hero and footer with `current` marked in the nav
    fn build_chrome(&self, current: &str) -> ChromeData {
        let config = &self.site.config;
        let root = &config.root;
        let brand = &config.brand;

        let actions = config
            .hero
            .actions
            .iter()
            .map(|a| ActionData {
                label: a.label.clone(),
                href: nav::resolve(root, &a.href),
                icon: a.icon.clone(),
                aria_label: if a.aria_label.is_empty() {
                    a.label.clone()
                } else {
                    a.aria_label.clone()
                },
                primary: a.primary,
                external: is_external(&a.href),
            })
            .collect();

        ChromeData {
            brand: BrandData {
                logo: nav::resolve(root, &encode_path(&brand.logo)),
                logo_alt: brand.logo_alt.clone(),
                prefix: brand.prefix.clone(),
                accent: brand.accent.clone(),
            },
            home_href: nav::resolve(root, "/"),
            blog_href: nav::resolve(root, "/blog/"),
            nav: nav::resolve_links(root, &config.nav, current),
            search: SearchData {
                enabled: config.search.enabled,
                placeholder: config.search.placeholder.clone(),
            },
            toggle: ToggleData {
                light_icon: nav::resolve(root, &brand.light_toggle_icon),
                dark_icon: nav::resolve(root, &brand.dark_toggle_icon),
                initial_icon: nav::resolve(root, self.theme.toggle_icon(brand)),
            },
            hero: HeroData {
                greeting: config.hero.greeting.clone(),
                name: config.hero.name.clone(),
                tagline: config.hero.tagline.clone(),
                interests: config.hero.interests.clone(),
                welcome: config.hero.welcome.clone(),
                actions,
            },
            footer_links: nav::resolve_links(root, &config.footer.links, current),
            social: nav::resolve_social(root, &config.footer.social),
            copyright: config.footer.copyright.clone(),
        }
    }

    fn build_assets_data(&self) -> Result<AssetsData> {
        let config = &self.site.config;
        let root = &config.root;
        let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());

        let (guard_js, guard_payload, guard_cdn) = if self.guard.enabled() {
            (
                Some(nav::resolve(root, GUARD_JS_PATH)),
                Some(script_json(&self.guard.payload())?),
                self.guard.cdn_script().map(str::to_string),
            )
        } else {
            (None, None, None)
        };

        let (particles_js, particles_options) = match non_empty(&config.cdn.particles) {
            Some(js) if config.particles.enabled => (
                Some(js),
                Some(script_json(&ParticleOptions::from_config(&config.particles))?),
            ),
            _ => (None, None),
        };

        Ok(AssetsData {
            css: nav::resolve(root, SITE_CSS_PATH),
            app_js: nav::resolve(root, APP_JS_PATH),
            tailwind: non_empty(&config.cdn.tailwind),
            font: non_empty(&config.cdn.font),
            guard_js,
            guard_payload,
            guard_cdn,
            particles_js,
            particles_options,
        })
    }

    /// Cards for the posts accepted by `keep`, indexed by list position
    fn build_cards<F>(&self, catalog: &PostCatalog, board: &LikeBoard, keep: F) -> Vec<CardData>
    where
        F: Fn(&Post) -> bool,
    {
        let root = &self.site.config.root;
        catalog
            .iter()
            .enumerate()
            .filter(|(_, post)| keep(post))
            .map(|(index, post)| {
                let likes = board.state(index).unwrap_or_default();
                CardData {
                    index,
                    title: post.title.clone(),
                    href: nav::resolve(root, &post.href()),
                    thumbnail: nav::resolve(root, &encode_path(&post.thumbnail)),
                    category: post.category.clone(),
                    category_href: nav::resolve(root, &post.category_href()),
                    author: post.author.clone(),
                    date: post.date.format("%Y-%m-%d").to_string(),
                    likes: likes.count,
                    liked: likes.liked,
                    search: format!("{} {} {}", post.title, post.category, post.author)
                        .to_lowercase(),
                }
            })
            .collect()
    }

    fn grid_data(&self) -> GridData {
        GridData {
            heading: self.site.config.grid.heading.clone(),
            heading_accent: self.site.config.grid.heading_accent.clone(),
        }
    }

    /// Create a base context with the variables every template reads
    fn create_base_context(&self, site_data: &SiteData, assets: &AssetsData, path: &str) -> Context {
        let mut context = Context::new();
        context.insert("site", site_data);
        context.insert("assets", assets);
        context.insert("chrome", &self.build_chrome(path));
        context.insert("canonical_url", &full_url_for(&self.site.config, path));
        context.insert("current_path", path);
        context
    }

    fn generate_index(
        &self,
        site_data: &SiteData,
        assets: &AssetsData,
        cards: &[CardData],
    ) -> Result<()> {
        let mut context = self.create_base_context(site_data, assets, "/");
        context.insert("grid", &self.grid_data());
        context.insert("cards", cards);

        let html = self.renderer.render("index.html", &context)?;
        self.write_output("index.html", &html)
    }

    fn generate_blog(
        &self,
        site_data: &SiteData,
        assets: &AssetsData,
        cards: &[CardData],
    ) -> Result<()> {
        let mut context = self.create_base_context(site_data, assets, "/blog/");
        context.insert("page_title", "Blog");
        context.insert("grid", &self.grid_data());
        context.insert("cards", cards);
        context.insert("category", &None::<CategoryData>);

        let html = self.renderer.render("blog.html", &context)?;
        self.write_output("blog/index.html", &html)
    }

    /// Generate individual post pages; prev/next follow list order
    fn generate_posts(
        &self,
        catalog: &PostCatalog,
        site_data: &SiteData,
        assets: &AssetsData,
    ) -> Result<()> {
        let root = &self.site.config.root;
        let posts = catalog.as_slice();
        let nav_post = |post: &Post| NavPost {
            title: post.title.clone(),
            href: nav::resolve(root, &post.href()),
        };

        for (i, post) in posts.iter().enumerate() {
            let prev_post = i.checked_sub(1).and_then(|j| posts.get(j)).map(nav_post);
            let next_post = posts.get(i + 1).map(nav_post);

            let summary = post.summary.clone().or_else(|| {
                post.has_body()
                    .then(|| truncate_words(strip_html(&post.content).trim(), DESCRIPTION_LENGTH))
            });

            let data = PostPageData {
                title: post.title.clone(),
                author: post.author.clone(),
                date: post.date.format("%Y-%m-%d").to_string(),
                category: post.category.clone(),
                category_href: nav::resolve(root, &post.category_href()),
                thumbnail: nav::resolve(root, &encode_path(&post.thumbnail)),
                content: post.content.clone(),
                summary,
                tags: post.tags.clone(),
            };

            let href = post.href();
            let mut context = self.create_base_context(site_data, assets, &href);
            context.insert("post", &data);
            context.insert("prev_post", &prev_post);
            context.insert("next_post", &next_post);

            let html = self.renderer.render("post.html", &context)?;
            self.write_output(&format!("{}index.html", href.trim_start_matches('/')), &html)?;
        }

        Ok(())
    }

    /// Generate one filtered grid per category, returning how many were written
    fn generate_categories(
        &self,
        catalog: &PostCatalog,
        board: &LikeBoard,
        site_data: &SiteData,
        assets: &AssetsData,
    ) -> Result<usize> {
        let categories = catalog.categories();

        for (name, count) in &categories {
            let category_slug = slug::slugify(name);
            let cards = self.build_cards(catalog, board, |p| p.category_slug() == category_slug);

            let path = format!("/category/{}/", category_slug);
            let mut context = self.create_base_context(site_data, assets, &path);
            context.insert("page_title", name);
            context.insert("grid", &self.grid_data());
            context.insert("cards", &cards);
            context.insert(
                "category",
                &Some(CategoryData {
                    name: name.clone(),
                    slug: category_slug.clone(),
                    count: *count,
                }),
            );

            let html = self.renderer.render("blog.html", &context)?;
            self.write_output(&format!("category/{}/index.html", category_slug), &html)?;
        }

        Ok(categories.len())
    }

    /// Generate standalone pages
    fn generate_pages(&self, pages: &[Page], site_data: &SiteData, assets: &AssetsData) -> Result<()> {
        for page in pages {
            let href = page.href();
            let mut context = self.create_base_context(site_data, assets, &href);
            context.insert(
                "page",
                &PageData {
                    title: page.title.clone(),
                    content: page.content.clone(),
                },
            );

            let html = self.renderer.render("page.html", &context)?;
            self.write_output(&format!("{}/index.html", page.name), &html)?;
        }

        Ok(())
    }

    /// Write the client scripts and stylesheet
    fn write_scripts(&self) -> Result<()> {
        self.write_output(APP_JS_PATH, APP_JS)?;
        self.write_output(SITE_CSS_PATH, SITE_CSS)?;

        let guard_path = self.site.public_dir.join(GUARD_JS_PATH);
        if self.guard.enabled() {
            self.write_output(GUARD_JS_PATH, GUARD_JS)?;
        } else if guard_path.exists() {
            // Left over from a run with the guard enabled
            fs::remove_file(&guard_path)?;
        }

        Ok(())
    }

    /// Generate search index (JSON), newest first
    fn generate_search_index(&self, catalog: &PostCatalog) -> Result<()> {
        let root = &self.site.config.root;
        let entries: Vec<SearchEntry> = catalog
            .newest_first()
            .into_iter()
            .map(|p| SearchEntry {
                title: &p.title,
                url: nav::resolve(root, &p.href()),
                category: &p.category,
                author: &p.author,
                date: p.date.format("%Y-%m-%d").to_string(),
            })
            .collect();

        let json = serde_json::to_string_pretty(&entries)?;
        self.write_output(SEARCH_INDEX_PATH, &json)?;
        tracing::info!("Generated {}", SEARCH_INDEX_PATH);

        Ok(())
    }

    /// Copy everything under `source/` except data, post bodies and markdown
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.site.source_dir;
        if !source_dir.is_dir() {
            tracing::debug!("No source directory at {:?}", source_dir);
            return Ok(());
        }

        let mut copied = 0usize;
        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if matches!(ext, Some("md") | Some("markdown")) {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            if relative
                .components()
                .any(|c| c.as_os_str() == "_data" || c.as_os_str() == "_posts")
            {
                continue;
            }

            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)
                .map_err(|e| anyhow!("Failed to copy {:?} to {:?}: {}", path, dest, e))?;
            copied += 1;
        }

        tracing::debug!("Copied {} source assets", copied);
        Ok(())
    }

    /// Write `content` to a path relative to `public/`
    fn write_output(&self, relative: &str, content: &str) -> Result<()> {
        let output_path = self.site.public_dir.join(Path::new(relative));
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(&output_path, content)
            .map_err(|e| anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }
}
