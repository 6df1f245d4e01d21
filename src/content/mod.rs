//! Content module - the post list, post bodies and standalone pages

mod catalog;
pub mod defaults;
mod frontmatter;
pub mod loader;
mod markdown;
mod page;
mod post;

pub use catalog::PostCatalog;
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use page::Page;
pub use post::{Post, PostError};
