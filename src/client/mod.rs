//! Client-side behaviour of the generated pages
//!
//! Each submodule models one interactive piece of the page shell. The
//! generator renders initial state from these models and ships the
//! matching scripts below.

mod guard;
mod likes;
pub mod nav;
mod particles;
mod theme;

pub use guard::{
    DevToolsDetector, GuardAction, GuardPayload, GuardScript, KeyEvent, KeyGuard, KeyRule,
    WindowGeometry,
};
pub use likes::{LikeBoard, LikeState};
pub use particles::ParticleOptions;
pub use theme::ThemeMode;

/// Like counters, theme toggle and card search
pub const APP_JS: &str = include_str!("assets/app.js");

/// Anti-inspection guard, driven by `GuardPayload`
pub const GUARD_JS: &str = include_str!("assets/guard.js");

/// Styles outside the utility classes
pub const SITE_CSS: &str = include_str!("assets/site.css");
