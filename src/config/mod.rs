//! Configuration module

mod chrome;
mod effects;
mod site;

pub use chrome::{
    ActionLink, BrandConfig, FooterConfig, GridConfig, HeroConfig, NavLink, SearchConfig,
    SocialLink,
};
pub use effects::{CdnConfig, GuardConfig, KeyRuleConfig, ParticlesConfig};
pub use site::SiteConfig;
