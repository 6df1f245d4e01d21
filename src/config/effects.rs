//! Particle background, anti-inspection guard and CDN configuration

use serde::{Deserialize, Serialize};

use crate::client::GuardAction;

/// Decorative particle background
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    pub enabled: bool,
    pub count: u32,
    pub color: String,
    pub shape: String,
    pub opacity: f64,
    pub size: f64,
    pub speed: f64,
    pub direction: String,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            color: "#00ccff".to_string(),
            shape: "circle".to_string(),
            opacity: 0.6,
            size: 2.0,
            speed: 0.8,
            direction: "none".to_string(),
        }
    }
}

/// One group of keyboard shortcuts handled by the guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRuleConfig {
    pub keys: Vec<String>,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ignore_case: bool,
    pub action: GuardAction,
}

/// Client-side anti-inspection guard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub enabled: bool,
    pub block_context_menu: bool,
    pub key_rules: Vec<KeyRuleConfig>,
    /// Outer/inner window size gap, in pixels, above which dev tools are assumed open
    pub devtools_threshold: u32,
    pub detect_devtools: bool,
    pub redirect_url: String,
    pub blocked_message: String,
    pub detected_message: String,
    pub debugger_trap: bool,
    /// Delay between `debugger` traps; raised to at least 100 ms in the page payload
    pub debugger_interval_ms: u32,
    /// Extra third-party blocker loaded after the page body
    pub cdn_script: Option<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        let keys = |ks: &[&str]| ks.iter().map(|k| k.to_string()).collect::<Vec<_>>();
        Self {
            enabled: true,
            block_context_menu: true,
            key_rules: vec![
                // "Shift" matches here too, so Ctrl+Shift alone is also suppressed
                KeyRuleConfig {
                    keys: keys(&["u", "s", "p", "Shift"]),
                    ctrl: true,
                    shift: false,
                    ignore_case: true,
                    action: GuardAction::Suppress,
                },
                KeyRuleConfig {
                    keys: keys(&["F12"]),
                    ctrl: false,
                    shift: false,
                    ignore_case: false,
                    action: GuardAction::Block,
                },
                KeyRuleConfig {
                    keys: keys(&["I", "J", "C"]),
                    ctrl: true,
                    shift: true,
                    ignore_case: false,
                    action: GuardAction::Block,
                },
            ],
            devtools_threshold: 100,
            detect_devtools: true,
            redirect_url: "about:blank".to_string(),
            blocked_message: "DevTools are disabled!".to_string(),
            detected_message: "DevTools detected! Redirecting...".to_string(),
            debugger_trap: false,
            debugger_interval_ms: 1000,
            cdn_script: Some("https://cdn.jsdelivr.net/npm/disable-devtool@latest".to_string()),
        }
    }
}

/// Third-party runtime scripts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CdnConfig {
    /// Utility-class runtime; empty to omit
    pub tailwind: String,
    /// tsParticles bundle; empty to omit
    pub particles: String,
    pub font: String,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            tailwind: "https://cdn.tailwindcss.com".to_string(),
            particles: "https://cdn.jsdelivr.net/npm/@tsparticles/slim@3/tsparticles.slim.bundle.min.js"
                .to_string(),
            font: "https://fonts.googleapis.com/css2?family=Work+Sans:wght@400;600;700;800&display=swap"
                .to_string(),
        }
    }
}
